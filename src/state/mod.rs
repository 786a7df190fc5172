//! Viewer state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod mouse_handler;

pub use app_state::AppState;
pub use mouse_handler::{detect_header_click, HeaderClick, HeaderLayout};
