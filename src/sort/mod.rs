//! Sorting core (pure).
//!
//! Key construction, toggle state and the activation handler. Nothing here
//! touches HTML text or the terminal.

pub mod controller;
pub mod key;
pub mod state;

pub use controller::{order_rows, Activation, SortController};
pub use key::{strip_markup, KeyBuilder};
pub use state::SortState;
