//! Domain model types (pure).
//!
//! Tables, rows and cells as plain data, plus the error taxonomy.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod table;

// Re-export for convenience
pub use error::{ActivationParseError, AppError, InputError};
pub use identifiers::TableId;
pub use key_action::KeyAction;
pub use table::{
    Attribute, Attributes, Cell, CellKind, Direction, Row, Table, MARKER_ASC, MARKER_DESC,
};
