//! Host document adapter.
//!
//! The only layer that reads or writes HTML text. [`parser`] turns source into
//! plain [`Table`] values; [`render`] writes them back.

pub mod parser;
pub mod render;

pub use parser::parse_document;
pub use render::{render_document, tables_to_json, TableReport};

use crate::model::{Table, TableId};

/// An HTML document and the tables found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    source: String,
    tables: Vec<Table>,
}

impl Document {
    /// Pair source text with the tables scanned from it.
    pub fn new(source: String, tables: Vec<Table>) -> Self {
        Self { source, tables }
    }

    /// Original HTML text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level tables in document order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Table with the given id.
    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id() == id)
    }

    /// Mutable access to the table with the given id.
    pub fn table_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id() == id)
    }
}
