//! Identifier newtypes.

use std::fmt;

/// Index of a table within its document, in document order.
///
/// Counts every `<table>`, sortable or not, so ids stay stable no matter
/// which opt-in marker is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(usize);

impl TableId {
    /// Id of the `index`-th table in the document.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the table in document order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_id_displays_with_index() {
        assert_eq!(TableId::new(4).to_string(), "table#4");
    }

    #[test]
    fn table_ids_order_by_document_position() {
        assert!(TableId::new(0) < TableId::new(1));
        assert_eq!(TableId::new(2).index(), 2);
    }
}
