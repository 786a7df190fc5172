//! Compound sort keys.
//!
//! A key is the target column's text, then every other column left to right,
//! then the row's position, joined by single spaces with markup stripped.
//! Comparing keys as plain strings therefore orders by the target column,
//! breaks ties on the remaining columns, and never reports two rows equal.

use crate::model::Cell;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Separator between key parts.
pub const KEY_SEPARATOR: &str = " ";

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("markup tag pattern is valid"));

/// Remove every `<...>` tag from `text`.
///
/// Borrows when there is nothing to strip.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    MARKUP_TAG.replace_all(text, "")
}

/// Builds keys for one sort pass.
///
/// The row position is zero-padded to `index_width` digits so that positions
/// compare numerically under string ordering (row 10 after row 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBuilder {
    index_width: usize,
}

impl KeyBuilder {
    /// Key builder sized for positions up to `max_position`.
    pub fn for_max_position(max_position: usize) -> Self {
        Self {
            index_width: max_position.to_string().len(),
        }
    }

    /// Digits the row position is padded to.
    pub fn index_width(&self) -> usize {
        self.index_width
    }

    /// Build the compound key of one row.
    ///
    /// `target_column` may be past the end of a short row; the row then
    /// contributes only its own cells in order.
    pub fn build_key(&self, cells: &[Cell], target_column: usize, row_index: usize) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(cells.len() + 1);
        let mut front: Option<&str> = None;
        for (n, cell) in cells.iter().enumerate() {
            if n == target_column {
                front = Some(cell.content());
            } else {
                parts.push(cell.content());
            }
        }
        if let Some(target) = front {
            parts.insert(0, target);
        }

        let index = format!("{:0width$}", row_index, width = self.index_width);
        parts.push(&index);

        strip_markup(&parts.join(KEY_SEPARATOR)).into_owned()
    }
}
