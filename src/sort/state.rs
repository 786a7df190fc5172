//! Per-table toggle state.

use crate::model::{Direction, Row};

/// Which column is sorted, and which way.
///
/// Two-state toggle: once a column is active it flips between ascending and
/// descending and never returns to unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active_column: Option<usize>,
    direction: Direction,
}

impl SortState {
    /// Unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded from markers already present on a header row.
    ///
    /// The first marked cell wins.
    pub fn from_header(header: &Row) -> Self {
        header
            .cells()
            .iter()
            .enumerate()
            .find_map(|(column, cell)| {
                cell.marker().map(|direction| Self {
                    active_column: Some(column),
                    direction,
                })
            })
            .unwrap_or_default()
    }

    /// Column last activated, if any.
    pub fn active_column(&self) -> Option<usize> {
        self.active_column
    }

    /// Direction of the active column.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Record an activation of `column` and return the resulting direction.
    pub fn toggle(&mut self, column: usize) -> Direction {
        if self.active_column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.active_column = Some(column);
            self.direction = Direction::Ascending;
        }
        self.direction
    }

    /// Marker to show on the header cell at `column`.
    pub fn marker_for(&self, column: usize) -> Option<Direction> {
        (self.active_column == Some(column)).then_some(self.direction)
    }
}
