//! Header activation handling.
//!
//! A [`SortController`] owns the [`SortState`] of exactly one table and
//! applies activations to that table synchronously.

use crate::model::{Direction, Row, Table};
use crate::sort::key::KeyBuilder;
use crate::sort::state::SortState;
use tracing::debug;

/// What the user activated on a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A header cell, by column index.
    Cell(usize),
    /// The row itself (its border or the gap between cells).
    Row,
}

/// Sorts one table in response to header activations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    /// Controller for a table that has never been sorted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller continuing from the markers already on `table`'s header.
    pub fn for_table(table: &Table) -> Self {
        Self {
            state: table.header().map(SortState::from_header).unwrap_or_default(),
        }
    }

    /// Current sort state.
    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Apply one activation to `table`.
    ///
    /// Returns the new direction, or `None` when the activation was ignored:
    /// a row-border hit, a column past the header, or a table without
    /// header or data rows.
    pub fn handle_header_activation(
        &mut self,
        table: &mut Table,
        activation: Activation,
    ) -> Option<Direction> {
        let Activation::Cell(column) = activation else {
            return None;
        };
        if column >= table.column_count() || table.data_rows().is_empty() {
            return None;
        }

        let direction = self.state.toggle(column);
        debug!(table = %table.id(), column, %direction, "header activated");

        let rows = table.take_data_rows();
        table.put_data_rows(order_rows(rows, column, direction));

        if let Some(header) = table.header_mut() {
            for (i, cell) in header.cells_mut().iter_mut().enumerate() {
                cell.set_marker(self.state.marker_for(i));
            }
        }

        Some(direction)
    }
}

/// Order `rows` by their compound key on `column`.
///
/// Keys are compared as plain strings. Descending order is the exact reverse
/// of ascending; keys are unique so the reversal is well defined.
pub fn order_rows(rows: Vec<Row>, column: usize, direction: Direction) -> Vec<Row> {
    let max_position = rows.iter().map(Row::position).max().unwrap_or(0);
    let builder = KeyBuilder::for_max_position(max_position);

    let mut keyed: Vec<(String, Row)> = rows
        .into_iter()
        .map(|row| (builder.build_key(row.cells(), column, row.position()), row))
        .collect();
    keyed.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    if direction == Direction::Descending {
        keyed.reverse();
    }

    keyed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
