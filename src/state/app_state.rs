//! Application state and transitions.
//!
//! AppState holds the viewer's UI state only: which sortable table is on
//! screen and how far it is scrolled. Row order and markers live in the
//! document itself and change only through the registrar.

use crate::model::{KeyAction, TableId};

// ===== AppState =====

/// Viewer state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Table selection: cycles through `tables` with wrap-around
///   (`next_table`, `prev_table`); switching resets scroll.
/// - Scroll: clamped to `0..=max_scroll` for the current table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Registered table ids in document order. Empty when the document has
    /// no sortable tables.
    tables: Vec<TableId>,

    /// Index into `tables`. Always 0 when `tables` is empty.
    selected: usize,

    /// First visible data row of the selected table.
    pub scroll: usize,

    /// Whether a row-number column is drawn to the left of the table.
    pub show_row_numbers: bool,
}

impl AppState {
    /// State showing the first of `tables`, unscrolled.
    pub fn new(tables: Vec<TableId>, show_row_numbers: bool) -> Self {
        Self {
            tables,
            selected: 0,
            scroll: 0,
            show_row_numbers,
        }
    }

    /// Sortable table ids in document order.
    pub fn tables(&self) -> &[TableId] {
        &self.tables
    }

    /// Position of the selected table among sortable tables.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The table on screen, if any.
    pub fn selected_table(&self) -> Option<TableId> {
        self.tables.get(self.selected).copied()
    }

    /// Select the next table, wrapping around.
    pub fn next_table(&mut self) {
        if self.tables.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.tables.len();
        self.scroll = 0;
    }

    /// Select the previous table, wrapping around.
    pub fn prev_table(&mut self) {
        if self.tables.is_empty() {
            return;
        }
        self.selected = (self.selected + self.tables.len() - 1) % self.tables.len();
        self.scroll = 0;
    }

    /// Scroll by `delta` rows, clamped to `0..=max_scroll`.
    pub fn scroll_by(&mut self, delta: isize, max_scroll: usize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(max_scroll);
    }

    /// Apply a navigation action.
    ///
    /// `max_scroll` is the largest valid offset for the current table and
    /// `page` the number of visible data rows. Returns `false` for actions
    /// that are not navigation (quit, sort), leaving state untouched.
    pub fn navigate(&mut self, action: KeyAction, max_scroll: usize, page: usize) -> bool {
        let page = page.max(1) as isize;
        match action {
            KeyAction::ScrollDown => self.scroll_by(1, max_scroll),
            KeyAction::ScrollUp => self.scroll_by(-1, max_scroll),
            KeyAction::PageDown => self.scroll_by(page, max_scroll),
            KeyAction::PageUp => self.scroll_by(-page, max_scroll),
            KeyAction::ScrollToTop => self.scroll = 0,
            KeyAction::NextTable => self.next_table(),
            KeyAction::PrevTable => self.prev_table(),
            KeyAction::Quit | KeyAction::SortColumn(_) => return false,
        }
        true
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
