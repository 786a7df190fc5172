//! Mouse hit-testing for the header row.
//!
//! Pure functions mapping a click position to the header cell under it.
//! The view records where it drew each header cell; these functions only
//! read that record.

use crate::sort::Activation;
use ratatui::layout::Rect;

/// Where the header was drawn on the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLayout {
    /// The header line. Clicks outside it never reach the table.
    pub area: Rect,
    /// `(x, width)` of each header cell, by column index.
    pub columns: Vec<(u16, u16)>,
}

/// Result of hit-testing a click against the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderClick {
    /// Click landed on the header cell at this column.
    Cell(usize),
    /// Click landed on the header row but between cells (a border or gap).
    Row,
    /// Click was not on the header row.
    Outside,
}

impl HeaderClick {
    /// The activation this click produces, if any.
    pub fn activation(self) -> Option<Activation> {
        match self {
            HeaderClick::Cell(column) => Some(Activation::Cell(column)),
            HeaderClick::Row => Some(Activation::Row),
            HeaderClick::Outside => None,
        }
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

/// Detect which header cell (if any) was clicked.
///
/// # Arguments
/// * `click_x` - Mouse click column position (0-based)
/// * `click_y` - Mouse click row position (0-based)
/// * `layout` - Header geometry from the last draw
pub fn detect_header_click(click_x: u16, click_y: u16, layout: &HeaderLayout) -> HeaderClick {
    if !contains(layout.area, click_x, click_y) {
        return HeaderClick::Outside;
    }

    layout
        .columns
        .iter()
        .position(|&(x, width)| click_x >= x && click_x < x.saturating_add(width))
        .map_or(HeaderClick::Row, HeaderClick::Cell)
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
