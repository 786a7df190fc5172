//! Table widget.
//!
//! Draws one table as fixed-width columns: a header line with the sort
//! indicator, then the visible slice of data rows. Returns the header
//! geometry so mouse clicks can be hit-tested against it.

use crate::model::{Direction, Table};
use crate::state::{AppState, HeaderLayout};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a column may grow before its text is truncated.
pub const MAX_COLUMN_WIDTH: u16 = 40;

/// Separator drawn between columns. One cell wide.
const COLUMN_SEPARATOR: &str = "│";

/// Sort indicator shown after a header label.
pub fn indicator(direction: Direction) -> &'static str {
    match direction {
        Direction::Ascending => "▲",
        Direction::Descending => "▼",
    }
}

/// Display width of every column.
///
/// A column is as wide as its widest cell, header label included with
/// room for the indicator, capped at [`MAX_COLUMN_WIDTH`]. Short rows just
/// contribute nothing to the columns they lack.
pub fn compute_column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<u16> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.width() + 2).collect();
    for row in rows {
        for (column, text) in row.iter().enumerate() {
            if column >= widths.len() {
                widths.push(0);
            }
            widths[column] = widths[column].max(text.width());
        }
    }
    widths
        .into_iter()
        .map(|w| w.clamp(1, usize::from(MAX_COLUMN_WIDTH)) as u16)
        .collect()
}

/// Pad or truncate `text` to exactly `width` display cells.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

/// Width of the row-number gutter (digits plus separator), or 0 when hidden.
pub fn gutter_width(row_count: usize, show_row_numbers: bool) -> u16 {
    if !show_row_numbers {
        return 0;
    }
    let digits = row_count.max(1).to_string().len();
    u16::try_from(digits + 1).unwrap_or(u16::MAX)
}

/// Header cell positions for columns drawn starting at `area.x + gutter`.
///
/// Columns running past the right edge are clipped; columns starting past it
/// are dropped and cannot be clicked.
pub fn header_layout(area: Rect, gutter: u16, widths: &[u16]) -> HeaderLayout {
    let right = area.x.saturating_add(area.width);
    let mut x = area.x.saturating_add(gutter);
    let mut columns = Vec::with_capacity(widths.len());
    for &width in widths {
        if x >= right {
            break;
        }
        columns.push((x, width.min(right - x)));
        x = x.saturating_add(width).saturating_add(1);
    }
    HeaderLayout {
        area: Rect::new(area.x, area.y, area.width, area.height.min(1)),
        columns,
    }
}

/// Number of data rows that fit in a bordered area of `height` lines.
pub fn visible_rows(height: u16) -> usize {
    // Two border lines and the header line.
    height.saturating_sub(3) as usize
}

fn header_line(table: &Table, widths: &[u16], gutter: u16) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(gutter as usize))];
    let header = table.header().map(|row| row.cells()).unwrap_or_default();
    for (column, &width) in widths.iter().enumerate() {
        if column > 0 {
            spans.push(Span::raw(COLUMN_SEPARATOR));
        }
        let cell = header.get(column);
        let marker = cell.and_then(|c| c.marker());
        let label = match (cell, marker) {
            (Some(c), Some(direction)) => format!("{} {}", c.comparable_value(), indicator(direction)),
            (Some(c), None) => c.comparable_value().into_owned(),
            (None, _) => String::new(),
        };
        let style = match marker {
            Some(_) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::BOLD),
        };
        spans.push(Span::styled(fit(&label, width as usize), style));
    }
    Line::from(spans)
}

fn data_line(texts: &[String], widths: &[u16], number: Option<(usize, u16)>) -> Line<'static> {
    let mut spans = Vec::with_capacity(widths.len() * 2 + 1);
    if let Some((n, gutter)) = number {
        let digits = gutter.saturating_sub(1) as usize;
        spans.push(Span::styled(
            format!("{n:>digits$} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    for (column, &width) in widths.iter().enumerate() {
        if column > 0 {
            spans.push(Span::raw(COLUMN_SEPARATOR));
        }
        let text = texts.get(column).map(String::as_str).unwrap_or("");
        spans.push(Span::raw(fit(text, width as usize)));
    }
    Line::from(spans)
}

/// Render `table` into `area` and report where its header cells landed.
pub fn render_table(frame: &mut Frame, area: Rect, table: &Table, state: &AppState) -> HeaderLayout {
    let title = format!(
        " {} ({}/{}) ",
        table.id(),
        state.selected_index() + 1,
        state.tables().len()
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);

    let header_texts = table.header().map(|r| r.texts()).unwrap_or_default();
    let rows: Vec<Vec<String>> = table.data_rows().iter().map(|r| r.texts()).collect();
    let widths = compute_column_widths(&header_texts, &rows);
    let gutter = gutter_width(rows.len(), state.show_row_numbers);

    let mut lines = vec![header_line(table, &widths, gutter)];
    lines.extend(
        rows.iter()
            .enumerate()
            .skip(state.scroll)
            .take(visible_rows(area.height))
            .map(|(i, texts)| {
                let number = state.show_row_numbers.then_some((i + 1, gutter));
                data_line(texts, &widths, number)
            }),
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);
    header_layout(inner, gutter, &widths)
}

/// Placeholder shown when the document has no sortable tables.
pub fn render_empty(frame: &mut Frame, area: Rect, opt_in_marker: &str) {
    let text = format!("No tables with class \"{opt_in_marker}\" in this document.");
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" tablesort "));
    frame.render_widget(paragraph, area);
}

/// One-line key help.
pub fn help_line() -> Line<'static> {
    Line::from(Span::styled(
        " click header / 1-9: sort  Tab: next table  j/k: scroll  q: quit",
        Style::default().fg(Color::DarkGray),
    ))
}
