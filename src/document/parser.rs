//! HTML table scanner.
//!
//! Finds `<table>`, `<tr>`, `<th>` and `<td>` tags with a tag-level regex and
//! records cell contents and row byte ranges. It does not build a full DOM:
//! everything that is not table structure is left as opaque text, and a
//! table nested inside a cell is part of that cell's content.
//!
//! Omitted end tags are handled the way browsers do for tables: a new cell
//! closes the open cell, a new row closes the open row, and `</table>` closes
//! everything. Tags inside `<!-- -->` comments are not structure; an
//! unterminated comment runs to end of input.

use crate::document::Document;
use crate::model::{Attribute, Attributes, Cell, CellKind, Row, Table, TableId};
use regex::{Captures, Regex};
use std::fmt::Write as _;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// A comment, or a tag with groups (closing slash, name, attributes, self-close).
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)|<(/?)([A-Za-z][A-Za-z0-9]*)([^>]*?)(/?)>")
        .expect("tag pattern is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'=<>/]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("attribute pattern is valid")
});

/// Parse attribute text such as ` id="a" class='x y' hidden`.
pub fn parse_attributes(text: &str) -> Vec<Attribute> {
    ATTRIBUTE
        .captures_iter(text)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string());
            Attribute::new(&caps[1], value)
        })
        .collect()
}

#[derive(Debug)]
struct OpenCell {
    kind: CellKind,
    attributes: Attributes,
    content_start: usize,
}

#[derive(Debug)]
struct OpenRow {
    attributes: Attributes,
    start: usize,
    cells: Vec<Cell>,
    cell: Option<OpenCell>,
}

#[derive(Debug)]
struct OpenTable {
    id: TableId,
    attributes: Attributes,
    rows: Vec<Row>,
    spans: Vec<Range<usize>>,
    row: Option<OpenRow>,
    /// Depth of tables nested inside one of this table's cells.
    nested: usize,
}

impl OpenTable {
    fn new(id: TableId, attributes: Attributes) -> Self {
        Self {
            id,
            attributes,
            rows: Vec::new(),
            spans: Vec::new(),
            row: None,
            nested: 0,
        }
    }

    fn in_cell(&self) -> bool {
        self.row.as_ref().is_some_and(|r| r.cell.is_some())
    }

    fn close_cell(&mut self, source: &str, end: usize) {
        if let Some(row) = self.row.as_mut() {
            if let Some(open) = row.cell.take() {
                let content = &source[open.content_start..end];
                row.cells.push(Cell::new(open.kind, open.attributes, content));
            }
        }
    }

    fn close_row(&mut self, source: &str, end: usize) {
        self.close_cell(source, end);
        if let Some(row) = self.row.take() {
            let position = self.rows.len();
            let markup = source[row.start..end].to_string();
            self.rows
                .push(Row::new(position, row.attributes, row.cells, markup));
            self.spans.push(row.start..end);
        }
    }

    /// Close the open row at an explicit `</tr>`, including the tag in the span.
    fn close_row_inclusive(&mut self, source: &str, end_tag: Range<usize>) {
        self.close_cell(source, end_tag.start);
        if self.row.is_some() {
            self.close_row(source, end_tag.end);
        }
    }

    fn finish(mut self, source: &str, end: usize) -> Table {
        self.close_row(source, end);
        Table::new(self.id, self.attributes, self.rows, self.spans)
    }
}

/// Scan `source` for tables.
///
/// Never fails: malformed structure yields fewer or shorter rows, and a
/// table missing `</table>` is closed at end of input.
pub fn parse_document(source: impl Into<String>) -> Document {
    let source = source.into();
    let mut tables = Vec::new();
    let mut current: Option<OpenTable> = None;
    let mut next_id = 0;

    for caps in TAG.captures_iter(&source) {
        let Some(name) = caps.get(2) else {
            continue;
        };
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let name = name.as_str().to_ascii_lowercase();
        let closing = caps.get(1).is_some_and(|m| !m.is_empty());

        match current.as_mut() {
            None => {
                if name == "table" && !closing {
                    current = Some(OpenTable::new(
                        TableId::new(next_id),
                        attributes_of(&caps),
                    ));
                    next_id += 1;
                }
            }
            Some(table) if table.nested > 0 => {
                if name == "table" {
                    if closing {
                        table.nested -= 1;
                    } else {
                        table.nested += 1;
                        next_id += 1;
                    }
                }
            }
            Some(table) => match (name.as_str(), closing) {
                ("table", false) if table.in_cell() => {
                    table.nested += 1;
                    next_id += 1;
                }
                ("table", false) => {
                    warn!(
                        offset = whole.start,
                        "table opened outside a cell; closing previous table"
                    );
                    if let Some(done) = current.take() {
                        tables.push(done.finish(&source, whole.start));
                    }
                    current = Some(OpenTable::new(
                        TableId::new(next_id),
                        attributes_of(&caps),
                    ));
                    next_id += 1;
                }
                ("table", true) => {
                    if let Some(done) = current.take() {
                        tables.push(done.finish(&source, whole.start));
                    }
                }
                ("tr", false) => {
                    table.close_row(&source, whole.start);
                    table.row = Some(OpenRow {
                        attributes: attributes_of(&caps),
                        start: whole.start,
                        cells: Vec::new(),
                        cell: None,
                    });
                }
                ("tr", true) => table.close_row_inclusive(&source, whole),
                ("thead" | "tbody" | "tfoot", _) => table.close_row(&source, whole.start),
                ("td" | "th", false) => {
                    let kind = if name == "th" {
                        CellKind::Header
                    } else {
                        CellKind::Data
                    };
                    table.close_cell(&source, whole.start);
                    match table.row.as_mut() {
                        Some(row) => {
                            row.cell = Some(OpenCell {
                                kind,
                                attributes: attributes_of(&caps),
                                content_start: whole.end,
                            })
                        }
                        None => debug!(offset = whole.start, "cell outside a row ignored"),
                    }
                }
                ("td" | "th", true) => table.close_cell(&source, whole.start),
                _ => {}
            },
        }
    }

    if let Some(open) = current.take() {
        warn!("unterminated table closed at end of input");
        let end = source.len();
        tables.push(open.finish(&source, end));
    }

    debug!(tables = tables.len(), "document scanned");
    Document::new(source, tables)
}

/// Byte range of each cell's opening tag within one row's markup, in cell
/// order. Tags inside nested tables and comments are skipped.
pub(crate) fn cell_open_tags(row_markup: &str) -> Vec<Range<usize>> {
    let mut nested = 0usize;
    let mut tags = Vec::new();
    for caps in TAG.captures_iter(row_markup) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let closing = caps.get(1).is_some_and(|m| !m.is_empty());
        match (name.as_str().to_ascii_lowercase().as_str(), closing) {
            ("table", false) => nested += 1,
            ("table", true) => nested = nested.saturating_sub(1),
            ("td" | "th", false) if nested == 0 => tags.push(whole.range()),
            _ => {}
        }
    }
    tags
}

/// Rewrite one opening tag so its class list is exactly `classes`.
///
/// Everything else in the tag is kept as written. Repeated `class`
/// attributes collapse into the first; an empty list drops the attribute.
pub(crate) fn with_classes(tag: &str, classes: &[String]) -> String {
    let Some(caps) = TAG.captures(tag) else {
        return tag.to_string();
    };
    let (Some(name), Some(attrs)) = (caps.get(2), caps.get(3)) else {
        return tag.to_string();
    };
    let value = classes.join(" ");
    let class_spans: Vec<Range<usize>> = ATTRIBUTE
        .captures_iter(attrs.as_str())
        .filter(|a| a[1].eq_ignore_ascii_case("class"))
        .filter_map(|a| a.get(0))
        .map(|m| attrs.start() + m.start()..attrs.start() + m.end())
        .collect();

    let mut out = String::with_capacity(tag.len() + value.len() + 9);
    if class_spans.is_empty() {
        out.push_str(&tag[..name.end()]);
        if !value.is_empty() {
            let _ = write!(out, " class=\"{value}\"");
        }
        out.push_str(&tag[name.end()..]);
        return out;
    }

    let mut cursor = 0;
    for (i, span) in class_spans.into_iter().enumerate() {
        if i == 0 && !value.is_empty() {
            out.push_str(&tag[cursor..span.start]);
            let _ = write!(out, "class=\"{value}\"");
        } else {
            // Drop the attribute along with the whitespace before it.
            let start = cursor.max(tag[..span.start].trim_end().len());
            out.push_str(&tag[cursor..start]);
        }
        cursor = span.end;
    }
    out.push_str(&tag[cursor..]);
    out
}

fn attributes_of(caps: &Captures<'_>) -> Attributes {
    Attributes::from_list(parse_attributes(&caps[3]))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
