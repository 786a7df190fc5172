//! Writing documents back out.
//!
//! HTML output splices each table's row slots back into the original source:
//! every slot receives the row that now occupies it. Rows whose markers did
//! not change are copied verbatim, so untouched markup survives byte for byte.
//! In a row whose markers did change, only the `class` attribute of the
//! affected cells is rewritten.

use crate::document::parser::{cell_open_tags, with_classes};
use crate::document::Document;
use crate::model::{Attributes, Row, Table, TableId};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write as _;
use tracing::debug;

/// Serialise the opening-tag attributes, leading space included.
///
/// `class` comes first; other attributes keep their source order.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    if !attributes.classes().is_empty() {
        let _ = write!(out, " class=\"{}\"", attributes.classes().join(" "));
    }
    for attr in attributes.others() {
        match &attr.value {
            Some(value) => {
                let _ = write!(out, " {}=\"{}\"", attr.name, value.replace('"', "&quot;"));
            }
            None => {
                let _ = write!(out, " {}", attr.name);
            }
        }
    }
    out
}

/// Serialise a row from its model, ignoring its source markup.
pub fn row_to_html(row: &Row) -> String {
    let mut out = format!("<tr{}>", attributes_to_html(row.attributes()));
    for cell in row.cells() {
        let tag = cell.kind().tag();
        let _ = write!(
            out,
            "<{tag}{}>{}</{tag}>",
            attributes_to_html(cell.attributes()),
            cell.content()
        );
    }
    out.push_str("</tr>");
    out
}

fn row_output(row: &Row) -> Cow<'_, str> {
    let markup = row.markup();
    if markup.is_empty() {
        return row_to_html(row).into();
    }
    if !row.is_modified() {
        return markup.into();
    }

    let tags = cell_open_tags(markup);
    if tags.len() != row.cells().len() {
        debug!(
            position = row.position(),
            "cell tags out of step with markup; re-serialising row"
        );
        return row_to_html(row).into();
    }

    let mut out = String::with_capacity(markup.len() + 16);
    let mut cursor = 0;
    for (cell, span) in row.cells().iter().zip(tags) {
        if !cell.is_modified() {
            continue;
        }
        out.push_str(&markup[cursor..span.start]);
        out.push_str(&with_classes(&markup[span.clone()], cell.attributes().classes()));
        cursor = span.end;
    }
    out.push_str(&markup[cursor..]);
    out.into()
}

/// Serialise a table on its own, without any surrounding document.
pub fn table_to_html(table: &Table) -> String {
    let mut out = format!("<table{}>", attributes_to_html(table.attributes()));
    for row in table.rows() {
        out.push_str(&row_output(row));
    }
    out.push_str("</table>");
    out
}

/// Render the whole document with every table's current row order and markers.
pub fn render_document(document: &Document) -> String {
    let source = document.source();
    let mut slots: Vec<(std::ops::Range<usize>, Cow<'_, str>)> = document
        .tables()
        .iter()
        .flat_map(|table| {
            table
                .row_spans()
                .iter()
                .cloned()
                .zip(table.rows().iter().map(row_output))
        })
        .collect();
    slots.sort_by_key(|(span, _)| span.start);

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for (span, text) in slots {
        out.push_str(&source[cursor..span.start]);
        out.push_str(&text);
        cursor = span.end;
    }
    out.push_str(&source[cursor..]);
    out
}

/// JSON view of one table: stripped texts in current order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    /// Document-wide index of the table.
    pub table: usize,
    /// Column carrying a marker, if sorted.
    pub sorted_column: Option<usize>,
    /// `sorted-asc` or `sorted-desc`.
    pub direction: Option<&'static str>,
    /// Header texts, markup stripped.
    pub header: Vec<String>,
    /// Data row texts in current order.
    pub rows: Vec<Vec<String>>,
}

impl TableReport {
    /// Snapshot `table` in its current order.
    pub fn from_table(table: &Table) -> Self {
        let marked = table.marked_column();
        Self {
            table: table.id().index(),
            sorted_column: marked.map(|(column, _)| column),
            direction: marked.map(|(_, direction)| direction.marker()),
            header: table.header().map(Row::texts).unwrap_or_default(),
            rows: table.data_rows().iter().map(Row::texts).collect(),
        }
    }
}

/// JSON array describing the given tables, in the order given.
///
/// Ids with no matching table are skipped.
pub fn tables_to_json(document: &Document, ids: &[TableId]) -> serde_json::Result<String> {
    let reports: Vec<TableReport> = ids
        .iter()
        .filter_map(|id| document.table(*id))
        .map(TableReport::from_table)
        .collect();
    serde_json::to_string(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;
    use crate::model::{Attribute, Direction};
    use crate::sort::{Activation, SortController};

    const PEOPLE: &str = r#"<p>before</p><table class="sortable"><tr><th>Name</th><th class="num">Age</th></tr><tr><td>Bob</td><td>30</td></tr><tr class="odd"><td>Ann</td><td>25</td></tr><tr><td>Cid</td><td>25</td></tr></table><p>after</p>"#;

    fn sort(document: &mut Document, column: usize, times: usize) {
        let id = TableId::new(0);
        let mut controller = SortController::for_table(document.table(id).unwrap());
        for _ in 0..times {
            controller.handle_header_activation(
                document.table_mut(id).unwrap(),
                Activation::Cell(column),
            );
        }
    }

    #[test]
    fn untouched_document_renders_verbatim() {
        let document = parse_document(PEOPLE);
        assert_eq!(render_document(&document), PEOPLE);
    }

    #[test]
    fn ascending_sort_moves_rows_and_marks_header() {
        let mut document = parse_document(PEOPLE);
        sort(&mut document, 1, 1);
        insta::assert_snapshot!(render_document(&document), @r#"<p>before</p><table class="sortable"><tr><th>Name</th><th class="num sorted-asc">Age</th></tr><tr class="odd"><td>Ann</td><td>25</td></tr><tr><td>Cid</td><td>25</td></tr><tr><td>Bob</td><td>30</td></tr></table><p>after</p>"#);
    }

    #[test]
    fn descending_sort_renders_desc_marker() {
        let mut document = parse_document(PEOPLE);
        sort(&mut document, 1, 2);
        insta::assert_snapshot!(render_document(&document), @r#"<p>before</p><table class="sortable"><tr><th>Name</th><th class="num sorted-desc">Age</th></tr><tr><td>Bob</td><td>30</td></tr><tr><td>Cid</td><td>25</td></tr><tr class="odd"><td>Ann</td><td>25</td></tr></table><p>after</p>"#);
    }

    #[test]
    fn commented_row_stays_in_place_when_rows_move() {
        let mut document = parse_document(
            r#"<table class="sortable"><tr><th>N</th></tr><tr><td>b</td></tr><!-- <tr><td>old</td></tr> --><tr><td>a</td></tr></table>"#,
        );
        sort(&mut document, 0, 1);
        insta::assert_snapshot!(render_document(&document), @r#"<table class="sortable"><tr><th class="sorted-asc">N</th></tr><tr><td>a</td></tr><!-- <tr><td>old</td></tr> --><tr><td>b</td></tr></table>"#);
    }

    #[test]
    fn commented_table_is_left_alone() {
        let source = r#"<!-- <table class="sortable"><tr><th>Old</th></tr><tr><td>z</td></tr></table> --><table class="sortable"><tr><th>N</th></tr><tr><td>b</td></tr><tr><td>a</td></tr></table>"#;
        let mut document = parse_document(source);
        sort(&mut document, 0, 1);
        insta::assert_snapshot!(render_document(&document), @r#"<!-- <table class="sortable"><tr><th>Old</th></tr><tr><td>z</td></tr></table> --><table class="sortable"><tr><th class="sorted-asc">N</th></tr><tr><td>a</td></tr><tr><td>b</td></tr></table>"#);
    }

    #[test]
    fn marked_header_keeps_its_layout() {
        let header = "<tr id=\"h\">\n    <th data-k=\"1\" class=\"wide\">Name</th> <!-- label -->\n    <TH title='age'>Age</TH>\n  </tr>";
        let source = format!(
            "<table class=\"sortable\">\n  {header}\n  <tr><td>b</td><td>2</td></tr>\n  <tr><td>a</td><td>1</td></tr>\n</table>"
        );
        let mut document = parse_document(source);

        sort(&mut document, 0, 1);
        assert_eq!(
            render_document(&document),
            "<table class=\"sortable\">\n  <tr id=\"h\">\n    <th data-k=\"1\" class=\"wide sorted-asc\">Name</th> <!-- label -->\n    <TH title='age'>Age</TH>\n  </tr>\n  <tr><td>a</td><td>1</td></tr>\n  <tr><td>b</td><td>2</td></tr>\n</table>"
        );

        sort(&mut document, 1, 1);
        assert_eq!(
            render_document(&document),
            "<table class=\"sortable\">\n  <tr id=\"h\">\n    <th data-k=\"1\" class=\"wide\">Name</th> <!-- label -->\n    <TH class=\"sorted-asc\" title='age'>Age</TH>\n  </tr>\n  <tr><td>a</td><td>1</td></tr>\n  <tr><td>b</td><td>2</td></tr>\n</table>"
        );
    }

    #[test]
    fn json_report_lists_stripped_texts() {
        let mut document = parse_document(PEOPLE);
        sort(&mut document, 0, 1);
        let json = tables_to_json(&document, &[TableId::new(0)]).unwrap();
        insta::assert_snapshot!(json, @r#"[{"table":0,"sorted_column":0,"direction":"sorted-asc","header":["Name","Age"],"rows":[["Ann","25"],["Bob","30"],["Cid","25"]]}]"#);
    }

    #[test]
    fn json_report_skips_unknown_ids() {
        let document = parse_document(PEOPLE);
        let json = tables_to_json(&document, &[TableId::new(7)]).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn attributes_render_class_first_and_quote_values() {
        let attrs = Attributes::from_list(vec![
            Attribute::new("title", Some("say \"hi\"".into())),
            Attribute::new("hidden", None),
            Attribute::new("class", Some("a b".into())),
        ]);
        assert_eq!(
            attributes_to_html(&attrs),
            r#" class="a b" title="say &quot;hi&quot;" hidden"#
        );
    }

    #[test]
    fn table_to_html_serialises_standalone_table() {
        let mut table = Table::from_texts(TableId::new(0), &["A"], &[vec!["<i>x</i>"]]);
        SortController::new().handle_header_activation(&mut table, Activation::Cell(0));
        assert_eq!(table.marked_column(), Some((0, Direction::Ascending)));
        assert_eq!(
            table_to_html(&table),
            r#"<table><tr><th class="sorted-asc">A</th></tr><tr><td><i>x</i></td></tr></table>"#
        );
    }
}
