//! Table, row and cell types.
//!
//! Pure data. Cells keep their original markup; the comparable value is
//! derived on demand by stripping tags.

use crate::model::TableId;
use crate::sort::key::strip_markup;
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Code-point order, smallest key first.
    #[default]
    Ascending,
    /// Exact reverse of ascending.
    Descending,
}

impl Direction {
    /// Class token written on the active header cell.
    pub fn marker(self) -> &'static str {
        match self {
            Direction::Ascending => MARKER_ASC,
            Direction::Descending => MARKER_DESC,
        }
    }

    /// Parse a class token back into a direction.
    pub fn from_marker(token: &str) -> Option<Self> {
        match token {
            MARKER_ASC => Some(Direction::Ascending),
            MARKER_DESC => Some(Direction::Descending),
            _ => None,
        }
    }

    /// The other direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Marker token for an ascending header.
pub const MARKER_ASC: &str = "sorted-asc";
/// Marker token for a descending header.
pub const MARKER_DESC: &str = "sorted-desc";

/// A single attribute on an element's opening tag.
///
/// `value` is `None` for bare attributes such as `hidden`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name as written.
    pub name: String,
    /// Unquoted value.
    pub value: Option<String>,
}

impl Attribute {
    /// Attribute from a name and optional value.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Attributes of an element, with the `class` attribute split into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    classes: Vec<String>,
    others: Vec<Attribute>,
}

impl Attributes {
    /// Build from a parsed attribute list. `class` values are tokenised on
    /// ASCII whitespace; repeated `class` attributes are merged.
    pub fn from_list(list: Vec<Attribute>) -> Self {
        let mut classes = Vec::new();
        let mut others = Vec::new();
        for attr in list {
            if attr.name.eq_ignore_ascii_case("class") {
                if let Some(value) = attr.value {
                    classes.extend(value.split_ascii_whitespace().map(str::to_string));
                }
            } else {
                others.push(attr);
            }
        }
        Self { classes, others }
    }

    /// Class tokens in source order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether `token` is one of the class tokens.
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }

    /// Every attribute except `class`, in source order.
    pub fn others(&self) -> &[Attribute] {
        &self.others
    }

    /// Direction marker carried in the class list, if any.
    pub fn marker(&self) -> Option<Direction> {
        self.classes.iter().find_map(|c| Direction::from_marker(c))
    }

    /// Replace any marker token with `marker`, leaving other classes intact.
    pub fn set_marker(&mut self, marker: Option<Direction>) {
        self.classes.retain(|c| Direction::from_marker(c).is_none());
        if let Some(direction) = marker {
            self.classes.push(direction.marker().to_string());
        }
    }
}

/// Element name of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `<th>`
    Header,
    /// `<td>`
    Data,
}

impl CellKind {
    /// Element name.
    pub fn tag(self) -> &'static str {
        match self {
            CellKind::Header => "th",
            CellKind::Data => "td",
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    attributes: Attributes,
    content: String,
    /// Marker the cell was created with, to detect changes on output.
    initial_marker: Option<Direction>,
}

impl Cell {
    /// Cell remembering its current marker as the initial one.
    pub fn new(kind: CellKind, attributes: Attributes, content: impl Into<String>) -> Self {
        let initial_marker = attributes.marker();
        Self {
            kind,
            attributes,
            content: content.into(),
            initial_marker,
        }
    }

    /// Plain `<td>` with no attributes.
    pub fn data(content: impl Into<String>) -> Self {
        Self::new(CellKind::Data, Attributes::default(), content)
    }

    /// Plain `<th>` with no attributes.
    pub fn header(content: impl Into<String>) -> Self {
        Self::new(CellKind::Header, Attributes::default(), content)
    }

    /// Header or data cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Opening-tag attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Raw inner markup.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with markup tags removed.
    pub fn comparable_value(&self) -> Cow<'_, str> {
        strip_markup(&self.content)
    }

    /// Direction marker carried in the class list.
    pub fn marker(&self) -> Option<Direction> {
        self.attributes.marker()
    }

    /// Replace the marker token, keeping other classes.
    pub fn set_marker(&mut self, marker: Option<Direction>) {
        self.attributes.set_marker(marker);
    }

    /// Whether the marker differs from the one the cell was created with.
    pub fn is_modified(&self) -> bool {
        self.marker() != self.initial_marker
    }
}

/// One table row.
///
/// `position` is the row's index in the table as loaded (header is 0).
/// Sorting relocates rows; it never edits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    position: usize,
    attributes: Attributes,
    cells: Vec<Cell>,
    markup: String,
}

impl Row {
    /// Row from parsed parts; `markup` is its source text.
    pub fn new(position: usize, attributes: Attributes, cells: Vec<Cell>, markup: String) -> Self {
        Self {
            position,
            attributes,
            cells,
            markup,
        }
    }

    /// Row built from plain data cells. Markup is synthesised.
    pub fn from_texts<S: AsRef<str>>(position: usize, texts: &[S]) -> Self {
        let cells: Vec<Cell> = texts.iter().map(|t| Cell::data(t.as_ref())).collect();
        let mut row = Self::new(position, Attributes::default(), cells, String::new());
        row.markup = crate::document::render::row_to_html(&row);
        row
    }

    /// Index in the table as loaded.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Opening-tag attributes of the `<tr>`.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Cells left to right.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Source markup of the whole row, `<tr>` through `</tr>`.
    ///
    /// Stale once [`Row::is_modified`] is true.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Whether any cell's marker changed since the row was created.
    pub fn is_modified(&self) -> bool {
        self.cells.iter().any(Cell::is_modified)
    }

    /// Stripped text of every cell, left to right.
    pub fn texts(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|c| c.comparable_value().into_owned())
            .collect()
    }
}

/// A table: row 0 is the header, the rest are data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    id: TableId,
    attributes: Attributes,
    rows: Vec<Row>,
    /// Byte ranges of each row slot in the source document, in slot order.
    row_spans: Vec<Range<usize>>,
}

impl Table {
    /// Table from rows and their source byte ranges.
    pub fn new(
        id: TableId,
        attributes: Attributes,
        rows: Vec<Row>,
        row_spans: Vec<Range<usize>>,
    ) -> Self {
        Self {
            id,
            attributes,
            rows,
            row_spans,
        }
    }

    /// Table with a `<th>` header and plain data rows; not tied to any source.
    pub fn from_texts<S: AsRef<str>>(id: TableId, header: &[S], rows: &[Vec<S>]) -> Self {
        let header_cells: Vec<Cell> = header.iter().map(|t| Cell::header(t.as_ref())).collect();
        let mut header_row = Row::new(0, Attributes::default(), header_cells, String::new());
        header_row.markup = crate::document::render::row_to_html(&header_row);
        let mut all = vec![header_row];
        all.extend(
            rows.iter()
                .enumerate()
                .map(|(i, texts)| Row::from_texts(i + 1, texts)),
        );
        Self::new(id, Attributes::default(), all, Vec::new())
    }

    /// Document-order id.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Opening-tag attributes of the `<table>`.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Source byte range of each row slot.
    pub fn row_spans(&self) -> &[Range<usize>] {
        &self.row_spans
    }

    /// Row 0, if the table has any rows.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub(crate) fn header_mut(&mut self) -> Option<&mut Row> {
        self.rows.first_mut()
    }

    /// Rows after the header, in current order.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Number of header cells (0 when there is no header).
    pub fn column_count(&self) -> usize {
        self.header().map_or(0, |h| h.cells().len())
    }

    /// Detach the data rows, leaving only the header.
    pub(crate) fn take_data_rows(&mut self) -> Vec<Row> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        self.rows.split_off(1)
    }

    /// Re-attach data rows after the header, in the given order.
    pub(crate) fn put_data_rows(&mut self, rows: Vec<Row>) {
        self.rows.truncate(1);
        self.rows.extend(rows);
    }

    /// Column and direction currently marked on the header, if any.
    pub fn marked_column(&self) -> Option<(usize, Direction)> {
        self.header()?
            .cells()
            .iter()
            .enumerate()
            .find_map(|(i, c)| c.marker().map(|d| (i, d)))
    }
}
