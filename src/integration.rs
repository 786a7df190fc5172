//! Pure core integration functions.
//!
//! Batch mode: apply a list of header activations to a document and produce
//! output, with no terminal involved. Everything here is testable without I/O.

use crate::document::{render_document, tables_to_json, Document};
use crate::model::{ActivationParseError, AppError, Direction, TableId};
use crate::registrar::TableRegistrar;
use crate::sort::Activation;
use std::str::FromStr;
use tracing::debug;

/// One `--sort TABLE:COLUMN` request.
///
/// `table` counts sortable tables only, in document order; `column` is the
/// 0-based header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationSpec {
    /// Index among sortable tables.
    pub table: usize,
    /// Header cell index.
    pub column: usize,
}

impl FromStr for ActivationSpec {
    type Err = ActivationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (table, column) = s
            .split_once(':')
            .ok_or_else(|| ActivationParseError::MissingSeparator(s.to_string()))?;
        let index = |raw: &str| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| ActivationParseError::InvalidIndex {
                    raw: raw.to_string(),
                    input: s.to_string(),
                })
        };
        Ok(Self {
            table: index(table)?,
            column: index(column)?,
        })
    }
}

/// Output format for batch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The whole document, tables reordered in place.
    #[default]
    Html,
    /// Sortable tables only, as stripped text.
    Json,
}

/// Resolve a spec's table index to a registered table id.
///
/// # Errors
///
/// `ActivationParseError::UnknownTable` when the index is out of range.
pub fn resolve_table(
    registrar: &TableRegistrar,
    spec: ActivationSpec,
) -> Result<TableId, ActivationParseError> {
    let ids = registrar.registered_ids();
    ids.get(spec.table)
        .copied()
        .ok_or(ActivationParseError::UnknownTable {
            index: spec.table,
            available: ids.len(),
        })
}

/// Apply activations in order. Returns the direction each produced.
///
/// All specs are resolved before any is applied, so a bad spec leaves the
/// document untouched.
///
/// # Errors
///
/// `ActivationParseError::UnknownTable` for a spec naming a missing table.
pub fn apply_activations(
    document: &mut Document,
    registrar: &mut TableRegistrar,
    specs: &[ActivationSpec],
) -> Result<Vec<Option<Direction>>, ActivationParseError> {
    let resolved = specs
        .iter()
        .map(|spec| resolve_table(registrar, *spec).map(|id| (id, spec.column)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(resolved
        .into_iter()
        .map(|(id, column)| {
            let direction = registrar.activate(document, id, Activation::Cell(column));
            debug!(table = %id, column, ?direction, "batch activation");
            direction
        })
        .collect())
}

/// Render the document in the requested format.
///
/// # Errors
///
/// `AppError::Json` if JSON encoding fails.
pub fn render_output(
    document: &Document,
    registrar: &TableRegistrar,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Html => Ok(render_document(document)),
        OutputFormat::Json => Ok(tables_to_json(document, &registrar.registered_ids())?),
    }
}

/// Register, apply and render in one step.
///
/// # Errors
///
/// Propagates activation resolution and encoding failures.
pub fn run_batch(
    mut document: Document,
    opt_in_marker: &str,
    specs: &[ActivationSpec],
    format: OutputFormat,
) -> Result<String, AppError> {
    let mut registrar = TableRegistrar::new(opt_in_marker);
    registrar.register_document(&document);
    apply_activations(&mut document, &mut registrar, specs)?;
    render_output(&document, &registrar, format)
}
