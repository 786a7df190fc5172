//! Binding controllers to opted-in tables.
//!
//! Each eligible table gets exactly one [`SortController`], created once and
//! owned here. Registering a table twice is refused, so repeated scans of the
//! same document never stack a second controller on a table.

use crate::document::Document;
use crate::model::{Direction, Table, TableId};
use crate::sort::{Activation, SortController};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Default opt-in class token.
pub const DEFAULT_OPT_IN_MARKER: &str = "sortable";

/// Outcome of a single registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new controller was bound.
    Registered,
    /// The table already has a controller; nothing changed.
    AlreadyRegistered,
    /// The table does not carry the opt-in marker.
    NotEligible,
}

/// Owns one controller per sortable table.
#[derive(Debug, Clone)]
pub struct TableRegistrar {
    opt_in_marker: String,
    controllers: BTreeMap<TableId, SortController>,
}

impl Default for TableRegistrar {
    fn default() -> Self {
        Self::new(DEFAULT_OPT_IN_MARKER)
    }
}

impl TableRegistrar {
    /// Registrar matching tables whose class list contains `opt_in_marker`.
    pub fn new(opt_in_marker: impl Into<String>) -> Self {
        Self {
            opt_in_marker: opt_in_marker.into(),
            controllers: BTreeMap::new(),
        }
    }

    /// Class token tables must carry.
    pub fn opt_in_marker(&self) -> &str {
        &self.opt_in_marker
    }

    /// Whether `table` opts in to sorting.
    pub fn is_eligible(&self, table: &Table) -> bool {
        table.attributes().has_class(&self.opt_in_marker)
    }

    /// Bind a controller to `table` if it is eligible and not yet bound.
    pub fn register(&mut self, table: &Table) -> Registration {
        if !self.is_eligible(table) {
            return Registration::NotEligible;
        }
        if self.controllers.contains_key(&table.id()) {
            debug!(table = %table.id(), "already registered; skipping");
            return Registration::AlreadyRegistered;
        }
        self.controllers
            .insert(table.id(), SortController::for_table(table));
        debug!(table = %table.id(), "registered");
        Registration::Registered
    }

    /// Register every eligible table in `document`. Returns how many were new.
    pub fn register_document(&mut self, document: &Document) -> usize {
        let added = document
            .tables()
            .iter()
            .filter(|t| self.register(t) == Registration::Registered)
            .count();
        info!(
            added,
            total = self.controllers.len(),
            marker = %self.opt_in_marker,
            "sortable tables registered"
        );
        added
    }

    /// Whether `id` has a controller.
    pub fn is_registered(&self, id: TableId) -> bool {
        self.controllers.contains_key(&id)
    }

    /// Registered table ids in document order.
    pub fn registered_ids(&self) -> Vec<TableId> {
        self.controllers.keys().copied().collect()
    }

    /// Controller bound to `id`.
    pub fn controller(&self, id: TableId) -> Option<&SortController> {
        self.controllers.get(&id)
    }

    /// Route an activation on table `id` to its controller.
    ///
    /// Unregistered tables, and ids missing from `document`, ignore it.
    pub fn activate(
        &mut self,
        document: &mut Document,
        id: TableId,
        activation: Activation,
    ) -> Option<Direction> {
        let controller = self.controllers.get_mut(&id)?;
        let table = document.table_mut(id)?;
        controller.handle_header_activation(table, activation)
    }
}
