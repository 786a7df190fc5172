//! tablesort
//!
//! Click-to-sort for HTML tables. Tables carrying an opt-in class get a sort
//! controller; activating a header cell reorders the data rows by that
//! column, toggling between ascending and descending.
//!
//! Pure core: [`sort`] (keys, state, ordering), [`registrar`], [`model`].
//! Impure shell: [`document`] (HTML in/out), [`source`], [`config`],
//! [`logging`], [`view`] (TUI).

pub mod config;
pub mod document;
pub mod logging;
pub mod model;
pub mod registrar;
pub mod sort;
pub mod source;
pub mod state;
pub mod view;

// Batch-mode integration
pub mod integration;
