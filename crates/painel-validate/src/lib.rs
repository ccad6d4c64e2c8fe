//! Validation engine for the panel roster.
//!
//! Appends four derived columns to every panel row, in order:
//!
//! 1. `VALIDATION_STATE_STATUS` from the state name
//! 2. `VALIDATION_STATUS` comparing it with the recorded status
//! 3. `LOOKUP_VALIDATION` from reference-list membership of the key
//! 4. `FINAL_STATUS` reconciling the three
//!
//! Rows without a primary key are also returned on their own, together
//! with a column-wise summary for operator triage.

mod engine;
mod error;
mod reference;
mod rules;
mod summary;

pub use engine::{ResolvedColumns, ValidationOutcome, resolve_panel_columns, validate};
pub use error::{MissingColumn, SchemaError, ValidateError};
pub use reference::{ReferenceSet, ReferenceSets};
pub use rules::{
    RowVerdict, SAO_PAULO, evaluate_row, final_status, lookup_validation, reconcile,
    state_status, validation_status,
};
pub use summary::{ColumnSummary, NumericSummary, TextSummary, describe, summarize_values};
