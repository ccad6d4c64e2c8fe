use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::status::{FinalStatus, LookupStatus, StateStatus, ValidationStatus};

/// Per-label tallies of the derived columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub state_status: BTreeMap<String, usize>,
    pub validation_status: BTreeMap<String, usize>,
    pub lookup: BTreeMap<String, usize>,
    pub final_status: BTreeMap<String, usize>,
}

impl StatusCounts {
    pub fn record(
        &mut self,
        state: StateStatus,
        validation: ValidationStatus,
        lookup: LookupStatus,
        final_status: FinalStatus,
    ) {
        bump(&mut self.state_status, state.as_str());
        bump(&mut self.validation_status, validation.as_str());
        bump(&mut self.lookup, lookup.as_str());
        bump(&mut self.final_status, final_status.as_str());
    }

    /// Number of rows recorded.
    pub fn total(&self) -> usize {
        self.final_status.values().sum()
    }
}

fn bump(counts: &mut BTreeMap<String, usize>, label: &str) {
    *counts.entry(label.to_string()).or_insert(0) += 1;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceSizes {
    pub educapi: usize,
    pub comercial: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    /// Workbook with the annotated panel.
    pub annotated: Option<PathBuf>,
    /// Workbook with the rows missing a primary key and their summary.
    pub missing_keys: Option<PathBuf>,
}

/// Outcome of one invocation, printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub panel: PathBuf,
    pub rows: usize,
    pub missing_key_rows: usize,
    pub reference_sizes: ReferenceSizes,
    pub counts: StatusCounts,
    pub outputs: OutputPaths,
}
