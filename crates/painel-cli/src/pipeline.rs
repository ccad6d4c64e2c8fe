//! Load, validate and write: one invocation of `painel process`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use painel_common::{is_blank, string_values};
use painel_ingest::load_path;
use painel_model::{ColumnConfig, LOOKUP_VALIDATION, OutputPaths, RunReport};
use painel_report::write_outputs;
use painel_validate::{ValidationOutcome, validate};
use polars::prelude::DataFrame;
use tracing::{Level, debug, enabled, info, info_span, trace, warn};

use crate::logging::redact_value;

/// Files of one run. Only the panel is required.
#[derive(Debug, Clone)]
pub struct PipelineInputs {
    pub panel: PathBuf,
    pub educapi: Option<PathBuf>,
    pub comercial: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub columns: ColumnConfig,
    /// Defaults to the panel's directory.
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// Runs the whole pipeline and returns the report printed by the CLI.
///
/// A panel that cannot be loaded or lacks a designated column aborts the
/// run before any file is written. Reference files that cannot be loaded
/// are logged and treated as empty lists.
pub fn run_pipeline(inputs: &PipelineInputs, options: &PipelineOptions) -> Result<RunReport> {
    let run_span = info_span!("run", panel = %inputs.panel.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let panel = load_path(&inputs.panel)?;
    if panel.skipped_records > 0 {
        warn!(
            file = %inputs.panel.display(),
            skipped = panel.skipped_records,
            "malformed panel records were skipped"
        );
    }
    let panel = panel.into_frame();
    let educapi = load_reference("EDUCAPI", inputs.educapi.as_deref());
    let comercial = load_reference("COMERCIAL", inputs.comercial.as_deref());

    let outcome = validate(&panel, educapi.as_ref(), comercial.as_ref(), &options.columns)?;
    if enabled!(Level::TRACE) {
        trace_unmatched_keys(&outcome)?;
    }

    let outputs = if options.dry_run {
        debug!("dry run; no workbooks written");
        OutputPaths::default()
    } else {
        let output_dir = options
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&inputs.panel));
        write_outputs(&outcome, &output_dir)?
    };

    info!(
        rows = outcome.annotated.height(),
        missing_key_rows = outcome.missing_key_rows.height(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunReport {
        panel: inputs.panel.clone(),
        rows: outcome.annotated.height(),
        missing_key_rows: outcome.missing_key_rows.height(),
        reference_sizes: outcome.reference_sizes,
        counts: outcome.counts,
        outputs,
    })
}

/// Loads a reference list; any failure yields `None` with a warning.
pub fn load_reference(name: &str, path: Option<&Path>) -> Option<DataFrame> {
    let path = path?;
    match load_path(path) {
        Ok(table) => {
            debug!(reference = name, rows = table.height(), format = %table.format, "reference loaded");
            Some(table.into_frame())
        }
        Err(error) => {
            warn!(reference = name, %error, "reference file ignored; treating it as an empty list");
            None
        }
    }
}

pub fn default_output_dir(panel: &Path) -> PathBuf {
    match panel.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn trace_unmatched_keys(outcome: &ValidationOutcome) -> Result<()> {
    let keys = string_values(&outcome.annotated, &outcome.columns.key)?;
    let lookups = string_values(&outcome.annotated, LOOKUP_VALIDATION)?;
    for (row, (key, lookup)) in keys.iter().zip(&lookups).enumerate() {
        let key = key.as_deref();
        if !is_blank(key) && is_blank(lookup.as_deref()) {
            trace!(row, key = redact_value(key.unwrap_or_default()), "key not in any reference list");
        }
    }
    Ok(())
}
