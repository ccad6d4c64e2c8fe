use anyhow::Result;
use painel_cli::config::{ColumnOverrides, resolve_columns};
use painel_cli::pipeline::{PipelineInputs, PipelineOptions, run_pipeline};
use painel_ingest::{LoadedTable, load_path};
use painel_model::RunReport;
use tracing::info_span;

use crate::cli::{InspectArgs, ProcessArgs};

pub fn run_process(args: &ProcessArgs) -> Result<RunReport> {
    let overrides = ColumnOverrides {
        state: args.columns.state.clone(),
        status: args.columns.status.clone(),
        key: args.columns.key.clone(),
        reference_key: args.columns.reference_key.clone(),
    };
    let columns = resolve_columns(args.config.as_deref(), &overrides)?;
    let inputs = PipelineInputs {
        panel: args.panel.clone(),
        educapi: args.educapi.clone(),
        comercial: args.comercial.clone(),
    };
    let options = PipelineOptions {
        columns,
        output_dir: args.output_dir.clone(),
        dry_run: args.dry_run,
    };
    run_pipeline(&inputs, &options)
}

pub fn run_inspect(args: &InspectArgs) -> Result<LoadedTable> {
    let span = info_span!("inspect", file = %args.file.display());
    let _guard = span.enter();
    Ok(load_path(&args.file)?)
}
