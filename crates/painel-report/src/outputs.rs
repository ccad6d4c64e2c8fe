use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use painel_model::OutputPaths;
use painel_validate::ValidationOutcome;
use tracing::{debug, info};

use crate::common::{ANNOTATED_FILE, MISSING_KEY_FILE};
use crate::workbook::{write_annotated_workbook, write_missing_key_workbook};

/// Writes the output workbooks into `output_dir`, creating it if needed.
///
/// The missing-key report is only written when such rows exist.
pub fn write_outputs(outcome: &ValidationOutcome, output_dir: &Path) -> Result<OutputPaths> {
    let start = Instant::now();
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let annotated_path = output_dir.join(ANNOTATED_FILE);
    let bytes = write_annotated_workbook(&outcome.annotated)
        .with_context(|| format!("build {ANNOTATED_FILE}"))?;
    std::fs::write(&annotated_path, bytes)
        .with_context(|| format!("write {}", annotated_path.display()))?;
    let mut outputs = OutputPaths {
        annotated: Some(annotated_path),
        missing_keys: None,
    };

    if outcome.missing_key_rows.height() > 0 {
        let path = output_dir.join(MISSING_KEY_FILE);
        let bytes =
            write_missing_key_workbook(&outcome.missing_key_rows, &outcome.missing_key_summary)
                .with_context(|| format!("build {MISSING_KEY_FILE}"))?;
        std::fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
        outputs.missing_keys = Some(path);
    } else {
        debug!("no rows without a primary key; skipping {MISSING_KEY_FILE}");
        remove_stale(&output_dir.join(MISSING_KEY_FILE))?;
    }

    info!(
        output_dir = %output_dir.display(),
        rows = outcome.annotated.height(),
        missing_key_rows = outcome.missing_key_rows.height(),
        duration_ms = start.elapsed().as_millis(),
        "outputs written"
    );
    Ok(outputs)
}

/// Deletes a report left by an earlier run so it cannot be mistaken for this one.
fn remove_stale(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed missing-key report from an earlier run");
            Ok(())
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error).with_context(|| format!("remove {}", path.display())),
    }
}
