use std::time::Instant;

use painel_common::{CaseInsensitiveSet, is_blank, string_values};
use painel_model::{ColumnConfig, DERIVED_COLUMNS, ReferenceSizes, StatusCounts};
use polars::prelude::{
    BooleanChunked, DataFrame, IntoColumn, NamedFrom, NewChunkedArray, PolarsResult, Series,
};
use tracing::{info, info_span};

use crate::error::{MissingColumn, SchemaError, ValidateError};
use crate::reference::ReferenceSets;
use crate::rules::{RowVerdict, evaluate_row};
use crate::summary::{ColumnSummary, describe};

/// Panel column names as spelled in the loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub state: String,
    pub status: String,
    pub key: String,
}

/// Everything produced by one validation pass.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Panel with the four derived columns appended.
    pub annotated: DataFrame,
    /// Annotated rows whose primary key is null or blank, in panel order.
    pub missing_key_rows: DataFrame,
    pub missing_key_summary: Vec<ColumnSummary>,
    pub columns: ResolvedColumns,
    pub counts: StatusCounts,
    pub reference_sizes: ReferenceSizes,
}

/// Finds the designated columns, exact match first.
///
/// Every missing column is reported, not just the first.
pub fn resolve_panel_columns(
    panel: &DataFrame,
    columns: &ColumnConfig,
) -> Result<ResolvedColumns, SchemaError> {
    let lookup = CaseInsensitiveSet::new(
        panel
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str()),
    );
    let mut missing = Vec::new();
    let [state, status, key] = columns.required_panel_columns().map(|(role, name)| {
        match lookup.get(name) {
            Some(found) => found.to_string(),
            None => {
                missing.push(MissingColumn {
                    role,
                    name: name.to_string(),
                });
                String::new()
            }
        }
    });
    if !missing.is_empty() {
        return Err(SchemaError { missing });
    }
    Ok(ResolvedColumns { state, status, key })
}

/// Annotates the panel and isolates rows without a primary key.
///
/// Absent reference tables act as empty key sets. Fails only when the
/// panel lacks a designated column; no row is evaluated in that case.
pub fn validate(
    panel: &DataFrame,
    educapi: Option<&DataFrame>,
    comercial: Option<&DataFrame>,
    columns: &ColumnConfig,
) -> Result<ValidationOutcome, ValidateError> {
    let span = info_span!("validate", rows = panel.height());
    let _guard = span.enter();
    let start = Instant::now();

    let resolved = resolve_panel_columns(panel, columns)?;
    let references = ReferenceSets::from_frames(educapi, comercial, &columns.reference_key);
    let reference_sizes = ReferenceSizes {
        educapi: references.educapi.len(),
        comercial: references.comercial.len(),
    };

    let states = string_values(panel, &resolved.state)?;
    let recorded = string_values(panel, &resolved.status)?;
    let keys = string_values(panel, &resolved.key)?;

    let mut counts = StatusCounts::default();
    let verdicts: Vec<RowVerdict> = states
        .iter()
        .zip(&recorded)
        .zip(&keys)
        .map(|((state, status), key)| {
            let verdict =
                evaluate_row(state.as_deref(), status.as_deref(), key.as_deref(), &references);
            counts.record(
                verdict.state_status,
                verdict.validation_status,
                verdict.lookup,
                verdict.final_status,
            );
            verdict
        })
        .collect();

    let annotated = annotate(panel, &verdicts)?;
    let missing: Vec<bool> = keys.iter().map(|key| is_blank(key.as_deref())).collect();
    let mask = BooleanChunked::from_slice("missing_key".into(), &missing);
    let missing_key_rows = annotated.filter(&mask)?;
    let missing_key_summary = describe(&missing_key_rows, &[resolved.key.as_str()])?;

    info!(
        rows = annotated.height(),
        missing_key_rows = missing_key_rows.height(),
        educapi_keys = reference_sizes.educapi,
        comercial_keys = reference_sizes.comercial,
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );

    Ok(ValidationOutcome {
        annotated,
        missing_key_rows,
        missing_key_summary,
        columns: resolved,
        counts,
        reference_sizes,
    })
}

/// Appends the derived columns; existing columns with the same names are replaced in place.
fn annotate(panel: &DataFrame, verdicts: &[RowVerdict]) -> PolarsResult<DataFrame> {
    let mut annotated = panel.clone();
    let labels: [fn(&RowVerdict) -> &'static str; 4] = [
        |v| v.state_status.as_str(),
        |v| v.validation_status.as_str(),
        |v| v.lookup.as_str(),
        |v| v.final_status.as_str(),
    ];
    for (name, label) in DERIVED_COLUMNS.into_iter().zip(labels) {
        let values: Vec<&str> = verdicts.iter().map(label).collect();
        annotated.with_column(Series::new(name.into(), values).into_column())?;
    }
    Ok(annotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use painel_model::{ColumnRole, FINAL_STATUS};
    use polars::df;

    #[test]
    fn resolve_falls_back_to_case_insensitive() {
        let panel = df! { "l" => &["SP"], "C" => &["x"], " h " => &["1"] }.unwrap();
        let resolved = resolve_panel_columns(&panel, &ColumnConfig::default()).unwrap();
        assert_eq!(resolved.state, "l");
        assert_eq!(resolved.status, "C");
        assert_eq!(resolved.key, " h ");
    }

    #[test]
    fn resolve_reports_all_missing_columns() {
        let panel = df! { "C" => &["x"] }.unwrap();
        let err = resolve_panel_columns(&panel, &ColumnConfig::default()).unwrap_err();
        let roles: Vec<ColumnRole> = err.missing.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ColumnRole::State, ColumnRole::Key]);
    }

    #[test]
    fn annotate_replaces_existing_derived_columns() {
        let panel = df! { "L" => &["Bahia"], "FINAL_STATUS" => &["stale"] }.unwrap();
        let verdict = evaluate_row(Some("Bahia"), None, None, &ReferenceSets::default());
        let annotated = annotate(&panel, &[verdict]).unwrap();
        assert_eq!(annotated.width(), 5);
        let names: Vec<&str> = annotated
            .get_column_names()
            .into_iter()
            .map(|n| n.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "L",
                "FINAL_STATUS",
                "VALIDATION_STATE_STATUS",
                "VALIDATION_STATUS",
                "LOOKUP_VALIDATION"
            ]
        );
        assert_eq!(names[1], DERIVED_COLUMNS[3]);
        assert_eq!(names[2..], DERIVED_COLUMNS[..3]);
        assert_eq!(
            string_values(&annotated, FINAL_STATUS).unwrap(),
            vec![Some("VERIFICAR".to_string())]
        );
    }
}
