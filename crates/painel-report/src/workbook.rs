use anyhow::{Context, Result};
use painel_validate::ColumnSummary;
use polars::prelude::DataFrame;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::common::{
    ANNOTATED_SHEET, MISSING_KEY_SHEET, SUMMARY_HEADERS, SUMMARY_SHEET, row_index, write_frame,
    write_header,
};

/// Renders the annotated panel as an xlsx buffer.
pub fn write_annotated_workbook(annotated: &DataFrame) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook
        .add_worksheet()
        .set_name(ANNOTATED_SHEET)
        .with_context(|| format!("create sheet {ANNOTATED_SHEET}"))?;
    write_frame(sheet, annotated).with_context(|| format!("write sheet {ANNOTATED_SHEET}"))?;
    workbook
        .save_to_buffer()
        .context("serialize annotated panel workbook")
}

/// Renders the rows without a primary key and their summary as an xlsx buffer.
pub fn write_missing_key_workbook(rows: &DataFrame, summary: &[ColumnSummary]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let sheet = workbook
        .add_worksheet()
        .set_name(MISSING_KEY_SHEET)
        .with_context(|| format!("create sheet {MISSING_KEY_SHEET}"))?;
    write_frame(sheet, rows).with_context(|| format!("write sheet {MISSING_KEY_SHEET}"))?;

    let sheet = workbook
        .add_worksheet()
        .set_name(SUMMARY_SHEET)
        .with_context(|| format!("create sheet {SUMMARY_SHEET}"))?;
    write_summary(sheet, summary).with_context(|| format!("write sheet {SUMMARY_SHEET}"))?;

    workbook
        .save_to_buffer()
        .context("serialize missing-key workbook")
}

/// One row per column; statistics that do not apply stay blank.
fn write_summary(sheet: &mut Worksheet, summary: &[ColumnSummary]) -> Result<()> {
    write_header(sheet, &SUMMARY_HEADERS)?;
    for (idx, column) in summary.iter().enumerate() {
        let row = row_index(idx + 1)?;
        sheet.write_string(row, 0, &column.column)?;
        sheet.write_number(row, 1, column.count as f64)?;
        if let Some(text) = &column.text {
            sheet.write_number(row, 2, text.unique as f64)?;
            if let Some(top) = text.top.as_deref().filter(|t| !t.is_empty()) {
                sheet.write_string(row, 3, top)?;
            }
            if let Some(freq) = text.freq {
                sheet.write_number(row, 4, freq as f64)?;
            }
        }
        if let Some(numeric) = &column.numeric {
            let stats = [
                (5, Some(numeric.mean)),
                (6, numeric.std),
                (7, Some(numeric.min)),
                (8, Some(numeric.q25)),
                (9, Some(numeric.q50)),
                (10, Some(numeric.q75)),
                (11, Some(numeric.max)),
            ];
            for (col, value) in stats {
                if let Some(value) = value.filter(|v| v.is_finite()) {
                    sheet.write_number(row, col, value)?;
                }
            }
        }
    }
    Ok(())
}
