//! Output names and sheet helpers shared by both workbooks.

use anyhow::{Context, Result};
use painel_common::string_values;
use polars::prelude::DataFrame;
use rust_xlsxwriter::{Format, Worksheet};

/// File name of the annotated panel workbook.
pub const ANNOTATED_FILE: &str = "PAINEL_Processado_Final.xlsx";

/// Sheet holding the annotated panel.
pub const ANNOTATED_SHEET: &str = "Painel_Processado";

/// File name of the missing-key report.
pub const MISSING_KEY_FILE: &str = "Relatorio_Linhas_Sem_PK.xlsx";

/// Sheet holding the rows without a primary key.
pub const MISSING_KEY_SHEET: &str = "Linhas_Sem_PK";

/// Sheet holding the column summary of those rows.
pub const SUMMARY_SHEET: &str = "Resumo_Geral";

/// Header row of the summary sheet.
pub const SUMMARY_HEADERS: [&str; 12] = [
    "Coluna", "count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%", "max",
];

pub(crate) fn header_format() -> Format {
    Format::new().set_bold()
}

pub(crate) fn column_index(idx: usize) -> Result<u16> {
    u16::try_from(idx).with_context(|| format!("column {idx} exceeds the sheet width"))
}

pub(crate) fn row_index(idx: usize) -> Result<u32> {
    u32::try_from(idx).with_context(|| format!("row {idx} exceeds the sheet height"))
}

pub(crate) fn write_header<S: AsRef<str>>(sheet: &mut Worksheet, names: &[S]) -> Result<()> {
    let bold = header_format();
    for (idx, name) in names.iter().enumerate() {
        sheet
            .write_string_with_format(0, column_index(idx)?, name.as_ref(), &bold)
            .with_context(|| format!("write header '{}'", name.as_ref()))?;
    }
    sheet.set_freeze_panes(1, 0).context("freeze header row")?;
    Ok(())
}

/// Writes a frame as text cells under a bold header; null and empty cells stay blank.
pub(crate) fn write_frame(sheet: &mut Worksheet, df: &DataFrame) -> Result<()> {
    let names: Vec<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    write_header(sheet, &names)?;
    for (col_idx, name) in names.iter().enumerate() {
        let col = column_index(col_idx)?;
        let values = string_values(df, name).with_context(|| format!("read column '{name}'"))?;
        for (row_idx, value) in values.iter().enumerate() {
            let Some(value) = value.as_deref().filter(|v| !v.is_empty()) else {
                continue;
            };
            sheet
                .write_string(row_index(row_idx + 1)?, col, value)
                .with_context(|| format!("write column '{name}' row {}", row_idx + 1))?;
        }
    }
    Ok(())
}
