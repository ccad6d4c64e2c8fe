//! Spreadsheet strategy: first sheet of a workbook, every cell as text.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use painel_common::format_numeric;

use crate::error::StrategyFailure;

/// Header row plus data rows, before column names are normalized.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawTable {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<Option<String>>>,
}

/// Reads the first sheet of a workbook held in memory.
///
/// The first non-empty row is the header. A sheet without any non-empty
/// row yields a table with no columns.
pub(crate) fn read_first_sheet(bytes: &[u8]) -> Result<(String, RawTable), StrategyFailure> {
    if bytes.is_empty() {
        return Err(StrategyFailure::Empty);
    }
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| StrategyFailure::Workbook(e.to_string()))?;
    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(StrategyFailure::NoSheets);
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| StrategyFailure::Workbook(format!("sheet '{sheet_name}': {e}")))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|row| row.iter().any(Option::is_some));
    let Some(header_row) = rows.next() else {
        return Ok((sheet_name, RawTable::default()));
    };
    let headers = header_row
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();
    Ok((
        sheet_name,
        RawTable {
            headers,
            rows: rows.collect(),
        },
    ))
}

/// Renders a cell the way it reads in the workbook, without type coercion.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(n) => Some(n.to_string()),
        Data::Float(n) => Some(format_numeric(*n)),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|value| value.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| format_numeric(dt.as_f64())),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => Some(e.to_string()),
    }
}
