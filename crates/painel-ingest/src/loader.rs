//! Ordered load strategies and the public loading entry points.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use painel_common::string_frame;
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use crate::delimited::read_delimited;
use crate::error::{LoadError, Result, StrategyFailure};
use crate::header::normalize_headers;
use crate::spreadsheet::{RawTable, read_first_sheet};

/// Maximum input file size accepted by [`load_path`] (500 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// A way of turning raw bytes into a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Workbook formats, which carry explicit structure.
    Spreadsheet,
    /// Comma or semicolon separated text in an unknown encoding.
    DelimitedText,
}

/// Strategies tried by [`load`], in order.
pub const DEFAULT_STRATEGIES: [LoadStrategy; 2] =
    [LoadStrategy::Spreadsheet, LoadStrategy::DelimitedText];

impl LoadStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadStrategy::Spreadsheet => "spreadsheet",
            LoadStrategy::DelimitedText => "delimited text",
        }
    }

    fn attempt(self, bytes: &[u8]) -> std::result::Result<LoadedTable, StrategyFailure> {
        match self {
            LoadStrategy::Spreadsheet => {
                let (sheet, raw) = read_first_sheet(bytes)?;
                Ok(LoadedTable {
                    frame: build_frame(raw)?,
                    format: TableFormat::Spreadsheet { sheet },
                    skipped_records: 0,
                })
            }
            LoadStrategy::DelimitedText => {
                let parsed = read_delimited(bytes)?;
                Ok(LoadedTable {
                    frame: build_frame(parsed.table)?,
                    format: TableFormat::Delimited {
                        delimiter: char::from(parsed.delimiter),
                        encoding: parsed.encoding,
                    },
                    skipped_records: parsed.skipped_records,
                })
            }
        }
    }
}

impl fmt::Display for LoadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a loaded table was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFormat {
    Spreadsheet { sheet: String },
    Delimited { delimiter: char, encoding: &'static str },
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Spreadsheet { sheet } => write!(f, "spreadsheet (sheet '{sheet}')"),
            TableFormat::Delimited {
                delimiter,
                encoding,
            } => write!(f, "delimited text ('{delimiter}', {encoding})"),
        }
    }
}

/// A table whose columns are all optional strings.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub frame: DataFrame,
    pub format: TableFormat,
    /// Records dropped by the lenient tokenizer.
    pub skipped_records: usize,
}

impl LoadedTable {
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }
}

fn build_frame(raw: RawTable) -> std::result::Result<DataFrame, StrategyFailure> {
    let headers = normalize_headers(&raw.headers);
    string_frame(&headers, &raw.rows).map_err(|e| StrategyFailure::Frame(e.to_string()))
}

/// Loads a table from raw bytes using [`DEFAULT_STRATEGIES`].
///
/// `filename` is only used for messages.
pub fn load(bytes: &[u8], filename: &str) -> Result<LoadedTable> {
    load_with_strategies(bytes, filename, &DEFAULT_STRATEGIES)
}

/// Loads a table from raw bytes, trying each strategy in order.
///
/// The first strategy that succeeds wins. When all fail the error carries
/// the cause reported by the last one.
pub fn load_with_strategies(
    bytes: &[u8],
    filename: &str,
    strategies: &[LoadStrategy],
) -> Result<LoadedTable> {
    let span = info_span!("load", file = %filename, bytes = bytes.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut last_failure = StrategyFailure::Empty;
    for strategy in strategies {
        match strategy.attempt(bytes) {
            Ok(table) => {
                info!(
                    file = %filename,
                    format = %table.format,
                    rows = table.height(),
                    columns = table.frame.width(),
                    skipped_records = table.skipped_records,
                    duration_ms = start.elapsed().as_millis(),
                    "table loaded"
                );
                return Ok(table);
            }
            Err(failure) => {
                debug!(file = %filename, %strategy, %failure, "load strategy failed");
                last_failure = failure;
            }
        }
    }
    Err(LoadError::Unparseable {
        file: filename.to_string(),
        cause: last_failure,
    })
}

/// Reads a file from disk and loads it with [`load`].
pub fn load_path(path: &Path) -> Result<LoadedTable> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: MAX_INPUT_FILE_SIZE,
        });
    }
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    load(&bytes, &filename)
}

fn io_error(path: &Path, error: std::io::Error) -> LoadError {
    if error.kind() == std::io::ErrorKind::NotFound {
        LoadError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes_fail_with_final_cause() {
        let err = load(b"", "PAINEL.xlsx").unwrap_err();
        match err {
            LoadError::Unparseable { file, cause } => {
                assert_eq!(file, "PAINEL.xlsx");
                assert_eq!(cause, StrategyFailure::Empty);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_single_strategy_reports_its_own_failure() {
        let err = load_with_strategies(b"A,B\n1,2\n", "x.csv", &[LoadStrategy::Spreadsheet])
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Unparseable {
                cause: StrategyFailure::Workbook(_),
                ..
            }
        ));
    }

    #[test]
    fn test_format_display() {
        let format = TableFormat::Delimited {
            delimiter: ';',
            encoding: "windows-1252",
        };
        assert_eq!(format.to_string(), "delimited text (';', windows-1252)");
    }
}
