//! Table ingestion for the panel validator.
//!
//! Uploaded files are user-supplied and frequently malformed or
//! mis-encoded. This crate turns raw bytes of unknown format into a Polars
//! `DataFrame` whose columns are all optional strings.
//!
//! # Strategies
//!
//! - **Spreadsheet**: xlsx, xlsm, xlsb, xls and ods workbooks; first sheet,
//!   every cell rendered as text
//! - **Delimited text**: comma or semicolon separated, UTF-8 or
//!   Windows-1252, malformed records skipped
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use painel_ingest::load_path;
//!
//! let panel = load_path(Path::new("inputs/PAINEL.xlsx"))?;
//! println!("{} rows from {}", panel.height(), panel.format);
//! ```

mod delimited;
mod error;
mod header;
mod loader;
mod spreadsheet;

// === Error Types ===
pub use error::{LoadError, Result, StrategyFailure};

// === Loading ===
pub use loader::{
    DEFAULT_STRATEGIES, LoadStrategy, LoadedTable, MAX_INPUT_FILE_SIZE, TableFormat, load,
    load_path, load_with_strategies,
};

// === Delimited-text helpers ===
pub use delimited::{SNIFF_SAMPLE_BYTES, decode_permissive, sniff_delimiter};

// === Header normalization ===
pub use header::normalize_headers;
