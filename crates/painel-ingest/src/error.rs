//! Error types for table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single load strategy rejected the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyFailure {
    /// The input holds no bytes, or only whitespace.
    #[error("file is empty")]
    Empty,

    /// The bytes are not a workbook the spreadsheet reader understands.
    #[error("not a spreadsheet workbook: {0}")]
    Workbook(String),

    /// The workbook opened but lists no sheets.
    #[error("workbook contains no sheets")]
    NoSheets,

    /// Decoded text contains NUL or other control characters.
    #[error("content is binary, not delimited text")]
    Binary,

    /// No non-blank record could serve as the header row.
    #[error("no header row found")]
    NoHeader,

    /// The parsed cells could not be assembled into a table.
    #[error("failed to build table: {0}")]
    Frame(String),
}

/// Errors that can occur while loading an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file exceeds the size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Parse Errors ===
    /// Every load strategy rejected the input; `cause` is the last failure.
    #[error("could not load {file}: {cause}")]
    Unparseable {
        file: String,
        #[source]
        cause: StrategyFailure,
    },
}

impl LoadError {
    /// Name of the file the error refers to.
    pub fn file(&self) -> String {
        match self {
            LoadError::FileNotFound { path }
            | LoadError::FileRead { path, .. }
            | LoadError::FileTooLarge { path, .. } => path.display().to_string(),
            LoadError::Unparseable { file, .. } => file.clone(),
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
