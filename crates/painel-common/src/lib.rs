//! Shared utilities for the painel crates.
//!
//! Every table in the workspace is a Polars `DataFrame` whose columns hold
//! optional strings. This crate owns the helpers that build such frames and
//! read them back without coercing any value to a number or a date.

pub mod lookup;
pub mod polars;

pub use lookup::CaseInsensitiveSet;
pub use polars::{format_numeric, is_blank, parse_f64, string_frame, string_values};
