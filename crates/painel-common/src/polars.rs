//! Polars helpers for string-typed frames.

use polars::prelude::*;

/// Formats a floating-point number without a decimal part when it is integral.
///
/// # Examples
///
/// ```
/// use painel_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(10.0), "10");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(-0.25), "-0.25");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// True for a missing cell or one that holds only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Reads a column as optional strings, casting non-string dtypes first.
pub fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    let str_col = column.cast(&DataType::String)?;
    let str_chunked = str_col.str()?;
    Ok(str_chunked
        .iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Builds a frame of string columns from a header row and data rows.
///
/// Short rows are padded with nulls; cells beyond the header are ignored.
/// Header names must already be unique.
pub fn string_frame(headers: &[String], rows: &[Vec<Option<String>>]) -> PolarsResult<DataFrame> {
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|row| row.get(idx).cloned().flatten())
                .collect();
            Series::new(header.as_str().into(), values).into_column()
        })
        .collect();
    DataFrame::new(columns)
}
