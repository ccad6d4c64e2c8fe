//! Column-wise descriptive summary of a table of string columns.

use std::collections::HashMap;

use painel_common::{parse_f64, string_values};
use polars::prelude::{DataFrame, PolarsResult};

/// Statistics of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    /// Non-null cells.
    pub count: usize,
    pub text: Option<TextSummary>,
    pub numeric: Option<NumericSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSummary {
    pub unique: usize,
    pub top: Option<String>,
    pub freq: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarises every column of `df` in column order.
///
/// Columns named in `text_columns` skip numeric detection.
pub fn describe(df: &DataFrame, text_columns: &[&str]) -> PolarsResult<Vec<ColumnSummary>> {
    df.get_column_names()
        .into_iter()
        .map(|name| {
            let values = string_values(df, name)?;
            let force_text = text_columns.contains(&name.as_str());
            Ok(summarize_values(name.as_str(), &values, force_text))
        })
        .collect()
}

pub fn summarize_values(
    column: &str,
    values: &[Option<String>],
    force_text: bool,
) -> ColumnSummary {
    let present: Vec<&str> = values.iter().flatten().map(String::as_str).collect();
    let numeric = if force_text {
        None
    } else {
        numeric_values(&present).map(|numbers| numeric_summary(&numbers))
    };
    let text = match numeric {
        Some(_) => None,
        None => Some(text_summary(&present)),
    };
    ColumnSummary {
        column: column.to_string(),
        count: present.len(),
        text,
        numeric,
    }
}

/// All values parsed, or `None` if any is not a number or there are none.
fn numeric_values(present: &[&str]) -> Option<Vec<f64>> {
    if present.is_empty() {
        return None;
    }
    present.iter().map(|value| parse_f64(value)).collect()
}

fn text_summary(present: &[&str]) -> TextSummary {
    // (count, first index) per distinct value
    let mut seen: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, value) in present.iter().enumerate() {
        seen.entry(*value).or_insert((0, idx)).0 += 1;
    }
    let top = seen
        .iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, (count, _))| ((*value).to_string(), *count));
    TextSummary {
        unique: seen.len(),
        freq: top.as_ref().map(|(_, count)| *count),
        top: top.map(|(value, _)| value),
    }
}

fn numeric_summary(numbers: &[f64]) -> NumericSummary {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let std = (sorted.len() > 1).then(|| {
        let squares: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
        (squares / (n - 1.0)).sqrt()
    });
    NumericSummary {
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        q50: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

/// Linear interpolation between the closest ranks of a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (pos - lower as f64)
}
