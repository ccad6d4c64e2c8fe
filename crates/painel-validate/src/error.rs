use std::fmt;

use painel_model::ColumnRole;
use polars::prelude::PolarsError;
use thiserror::Error;

/// A designated column that the panel does not contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumn {
    pub role: ColumnRole,
    pub name: String,
}

impl fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.name, self.role)
    }
}

/// The panel lacks one or more required columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("panel is missing required column(s): {}", join_missing(.missing))]
pub struct SchemaError {
    pub missing: Vec<MissingColumn>,
}

fn join_missing(missing: &[MissingColumn]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_every_missing_column() {
        let err = SchemaError {
            missing: vec![
                MissingColumn {
                    role: ColumnRole::State,
                    name: "L".to_string(),
                },
                MissingColumn {
                    role: ColumnRole::Key,
                    name: "H".to_string(),
                },
            ],
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"panel is missing required column(s): 'L' (state), 'H' (primary key)"
        );
    }
}
