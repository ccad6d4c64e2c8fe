//! Designated panel columns and the names of the derived columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived column holding the state-based status.
pub const VALIDATION_STATE_STATUS: &str = "VALIDATION_STATE_STATUS";
/// Derived column comparing the state-based status with the recorded one.
pub const VALIDATION_STATUS: &str = "VALIDATION_STATUS";
/// Derived column holding the reference-list lookup result.
pub const LOOKUP_VALIDATION: &str = "LOOKUP_VALIDATION";
/// Derived column holding the reconciled verdict.
pub const FINAL_STATUS: &str = "FINAL_STATUS";

/// Derived columns in the order they are appended to the panel.
pub const DERIVED_COLUMNS: [&str; 4] = [
    VALIDATION_STATE_STATUS,
    VALIDATION_STATUS,
    LOOKUP_VALIDATION,
    FINAL_STATUS,
];

/// Names of the columns the engine reads.
///
/// The defaults are the column headers of the panel and reference
/// workbooks the tool was built around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConfig {
    /// Panel column with the state name.
    pub state: String,
    /// Panel column with the externally recorded status.
    pub status: String,
    /// Panel column with the primary key (CPF).
    pub key: String,
    /// Key column in the EDUCAPI and COMERCIAL tables.
    pub reference_key: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            state: "L".to_string(),
            status: "C".to_string(),
            key: "H".to_string(),
            reference_key: "E".to_string(),
        }
    }
}

impl ColumnConfig {
    /// Panel columns that must exist before validation starts.
    pub fn required_panel_columns(&self) -> [(ColumnRole, &str); 3] {
        [
            (ColumnRole::State, self.state.as_str()),
            (ColumnRole::Status, self.status.as_str()),
            (ColumnRole::Key, self.key.as_str()),
        ]
    }
}

/// What a designated column is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    State,
    Status,
    Key,
}

impl ColumnRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnRole::State => "state",
            ColumnRole::Status => "recorded status",
            ColumnRole::Key => "primary key",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_workbook_layout() {
        let columns = ColumnConfig::default();
        assert_eq!(columns.state, "L");
        assert_eq!(columns.status, "C");
        assert_eq!(columns.key, "H");
        assert_eq!(columns.reference_key, "E");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let columns: ColumnConfig = toml::from_str("key = \"CPF\"").expect("parse columns");
        assert_eq!(columns.key, "CPF");
        assert_eq!(columns.state, "L");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed: Result<ColumnConfig, _> = toml::from_str("cpf = \"H\"");
        assert!(parsed.is_err());
    }
}
