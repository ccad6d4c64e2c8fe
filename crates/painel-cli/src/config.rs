//! TOML configuration and command-line overrides.
//!
//! ```toml
//! [columns]
//! state = "UF"
//! key = "CPF"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use painel_model::ColumnConfig;
use serde::Deserialize;

/// Contents of a `painel.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub columns: ColumnConfig,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parse config {}", path.display()))
    }
}

/// Column names given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOverrides {
    pub state: Option<String>,
    pub status: Option<String>,
    pub key: Option<String>,
    pub reference_key: Option<String>,
}

impl ColumnOverrides {
    pub fn apply(&self, columns: &mut ColumnConfig) {
        let pairs = [
            (&self.state, &mut columns.state),
            (&self.status, &mut columns.status),
            (&self.key, &mut columns.key),
            (&self.reference_key, &mut columns.reference_key),
        ];
        for (value, target) in pairs {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }
    }
}

/// Loads the optional config file and applies the overrides on top.
pub fn resolve_columns(config: Option<&Path>, overrides: &ColumnOverrides) -> Result<ColumnConfig> {
    let mut columns = match config {
        Some(path) => AppConfig::load(path)?.columns,
        None => ColumnConfig::default(),
    };
    overrides.apply(&mut columns);
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config = AppConfig::from_toml_str("[columns]\nkey = \"CPF\"\n").unwrap();
        assert_eq!(config.columns.key, "CPF");
        assert_eq!(config.columns.state, "L");
        assert_eq!(config.columns.reference_key, "E");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(AppConfig::from_toml_str("[columns]\ncpf = \"X\"\n").is_err());
        assert!(AppConfig::from_toml_str("[output]\ndir = \"x\"\n").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let mut columns = ColumnConfig::default();
        let overrides = ColumnOverrides {
            state: Some("UF".to_string()),
            reference_key: Some("CPF".to_string()),
            ..ColumnOverrides::default()
        };
        overrides.apply(&mut columns);
        assert_eq!(columns.state, "UF");
        assert_eq!(columns.status, "C");
        assert_eq!(columns.reference_key, "CPF");
    }

    #[test]
    fn test_resolve_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("painel.toml");
        std::fs::write(&path, "[columns]\nstate = \"UF\"\nstatus = \"STATUS\"\n").unwrap();
        let overrides = ColumnOverrides {
            status: Some("SITUACAO".to_string()),
            ..ColumnOverrides::default()
        };

        let columns = resolve_columns(Some(&path), &overrides).unwrap();

        assert_eq!(columns.state, "UF");
        assert_eq!(columns.status, "SITUACAO");
        assert_eq!(columns.key, "H");
    }

    #[test]
    fn test_missing_config_file_names_path() {
        let err = resolve_columns(Some(Path::new("nope/painel.toml")), &ColumnOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("nope/painel.toml"));
    }
}
