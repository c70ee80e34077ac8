//! Configuration handling for the form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "biodata_form=warn";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    /// Use the `+62 XXX XXXX XXXX` input mask for the phone field
    pub phone_input_mask: Option<bool>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "biodata", "biodata-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the platform config directory
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn phone_input_mask(&self) -> bool {
        self.phone_input_mask.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.phone_input_mask.is_none());
        assert!(config.log_filter.is_none());
        assert!(config.phone_input_mask());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, FormConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Unknown keys are ignored
        let json = r#"{"phone_input_mask": false, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert!(!parsed.phone_input_mask());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = FormConfig {
            phone_input_mask: Some(false),
            log_filter: Some("biodata_form=debug".to_string()),
        };

        config.save_to(&path).unwrap();
        let loaded = FormConfig::load_from(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.log_filter(), "biodata_form=debug");
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FormConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, FormConfig::default());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = FormConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_config_path_points_at_json_file() {
        if let Some(path) = FormConfig::config_path() {
            assert!(path.ends_with("config.json"));
        }
    }
}
