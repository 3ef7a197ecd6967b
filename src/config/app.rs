//! Application configuration structures.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::report::ReportFormat;

use super::validation::ConfigError;

/// Default sentinel value.
pub const DEFAULT_SENTINEL: i64 = -1;

fn default_sentinel() -> i64 {
    DEFAULT_SENTINEL
}

fn default_format() -> String {
    "text".to_string()
}

/// Collection session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Input value that stops collection (default: -1).
    #[serde(default = "default_sentinel")]
    pub sentinel: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report rendering, "text" or "json" (default: "text").
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Collection session configuration.
    pub session: SessionConfig,

    /// Report output configuration.
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if any field is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.report_format()?;
        Ok(())
    }

    /// Parse the configured output format.
    pub fn report_format(&self) -> Result<ReportFormat, ConfigError> {
        ReportFormat::from_str(&self.output.format).map_err(|_| {
            ConfigError::Validation(format!(
                "unknown output format: '{}' (expected 'text' or 'json')",
                self.output.format
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.sentinel, DEFAULT_SENTINEL);
        assert_eq!(config.output.format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "session:\n  sentinel: 0\noutput:\n  format: json\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.session.sentinel, 0);
        assert_eq!(config.report_format().unwrap(), ReportFormat::Json);
    }

    #[test]
    fn test_load_partial_yaml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output:\n  format: json\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.session.sentinel, DEFAULT_SENTINEL);
        assert_eq!(config.report_format().unwrap(), ReportFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load("/nonexistent/config.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_validation_rejects_unknown_format() {
        let config = AppConfig {
            session: SessionConfig::default(),
            output: OutputConfig {
                format: "xml".to_string(),
            },
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("unknown output format")
        );
    }

    #[test]
    fn test_format_is_case_insensitive() {
        let config = AppConfig {
            session: SessionConfig::default(),
            output: OutputConfig {
                format: "JSON".to_string(),
            },
        };
        assert_eq!(config.report_format().unwrap(), ReportFormat::Json);
    }
}
