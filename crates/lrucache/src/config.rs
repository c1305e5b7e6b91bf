//! Configuration loading

use anyhow::{Context, Result};
use lrucache_core::CacheConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from a file.
    /// Returns `None` if the file does not exist so the caller can fall back to defaults.
    pub fn load(path: &str) -> Result<Option<Self>> {
        let config_path = Path::new(path);

        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(Config::load(path.to_str().unwrap()).unwrap().is_none());

        let config = Config::default();
        assert_eq!(config.cache.capacity, 1024);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
[cache]
capacity = 5

[logging]
level = "debug"
format = "json"
"#,
        );

        let config = Config::load(file.path().to_str().unwrap()).unwrap().unwrap();
        assert_eq!(config.cache.capacity, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config("[logging]\nlevel = \"warn\"\n");

        let config = Config::load(file.path().to_str().unwrap()).unwrap().unwrap();
        assert_eq!(config.cache.capacity, 1024);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_non_positive_capacity_parses_but_fails_validation() {
        let file = write_config("[cache]\ncapacity = -3\n");

        let config = Config::load(file.path().to_str().unwrap()).unwrap().unwrap();
        assert!(config.cache.validated_capacity().is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let file = write_config("[cache\ncapacity = ");

        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
