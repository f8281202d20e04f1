//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `RESTO_DATA_DIR` - Directory backing durable storage (default: `.resto`)
//! - `RESTO_MENU_FILE` - JSON menu to use instead of the built-in one
//! - `RESTO_EXPORT_DIR` - Where printable bills are written (default: `<data dir>/exports`)
//! - `RESTO_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//! - `RUST_LOG` - Standard tracing filter directives

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".resto";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the durable key-value store
    pub data_dir: PathBuf,
    /// Menu file overriding the built-in menu
    pub menu_file: Option<PathBuf>,
    /// Directory for exported bills
    pub export_dir: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from(DEFAULT_DATA_DIR);
        Self {
            export_dir: data_dir.join("exports"),
            data_dir,
            menu_file: None,
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = get("RESTO_DATA_DIR").map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let export_dir = get("RESTO_EXPORT_DIR").map_or_else(|| data_dir.join("exports"), PathBuf::from);
        let menu_file = get("RESTO_MENU_FILE").map(PathBuf::from);
        let log_format = get("RESTO_LOG_FORMAT")
            .map(|value| value.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("RESTO_LOG_FORMAT".to_string(), e))?
            .unwrap_or_default();

        Ok(Self {
            data_dir,
            menu_file,
            export_dir,
            log_format,
        })
    }

    /// Path of the printable bill export.
    #[must_use]
    pub fn bill_export_path(&self) -> PathBuf {
        self.export_dir.join("bill.html")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.data_dir, PathBuf::from(".resto"));
        assert_eq!(config.bill_export_path(), PathBuf::from(".resto/exports/bill.html"));
    }

    #[test]
    fn test_export_dir_follows_data_dir() {
        let config = StorefrontConfig::from_lookup(lookup(&[("RESTO_DATA_DIR", "/srv/resto")])).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/srv/resto/exports"));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("RESTO_MENU_FILE", "menu.json"),
            ("RESTO_EXPORT_DIR", "out"),
            ("RESTO_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.menu_file, Some(PathBuf::from("menu.json")));
        assert_eq!(config.export_dir, PathBuf::from("out"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_log_format() {
        let err = StorefrontConfig::from_lookup(lookup(&[("RESTO_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "RESTO_LOG_FORMAT"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = StorefrontConfig::from_lookup(lookup(&[("RESTO_MENU_FILE", "  ")])).unwrap();
        assert!(config.menu_file.is_none());
    }
}
