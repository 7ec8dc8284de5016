//! Catalog configuration via `shelfmark.toml`
//!
//! Holds the catalog capacity and the valid year bounds. Every key is
//! optional; an empty file yields the defaults.

use crate::error::{Error, Result};
use crate::years::YearBounds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "shelfmark.toml";

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 100;

/// Catalog configuration loaded from `shelfmark.toml`.
///
/// # Example
///
/// ```toml
/// # Maximum number of distinct entries
/// capacity = 100
///
/// [years]
/// start = -1999
/// end = 2023
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of distinct entries the catalog may hold.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Valid year bounds for authors and publications.
    #[serde(default)]
    pub years: YearBounds,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            years: YearBounds::default(),
        }
    }
}

impl CatalogConfig {
    /// Config with the given capacity and default year bounds
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Shelfmark catalog configuration
#
# Maximum number of distinct books the catalog holds (default: 100).
# Adding copies of a book already in the catalog does not use capacity.
capacity = 100

# Valid years for author life ranges and publication dates.
# Author years may equal a bound; publication years must lie strictly inside.
[years]
start = -1999
end = 2023
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or the year bounds
    /// are inverted.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
        config.years.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => {
                Error::config(format!("{} (in '{}')", reason, path.display()))
            }
            other => other,
        })?;
        info!(
            target: "shelfmark::config",
            path = %path.display(),
            capacity = config.capacity,
            "Loaded catalog config"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = CatalogConfig::default();
        assert_eq!(config.capacity, 100);
        assert_eq!(config.years, YearBounds::default());
    }

    #[test]
    fn default_toml_parses_to_default() {
        let config = CatalogConfig::from_toml_str(CatalogConfig::default_toml()).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn partial_years_section() {
        let config = CatalogConfig::from_toml_str("capacity = 5\n[years]\nend = 1999\n").unwrap();
        assert_eq!(config.capacity, 5);
        assert_eq!(config.years.start(), -1999);
        assert_eq!(config.years.end(), 1999);
    }

    #[test]
    fn inverted_years_rejected() {
        let err = CatalogConfig::from_toml_str("[years]\nstart = 2000\nend = 1000\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = CatalogConfig::from_toml_str("capacity = \"lots\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn with_capacity_keeps_default_years() {
        let config = CatalogConfig::with_capacity(7);
        assert_eq!(config.capacity, 7);
        assert_eq!(config.years, YearBounds::default());
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        CatalogConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = CatalogConfig::from_file(&path).unwrap();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "capacity = 3\n").unwrap();
        CatalogConfig::write_default_if_missing(&path).unwrap();

        let config = CatalogConfig::from_file(&path).unwrap();
        assert_eq!(config.capacity, 3);
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = CatalogConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn from_file_parse_error_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "capacity = [").unwrap();

        let err = CatalogConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn write_to_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = CatalogConfig {
            capacity: 12,
            years: YearBounds::new(1500, 1900).unwrap(),
        };
        config.write_to_file(&path).unwrap();

        let loaded = CatalogConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
