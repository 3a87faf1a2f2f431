//! Configuration management for assetbridge
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use assetbridge::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Library root: {}", config.library.root.display());
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `ASSETBRIDGE__<section>__<key>`
//!
//! Examples:
//! - `ASSETBRIDGE__LIBRARY__ROOT=/srv/media`
//! - `ASSETBRIDGE__THUMBNAIL__SCALE=3.0`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/assetbridge.toml`.
//! This can be overridden using the `ASSETBRIDGE_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, LibraryConfig, ThumbnailConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`ASSETBRIDGE__*`)
    /// 2. TOML file (default: `config/assetbridge.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or
    /// validation fails (bad thumbnail geometry, empty catalog name).
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[library]
root = "/srv/media"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.library.root.to_str().unwrap(), "/srv/media");
        assert_eq!(config.thumbnail.points, 75);
    }

    #[test]
    fn test_validation_catches_zero_scale() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[thumbnail]
scale = 0.0
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let result = Config::load_from_path(config_path);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::InvalidThumbnailScale { .. })
        ));
    }

    #[test]
    fn test_full_config_example() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[library]
root = "data/media"
catalog = "index.json"

[thumbnail]
points = 100
scale = 2.0
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.library.catalog, "index.json");
        assert_eq!(config.thumbnail.points, 100);
        assert_eq!(config.thumbnail.edge(), 200);
    }
}
