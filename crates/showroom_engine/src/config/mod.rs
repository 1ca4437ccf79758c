//! Application configuration
//!
//! Startup configuration for the showroom: which model and environment
//! to present first and where assets live. Supports TOML and RON files,
//! selected by extension.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Unsupported file extension
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Showroom startup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomConfig {
    /// Model presented on startup
    pub default_model: String,
    /// Environment presented on startup
    pub default_environment: String,
    /// Root directory for models and environment maps
    pub asset_root: String,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            default_model: "mercedes_slr".to_string(),
            default_environment: "showroom".to_string(),
            asset_root: "assets".to_string(),
        }
    }
}

impl ShowroomConfig {
    /// Load configuration from a TOML or RON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to a TOML or RON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Path to a model manifest under the asset root
    pub fn model_path(&self, model: &str) -> std::path::PathBuf {
        Path::new(&self.asset_root)
            .join("models")
            .join(format!("{model}.ron"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShowroomConfig::default();
        assert_eq!(config.default_model, "mercedes_slr");
        assert_eq!(config.default_environment, "showroom");
    }

    #[test]
    fn test_parse_toml() {
        let toml_text = "default_model = \"roadster\"\ndefault_environment = \"outdoor\"\n";
        let config: ShowroomConfig = toml::from_str(toml_text).expect("toml should parse");
        assert_eq!(config.default_model, "roadster");
        // Missing fields use defaults.
        assert_eq!(config.asset_root, "assets");
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            ShowroomConfig::load_from_file("config.yaml"),
            Err(ConfigError::UnsupportedFormat(_) | ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_model_path() {
        let config = ShowroomConfig::default();
        let path = config.model_path("roadster");
        assert!(path.ends_with("models/roadster.ron"));
    }
}
