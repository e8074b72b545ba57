//! Application configuration file handling.
//!
//! `~/.config/memoir/config.toml` holds the generation model and endpoint
//! overrides for the remote calls (transcription, assistant, titles). The
//! API key itself never lives here - it comes from the environment.

use crate::paths::MemoirPaths;
use memoir_core::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default generation model, used for transcription, chat and titles alike.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation model name for all remote calls
    pub model: String,
    /// Base URL of the generation API
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Loads the application configuration from the default location.
///
/// A missing config file yields defaults; a present but unparsable file is
/// an error (a user edit gone wrong should be surfaced, not ignored).
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&MemoirPaths::config_file()?)
}

/// Loads the application configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(toml::from_str(&content)?)
}

/// Saves the application configuration to an explicit path.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = AppConfig {
            model: "gemini-2.0-pro".to_string(),
            ..AppConfig::default()
        };
        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "model = \"gemini-custom\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.model, "gemini-custom");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "model = [not toml").unwrap();
        assert!(load_config_from(&path).is_err());
    }
}
