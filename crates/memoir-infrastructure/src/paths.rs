//! Unified path management for memoir configuration and state files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/memoir/            # Config directory
//! ├── config.toml              # Application configuration
//! └── memoir_state.json        # The single durable state blob
//! ```

use memoir_core::error::{MemoirError, Result};
use std::path::PathBuf;

/// Unified path management for memoir.
pub struct MemoirPaths;

impl MemoirPaths {
    /// Returns the memoir configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("memoir"))
            .ok_or_else(|| MemoirError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the durable state blob.
    pub fn state_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("memoir_state.json"))
    }
}
