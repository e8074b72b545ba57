//! JSON file-backed state repository.
//!
//! The whole session state lives in one JSON blob. Reads happen once at
//! startup, writes after every mutation; a corrupt blob is discarded in
//! favor of defaults rather than crashing the application.

use crate::dto::{decode_state, encode_state};
use crate::paths::MemoirPaths;
use async_trait::async_trait;
use memoir_core::error::Result;
use memoir_core::state::{MemoirState, StateRepository};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Repository persisting the memoir state as a single JSON file.
pub struct JsonStateRepository {
    file_path: PathBuf,
}

impl JsonStateRepository {
    /// Creates a repository backed by the given file path.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Creates a repository at the default location
    /// (`~/.config/memoir/memoir_state.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(MemoirPaths::state_file()?))
    }

    /// The file this repository reads and writes.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl StateRepository for JsonStateRepository {
    /// Loads the persisted state.
    ///
    /// - Missing file: first run, returns defaults.
    /// - Unparsable JSON or unknown schema: the blob is treated as corrupt,
    ///   logged, and replaced by defaults on the next save.
    /// - Legacy (V1) blobs are migrated to the canonical shape in memory.
    ///
    /// # Errors
    ///
    /// Returns an error only when the file exists but cannot be read at all.
    async fn load(&self) -> Result<MemoirState> {
        if !self.file_path.exists() {
            return Ok(MemoirState::default());
        }

        let raw = fs::read_to_string(&self.file_path).await?;

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    path = %self.file_path.display(),
                    error = %err,
                    "persisted state is not valid JSON; reinitializing to defaults"
                );
                return Ok(MemoirState::default());
            }
        };

        match decode_state(value) {
            Ok(state) => Ok(state),
            Err(err) => {
                tracing::warn!(
                    path = %self.file_path.display(),
                    error = %err,
                    "persisted state failed schema migration; reinitializing to defaults"
                );
                Ok(MemoirState::default())
            }
        }
    }

    /// Serializes the full state and overwrites the blob.
    ///
    /// The write goes to a sibling temp file first and is renamed into
    /// place, so a crash mid-write can never leave a half-written blob.
    async fn save(&self, state: &MemoirState) -> Result<()> {
        let value = encode_state(state)?;
        let json = serde_json::to_string_pretty(&value)?;

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.file_path.with_extension("json.tmp");
        fs::write(&temp_path, json.as_bytes()).await?;
        fs::rename(&temp_path, &self.file_path).await?;

        Ok(())
    }
}
