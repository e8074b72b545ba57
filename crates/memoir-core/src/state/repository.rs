//! State repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::state::model::MemoirState;

/// Repository for the single durable memoir state blob.
///
/// The whole state is read once at startup and written back in full after
/// every mutation (load-once, save-on-every-change). Implementations must
/// never surface a missing blob as an error - that is the first-run case -
/// and must fall back to defaults on a structurally corrupt blob rather
/// than propagating a fatal error.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Loads the persisted state, migrating older schema versions in the
    /// process. Returns defaults when nothing has been stored yet.
    async fn load(&self) -> Result<MemoirState>;

    /// Serializes the full state and overwrites the durable blob.
    /// Whole-blob, last-write-wins; no partial writes.
    async fn save(&self, state: &MemoirState) -> Result<()>;
}
