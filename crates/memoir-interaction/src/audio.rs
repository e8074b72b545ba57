//! Audio capture seams and the single-flight recorder.
//!
//! The actual capture device sits behind the `AudioSource`/`AudioCapture`
//! trait pair: opening a source is the permission gate, a capture hands out
//! buffered chunks and releases the device on stop. The `Recorder` enforces
//! the system-wide invariant that at most one recording is active; starting
//! a new one force-stops the previous session first.

use crate::error::InteractionError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Assembled audio from one recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAudio {
    /// Raw audio bytes, all chunks concatenated
    pub data: Vec<u8>,
    /// Mime type of the payload (e.g. "audio/webm")
    pub mime_type: String,
}

impl RecordedAudio {
    /// Whether the session captured no audio at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A capture device that can be opened for one recording session.
///
/// Opening doubles as the permission gate: denial or unavailability fails
/// here, before any resource is held.
#[async_trait]
pub trait AudioSource: Send + Sync {
    /// Requests device access and begins capture.
    ///
    /// # Errors
    ///
    /// Returns `DeviceUnavailable` when permission is denied or the device
    /// cannot be opened; no resource is held in that case.
    async fn open(&self) -> Result<Box<dyn AudioCapture>, InteractionError>;
}

/// An open capture session handing out buffered audio chunks.
#[async_trait]
pub trait AudioCapture: Send {
    /// Pulls the next buffered chunk; `None` once the session has nothing
    /// more to deliver.
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, InteractionError>;

    /// Mime type of the chunks this capture produces.
    fn mime_type(&self) -> &str;

    /// Releases the underlying device. Idempotent; must always be safe to
    /// call, including on an already-released capture.
    fn release(&mut self);
}

// ============================================================================
// File-backed source
// ============================================================================

/// Chunk size used when replaying a narration file.
const FILE_CHUNK_SIZE: usize = 32 * 1024;

/// Audio source backed by a pre-recorded narration file.
///
/// This is the capture device of the terminal surface: the user records
/// with whatever tool they like and hands the file in. A missing or
/// unreadable file plays the role of a denied microphone permission.
pub struct FileAudioSource {
    path: PathBuf,
}

impl FileAudioSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl AudioSource for FileAudioSource {
    async fn open(&self) -> Result<Box<dyn AudioCapture>, InteractionError> {
        let data = tokio::fs::read(&self.path).await.map_err(|err| {
            InteractionError::DeviceUnavailable(format!(
                "cannot open narration file {}: {}",
                self.path.display(),
                err
            ))
        })?;

        let mime_type = audio_mime_for_path(&self.path);

        let chunks = data
            .chunks(FILE_CHUNK_SIZE)
            .map(|chunk| chunk.to_vec())
            .collect();

        Ok(Box::new(FileCapture {
            chunks,
            mime_type,
            released: false,
        }))
    }
}

/// Mime type for a narration file.
///
/// `mime_guess` classifies `.webm` as video; voice notes recorded in a
/// browser use the same container for audio-only streams, so that one is
/// pinned explicitly.
fn audio_mime_for_path(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());
    match extension.as_deref() {
        Some("webm") => "audio/webm".to_string(),
        _ => mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    }
}

struct FileCapture {
    chunks: VecDeque<Vec<u8>>,
    mime_type: String,
    released: bool,
}

#[async_trait]
impl AudioCapture for FileCapture {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, InteractionError> {
        if self.released {
            return Ok(None);
        }
        Ok(self.chunks.pop_front())
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn release(&mut self) {
        self.released = true;
        self.chunks.clear();
    }
}

// ============================================================================
// Recorder
// ============================================================================

struct ActiveRecording {
    prompt_id: String,
    capture: Box<dyn AudioCapture>,
    chunks: Vec<Vec<u8>>,
}

/// Owns the single active recording session.
///
/// Exactly one recording may be active system-wide. `start` enforces this
/// by force-stopping (and discarding) any prior session before acquiring
/// the device for the new one; `stop` is idempotent and safe to call when
/// nothing is recording.
#[derive(Default)]
pub struct Recorder {
    active: Option<ActiveRecording>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a recording session is currently active.
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// The prompt the active recording belongs to, if any.
    pub fn recording_prompt(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.prompt_id.as_str())
    }

    /// Starts a recording session for a prompt.
    ///
    /// Any prior session is force-stopped first (serialization, not
    /// cancellation); its audio is discarded.
    ///
    /// # Errors
    ///
    /// Returns `DeviceUnavailable` when the source cannot be opened. No
    /// resource is held on failure and the recorder stays idle.
    pub async fn start(
        &mut self,
        prompt_id: &str,
        source: &dyn AudioSource,
    ) -> Result<(), InteractionError> {
        if let Some(prior) = self.active.as_ref() {
            tracing::warn!(
                prior_prompt = %prior.prompt_id,
                "recording already active; force-stopping before restart"
            );
            self.stop().await;
        }

        let capture = source.open().await?;
        self.active = Some(ActiveRecording {
            prompt_id: prompt_id.to_string(),
            capture,
            chunks: Vec::new(),
        });
        Ok(())
    }

    /// Stops the active session, drains remaining chunks and releases the
    /// device.
    ///
    /// Returns the assembled audio, or `None` when nothing was recording.
    /// The device is released unconditionally, even when draining fails
    /// mid-way.
    pub async fn stop(&mut self) -> Option<RecordedAudio> {
        let mut active = self.active.take()?;

        loop {
            match active.capture.next_chunk().await {
                Ok(Some(chunk)) => {
                    if !chunk.is_empty() {
                        active.chunks.push(chunk);
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(error = %err, "draining audio chunks failed; keeping what was captured");
                    break;
                }
            }
        }

        let mime_type = active.capture.mime_type().to_string();
        active.capture.release();

        Some(RecordedAudio {
            data: active.chunks.concat(),
            mime_type,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Source yielding a fixed chunk script; tracks opens and releases.
    pub struct ScriptedAudioSource {
        chunks: Vec<Vec<u8>>,
        mime_type: String,
        pub opens: Arc<AtomicUsize>,
        pub released: Arc<AtomicBool>,
    }

    impl ScriptedAudioSource {
        pub fn new(chunks: Vec<Vec<u8>>) -> Self {
            Self {
                chunks,
                mime_type: "audio/webm".to_string(),
                opens: Arc::new(AtomicUsize::new(0)),
                released: Arc::new(AtomicBool::new(false)),
            }
        }

        pub fn silent() -> Self {
            Self::new(Vec::new())
        }
    }

    #[async_trait]
    impl AudioSource for ScriptedAudioSource {
        async fn open(&self) -> Result<Box<dyn AudioCapture>, InteractionError> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(ScriptedCapture {
                chunks: self.chunks.clone().into(),
                mime_type: self.mime_type.clone(),
                released: self.released.clone(),
            }))
        }
    }

    /// Source that always fails to open, like a denied microphone prompt.
    pub struct DeniedAudioSource;

    #[async_trait]
    impl AudioSource for DeniedAudioSource {
        async fn open(&self) -> Result<Box<dyn AudioCapture>, InteractionError> {
            Err(InteractionError::DeviceUnavailable(
                "microphone permission denied".to_string(),
            ))
        }
    }

    struct ScriptedCapture {
        chunks: VecDeque<Vec<u8>>,
        mime_type: String,
        released: Arc<AtomicBool>,
    }

    #[async_trait]
    impl AudioCapture for ScriptedCapture {
        async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, InteractionError> {
            Ok(self.chunks.pop_front())
        }

        fn mime_type(&self) -> &str {
            &self.mime_type
        }

        fn release(&mut self) {
            self.released.store(true, Ordering::SeqCst);
            self.chunks.clear();
        }
    }
}
