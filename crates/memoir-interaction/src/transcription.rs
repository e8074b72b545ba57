//! Remote transcription of captured narration.

use crate::audio::RecordedAudio;
use crate::error::InteractionError;
use crate::gemini::{Content, GeminiClient};
use async_trait::async_trait;

/// Instruction sent alongside the audio payload.
const TRANSCRIPTION_INSTRUCTION: &str = "Transcribe this audio recording of a person telling their life story. Transcribe it clearly and accurately, keeping the exact words spoken.";

/// Best-effort speech-to-text oracle.
///
/// One call per recording; an empty string means "no speech recognized" and
/// is a normal outcome, not an error. Nothing is retried automatically.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    /// Transcribes one assembled audio payload verbatim.
    ///
    /// # Errors
    ///
    /// Returns a `Process`/`MalformedResponse` error when the remote call
    /// fails; the caller reports it once and leaves the draft empty.
    async fn transcribe(&self, audio: &RecordedAudio) -> Result<String, InteractionError>;
}

/// Transcription client backed by the Gemini API.
#[derive(Clone)]
pub struct GeminiTranscriber {
    client: GeminiClient,
}

impl GeminiTranscriber {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranscriptionClient for GeminiTranscriber {
    async fn transcribe(&self, audio: &RecordedAudio) -> Result<String, InteractionError> {
        tracing::debug!(
            bytes = audio.data.len(),
            mime_type = %audio.mime_type,
            "requesting transcription"
        );

        let contents = vec![Content::user_with_inline_data(
            TRANSCRIPTION_INSTRUCTION,
            audio.mime_type.clone(),
            &audio.data,
        )];

        let text = self.client.generate(None, contents).await?;
        Ok(text.trim().to_string())
    }
}
