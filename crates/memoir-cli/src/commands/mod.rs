//! Command implementations for the memoir CLI.

pub mod answer;
pub mod assist;
pub mod book;
pub mod chapters;
pub mod foundation;
pub mod journal;
pub mod utils;

use anyhow::Result;
use async_trait::async_trait;
use memoir_application::MemoirService;
use memoir_core::catalog::builtin_catalog;
use memoir_infrastructure::{JsonStateRepository, load_config};
use memoir_interaction::{
    GeminiClient, GeminiTranscriber, InteractionError, RecordedAudio, TranscriptionClient,
};
use std::sync::Arc;

/// Builds the memoir service against the default state location.
///
/// Remote generation is optional: without `GEMINI_API_KEY` every local
/// operation still works, and capture/assistant commands explain what is
/// missing when invoked.
pub async fn build_service() -> Result<MemoirService> {
    let config = load_config()?;
    let repository = Arc::new(JsonStateRepository::default_location()?);

    let client = match GeminiClient::from_config(&config) {
        Ok(client) => Some(client),
        Err(err) => {
            tracing::debug!(error = %err, "remote generation not configured");
            None
        }
    };

    let transcriber: Arc<dyn TranscriptionClient> = match &client {
        Some(client) => Arc::new(GeminiTranscriber::new(client.clone())),
        None => Arc::new(UnconfiguredTranscriber),
    };

    let mut service = MemoirService::new(builtin_catalog(), repository, transcriber).await?;
    if let Some(client) = client {
        service = service.with_generation_client(client);
    }
    Ok(service)
}

/// Stand-in transcriber used when no API key is configured; fails with a
/// pointer to the missing configuration instead of a network error.
struct UnconfiguredTranscriber;

#[async_trait]
impl TranscriptionClient for UnconfiguredTranscriber {
    async fn transcribe(&self, _audio: &RecordedAudio) -> Result<String, InteractionError> {
        Err(InteractionError::Config(
            "transcription requires GEMINI_API_KEY to be set".to_string(),
        ))
    }
}
