//! Memoir use case implementation.
//!
//! `MemoirService` is the one place the control flow of the engine is wired
//! together: UI event → consent gate (maybe) → capture pipeline → draft →
//! explicit save → store mutation → persistence write. It owns the session
//! manager, the consent gate, the recorder and the capture phase, so every
//! single-instance invariant (one recording, one pending consent, one open
//! chapter) is enforced by construction rather than by UI discipline.

use std::sync::Arc;

use memoir_core::catalog::PromptCatalog;
use memoir_core::compile::{CompiledMemoir, compile};
use memoir_core::consent::{ConsentGate, ConsentOutcome};
use memoir_core::error::{MemoirError, Result};
use memoir_core::session::{ChapterProgress, SessionManager, chapter_progress};
use memoir_core::state::{Answer, CoreInfo, JournalEntry, MemoirState, StateRepository};
use memoir_interaction::{
    AudioSource, CaptureFailure, CapturePhase, GeminiClient, MemoirAssistant, Recorder,
    TitleSuggester, TranscriptionClient,
};

/// Confirmation wording surfaces must put to the user before a journal
/// entry delete is forwarded to the store.
pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this journal entry?";

/// Outcome of a capture request (or a consent decision on one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureStart {
    /// The device was acquired; recording is running.
    Recording,
    /// The prompt's sensitivity requires an explicit yes/no first.
    ConsentRequired { message: &'static str },
    /// The user declined; nothing was acquired, nothing changed.
    Declined,
    /// The attempt failed before recording began (device denied).
    Failed(CaptureFailure),
}

/// Outcome of finishing a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureResult {
    /// Transcript ready for the editable draft; not yet persisted.
    Draft(String),
    /// Stop was called with no recording active (stop is idempotent).
    NotRecording,
    /// The attempt failed; see the failure for the reason.
    Failed(CaptureFailure),
}

/// Orchestrates the memoir engine for one user session.
pub struct MemoirService {
    catalog: PromptCatalog,
    session: SessionManager,
    consent: ConsentGate,
    recorder: Recorder,
    transcriber: Arc<dyn TranscriptionClient>,
    phase: CapturePhase,
    /// Client for assistant and title calls; absent when the surface runs
    /// without remote generation configured.
    generation_client: Option<GeminiClient>,
    /// Standing assistant conversation; dropped whenever CoreInfo changes.
    assistant: Option<MemoirAssistant>,
}

impl MemoirService {
    /// Restores the session from storage and wires the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if storage access fails on the initial load.
    pub async fn new(
        catalog: PromptCatalog,
        repository: Arc<dyn StateRepository>,
        transcriber: Arc<dyn TranscriptionClient>,
    ) -> Result<Self> {
        let session = SessionManager::restore(repository).await?;
        Ok(Self {
            catalog,
            session,
            consent: ConsentGate::new(),
            recorder: Recorder::new(),
            transcriber,
            phase: CapturePhase::Idle,
            generation_client: None,
            assistant: None,
        })
    }

    /// Enables the assistant and title-suggestion calls.
    pub fn with_generation_client(mut self, client: GeminiClient) -> Self {
        self.generation_client = Some(client);
        self
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &MemoirState {
        self.session.state()
    }

    /// The current capture pipeline phase.
    pub fn capture_phase(&self) -> &CapturePhase {
        &self.phase
    }

    /// Human-readable status line for the input surface.
    pub fn capture_status_line(&self) -> String {
        self.phase.status_line()
    }

    /// Answered/total counters per life stage, re-derived from the store.
    pub fn progress(&self) -> Vec<ChapterProgress> {
        chapter_progress(&self.catalog, self.session.state())
    }

    /// The chapter currently expanded, if any.
    pub fn open_chapter(&self) -> Option<&str> {
        self.session.open_chapter()
    }

    /// Journal entries for display, most recent date first.
    pub fn journal_entries(&self) -> Vec<&JournalEntry> {
        self.session.journal_entries_by_date_desc()
    }

    // ========================================================================
    // Capture flow
    // ========================================================================

    /// Requests capture for a prompt.
    ///
    /// Low sensitivity proceeds straight to recording; Medium and High park
    /// a consent request and return its wording for the surface to show.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown prompt id; pipeline failures are
    /// reported through [`CaptureStart::Failed`], not as errors.
    pub async fn begin_capture(
        &mut self,
        prompt_id: &str,
        source: &dyn AudioSource,
    ) -> Result<CaptureStart> {
        let prompt = self
            .catalog
            .get(prompt_id)
            .ok_or_else(|| MemoirError::not_found("prompt", prompt_id))?;

        match self.consent.review(prompt) {
            ConsentOutcome::Proceed => {
                let prompt_id = prompt.id.clone();
                Ok(self.start_recording(&prompt_id, source).await)
            }
            ConsentOutcome::ConsentRequired(request) => {
                tracing::debug!(
                    prompt_id = %request.prompt_id,
                    sensitivity = %request.sensitivity,
                    "capture paused for consent"
                );
                Ok(CaptureStart::ConsentRequired {
                    message: request.message,
                })
            }
        }
    }

    /// Applies the user's decision to the pending consent request.
    ///
    /// Granting starts the recording; denying returns to idle with no side
    /// effect on the store and no device held. A decision with nothing
    /// pending is treated as declined.
    pub async fn resolve_consent(
        &mut self,
        granted: bool,
        source: &dyn AudioSource,
    ) -> Result<CaptureStart> {
        match self.consent.resolve(granted) {
            Some(request) => Ok(self.start_recording(&request.prompt_id, source).await),
            None => {
                self.phase = CapturePhase::Idle;
                Ok(CaptureStart::Declined)
            }
        }
    }

    async fn start_recording(&mut self, prompt_id: &str, source: &dyn AudioSource) -> CaptureStart {
        self.phase = CapturePhase::RequestingDevice;
        match self.recorder.start(prompt_id, source).await {
            Ok(()) => {
                self.phase = CapturePhase::Recording;
                CaptureStart::Recording
            }
            Err(err) => {
                tracing::warn!(prompt_id, error = %err, "capture device unavailable");
                self.phase = CapturePhase::Failed(CaptureFailure::DeviceDenied);
                CaptureStart::Failed(CaptureFailure::DeviceDenied)
            }
        }
    }

    /// Stops the recording and turns the captured audio into a draft
    /// transcript.
    ///
    /// The device is released unconditionally before the transcription call
    /// is issued; zero captured audio skips transcription entirely. The
    /// returned draft is not persisted - persistence happens only on an
    /// explicit [`MemoirService::save_answer`].
    pub async fn finish_capture(&mut self) -> CaptureResult {
        self.phase = CapturePhase::Stopping;

        let audio = match self.recorder.stop().await {
            Some(audio) => audio,
            None => {
                self.phase = CapturePhase::Idle;
                return CaptureResult::NotRecording;
            }
        };

        if audio.is_empty() {
            self.phase = CapturePhase::Failed(CaptureFailure::EmptyCapture);
            return CaptureResult::Failed(CaptureFailure::EmptyCapture);
        }

        self.phase = CapturePhase::Transcribing;
        match self.transcriber.transcribe(&audio).await {
            Ok(text) if !text.trim().is_empty() => {
                let text = text.trim().to_string();
                self.phase = CapturePhase::Done(text.clone());
                CaptureResult::Draft(text)
            }
            Ok(_) => {
                self.phase = CapturePhase::Failed(CaptureFailure::TranscriptionFailed);
                CaptureResult::Failed(CaptureFailure::TranscriptionFailed)
            }
            Err(err) => {
                tracing::warn!(error = %err, "transcription failed");
                self.phase = CapturePhase::Failed(CaptureFailure::TranscriptionFailed);
                CaptureResult::Failed(CaptureFailure::TranscriptionFailed)
            }
        }
    }

    // ========================================================================
    // Store mutations (write-through)
    // ========================================================================

    /// Saves an answer and returns the freshly re-derived progress counters.
    pub async fn save_answer(
        &mut self,
        prompt_id: &str,
        answer: Answer,
    ) -> Result<Vec<ChapterProgress>> {
        self.session.save_answer(prompt_id, answer).await?;
        self.phase = CapturePhase::Idle;
        Ok(self.progress())
    }

    /// Saves (creates or updates) a journal entry; returns its id.
    pub async fn save_journal_entry(&mut self, entry: JournalEntry) -> Result<String> {
        self.session.save_journal_entry(entry).await
    }

    /// Deletes a journal entry.
    ///
    /// The surface must have put [`DELETE_CONFIRMATION_PROMPT`] (or an
    /// equivalent yes/no gate) to the user before calling this.
    pub async fn delete_journal_entry(&mut self, id: &str) -> Result<()> {
        self.session.delete_journal_entry(id).await
    }

    /// Replaces the personalization profile and invalidates the standing
    /// assistant conversation so the next chat starts with fresh context.
    pub async fn save_core_info(&mut self, info: CoreInfo) -> Result<()> {
        self.session.save_core_info(info).await?;
        self.assistant = None;
        Ok(())
    }

    /// Toggles a chapter; returns the chapter now open, if any.
    pub async fn toggle_chapter(&mut self, chapter_id: &str) -> Result<Option<String>> {
        self.session.toggle_chapter(chapter_id).await
    }

    // ========================================================================
    // Compilation and helpers
    // ========================================================================

    /// Compiles the store into the ordered document model.
    pub fn compile(&self) -> CompiledMemoir {
        compile(&self.catalog, self.session.state())
    }

    /// Suggests titles for the compiled memoir.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no generation client is set, and
    /// propagates remote-call failures otherwise.
    pub async fn suggest_titles(&self) -> Result<Vec<String>> {
        let client = self.generation_client()?;
        let text = self.compile().to_plain_text();
        let titles = TitleSuggester::new(client.clone()).suggest(&text).await?;
        Ok(titles)
    }

    /// Sends one message to the memoir assistant and returns the reply.
    ///
    /// The conversation is initialized lazily from the current CoreInfo and
    /// survives until the profile changes.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no generation client is set, and
    /// propagates remote-call failures otherwise.
    pub async fn chat(&mut self, message: &str) -> Result<String> {
        if self.assistant.is_none() {
            let client = self.generation_client()?.clone();
            self.assistant = Some(MemoirAssistant::new(client, &self.session.state().core_info));
        }

        let assistant = self.assistant.as_mut().expect("assistant initialized above");
        Ok(assistant.send_message(message).await?)
    }

    fn generation_client(&self) -> Result<&GeminiClient> {
        self.generation_client.as_ref().ok_or_else(|| {
            MemoirError::config("remote generation is not configured (set GEMINI_API_KEY)")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use memoir_core::catalog::builtin_catalog;
    use memoir_interaction::{AudioCapture, InteractionError, RecordedAudio};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ------------------------------------------------------------------
    // Mocks
    // ------------------------------------------------------------------

    struct MockStateRepository {
        saves: Mutex<Vec<MemoirState>>,
    }

    impl MockStateRepository {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                saves: Mutex::new(Vec::new()),
            })
        }

        fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StateRepository for MockStateRepository {
        async fn load(&self) -> memoir_core::error::Result<MemoirState> {
            Ok(MemoirState::default())
        }

        async fn save(&self, state: &MemoirState) -> memoir_core::error::Result<()> {
            self.saves.lock().unwrap().push(state.clone());
            Ok(())
        }
    }

    struct MockTranscriber {
        reply: std::result::Result<String, ()>,
        calls: AtomicUsize,
    }

    impl MockTranscriber {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err(()),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranscriptionClient for MockTranscriber {
        async fn transcribe(&self, _audio: &RecordedAudio) -> std::result::Result<String, InteractionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(InteractionError::Process {
                    status_code: Some(500),
                    message: "service exploded".to_string(),
                    is_retryable: true,
                }),
            }
        }
    }

    struct ScriptedSource {
        chunks: Vec<Vec<u8>>,
        opens: AtomicUsize,
    }

    impl ScriptedSource {
        fn speaking() -> Self {
            Self {
                chunks: vec![b"audio".to_vec()],
                opens: AtomicUsize::new(0),
            }
        }

        fn silent() -> Self {
            Self {
                chunks: Vec::new(),
                opens: AtomicUsize::new(0),
            }
        }

        fn open_count(&self) -> usize {
            self.opens.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AudioSource for ScriptedSource {
        async fn open(&self) -> std::result::Result<Box<dyn AudioCapture>, InteractionError> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(ScriptedCapture {
                chunks: self.chunks.clone().into(),
            }))
        }
    }

    struct DeniedSource;

    #[async_trait]
    impl AudioSource for DeniedSource {
        async fn open(&self) -> std::result::Result<Box<dyn AudioCapture>, InteractionError> {
            Err(InteractionError::DeviceUnavailable("permission denied".to_string()))
        }
    }

    struct ScriptedCapture {
        chunks: VecDeque<Vec<u8>>,
    }

    #[async_trait]
    impl AudioCapture for ScriptedCapture {
        async fn next_chunk(&mut self) -> std::result::Result<Option<Vec<u8>>, InteractionError> {
            Ok(self.chunks.pop_front())
        }

        fn mime_type(&self) -> &str {
            "audio/webm"
        }

        fn release(&mut self) {
            self.chunks.clear();
        }
    }

    async fn service(
        repository: Arc<MockStateRepository>,
        transcriber: Arc<MockTranscriber>,
    ) -> MemoirService {
        MemoirService::new(builtin_catalog(), repository, transcriber)
            .await
            .unwrap()
    }

    // ------------------------------------------------------------------
    // Consent-gated capture
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_low_sensitivity_records_without_consent() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository, MockTranscriber::replying("hello")).await;
        let source = ScriptedSource::speaking();

        // C-001 is Low sensitivity.
        let start = svc.begin_capture("C-001", &source).await.unwrap();
        assert_eq!(start, CaptureStart::Recording);
        assert_eq!(svc.capture_phase(), &CapturePhase::Recording);
    }

    #[tokio::test]
    async fn test_sensitive_prompt_blocks_until_consent() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository.clone(), MockTranscriber::replying("hello")).await;
        let source = ScriptedSource::speaking();

        // A-028 is High sensitivity.
        let start = svc.begin_capture("A-028", &source).await.unwrap();
        match start {
            CaptureStart::ConsentRequired { message } => {
                assert!(message.contains("sensitive topic"));
            }
            other => panic!("expected consent request, got {other:?}"),
        }
        // No device touched while consent is pending.
        assert_eq!(source.open_count(), 0);

        let start = svc.resolve_consent(true, &source).await.unwrap();
        assert_eq!(start, CaptureStart::Recording);
        assert_eq!(source.open_count(), 1);
    }

    #[tokio::test]
    async fn test_consent_denial_leaves_everything_untouched() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository.clone(), MockTranscriber::replying("hello")).await;
        let source = ScriptedSource::speaking();

        svc.begin_capture("EA-026", &source).await.unwrap();
        let start = svc.resolve_consent(false, &source).await.unwrap();

        assert_eq!(start, CaptureStart::Declined);
        assert_eq!(source.open_count(), 0);
        assert!(svc.state().answers.is_empty());
        assert_eq!(repository.save_count(), 0);
        assert_eq!(svc.capture_phase(), &CapturePhase::Idle);
    }

    // ------------------------------------------------------------------
    // Pipeline outcomes
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_device_denied_fails_without_store_mutation() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository.clone(), MockTranscriber::replying("hello")).await;

        let start = svc.begin_capture("C-001", &DeniedSource).await.unwrap();
        assert_eq!(start, CaptureStart::Failed(CaptureFailure::DeviceDenied));
        assert_eq!(
            svc.capture_phase(),
            &CapturePhase::Failed(CaptureFailure::DeviceDenied)
        );
        assert!(svc.state().answers.is_empty());
        assert_eq!(repository.save_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_capture_produces_draft_not_persistence() {
        let repository = MockStateRepository::new();
        let transcriber = MockTranscriber::replying("  I was born in a small town.  ");
        let mut svc = service(repository.clone(), transcriber.clone()).await;
        let source = ScriptedSource::speaking();

        svc.begin_capture("C-001", &source).await.unwrap();
        let result = svc.finish_capture().await;

        assert_eq!(
            result,
            CaptureResult::Draft("I was born in a small town.".to_string())
        );
        assert_eq!(transcriber.call_count(), 1);
        // Draft only - nothing saved until the explicit save.
        assert!(svc.state().answers.is_empty());
        assert_eq!(repository.save_count(), 0);

        // Explicit save persists and re-derives progress.
        let progress = svc
            .save_answer("C-001", Answer::text("I was born in a small town."))
            .await
            .unwrap();
        assert_eq!(repository.save_count(), 1);
        let childhood = progress
            .iter()
            .find(|p| p.life_stage == "Early Childhood")
            .unwrap();
        assert_eq!(childhood.answered, 1);
        assert_eq!(svc.capture_phase(), &CapturePhase::Idle);
    }

    #[tokio::test]
    async fn test_empty_capture_skips_transcription() {
        let repository = MockStateRepository::new();
        let transcriber = MockTranscriber::replying("unused");
        let mut svc = service(repository, transcriber.clone()).await;
        let source = ScriptedSource::silent();

        svc.begin_capture("C-001", &source).await.unwrap();
        let result = svc.finish_capture().await;

        assert_eq!(result, CaptureResult::Failed(CaptureFailure::EmptyCapture));
        assert_eq!(transcriber.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transcription_failure_is_reported_once() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository.clone(), MockTranscriber::failing()).await;
        let source = ScriptedSource::speaking();

        svc.begin_capture("C-001", &source).await.unwrap();
        let result = svc.finish_capture().await;

        assert_eq!(
            result,
            CaptureResult::Failed(CaptureFailure::TranscriptionFailed)
        );
        assert!(svc.state().answers.is_empty());
        assert_eq!(repository.save_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_transcript_counts_as_failure() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository, MockTranscriber::replying("   \n  ")).await;
        let source = ScriptedSource::speaking();

        svc.begin_capture("C-001", &source).await.unwrap();
        let result = svc.finish_capture().await;
        assert_eq!(
            result,
            CaptureResult::Failed(CaptureFailure::TranscriptionFailed)
        );
    }

    #[tokio::test]
    async fn test_finish_without_recording_is_idempotent() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository, MockTranscriber::replying("hello")).await;

        assert_eq!(svc.finish_capture().await, CaptureResult::NotRecording);
        assert_eq!(svc.capture_phase(), &CapturePhase::Idle);
    }

    // ------------------------------------------------------------------
    // Store operations through the service
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_journal_scenario_through_service() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository.clone(), MockTranscriber::replying("hello")).await;

        let id = svc
            .save_journal_entry(JournalEntry {
                id: String::new(),
                title: "First Day".to_string(),
                content: "Hello".to_string(),
                date: "2024-01-01".to_string(),
            })
            .await
            .unwrap();
        assert!(!id.is_empty());

        svc.save_journal_entry(JournalEntry {
            id: id.clone(),
            title: "First Day".to_string(),
            content: "Hello again".to_string(),
            date: "2024-01-01".to_string(),
        })
        .await
        .unwrap();
        assert_eq!(svc.state().journal_entries.len(), 1);

        svc.delete_journal_entry(&id).await.unwrap();
        assert!(svc.state().journal_entries.is_empty());
        assert_eq!(repository.save_count(), 3);
    }

    #[tokio::test]
    async fn test_toggle_chapter_atomicity_via_service() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository, MockTranscriber::replying("hello")).await;

        svc.toggle_chapter("Early Childhood").await.unwrap();
        svc.toggle_chapter("Mid-Life").await.unwrap();
        assert_eq!(svc.open_chapter(), Some("Mid-Life"));

        svc.toggle_chapter("Mid-Life").await.unwrap();
        assert_eq!(svc.open_chapter(), None);
    }

    #[tokio::test]
    async fn test_chat_without_client_is_a_config_error() {
        let repository = MockStateRepository::new();
        let mut svc = service(repository, MockTranscriber::replying("hello")).await;

        let err = svc.chat("hello").await.unwrap_err();
        assert!(matches!(err, MemoirError::Config(_)));
    }
}
