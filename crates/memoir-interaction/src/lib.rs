//! Device and remote interaction layer.
//!
//! Audio capture sits behind the `AudioSource`/`AudioCapture` seam with a
//! single-flight `Recorder` on top; transcription, the memoir assistant and
//! title suggestions are direct REST clients over the generation API.

pub mod assistant;
pub mod audio;
pub mod capture;
pub mod error;
pub mod gemini;
pub mod titles;
pub mod transcription;

pub use assistant::{ASSISTANT_GREETING, ChatRole, ChatTurn, MemoirAssistant, assistant_context};
pub use audio::{AudioCapture, AudioSource, FileAudioSource, RecordedAudio, Recorder};
pub use capture::{CaptureFailure, CapturePhase};
pub use error::InteractionError;
pub use gemini::GeminiClient;
pub use titles::TitleSuggester;
pub use transcription::{GeminiTranscriber, TranscriptionClient};
