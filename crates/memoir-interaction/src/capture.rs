//! Capture pipeline phases.
//!
//! One capture attempt moves through
//! `Idle → RequestingDevice → Recording → Stopping → Transcribing →
//! Done | Failed`. The phase is owned by the application service driving
//! the attempt; this module only defines the states and their user-facing
//! status lines.

/// Why a capture attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureFailure {
    /// Microphone permission denied or the device could not be opened
    DeviceDenied,
    /// The recording produced no audio at all
    EmptyCapture,
    /// Transcription failed or returned nothing intelligible
    TranscriptionFailed,
}

impl CaptureFailure {
    /// Stable machine-readable reason tag.
    pub fn reason(&self) -> &'static str {
        match self {
            CaptureFailure::DeviceDenied => "device-denied",
            CaptureFailure::EmptyCapture => "empty-capture",
            CaptureFailure::TranscriptionFailed => "transcription-failed",
        }
    }

    /// Human-readable status line for the input surface.
    pub fn status_message(&self) -> &'static str {
        match self {
            CaptureFailure::DeviceDenied => "Microphone access denied.",
            CaptureFailure::EmptyCapture => "No audio was captured. Try again or type your answer.",
            CaptureFailure::TranscriptionFailed => "Couldn't hear that. Try again.",
        }
    }
}

/// The state of the current capture attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CapturePhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Waiting on the device permission gate
    RequestingDevice,
    /// Audio chunks are being buffered
    Recording,
    /// Stop requested; draining and releasing the device
    Stopping,
    /// One remote transcription call in flight
    Transcribing,
    /// Transcript ready for the editable draft (not yet persisted)
    Done(String),
    /// Attempt failed; see the failure for the reason
    Failed(CaptureFailure),
}

impl CapturePhase {
    /// Human-readable status line for the input surface.
    pub fn status_line(&self) -> String {
        match self {
            CapturePhase::Idle => "Ready to record or type.".to_string(),
            CapturePhase::RequestingDevice => "Requesting microphone access...".to_string(),
            CapturePhase::Recording => "Recording... stop when you are done.".to_string(),
            CapturePhase::Stopping | CapturePhase::Transcribing => "Processing audio...".to_string(),
            CapturePhase::Done(_) => "Transcription complete. Add a photo or save.".to_string(),
            CapturePhase::Failed(failure) => failure.status_message().to_string(),
        }
    }

    /// Whether the pipeline is between device request and transcript.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            CapturePhase::RequestingDevice
                | CapturePhase::Recording
                | CapturePhase::Stopping
                | CapturePhase::Transcribing
        )
    }
}
