//! Consent gate for sensitivity-tagged capture.
//!
//! Before a recording may start for a `Medium` or `High` sensitivity prompt
//! the user must explicitly agree. The gate is a small state machine: a
//! capture request either proceeds immediately (`Low`) or parks as the
//! single pending consent request until the user answers yes or no. Denial
//! returns to idle with no side effect - no audio resource has been
//! acquired at that point.

use crate::catalog::{Prompt, Sensitivity};

/// Consent wording for prompts that may touch a sensitive topic.
const HIGH_SENSITIVITY_MESSAGE: &str = "The next question is about a potentially sensitive topic. Is this something you feel comfortable discussing today?";

/// Consent wording for prompts that are merely more personal.
const MEDIUM_SENSITIVITY_MESSAGE: &str =
    "This topic may be a bit more personal. Are you ready to continue?";

/// A pending request for the user's explicit consent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentRequest {
    /// The prompt capture was requested for
    pub prompt_id: String,
    /// The prompt's sensitivity (always `Medium` or `High` here)
    pub sensitivity: Sensitivity,
    /// The question to put to the user
    pub message: &'static str,
}

/// Outcome of submitting a capture request to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentOutcome {
    /// Low sensitivity: capture may start immediately.
    Proceed,
    /// Capture is blocked until the user answers the attached request.
    ConsentRequired(ConsentRequest),
}

/// The consent state machine. At most one request is pending at a time;
/// capture itself is serialized, so a fresh request simply replaces a stale
/// one that was never answered.
#[derive(Debug, Default)]
pub struct ConsentGate {
    pending: Option<ConsentRequest>,
}

impl ConsentGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reviews a capture request against the prompt's sensitivity.
    ///
    /// `Low` bypasses the gate entirely and leaves no pending state.
    /// `Medium` and `High` park a request (replacing any stale one) and
    /// block capture until [`ConsentGate::resolve`] is called.
    pub fn review(&mut self, prompt: &Prompt) -> ConsentOutcome {
        if !prompt.sensitivity.requires_consent() {
            self.pending = None;
            return ConsentOutcome::Proceed;
        }

        let request = ConsentRequest {
            prompt_id: prompt.id.clone(),
            sensitivity: prompt.sensitivity,
            message: consent_message(prompt.sensitivity),
        };
        self.pending = Some(request.clone());
        ConsentOutcome::ConsentRequired(request)
    }

    /// Records the user's decision for the pending request.
    ///
    /// Returns the request the decision applied to when consent was granted,
    /// `None` when it was denied or nothing was pending. Either way the gate
    /// is idle afterwards.
    pub fn resolve(&mut self, granted: bool) -> Option<ConsentRequest> {
        let request = self.pending.take()?;
        if granted { Some(request) } else { None }
    }

    /// The request currently awaiting a decision, if any.
    pub fn pending(&self) -> Option<&ConsentRequest> {
        self.pending.as_ref()
    }
}

/// The consent question wording for a sensitivity level.
///
/// `Medium` and `High` share the same state transitions; only the framing
/// differs.
pub fn consent_message(sensitivity: Sensitivity) -> &'static str {
    match sensitivity {
        Sensitivity::High => HIGH_SENSITIVITY_MESSAGE,
        _ => MEDIUM_SENSITIVITY_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PromptKind;

    fn prompt(id: &str, sensitivity: Sensitivity) -> Prompt {
        Prompt {
            id: id.to_string(),
            text: "Tell me about it.".to_string(),
            life_stage: "Mid-Life".to_string(),
            theme: "Hardship & Resilience".to_string(),
            kind: PromptKind::Reflective,
            sensitivity,
        }
    }

    #[test]
    fn test_low_sensitivity_bypasses_gate() {
        let mut gate = ConsentGate::new();
        let outcome = gate.review(&prompt("C-001", Sensitivity::Low));
        assert_eq!(outcome, ConsentOutcome::Proceed);
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_medium_and_high_block_until_decision() {
        let mut gate = ConsentGate::new();

        for sensitivity in [Sensitivity::Medium, Sensitivity::High] {
            let outcome = gate.review(&prompt("ML-002", sensitivity));
            match outcome {
                ConsentOutcome::ConsentRequired(request) => {
                    assert_eq!(request.sensitivity, sensitivity);
                    assert_eq!(request.message, consent_message(sensitivity));
                }
                ConsentOutcome::Proceed => panic!("expected a consent request"),
            }
            assert!(gate.pending().is_some());

            let granted = gate.resolve(true);
            assert_eq!(granted.unwrap().prompt_id, "ML-002");
            assert!(gate.pending().is_none());
        }
    }

    #[test]
    fn test_denial_clears_pending() {
        let mut gate = ConsentGate::new();
        gate.review(&prompt("A-028", Sensitivity::High));
        assert!(gate.resolve(false).is_none());
        assert!(gate.pending().is_none());
        // A second decision with nothing pending is a no-op.
        assert!(gate.resolve(true).is_none());
    }

    #[test]
    fn test_new_request_replaces_stale_pending() {
        let mut gate = ConsentGate::new();
        gate.review(&prompt("A-028", Sensitivity::High));
        gate.review(&prompt("ML-002", Sensitivity::Medium));
        assert_eq!(gate.pending().unwrap().prompt_id, "ML-002");
    }

    #[test]
    fn test_high_uses_stronger_framing() {
        assert_ne!(
            consent_message(Sensitivity::High),
            consent_message(Sensitivity::Medium)
        );
    }
}
