//! Persisted session state domain models.
//!
//! `MemoirState` is the single source of truth for everything the user has
//! entered: prompt answers, the free-form journal, the personalization
//! profile and which chapter is expanded. It is reconstructed from durable
//! storage once at startup and written back after every mutation.

use serde::{Deserialize, Serialize};

/// A photo attached to an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Image bytes as a `data:` URI (base64-encoded, mime-prefixed)
    pub data: String,
    /// User-written caption for the photo
    pub annotation: String,
}

/// The user's stored response to one prompt.
///
/// Answers are keyed by prompt id; the most recent save wins. There is no
/// delete path for a single answer - editing and resaving is the only
/// mutation route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Answer {
    /// Free text, whether typed or transcribed from a recording
    pub text: String,
    /// Optional attached photo with annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

impl Answer {
    /// Creates a text-only answer.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            photo: None,
        }
    }
}

/// Singleton free-text profile used to personalize the assistant.
///
/// Created empty, updated wholesale by an explicit save, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CoreInfo {
    /// One-paragraph life summary
    pub summary: String,
    /// Key people and their relationships to the user
    pub people: String,
    /// Core values the user lives by
    pub values: String,
}

impl CoreInfo {
    /// Whether every field is blank.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.people.is_empty() && self.values.is_empty()
    }
}

/// A free-form, user-authored, dated note independent of the prompt catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique entry id; assigned by the store when an entry is first saved
    pub id: String,
    /// Entry title
    pub title: String,
    /// Entry body
    pub content: String,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
}

/// The durable record the whole application state is rebuilt from.
///
/// Answers keep insertion order (the order the user first answered in),
/// which also keeps the persisted form stable across round trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemoirState {
    /// Prompt id to answer, ordered by first save
    pub answers: Vec<(String, Answer)>,
    /// Which chapter (life stage or the journal) is expanded, if any
    pub open_chapter: Option<String>,
    /// Personalization profile
    pub core_info: CoreInfo,
    /// Journal entries, ordered by creation
    pub journal_entries: Vec<JournalEntry>,
}

impl MemoirState {
    /// Looks up the stored answer for a prompt.
    pub fn answer(&self, prompt_id: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|(id, _)| id == prompt_id)
            .map(|(_, answer)| answer)
    }

    /// Whether a prompt has a stored answer.
    pub fn is_answered(&self, prompt_id: &str) -> bool {
        self.answer(prompt_id).is_some()
    }

    /// Inserts or replaces the answer for a prompt, preserving the position
    /// of an existing entry.
    pub fn upsert_answer(&mut self, prompt_id: impl Into<String>, answer: Answer) {
        let prompt_id = prompt_id.into();
        match self.answers.iter_mut().find(|(id, _)| *id == prompt_id) {
            Some((_, existing)) => *existing = answer,
            None => self.answers.push((prompt_id, answer)),
        }
    }

    /// Looks up a journal entry by id.
    pub fn journal_entry(&self, id: &str) -> Option<&JournalEntry> {
        self.journal_entries.iter().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_answer_replaces_in_place() {
        let mut state = MemoirState::default();
        state.upsert_answer("B-001", Answer::text("first"));
        state.upsert_answer("C-001", Answer::text("second"));
        state.upsert_answer("B-001", Answer::text("revised"));

        assert_eq!(state.answers.len(), 2);
        assert_eq!(state.answers[0].0, "B-001");
        assert_eq!(state.answer("B-001").unwrap().text, "revised");
    }

    #[test]
    fn test_core_info_is_empty() {
        assert!(CoreInfo::default().is_empty());
        let info = CoreInfo {
            summary: "Born in 1950.".to_string(),
            ..CoreInfo::default()
        };
        assert!(!info.is_empty());
    }
}
