//! MemoirState DTOs and migrations
//!
//! Two schema versions exist in the wild:
//!
//! - V1.0.0: written before schema versioning was introduced; carries no
//!   `version` field and stores answer values as bare transcript strings
//!   (photo support did not exist yet). Blobs written mid-transition may
//!   mix bare strings and full records.
//! - V2.0.0: the canonical shape with an explicit `"version"` tag and
//!   structured answer records.
//!
//! Field names stay camelCase so V2 blobs remain byte-compatible with
//! blobs from earlier releases.

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use memoir_core::error::{MemoirError, Result};
use memoir_core::state::{Answer, CoreInfo, JournalEntry, MemoirState, Photo};

/// Schema version tag of legacy, pre-versioning blobs.
pub const STATE_VERSION_V1: &str = "1.0.0";
/// Schema version tag written by the current code.
pub const STATE_VERSION_V2: &str = "2.0.0";

// ============================================================================
// Leaf DTOs (shared between schema versions)
// ============================================================================

/// Photo record: image bytes as a data URI plus a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoDTO {
    pub data: String,
    pub annotation: String,
}

/// Structured answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDTO {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoDTO>,
}

/// Personalization profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CoreInfoDTO {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub people: String,
    #[serde(default)]
    pub values: String,
}

/// Journal entry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryDTO {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
}

// ============================================================================
// Versioned state DTOs
// ============================================================================

/// A V1 answer value: either a bare transcript string or a full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValueV1 {
    Text(String),
    Record(AnswerDTO),
}

/// Memoir state schema V1.0.0 (legacy, pre-versioning).
///
/// Every field besides `answers` may be missing from old blobs and defaults
/// in; `answers` itself defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct MemoirStateV1_0 {
    #[serde(default)]
    pub answers: Vec<(String, AnswerValueV1)>,
    #[serde(default)]
    pub open_chapter: Option<String>,
    #[serde(default)]
    pub core_info: Option<CoreInfoDTO>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntryDTO>,
}

/// Memoir state schema V2.0.0.
///
/// Answers are structured records; the serialized form carries an explicit
/// `"version": "2.0.0"` tag (added by [`encode_state`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Versioned)]
#[versioned(version = "2.0.0")]
#[serde(rename_all = "camelCase")]
pub struct MemoirStateV2_0 {
    #[serde(default)]
    pub answers: Vec<(String, AnswerDTO)>,
    #[serde(default)]
    pub open_chapter: Option<String>,
    #[serde(default)]
    pub core_info: CoreInfoDTO,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntryDTO>,
}

/// Type alias for the latest MemoirState version.
pub type MemoirStateDTO = MemoirStateV2_0;

// ============================================================================
// Migration implementations
// ============================================================================

/// Migration from V1.0.0 to V2.0.0.
///
/// Bare string answers are wrapped as `{ text }` records; no photo data
/// existed in V1, so the migration is lossless and idempotent (a V1 blob
/// that already held records passes through unchanged).
impl MigratesTo<MemoirStateV2_0> for MemoirStateV1_0 {
    fn migrate(self) -> MemoirStateV2_0 {
        MemoirStateV2_0 {
            answers: self
                .answers
                .into_iter()
                .map(|(prompt_id, value)| {
                    let record = match value {
                        AnswerValueV1::Text(text) => AnswerDTO { text, photo: None },
                        AnswerValueV1::Record(record) => record,
                    };
                    (prompt_id, record)
                })
                .collect(),
            open_chapter: self.open_chapter,
            core_info: self.core_info.unwrap_or_default(),
            journal_entries: self.journal_entries,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl From<PhotoDTO> for Photo {
    fn from(dto: PhotoDTO) -> Self {
        Photo {
            data: dto.data,
            annotation: dto.annotation,
        }
    }
}

impl From<Photo> for PhotoDTO {
    fn from(photo: Photo) -> Self {
        PhotoDTO {
            data: photo.data,
            annotation: photo.annotation,
        }
    }
}

impl From<AnswerDTO> for Answer {
    fn from(dto: AnswerDTO) -> Self {
        Answer {
            text: dto.text,
            photo: dto.photo.map(Into::into),
        }
    }
}

impl From<Answer> for AnswerDTO {
    fn from(answer: Answer) -> Self {
        AnswerDTO {
            text: answer.text,
            photo: answer.photo.map(Into::into),
        }
    }
}

impl From<CoreInfoDTO> for CoreInfo {
    fn from(dto: CoreInfoDTO) -> Self {
        CoreInfo {
            summary: dto.summary,
            people: dto.people,
            values: dto.values,
        }
    }
}

impl From<CoreInfo> for CoreInfoDTO {
    fn from(info: CoreInfo) -> Self {
        CoreInfoDTO {
            summary: info.summary,
            people: info.people,
            values: info.values,
        }
    }
}

impl From<JournalEntryDTO> for JournalEntry {
    fn from(dto: JournalEntryDTO) -> Self {
        JournalEntry {
            id: dto.id,
            title: dto.title,
            content: dto.content,
            date: dto.date,
        }
    }
}

impl From<JournalEntry> for JournalEntryDTO {
    fn from(entry: JournalEntry) -> Self {
        JournalEntryDTO {
            id: entry.id,
            title: entry.title,
            content: entry.content,
            date: entry.date,
        }
    }
}

/// Convert the canonical DTO to the domain model.
impl IntoDomain<MemoirState> for MemoirStateV2_0 {
    fn into_domain(self) -> MemoirState {
        MemoirState {
            answers: self
                .answers
                .into_iter()
                .map(|(prompt_id, answer)| (prompt_id, answer.into()))
                .collect(),
            open_chapter: self.open_chapter,
            core_info: self.core_info.into(),
            journal_entries: self.journal_entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Convert the domain model to the canonical DTO for persistence.
impl FromDomain<MemoirState> for MemoirStateV2_0 {
    fn from_domain(state: MemoirState) -> Self {
        MemoirStateV2_0 {
            answers: state
                .answers
                .into_iter()
                .map(|(prompt_id, answer)| (prompt_id, answer.into()))
                .collect(),
            open_chapter: state.open_chapter,
            core_info: state.core_info.into(),
            journal_entries: state.journal_entries.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Decode / encode
// ============================================================================

/// Decodes a raw persisted value into the domain model, applying the
/// migration chain.
///
/// The schema version is read once here: a missing `version` field marks a
/// legacy V1 blob (the pre-versioning format never wrote one).
///
/// # Errors
///
/// Returns a serialization error when the value does not match its declared
/// schema, and a migration error for an unknown version tag. Callers treat
/// both as a corrupt blob and fall back to defaults.
pub fn decode_state(value: serde_json::Value) -> Result<MemoirState> {
    let version = value
        .get("version")
        .and_then(|tag| tag.as_str())
        .unwrap_or(STATE_VERSION_V1)
        .to_string();

    match version.as_str() {
        STATE_VERSION_V1 => {
            let legacy: MemoirStateV1_0 = serde_json::from_value(value)?;
            Ok(legacy.migrate().into_domain())
        }
        STATE_VERSION_V2 => {
            let dto: MemoirStateV2_0 = serde_json::from_value(value)?;
            Ok(dto.into_domain())
        }
        other => Err(MemoirError::migration(format!(
            "unsupported memoir state schema version: {}",
            other
        ))),
    }
}

/// Encodes the domain model as the canonical (latest) persisted value,
/// version tag included.
pub fn encode_state(state: &MemoirState) -> Result<serde_json::Value> {
    let dto = MemoirStateDTO::from_domain(state.clone());
    let mut value = serde_json::to_value(&dto)?;
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "version".to_string(),
            serde_json::Value::String(STATE_VERSION_V2.to_string()),
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v1_bare_string_answer_migrates() {
        let blob = json!({
            "answers": [["B-001", "Jane Doe"]],
            "openChapter": null
        });

        let state = decode_state(blob).unwrap();
        let answer = state.answer("B-001").unwrap();
        assert_eq!(answer.text, "Jane Doe");
        assert!(answer.photo.is_none());
        assert!(state.core_info.is_empty());
        assert!(state.journal_entries.is_empty());
    }

    #[test]
    fn test_migration_is_idempotent() {
        let blob = json!({
            "answers": [["B-001", "Jane Doe"]]
        });

        let migrated = decode_state(blob).unwrap();
        let reencoded = encode_state(&migrated).unwrap();
        assert_eq!(reencoded["version"], STATE_VERSION_V2);

        // Loading the migrated output again is a no-op.
        let roundtripped = decode_state(reencoded).unwrap();
        assert_eq!(roundtripped, migrated);
    }

    #[test]
    fn test_v1_mixed_answer_shapes() {
        let blob = json!({
            "answers": [
                ["B-001", "Jane Doe"],
                ["C-002", {"text": "A small blue house.", "photo": {"data": "data:image/png;base64,AAAA", "annotation": "home"}}]
            ]
        });

        let state = decode_state(blob).unwrap();
        assert_eq!(state.answer("B-001").unwrap().text, "Jane Doe");
        let with_photo = state.answer("C-002").unwrap();
        assert_eq!(with_photo.photo.as_ref().unwrap().annotation, "home");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let state = decode_state(json!({"answers": []})).unwrap();
        assert!(state.open_chapter.is_none());
        assert!(state.core_info.is_empty());
        assert!(state.journal_entries.is_empty());
    }

    #[test]
    fn test_unknown_version_rejected() {
        let result = decode_state(json!({"version": "9.0.0", "answers": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_uses_camel_case_keys() {
        let mut state = MemoirState::default();
        state.open_chapter = Some("Journal".to_string());
        let value = encode_state(&state).unwrap();
        assert!(value.get("openChapter").is_some());
        assert!(value.get("coreInfo").is_some());
        assert!(value.get("journalEntries").is_some());
    }
}
