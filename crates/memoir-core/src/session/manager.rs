//! Session lifecycle and store management.

use std::sync::Arc;

use crate::error::Result;
use crate::state::model::{Answer, CoreInfo, JournalEntry, MemoirState};
use crate::state::repository::StateRepository;

/// Chapter id of the free-form journal. Life-stage chapters use the stage
/// name from the catalog as their id.
pub const JOURNAL_CHAPTER_ID: &str = "Journal";

/// The single controller owning the in-memory session state.
///
/// `SessionManager` is the only place the `MemoirState` is mutated. Each
/// named operation applies its change and then synchronously writes the full
/// state through the repository, so in-memory state and durable storage stay
/// in lockstep with no eventual-consistency window.
///
/// Handlers receive the manager by mutable reference; there is no shared
/// ambient state and no concurrent mutation path.
pub struct SessionManager {
    state: MemoirState,
    repository: Arc<dyn StateRepository>,
}

impl SessionManager {
    /// Restores the session from durable storage (load-once).
    ///
    /// A missing blob yields defaults; a corrupt blob has already been
    /// replaced by defaults inside the repository.
    ///
    /// # Errors
    ///
    /// Returns an error only if storage access itself fails.
    pub async fn restore(repository: Arc<dyn StateRepository>) -> Result<Self> {
        let state = repository.load().await?;
        Ok(Self { state, repository })
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &MemoirState {
        &self.state
    }

    /// Upserts the answer for a prompt and persists.
    ///
    /// Overwrite-only semantics: the most recent save wins, nothing is
    /// versioned and nothing else is validated here.
    pub async fn save_answer(&mut self, prompt_id: &str, answer: Answer) -> Result<()> {
        tracing::debug!(prompt_id, "saving answer");
        self.state.upsert_answer(prompt_id, answer);
        self.persist().await
    }

    /// Replaces the personalization profile wholesale and persists.
    ///
    /// Callers holding an assistant conversation must re-initialize it so
    /// the next interaction picks up the fresh profile.
    pub async fn save_core_info(&mut self, info: CoreInfo) -> Result<()> {
        self.state.core_info = info;
        self.persist().await
    }

    /// Saves a journal entry and persists; returns the entry's id.
    ///
    /// An empty `entry.id` means "create": a fresh unique time-based id is
    /// assigned and the entry appended. A known id replaces that entry in
    /// place. An unknown non-empty id is a caller-contract violation and is
    /// silently ignored (no legitimate surface can produce it).
    pub async fn save_journal_entry(&mut self, mut entry: JournalEntry) -> Result<String> {
        if entry.id.is_empty() {
            entry.id = self.generate_entry_id();
            tracing::debug!(entry_id = %entry.id, "creating journal entry");
            self.state.journal_entries.push(entry.clone());
        } else {
            match self
                .state
                .journal_entries
                .iter_mut()
                .find(|existing| existing.id == entry.id)
            {
                Some(existing) => *existing = entry.clone(),
                None => {
                    tracing::warn!(entry_id = %entry.id, "update for unknown journal entry ignored");
                    return Ok(entry.id);
                }
            }
        }

        self.persist().await?;
        Ok(entry.id)
    }

    /// Removes a journal entry and persists.
    ///
    /// The yes/no confirmation guarding deletion lives at the interaction
    /// surface; by the time this runs the user has already confirmed.
    pub async fn delete_journal_entry(&mut self, id: &str) -> Result<()> {
        let before = self.state.journal_entries.len();
        self.state.journal_entries.retain(|entry| entry.id != id);
        if self.state.journal_entries.len() == before {
            tracing::warn!(entry_id = id, "delete for unknown journal entry ignored");
            return Ok(());
        }
        self.persist().await
    }

    /// Toggles a chapter open or closed and persists; returns the chapter
    /// now open, if any.
    ///
    /// This is one atomic transition: opening a chapter while another is
    /// open closes the first and opens the second in the same state write,
    /// so persisted state never shows two chapters open, even transiently.
    pub async fn toggle_chapter(&mut self, chapter_id: &str) -> Result<Option<String>> {
        let was_open = self.state.open_chapter.as_deref() == Some(chapter_id);
        self.state.open_chapter = if was_open {
            None
        } else {
            Some(chapter_id.to_string())
        };
        self.persist().await?;
        Ok(self.state.open_chapter.clone())
    }

    /// The chapter currently expanded, if any.
    pub fn open_chapter(&self) -> Option<&str> {
        self.state.open_chapter.as_deref()
    }

    /// Journal entries for display, most recent date first.
    pub fn journal_entries_by_date_desc(&self) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self.state.journal_entries.iter().collect();
        // ISO dates sort lexicographically; stable sort keeps creation order
        // within one day.
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Generates a fresh journal entry id.
    ///
    /// Millisecond timestamps, bumped until unique so that two entries
    /// created within the same millisecond still get distinct ids.
    fn generate_entry_id(&self) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if self.state.journal_entry(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }

    async fn persist(&self) -> Result<()> {
        self.repository.save(&self.state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock repository recording every write-through.
    struct MockStateRepository {
        initial: Mutex<MemoirState>,
        saves: Mutex<Vec<MemoirState>>,
    }

    impl MockStateRepository {
        fn new() -> Self {
            Self::with_initial(MemoirState::default())
        }

        fn with_initial(initial: MemoirState) -> Self {
            Self {
                initial: Mutex::new(initial),
                saves: Mutex::new(Vec::new()),
            }
        }

        fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }

        fn last_saved(&self) -> Option<MemoirState> {
            self.saves.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl StateRepository for MockStateRepository {
        async fn load(&self) -> Result<MemoirState> {
            Ok(self.initial.lock().unwrap().clone())
        }

        async fn save(&self, state: &MemoirState) -> Result<()> {
            self.saves.lock().unwrap().push(state.clone());
            Ok(())
        }
    }

    async fn manager_with(repository: Arc<MockStateRepository>) -> SessionManager {
        SessionManager::restore(repository).await.unwrap()
    }

    #[tokio::test]
    async fn test_save_answer_writes_through() {
        let repository = Arc::new(MockStateRepository::new());
        let mut manager = manager_with(repository.clone()).await;

        manager
            .save_answer("B-001", Answer::text("Jane Doe, 1950, Ohio"))
            .await
            .unwrap();

        assert_eq!(repository.save_count(), 1);
        let saved = repository.last_saved().unwrap();
        assert_eq!(saved.answer("B-001").unwrap().text, "Jane Doe, 1950, Ohio");

        // Resaving overwrites rather than appending.
        manager
            .save_answer("B-001", Answer::text("Jane Doe"))
            .await
            .unwrap();
        assert_eq!(repository.last_saved().unwrap().answers.len(), 1);
    }

    #[tokio::test]
    async fn test_journal_entry_lifecycle() {
        let repository = Arc::new(MockStateRepository::new());
        let mut manager = manager_with(repository.clone()).await;

        // Create: empty id gets a fresh non-empty one.
        let id = manager
            .save_journal_entry(JournalEntry {
                id: String::new(),
                title: "First Day".to_string(),
                content: "Hello".to_string(),
                date: "2024-01-01".to_string(),
            })
            .await
            .unwrap();
        assert!(!id.is_empty());
        assert_eq!(manager.state().journal_entries.len(), 1);

        // Update: resaving with that id replaces in place.
        let updated_id = manager
            .save_journal_entry(JournalEntry {
                id: id.clone(),
                title: "First Day".to_string(),
                content: "Hello again".to_string(),
                date: "2024-01-01".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(updated_id, id);
        assert_eq!(manager.state().journal_entries.len(), 1);
        assert_eq!(manager.state().journal_entry(&id).unwrap().content, "Hello again");

        // Delete: removed and reflected in the persisted state.
        manager.delete_journal_entry(&id).await.unwrap();
        assert!(manager.state().journal_entries.is_empty());
        assert!(repository.last_saved().unwrap().journal_entries.is_empty());
    }

    #[tokio::test]
    async fn test_journal_update_with_unknown_id_is_silent_noop() {
        let repository = Arc::new(MockStateRepository::new());
        let mut manager = manager_with(repository.clone()).await;

        let result = manager
            .save_journal_entry(JournalEntry {
                id: "does-not-exist".to_string(),
                title: "Ghost".to_string(),
                content: "".to_string(),
                date: "2024-01-01".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert!(manager.state().journal_entries.is_empty());
        // A no-op must not trigger a persistence write.
        assert_eq!(repository.save_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_chapter_invariant() {
        let repository = Arc::new(MockStateRepository::new());
        let mut manager = manager_with(repository.clone()).await;

        // Opening from closed.
        assert_eq!(
            manager.toggle_chapter("Early Childhood").await.unwrap(),
            Some("Early Childhood".to_string())
        );

        // Opening another chapter closes the first in one transition; no
        // intermediate save shows both open.
        assert_eq!(
            manager.toggle_chapter(JOURNAL_CHAPTER_ID).await.unwrap(),
            Some(JOURNAL_CHAPTER_ID.to_string())
        );
        let saved = repository.last_saved().unwrap();
        assert_eq!(saved.open_chapter.as_deref(), Some(JOURNAL_CHAPTER_ID));
        assert_eq!(repository.save_count(), 2);

        // Toggling the open chapter closes it.
        assert_eq!(manager.toggle_chapter(JOURNAL_CHAPTER_ID).await.unwrap(), None);
        assert!(manager.open_chapter().is_none());
    }

    #[tokio::test]
    async fn test_open_chapter_survives_restore() {
        let repository = Arc::new(MockStateRepository::with_initial(MemoirState {
            open_chapter: Some("Mid-Life".to_string()),
            ..MemoirState::default()
        }));
        let manager = manager_with(repository).await;
        assert_eq!(manager.open_chapter(), Some("Mid-Life"));
    }

    #[tokio::test]
    async fn test_journal_display_order_is_date_descending() {
        let repository = Arc::new(MockStateRepository::new());
        let mut manager = manager_with(repository).await;

        for (title, date) in [("old", "2023-05-01"), ("new", "2024-02-10"), ("mid", "2023-11-20")] {
            manager
                .save_journal_entry(JournalEntry {
                    id: String::new(),
                    title: title.to_string(),
                    content: String::new(),
                    date: date.to_string(),
                })
                .await
                .unwrap();
        }

        let titles: Vec<&str> = manager
            .journal_entries_by_date_desc()
            .iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_generated_entry_ids_are_unique() {
        let repository = Arc::new(MockStateRepository::new());
        let mut manager = manager_with(repository).await;

        let mut ids = Vec::new();
        for _ in 0..5 {
            let id = manager
                .save_journal_entry(JournalEntry {
                    id: String::new(),
                    title: "entry".to_string(),
                    content: String::new(),
                    date: "2024-01-01".to_string(),
                })
                .await
                .unwrap();
            ids.push(id);
        }

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
