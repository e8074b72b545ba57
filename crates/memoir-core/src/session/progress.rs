//! Per-chapter progress counters.

use crate::catalog::PromptCatalog;
use crate::state::model::MemoirState;

/// Answered/total counters for one life-stage chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterProgress {
    pub life_stage: String,
    pub answered: usize,
    pub total: usize,
}

/// Derives progress counters for every life stage, in catalog order.
///
/// A pure projection of the store; re-derived in full after each answer
/// save rather than incrementally maintained.
pub fn chapter_progress(catalog: &PromptCatalog, state: &MemoirState) -> Vec<ChapterProgress> {
    catalog
        .life_stages()
        .into_iter()
        .map(|stage| {
            let mut answered = 0;
            let mut total = 0;
            for prompt in catalog.prompts_for_stage(stage) {
                total += 1;
                if state.is_answered(&prompt.id) {
                    answered += 1;
                }
            }
            ChapterProgress {
                life_stage: stage.to_string(),
                answered,
                total,
            }
        })
        .collect()
}
