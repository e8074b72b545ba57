//! Prompt catalog domain model.

use crate::error::{MemoirError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumString};

/// The conversational register a prompt is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum PromptKind {
    Factual,
    Reflective,
    Sensory,
    Hypothetical,
}

/// Sensitivity classification driving the consent gate.
///
/// `Low` prompts go straight to capture. `Medium` and `High` both require an
/// explicit yes/no from the user before any audio is captured; they differ
/// only in how strongly the consent request is worded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

impl Sensitivity {
    /// Whether capture for a prompt of this sensitivity must pause for
    /// explicit user consent.
    pub fn requires_consent(self) -> bool {
        !matches!(self, Sensitivity::Low)
    }
}

/// One catalog-defined biographical question.
///
/// Prompts are immutable and catalog-provided; ids are globally unique,
/// stable and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique, stable prompt identifier (e.g. "C-017")
    pub id: String,
    /// The question shown (and spoken) to the user
    pub text: String,
    /// Life-stage grouping; one chapter per life stage
    pub life_stage: String,
    /// Thematic tag (e.g. "Love & Relationships")
    pub theme: String,
    /// Conversational register
    pub kind: PromptKind,
    /// Consent-gate classification
    pub sensitivity: Sensitivity,
}

/// Ordered, immutable collection of prompts with id-based lookup.
///
/// The insertion order of the prompt list defines canonical display and
/// compilation order; life stages appear in the order their first prompt
/// appears.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    prompts: Vec<Prompt>,
    index: HashMap<String, usize>,
}

impl PromptCatalog {
    /// Builds a catalog from an ordered prompt list.
    ///
    /// # Errors
    ///
    /// Returns an error if two prompts share an id.
    pub fn new(prompts: Vec<Prompt>) -> Result<Self> {
        let mut index = HashMap::with_capacity(prompts.len());
        for (position, prompt) in prompts.iter().enumerate() {
            if index.insert(prompt.id.clone(), position).is_some() {
                return Err(MemoirError::internal(format!(
                    "duplicate prompt id in catalog: {}",
                    prompt.id
                )));
            }
        }
        Ok(Self { prompts, index })
    }

    /// All prompts in canonical order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Looks up a prompt by id.
    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.index.get(id).map(|&position| &self.prompts[position])
    }

    /// The distinct life stages, in the order their first prompt appears.
    pub fn life_stages(&self) -> Vec<&str> {
        let mut stages: Vec<&str> = Vec::new();
        for prompt in &self.prompts {
            if !stages.contains(&prompt.life_stage.as_str()) {
                stages.push(&prompt.life_stage);
            }
        }
        stages
    }

    /// All prompts belonging to one life stage, in canonical order.
    pub fn prompts_for_stage<'a>(&'a self, stage: &'a str) -> impl Iterator<Item = &'a Prompt> {
        self.prompts
            .iter()
            .filter(move |prompt| prompt.life_stage == stage)
    }

    /// Whether the given id names a life stage in this catalog.
    pub fn has_stage(&self, stage: &str) -> bool {
        self.prompts.iter().any(|prompt| prompt.life_stage == stage)
    }

    /// Number of prompts in the catalog.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the catalog contains no prompts.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}
