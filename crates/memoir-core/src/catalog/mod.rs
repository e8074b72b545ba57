//! Prompt catalog domain module.
//!
//! The catalog is the immutable, ordered question bank the rest of the
//! engine works against: every prompt is tagged with a life stage (chapter
//! grouping), a theme and a sensitivity level. Catalog order is canonical
//! for both display and compilation.

mod model;
mod rolodex;

pub use model::{Prompt, PromptCatalog, PromptKind, Sensitivity};
pub use rolodex::{NAME_PROMPT_ID, builtin_catalog};
