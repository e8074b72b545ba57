//! Deterministic compilation of the store into an ordered document.
//!
//! Compilation is a pure projection of `(catalog, state)`: it never mutates
//! the store, takes no wall-clock input, and produces byte-identical output
//! for identical input. Chapters appear in catalog order, preceded by the
//! journal chapter when any entries exist.

use crate::catalog::{NAME_PROMPT_ID, PromptCatalog};
use crate::state::model::{MemoirState, Photo};

/// Chapter title used for the journal section of the compiled document.
const JOURNAL_CHAPTER_TITLE: &str = "My Journal";

/// One emitted block within a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledEntry {
    /// A dated journal entry.
    Journal {
        title: String,
        date: String,
        body: String,
    },
    /// An answered prompt, with its photo block when present.
    Answer {
        prompt: String,
        body: String,
        photo: Option<Photo>,
    },
}

/// A chapter of the compiled document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledChapter {
    pub title: String,
    pub entries: Vec<CompiledEntry>,
}

/// The compiled document model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMemoir {
    pub title: String,
    pub chapters: Vec<CompiledChapter>,
}

/// Compiles the store into an ordered document.
///
/// Order rules:
/// 1. Title block, named after the first comma-separated segment of the
///    stored name answer ([`NAME_PROMPT_ID`]), falling back to "Memoir".
/// 2. Journal chapter (only if entries exist), entries by date ascending.
/// 3. One chapter per catalog life stage, in catalog order; within a
///    chapter, prompts in catalog order; only answered prompts are emitted.
pub fn compile(catalog: &PromptCatalog, state: &MemoirState) -> CompiledMemoir {
    let narrator = state
        .answer(NAME_PROMPT_ID)
        .map(|answer| answer.text.split(',').next().unwrap_or("").trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Memoir".to_string());

    let mut chapters = Vec::new();

    if !state.journal_entries.is_empty() {
        let mut entries: Vec<_> = state.journal_entries.iter().collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        chapters.push(CompiledChapter {
            title: JOURNAL_CHAPTER_TITLE.to_string(),
            entries: entries
                .into_iter()
                .map(|entry| CompiledEntry::Journal {
                    title: entry.title.clone(),
                    date: entry.date.clone(),
                    body: entry.content.clone(),
                })
                .collect(),
        });
    }

    for stage in catalog.life_stages() {
        let entries: Vec<CompiledEntry> = catalog
            .prompts_for_stage(stage)
            .filter_map(|prompt| {
                state.answer(&prompt.id).map(|answer| CompiledEntry::Answer {
                    prompt: prompt.text.clone(),
                    body: answer.text.clone(),
                    photo: answer.photo.clone(),
                })
            })
            .collect();

        if !entries.is_empty() {
            chapters.push(CompiledChapter {
                title: stage.to_string(),
                entries,
            });
        }
    }

    CompiledMemoir {
        title: format!("The Living Memoir of {}", narrator),
        chapters,
    }
}

impl CompiledMemoir {
    /// Renders the document as plain text with markdown-style headings.
    ///
    /// Newlines inside answer and journal bodies are preserved as line
    /// breaks. This rendering feeds the title-suggestion helper and the
    /// text export.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n", self.title));

        for chapter in &self.chapters {
            out.push_str(&format!("\n## CHAPTER: {}\n", chapter.title));
            for entry in &chapter.entries {
                match entry {
                    CompiledEntry::Journal { title, date, body } => {
                        out.push_str(&format!("\n### {}\n{}\n\n{}\n", title, date, body));
                    }
                    CompiledEntry::Answer { prompt, body, photo } => {
                        out.push_str(&format!("\n### Q: {}\nA: {}\n", prompt, body));
                        if let Some(photo) = photo {
                            out.push_str(&format!("[Photo: {}]\n", photo.annotation));
                        }
                    }
                }
            }
        }

        out
    }

    /// Renders the document as a standalone HTML page, photos inlined as
    /// data URIs.
    pub fn to_html(&self) -> String {
        let mut body = String::new();
        body.push_str(&format!("<h1>{}</h1>\n", escape_html(&self.title)));

        for chapter in &self.chapters {
            body.push_str(&format!(
                "<hr><h2 class=\"chapter-start\">CHAPTER: {}</h2>\n",
                escape_html(&chapter.title)
            ));
            for entry in &chapter.entries {
                match entry {
                    CompiledEntry::Journal { title, date, body: content } => {
                        body.push_str(&format!("<h3>{}</h3>\n", escape_html(title)));
                        body.push_str(&format!("<p><em>{}</em></p>\n", escape_html(date)));
                        body.push_str(&format!("<p>{}</p>\n", text_to_html(content)));
                    }
                    CompiledEntry::Answer { prompt, body: answer, photo } => {
                        body.push_str(&format!("<h3>Q: {}</h3>\n", escape_html(prompt)));
                        body.push_str(&format!("<p><strong>A:</strong> {}</p>\n", text_to_html(answer)));
                        if let Some(photo) = photo {
                            body.push_str(&format!(
                                "<div class=\"photo\"><img src=\"{}\" alt=\"Attached photo\"><p><em>{}</em></p></div>\n",
                                escape_attribute(&photo.data),
                                escape_html(&photo.annotation)
                            ));
                        }
                    }
                }
            }
        }

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n\
             <style>\nbody {{ font-family: serif; line-height: 1.6; max-width: 800px; margin: 2em auto; padding: 0 1em; }}\n\
             img {{ max-width: 100%; }}\n\
             @media print {{ .chapter-start {{ break-before: page; }} }}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_html(&self.title),
            body
        )
    }
}

/// Escapes text for HTML element content.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes text for a double-quoted HTML attribute value.
fn escape_attribute(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}

/// Escapes text and preserves newlines as `<br>` line breaks.
fn text_to_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::state::model::{Answer, JournalEntry};

    fn state_with_one_answer() -> MemoirState {
        let mut state = MemoirState::default();
        state.upsert_answer("C-001", Answer::text("A sunny kitchen,\nthe radio on."));
        state
    }

    #[test]
    fn test_single_answered_chapter_emitted() {
        let catalog = builtin_catalog();
        let document = compile(&catalog, &state_with_one_answer());

        assert_eq!(document.chapters.len(), 1);
        assert_eq!(document.chapters[0].title, "Early Childhood");
        assert_eq!(document.chapters[0].entries.len(), 1);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let catalog = builtin_catalog();
        let mut state = state_with_one_answer();
        state.journal_entries.push(JournalEntry {
            id: "1".to_string(),
            title: "First Day".to_string(),
            content: "Hello".to_string(),
            date: "2024-01-01".to_string(),
        });

        let first = compile(&catalog, &state);
        let second = compile(&catalog, &state);
        assert_eq!(first, second);
        assert_eq!(first.to_plain_text(), second.to_plain_text());
        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    fn test_title_from_name_answer() {
        let catalog = builtin_catalog();
        let mut state = MemoirState::default();
        state.upsert_answer("B-001", Answer::text("Jane Doe, born 1950 in Ohio"));

        let document = compile(&catalog, &state);
        assert_eq!(document.title, "The Living Memoir of Jane Doe");

        let fallback = compile(&catalog, &MemoirState::default());
        assert_eq!(fallback.title, "The Living Memoir of Memoir");
    }

    #[test]
    fn test_journal_chapter_first_and_date_ascending() {
        let catalog = builtin_catalog();
        let mut state = state_with_one_answer();
        for (id, date) in [("2", "2024-03-01"), ("1", "2023-01-15")] {
            state.journal_entries.push(JournalEntry {
                id: id.to_string(),
                title: format!("entry {}", id),
                content: String::new(),
                date: date.to_string(),
            });
        }

        let document = compile(&catalog, &state);
        assert_eq!(document.chapters[0].title, "My Journal");
        match (&document.chapters[0].entries[0], &document.chapters[0].entries[1]) {
            (
                CompiledEntry::Journal { date: first, .. },
                CompiledEntry::Journal { date: second, .. },
            ) => {
                assert!(first < second);
            }
            _ => panic!("expected journal entries"),
        }
    }

    #[test]
    fn test_newlines_become_line_breaks_in_html() {
        let catalog = builtin_catalog();
        let document = compile(&catalog, &state_with_one_answer());
        let html = document.to_html();
        assert!(html.contains("A sunny kitchen,<br>the radio on."));
    }

    #[test]
    fn test_photo_block_rendered_when_present() {
        let catalog = builtin_catalog();
        let mut state = MemoirState::default();
        state.upsert_answer(
            "C-002",
            Answer {
                text: "A small blue house.".to_string(),
                photo: Some(Photo {
                    data: "data:image/png;base64,AAAA".to_string(),
                    annotation: "The house on Elm Street".to_string(),
                }),
            },
        );

        let document = compile(&catalog, &state);
        let html = document.to_html();
        assert!(html.contains("data:image/png;base64,AAAA"));
        assert!(html.contains("The house on Elm Street"));
        assert!(document.to_plain_text().contains("[Photo: The house on Elm Street]"));
    }
}
