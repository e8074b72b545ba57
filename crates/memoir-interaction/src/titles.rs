//! One-shot title suggestions for the compiled memoir.

use crate::error::InteractionError;
use crate::gemini::{Content, GeminiClient};

const TITLE_INSTRUCTION: &str = "Based on the following life story, suggest 5 creative and fitting titles for this memoir. Return them as a simple list with each title on a new line. Do not use markdown, numbering, or quotes.";

/// The compiled story must carry at least this much text before titles are
/// worth asking for.
const MIN_STORY_CHARS: usize = 100;

/// Helper producing candidate titles for the compiled document.
#[derive(Clone)]
pub struct TitleSuggester {
    client: GeminiClient,
}

impl TitleSuggester {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Suggests titles for the compiled memoir text.
    ///
    /// # Errors
    ///
    /// - `InsufficientInput` when the story is still too short to name
    /// - remote-call errors otherwise; nothing is retried
    pub async fn suggest(&self, memoir_text: &str) -> Result<Vec<String>, InteractionError> {
        if memoir_text.trim().len() < MIN_STORY_CHARS {
            return Err(InteractionError::InsufficientInput(
                "Please write more of your story before asking for title suggestions.".to_string(),
            ));
        }

        let prompt = format!("{}\n\n---\n{}\n---", TITLE_INSTRUCTION, memoir_text);
        let response = self
            .client
            .generate(None, vec![Content::user_text(prompt)])
            .await?;

        Ok(parse_titles(&response))
    }
}

/// Splits the response into candidate titles, one per non-blank line.
fn parse_titles(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_titles_drops_blank_lines() {
        let titles = parse_titles("A Life Remembered\n\n  The Long Road Home  \n");
        assert_eq!(titles, vec!["A Life Remembered", "The Long Road Home"]);
    }

    #[tokio::test]
    async fn test_short_story_is_rejected_before_any_call() {
        let suggester = TitleSuggester::new(GeminiClient::new("key", "model", "http://unused"));
        let result = suggester.suggest("too short").await;
        assert!(matches!(result, Err(InteractionError::InsufficientInput(_))));
    }
}
