//! The conversational memoir assistant.
//!
//! A thin multi-turn wrapper over the generation API. The system context is
//! assembled once from the user's CoreInfo profile; whenever that profile
//! is saved the owning service drops the assistant so the next interaction
//! starts fresh with the new context.

use crate::error::InteractionError;
use crate::gemini::{Content, GeminiClient};
use memoir_core::state::CoreInfo;

/// Opening line shown when a conversation starts.
pub const ASSISTANT_GREETING: &str = "Hello! How can I help you with your memoir today?";

const ASSISTANT_ROLE: &str = "You are a friendly and empathetic Memoir Assistant. Your goal is to help the user document their life story. You can help them understand questions, rephrase them, offer encouragement, and suggest what to work on next. Keep your answers concise and supportive.";

/// One turn of the conversation, kept in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// Builds the assistant's system context from the personalization profile.
///
/// Empty profile fields are omitted entirely rather than sent blank.
pub fn assistant_context(core_info: &CoreInfo) -> String {
    let mut context = String::from(ASSISTANT_ROLE);
    context.push_str("\n\n");
    context
        .push_str("Here is some core information about the user to help you personalize your responses:\n");
    if !core_info.summary.is_empty() {
        context.push_str(&format!("- Life Summary: {}\n", core_info.summary));
    }
    if !core_info.people.is_empty() {
        context.push_str(&format!("- Key People: {}\n", core_info.people));
    }
    if !core_info.values.is_empty() {
        context.push_str(&format!("- Core Values: {}\n", core_info.values));
    }
    context
}

/// A stateful assistant conversation.
pub struct MemoirAssistant {
    client: GeminiClient,
    system_context: String,
    history: Vec<ChatTurn>,
}

impl MemoirAssistant {
    /// Starts a fresh conversation personalized with the given profile.
    pub fn new(client: GeminiClient, core_info: &CoreInfo) -> Self {
        Self {
            client,
            system_context: assistant_context(core_info),
            history: Vec::new(),
        }
    }

    /// Sends one user message and returns the reply.
    ///
    /// History is only extended when the call succeeds, so a failed call
    /// can simply be re-triggered.
    ///
    /// # Errors
    ///
    /// Propagates remote-call failures; no retry is scheduled.
    pub async fn send_message(&mut self, message: &str) -> Result<String, InteractionError> {
        let mut contents: Vec<Content> = self
            .history
            .iter()
            .map(|turn| match turn.role {
                ChatRole::User => Content::user_text(turn.text.clone()),
                ChatRole::Assistant => Content::model_text(turn.text.clone()),
            })
            .collect();
        contents.push(Content::user_text(message));

        let reply = self
            .client
            .generate(Some(&self.system_context), contents)
            .await?;

        self.history.push(ChatTurn {
            role: ChatRole::User,
            text: message.to_string(),
        });
        self.history.push(ChatTurn {
            role: ChatRole::Assistant,
            text: reply.clone(),
        });

        Ok(reply)
    }

    /// The conversation so far.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_omits_empty_fields() {
        let context = assistant_context(&CoreInfo::default());
        assert!(context.contains("Memoir Assistant"));
        assert!(!context.contains("Life Summary"));
        assert!(!context.contains("Key People"));
        assert!(!context.contains("Core Values"));
    }

    #[test]
    fn test_context_includes_filled_fields() {
        let info = CoreInfo {
            summary: "Born in 1950, raised on a farm.".to_string(),
            people: String::new(),
            values: "Honesty, Family".to_string(),
        };
        let context = assistant_context(&info);
        assert!(context.contains("- Life Summary: Born in 1950, raised on a farm."));
        assert!(!context.contains("Key People"));
        assert!(context.contains("- Core Values: Honesty, Family"));
    }
}
