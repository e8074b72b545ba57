//! Gemini REST plumbing shared by the transcription, assistant and title
//! clients.
//!
//! Calls the `generateContent` endpoint directly; no streaming, no retries.
//! Configuration priority: explicit constructor > config.toml > defaults,
//! with the API key always taken from the `GEMINI_API_KEY` environment
//! variable.

use crate::error::InteractionError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use memoir_infrastructure::AppConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

/// Client for the Gemini `generateContent` HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client with the provided API key, model and base URL.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    /// Creates a client from the application config and the `GEMINI_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the API key is not set.
    pub fn from_config(config: &AppConfig) -> Result<Self, InteractionError> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            InteractionError::Config(
                "GEMINI_API_KEY not found in the environment".to_string(),
            )
        })?;
        Ok(Self::new(api_key, &config.model, &config.api_base_url))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Issues one `generateContent` call and extracts the text answer.
    ///
    /// # Errors
    ///
    /// - `Process` for transport failures and non-2xx statuses
    /// - `MalformedResponse` when the body carries no text candidate
    pub async fn generate(
        &self,
        system_instruction: Option<&str>,
        contents: Vec<Content>,
    ) -> Result<String, InteractionError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );

        let request = GenerateContentRequest {
            contents,
            system_instruction: system_instruction.map(|text| Content {
                role: "system".to_string(),
                parts: vec![Part::Text {
                    text: text.to_string(),
                }],
            }),
        };

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| InteractionError::Process {
                status_code: None,
                message: format!("Gemini API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|err| {
                InteractionError::MalformedResponse(format!("Failed to parse Gemini response: {err}"))
            })?;

        extract_text_response(parsed)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

/// One turn of content sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn holding plain text.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// A model turn holding plain text (conversation history).
    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// A user turn holding an instruction plus an inline binary payload.
    pub fn user_with_inline_data(
        text: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![
                Part::Text { text: text.into() },
                Part::InlineData {
                    inline_data: InlineDataPayload {
                        mime_type: mime_type.into(),
                        data: BASE64_STANDARD.encode(bytes),
                    },
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPayload {
    pub mime_type: String,
    pub data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, InteractionError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            InteractionError::MalformedResponse(
                "Gemini API returned no text in the response candidates".to_string(),
            )
        })
}

fn map_http_error(status: StatusCode, body: String) -> InteractionError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    InteractionError::Process {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_data_serialization() {
        let content = Content::user_with_inline_data("transcribe", "audio/webm", b"abc");
        let json = serde_json::to_value(&content).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["parts"][0]["text"], "transcribe");
        assert_eq!(json["parts"][1]["inlineData"]["mimeType"], "audio/webm");
        assert_eq!(json["parts"][1]["inlineData"]["data"], "YWJj");
    }

    #[test]
    fn test_http_error_mapping() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
                .to_string(),
        );
        match err {
            InteractionError::Process {
                status_code,
                message,
                is_retryable,
            } => {
                assert_eq!(status_code, Some(429));
                assert!(is_retryable);
                assert!(message.contains("RESOURCE_EXHAUSTED"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_retryable_client_error() {
        let err = map_http_error(StatusCode::BAD_REQUEST, "nope".to_string());
        match err {
            InteractionError::Process { is_retryable, .. } => assert!(!is_retryable),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
