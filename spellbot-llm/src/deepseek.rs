//! DeepSeek chat-completion client.
//!
//! One POST per check, bearer auth, 30-second request timeout. The model
//! reply is pulled out of prose with [`crate::extract`] and decoded into a
//! [`Correction`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LlmError;
use crate::extract::extract_json;
use crate::prompt::build_prompt;
use crate::{Correction, SpellChecker};

/// Production API root.
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Model requested on every call.
const MODEL: &str = "deepseek-chat";

/// Per-request deadline, independent of caller cancellation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the DeepSeek chat-completion API.
pub struct DeepSeekClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DeepSeekClient {
    /// Creates a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEEPSEEK_BASE_URL)
    }

    /// Creates a client against a custom API root (a self-hosted gateway,
    /// or a mock server in tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Decodes a model reply into a [`Correction`].
    fn parse_correction(content: &str) -> Result<Correction, LlmError> {
        let json = extract_json(content);
        serde_json::from_str(json).map_err(|e| LlmError::Parse {
            source: e,
            content: json.to_string(),
        })
    }
}

#[async_trait]
impl SpellChecker for DeepSeekClient {
    async fn check(&self, text: &str) -> Result<Correction, LlmError> {
        if text.is_empty() {
            return Err(LlmError::EmptyInput);
        }

        let request = ChatCompletionRequest {
            model: MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(text),
            }],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(decoded) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(LlmError::Api(decoded.error.message));
            }
            return Err(LlmError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(LlmError::Decode)?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::NoChoices)?
            .message
            .content;

        debug!(reply_length = content.len(), "model reply received");

        Self::parse_correction(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wraps a reply string into the completion envelope the API returns.
    fn completion_body(content: &str) -> String {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    #[test]
    fn test_parse_correction_bare_object() {
        let correction = DeepSeekClient::parse_correction(
            r#"{"corrected_text":"Привет, мир","has_changes":true,"explanation":"Орфография и пунктуация"}"#,
        )
        .expect("Failed to parse correction");

        assert_eq!(correction.corrected_text, "Привет, мир");
        assert!(correction.has_changes);
        assert_eq!(correction.explanation, "Орфография и пунктуация");
    }

    #[test]
    fn test_parse_correction_fenced_block() {
        let correction = DeepSeekClient::parse_correction(
            "```json\n{\"corrected_text\":\"Привет, мир!\",\"has_changes\":false,\"explanation\":\"\"}\n```",
        )
        .expect("Failed to parse correction");

        assert_eq!(correction.corrected_text, "Привет, мир!");
        assert!(!correction.has_changes);
        assert_eq!(correction.explanation, "");
    }

    #[test]
    fn test_parse_correction_embedded_in_prose() {
        let correction = DeepSeekClient::parse_correction(
            r#"Here is the answer: {"corrected_text":"foo","has_changes":false,"explanation":""} done."#,
        )
        .expect("Failed to parse correction");

        assert_eq!(correction.corrected_text, "foo");
    }

    #[test]
    fn test_parse_correction_missing_explanation_defaults_to_empty() {
        let correction = DeepSeekClient::parse_correction(
            r#"{"corrected_text":"foo","has_changes":false}"#,
        )
        .expect("Failed to parse correction");

        assert_eq!(correction.explanation, "");
    }

    #[test]
    fn test_parse_correction_ignores_unknown_fields() {
        let correction = DeepSeekClient::parse_correction(
            r#"{"corrected_text":"foo","has_changes":true,"explanation":"x","confidence":0.9}"#,
        )
        .expect("Failed to parse correction");

        assert_eq!(correction.corrected_text, "foo");
    }

    #[test]
    fn test_parse_correction_rejects_non_json() {
        let err = DeepSeekClient::parse_correction("нет ошибок").unwrap_err();
        match err {
            LlmError::Parse { content, .. } => assert_eq!(content, "нет ошибок"),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_rejects_empty_input() {
        let client = DeepSeekClient::new("test-key");
        let err = client.check("").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyInput));
    }

    #[tokio::test]
    async fn test_check_returns_correction_from_fenced_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(
                "```json\n{\"corrected_text\":\"Привет, мир\",\"has_changes\":true,\"explanation\":\"Орфография\"}\n```",
            ))
            .create_async()
            .await;

        let client = DeepSeekClient::with_base_url("test-key", server.url());
        let correction = client.check("Превет мир").await.expect("check failed");

        assert_eq!(correction.corrected_text, "Привет, мир");
        assert!(correction.has_changes);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_sends_model_and_prompt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "deepseek-chat",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(
                r#"{"corrected_text":"test","has_changes":false,"explanation":""}"#,
            ))
            .create_async()
            .await;

        let client = DeepSeekClient::with_base_url("test-key", server.url());
        client.check("test").await.expect("check failed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_surfaces_structured_api_error() {
        let mut server = mockito::Server::new_async().await;
        // Mock handles stay bound; a dropped mock is unregistered.
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"server down","type":"internal"}}"#)
            .create_async()
            .await;

        let client = DeepSeekClient::with_base_url("test-key", server.url());
        let err = client.check("test").await.unwrap_err();

        match err {
            LlmError::Api(message) => assert_eq!(message, "server down"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_surfaces_status_and_body_for_opaque_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let client = DeepSeekClient::with_base_url("test-key", server.url());
        let err = client.check("test").await.unwrap_err();

        match err {
            LlmError::Http { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "Service Unavailable");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_rejects_empty_choices() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = DeepSeekClient::with_base_url("test-key", server.url());
        let err = client.check("test").await.unwrap_err();

        assert!(matches!(err, LlmError::NoChoices));
    }
}
