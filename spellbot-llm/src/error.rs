//! LLM client error types.

use thiserror::Error;

/// Errors that can occur during a spell-check call.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("text cannot be empty")]
    EmptyInput,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote returned non-2xx with a decodable error body.
    #[error("API error: {0}")]
    Api(String),

    /// The remote returned non-2xx and the body was not a structured error.
    #[error("API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(serde_json::Error),

    #[error("no response choices received")]
    NoChoices,

    /// The model reply survived extraction but is not a correction object.
    #[error("failed to parse AI response as JSON: {source}, content: {content}")]
    Parse {
        source: serde_json::Error,
        content: String,
    },

    /// The caller's shutdown signal fired before the reply arrived.
    #[error("check cancelled")]
    Cancelled,
}
