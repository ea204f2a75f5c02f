//! # LLM spell-check client
//!
//! Defines the [`SpellChecker`] trait and the DeepSeek implementation.
//! One call per user text; the model's prose-wrapped reply is coerced into
//! a structured [`Correction`] by the [`extract`] cascade.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod extract;

mod deepseek;
mod prompt;

pub use deepseek::{DeepSeekClient, DEEPSEEK_BASE_URL};
pub use error::LlmError;
pub use prompt::build_prompt;

/// The structured product of one spell-check call.
///
/// Ephemeral: constructed from the model reply, rendered, discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correction {
    /// The original text (unchanged) or the corrected version.
    pub corrected_text: String,
    /// True iff the model judged that edits were made.
    pub has_changes: bool,
    /// Brief human-readable summary of the edits; empty when nothing changed.
    #[serde(default)]
    pub explanation: String,
}

/// Spell-check interface: one call per user text. The production
/// implementation is [`DeepSeekClient`]; tests substitute their own.
#[async_trait]
pub trait SpellChecker: Send + Sync {
    /// Checks `text` for spelling, punctuation and grammar errors and
    /// returns the corrected version.
    async fn check(&self, text: &str) -> Result<Correction, LlmError>;
}
