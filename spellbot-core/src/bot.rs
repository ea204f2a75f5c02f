//! Bot abstraction for the outbound side of the chat transport.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in
//! spellbot-telegram, and tests substitute their own.

use crate::error::SendError;
use async_trait::async_trait;

/// Abstraction over the transport operations the handler needs.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends an HTML-formatted message to the given chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), SendError>;
    /// Shows the "typing..." chat action in the given chat.
    async fn send_typing(&self, chat_id: i64) -> Result<(), SendError>;
}
