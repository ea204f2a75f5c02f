//! Core types: sender identity, incoming-message envelope, conversion traits.

use serde::{Deserialize, Serialize};

/// Sender identity attached to an incoming message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// One inbound text message, already detached from the transport.
///
/// `from` is absent for channel posts. `text` is the empty string for
/// non-text content (stickers, photos, voice).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub from: Option<Sender>,
    pub text: String,
}

/// Converts a transport-specific user type to core [`Sender`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> Sender;
}

/// Converts a transport-specific message type to core [`IncomingMessage`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> IncomingMessage;
}
