//! # spellbot-core
//!
//! Core types and traits for the spell-checking bot: the [`Bot`] send trait,
//! the incoming-message envelope, the [`ShutdownToken`] cancellation signal,
//! and tracing initialization. Transport-agnostic; used by every other crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod shutdown;
pub mod types;

pub use bot::Bot;
pub use error::SendError;
pub use logger::init_tracing;
pub use shutdown::ShutdownToken;
pub use types::{IncomingMessage, Sender, ToCoreMessage, ToCoreUser};
