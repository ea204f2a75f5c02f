//! # spellbot-telegram
//!
//! Telegram transport for the spell-checking bot: teloxide-to-core type
//! adapters, the [`TelegramBot`] sender, the per-message [`UpdateHandler`]
//! and the long-polling [`BotRuntime`].
//!
//! The handler works on `spellbot_core` types and trait objects, so every
//! collaborator can be substituted in tests; only the adapters and the
//! runtime touch teloxide types directly.

pub mod adapters;
pub mod bot_adapter;
pub mod handler;
pub mod render;
pub mod runtime;
pub mod texts;

pub use bot_adapter::TelegramBot;
pub use handler::UpdateHandler;
pub use runtime::BotRuntime;
