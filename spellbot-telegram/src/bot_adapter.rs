//! Wraps teloxide::Bot and implements [`spellbot_core::Bot`]. Production code
//! sends replies via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use spellbot_core::{Bot as CoreBot, SendError};
use teloxide::{
    prelude::*,
    types::{ChatAction, ChatId, ParseMode},
};

/// Thin wrapper around teloxide::Bot that implements spellbot-core's Bot
/// trait. Replies carry HTML parse mode, so callers must escape user text.
pub struct TelegramBot {
    bot: teloxide::Bot,
}

impl TelegramBot {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBot {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), SendError> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| SendError(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat_id: i64) -> Result<(), SendError> {
        self.bot
            .send_chat_action(ChatId(chat_id), ChatAction::Typing)
            .await
            .map_err(|e| SendError(e.to_string()))?;
        Ok(())
    }
}
