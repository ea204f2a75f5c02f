//! Per-message logic: command routing, identity capture and the correction
//! flow. Stateless; every update gets its own handler invocation.

use std::sync::Arc;
use std::time::Duration;

use spellbot_core::{Bot, IncomingMessage, ShutdownToken, ToCoreMessage};
use spellbot_llm::{LlmError, SpellChecker};
use spellbot_storage::{UserRecord, UserStore};
use teloxide::types::{Update, UpdateKind};
use tracing::{error, info};

use crate::adapters::TelegramMessageWrapper;
use crate::render;
use crate::texts;

/// Deadline for the best-effort identity upsert.
const SAVE_USER_TIMEOUT: Duration = Duration::from_secs(3);

/// Handles one update at a time. Holds shared handles to its collaborators,
/// so tests can substitute any of them.
pub struct UpdateHandler {
    bot: Arc<dyn Bot>,
    checker: Arc<dyn SpellChecker>,
    users: Arc<dyn UserStore>,
}

impl UpdateHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        checker: Arc<dyn SpellChecker>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            bot,
            checker,
            users,
        }
    }

    /// Entry point for raw transport updates. Non-message updates are
    /// ignored.
    pub async fn handle_update(&self, shutdown: &ShutdownToken, update: Update) {
        if let UpdateKind::Message(message) = update.kind {
            let incoming = TelegramMessageWrapper(&message).to_core();
            self.handle(shutdown, incoming).await;
        }
    }

    /// Routes one incoming message: empty input, commands, or a spell check.
    pub async fn handle(&self, shutdown: &ShutdownToken, message: IncomingMessage) {
        if message.text.is_empty() {
            self.send(message.chat_id, texts::EMPTY_TEXT_PROMPT).await;
            return;
        }

        if message.text.starts_with("/start") {
            self.save_user(&message).await;
            self.send(message.chat_id, texts::WELCOME_MESSAGE).await;
            return;
        }

        if message.text.starts_with("/help") {
            self.save_user(&message).await;
            self.send(message.chat_id, texts::HELP_MESSAGE).await;
            return;
        }

        self.process_text_check(shutdown, &message).await;
    }

    /// Best-effort identity capture. Channel posts carry no sender and are
    /// skipped; errors and timeouts are logged and swallowed so the reply
    /// still goes out.
    async fn save_user(&self, message: &IncomingMessage) {
        let Some(from) = &message.from else {
            return;
        };

        let mut user = UserRecord::new(
            from.id,
            message.chat_id,
            from.username.clone(),
            from.first_name.clone(),
            from.last_name.clone(),
        );

        match tokio::time::timeout(SAVE_USER_TIMEOUT, self.users.save_user(&mut user)).await {
            Ok(Ok(())) => info!(
                telegram_id = user.telegram_id,
                username = user.username.as_deref().unwrap_or(""),
                chat_id = user.chat_id,
                "user saved"
            ),
            Ok(Err(e)) => error!(error = %e, chat_id = message.chat_id, "failed to save user"),
            Err(_) => error!(chat_id = message.chat_id, "failed to save user: timed out"),
        }
    }

    /// Runs the correction flow for plain text. The LLM call races the
    /// shutdown token; losing the race drops the in-flight request and
    /// reports the failure reply like any other checker error.
    async fn process_text_check(&self, shutdown: &ShutdownToken, message: &IncomingMessage) {
        let username = message
            .from
            .as_ref()
            .and_then(|s| s.username.as_deref())
            .unwrap_or("");
        info!(
            chat_id = message.chat_id,
            text_length = message.text.len(),
            username,
            "processing text check"
        );

        if let Err(e) = self.bot.send_typing(message.chat_id).await {
            error!(error = %e, chat_id = message.chat_id, "failed to send chat action");
        }

        let result = tokio::select! {
            _ = shutdown.cancelled() => Err(LlmError::Cancelled),
            checked = self.checker.check(&message.text) => checked,
        };

        match result {
            Ok(correction) => {
                let reply = render::render_correction(&message.text, &correction);
                self.send(message.chat_id, &reply).await;
            }
            Err(e) => {
                error!(error = %e, chat_id = message.chat_id, "failed to check text");
                self.send(message.chat_id, texts::CHECK_FAILED_MESSAGE).await;
            }
        }
    }

    /// Sends a reply; failures are logged with the full text and swallowed.
    async fn send(&self, chat_id: i64, text: &str) {
        if let Err(e) = self.bot.send_message(chat_id, text).await {
            error!(error = %e, chat_id, text, "failed to send message");
        }
    }
}
