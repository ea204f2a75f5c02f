//! Adapters from Telegram (teloxide) types to spellbot_core types.
//! Depends only on teloxide and spellbot_core type definitions.

use spellbot_core::{IncomingMessage, Sender, ToCoreMessage, ToCoreUser};

/// Wraps a teloxide User for conversion to a core [`Sender`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> Sender {
        Sender {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to a core [`IncomingMessage`].
///
/// Non-text content (stickers, photos, voice) carries no `text()`, which
/// maps to an empty string here; the handler treats that as empty input.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> IncomingMessage {
        IncomingMessage {
            chat_id: self.0.chat.id.0,
            from: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core()),
            text: self.0.text().unwrap_or("").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core Sender with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("ru".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let wrapper = TelegramUserWrapper(&user);
        let sender = wrapper.to_core();

        assert_eq!(sender.id, 123);
        assert_eq!(sender.username, Some("testuser".to_string()));
        assert_eq!(sender.first_name, Some("Test".to_string()));
        assert_eq!(sender.last_name, Some("User".to_string()));
    }

    /// **Test: optional fields stay None when the Telegram user has no username or last name.**
    #[test]
    fn test_telegram_user_wrapper_without_optional_fields() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(7),
            is_bot: false,
            first_name: "Анна".to_string(),
            last_name: None,
            username: None,
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let sender = TelegramUserWrapper(&user).to_core();

        assert_eq!(sender.id, 7);
        assert_eq!(sender.username, None);
        assert_eq!(sender.first_name, Some("Анна".to_string()));
        assert_eq!(sender.last_name, None);
    }
}
