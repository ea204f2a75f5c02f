//! Fixed user-facing reply texts. Russian HTML strings, reproduced verbatim;
//! do not reflow or re-wrap them.

/// Reply to a message with no text content.
pub const EMPTY_TEXT_PROMPT: &str =
    "Пожалуйста, отправьте текст для проверки орфографии и пунктуации.";

/// Reply when the correction flow fails for any reason.
pub const CHECK_FAILED_MESSAGE: &str =
    "❌ Произошла ошибка при проверке текста. Пожалуйста, попробуйте позже.";

/// Reply to `/start`.
pub const WELCOME_MESSAGE: &str = r#"👋 <b>Добро пожаловать в Spell Bot!</b>

Я помогу вам исправить орфографические, пунктуационные и грамматические ошибки в ваших текстах.

<b>Как использовать:</b>
1. Отправьте мне текст на русском языке
2. Я исправлю все ошибки
3. Верну вам исправленный текст в удобном для копирования формате

<b>Преимущества:</b>
• Текст в блоке кода для легкого копирования
• Сохранение смысла и стиля текста
• Объяснения сделанных исправлений

<b>Команды:</b>
/start - показать это сообщение
/help - получить справку

Отправьте текст для исправления! ✏️"#;

/// Reply to `/help`.
pub const HELP_MESSAGE: &str = r#"ℹ️ <b>Справка по Spell Bot</b>

<b>Что я умею:</b>
• Исправляю орфографические ошибки
• Исправляю пунктуационные ошибки (запятые, точки, двоеточия и т.д.)
• Исправляю грамматические ошибки
• Возвращаю готовый к использованию текст в блоке кода
• Объясняю, что было исправлено

<b>Как работаю:</b>
1. Отправьте мне текст
2. Я найду и исправлю все ошибки
3. Верну исправленный текст в кодовом блоке
4. Вы можете легко скопировать результат одним нажатием

<b>Особенности:</b>
• Сохраняю смысл, тон и стиль вашего текста
• Работаю только с русским языком
• Обрабатываю тексты любой длины

<b>Пример:</b>
Просто отправьте: "Превет мир как у тибя дила?"
Я отвечу: "Привет, мир! Как у тебя дела?""#;
