//! HTML rendering of correction results. Telegram parses replies as HTML, so
//! every substituted string goes through [`escape_html`].

use spellbot_llm::Correction;

/// Escapes the characters Telegram's HTML parse mode treats specially.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds the reply for one correction: the original text in a code block
/// when nothing changed, the corrected text plus an optional explanation
/// otherwise.
pub fn render_correction(original_text: &str, correction: &Correction) -> String {
    let mut reply = String::new();

    if correction.has_changes {
        reply.push_str("✏️ <b>Текст исправлен!</b>\n\n");
        reply.push_str("📝 <b>Исправленный текст:</b>\n");
        reply.push_str("<code>");
        reply.push_str(&escape_html(&correction.corrected_text));
        reply.push_str("</code>");

        if !correction.explanation.is_empty() {
            reply.push_str("\n\n💡 <b>Исправления:</b>\n");
            reply.push_str(&escape_html(&correction.explanation));
        }
    } else {
        reply.push_str("✅ <b>Текст проверен и не требует исправлений!</b>\n\n");
        reply.push_str("📝 <b>Исходный текст:</b>\n");
        reply.push_str("<code>");
        reply.push_str(&escape_html(original_text));
        reply.push_str("</code>");
    }

    reply
}
