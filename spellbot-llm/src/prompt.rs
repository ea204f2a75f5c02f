//! The fixed Russian instruction sent to the model.

/// Builds the spell-check prompt with the user's text embedded in double
/// quotes on the final line.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"Ты - эксперт по русской орфографии и пунктуации. Проверь текст на ошибки и исправь их, сохранив исходный смысл и стиль. Верни ТОЛЬКО валидный JSON без дополнительных комментариев.

Формат ответа:
{{
  "corrected_text": "исправленный текст",
  "has_changes": true/false,
  "explanation": "краткое объяснение сделанных исправлений или пустая строка если изменений нет"
}}

Важно:
- Исправь ВСЕ орфографические, пунктуационные и грамматические ошибки
- Сохрани исходный смысл, тон и стиль текста
- Если ошибок нет, верни исходный текст в corrected_text и has_changes: false
- В explanation кратко опиши что было исправлено

Текст: "{}""#,
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_in_quotes() {
        let prompt = build_prompt("Превет мир");
        assert!(prompt.ends_with(r#"Текст: "Превет мир""#));
    }

    #[test]
    fn test_prompt_describes_the_expected_json() {
        let prompt = build_prompt("x");
        assert!(prompt.contains(r#""corrected_text""#));
        assert!(prompt.contains(r#""has_changes""#));
        assert!(prompt.contains(r#""explanation""#));
        assert!(prompt.contains("валидный JSON"));
    }
}
