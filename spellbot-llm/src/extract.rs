//! Coercing free-form model replies into a JSON payload.
//!
//! Models wrap JSON in Markdown fences or surrounding prose despite
//! instructions. The cascade here is ordered, first match wins: fenced
//! block contents, whole trimmed object, first-to-last brace substring,
//! verbatim.

use std::sync::OnceLock;

use regex::Regex;

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

fn fence_re() -> &'static Regex {
    FENCE_RE.get_or_init(|| {
        Regex::new(r"(?s)```[a-zA-Z0-9]*\s*(.*?)\s*```").expect("fence regex is valid")
    })
}

/// Extracts the JSON payload from a model reply.
///
/// Returns the contents of the first fenced code block (any language tag)
/// when one is present; else the whole trimmed reply when it is a bare
/// `{...}` object; else the substring from the first `{` to the last `}`;
/// else the trimmed reply unchanged, which the caller's JSON parse will
/// reject.
pub fn extract_json(content: &str) -> &str {
    if let Some(captures) = fence_re().captures(content) {
        if let Some(inner) = captures.get(1) {
            return inner.as_str().trim();
        }
    }

    let content = content.trim();
    if content.starts_with('{') && content.ends_with('}') {
        return content;
    }

    if let (Some(start), Some(end)) = (content.find('{'), content.rfind('}')) {
        if end > start {
            return &content[start..=end];
        }
    }

    content
}
