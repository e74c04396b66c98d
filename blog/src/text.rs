//! Plain-text helpers for excerpts.

use crate::sanitize::Fragment;

/// Excerpt length used by list entries.
pub const EXCERPT_CHARS: usize = 150;

const NON_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template", "title"];

/// Text content of `html` with whitespace collapsed to single spaces.
pub fn plain_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    collapse_whitespace(&Fragment::parse(html).text_without(NON_TEXT_TAGS))
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clip to `max_chars` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{}...", clipped.trim())
}

/// Text of the first non-empty paragraph.
pub fn first_paragraph_text(html: &str) -> Option<String> {
    let fragment = Fragment::parse(html);
    fragment
        .find(&|e| e.is("p") && !collapse_whitespace(&e.text()).is_empty())
        .map(|p| collapse_whitespace(&p.text()))
}
