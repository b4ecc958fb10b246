//! Text normalization helpers shared by the extraction and SEO stages.

/// Truncate `text` to at most `max_len` characters.
///
/// Returns the input unchanged when it already fits. No ellipsis is added
/// here; callers that want one append it themselves and budget three fewer
/// characters. Truncation counts characters, not bytes, and never word
/// boundaries - stored content depends on the exact cut point.
pub fn truncate(text: &str, max_len: usize) -> &str {
    match text.char_indices().nth(max_len) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}

/// Replace every newline (and carriage return) with a space and trim the
/// result. Used to flatten article bodies into single-line descriptions.
pub fn collapse_newlines(text: &str) -> String {
    text.replace(['\r', '\n'], " ").trim().to_string()
}
