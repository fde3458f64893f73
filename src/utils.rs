use unicode_width::UnicodeWidthChar;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Display-width column of the cursor within a single-line input, counting
/// wide characters correctly. `cursor_index` is a char index into `text`.
pub fn cursor_column(text: &str, cursor_index: usize) -> usize {
    text.chars()
        .take(cursor_index)
        .map(|c| c.width().unwrap_or(1))
        .sum()
}

/// Byte offset of the given char index, for `String::insert`/`remove`.
/// A char index past the end maps to the end of the string.
pub fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
