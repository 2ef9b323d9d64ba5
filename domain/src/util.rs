//! Shared utility functions.

/// Take the first `max_chars` characters of a string.
///
/// Counts Unicode scalar values rather than bytes, so multibyte text is
/// never split. Returns the whole string when it is short enough.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
