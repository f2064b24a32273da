/// Marker appended to truncated snippet text
pub const ELLIPSIS: &str = "...";

/// Length of a string in characters rather than bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `max_chars` characters of a string, never splitting a code point
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate to `keep` characters and append the ellipsis marker
pub fn truncate_with_ellipsis(s: &str, keep: usize) -> String {
    format!("{}{}", take_chars(s, keep), ELLIPSIS)
}
