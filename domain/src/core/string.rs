//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters, appending `...` when cut
///
/// Trailing whitespace before the ellipsis is dropped, so
/// `"Vaccines are safe and effective"` at 20 becomes `"Vaccines are safe and..."`
/// rather than leaving a dangling space.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", s[..end].trim_end()),
    }
}

/// The first `max_chars` characters of a string, cut without a marker
pub fn prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((end, _)) => &s[..end],
    }
}

/// Count characters (not bytes) in a string
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("hello world", 6), "hello...");
    }

    #[test]
    fn test_truncate_exact_length_is_untouched() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("日本語テスト", 30), "日本語テスト");
        assert_eq!(truncate("日本語テスト文字列", 4), "日本語テ...");
        assert_eq!(truncate("👋🌍🎉", 2), "👋🌍...");
    }

    #[test]
    fn test_prefix_cuts_on_char_boundary() {
        assert_eq!(prefix("hello world", 5), "hello");
        assert_eq!(prefix("hello", 10), "hello");
        assert_eq!(prefix("日本語テスト", 2), "日本");
    }

    #[test]
    fn test_char_len() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("日本語"), 3);
    }
}
