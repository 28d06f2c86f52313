//! camelCase to hyphen-case conversion
//!
//! An ASCII upper-case letter gets a hyphen in front of it when it sits
//! inside a word, i.e. when the previous character is a word character
//! (`[A-Za-z0-9_]`). The result is lower-cased as a whole afterwards.

use crate::constants::HYPHEN;

/// Convert a camelCase identifier to hyphen-case
///
/// The first character never receives a hyphen, and neither does a letter
/// that follows a non-word character such as a space or `-`.
///
/// ```
/// use reactive_shared::hyphenate;
///
/// assert_eq!(hyphenate("fooBar"), "foo-bar");
/// assert_eq!(hyphenate("fooBAR"), "foo-b-a-r");
/// assert_eq!(hyphenate("FooBar"), "foo-bar");
/// ```
pub fn hyphenate(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    let mut prev_is_word = false;

    for ch in input.chars() {
        if prev_is_word && ch.is_ascii_uppercase() {
            out.push(HYPHEN);
        }
        out.push(ch);
        prev_is_word = is_word_char(ch);
    }

    // Whole-string lowering keeps context-sensitive mappings (final sigma)
    out.to_lowercase()
}

/// ASCII word character (`[A-Za-z0-9_]`)
#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenate_empty() {
        assert_eq!(hyphenate(""), "");
    }

    #[test]
    fn test_hyphenate_camel_case() {
        assert_eq!(hyphenate("fooBar"), "foo-bar");
        assert_eq!(hyphenate("backgroundColor"), "background-color");
        assert_eq!(hyphenate("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_hyphenate_leading_upper_not_hyphenated() {
        assert_eq!(hyphenate("F"), "f");
        assert_eq!(hyphenate("FooBar"), "foo-bar");
    }

    #[test]
    fn test_hyphenate_consecutive_upper() {
        assert_eq!(hyphenate("fooBAR"), "foo-b-a-r");
        assert_eq!(hyphenate("ABC"), "a-b-c");
    }

    #[test]
    fn test_hyphenate_after_non_word_char() {
        assert_eq!(hyphenate("foo-Bar"), "foo-bar");
        assert_eq!(hyphenate("foo Bar"), "foo bar");
        assert_eq!(hyphenate("foo.Bar"), "foo.bar");
        assert_eq!(hyphenate("-Foo"), "-foo");
    }

    #[test]
    fn test_hyphenate_after_digit_and_underscore() {
        assert_eq!(hyphenate("h1Title"), "h1-title");
        assert_eq!(hyphenate("foo_Bar"), "foo_-bar");
    }

    #[test]
    fn test_hyphenate_lowercase_unchanged() {
        for s in ["foo", "foo-bar", "a b c", "x_1", "ünïcode"] {
            assert_eq!(hyphenate(s), s);
        }
    }

    #[test]
    fn test_hyphenate_non_ascii_upper() {
        // Non-ASCII capitals are lowered but never split off
        assert_eq!(hyphenate("fooÉtat"), "fooétat");
        // A non-ASCII letter is not a word character for the boundary rule
        assert_eq!(hyphenate("éBar"), "ébar");
    }

    #[test]
    fn test_is_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('é'));
    }
}
