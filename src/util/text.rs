use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to truncated card text.
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Terminal column width of `s` (CJK and emoji count as two columns).
///
/// ```
/// use magstand::util::display_width;
///
/// assert_eq!(display_width("Aldi"), 4);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Byte index of the longest prefix of `s` that fits in `width` columns.
fn fitting_prefix(s: &str, width: usize) -> usize {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        used += UnicodeWidthChar::width(c).unwrap_or(0);
        if used > width {
            return idx;
        }
    }
    s.len()
}

/// Shorten `s` to at most `max_width` columns, marking the cut with "...".
///
/// Widths of three columns or less have no room for the ellipsis, so the
/// result is just the prefix that fits. Text that already fits is borrowed.
///
/// ```
/// use magstand::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Air fryers tested", 20), "Air fryers tested");
/// assert_eq!(truncate_to_width("Air fryers tested", 10), "Air fry...");
/// assert_eq!(truncate_to_width("Air", 2), "Ai");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width <= ELLIPSIS_WIDTH {
        return Cow::Borrowed(&s[..fitting_prefix(s, max_width)]);
    }
    let cut = fitting_prefix(s, max_width - ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS))
}

/// First character upper case, the rest lower case.
///
/// ```
/// use magstand::util::sentence_case;
///
/// assert_eq!(sentence_case("HOW WE COMPARED PRICES"), "How we compared prices");
/// ```
pub fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Remove terminal control characters and escape sequences from fixture text.
///
/// Fixture directories are user supplied, so a string like
/// `"\x1b]0;title\x07"` must not reach the terminal. Tabs and newlines are
/// kept. Clean input is borrowed.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    fn is_unsafe(c: char) -> bool {
        c.is_control() && c != '\n' && c != '\t'
    }

    if !s.chars().any(is_unsafe) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            if !is_unsafe(c) {
                out.push(c);
            }
            continue;
        }
        match chars.peek() {
            // CSI: parameters up to a final byte in '@'..='~'
            Some('[') => {
                chars.next();
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            // OSC: up to BEL or ESC '\'
            Some(']') => {
                chars.next();
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits_is_borrowed() {
        let result = truncate_to_width("Passkeys", 8);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Passkeys");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Smart Home Hubs", 8), "Smart...");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each character is two columns
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本...");
        assert_eq!(truncate_to_width("日本語", 3), "日");
    }

    #[test]
    fn test_truncate_narrow_widths() {
        assert_eq!(truncate_to_width("Saved", 0), "");
        assert_eq!(truncate_to_width("Saved", 1), "S");
        assert_eq!(truncate_to_width("Saved", 3), "Sav");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("key information"), "Key information");
        assert_eq!(sentence_case("DATA Table"), "Data table");
        assert_eq!(sentence_case(""), "");
        assert_eq!(sentence_case("é"), "É");
    }

    #[test]
    fn test_strip_clean_text_is_borrowed() {
        let input = "Line one\nLine\ttwo";
        assert!(matches!(strip_control_chars(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_csi_and_controls() {
        assert_eq!(strip_control_chars("\x1b[31mRed\x1b[0m\x00!"), "Red!");
        assert_eq!(strip_control_chars("a\rb\x7fc"), "abc");
    }

    #[test]
    fn test_strip_osc_sequences() {
        assert_eq!(strip_control_chars("\x1b]0;title\x07safe"), "safe");
        assert_eq!(strip_control_chars("\x1b]0;title\x1b\\safe"), "safe");
        assert_eq!(strip_control_chars("bare\x1bescape"), "bareescape");
    }
}
