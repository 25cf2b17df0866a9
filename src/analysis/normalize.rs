//! Whitespace normalization.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static LINE_ENDINGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("valid regex"));

static HORIZONTAL_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

static TRAILING_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("valid regex"));

static LEADING_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]+").expect("valid regex"));

static BLANK_LINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Canonicalize line endings and collapse redundant whitespace.
///
/// Steps, in order:
///
/// 1. `\r\n` and bare `\r` become `\n`
/// 2. runs of spaces and tabs become a single space
/// 3. spaces before a newline are dropped
/// 4. spaces after a newline are dropped
/// 5. three or more consecutive newlines become exactly two
/// 6. leading and trailing whitespace is trimmed
///
/// The result is a fixed point: normalizing it again changes nothing.
///
/// ```
/// use textlens::analysis::normalize::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("a   b\n\n\n\nc"), "a b\n\nc");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    let text = LINE_ENDINGS.replace_all(text, "\n");
    let text = replace(&HORIZONTAL_RUNS, text, " ");
    let text = replace(&TRAILING_SPACES, text, "\n");
    let text = replace(&LEADING_SPACES, text, "\n");
    let text = replace(&BLANK_LINE_RUNS, text, "\n\n");
    text.trim().to_string()
}

fn replace<'a>(pattern: &Regex, text: Cow<'a, str>, replacement: &str) -> Cow<'a, str> {
    if pattern.is_match(&text) {
        Cow::Owned(pattern.replace_all(&text, replacement).into_owned())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces_and_blank_lines() {
        assert_eq!(normalize_whitespace("a   b\n\n\n\nc"), "a b\n\nc");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(normalize_whitespace("a\r\nb\rc\n"), "a\nb\nc");
        assert_eq!(normalize_whitespace("a\r\n\r\n\r\n\r\nb"), "a\n\nb");
        assert_eq!(normalize_whitespace("a\r\rb"), "a\n\nb");
    }

    #[test]
    fn test_tabs_and_edges_of_lines() {
        assert_eq!(normalize_whitespace("a\t\t b \t\n\t  c"), "a b\nc");
        assert_eq!(normalize_whitespace("line  \n   next"), "line\nnext");
    }

    #[test]
    fn test_blank_line_with_spaces() {
        // Spaces on an otherwise blank line are stripped before blank-line collapsing.
        assert_eq!(normalize_whitespace("a\n  \n \t \n\nb"), "a\n\nb");
    }

    #[test]
    fn test_trim() {
        assert_eq!(normalize_whitespace("\n\n  hello  \n\n"), "hello");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \t\r\n "), "");
    }

    #[test]
    fn test_two_newlines_are_kept() {
        assert_eq!(normalize_whitespace("a\n\nb"), "a\n\nb");
        assert_eq!(normalize_whitespace("a\nb"), "a\nb");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "   ",
            "a   b\n\n\n\nc",
            " \t mixed \r\n\r\n\r\n tabs\tand  spaces \n",
            "a \n \n \n b",
            "x\r\r\r\ry",
            "\u{00A0}lead\n\u{00A0}\n\n\nend\u{00A0}",
            "one\n \n\t\n  \ntwo  \t three",
        ];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once, "input: {input:?}");
        }
    }
}
