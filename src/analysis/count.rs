//! Counting primitives: words, sentences, paragraphs, lines and characters.
//!
//! All counters accept any string and never fail. Empty or whitespace-only
//! input gives `0`, with the single exception of [`count_lines`].

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// One or more sentence terminators followed by optional whitespace.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s*").expect("sentence pattern is valid"));

/// A blank line separating two paragraphs.
static PARAGRAPH_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

/// Count maximal runs of non-whitespace characters.
///
/// ```
/// use textlens::analysis::count::count_words;
///
/// assert_eq!(count_words(""), 0);
/// assert_eq!(count_words("  "), 0);
/// assert_eq!(count_words("a b  c"), 3);
/// ```
pub fn count_words(text: &str) -> usize {
    WhitespaceTokenizer::new().tokenize(text).count()
}

/// Count sentences delimited by `.`, `!` or `?`.
///
/// A trailing fragment without terminal punctuation still counts as a
/// sentence. Fragments holding only whitespace are discarded.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_BOUNDARY
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Count paragraphs separated by one or more blank lines.
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_BOUNDARY
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Count lines by splitting on `\n`.
///
/// Nothing is filtered, so the empty string is one (empty) line and a
/// trailing newline opens a new, empty last line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Count Unicode scalar values, optionally skipping whitespace.
pub fn count_characters(text: &str, include_whitespace: bool) -> usize {
    if include_whitespace {
        text.chars().count()
    } else {
        text.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// Count user-perceived characters (extended grapheme clusters).
///
/// A flag, an emoji with a skin-tone modifier or a letter with combining
/// marks each count once.
pub fn count_graphemes(text: &str) -> usize {
    text.graphemes(true).count()
}
