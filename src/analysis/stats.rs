//! Aggregate text statistics.
//!
//! [`TextStats`] bundles every counter and both timing estimates into one
//! serializable record, as shown by a word or character counter.

use serde::{Deserialize, Serialize};

use crate::analysis::count::{
    count_characters, count_graphemes, count_lines, count_paragraphs, count_sentences,
    count_words,
};
use crate::analysis::timing::{
    DEFAULT_READING_WPM, DEFAULT_SPEAKING_WPM, calculate_reading_time, calculate_speaking_time,
};

/// Text statistics for a document.
///
/// # Example
///
/// ```
/// use textlens::analysis::stats::TextStats;
///
/// let stats = TextStats::from_text("Hello, World!\n\nNew paragraph.");
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.paragraphs, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of words (runs of non-whitespace characters)
    pub words: usize,
    /// Number of characters including whitespace
    pub characters: usize,
    /// Number of characters excluding whitespace
    pub characters_no_spaces: usize,
    /// Number of user-perceived characters
    pub graphemes: usize,
    /// Number of sentences
    pub sentences: usize,
    /// Number of paragraphs (non-empty blocks separated by blank lines)
    pub paragraphs: usize,
    /// Number of lines (including empty lines)
    pub lines: usize,
    /// Estimated reading time in minutes
    pub reading_minutes: usize,
    /// Estimated speaking time in minutes
    pub speaking_minutes: usize,
}

impl TextStats {
    /// Calculate statistics at the default reading and speaking rates.
    pub fn from_text(text: &str) -> Self {
        Self::with_rates(text, DEFAULT_READING_WPM, DEFAULT_SPEAKING_WPM)
    }

    /// Calculate statistics at custom reading and speaking rates.
    pub fn with_rates(text: &str, reading_wpm: u32, speaking_wpm: u32) -> Self {
        Self {
            words: count_words(text),
            characters: count_characters(text, true),
            characters_no_spaces: count_characters(text, false),
            graphemes: count_graphemes(text),
            sentences: count_sentences(text),
            paragraphs: count_paragraphs(text),
            lines: count_lines(text),
            reading_minutes: calculate_reading_time(text, reading_wpm),
            speaking_minutes: calculate_speaking_time(text, speaking_wpm),
        }
    }
}
