//! Stop word table and filter.
//!
//! Stop words are high-frequency, low-information words (articles,
//! prepositions, pronouns, auxiliary verbs) that are usually excluded from
//! keyword and frequency analysis.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::stop::remove_stop_words;
//!
//! assert_eq!(remove_stop_words("The Quick Fox"), "quick fox");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "been", "before", "being", "but", "by", "can", "did", "do", "does", "for", "from",
    "had", "has", "have", "he", "her", "here", "him", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "me", "my", "no", "not", "of", "on", "or", "our", "she", "so", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "to", "was", "we", "were",
    "what", "when", "where", "which", "who", "why", "will", "with", "you", "your",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Check whether `word` is in the default English stop word set.
///
/// The check is exact: callers pass lowercase words.
pub fn is_stop_word(word: &str) -> bool {
    DEFAULT_ENGLISH_STOP_WORDS_SET.contains(word)
}

/// Remove stop words from `text`.
///
/// The whole text is lowercased first, split on whitespace, stripped of
/// stop words and rejoined with single spaces. Lowercasing happens
/// unconditionally, so the result never preserves the input's case.
pub fn remove_stop_words(text: &str) -> String {
    let lowered = text.to_lowercase();
    let filter = StopFilter::new();
    filter
        .filter(WhitespaceTokenizer::new().tokenize(&lowered))
        .map(|token| token.text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A filter that removes stop words from a token stream.
///
/// Tokens are matched exactly against the stop word set; run a lowercasing
/// tokenizer first for case-insensitive filtering.
///
/// ```
/// use textlens::analysis::stop::StopFilter;
/// use textlens::analysis::tokenizer::{Tokenizer, WordTokenizer};
///
/// let tokens = WordTokenizer::new().lowercase(true).tokenize("This is a test");
/// let kept: Vec<_> = StopFilter::new().filter(tokens).map(|t| t.text).collect();
/// assert_eq!(kept, vec!["test"]);
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Drop every token whose text is a stop word.
    pub fn filter(&self, tokens: TokenStream) -> TokenStream {
        let stop_words = Arc::clone(&self.stop_words);
        Box::new(tokens.filter(move |token| !stop_words.contains(&token.text)))
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}
