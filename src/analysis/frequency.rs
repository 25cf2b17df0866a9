//! Word and n-gram frequency analysis.
//!
//! Both analyzers tokenize with [`WordTokenizer`], so contractions and
//! hyphenated words count as one word, and fold case unless asked not to.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::frequency::ngram_frequency;
//!
//! let bigrams = ngram_frequency("a b a b", 2, false);
//! assert_eq!(bigrams["a b"], 2);
//! assert_eq!(bigrams["b a"], 1);
//! ```

use std::cmp::Ordering;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::WordTokenizer;

/// Mapping from a word or phrase to its number of occurrences.
pub type FrequencyMap = AHashMap<String, usize>;

/// A single `(term, count)` row, as shown in ranked frequency tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub term: String,
    pub count: usize,
}

/// Count how often each word occurs in `text`.
///
/// Words are lowercased unless `case_sensitive` is true.
pub fn word_frequency(text: &str, case_sensitive: bool) -> FrequencyMap {
    let mut frequency = FrequencyMap::new();
    for word in tokenize(text, case_sensitive) {
        *frequency.entry(word).or_insert(0) += 1;
    }
    frequency
}

/// Count every window of `n` consecutive words, joined by single spaces.
///
/// Overlapping windows are all counted. Returns an empty map when `n` is
/// zero or the text holds fewer than `n` words.
pub fn ngram_frequency(text: &str, n: usize, case_sensitive: bool) -> FrequencyMap {
    let mut frequency = FrequencyMap::new();
    if n < 1 {
        log::debug!("n-gram size must be at least 1, got {n}");
        return frequency;
    }

    let words = tokenize(text, case_sensitive);
    if words.len() < n {
        return frequency;
    }

    for window in words.windows(n) {
        *frequency.entry(window.join(" ")).or_insert(0) += 1;
    }
    frequency
}

/// Rank a frequency map by count (descending), breaking ties by term.
///
/// A `limit` of `0` keeps every entry.
pub fn top_entries(frequency: &FrequencyMap, limit: usize) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = frequency
        .iter()
        .map(|(term, &count)| FrequencyEntry {
            term: term.clone(),
            count,
        })
        .collect();

    entries.sort_by(compare_entries);
    if limit > 0 {
        entries.truncate(limit);
    }
    entries
}

fn compare_entries(a: &FrequencyEntry, b: &FrequencyEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term))
}

fn tokenize(text: &str, case_sensitive: bool) -> Vec<String> {
    WordTokenizer::new().lowercase(!case_sensitive).words(text)
}
