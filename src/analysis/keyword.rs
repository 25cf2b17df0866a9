//! Keyword density.
//!
//! Density is the share of a text's words taken up by a keyword or phrase:
//!
//! ```text
//! density = occurrences × words_in_keyword / total_words × 100
//! ```
//!
//! A multi-word phrase contributes one word per token it spans, so the
//! result is not clamped: a short text made only of a repeated three-word
//! phrase can exceed 100.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::count::count_words;
use crate::analysis::frequency::{self, FrequencyMap};
use crate::analysis::stop::is_stop_word;
use crate::error::{Result, TextLensError};

/// Escape every regex metacharacter in a user-supplied keyword.
///
/// ```
/// use textlens::analysis::keyword::escape_keyword;
///
/// assert_eq!(escape_keyword("c++"), r"c\+\+");
/// ```
pub fn escape_keyword(keyword: &str) -> String {
    regex::escape(keyword)
}

/// Build the case-insensitive, word-boundary anchored pattern for `keyword`.
pub fn keyword_regex(keyword: &str) -> Result<Regex> {
    let pattern = format!(r"\b{}\b", escape_keyword(keyword));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| TextLensError::invalid_argument(format!("Invalid keyword pattern: {e}")))
}

/// Count whole-word, case-insensitive occurrences of `keyword` in `text`.
///
/// Matches do not overlap. An empty keyword never matches.
pub fn count_keyword_occurrences(text: &str, keyword: &str) -> usize {
    let keyword = keyword.trim();
    if keyword.is_empty() || text.is_empty() {
        return 0;
    }

    match keyword_regex(keyword) {
        Ok(regex) => regex.find_iter(text).count(),
        Err(e) => {
            log::warn!("{e}");
            0
        }
    }
}

/// Percentage of the words in `text` accounted for by `keyword`.
///
/// Returns `0.0` for empty text or an empty keyword.
///
/// ```
/// use textlens::analysis::keyword::calculate_keyword_density;
///
/// assert_eq!(calculate_keyword_density("seo seo seo", "seo"), 100.0);
/// assert_eq!(calculate_keyword_density("", "x"), 0.0);
/// ```
pub fn calculate_keyword_density(text: &str, keyword: &str) -> f64 {
    let total_words = count_words(text);
    let keyword = keyword.trim();
    if total_words == 0 || keyword.is_empty() {
        return 0.0;
    }

    let occurrences = count_keyword_occurrences(text, keyword);
    density(occurrences, count_words(keyword), total_words)
}

fn density(occurrences: usize, keyword_words: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    (occurrences * keyword_words) as f64 / total_words as f64 * 100.0
}

/// Options for [`keyword_report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordOptions {
    /// Number of words per keyword phrase.
    pub ngram_size: usize,
    /// Keep phrases that contain stop words.
    pub include_stop_words: bool,
    /// Minimum length, in characters, of a single-word keyword. Phrases
    /// (`ngram_size > 1`) are not filtered by length.
    pub min_word_length: usize,
    /// Maximum number of rows; `0` keeps all of them.
    pub limit: usize,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            ngram_size: 1,
            include_stop_words: false,
            min_word_length: 1,
            limit: 0,
        }
    }
}

/// One row of a keyword density table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStat {
    pub keyword: String,
    pub count: usize,
    pub density: f64,
}

/// Keyword density table for a whole text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub total_words: usize,
    pub ngram_size: usize,
    pub keywords: Vec<KeywordStat>,
}

/// Rank every word (or phrase) of `text` by density.
///
/// Phrases are counted case-insensitively. Rows are ordered by count, then
/// alphabetically.
pub fn keyword_report(text: &str, options: &KeywordOptions) -> KeywordReport {
    let total_words = count_words(text);
    let n = options.ngram_size;

    let mut counts = frequency::ngram_frequency(text, n, false);
    counts.retain(|phrase, _| keeps_phrase(phrase, options));

    let keywords = ranked(&counts, options.limit)
        .into_iter()
        .map(|(keyword, count)| KeywordStat {
            density: density(count, n, total_words),
            keyword,
            count,
        })
        .collect();

    KeywordReport {
        total_words,
        ngram_size: n,
        keywords,
    }
}

fn keeps_phrase(phrase: &str, options: &KeywordOptions) -> bool {
    if options.ngram_size == 1 && phrase.chars().count() < options.min_word_length {
        return false;
    }
    options.include_stop_words || !phrase.split(' ').any(is_stop_word)
}

fn ranked(counts: &FrequencyMap, limit: usize) -> Vec<(String, usize)> {
    frequency::top_entries(counts, limit)
        .into_iter()
        .map(|entry| (entry.term, entry.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_density_degenerate() {
        assert_eq!(calculate_keyword_density("", "x"), 0.0);
        assert_eq!(calculate_keyword_density("a b c", ""), 0.0);
        assert_eq!(calculate_keyword_density("a b c", "   "), 0.0);
        assert_eq!(calculate_keyword_density("   ", "a"), 0.0);
    }

    #[test]
    fn test_density_single_word() {
        assert_eq!(calculate_keyword_density("seo seo seo", "seo"), 100.0);
        assert!(approx(
            calculate_keyword_density("Rust is fast and rust is safe", "rust"),
            2.0 / 7.0 * 100.0
        ));
    }

    #[test]
    fn test_density_whole_words_only() {
        assert!(approx(
            calculate_keyword_density("cats category cat", "cat"),
            100.0 / 3.0
        ));
        assert_eq!(calculate_keyword_density("concatenate", "cat"), 0.0);
    }

    #[test]
    fn test_density_phrase_weighting() {
        // 2 matches × 2 words / 6 words
        let text = "new york is in new york";
        assert!(approx(calculate_keyword_density(text, "New York"), 4.0 / 6.0 * 100.0));
    }

    #[test]
    fn test_density_can_exceed_hundred() {
        // "a b" matches twice in four words: 2 × 2 / 4
        assert_eq!(calculate_keyword_density("a b a b", "a b"), 100.0);
        // Overlapping candidates are not double counted.
        assert!(approx(calculate_keyword_density("go go go go", "go go go"), 75.0));
        // Matches inside a hyphenated run exceed its single whitespace word.
        assert_eq!(calculate_keyword_density("x-y-x-y", "x"), 200.0);
    }

    #[test]
    fn test_density_escapes_metacharacters() {
        // Without escaping, "a.c" would match "abc".
        assert_eq!(calculate_keyword_density("abc abc", "a.c"), 0.0);
        assert_eq!(calculate_keyword_density("a.c abc", "a.c"), 50.0);
        // Unbalanced metacharacters must not break pattern construction.
        assert_eq!(calculate_keyword_density("what (is this", "(is"), 0.0);
        assert_eq!(count_keyword_occurrences("[x] y", "[x"), 0);
    }

    #[test]
    fn test_escape_keyword() {
        assert_eq!(escape_keyword("a.b*c"), r"a\.b\*c");
        assert_eq!(escape_keyword("(x)"), r"\(x\)");
        assert_eq!(escape_keyword("plain"), "plain");
    }

    #[test]
    fn test_count_keyword_occurrences_case_insensitive() {
        assert_eq!(count_keyword_occurrences("SEO seo Seo", "seo"), 3);
        assert_eq!(count_keyword_occurrences("seo", ""), 0);
    }

    #[test]
    fn test_keyword_report_defaults() {
        let report = keyword_report("The cat and the dog. The cat!", &KeywordOptions::default());
        assert_eq!(report.total_words, 7);
        assert_eq!(report.ngram_size, 1);

        let keywords: Vec<&str> = report.keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["cat", "dog"]);
        assert_eq!(report.keywords[0].count, 2);
        assert!(approx(report.keywords[0].density, 2.0 / 7.0 * 100.0));
    }

    #[test]
    fn test_keyword_report_with_stop_words() {
        let options = KeywordOptions {
            include_stop_words: true,
            ..KeywordOptions::default()
        };
        let report = keyword_report("The cat and the dog. The cat!", &options);
        assert_eq!(report.keywords[0].keyword, "the");
        assert_eq!(report.keywords[0].count, 3);
    }

    #[test]
    fn test_keyword_report_phrases() {
        let options = KeywordOptions {
            ngram_size: 2,
            limit: 1,
            ..KeywordOptions::default()
        };
        let report = keyword_report("machine learning and machine learning models", &options);
        assert_eq!(report.keywords.len(), 1);
        assert_eq!(report.keywords[0].keyword, "machine learning");
        assert_eq!(report.keywords[0].count, 2);
        assert!(approx(report.keywords[0].density, 4.0 / 6.0 * 100.0));
    }

    #[test]
    fn test_keyword_report_min_word_length() {
        let options = KeywordOptions {
            min_word_length: 3,
            ..KeywordOptions::default()
        };
        let report = keyword_report("go go rust", &options);
        assert_eq!(report.keywords.len(), 1);
        assert_eq!(report.keywords[0].keyword, "rust");
    }

    #[test]
    fn test_keyword_report_min_word_length_ignores_phrases() {
        let options = KeywordOptions {
            ngram_size: 2,
            min_word_length: 3,
            ..KeywordOptions::default()
        };
        let report = keyword_report("go rust go rust", &options);
        let keywords: Vec<&str> = report.keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["go rust", "rust go"]);
        assert_eq!(report.keywords[0].count, 2);
    }

    #[test]
    fn test_keyword_report_empty() {
        let report = keyword_report("", &KeywordOptions::default());
        assert_eq!(report.total_words, 0);
        assert!(report.keywords.is_empty());

        let options = KeywordOptions {
            ngram_size: 0,
            ..KeywordOptions::default()
        };
        assert!(keyword_report("some text", &options).keywords.is_empty());
    }
}
