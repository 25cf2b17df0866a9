//! String similarity based on Levenshtein edit distance.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::similarity::calculate_similarity;
//!
//! assert_eq!(calculate_similarity("kitten", "sitting"), 57);
//! assert_eq!(calculate_similarity("", ""), 100);
//! assert_eq!(calculate_similarity("", "abc"), 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::util::levenshtein::levenshtein_distance;

/// Similarity of two strings as a whole percentage in `[0, 100]`.
///
/// Identical strings (including two empty strings) score `100`; an empty
/// string against a non-empty one scores `0`. Otherwise the score is
/// `round((1 - distance / max_len) × 100)`, where lengths count Unicode
/// scalar values.
pub fn calculate_similarity(str1: &str, str2: &str) -> u32 {
    if str1 == str2 {
        return 100;
    }
    if str1.is_empty() || str2.is_empty() {
        return 0;
    }

    let distance = levenshtein_distance(str1, str2);
    score(distance, max_len(str1, str2))
}

fn max_len(str1: &str, str2: &str) -> usize {
    str1.chars().count().max(str2.chars().count())
}

fn score(distance: usize, max_len: usize) -> u32 {
    if max_len == 0 {
        return 100;
    }
    ((1.0 - distance as f64 / max_len as f64) * 100.0).round() as u32
}

/// Edit distance and similarity of a pair of texts, as shown by a diff checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub similarity: u32,
    pub distance: usize,
    pub length_a: usize,
    pub length_b: usize,
}

impl SimilarityReport {
    /// Compare two texts.
    pub fn compare(a: &str, b: &str) -> Self {
        let distance = levenshtein_distance(a, b);
        let length_a = a.chars().count();
        let length_b = b.chars().count();

        let similarity = if a == b {
            100
        } else if a.is_empty() || b.is_empty() {
            0
        } else {
            score(distance, length_a.max(length_b))
        };

        Self {
            similarity,
            distance,
            length_a,
            length_b,
        }
    }
}
