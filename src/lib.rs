//! # textlens
//!
//! Plain-text analysis utilities, as used by word counters, keyword density
//! and SEO checkers, and diff tools.
//!
//! ## Features
//!
//! - Word, sentence, paragraph, line and character counts
//! - Reading and speaking time estimates
//! - Word and n-gram frequency tables
//! - Keyword density for single words and phrases
//! - URL, hashtag, mention, email and emoji extraction
//! - Whitespace normalization
//! - Levenshtein-based string similarity
//! - English stop word filtering
//!
//! ## Example
//!
//! ```
//! use textlens::analysis::{calculate_similarity, count_words, word_frequency};
//!
//! assert_eq!(count_words("a b  c"), 3);
//! assert_eq!(word_frequency("The the THE", false)["the"], 3);
//! assert_eq!(calculate_similarity("kitten", "sitting"), 57);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
