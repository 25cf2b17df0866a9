//! Pattern extraction: URLs, hashtags, mentions, emails and emoji.
//!
//! Extractors return the literal matched substrings in order of appearance,
//! duplicates included.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::extract::extract_urls;
//!
//! let urls = extract_urls("visit http://a.com and https://b.com");
//! assert_eq!(urls, vec!["http://a.com", "https://b.com"]);
//! ```

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'()\[\]{}]+"#).expect("valid regex"));

static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid regex"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid regex")
});

/// Code point blocks treated as emoji.
pub const EMOJI_RANGES: &[RangeInclusive<char>] = &[
    '\u{1F600}'..='\u{1F64F}', // Emoticons
    '\u{1F300}'..='\u{1F5FF}', // Miscellaneous Symbols and Pictographs
    '\u{1F680}'..='\u{1F6FF}', // Transport and Map Symbols
    '\u{1F1E0}'..='\u{1F1FF}', // Regional indicators (flags)
    '\u{2600}'..='\u{26FF}',   // Miscellaneous Symbols
    '\u{2700}'..='\u{27BF}',   // Dingbats
];

/// All `http://` and `https://` URLs in `text`.
pub fn extract_urls(text: &str) -> Vec<String> {
    find_all(&URL_PATTERN, text)
}

/// All `#hashtag` tokens in `text`, including the leading `#`.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    find_all(&HASHTAG_PATTERN, text)
}

/// All `@mention` tokens in `text`, including the leading `@`.
pub fn extract_mentions(text: &str) -> Vec<String> {
    find_all(&MENTION_PATTERN, text)
}

/// All email addresses in `text`.
pub fn extract_emails(text: &str) -> Vec<String> {
    find_all(&EMAIL_PATTERN, text)
}

/// Whether `ch` falls in one of the [`EMOJI_RANGES`].
pub fn is_emoji(ch: char) -> bool {
    EMOJI_RANGES.iter().any(|range| range.contains(&ch))
}

/// Count emoji code points in `text`.
///
/// Counting is per code point: a flag made of two regional indicators
/// counts twice.
pub fn count_emojis(text: &str) -> usize {
    text.chars().filter(|&ch| is_emoji(ch)).count()
}

/// Every pattern the extractors know about, gathered in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub urls: Vec<String>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub emails: Vec<String>,
    pub emoji_count: usize,
}

impl Extraction {
    /// Run every extractor over `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            urls: extract_urls(text),
            hashtags: extract_hashtags(text),
            mentions: extract_mentions(text),
            emails: extract_emails(text),
            emoji_count: count_emojis(text),
        }
    }
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|mat| mat.as_str().to_string())
        .collect()
}
