//! Text analysis functions.
//!
//! Every function here is pure: it takes the input text (and sometimes a
//! second string or a numeric parameter), returns a plain value, and keeps
//! no state between calls, so any number of threads can call them at once.
//! Degenerate input such as an empty string, an empty keyword or an n-gram
//! size of zero yields a zero or empty result instead of an error.

pub mod count;
pub mod extract;
pub mod frequency;
pub mod keyword;
pub mod normalize;
pub mod similarity;
pub mod stats;
pub mod stop;
pub mod timing;
pub mod token;
pub mod tokenizer;

pub use count::{
    count_characters, count_graphemes, count_lines, count_paragraphs, count_sentences,
    count_words,
};
pub use extract::{
    count_emojis, extract_emails, extract_hashtags, extract_mentions, extract_urls, is_emoji,
};
pub use frequency::{FrequencyEntry, FrequencyMap, ngram_frequency, top_entries, word_frequency};
pub use keyword::{
    KeywordOptions, KeywordReport, KeywordStat, calculate_keyword_density, escape_keyword,
    keyword_report,
};
pub use normalize::normalize_whitespace;
pub use similarity::{SimilarityReport, calculate_similarity};
pub use stats::TextStats;
pub use stop::{StopFilter, is_stop_word, remove_stop_words};
pub use timing::{
    DEFAULT_READING_WPM, DEFAULT_SPEAKING_WPM, calculate_reading_time, calculate_speaking_time,
};
