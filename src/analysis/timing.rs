//! Reading and speaking time estimators.

use crate::analysis::count::count_words;

/// Default silent reading rate in words per minute.
pub const DEFAULT_READING_WPM: u32 = 225;

/// Default speaking rate in words per minute.
pub const DEFAULT_SPEAKING_WPM: u32 = 140;

/// Estimated reading time in whole minutes, rounded up.
///
/// Empty text takes `0` minutes and any non-empty text at least `1`.
/// A rate of `0` words per minute also yields `0`.
///
/// ```
/// use textlens::analysis::timing::{calculate_reading_time, DEFAULT_READING_WPM};
///
/// assert_eq!(calculate_reading_time("", DEFAULT_READING_WPM), 0);
/// assert_eq!(calculate_reading_time("one word", DEFAULT_READING_WPM), 1);
/// ```
pub fn calculate_reading_time(text: &str, words_per_minute: u32) -> usize {
    minutes_for(count_words(text), words_per_minute)
}

/// Estimated speaking time in whole minutes, rounded up.
///
/// Same shape as [`calculate_reading_time`] with the slower
/// [`DEFAULT_SPEAKING_WPM`] rate as the usual argument.
pub fn calculate_speaking_time(text: &str, words_per_minute: u32) -> usize {
    minutes_for(count_words(text), words_per_minute)
}

fn minutes_for(words: usize, words_per_minute: u32) -> usize {
    if words_per_minute == 0 {
        log::debug!("words_per_minute is 0, reporting 0 minutes");
        return 0;
    }
    words.div_ceil(words_per_minute as usize)
}
