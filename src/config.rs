//! Configuration for text analysis.
//!
//! An [`AnalysisConfig`] gathers the tunable parameters of the analysis
//! functions. It can be loaded from a JSON file, where any missing field
//! falls back to its default:
//!
//! ```json
//! { "reading_wpm": 250, "ngram_size": 2 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::keyword::KeywordOptions;
use crate::analysis::timing::{DEFAULT_READING_WPM, DEFAULT_SPEAKING_WPM};
use crate::error::{Result, TextLensError};

/// Parameters shared by the analysis commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Silent reading rate in words per minute.
    pub reading_wpm: u32,
    /// Speaking rate in words per minute.
    pub speaking_wpm: u32,
    /// Keep case distinctions in frequency counts.
    pub case_sensitive: bool,
    /// Words per phrase for n-gram and keyword tables.
    pub ngram_size: usize,
    /// Keep stop words in keyword tables.
    pub include_stop_words: bool,
    /// Shortest word, in characters, kept in keyword tables.
    pub min_word_length: usize,
    /// Rows shown in ranked tables; `0` shows all of them.
    pub top: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reading_wpm: DEFAULT_READING_WPM,
            speaking_wpm: DEFAULT_SPEAKING_WPM,
            case_sensitive: false,
            ngram_size: 1,
            include_stop_words: false,
            min_word_length: 1,
            top: 10,
        }
    }
}

impl AnalysisConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TextLensError::config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config: AnalysisConfig = serde_json::from_str(&content).map_err(|e| {
            TextLensError::config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject values the analysis functions cannot use meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.reading_wpm == 0 {
            return Err(TextLensError::config("reading_wpm must be greater than 0"));
        }
        if self.speaking_wpm == 0 {
            return Err(TextLensError::config("speaking_wpm must be greater than 0"));
        }
        if self.ngram_size == 0 {
            return Err(TextLensError::config("ngram_size must be greater than 0"));
        }
        Ok(())
    }

    /// Keyword table options derived from this configuration.
    pub fn keyword_options(&self) -> KeywordOptions {
        KeywordOptions {
            ngram_size: self.ngram_size,
            include_stop_words: self.include_stop_words,
            min_word_length: self.min_word_length,
            limit: self.top,
        }
    }
}
