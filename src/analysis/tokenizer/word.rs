//! Word tokenizer implementation.
//!
//! Words are runs of Unicode word characters that may also contain
//! apostrophes and hyphens, so contractions ("don't") and hyphenated
//! compounds ("state-of-the-art") each count as a single token.

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};

/// Pattern matching a single word token.
pub const WORD_PATTERN: &str = r"[\w'-]+";

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("word pattern is valid"));

/// A tokenizer that extracts words, optionally folding them to lowercase.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer {
    lowercase: bool,
}

impl WordTokenizer {
    /// Create a case-preserving word tokenizer.
    pub fn new() -> Self {
        WordTokenizer { lowercase: false }
    }

    /// Set whether tokens are folded to lowercase.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Tokenize and keep only the token texts.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.tokenize(text).map(|token| token.text).collect()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let lowercase = self.lowercase;
        let tokens: Vec<Token> = WORD_REGEX
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                let token = Token::with_offsets(mat.as_str(), position, mat.start(), mat.end());
                if lowercase {
                    let folded = token.text.to_lowercase();
                    token.with_text(folded)
                } else {
                    token
                }
            })
            .collect();

        Box::new(tokens.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Hello, world!").collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 12);
    }

    #[test]
    fn test_word_tokenizer_contractions_and_hyphens() {
        let words = WordTokenizer::new().words("Don't stop state-of-the-art work");
        assert_eq!(words, vec!["Don't", "stop", "state-of-the-art", "work"]);
    }

    #[test]
    fn test_word_tokenizer_lowercase() {
        let words = WordTokenizer::new().lowercase(true).words("The QUICK Fox");
        assert_eq!(words, vec!["the", "quick", "fox"]);
    }

    #[test]
    fn test_word_tokenizer_unicode_letters() {
        let words = WordTokenizer::new().words("café résumé naïve");
        assert_eq!(words, vec!["café", "résumé", "naïve"]);
    }

    #[test]
    fn test_word_tokenizer_empty() {
        assert!(WordTokenizer::new().words("").is_empty());
        assert!(WordTokenizer::new().words("... !!! ???").is_empty());
    }
}
