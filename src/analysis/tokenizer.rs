//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Maximal runs of non-whitespace characters
//! - [`word::WordTokenizer`] - Words with internal apostrophes and hyphens (`[\w'-]+`)
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::tokenizer::Tokenizer;
//! use textlens::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared across
/// threads analysing different inputs.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;
}

pub mod whitespace;
pub mod word;

pub use whitespace::WhitespaceTokenizer;
pub use word::WordTokenizer;
