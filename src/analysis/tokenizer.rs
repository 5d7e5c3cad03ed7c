//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split filtered text into tokens and assign each one its
//! zero-based position.
//!
//! # Examples
//!
//! ```
//! use shabda::analysis::tokenizer::Tokenizer;
//! use shabda::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("राम  सीता").collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].position, 1);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so an analyzer can be shared by the
/// parallel ingestion path.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
