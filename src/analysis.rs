//! Text analysis for Shabda.
//!
//! Raw document text is turned into index-eligible words by a pipeline:
//! char filters rewrite the whole text, then a tokenizer splits it and
//! assigns positions.
//!
//! ```text
//! Raw Text → NFC → lowercase → script filter → whitespace split → Tokens
//! ```
//!
//! [`normalizer::Normalizer`] assembles that pipeline from an
//! [`IndexConfig`](crate::config::IndexConfig) and is what the index uses.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use normalizer::Normalizer;
pub use token::{Token, TokenStream};
