//! Core analyzer trait definition.
//!
//! An analyzer is the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filter 1 … Char Filter N → Tokenizer → Token Stream
//! ```
//!
//! [`PipelineAnalyzer`] is the configurable implementation.

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert raw text into tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer.
    fn name(&self) -> &str;
}

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;
