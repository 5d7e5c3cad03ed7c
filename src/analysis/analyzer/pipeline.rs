//! Pipeline analyzer that combines char filters and a tokenizer.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char Filters: applied to the whole text in the order they were added
//! 2. Tokenizer: splits the filtered text into positioned tokens
//!
//! # Examples
//!
//! ```
//! use shabda::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use shabda::analysis::char_filter::LowercaseCharFilter;
//! use shabda::analysis::tokenizer::WhitespaceTokenizer;
//! use std::sync::Arc;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()))
//!     .with_name("lowercase_whitespace");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello WORLD").collect();
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::Tokenizer;

/// A configurable analyzer that combines a chain of char filters with a tokenizer.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Run only the char filters, returning the text the tokenizer would see.
    pub fn filter_text(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |filtered, char_filter| {
                char_filter.filter(&filtered)
            })
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let filtered_text = self.filter_text(text);
        self.tokenizer.tokenize(&filtered_text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
