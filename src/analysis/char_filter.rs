//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the whole text before it reaches the tokenizer, so
//! anything they remove never acts as a separator: `"रा1म"` becomes `"राम"`,
//! not `"रा म"`.
//!
//! # Available Filters
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercase mapping
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use shabda::analysis::char_filter::CharFilter;
//! use shabda::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d", "").unwrap();
//! assert_eq!(filter.filter("रा1म"), "राम");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod unicode_normalize;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use unicode_normalize::{NormalizationForm, UnicodeNormalizationCharFilter};
