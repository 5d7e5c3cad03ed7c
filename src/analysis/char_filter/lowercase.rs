//! Lowercase char filter.
//!
//! Devanagari has no case, so this is a no-op for the default script. It is
//! kept in the pipeline so mixed input folds the same way whichever script
//! range is configured.

use super::CharFilter;

/// A char filter that applies the Unicode lowercase mapping to the whole text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
