use regex::Regex;

use super::CharFilter;
use crate::error::Result;

/// A char filter that replaces every match of a regex pattern.
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes every character outside `start..=end`
    /// except whitespace.
    pub fn retain_script(start: char, end: char) -> Result<Self> {
        let pattern = format!(r"[^\x{{{:04X}}}-\x{{{:04X}}}\s]", start as u32, end as u32);
        Self::new(&pattern, "")
    }

    /// The pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
