//! Configuration for building an index.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::NormalizationForm;
use crate::error::{Result, ShabdaError};

/// An inclusive range of code points that index-eligible words are made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRange {
    /// First code point of the range.
    pub start: char,
    /// Last code point of the range (inclusive).
    pub end: char,
}

impl ScriptRange {
    /// The Devanagari block, U+0900..=U+097F.
    pub const DEVANAGARI: ScriptRange = ScriptRange {
        start: '\u{0900}',
        end: '\u{097F}',
    };

    pub fn new(start: char, end: char) -> Self {
        ScriptRange { start, end }
    }
}

impl Default for ScriptRange {
    fn default() -> Self {
        ScriptRange::DEVANAGARI
    }
}

/// Configuration for the analysis pipeline and the folder document source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Characters outside this range (other than whitespace) are removed.
    pub script: ScriptRange,
    /// Unicode normalization applied before anything else.
    pub normalization: NormalizationForm,
    /// Whether to apply the lowercase mapping.
    pub lowercase: bool,
    /// File extensions read by the folder source, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            script: ScriptRange::default(),
            normalization: NormalizationForm::NFC,
            lowercase: true,
            extensions: vec!["txt".to_string()],
        }
    }
}

impl IndexConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: IndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the index cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.script.start > self.script.end {
            return Err(ShabdaError::config(format!(
                "script range start U+{:04X} is after end U+{:04X}",
                self.script.start as u32, self.script.end as u32
            )));
        }
        if self.extensions.is_empty() {
            return Err(ShabdaError::config("at least one file extension is required"));
        }
        if self.extensions.iter().any(|ext| ext.is_empty() || ext.starts_with('.')) {
            return Err(ShabdaError::config(
                "file extensions must be non-empty and given without a leading dot",
            ));
        }
        Ok(())
    }

    /// Check whether a file extension is accepted, ignoring ASCII case.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
