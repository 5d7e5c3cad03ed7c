//! The normalizer that decides what a word is.
//!
//! Text goes through, in order:
//!
//! 1. Unicode normalization (NFC by default)
//! 2. Lowercase mapping
//! 3. Removal of every character outside the script range that is not
//!    whitespace. Removed runs collapse to nothing, so `"रा1म"` is `"राम"`.
//! 4. Unicode normalization again, in the same form. Removing a character
//!    can leave a base letter next to a combining mark it composes with
//!    (`"न-़"` becomes `न` + U+093C), so the filtered text is recomposed.
//! 5. Splitting on whitespace runs; empty pieces are dropped
//!
//! Nothing is rejected for length or repetition. Normalization is total: any
//! string produces a (possibly empty) word sequence.
//!
//! # Examples
//!
//! ```
//! use shabda::analysis::Normalizer;
//!
//! let normalizer = Normalizer::devanagari().unwrap();
//! assert_eq!(normalizer.normalize("राम राम सीता"), vec!["राम", "राम", "सीता"]);
//! assert_eq!(normalizer.normalize("Rama123 राम"), vec!["राम"]);
//! assert!(normalizer.normalize("hello world").is_empty());
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{
    LowercaseCharFilter, PatternReplaceCharFilter, UnicodeNormalizationCharFilter,
};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::config::IndexConfig;
use crate::error::Result;

/// Turns raw text into the ordered sequence of index-eligible words.
#[derive(Clone, Debug)]
pub struct Normalizer {
    analyzer: PipelineAnalyzer,
}

impl Normalizer {
    /// Build the pipeline described by `config`.
    pub fn new(config: &IndexConfig) -> Result<Self> {
        config.validate()?;

        let unicode = Arc::new(UnicodeNormalizationCharFilter::new(config.normalization));

        let mut analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(unicode.clone());
        if config.lowercase {
            analyzer = analyzer.add_char_filter(Arc::new(LowercaseCharFilter::new()));
        }
        let analyzer = analyzer
            .add_char_filter(Arc::new(PatternReplaceCharFilter::retain_script(
                config.script.start,
                config.script.end,
            )?))
            .add_char_filter(unicode)
            .with_name("script_normalizer");

        Ok(Normalizer { analyzer })
    }

    /// The default pipeline: NFC, lowercase, Devanagari only.
    pub fn devanagari() -> Result<Self> {
        Self::new(&IndexConfig::default())
    }

    /// Produce positioned tokens for `text`.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        self.analyzer.analyze(text).collect()
    }

    /// Produce the ordered word sequence for `text`.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.analyzer.analyze(text).map(|token| token.text).collect()
    }

    /// Normalize a query the same way indexed text is normalized.
    ///
    /// Returns the single resulting word, the empty string when nothing
    /// survives normalization, or `None` when the query splits into more
    /// than one word (no single indexed word can match it).
    pub fn normalize_term(&self, query: &str) -> Option<String> {
        let mut words = self.normalize(query).into_iter();
        match (words.next(), words.next()) {
            (None, _) => Some(String::new()),
            (Some(word), None) => Some(word),
            (Some(_), Some(_)) => None,
        }
    }
}
