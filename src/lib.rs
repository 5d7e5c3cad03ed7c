//! # Shabda
//!
//! A positional word index for Devanagari text, built on a character trie.
//!
//! ## Features
//!
//! - Normalization pipeline: NFC, lowercasing, script filtering, whitespace tokenization
//! - Exact word lookup returning every `(document, position)` occurrence
//! - Prefix autocomplete in code-point order
//! - Parallel analysis of document batches
//! - Folder ingestion and a small CLI with an interactive menu
//!
//! ## Example
//!
//! ```
//! use shabda::config::IndexConfig;
//! use shabda::index::IndexEngine;
//!
//! let mut engine = IndexEngine::new(&IndexConfig::default()).unwrap();
//! engine.index_document("d1", "राम राम सीता");
//!
//! assert_eq!(engine.search_word("राम").len(), 2);
//! assert_eq!(engine.autocomplete("सी")[0].word, "सीता");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod source;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
