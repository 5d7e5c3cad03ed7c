//! The index engine: document ingestion and the query surface.
//!
//! Ingestion takes `&mut self` and queries take `&self`, so an engine that is
//! being queried cannot be written to at the same time. Indexing finishes
//! before any lookup is served.
//!
//! # Examples
//!
//! ```
//! use shabda::config::IndexConfig;
//! use shabda::index::{IndexEngine, Occurrence};
//!
//! let mut engine = IndexEngine::new(&IndexConfig::default()).unwrap();
//! assert_eq!(engine.index_document("d1", "राम राम सीता"), 3);
//!
//! assert_eq!(
//!     engine.search_word("राम"),
//!     &[Occurrence::new("d1", 0), Occurrence::new("d1", 1)]
//! );
//! assert_eq!(engine.autocomplete("रा")[0].word, "राम");
//! assert!(engine.search_word("गीता").is_empty());
//! ```

use std::sync::Arc;
use std::time::Instant;

use ahash::AHashMap;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::Normalizer;
use crate::config::IndexConfig;
use crate::error::Result;
use crate::index::occurrence::Occurrence;
use crate::index::trie::{Trie, TrieNode, WordMatch};
use crate::source::DocumentSource;

/// Counters describing an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents: usize,
    pub words: usize,
    pub nodes: usize,
    pub occurrences: usize,
}

/// An in-memory positional index over a set of documents.
pub struct IndexEngine {
    normalizer: Normalizer,
    trie: Trie,
    documents: AHashMap<String, String>,
}

impl IndexEngine {
    /// Create an empty engine whose normalizer follows `config`.
    pub fn new(config: &IndexConfig) -> Result<Self> {
        Ok(Self::with_normalizer(Normalizer::new(config)?))
    }

    /// Create an empty engine around an existing normalizer.
    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        IndexEngine {
            normalizer,
            trie: Trie::new(),
            documents: AHashMap::new(),
        }
    }

    /// Normalize `raw_text` and insert every word at its position.
    ///
    /// Returns the number of words indexed. The raw text is kept under
    /// `doc_id`, replacing any earlier text for that id. Occurrences from an
    /// earlier call with the same id are not removed: indexing a document
    /// twice doubles its occurrences.
    pub fn index_document(&mut self, doc_id: &str, raw_text: &str) -> usize {
        let words = self.normalizer.normalize(raw_text);
        self.insert_words(doc_id, raw_text.to_string(), words)
    }

    /// Index a batch of documents.
    ///
    /// Normalization runs in parallel; insertion happens afterwards on this
    /// thread in input order, so the resulting occurrence lists are the same
    /// as indexing the documents one by one.
    pub fn index_documents<I>(&mut self, documents: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let documents: Vec<(String, String)> = documents.into_iter().collect();
        let normalizer = &self.normalizer;
        let analyzed: Vec<(String, String, Vec<String>)> = documents
            .into_par_iter()
            .map(|(doc_id, text)| {
                let words = normalizer.normalize(&text);
                (doc_id, text, words)
            })
            .collect();

        analyzed
            .into_iter()
            .map(|(doc_id, text, words)| self.insert_words(&doc_id, text, words))
            .sum()
    }

    /// Index every document a source provides.
    pub fn index_source(&mut self, source: &dyn DocumentSource) -> Result<usize> {
        let start = Instant::now();
        let documents = source.documents()?;
        let document_count = documents.len();
        let indexed = self.index_documents(
            documents
                .into_iter()
                .map(|document| (document.id, document.text)),
        );
        info!(
            "Indexed {} words from {} documents of {} source in {:.3} ms",
            indexed,
            document_count,
            source.name(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(indexed)
    }

    fn insert_words(&mut self, doc_id: &str, raw_text: String, words: Vec<String>) -> usize {
        info!("Indexing document: {} - extracted {} words", doc_id, words.len());
        if words.is_empty() {
            warn!("Document {} contains no indexable words", doc_id);
        }

        let shared_id: Arc<str> = Arc::from(doc_id);
        for (position, word) in words.iter().enumerate() {
            self.trie.insert(word, Arc::clone(&shared_id), position);
        }
        self.documents.insert(doc_id.to_string(), raw_text);

        words.len()
    }

    /// All occurrences of `query` after normalization, in insertion order.
    ///
    /// A query that normalizes to several words matches nothing.
    pub fn search_word(&self, query: &str) -> &[Occurrence] {
        let start = Instant::now();
        let occurrences: &[Occurrence] = match self.normalizer.normalize_term(query) {
            Some(term) => self.trie.search(&term),
            None => &[],
        };
        debug!(
            "search {:?}: {} results in {:.3} ms",
            query,
            occurrences.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        occurrences
    }

    /// Every indexed word starting with the normalized `prefix`.
    ///
    /// A prefix that normalizes to nothing matches every word; one that
    /// normalizes to several words matches nothing.
    pub fn autocomplete(&self, prefix: &str) -> Vec<WordMatch<'_>> {
        let start = Instant::now();
        let matches = match self.normalizer.normalize_term(prefix) {
            Some(term) => self.trie.prefix_search(&term),
            None => Vec::new(),
        };
        debug!(
            "autocomplete {:?}: {} results in {:.3} ms",
            prefix,
            matches.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        matches
    }

    /// The trie node for the normalized `word`, terminal or not.
    pub fn node(&self, word: &str) -> Option<&TrieNode> {
        self.normalizer
            .normalize_term(word)
            .and_then(|term| self.trie.node(&term))
    }

    /// The raw text last indexed under `doc_id`.
    pub fn document_text(&self, doc_id: &str) -> Option<&str> {
        self.documents.get(doc_id).map(String::as_str)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            words: self.trie.word_count(),
            nodes: self.trie.node_count(),
            occurrences: self.trie.occurrence_count(),
        }
    }
}

impl std::fmt::Debug for IndexEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexEngine")
            .field("normalizer", &self.normalizer)
            .field("trie", &self.trie)
            .field("documents", &self.documents.len())
            .finish()
    }
}
