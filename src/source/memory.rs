use super::{DocumentSource, SourceDocument};
use crate::error::Result;

/// A source backed by a fixed list of documents.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<SourceDocument>,
}

impl MemorySource {
    pub fn new(documents: Vec<SourceDocument>) -> Self {
        MemorySource { documents }
    }

    /// Append a document.
    pub fn push<I: Into<String>, T: Into<String>>(&mut self, id: I, text: T) {
        self.documents.push(SourceDocument::new(id, text));
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn documents(&self) -> Result<Vec<SourceDocument>> {
        Ok(self.documents.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
