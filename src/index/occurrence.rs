use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One place a word was seen: a document and the word's zero-based position
/// in that document's token sequence.
///
/// The document id is shared between all occurrences of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub doc_id: Arc<str>,
    pub position: usize,
}

impl Occurrence {
    pub fn new(doc_id: impl Into<Arc<str>>, position: usize) -> Self {
        Occurrence {
            doc_id: doc_id.into(),
            position,
        }
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.doc_id, self.position)
    }
}
