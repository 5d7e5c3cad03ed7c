//! Document text providers.
//!
//! A [`DocumentSource`] hands the index `(document id, raw text)` pairs. The
//! index does not care where the text came from; extraction problems are
//! dealt with here and surface as an empty text, which indexes zero words.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod folder;
pub mod memory;

pub use folder::FolderSource;
pub use memory::MemorySource;

/// A document as delivered by a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub id: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, text: T) -> Self {
        SourceDocument {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Something that can produce the documents to index.
pub trait DocumentSource: Send + Sync {
    /// All documents, in the order they should be indexed.
    fn documents(&self) -> Result<Vec<SourceDocument>>;

    /// Get the name of this source (for logging).
    fn name(&self) -> &'static str;
}
