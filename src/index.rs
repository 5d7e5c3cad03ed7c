//! The positional word index.
//!
//! A [`Trie`] keyed by characters stores, at every node that ends an
//! inserted word, the [`Occurrence`]s of that word. The [`IndexEngine`]
//! runs documents through the [`Normalizer`](crate::analysis::Normalizer)
//! before inserting them and normalizes queries the same way.

pub mod engine;
pub mod occurrence;
pub mod trie;

pub use engine::{IndexEngine, IndexStats};
pub use occurrence::Occurrence;
pub use trie::{Trie, TrieNode, WordMatch};
