//! Character-keyed prefix tree with per-word occurrence lists.
//!
//! Every node owns its children outright; there is no sharing and there are
//! no back references. Children are kept in a `BTreeMap`, so iteration is in
//! ascending code-point order and every traversal below is deterministic.
//!
//! Traversals use explicit work stacks rather than recursion, including
//! drop, so a pathologically long word cannot exhaust the call stack.
//!
//! # Examples
//!
//! ```
//! use shabda::index::{Occurrence, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("राम", "d1", 0);
//! trie.insert("राम", "d1", 1);
//! trie.insert("रावण", "d2", 0);
//!
//! assert_eq!(
//!     trie.search("राम"),
//!     &[Occurrence::new("d1", 0), Occurrence::new("d1", 1)]
//! );
//! assert!(trie.search("रा").is_empty());
//!
//! let words: Vec<_> = trie.prefix_search("रा").into_iter().map(|m| m.word).collect();
//! assert_eq!(words, vec!["राम", "रावण"]);
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;

use crate::index::occurrence::Occurrence;

/// One character-extension state of the trie.
#[derive(Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
    occurrences: Vec<Occurrence>,
}

impl TrieNode {
    /// Whether some inserted word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Occurrences of the word ending here, in insertion order.
    ///
    /// Empty unless the node is terminal.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Children in ascending code-point order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, child)| (ch, child))
    }

    /// The characters leading to children, ascending.
    pub fn child_chars(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("children", &self.child_chars().collect::<Vec<_>>())
            .field("terminal", &self.terminal)
            .field("occurrences", &self.occurrences)
            .finish()
    }
}

/// A word found by [`Trie::prefix_search`] together with its terminal node.
#[derive(Debug, Clone)]
pub struct WordMatch<'a> {
    /// The complete word: the prefix followed by the path below it.
    pub word: String,
    /// The node the word ends at.
    pub node: &'a TrieNode,
}

impl<'a> WordMatch<'a> {
    /// Occurrences of the word, in insertion order.
    pub fn occurrences(&self) -> &'a [Occurrence] {
        self.node.occurrences()
    }
}

/// A prefix tree mapping words to the places they occur.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    node_count: usize,
    word_count: usize,
    occurrence_count: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `token` occurs in `doc_id` at `position`.
    ///
    /// Missing nodes along the path are created. Characters are compared by
    /// exact code point. Repeated insertions of the same triple are all
    /// kept.
    pub fn insert(&mut self, token: &str, doc_id: impl Into<Arc<str>>, position: usize) {
        let mut created = 0;
        let mut node = &mut self.root;
        for ch in token.chars() {
            node = match node.children.entry(ch) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    created += 1;
                    entry.insert(TrieNode::default())
                }
            };
        }

        let newly_terminal = !node.terminal;
        node.terminal = true;
        node.occurrences.push(Occurrence::new(doc_id, position));

        self.node_count += created;
        self.occurrence_count += 1;
        if newly_terminal {
            self.word_count += 1;
        }
    }

    /// The node reached by walking `path` from the root.
    pub fn node(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }

    /// All occurrences of `token`, in insertion order.
    ///
    /// Empty when the path does not exist or when `token` was only ever a
    /// prefix of other words.
    pub fn search(&self, token: &str) -> &[Occurrence] {
        match self.node(token) {
            Some(node) if node.terminal => &node.occurrences,
            _ => &[],
        }
    }

    /// Every inserted word starting with `prefix`, the prefix itself included
    /// when it is a word.
    ///
    /// Words come out in depth-first pre-order with children visited in
    /// ascending code-point order, so for a fixed trie the output is always
    /// the same.
    pub fn prefix_search(&self, prefix: &str) -> Vec<WordMatch<'_>> {
        let Some(start) = self.node(prefix) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut path = prefix.to_string();
        if start.terminal {
            matches.push(WordMatch {
                word: path.clone(),
                node: start,
            });
        }

        // (length of the parent's path in bytes, edge character, node)
        let mut stack: Vec<(usize, char, &TrieNode)> = start
            .children()
            .rev()
            .map(|(ch, child)| (path.len(), ch, child))
            .collect();

        while let Some((parent_len, ch, node)) = stack.pop() {
            path.truncate(parent_len);
            path.push(ch);
            if node.terminal {
                matches.push(WordMatch {
                    word: path.clone(),
                    node,
                });
            }
            let len = path.len();
            stack.extend(node.children().rev().map(|(ch, child)| (len, ch, child)));
        }

        matches
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Total number of occurrences across all words.
    pub fn occurrence_count(&self) -> usize {
        self.occurrence_count
    }

    pub fn is_empty(&self) -> bool {
        self.occurrence_count == 0
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("node_count", &self.node_count)
            .field("word_count", &self.word_count)
            .field("occurrence_count", &self.occurrence_count)
            .finish()
    }
}

/// Outline of the tree: one character per line, indented by `"_ "` per level.
impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(usize, char, &TrieNode)> = self
            .root
            .children()
            .rev()
            .map(|(ch, child)| (0, ch, child))
            .collect();

        while let Some((depth, ch, node)) = stack.pop() {
            writeln!(f, "{}{}", "_ ".repeat(depth), ch)?;
            stack.extend(node.children().rev().map(|(ch, child)| (depth + 1, ch, child)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(matches: &[WordMatch<'_>]) -> Vec<String> {
        matches.iter().map(|m| m.word.clone()).collect()
    }

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(trie.search("राम").is_empty());
        assert!(trie.search("").is_empty());
        assert!(trie.prefix_search("").is_empty());
        assert_eq!(trie.node_count(), 0);
        assert_eq!(trie.to_string(), "");
    }

    #[test]
    fn test_insert_and_search() {
        let mut trie = Trie::new();
        trie.insert("राम", "d1", 0);
        trie.insert("राम", "d1", 1);
        trie.insert("सीता", "d1", 2);

        assert_eq!(
            trie.search("राम"),
            &[Occurrence::new("d1", 0), Occurrence::new("d1", 1)]
        );
        assert_eq!(trie.search("सीता"), &[Occurrence::new("d1", 2)]);
        assert!(trie.search("गीता").is_empty());
    }

    #[test]
    fn test_occurrences_keep_insertion_order() {
        let mut trie = Trie::new();
        trie.insert("राम", "d2", 5);
        trie.insert("राम", "d1", 0);
        trie.insert("राम", "d2", 1);

        assert_eq!(
            trie.search("राम"),
            &[
                Occurrence::new("d2", 5),
                Occurrence::new("d1", 0),
                Occurrence::new("d2", 1),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut trie = Trie::new();
        trie.insert("राम", "d1", 0);
        trie.insert("राम", "d1", 0);

        assert_eq!(trie.search("राम").len(), 2);
        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.occurrence_count(), 2);
    }

    #[test]
    fn test_prefix_only_path_is_not_a_word() {
        let mut trie = Trie::new();
        trie.insert("रामायण", "d1", 0);

        let node = trie.node("राम").unwrap();
        assert!(!node.is_terminal());
        assert!(node.occurrences().is_empty());
        assert!(trie.search("राम").is_empty());
    }

    #[test]
    fn test_search_does_not_mutate() {
        let mut trie = Trie::new();
        trie.insert("राम", "d1", 0);
        let nodes = trie.node_count();

        let _ = trie.search("रामायण");
        let _ = trie.prefix_search("सी");

        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn test_node_counting_shares_prefixes() {
        let mut trie = Trie::new();
        trie.insert("ab", "d", 0);
        trie.insert("ac", "d", 1);
        trie.insert("a", "d", 2);

        // a, b, c
        assert_eq!(trie.node_count(), 3);
        assert_eq!(trie.word_count(), 3);
        assert_eq!(trie.root().child_count(), 1);
    }

    #[test]
    fn test_code_points_are_not_folded() {
        let mut trie = Trie::new();
        trie.insert("Ab", "d", 0);

        assert!(trie.search("ab").is_empty());
        assert_eq!(trie.search("Ab").len(), 1);
    }

    #[test]
    fn test_prefix_search_example() {
        let mut trie = Trie::new();
        trie.insert("राम", "d1", 0);
        trie.insert("राम", "d1", 1);
        trie.insert("सीता", "d1", 2);

        let matches = trie.prefix_search("रा");
        assert_eq!(words(&matches), vec!["राम"]);
        assert_eq!(
            matches[0].occurrences(),
            &[Occurrence::new("d1", 0), Occurrence::new("d1", 1)]
        );
    }

    #[test]
    fn test_prefix_search_includes_prefix_word() {
        let mut trie = Trie::new();
        trie.insert("राम", "d1", 0);
        trie.insert("रामायण", "d1", 1);

        assert_eq!(words(&trie.prefix_search("राम")), vec!["राम", "रामायण"]);
    }

    #[test]
    fn test_prefix_search_order_is_preorder_ascending() {
        let mut trie = Trie::new();
        for (position, word) in ["ca", "b", "abc", "a", "ab", "ba", "abd"].iter().enumerate() {
            trie.insert(word, "d", position);
        }

        assert_eq!(
            words(&trie.prefix_search("")),
            vec!["a", "ab", "abc", "abd", "b", "ba", "ca"]
        );
        assert_eq!(words(&trie.prefix_search("ab")), vec!["ab", "abc", "abd"]);
    }

    #[test]
    fn test_prefix_search_missing_path() {
        let mut trie = Trie::new();
        trie.insert("राम", "d1", 0);

        assert!(trie.prefix_search("सी").is_empty());
        assert!(trie.prefix_search("रामा").is_empty());
    }

    #[test]
    fn test_prefix_search_is_deterministic() {
        let mut trie = Trie::new();
        for (position, word) in ["गीता", "गणेश", "गंगा", "गौरी"].iter().enumerate() {
            trie.insert(word, "d", position);
        }

        let first = words(&trie.prefix_search("ग"));
        let second = words(&trie.prefix_search("ग"));
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_outline() {
        let mut trie = Trie::new();
        trie.insert("ab", "d", 0);
        trie.insert("ac", "d", 1);
        trie.insert("b", "d", 2);

        assert_eq!(trie.to_string(), "a\n_ b\n_ c\nb\n");
    }

    #[test]
    fn test_long_token_does_not_recurse() {
        let token: String = std::iter::repeat_n('क', 30_000).collect();
        let mut trie = Trie::new();
        trie.insert(&token, "d", 0);

        assert_eq!(trie.search(&token).len(), 1);
        let matches = trie.prefix_search("क");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word.chars().count(), 30_000);
        assert_eq!(trie.node_count(), 30_000);

        drop(matches);
        drop(trie);
    }

    #[test]
    fn test_node_debug_lists_child_chars() {
        let mut trie = Trie::new();
        trie.insert("ab", "d", 0);

        let debug = format!("{:?}", trie.node("a").unwrap());
        assert!(debug.contains("['b']"));
    }
}
