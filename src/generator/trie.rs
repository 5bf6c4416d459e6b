// Copyright (c) 2025 Trie Hash Gen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The complete dispatch trie: the root node plus the ordered key list.

use super::error::GeneratorResult;
use super::key::{index_keywords, Key};
use super::node::TrieNode;
use super::options::GeneratorOptions;

/// A trie built once from a keyword list and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    keys: Vec<Key>,
    root: TrieNode,
}

impl Trie {
    /// Validates `keywords` and builds the trie over them.
    ///
    /// # Errors
    ///
    /// Returns the first intake or construction failure encountered.
    pub fn build<I, S>(keywords: I, options: &GeneratorOptions) -> GeneratorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = index_keywords(keywords, options)?;
        let root = TrieNode::build(&keys, (0..keys.len()).collect(), 0, None, options)?;
        Ok(Self { keys, root })
    }

    /// The root node, at depth 0.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// All keys in input order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Depth of the deepest node, which is the length of the longest key.
    pub fn max_depth(&self) -> usize {
        self.root.subtree_depth()
    }
}
