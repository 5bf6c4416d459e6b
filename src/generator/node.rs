// Copyright (c) 2025 Trie Hash Gen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the dispatch trie.
//!
//! A node represents the prefix spelled by the path from the root. It holds
//! every key compatible with that prefix and one child per distinct next
//! character. Children are kept in a `BTreeMap` so traversal order is
//! ascending by character code.

use std::collections::BTreeMap;

use super::error::{GeneratorError, GeneratorResult};
use super::key::Key;
use super::options::GeneratorOptions;

/// A node in the dispatch trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Number of characters matched on the path from the root
    depth: usize,

    /// Indices of the keys routed into this node, in input order
    keys: Vec<usize>,

    /// Child nodes by (folded) edge character
    children: BTreeMap<u8, TrieNode>,

    /// Key ending exactly at this node, if any
    terminal: Option<usize>,
}

impl TrieNode {
    /// Builds a node and its whole subtree.
    ///
    /// `subset` holds positions into `all`. `edge` is the character on the
    /// edge from the parent and is `None` only for the root.
    pub(crate) fn build(
        all: &[Key],
        subset: Vec<usize>,
        depth: usize,
        edge: Option<u8>,
        options: &GeneratorOptions,
    ) -> GeneratorResult<Self> {
        validate(all, &subset, depth, edge, options)?;

        let terminal = subset.iter().copied().find(|&i| all[i].len() == depth);

        let mut children = BTreeMap::new();
        for (byte, bucket) in partition(all, &subset, depth, options) {
            let child = Self::build(all, bucket, depth + 1, Some(byte), options)?;
            children.insert(byte, child);
        }

        tracing::trace!(
            depth,
            keys = subset.len(),
            children = children.len(),
            terminal = ?terminal,
            "Built trie node"
        );

        Ok(Self {
            depth,
            keys: subset,
            children,
            terminal,
        })
    }

    /// Number of characters matched on the path from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Indices of the keys routed into this node, in input order.
    pub fn keys(&self) -> &[usize] {
        &self.keys
    }

    /// Child nodes in ascending character order.
    pub fn children(&self) -> &BTreeMap<u8, TrieNode> {
        &self.children
    }

    /// Child reached over `byte`, if any.
    pub fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children.get(&byte)
    }

    /// Index of the key ending exactly at this node.
    pub fn terminal(&self) -> Option<usize> {
        self.terminal
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.values().map(TrieNode::subtree_size).sum::<usize>()
    }

    /// Deepest node depth in this subtree.
    pub fn subtree_depth(&self) -> usize {
        self.children
            .values()
            .map(TrieNode::subtree_depth)
            .max()
            .unwrap_or(self.depth)
    }
}

/// Checks the construction invariants of a node's key subset.
fn validate(
    all: &[Key],
    subset: &[usize],
    depth: usize,
    edge: Option<u8>,
    options: &GeneratorOptions,
) -> GeneratorResult<()> {
    let violation = |reason: String| GeneratorError::InvariantViolation {
        depth,
        reason,
        keys: subset.iter().map(|&i| all[i].text().to_string()).collect(),
    };

    if subset.is_empty() {
        return Err(violation("Empty set of keys".to_string()));
    }

    for &i in subset {
        let key = &all[i];
        if key.len() < depth {
            return Err(violation(format!("Key '{}' too short", key.text())));
        }

        if let Some(expected) = edge {
            // depth >= 1 whenever an edge exists
            let found = key.byte_at(depth - 1).map(|b| options.fold(b));
            if found != Some(expected) {
                return Err(violation(format!(
                    "Key '{}' does not continue with '{}'",
                    key.text(),
                    expected.escape_ascii()
                )));
            }
        }
    }

    Ok(())
}

/// Groups the keys longer than `depth` by their character at `depth`.
fn partition(
    all: &[Key],
    subset: &[usize],
    depth: usize,
    options: &GeneratorOptions,
) -> BTreeMap<u8, Vec<usize>> {
    let mut buckets: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
    for &i in subset {
        if let Some(byte) = all[i].byte_at(depth) {
            buckets.entry(options.fold(byte)).or_default().push(i);
        }
    }
    buckets
}
