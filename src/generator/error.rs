// Copyright (c) 2025 Trie Hash Gen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the trie hash generator.
//!
//! This module defines the errors that can occur while validating keywords
//! and building the dispatch trie.

/// Errors that can occur during generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// No keywords were supplied.
    #[error("Keyword list is empty")]
    EmptyKeySet,

    /// A keyword is the empty string.
    #[error("Keyword at index {index} is empty")]
    EmptyKey {
        /// Position of the keyword in the input list.
        index: usize,
    },

    /// A keyword contains a character outside of ASCII.
    #[error("Keyword '{key}' at index {index} contains non-ASCII characters")]
    NonAsciiKey {
        /// The offending keyword.
        key: String,
        /// Position of the keyword in the input list.
        index: usize,
    },

    /// A keyword contains the NUL character, which terminates input strings.
    #[error("Keyword at index {index} contains a NUL character")]
    NulInKey {
        /// Position of the keyword in the input list.
        index: usize,
    },

    /// A keyword exceeds the configured maximum length.
    #[error("Keyword '{key}' exceeds maximum length of {max_length}")]
    KeyTooLong {
        /// The keyword that was too long.
        key: String,
        /// The maximum allowed length.
        max_length: usize,
    },

    /// The same keyword text appears twice.
    #[error("Keyword '{key}' at index {duplicate} duplicates index {first}")]
    DuplicateKey {
        /// The repeated keyword.
        key: String,
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeated occurrence.
        duplicate: usize,
    },

    /// A generator option would produce invalid or ambiguous code.
    #[error("Invalid option '{option}': {reason}")]
    InvalidOption {
        /// Name of the option.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A node's key subset broke a construction invariant.
    #[error("{reason} at depth {depth}, keys: [{}]", .keys.join(", "))]
    InvariantViolation {
        /// Depth of the node being built.
        depth: usize,
        /// What went wrong.
        reason: String,
        /// Every key held by the node.
        keys: Vec<String>,
    },
}

/// Result type for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
