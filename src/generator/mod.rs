// Copyright (c) 2025 Trie Hash Gen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie Hash Generator
//!
//! Turns a fixed list of keywords into the source of a C function that
//! recognises them with nested `switch` statements, one character at a time.
//! On an exact match the function returns the keyword's position in the input
//! list; on anything else it returns a negative no-match value.
//!
//! # Example
//!
//! ```
//! use trie_hash_gen_lib::generator::TrieHashGen;
//!
//! let generator = TrieHashGen::new(["ma", "man", "mad", "manure"]).unwrap();
//! let code = generator.generate();
//!
//! assert!(code.starts_with("int setContains(char const * str) {"));
//! assert!(code.contains("case 'm':"));
//! assert!(code.ends_with("    return -1;\n}\n"));
//! ```
//!
//! # Complexity
//!
//! - Building: O(total key length × alphabet) to partition every level
//! - Generated matcher: O(input length), one `switch` per character

mod emit;
mod error;
mod key;
mod node;
mod options;
mod trie;

#[cfg(test)]
mod tests;

pub use error::{GeneratorError, GeneratorResult};
pub use key::Key;
pub use node::TrieNode;
pub use options::{
    is_c_identifier, GeneratorOptions, DEFAULT_FUNCTION_NAME, DEFAULT_INDENTATION,
    DEFAULT_MAX_KEY_LENGTH, DEFAULT_NO_MATCH_VALUE, MAX_KEY_LENGTH_LIMIT,
};
pub use trie::Trie;

use emit::Emitter;

/// Generator owning the options and trie for a single run.
#[derive(Debug, Clone)]
pub struct TrieHashGen {
    trie: Trie,
    options: GeneratorOptions,
}

impl TrieHashGen {
    /// Builds a generator over `keywords` with default options.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the keywords fail validation or the
    /// trie cannot be built.
    pub fn new<I, S>(keywords: I) -> GeneratorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(keywords, GeneratorOptions::default())
    }

    /// Builds a generator over `keywords` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidOption`] if the options fail
    /// [`GeneratorOptions::check`], or another [`GeneratorError`] if the
    /// keywords fail validation or the trie cannot be built.
    pub fn with_options<I, S>(keywords: I, options: GeneratorOptions) -> GeneratorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        options.check()?;
        let trie = Trie::build(keywords, &options)?;
        tracing::debug!(
            keys = trie.keys().len(),
            nodes = trie.node_count(),
            max_depth = trie.max_depth(),
            "Built dispatch trie"
        );
        Ok(Self { trie, options })
    }

    /// Renders the complete matcher function.
    pub fn generate(&self) -> String {
        let code = Emitter::new(&self.trie, &self.options).emit_function();
        tracing::debug!(
            function = %self.options.function_name,
            bytes = code.len(),
            "Generated dispatch function"
        );
        code
    }

    /// The trie backing this generator.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The options in effect.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }
}
