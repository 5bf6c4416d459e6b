// Copyright (c) 2025 Trie Hash Gen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword intake.
//!
//! Raw keywords are checked here before any trie construction happens, and
//! each one is paired with its position in the input list. That position is
//! the value the generated function returns on an exact match.

use std::collections::HashMap;

use super::error::{GeneratorError, GeneratorResult};
use super::options::GeneratorOptions;

/// A keyword paired with its index in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    text: String,
    index: usize,
}

impl Key {
    /// The keyword text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the keyword in the input list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Length in bytes, which equals the length in characters for ASCII keys.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the key text is empty. Always false once intake succeeded.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte at `position`, if the key is long enough.
    pub(crate) fn byte_at(&self, position: usize) -> Option<u8> {
        self.text.as_bytes().get(position).copied()
    }
}

/// Validates raw keywords and assigns each its positional index.
///
/// # Errors
///
/// Fails on an empty list, an empty keyword, non-ASCII or NUL characters,
/// keywords longer than `options.max_key_length`, and duplicate text (after
/// case folding when case-insensitive matching is on).
pub fn index_keywords<I, S>(keywords: I, options: &GeneratorOptions) -> GeneratorResult<Vec<Key>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut keys = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, keyword) in keywords.into_iter().enumerate() {
        let text: String = keyword.into();

        if text.is_empty() {
            return Err(GeneratorError::EmptyKey { index });
        }
        if !text.is_ascii() {
            return Err(GeneratorError::NonAsciiKey { key: text, index });
        }
        if text.bytes().any(|b| b == 0) {
            return Err(GeneratorError::NulInKey { index });
        }
        if text.len() > options.max_key_length {
            return Err(GeneratorError::KeyTooLong {
                key: text,
                max_length: options.max_key_length,
            });
        }

        let folded = if options.case_insensitive {
            text.to_ascii_lowercase()
        } else {
            text.clone()
        };
        if let Some(&first) = seen.get(&folded) {
            return Err(GeneratorError::DuplicateKey {
                key: text,
                first,
                duplicate: index,
            });
        }
        seen.insert(folded, index);

        keys.push(Key { text, index });
    }

    if keys.is_empty() {
        return Err(GeneratorError::EmptyKeySet);
    }

    tracing::trace!(count = keys.len(), "Indexed keywords");
    Ok(keys)
}
