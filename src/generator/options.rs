// Copyright (c) 2025 Trie Hash Gen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Options controlling how the dispatch function is generated.

use serde::{Deserialize, Serialize};

use super::error::{GeneratorError, GeneratorResult};

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENTATION: usize = 4;

/// Default name of the generated C function.
pub const DEFAULT_FUNCTION_NAME: &str = "setContains";

/// Default value returned when the input matches no keyword.
pub const DEFAULT_NO_MATCH_VALUE: i32 = -1;

/// Default upper bound on keyword length.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 255;

/// Upper bound for `max_key_length`.
pub const MAX_KEY_LENGTH_LIMIT: usize = 4096;

/// Whether `name` is a valid C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Options for the trie hash generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Spaces emitted per nesting level.
    pub indentation: usize,

    /// Name of the generated function.
    pub function_name: String,

    /// Value returned when nothing matches. The generated function returns a
    /// C `int`, so this is an `i32`.
    pub no_match_value: i32,

    /// Emit a `default:` arm in every switch returning the no-match value.
    pub default_branches: bool,

    /// Match ASCII letters regardless of case.
    pub case_insensitive: bool,

    /// Longest accepted keyword (bounds recursion depth).
    pub max_key_length: usize,
}

impl GeneratorOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level.
    pub fn with_indentation(mut self, indentation: usize) -> Self {
        self.indentation = indentation;
        self
    }

    /// Sets the name of the generated function.
    pub fn with_function_name<S: Into<String>>(mut self, function_name: S) -> Self {
        self.function_name = function_name.into();
        self
    }

    /// Sets the value returned when the input matches no keyword.
    pub fn with_no_match_value(mut self, no_match_value: i32) -> Self {
        self.no_match_value = no_match_value;
        self
    }

    /// Enables or disables `default:` arms.
    pub fn with_default_branches(mut self, default_branches: bool) -> Self {
        self.default_branches = default_branches;
        self
    }

    /// Enables or disables ASCII case-insensitive matching.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Sets the longest accepted keyword.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    /// Checks that these options produce a well-formed, unambiguous function.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidOption`] if the function name is not a
    /// C identifier, the no-match value could be mistaken for a keyword index,
    /// or `max_key_length` is outside `1..=MAX_KEY_LENGTH_LIMIT`.
    pub fn check(&self) -> GeneratorResult<()> {
        if !is_c_identifier(&self.function_name) {
            return Err(GeneratorError::InvalidOption {
                option: "function_name".to_string(),
                reason: format!("'{}' is not a valid C identifier", self.function_name),
            });
        }

        // Keyword indices are never negative
        if self.no_match_value >= 0 {
            return Err(GeneratorError::InvalidOption {
                option: "no_match_value".to_string(),
                reason: "must be negative".to_string(),
            });
        }

        if self.max_key_length == 0 || self.max_key_length > MAX_KEY_LENGTH_LIMIT {
            return Err(GeneratorError::InvalidOption {
                option: "max_key_length".to_string(),
                reason: format!("must be between 1 and {MAX_KEY_LENGTH_LIMIT}"),
            });
        }

        Ok(())
    }

    /// Maps a byte to the form used for trie edges.
    pub(crate) fn fold(&self, byte: u8) -> u8 {
        if self.case_insensitive {
            byte.to_ascii_lowercase()
        } else {
            byte
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            no_match_value: DEFAULT_NO_MATCH_VALUE,
            default_branches: false,
            case_insensitive: false,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults_pass_check() {
        assert_eq!(GeneratorOptions::default().check(), Ok(()));
        assert_eq!(
            GeneratorOptions::default().with_indentation(40).check(),
            Ok(())
        );
    }

    #[test_case(GeneratorOptions::default().with_no_match_value(0), "no_match_value"; "zero sentinel")]
    #[test_case(GeneratorOptions::default().with_no_match_value(i32::MAX), "no_match_value"; "positive sentinel")]
    #[test_case(GeneratorOptions::default().with_function_name("x() { return 1; } int y"), "function_name"; "injected name")]
    #[test_case(GeneratorOptions::default().with_function_name(""), "function_name"; "empty name")]
    #[test_case(GeneratorOptions::default().with_max_key_length(0), "max_key_length"; "zero length")]
    #[test_case(GeneratorOptions::default().with_max_key_length(MAX_KEY_LENGTH_LIMIT + 1), "max_key_length"; "huge length")]
    fn test_check_rejects(options: GeneratorOptions, expected: &str) {
        match options.check() {
            Err(GeneratorError::InvalidOption { option, .. }) => assert_eq!(option, expected),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_c_identifiers() {
        assert!(is_c_identifier("setContains"));
        assert!(is_c_identifier("_kw2"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("9lives"));
        assert!(!is_c_identifier("has-dash"));
        assert!(!is_c_identifier("naïve"));
    }
}
