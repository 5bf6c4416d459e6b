//! Trie Hash Generator Library
//!
//! This library turns a fixed list of keywords into the C source of a
//! branch-based matcher: nested `switch` statements that consume the input
//! one character at a time and return the matching keyword's index, or a
//! negative no-match value.
//!
//! # Architecture
//!
//! - [`generator`] builds the prefix trie and emits the dispatch code
//! - [`config`] loads layered settings from files and the environment
//! - [`input`] reads keyword files
//! - [`error`] defines the error types and reporting hooks

pub mod config;
pub mod error;
pub mod generator;
pub mod input;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the trie hash generator.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Routes reported errors through `tracing`.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
