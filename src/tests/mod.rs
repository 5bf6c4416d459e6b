//! Test modules for the trie hash generator.
//!
//! This module contains crate-level tests:
//! - Configuration loading and validation
//! - Error types and reporting
//! - End-to-end generation through the public facade
//! - Shared fixtures and proptest strategies


pub use test_utils::{create_test_dir, keyword_list_strategy, keyword_strategy};
