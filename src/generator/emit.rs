// Copyright (c) 2025 Trie Hash Gen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dispatch emitter.
//!
//! Renders a [`Trie`] depth first as nested C `switch` statements, one per
//! node, each keyed on the next input character. Every rendered block reports
//! whether it returns on all paths so the emitter can decide where a `break;`
//! or a trailing no-match `return` is still needed.

use super::node::TrieNode;
use super::options::GeneratorOptions;
use super::trie::Trie;

/// Accumulates the generated text for one trie.
pub(crate) struct Emitter<'a> {
    trie: &'a Trie,
    options: &'a GeneratorOptions,
    out: String,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(trie: &'a Trie, options: &'a GeneratorOptions) -> Self {
        Self {
            trie,
            options,
            out: String::new(),
        }
    }

    /// Renders the whole function and returns its text.
    pub(crate) fn emit_function(mut self) -> String {
        self.line(
            0,
            &format!("int {}(char const * str) {{", self.options.function_name),
        );

        let root = self.trie.root();
        if !self.emit_node(root) {
            self.line(1, &format!("return {};", self.options.no_match_value));
        }

        self.line(0, "}");
        self.out
    }

    /// Renders one node's switch. Returns true when every path through it returns.
    fn emit_node(&mut self, node: &'a TrieNode) -> bool {
        let level = node.depth() + 1;
        self.line(level, "switch (*str++) {");

        let mut arms_return = true;
        for (&byte, child) in node.children() {
            for label in self.labels(byte) {
                self.line(level, &format!("case {}:", char_literal(label)));
            }
            arms_return &= self.emit_node(child);
        }

        if let Some(index) = node.terminal() {
            self.line(level, "case 0:");
            self.line(level + 1, &format!("return {index};"));
        }

        let has_default = self.options.default_branches;
        if has_default {
            self.line(level, "default:");
            self.line(
                level + 1,
                &format!("return {};", self.options.no_match_value),
            );
        }

        self.line(level, "}");

        let returns = has_default && arms_return;
        if node.depth() > 0 && !returns {
            self.line(level, "break;");
        }
        returns
    }

    /// Case labels for a trie edge.
    fn labels(&self, byte: u8) -> Vec<u8> {
        if self.options.case_insensitive && byte.is_ascii_alphabetic() {
            vec![byte.to_ascii_uppercase(), byte.to_ascii_lowercase()]
        } else {
            vec![byte]
        }
    }

    fn line(&mut self, level: usize, text: &str) {
        self.out
            .extend(std::iter::repeat(' ').take(self.options.indentation * level));
        self.out.push_str(text);
        self.out.push('\n');
    }
}

/// Renders `byte` as a C character literal.
pub(crate) fn char_literal(byte: u8) -> String {
    match byte {
        b'\'' => "'\\''".to_string(),
        b'\\' => "'\\\\'".to_string(),
        b'\t' => "'\\t'".to_string(),
        b'\n' => "'\\n'".to_string(),
        b'\r' => "'\\r'".to_string(),
        0x20..=0x7e => format!("'{}'", byte as char),
        _ => format!("'\\x{byte:02x}'"),
    }
}
