// Copyright (c) 2025 Trie Hash Gen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! A tiny interpreter for the C subset the generator emits.
//!
//! Supports exactly the constructs in generated matchers: one function
//! header, `switch (*str++)`, `case` labels with character literals or `0`,
//! `default:`, `return N;` and `break;`, with C fall-through semantics.

#![allow(dead_code)]

/// A `switch` label.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Byte(u8),
    Default,
}

/// Either a label or a statement inside a switch body.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Label(Label),
    Stmt(Stmt),
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Switch(Vec<Entry>),
    Return(i64),
    Break,
}

/// A parsed matcher function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub body: Vec<Stmt>,
}

enum Flow {
    Normal,
    Break,
    Return(i64),
}

impl Function {
    /// Parses generated code.
    pub fn parse(code: &str) -> Result<Self, String> {
        let mut lines = code.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines.next().ok_or("empty input")?;
        let name = header
            .strip_prefix("int ")
            .and_then(|rest| rest.strip_suffix("(char const * str) {"))
            .ok_or_else(|| format!("bad header: {header}"))?
            .to_string();

        let mut body = Vec::new();
        loop {
            let line = lines.next().ok_or("missing closing brace")?;
            if line == "}" {
                break;
            }
            body.push(parse_stmt(line, &mut lines)?);
        }

        if let Some(extra) = lines.next() {
            return Err(format!("trailing text: {extra}"));
        }
        Ok(Self { name, body })
    }

    /// Runs the function on `input` followed by a NUL terminator.
    ///
    /// Returns `None` when control falls off the end without a `return`.
    pub fn call(&self, input: &str) -> Option<i64> {
        let mut bytes = input.as_bytes().to_vec();
        bytes.push(0);
        let mut pos = 0;
        match exec_block(&self.body, &bytes, &mut pos) {
            Flow::Return(value) => Some(value),
            Flow::Normal => None,
            Flow::Break => panic!("break outside of switch"),
        }
    }
}

fn parse_stmt<'a, I: Iterator<Item = &'a str>>(line: &str, lines: &mut I) -> Result<Stmt, String> {
    if line == "switch (*str++) {" {
        let mut entries = Vec::new();
        loop {
            let line = lines.next().ok_or("unterminated switch")?;
            if line == "}" {
                return Ok(Stmt::Switch(entries));
            } else if line == "default:" {
                entries.push(Entry::Label(Label::Default));
            } else if let Some(literal) = line.strip_prefix("case ").and_then(|l| l.strip_suffix(':')) {
                entries.push(Entry::Label(Label::Byte(parse_literal(literal)?)));
            } else {
                entries.push(Entry::Stmt(parse_stmt(line, lines)?));
            }
        }
    } else if line == "break;" {
        Ok(Stmt::Break)
    } else if let Some(value) = line.strip_prefix("return ").and_then(|l| l.strip_suffix(';')) {
        value
            .parse()
            .map(Stmt::Return)
            .map_err(|e| format!("bad return value {value}: {e}"))
    } else {
        Err(format!("unexpected line: {line}"))
    }
}

fn parse_literal(literal: &str) -> Result<u8, String> {
    if literal == "0" {
        return Ok(0);
    }
    let inner = literal
        .strip_prefix('\'')
        .and_then(|l| l.strip_suffix('\''))
        .ok_or_else(|| format!("bad literal: {literal}"))?;

    match inner.as_bytes() {
        [byte] if *byte != b'\\' && *byte != b'\'' => Ok(*byte),
        [b'\\', b'\''] => Ok(b'\''),
        [b'\\', b'\\'] => Ok(b'\\'),
        [b'\\', b't'] => Ok(b'\t'),
        [b'\\', b'n'] => Ok(b'\n'),
        [b'\\', b'r'] => Ok(b'\r'),
        [b'\\', b'x', hex @ ..] => {
            let hex = std::str::from_utf8(hex).map_err(|e| e.to_string())?;
            u8::from_str_radix(hex, 16).map_err(|e| e.to_string())
        }
        _ => Err(format!("bad literal: {literal}")),
    }
}

fn exec_block(stmts: &[Stmt], input: &[u8], pos: &mut usize) -> Flow {
    for stmt in stmts {
        match exec_stmt(stmt, input, pos) {
            Flow::Normal => {}
            other => return other,
        }
    }
    Flow::Normal
}

fn exec_stmt(stmt: &Stmt, input: &[u8], pos: &mut usize) -> Flow {
    match stmt {
        Stmt::Return(value) => Flow::Return(*value),
        Stmt::Break => Flow::Break,
        Stmt::Switch(entries) => {
            let byte = *input.get(*pos).expect("read past the terminator");
            *pos += 1;

            let start = entries
                .iter()
                .position(|e| *e == Entry::Label(Label::Byte(byte)))
                .or_else(|| entries.iter().position(|e| *e == Entry::Label(Label::Default)));
            let Some(start) = start else {
                return Flow::Normal;
            };

            // Fall through labels until a break or return
            for entry in &entries[start..] {
                if let Entry::Stmt(stmt) = entry {
                    match exec_stmt(stmt, input, pos) {
                        Flow::Normal => {}
                        Flow::Break => return Flow::Normal,
                        Flow::Return(value) => return Flow::Return(value),
                    }
                }
            }
            Flow::Normal
        }
    }
}
