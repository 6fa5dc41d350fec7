// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lenient recursive-descent parser for boolean queries.
//!
//! ```text
//! or      := and ( "||" and )*
//! and     := not ( ("&&" | juxtaposition) not )*
//! not     := "!" not | primary
//! primary := "(" or ")" | term
//! term    := letters, digits, '-', '_' (Cyrillic letters included)
//! ```
//!
//! Juxtaposition: after an operand, anything that could start another one —
//! a letter, digit, `(`, `!`, or a non-ASCII byte — continues the AND chain,
//! unless the next two bytes are `||`. That makes `кот собака` mean
//! `кот && собака` while keeping `кот || собака` an OR.
//!
//! The parser never fails. Unmatched `)` is discarded, unmatched `(` ends at
//! end of input with whatever parsed, and empty input is `None`.

use super::ast::QueryNode;

/// Byte-cursor parser over one query string.
pub struct QueryParser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> QueryParser<'a> {
    /// Parse a query. `None` means there was nothing to evaluate.
    pub fn parse(query: &'a str) -> Option<QueryNode> {
        let mut parser = Self {
            input: query.as_bytes(),
            pos: 0,
        };
        parser.skip_whitespace();
        if parser.pos >= parser.input.len() {
            return None;
        }
        parser.parse_or()
    }

    fn peek(&self) -> u8 {
        self.input.get(self.pos).copied().unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn match_token(&mut self, token: &[u8]) -> bool {
        self.skip_whitespace();
        if self.input[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Option<QueryNode> {
        let left = self.parse_and()?;
        let mut operands = vec![left];

        while self.match_token(b"||") {
            if let Some(right) = self.parse_and() {
                operands.push(right);
            }
        }

        Some(collapse(operands, QueryNode::Or))
    }

    fn parse_and(&mut self) -> Option<QueryNode> {
        let left = self.parse_not()?;
        let mut operands = vec![left];

        loop {
            if self.match_token(b"&&") {
                if let Some(right) = self.parse_not() {
                    operands.push(right);
                }
            } else {
                self.skip_whitespace();
                let c = self.peek();
                let could_start_operand =
                    c == b'!' || c == b'(' || c.is_ascii_alphanumeric() || c >= 0x80;

                if could_start_operand && !self.input[self.pos..].starts_with(b"||") {
                    if let Some(right) = self.parse_not() {
                        operands.push(right);
                        continue;
                    }
                }
                break;
            }
        }

        Some(collapse(operands, QueryNode::And))
    }

    fn parse_not(&mut self) -> Option<QueryNode> {
        self.skip_whitespace();
        if self.peek() == b'!' {
            self.pos += 1;
            return self
                .parse_not()
                .map(|operand| QueryNode::Not(Box::new(operand)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Option<QueryNode> {
        self.skip_whitespace();

        if self.peek() == b'(' {
            self.pos += 1;
            let expr = self.parse_or();
            self.skip_whitespace();
            if self.peek() == b')' {
                self.pos += 1;
            }
            return expr;
        }

        let term = self.read_term();
        if term.is_empty() {
            None
        } else {
            Some(QueryNode::Term(term))
        }
    }

    fn read_term(&mut self) -> String {
        self.skip_whitespace();
        let mut term = Vec::new();

        while self.pos < self.input.len() {
            let b = self.input[self.pos];
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
                term.push(b);
                self.pos += 1;
            } else if is_cyrillic_pair(self.input, self.pos) {
                term.push(b);
                term.push(self.input[self.pos + 1]);
                self.pos += 2;
            } else {
                break;
            }
        }

        String::from_utf8_lossy(&term).into_owned()
    }
}

/// Two-byte Cyrillic letter at `pos`: А-Я, а-я, Ё, or ё.
fn is_cyrillic_pair(input: &[u8], pos: usize) -> bool {
    let Some(&b2) = input.get(pos + 1) else {
        return false;
    };
    matches!(
        (input[pos], b2),
        (0xD0, 0x90..=0xBF) | (0xD1, 0x80..=0x8F) | (0xD0, 0x81) | (0xD1, 0x91)
    )
}

fn collapse(mut operands: Vec<QueryNode>, wrap: fn(Vec<QueryNode>) -> QueryNode) -> QueryNode {
    if operands.len() == 1 {
        operands.swap_remove(0)
    } else {
        wrap(operands)
    }
}
