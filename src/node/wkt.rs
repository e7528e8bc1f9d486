//! WKT grammar parsing and serialization for node trees

use log::debug;

use crate::node::SrsNode;
use crate::srs::errors::{SrsError, SrsResult};

/// Deepest nesting level accepted by the parser
pub const MAX_NESTING_DEPTH: usize = 10;

/// Largest number of nodes accepted in one definition
pub const MAX_NODE_COUNT: usize = 1000;

/// Longest single token accepted by the parser, in characters
pub const MAX_TOKEN_LENGTH: usize = 511;

/// Cursor over WKT input
struct WktCursor {
    chars: Vec<char>,
    pos: usize,
    nodes: usize,
}

impl WktCursor {
    fn new(source: &str) -> Self {
        WktCursor {
            chars: source.chars().collect(),
            pos: 0,
            nodes: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn remaining(&self) -> String {
        self.chars[self.pos.min(self.chars.len())..].iter().collect()
    }
}

impl SrsNode {
    /// Parse a WKT definition into this node, replacing its contents
    ///
    /// # Arguments
    /// * `input` - WKT text
    ///
    /// # Returns
    /// The unconsumed remainder of the input, or `CorruptData` when the text
    /// is malformed, truncated, too deeply nested or too large
    pub fn import_from_wkt(&mut self, input: &str) -> SrsResult<String> {
        let mut cursor = WktCursor::new(input);
        self.parse_node(&mut cursor, 0)?;
        Ok(cursor.remaining())
    }

    fn parse_node(&mut self, cursor: &mut WktCursor, depth: usize) -> SrsResult<()> {
        if depth == MAX_NESTING_DEPTH {
            return Err(SrsError::CorruptData(format!(
                "Too many nesting levels in WKT (limit {})",
                MAX_NESTING_DEPTH
            )));
        }

        self.clear_children();

        let mut token = String::new();
        let mut token_len = 0;
        let mut in_quotes = false;

        while let Some(c) = cursor.peek() {
            if token_len >= MAX_TOKEN_LENGTH {
                return Err(SrsError::CorruptData(format!(
                    "WKT token longer than {} characters",
                    MAX_TOKEN_LENGTH
                )));
            }

            if c == '"' {
                in_quotes = !in_quotes;
            } else if !in_quotes && matches!(c, '[' | ']' | ',' | '(' | ')') {
                break;
            } else if !in_quotes && matches!(c, ' ' | '\t' | '\n' | '\r') {
                // unquoted whitespace is dropped
            } else {
                token.push(c);
                token_len += 1;
            }
            cursor.pos += 1;
        }

        if cursor.peek().is_none() {
            return Err(SrsError::CorruptData(
                "Unexpected end of WKT input".to_string(),
            ));
        }

        self.set_value(&token);

        if matches!(cursor.peek(), Some('[') | Some('(')) {
            loop {
                // skip the opening bracket or the separating comma
                cursor.pos += 1;

                cursor.nodes += 1;
                if cursor.nodes > MAX_NODE_COUNT {
                    return Err(SrsError::CorruptData(format!(
                        "Too many nodes in WKT (limit {})",
                        MAX_NODE_COUNT
                    )));
                }

                let mut child = SrsNode::default();
                child.parse_node(cursor, depth + 1)?;
                self.add_child(child);

                cursor.skip_whitespace();
                if cursor.peek() != Some(',') {
                    break;
                }
            }

            match cursor.peek() {
                Some(']') | Some(')') => cursor.pos += 1,
                other => {
                    debug!("WKT parse stopped at {:?} while closing {}", other, self.value());
                    return Err(SrsError::CorruptData(format!(
                        "Missing closing bracket after {}",
                        self.value()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Whether this node is written in double quotes
    ///
    /// # Arguments
    /// * `parent` - Value of the parent node, if any
    /// * `index` - Position of this node among its parent's children
    pub fn needs_quoting(&self, parent: Option<&str>, index: usize) -> bool {
        if !self.is_leaf() {
            return false;
        }

        if let Some(parent) = parent {
            if parent.eq_ignore_ascii_case("AUTHORITY") {
                return true;
            }
            if parent.eq_ignore_ascii_case("AXIS") && index != 0 {
                return false;
            }
        }

        let value = self.value();
        if value.starts_with('e') || value.starts_with('E') {
            return true;
        }

        value
            .chars()
            .any(|c| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
    }

    /// Serialize this subtree as single-line WKT
    pub fn export_to_wkt(&self) -> String {
        let mut out = String::new();
        self.write_wkt(None, 0, &mut out);
        out
    }

    fn write_wkt(&self, parent: Option<&str>, index: usize, out: &mut String) {
        self.write_value(parent, index, out);

        if self.is_leaf() {
            return;
        }

        out.push('[');
        for (i, child) in self.children().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            child.write_wkt(Some(self.value()), i, out);
        }
        out.push(']');
    }

    /// Serialize this subtree as indented WKT
    ///
    /// # Arguments
    /// * `depth` - Nesting depth of this node; the root is written at depth 1
    pub fn export_to_pretty_wkt(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write_pretty_wkt(None, 0, depth, &mut out);
        out
    }

    fn write_pretty_wkt(&self, parent: Option<&str>, index: usize, depth: usize, out: &mut String) {
        self.write_value(parent, index, out);

        if self.is_leaf() {
            return;
        }

        out.push('[');
        let count = self.child_count();
        for (i, child) in self.children().iter().enumerate() {
            if !child.is_leaf() {
                out.push('\n');
                out.push_str(&" ".repeat(4 * depth));
            }
            child.write_pretty_wkt(Some(self.value()), i, depth + 1, out);
            if i + 1 < count {
                out.push(',');
            }
        }
        out.push(']');
    }

    fn write_value(&self, parent: Option<&str>, index: usize, out: &mut String) {
        if self.needs_quoting(parent, index) {
            out.push('"');
            out.push_str(self.value());
            out.push('"');
        } else {
            out.push_str(self.value());
        }
    }
}
