//! Source positions and end-position derivation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::Content;

/// A 1-based line/column location. Columns count Unicode scalar values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Moves past `text`. `\n`, `\r\n` and a lone `\r` each start a new line.
    pub fn advance(self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    line += 1;
                    column = 1;
                }
                _ => column += 1,
            }
        }
        Self { line, column }
    }

    pub const fn shift(self, columns: u32) -> Self {
        Self {
            line: self.line,
            column: self.column + columns,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Widths of punctuation a builder consumes without storing it in content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delimiters {
    pub open: u32,
    pub close: u32,
}

impl Delimiters {
    pub const NONE: Delimiters = Delimiters::new(0, 0);

    pub const fn new(open: u32, close: u32) -> Self {
        Self { open, close }
    }
}

/// Derives the exclusive end of a node from its start and content.
///
/// Leaf text is walked character by character after the opening delimiter;
/// a composite ends where its last child ends, plus the closing delimiter.
pub fn compute_end(content: &Content, start: Position, delimiters: Delimiters) -> Position {
    match content {
        Content::Leaf(text) => start
            .shift(delimiters.open)
            .advance(text)
            .shift(delimiters.close),
        Content::Composite(children) => match children.last() {
            Some(last) => last.end().shift(delimiters.close),
            None => start.shift(delimiters.open + delimiters.close),
        },
    }
}
