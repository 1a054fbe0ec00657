//! Recognizer/builder parser for LESS.
//!
//! # Architecture
//!
//! Every production comes as a pair:
//!
//! - `scan_*` / `match_*` look ahead from a token index and report how many
//!   tokens the production covers (0 means no match). Productions with more
//!   than one shape also report the shape that matched.
//! - `parse_*` starts at the cursor, consumes what its recognizer measured
//!   and returns the node.
//!
//! Recognizers never move the cursor. Their answers are stored in a side
//! table keyed by token index, so repeated lookahead from the same place is
//! a table read and the overall parse stays linear in practice.
//!
//! Alternatives are tried in a fixed order and the first match wins. A shape
//! that matches is never retried as another shape if something deeper fails.
//!
//! There is no recovery: the first token no production accounts for aborts
//! the parse with [`Error::Syntax`](crate::Error::Syntax).

mod core;
mod dispatch;
mod grammar;
mod invariants;
mod memo;
mod shapes;

#[cfg(test)]
mod tests;

pub use core::Parser;
pub use dispatch::StartSymbol;

use lesstree_core::Node;

use crate::Result;
use crate::lexer::{Token, lex};

/// Parses `tokens` as `start`. The production must cover every token.
pub fn parse(tokens: &[Token<'_>], start: StartSymbol) -> Result<Node> {
    Parser::new(tokens).parse(start)
}

/// Lexes and parses `source` as `start`.
pub fn parse_str(source: &str, start: StartSymbol) -> Result<Node> {
    let tokens = lex(source);
    parse(&tokens, start)
}
