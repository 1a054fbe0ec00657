//! lesstree: a parser for LESS stylesheets.
//!
//! Source is split into tokens by [`lexer::lex`], then a start symbol picks
//! the production that must cover the whole token stream.
//!
//! # Example
//!
//! ```
//! use lesstree::{NodeKind, StartSymbol, parse_str};
//!
//! let tree = parse_str(".a { color: red; }", StartSymbol::Stylesheet).unwrap();
//! assert_eq!(tree.kind(), NodeKind::Stylesheet);
//! assert_eq!(tree.children()[0].kind(), NodeKind::Ruleset);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod lexer;
pub mod parser;


pub use lesstree_core::{Content, Delimiters, Node, NodeKind, Position, compute_end};
pub use lexer::{Token, TokenKind};
pub use parser::{Parser, StartSymbol, parse, parse_str};

/// Label carried by every syntax error.
pub const SYNTAX: &str = "less";

/// Errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input does not match the selected production.
    #[error("{syntax} syntax error at line {line}")]
    Syntax { line: u32, syntax: &'static str },

    /// Recursion limit exceeded (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("unknown start symbol `{0}`")]
    UnknownStartSymbol(String),
}

impl Error {
    pub fn syntax(line: u32) -> Self {
        Error::Syntax {
            line,
            syntax: SYNTAX,
        }
    }

    /// Line of a syntax error.
    pub fn line(&self) -> Option<u32> {
        match self {
            Error::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
