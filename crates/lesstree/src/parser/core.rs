//! Parser state and low-level token access.

use std::ops::Range;

use lesstree_core::{Node, NodeKind, Position};

use super::dispatch::StartSymbol;
use super::memo::{Cached, Match, MemoTable, Slot};
use crate::lexer::{Token, TokenKind, TokenSet};
use crate::{Error, Result};

/// Recognizer entry: token index in, matched length out (0 means no match).
pub(crate) type Scan<'t, 'src> = fn(&mut Parser<'t, 'src>, usize) -> usize;

/// One parse over a borrowed token stream.
///
/// Recognizers (`scan_*`/`match_*`) measure without consuming; builders
/// (`parse_*`) consume exactly what their recognizer measured. The memo
/// table lives as long as the parser and is dropped with it.
pub struct Parser<'t, 'src> {
    pub(super) tokens: &'t [Token<'src>],
    pub(super) pos: usize,
    pub(super) memo: MemoTable,
    pub(super) depth: u32,
    scan_depth: u32,
    scan_limit_hit: bool,
    recursion_fuel_limit: Option<u32>,
}

impl<'t, 'src> Parser<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Self {
            tokens,
            pos: 0,
            memo: MemoTable::new(tokens.len()),
            depth: 0,
            scan_depth: 0,
            scan_limit_hit: false,
            recursion_fuel_limit: None,
        }
    }

    /// Caps nesting of blocks, groups and argument lists. `None` (the
    /// default) means unlimited.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Parses the whole token stream as `start`.
    pub fn parse(mut self, start: StartSymbol) -> Result<Node> {
        tracing::debug!(%start, tokens = self.tokens.len(), "parse");

        if self.tokens.is_empty() {
            return match start {
                StartSymbol::Stylesheet => Ok(Node::composite(
                    NodeKind::Stylesheet,
                    Vec::new(),
                    Position::START,
                )),
                _ => Err(self.syntax_error(0)),
            };
        }

        let len = self.recognize(start, 0);
        if self.scan_limit_hit {
            return Err(Error::RecursionLimitExceeded);
        }
        if len < self.tokens.len() {
            return Err(self.syntax_error(len));
        }

        let node = self.build(start);
        if self.scan_limit_hit {
            return Err(Error::RecursionLimitExceeded);
        }
        let node = node?;
        self.assert_consumed_all();
        Ok(node)
    }

    pub(super) fn syntax_error(&self, i: usize) -> Error {
        let line = self
            .tokens
            .get(i)
            .or(self.tokens.last())
            .map_or(1, Token::line);
        tracing::debug!(line, index = i, "syntax error");
        Error::syntax(line)
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Runs a builder for the inside of a delimited group.
    pub(super) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.enter_recursion()?;
        let result = f(self);
        self.exit_recursion();
        result
    }

    /// Runs a recognizer for the inside of a construct that nests without
    /// bound. Past the recursion limit it reports no match and marks the
    /// parse as failed with [`Error::RecursionLimitExceeded`].
    pub(super) fn descend(&mut self, scan: impl FnOnce(&mut Self) -> usize) -> usize {
        if let Some(limit) = self.recursion_fuel_limit
            && self.scan_depth >= limit
        {
            tracing::debug!(limit, "recognizer recursion limit");
            self.scan_limit_hit = true;
            return 0;
        }
        self.scan_depth += 1;
        let len = scan(self);
        self.scan_depth -= 1;
        len
    }

    #[inline]
    pub(crate) fn kind_at(&self, i: usize) -> Option<TokenKind> {
        self.tokens.get(i).map(|t| t.kind)
    }

    #[inline]
    pub(crate) fn is(&self, i: usize, kind: TokenKind) -> bool {
        self.kind_at(i) == Some(kind)
    }

    #[inline]
    pub(crate) fn is_one_of(&self, i: usize, set: TokenSet) -> bool {
        self.kind_at(i).is_some_and(|kind| set.contains(kind))
    }

    /// Token text, empty past the end.
    #[inline]
    pub(crate) fn text_at(&self, i: usize) -> &'src str {
        self.tokens.get(i).map_or("", |t| t.text)
    }

    /// Index of the closer matching the `opener` at `i`.
    #[inline]
    pub(crate) fn closer_of(&self, i: usize, opener: TokenKind) -> Option<usize> {
        self.tokens
            .get(i)
            .filter(|t| t.kind == opener)
            .and_then(|t| t.closer)
    }

    /// Start of token `i`; past the end, where the last token ends.
    pub(crate) fn position_at(&self, i: usize) -> Position {
        match self.tokens.get(i) {
            Some(token) => token.start,
            None => self.tokens.last().map_or(Position::START, Token::end),
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> Position {
        self.position_at(self.pos)
    }

    pub(crate) fn join(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        self.tokens[start..end].iter().map(|t| t.text).collect()
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.bump_n(1);
    }

    #[inline]
    pub(crate) fn bump_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Joins the next `len` tokens into a leaf and consumes them.
    pub(crate) fn leaf(&mut self, kind: NodeKind, len: usize) -> Node {
        let start = self.current();
        let text = self.join(self.pos..self.pos + len);
        self.bump_n(len);
        Node::leaf(kind, text, start)
    }

    /// Looks `i` up in the memo table, running `scan` on a cold slot.
    pub(crate) fn memoized<T: Copy>(
        &mut self,
        i: usize,
        field: fn(&mut Slot) -> &mut Cached<T>,
        scan: impl FnOnce(&mut Self) -> Option<Match<T>>,
    ) -> Option<Match<T>> {
        if i >= self.tokens.len() {
            return None;
        }
        match *field(self.memo.slot(i)) {
            Cached::Hit(m) => return Some(m),
            Cached::Miss => return None,
            Cached::Unknown => {}
        }
        let result = scan(self);
        *field(self.memo.slot(i)) = result.into();
        result
    }

    /// [`Self::memoized`] for recognizers that only report a length.
    pub(crate) fn memoized_len(
        &mut self,
        i: usize,
        field: fn(&mut Slot) -> &mut Cached<()>,
        scan: impl FnOnce(&mut Self) -> usize,
    ) -> usize {
        self.memoized(i, field, |p| {
            let len = scan(p);
            (len > 0).then(|| Match::new(len, ()))
        })
        .map_or(0, |m| m.len())
    }

    /// Tries `alternatives` in order and tags the first that matches.
    pub(crate) fn first_match<T: Copy>(
        &mut self,
        i: usize,
        alternatives: &[(T, Scan<'t, 'src>)],
    ) -> Option<Match<T>> {
        alternatives.iter().find_map(|&(shape, scan)| {
            let len = scan(self, i);
            (len > 0).then(|| Match::new(len, shape))
        })
    }
}
