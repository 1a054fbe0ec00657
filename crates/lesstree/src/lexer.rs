//! Lexer for LESS source.
//!
//! Produces the token stream the parser reads: every token carries its text,
//! its start position, and the indices filled in by the marking pass
//! ([`Token::closer`] for brackets, [`Token::run_end`] for whitespace runs).
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into single `Garbage`
//! tokens, and so is an unterminated block comment. No production matches
//! `Garbage`, so it surfaces as a syntax error at parse time. An unterminated
//! string lexes as a lone quote token followed by ordinary tokens, which no
//! string production accepts either.

use std::ops::Range;

use logos::Logos;
use serde::Serialize;

use crate::Position;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum TokenKind {
    #[regex(r"[ \x0C]+")]
    Space = 0,

    #[token("\t")]
    Tab,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    #[token("/*", block_comment)]
    CommentMl,

    #[regex(r"//[^\n\r]*", allow_greedy = true)]
    CommentSl,

    #[regex(r#""(?:[^"\\]|\\(?:.|\n))*""#, allow_greedy = true)]
    StringDq,

    #[regex(r"'(?:[^'\\]|\\(?:.|\n))*'", allow_greedy = true)]
    StringSq,

    #[regex(r"[0-9]+")]
    DecimalNumber,

    /// Anything up to the next punctuation or whitespace character. Digits may
    /// follow the first character; a backslash escapes the next one.
    #[regex(
        r"[^ \t\n\r\x0C\x21-\x2F\x3A-\x40\x5B-\x5E\x5F\x60\x7B-\x7E0-9](?:[^ \t\n\r\x0C\x21-\x2F\x3A-\x40\x5B-\x5E\x5F\x60\x7B-\x7E]|\\[^\n\r])*",
        allow_greedy = true
    )]
    Identifier,

    #[token("!")]
    ExclamationMark,
    #[token("\"")]
    QuotationMark,
    #[token("#")]
    NumberSign,
    #[token("$")]
    DollarSign,
    #[token("%")]
    PercentSign,
    #[token("&")]
    Ampersand,
    #[token("'")]
    Apostrophe,
    #[token("(")]
    LeftParenthesis,
    #[token(")")]
    RightParenthesis,
    #[token("*")]
    Asterisk,
    #[token("+")]
    PlusSign,
    #[token(",")]
    Comma,
    #[token("-")]
    HyphenMinus,
    #[token(".")]
    FullStop,
    #[token("/")]
    Solidus,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("<")]
    LessThanSign,
    #[token("=")]
    EqualsSign,
    #[token(">")]
    GreaterThanSign,
    #[token("?")]
    QuestionMark,
    #[token("@")]
    CommercialAt,
    #[token("[")]
    LeftSquareBracket,
    #[token("\\")]
    ReverseSolidus,
    #[token("]")]
    RightSquareBracket,
    #[token("^")]
    CircumflexAccent,
    #[token("_")]
    LowLine,
    #[token("`")]
    GraveAccent,
    #[token("{")]
    LeftCurlyBracket,
    #[token("|")]
    VerticalLine,
    #[token("}")]
    RightCurlyBracket,
    #[token("~")]
    Tilde,

    /// Coalesced unrecognized input
    Garbage,
}

use TokenKind::*;

impl TokenKind {
    #[inline]
    pub fn is_whitespace(self) -> bool {
        matches!(self, Space | Tab | Newline)
    }
}

/// Consumes through the closing `*/`. An unterminated comment swallows the
/// rest of the input and is reported as an error.
fn block_comment(lexer: &mut logos::Lexer<'_, TokenKind>) -> bool {
    let rest = lexer.remainder();
    match rest.find("*/") {
        Some(idx) => {
            lexer.bump(idx + 2);
            true
        }
        None => {
            lexer.bump(rest.len());
            false
        }
    }
}

/// 64-bit bitset of `TokenKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u8;
            assert!(kind < 64, "TokenKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u8;
        kind < 64 && self.0 & (1 << kind) != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub start: Position,
    /// For `(`, `[` and `{`: index of the matching closer, if any.
    pub closer: Option<usize>,
    /// For whitespace: index of the last whitespace token of the run.
    pub run_end: Option<usize>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, start: Position) -> Self {
        Self {
            kind,
            text,
            start,
            closer: None,
            run_end: None,
        }
    }

    pub fn line(&self) -> u32 {
        self.start.line
    }

    pub fn column(&self) -> u32 {
        self.start.column
    }

    pub fn end(&self) -> Position {
        self.start.advance(self.text)
    }
}

/// Tokenizes `source` and runs the marking pass.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let mut spans = Vec::new();
    let mut url_mode = false;
    lex_range(source, 0..source.len(), &mut url_mode, &mut spans);

    let mut tokens = Vec::with_capacity(spans.len());
    let mut position = Position::START;
    for (kind, span) in spans {
        let text = &source[span];
        tokens.push(Token::new(kind, text, position));
        position = position.advance(text);
    }

    mark_brackets(&mut tokens);
    mark_whitespace_runs(&mut tokens);
    tracing::trace!(tokens = tokens.len(), "lexed");
    tokens
}

/// Lexes `source[range]`, appending `(kind, absolute span)` pairs.
///
/// Between the identifier `url` and the next `)`, `//` starts no comment: the
/// comment token is split back into two solidi and its tail is lexed again.
fn lex_range(
    source: &str,
    range: Range<usize>,
    url_mode: &mut bool,
    out: &mut Vec<(TokenKind, Range<usize>)>,
) {
    let base = range.start;
    let mut lexer = TokenKind::lexer(&source[range]);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                let span = lexer.span();
                let span = base + span.start..base + span.end;
                if let Some(start) = error_start.take() {
                    out.push((Garbage, start..span.start));
                }

                match kind {
                    CommentSl if *url_mode => {
                        out.push((Solidus, span.start..span.start + 1));
                        out.push((Solidus, span.start + 1..span.start + 2));
                        lex_range(source, span.start + 2..span.end, url_mode, out);
                        continue;
                    }
                    Identifier if &source[span.clone()] == "url" => *url_mode = true,
                    RightParenthesis => *url_mode = false,
                    _ => {}
                }
                out.push((kind, span));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(base + lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    out.push((Garbage, start..base + lexer.source().len()));
                }
                break;
            }
        }
    }
}

/// Links each opener to its closer, one stack per bracket type.
fn mark_brackets(tokens: &mut [Token<'_>]) {
    let mut parens = Vec::new();
    let mut squares = Vec::new();
    let mut curlies = Vec::new();

    for i in 0..tokens.len() {
        let (stack, is_open) = match tokens[i].kind {
            LeftParenthesis => (&mut parens, true),
            RightParenthesis => (&mut parens, false),
            LeftSquareBracket => (&mut squares, true),
            RightSquareBracket => (&mut squares, false),
            LeftCurlyBracket => (&mut curlies, true),
            RightCurlyBracket => (&mut curlies, false),
            _ => continue,
        };
        if is_open {
            stack.push(i);
        } else if let Some(open) = stack.pop() {
            tokens[open].closer = Some(i);
        }
    }
}

fn mark_whitespace_runs(tokens: &mut [Token<'_>]) {
    let mut i = 0;
    while i < tokens.len() {
        if !tokens[i].kind.is_whitespace() {
            i += 1;
            continue;
        }
        let mut last = i;
        while last + 1 < tokens.len() && tokens[last + 1].kind.is_whitespace() {
            last += 1;
        }
        for token in &mut tokens[i..=last] {
            token.run_end = Some(last);
        }
        i = last + 1;
    }
}
