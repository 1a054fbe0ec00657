use lesstree_core::{Node, NodeKind};

use crate::Result;
use crate::lexer::TokenKind::*;
use crate::lexer::TokenSet;
use crate::parser::Parser;

const IDENT_START: TokenSet = TokenSet::new(&[HyphenMinus, Identifier, DollarSign, Asterisk]);

/// What may follow a leading underscore.
const LOW_LINE_TAIL: TokenSet = TokenSet::new(&[HyphenMinus, DecimalNumber, LowLine, Identifier]);

const OPERATORS: TokenSet = TokenSet::new(&[
    Solidus,
    Comma,
    Colon,
    EqualsSign,
    LessThanSign,
    GreaterThanSign,
    Asterisk,
]);

const UNARY: TokenSet = TokenSet::new(&[HyphenMinus, PlusSign]);

const STRINGS: TokenSet = TokenSet::new(&[StringDq, StringSq]);

/// Tokens that end an unquoted `url(...)` body.
const URI_RAW_STOP: TokenSet =
    TokenSet::new(&[Space, Tab, Newline, LeftParenthesis, RightParenthesis]);

const PROGID_PREFIX: &str = "progid:DXImageTransform.Microsoft.";

impl Parser<'_, '_> {
    pub(crate) fn scan_ident(&mut self, i: usize) -> usize {
        self.memoized_len(i, |slot| &mut slot.ident, |p| p.scan_ident_uncached(i))
    }

    fn scan_ident_uncached(&mut self, i: usize) -> usize {
        let Some(first) = self.kind_at(i) else {
            return 0;
        };
        if first == LowLine {
            let mut j = i + 1;
            while self.is_one_of(j, LOW_LINE_TAIL) {
                j += 1;
            }
            return j - i;
        }
        if !IDENT_START.contains(first) {
            return 0;
        }

        let mut was_ident = first == Identifier;
        let mut j = i + 1;
        while j < self.tokens.len() {
            j += self.scan_interpolated_variable(j);
            let Some(kind) = self.kind_at(j) else {
                break;
            };
            match kind {
                HyphenMinus | LowLine => {}
                Identifier => was_ident = true,
                DecimalNumber if was_ident => {}
                _ => break,
            }
            j += 1;
        }

        // `-` and `$` runs need a name; `*` stands alone.
        if !was_ident && first != Asterisk {
            return 0;
        }
        j - i
    }

    pub(crate) fn parse_ident(&mut self) -> Node {
        let len = self.scan_ident(self.pos);
        self.assert_matched(len, "ident");
        self.leaf(NodeKind::Ident, len)
    }

    /// `10`, `10.`, `.10`, `10.10`
    pub(crate) fn scan_number(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.number,
            |p| {
                if p.is(i, DecimalNumber) {
                    if !p.is(i + 1, FullStop) {
                        1
                    } else if !p.is(i + 2, DecimalNumber) {
                        2
                    } else {
                        3
                    }
                } else if p.is(i, FullStop) && p.is(i + 1, DecimalNumber) {
                    2
                } else {
                    0
                }
            },
        )
    }

    pub(crate) fn parse_number(&mut self) -> Node {
        let len = self.scan_number(self.pos);
        self.leaf(NodeKind::Number, len)
    }

    /// Unit of a dimension, name of a color: an identifier, or digits
    /// optionally glued to one.
    fn scan_unit(&self, i: usize) -> usize {
        match self.kind_at(i) {
            Some(Identifier) => 1,
            Some(DecimalNumber) if self.is(i + 1, Identifier) => 2,
            Some(DecimalNumber) => 1,
            _ => 0,
        }
    }

    pub(crate) fn scan_dimension(&mut self, i: usize) -> usize {
        let number = self.scan_number(i);
        if number == 0 {
            return 0;
        }
        match self.scan_unit(i + number) {
            0 => 0,
            unit => number + unit,
        }
    }

    pub(crate) fn parse_dimension(&mut self) -> Node {
        let start = self.current();
        let number = self.parse_number();
        let unit_len = self.scan_unit(self.pos);
        let unit = self.leaf(NodeKind::Ident, unit_len);
        Node::composite(NodeKind::Dimension, vec![number, unit], start)
    }

    pub(crate) fn scan_percentage(&mut self, i: usize) -> usize {
        let number = self.scan_number(i);
        if number > 0 && self.is(i + number, PercentSign) {
            number + 1
        } else {
            0
        }
    }

    pub(crate) fn parse_percentage(&mut self) -> Node {
        let start = self.current();
        let number = self.parse_number();
        self.bump(); // `%`
        Node::composite(NodeKind::Percentage, vec![number], start)
    }

    pub(crate) fn scan_string(&mut self, i: usize) -> usize {
        usize::from(self.is_one_of(i, STRINGS))
    }

    /// Quotes stay in the text.
    pub(crate) fn parse_string(&mut self) -> Node {
        self.leaf(NodeKind::String, 1)
    }

    /// `~"..."`
    pub(crate) fn scan_escaped_string(&mut self, i: usize) -> usize {
        if self.is(i, Tilde) && self.scan_string(i + 1) > 0 {
            2
        } else {
            0
        }
    }

    pub(crate) fn parse_escaped_string(&mut self) -> Node {
        let start = self.current();
        let text = self.text_at(self.pos + 1);
        self.bump_n(2);
        Node::leaf(NodeKind::EscapedString, text, start)
    }

    pub(crate) fn scan_unary(&mut self, i: usize) -> usize {
        usize::from(self.is_one_of(i, UNARY))
    }

    pub(crate) fn parse_unary(&mut self) -> Node {
        self.leaf(NodeKind::Unary, 1)
    }

    pub(crate) fn scan_operator(&mut self, i: usize) -> usize {
        usize::from(self.is_one_of(i, OPERATORS))
    }

    pub(crate) fn parse_operator(&mut self) -> Node {
        self.leaf(NodeKind::Operator, 1)
    }

    pub(crate) fn scan_delim(&mut self, i: usize) -> usize {
        usize::from(self.is(i, Comma))
    }

    pub(crate) fn parse_delim(&mut self) -> Node {
        self.leaf(NodeKind::Delimiter, 1)
    }

    pub(crate) fn scan_decl_delim(&mut self, i: usize) -> usize {
        usize::from(self.is(i, Semicolon))
    }

    pub(crate) fn parse_decl_delim(&mut self) -> Node {
        self.leaf(NodeKind::DeclarationDelimiter, 1)
    }

    pub(crate) fn scan_property_delim(&mut self, i: usize) -> usize {
        usize::from(self.is(i, Colon))
    }

    pub(crate) fn parse_property_delim(&mut self) -> Node {
        self.leaf(NodeKind::PropertyDelimiter, 1)
    }

    pub(crate) fn scan_namespace(&mut self, i: usize) -> usize {
        usize::from(self.is(i, VerticalLine))
    }

    pub(crate) fn parse_namespace(&mut self) -> Node {
        self.leaf(NodeKind::Namespace, 1)
    }

    pub(crate) fn scan_parent_selector(&mut self, i: usize) -> usize {
        usize::from(self.is(i, Ampersand))
    }

    pub(crate) fn parse_parent_selector(&mut self) -> Node {
        self.leaf(NodeKind::ParentSelector, 1)
    }

    /// `!important`, spacing allowed after the `!`.
    pub(crate) fn scan_important(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.important,
            |p| {
                if !p.is(i, ExclamationMark) {
                    return 0;
                }
                let j = i + 1 + p.scan_sc(i + 1);
                if p.text_at(j) == "important" {
                    j + 1 - i
                } else {
                    0
                }
            },
        )
    }

    pub(crate) fn parse_important(&mut self) -> Node {
        let len = self.scan_important(self.pos);
        self.leaf(NodeKind::Important, len)
    }

    /// `#fff` in value position.
    pub(crate) fn scan_color(&mut self, i: usize) -> usize {
        if !self.is(i, NumberSign) {
            return 0;
        }
        match self.scan_unit(i + 1) {
            0 => 0,
            len => len + 1,
        }
    }

    pub(crate) fn parse_color(&mut self) -> Node {
        let start = self.current();
        self.bump(); // `#`
        let len = self.scan_unit(self.pos);
        let text = self.join(self.pos..self.pos + len);
        self.bump_n(len);
        Node::leaf(NodeKind::Color, text, start)
    }

    /// `progid:DXImageTransform.Microsoft.Name(...)`, kept verbatim.
    pub(crate) fn scan_progid(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.progid,
            |p| {
                let mut j = i + 6;
                if j > p.tokens.len() || p.join(i..j) != PROGID_PREFIX {
                    return 0;
                }
                j += p.scan_ident(j);
                j += p.scan_sc(j);
                match p.closer_of(j, LeftParenthesis) {
                    Some(close) => close + 1 - i,
                    None => 0,
                }
            },
        )
    }

    pub(crate) fn parse_progid(&mut self) -> Node {
        let len = self.scan_progid(self.pos);
        self.leaf(NodeKind::Progid, len)
    }

    pub(crate) fn scan_uri(&mut self, i: usize) -> usize {
        if !self.is(i, Identifier) || self.text_at(i) != "url" {
            return 0;
        }
        match self.closer_of(i + 1, LeftParenthesis) {
            Some(close) => close + 1 - i,
            None => 0,
        }
    }

    /// `url("a.png")` holds the string and its spacing; `url(a.png)` holds
    /// the raw body as one `Raw` leaf.
    pub(crate) fn parse_uri(&mut self) -> Result<Node> {
        let start = self.current();
        let close = self.pos + self.scan_uri(self.pos) - 1;
        self.bump_n(2); // `url(`

        let mut content = self.parse_sc();
        if self.scan_string(self.pos) > 0 {
            content.push(self.parse_string());
        } else {
            let raw_start = self.current();
            let from = self.pos;
            while self.pos < close && !self.is_one_of(self.pos, URI_RAW_STOP) {
                self.bump();
            }
            let text = self.join(from..self.pos);
            content.push(Node::leaf(NodeKind::Raw, text, raw_start));
        }
        content.extend(self.parse_sc());

        if self.pos != close {
            return Err(self.syntax_error(self.pos));
        }
        self.bump(); // `)`
        Ok(Node::composite(NodeKind::Uri, content, start))
    }

    /// `expression(...)`, body kept as raw text.
    pub(crate) fn scan_expression(&mut self, i: usize) -> usize {
        if self.text_at(i) != "expression" {
            return 0;
        }
        match self.closer_of(i + 1, LeftParenthesis) {
            Some(close) => close + 1 - i,
            None => 0,
        }
    }

    pub(crate) fn parse_expression(&mut self) -> Node {
        let start = self.current();
        let close = self.pos + self.scan_expression(self.pos) - 1;
        let text = self.join(self.pos + 2..close);
        self.pos = close + 1;
        Node::leaf(NodeKind::Expression, text, start)
    }
}
