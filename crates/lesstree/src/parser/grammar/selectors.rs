//! Selectors: lists, compounds, simple parts and combinators.

use lesstree_core::{Node, NodeKind};

use crate::lexer::TokenKind::*;
use crate::lexer::TokenSet;
use crate::parser::Parser;
use crate::parser::memo::Match;
use crate::parser::shapes::{
    AttributeSelectorShape, CompoundShape, NameKind, NamePrefixShape, PseudoClassShape,
    SelectorShape,
};

const SINGLE_COMBINATORS: TokenSet = TokenSet::new(&[PlusSign, GreaterThanSign, Tilde]);

const SIGNS: TokenSet = TokenSet::new(&[PlusSign, HyphenMinus]);

/// First token of a two-character attribute match such as `^=`.
const ATTRIBUTE_MATCH_PREFIX: TokenSet = TokenSet::new(&[
    Tilde,
    VerticalLine,
    CircumflexAccent,
    DollarSign,
    Asterisk,
]);

impl Parser<'_, '_> {
    /// `selector (, selector)*`
    pub(crate) fn scan_selectors_group(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.selectors_group,
            |p| {
                let first = p.scan_selector(i);
                if first == 0 {
                    return 0;
                }
                let mut j = i + first;
                loop {
                    let mut k = j + p.scan_sc(j);
                    if !p.is(k, Comma) {
                        break;
                    }
                    k += 1;
                    k += p.scan_sc(k);
                    match p.scan_selector(k) {
                        0 => break,
                        len => j = k + len,
                    }
                }
                j - i
            },
        )
    }

    pub(crate) fn parse_selectors_group(&mut self) -> Vec<Node> {
        let from = self.pos;
        let end = self.pos + self.scan_selectors_group(self.pos);
        let mut nodes = vec![self.parse_selector()];
        while self.pos < end {
            nodes.extend(self.parse_sc());
            nodes.push(self.parse_delim());
            nodes.extend(self.parse_sc());
            nodes.push(self.parse_selector());
        }
        self.assert_consumed(from, end - from, "selectors group");
        nodes
    }

    fn match_selector(&mut self, i: usize) -> Option<Match<SelectorShape>> {
        self.memoized(
            i,
            |slot| &mut slot.selector,
            |p| {
                let compound = p.scan_compound(i);
                if compound > 0 {
                    let mut j = i + compound;
                    loop {
                        let mut spacing = p.scan_sc(j);
                        let combinator = p.scan_combinator(j + spacing);
                        if spacing == 0 && combinator == 0 {
                            break;
                        }
                        if combinator > 0 {
                            j += spacing + combinator;
                            spacing = p.scan_sc(j);
                        }
                        match p.scan_compound(j + spacing) {
                            0 => break,
                            len => j += spacing + len,
                        }
                    }
                    return Some(Match::new(j - i, SelectorShape::Compound));
                }

                let combinator = p.scan_combinator(i);
                if combinator == 0 {
                    return None;
                }
                let mut j = i + combinator;
                loop {
                    let before = p.scan_sc(j);
                    match p.scan_compound(j + before) {
                        0 => break,
                        len => j += before + len,
                    }
                    let after = p.scan_sc(j);
                    match p.scan_combinator(j + after) {
                        0 => break,
                        len => j += after + len,
                    }
                }
                Some(Match::new(j - i, SelectorShape::Combinator))
            },
        )
    }

    pub(crate) fn scan_selector(&mut self, i: usize) -> usize {
        self.match_selector(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_selector(&mut self) -> Node {
        let start = self.current();
        let end = self.pos + self.scan_selector(self.pos);
        let mut content = Vec::new();
        while self.pos < end {
            if self.scan_sc(self.pos) > 0 {
                content.extend(self.parse_sc());
            } else if self.scan_combinator(self.pos) > 0 {
                content.push(self.parse_combinator());
            } else {
                content.push(self.parse_compound());
            }
        }
        Node::composite(NodeKind::Selector, content, start)
    }

    fn match_compound(&mut self, i: usize) -> Option<Match<CompoundShape>> {
        self.memoized(
            i,
            |slot| &mut slot.compound,
            |p| {
                let (mut j, shape) = match p.scan_type_selector(i) {
                    0 => match p.scan_parent_selector_with_extension(i) {
                        0 => (i, CompoundShape::Untyped),
                        len => (i + len, CompoundShape::Typed),
                    },
                    len => (i + len, CompoundShape::Typed),
                };
                loop {
                    match p.scan_compound_part(j) {
                        0 => break,
                        len => j += len,
                    }
                }
                (j > i).then(|| Match::new(j - i, shape))
            },
        )
    }

    pub(crate) fn scan_compound(&mut self, i: usize) -> usize {
        self.match_compound(i).map_or(0, |m| m.len())
    }

    fn scan_compound_part(&mut self, i: usize) -> usize {
        let id = self.scan_id(i);
        if id > 0 {
            return id;
        }
        let class = self.scan_class(i);
        if class > 0 {
            return class;
        }
        let attribute = self.scan_attribute_selector(i);
        if attribute > 0 {
            return attribute;
        }
        self.scan_pseudo(i)
    }

    pub(crate) fn parse_compound(&mut self) -> Node {
        let start = self.current();
        let m = self.match_compound(self.pos);
        let len = m.map_or(0, |m| m.len());
        self.assert_matched(len, "compound selector");
        let from = self.pos;
        let mut content = Vec::new();
        if m.is_some_and(|m| m.shape == CompoundShape::Typed) {
            if self.scan_type_selector(self.pos) > 0 {
                content.push(self.parse_type_selector());
            } else {
                content.extend(self.parse_parent_selector_with_extension());
            }
        }
        loop {
            let node = if self.scan_id(self.pos) > 0 {
                self.parse_id()
            } else if self.scan_class(self.pos) > 0 {
                self.parse_class()
            } else if self.scan_attribute_selector(self.pos) > 0 {
                self.parse_attribute_selector()
            } else if self.scan_pseudo(self.pos) > 0 {
                self.parse_pseudo()
            } else {
                break;
            };
            content.push(node);
        }
        self.assert_consumed(from, len, "compound selector");
        Node::composite(NodeKind::CompoundSelector, content, start)
    }

    /// Optional name prefix, then `*` or a name.
    pub(crate) fn scan_type_selector(&mut self, i: usize) -> usize {
        let j = i + self.scan_name_prefix(i);
        if self.is(j, Asterisk) {
            return j + 1 - i;
        }
        match self.scan_ident(j) {
            0 => 0,
            len => j + len - i,
        }
    }

    pub(crate) fn parse_type_selector(&mut self) -> Node {
        let start = self.current();
        let mut content = Vec::new();
        if self.scan_name_prefix(self.pos) > 0 {
            content.push(self.parse_name_prefix());
        }
        content.push(self.parse_star_or_ident());
        Node::composite(NodeKind::TypeSelector, content, start)
    }

    /// A lone `*` becomes an ident of its own.
    fn parse_star_or_ident(&mut self) -> Node {
        if self.is(self.pos, Asterisk) {
            self.leaf(NodeKind::Ident, 1)
        } else {
            self.parse_ident()
        }
    }

    /// `ns|`, `*|`, `ns/* c */|` or a bare `|`.
    fn match_name_prefix(&mut self, i: usize) -> Option<Match<NamePrefixShape>> {
        self.memoized(
            i,
            |slot| &mut slot.name_prefix,
            |p| {
                let namespace = match p.scan_ident(i) {
                    0 => usize::from(p.is(i, Asterisk)),
                    len => len,
                };
                if namespace > 0 {
                    let mut j = i + namespace;
                    j += p.scan_comment_ml(j);
                    if p.is(j, VerticalLine) {
                        return Some(Match::new(j + 1 - i, NamePrefixShape::WithNamespace));
                    }
                }
                p.is(i, VerticalLine)
                    .then(|| Match::new(1, NamePrefixShape::SeparatorOnly))
            },
        )
    }

    pub(crate) fn scan_name_prefix(&mut self, i: usize) -> usize {
        self.match_name_prefix(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_name_prefix(&mut self) -> Node {
        let start = self.current();
        let mut content = Vec::new();
        if let Some(Match {
            shape: NamePrefixShape::WithNamespace,
            ..
        }) = self.match_name_prefix(self.pos)
        {
            let prefix_start = self.current();
            let prefix = if self.scan_ident(self.pos) > 0 {
                self.parse_ident()
            } else {
                self.leaf(NodeKind::Ident, 1)
            };
            content.push(Node::composite(
                NodeKind::NamespacePrefix,
                vec![prefix],
                prefix_start,
            ));
            if self.scan_comment_ml(self.pos) > 0 {
                content.push(self.parse_comment_ml());
            }
        }
        content.push(self.leaf(NodeKind::NamespaceSeparator, 1));
        Node::composite(NodeKind::NamePrefix, content, start)
    }

    fn scan_name_after(&mut self, i: usize) -> Option<Match<NameKind>> {
        match self.scan_interpolated_variable(i) {
            0 => match self.scan_ident(i) {
                0 => None,
                len => Some(Match::new(len, NameKind::Ident)),
            },
            len => Some(Match::new(len, NameKind::InterpolatedVariable)),
        }
    }

    fn parse_name(&mut self, kind: NameKind) -> Node {
        match kind {
            NameKind::InterpolatedVariable => self.parse_interpolated_variable(),
            NameKind::Ident => self.parse_ident(),
        }
    }

    /// `.name`
    pub(crate) fn scan_class(&mut self, i: usize) -> usize {
        self.match_class(i).map_or(0, |m| m.len())
    }

    fn match_class(&mut self, i: usize) -> Option<Match<NameKind>> {
        self.memoized(
            i,
            |slot| &mut slot.class,
            |p| {
                if !p.is(i, FullStop) {
                    return None;
                }
                p.scan_name_after(i + 1)
                    .map(|m| Match::new(m.len() + 1, m.shape))
            },
        )
    }

    pub(crate) fn parse_class(&mut self) -> Node {
        self.parse_prefixed_name(NodeKind::Class, Self::match_class)
    }

    /// `#name` in selector position.
    pub(crate) fn scan_id(&mut self, i: usize) -> usize {
        self.match_id(i).map_or(0, |m| m.len())
    }

    fn match_id(&mut self, i: usize) -> Option<Match<NameKind>> {
        self.memoized(
            i,
            |slot| &mut slot.id,
            |p| {
                if !p.is(i, NumberSign) {
                    return None;
                }
                p.scan_name_after(i + 1)
                    .map(|m| Match::new(m.len() + 1, m.shape))
            },
        )
    }

    pub(crate) fn parse_id(&mut self) -> Node {
        self.parse_prefixed_name(NodeKind::Id, Self::match_id)
    }

    fn parse_prefixed_name(
        &mut self,
        kind: NodeKind,
        recognize: fn(&mut Self, usize) -> Option<Match<NameKind>>,
    ) -> Node {
        let start = self.current();
        let name = recognize(self, self.pos).map_or(NameKind::Ident, |m| m.shape);
        self.bump(); // `.` or `#`
        let name = self.parse_name(name);
        Node::composite(kind, vec![name], start)
    }

    /// `&` followed by a glued suffix such as `&-item`.
    pub(crate) fn scan_parent_selector_with_extension(&mut self, i: usize) -> usize {
        match self.scan_parent_selector(i) {
            0 => 0,
            len => len + self.scan_parent_selector_extension(i + len),
        }
    }

    pub(crate) fn parse_parent_selector_with_extension(&mut self) -> Vec<Node> {
        let mut nodes = vec![self.parse_parent_selector()];
        if self.scan_parent_selector_extension(self.pos) > 0 {
            nodes.push(self.parse_parent_selector_extension());
        }
        nodes
    }

    fn scan_parent_selector_extension(&mut self, i: usize) -> usize {
        let mut j = i;
        loop {
            let len = match self.scan_number(j) {
                0 => self.scan_ident(j),
                len => len,
            };
            if len == 0 {
                break;
            }
            j += len;
        }
        j - i
    }

    fn parse_parent_selector_extension(&mut self) -> Node {
        let start = self.current();
        let mut content = Vec::new();
        loop {
            if self.scan_number(self.pos) > 0 {
                content.push(self.parse_number());
            } else if self.scan_ident(self.pos) > 0 {
                content.push(self.parse_ident());
            } else {
                break;
            }
        }
        Node::composite(NodeKind::ParentSelectorExtension, content, start)
    }

    /// `||`, `>`, `+`, `~` or `/name/`
    pub(crate) fn scan_combinator(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.combinator,
            |p| {
                if p.is(i, VerticalLine) && p.is(i + 1, VerticalLine) {
                    return 2;
                }
                if p.is_one_of(i, SINGLE_COMBINATORS) {
                    return 1;
                }
                if p.is(i, Solidus) {
                    let name = p.scan_ident(i + 1);
                    if name > 0 && p.is(i + 1 + name, Solidus) {
                        return name + 2;
                    }
                }
                0
            },
        )
    }

    pub(crate) fn parse_combinator(&mut self) -> Node {
        let len = self.scan_combinator(self.pos);
        self.leaf(NodeKind::Combinator, len)
    }

    fn match_attribute_selector(&mut self, i: usize) -> Option<Match<AttributeSelectorShape>> {
        self.memoized(
            i,
            |slot| &mut slot.attribute_selector,
            |p| {
                if !p.is(i, LeftSquareBracket) {
                    return None;
                }
                let mut j = i + 1;
                j += p.scan_sc(j);
                let name = p.scan_attribute_name(j);
                if name == 0 {
                    return None;
                }
                j += name;
                j += p.scan_sc(j);
                if p.is(j, RightSquareBracket) {
                    return Some(Match::new(j + 1 - i, AttributeSelectorShape::NameOnly));
                }

                let matcher = p.scan_attribute_match(j);
                if matcher == 0 {
                    return None;
                }
                j += matcher;
                j += p.scan_sc(j);
                let value = p.scan_attribute_value(j);
                if value == 0 {
                    return None;
                }
                j += value;
                j += p.scan_sc(j);
                let flags = p.scan_ident(j);
                if flags > 0 {
                    j += flags;
                    j += p.scan_sc(j);
                }
                p.is(j, RightSquareBracket)
                    .then(|| Match::new(j + 1 - i, AttributeSelectorShape::WithValue))
            },
        )
    }

    /// `[name]` or `[name op value flags]`
    pub(crate) fn scan_attribute_selector(&mut self, i: usize) -> usize {
        self.match_attribute_selector(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_attribute_selector(&mut self) -> Node {
        let start = self.current();
        let shape = self.match_attribute_selector(self.pos).map(|m| m.shape);
        self.bump(); // `[`
        let mut content = self.parse_sc();
        content.push(self.parse_attribute_name());
        content.extend(self.parse_sc());
        if shape == Some(AttributeSelectorShape::WithValue) {
            content.push(self.parse_attribute_match());
            content.extend(self.parse_sc());
            content.push(self.parse_attribute_value());
            content.extend(self.parse_sc());
            if self.scan_ident(self.pos) > 0 {
                let flags_start = self.current();
                let flags = self.parse_ident();
                content.push(Node::composite(
                    NodeKind::AttributeFlags,
                    vec![flags],
                    flags_start,
                ));
                content.extend(self.parse_sc());
            }
        }
        self.bump(); // `]`
        Node::composite(NodeKind::AttributeSelector, content, start)
    }

    /// Name prefix only counts when a name follows it, so `[lang|=en]`
    /// reads as `lang` with a `|=` match.
    fn scan_attribute_name(&mut self, i: usize) -> usize {
        let prefix = self.scan_name_prefix(i);
        if prefix > 0 {
            let name = self.scan_ident(i + prefix);
            if name > 0 {
                return prefix + name;
            }
        }
        self.scan_ident(i)
    }

    fn parse_attribute_name(&mut self) -> Node {
        let start = self.current();
        let mut content = Vec::new();
        let prefix = self.scan_name_prefix(self.pos);
        if prefix > 0 && self.scan_ident(self.pos + prefix) > 0 {
            content.push(self.parse_name_prefix());
        }
        content.push(self.parse_ident());
        Node::composite(NodeKind::AttributeName, content, start)
    }

    fn scan_attribute_match(&mut self, i: usize) -> usize {
        if self.is_one_of(i, ATTRIBUTE_MATCH_PREFIX) && self.is(i + 1, EqualsSign) {
            2
        } else {
            usize::from(self.is(i, EqualsSign))
        }
    }

    fn parse_attribute_match(&mut self) -> Node {
        let len = self.scan_attribute_match(self.pos);
        self.leaf(NodeKind::AttributeMatch, len)
    }

    fn scan_attribute_value(&mut self, i: usize) -> usize {
        match self.scan_string(i) {
            0 => self.scan_ident(i),
            len => len,
        }
    }

    fn parse_attribute_value(&mut self) -> Node {
        let start = self.current();
        let value = if self.scan_string(self.pos) > 0 {
            self.parse_string()
        } else {
            self.parse_ident()
        };
        Node::composite(NodeKind::AttributeValue, vec![value], start)
    }

    pub(crate) fn scan_pseudo(&mut self, i: usize) -> usize {
        match self.scan_pseudo_element(i) {
            0 => self.scan_pseudo_class(i),
            len => len,
        }
    }

    pub(crate) fn parse_pseudo(&mut self) -> Node {
        if self.scan_pseudo_element(self.pos) > 0 {
            self.parse_pseudo_element()
        } else {
            self.parse_pseudo_class()
        }
    }

    /// `::name`
    pub(crate) fn scan_pseudo_element(&mut self, i: usize) -> usize {
        if !self.is(i, Colon) || !self.is(i + 1, Colon) {
            return 0;
        }
        self.scan_name_after(i + 2).map_or(0, |m| m.len() + 2)
    }

    pub(crate) fn parse_pseudo_element(&mut self) -> Node {
        let start = self.current();
        let name = self.scan_name_after(self.pos + 2).map_or(NameKind::Ident, |m| m.shape);
        self.bump_n(2); // `::`
        let name = self.parse_name(name);
        Node::composite(NodeKind::PseudoElement, vec![name], start)
    }

    fn match_pseudo_class(&mut self, i: usize) -> Option<Match<PseudoClassShape>> {
        self.memoized(
            i,
            |slot| &mut slot.pseudo_class,
            |p| {
                if !p.is(i, Colon) {
                    return None;
                }
                let candidates: [(PseudoClassShape, fn(&mut Self, usize) -> usize); 5] = [
                    (PseudoClassShape::NthFormula, Self::scan_nth_formula),
                    (PseudoClassShape::NthMultiple, Self::scan_nth_multiple),
                    (PseudoClassShape::NthOffset, Self::scan_nth_offset),
                    (PseudoClassShape::SelectorList, Self::scan_pseudo_selector_list),
                    (PseudoClassShape::Ident, Self::scan_pseudo_ident_argument),
                ];
                // Each candidate starts right after the name and reports
                // the argument length, closing parenthesis included.
                let name = p.scan_ident(i + 1);
                if name > 0 {
                    let open = i + 1 + name;
                    if let Some(close) = p.closer_of(open, LeftParenthesis) {
                        for (shape, scan) in candidates {
                            if scan(p, open) == close + 1 - open {
                                return Some(Match::new(close + 1 - i, shape));
                            }
                        }
                    }
                }
                p.scan_name_after(i + 1)
                    .map(|m| Match::new(m.len() + 1, PseudoClassShape::Bare))
            },
        )
    }

    /// `:name`, `:name(...)`
    pub(crate) fn scan_pseudo_class(&mut self, i: usize) -> usize {
        self.match_pseudo_class(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_pseudo_class(&mut self) -> Node {
        let start = self.current();
        let m = self.match_pseudo_class(self.pos);
        self.assert_matched(m.map_or(0, |m| m.len()), "pseudo class");
        let shape = m.map_or(PseudoClassShape::Bare, |m| m.shape);
        self.bump(); // `:`

        if shape == PseudoClassShape::Bare {
            let name = self
                .scan_name_after(self.pos)
                .map_or(NameKind::Ident, |m| m.shape);
            let name = self.parse_name(name);
            return Node::composite(NodeKind::PseudoClass, vec![name], start);
        }

        let name = self.parse_ident();
        let args_start = self.current();
        let close = self.closer_of(self.pos, LeftParenthesis).unwrap_or(self.pos);
        self.bump(); // `(`
        let content = match shape {
            PseudoClassShape::SelectorList => self.parse_selectors_group(),
            PseudoClassShape::Ident => {
                let mut content = self.parse_sc();
                content.push(self.parse_ident());
                content.extend(self.parse_sc());
                content
            }
            _ => self.parse_nth(close),
        };
        self.bump(); // `)`
        let arguments = Node::composite(NodeKind::Arguments, content, args_start);
        Node::composite(NodeKind::PseudoClass, vec![name, arguments], start)
    }

    /// `(` spacing? sign? digits? `n` spacing? (`+`|`-`) spacing? digits spacing? `)`
    fn scan_nth_formula(&mut self, open: usize) -> usize {
        let mut j = self.scan_nth_multiplier(open + 1);
        if j == 0 {
            return 0;
        }
        j += self.scan_sc(j);
        if !self.is_one_of(j, SIGNS) {
            return 0;
        }
        j += 1;
        j += self.scan_sc(j);
        if !self.is(j, DecimalNumber) {
            return 0;
        }
        j += 1;
        j += self.scan_sc(j);
        self.closing_paren(open, j)
    }

    /// `(` spacing? sign? digits? `n` spacing? `)`
    fn scan_nth_multiple(&mut self, open: usize) -> usize {
        let mut j = self.scan_nth_multiplier(open + 1);
        if j == 0 {
            return 0;
        }
        j += self.scan_sc(j);
        self.closing_paren(open, j)
    }

    /// `(` spacing? sign? digits spacing? `)`
    fn scan_nth_offset(&mut self, open: usize) -> usize {
        let mut j = open + 1;
        j += self.scan_sc(j);
        j += self.scan_unary(j);
        if !self.is(j, DecimalNumber) {
            return 0;
        }
        j += 1;
        j += self.scan_sc(j);
        self.closing_paren(open, j)
    }

    /// Spacing, optional sign and digits, then `n`. Returns the index after
    /// `n`, or 0.
    fn scan_nth_multiplier(&mut self, from: usize) -> usize {
        let mut j = from;
        j += self.scan_sc(j);
        j += self.scan_unary(j);
        if self.is(j, DecimalNumber) {
            j += 1;
        }
        if self.text_at(j) == "n" { j + 1 } else { 0 }
    }

    fn scan_pseudo_selector_list(&mut self, open: usize) -> usize {
        match self.descend(|p| p.scan_selectors_group(open + 1)) {
            0 => 0,
            len => self.closing_paren(open, open + 1 + len),
        }
    }

    /// `(` spacing? ident spacing? `)`
    fn scan_pseudo_ident_argument(&mut self, open: usize) -> usize {
        let mut j = open + 1;
        j += self.scan_sc(j);
        let ident = self.scan_ident(j);
        if ident == 0 {
            return 0;
        }
        j += ident;
        j += self.scan_sc(j);
        self.closing_paren(open, j)
    }

    /// Group length when `at` is the closer of the `(` at `open`, else 0.
    fn closing_paren(&self, open: usize, at: usize) -> usize {
        match self.closer_of(open, LeftParenthesis) {
            Some(close) if close == at => close + 1 - open,
            _ => 0,
        }
    }

    /// Body of an An+B argument, up to `close`.
    fn parse_nth(&mut self, close: usize) -> Vec<Node> {
        let mut content = Vec::new();
        while self.pos < close {
            if self.scan_sc(self.pos) > 0 {
                content.extend(self.parse_sc());
            } else if self.is_one_of(self.pos, SIGNS) {
                content.push(self.parse_unary());
            } else if self.is(self.pos, DecimalNumber) {
                content.push(self.leaf(NodeKind::Number, 1));
            } else {
                content.push(self.leaf(NodeKind::Ident, 1));
            }
        }
        content
    }
}
