//! Statements: stylesheet items, blocks, declarations and at-rules, plus
//! LESS mixins, includes, extends and guards.

use lesstree_core::{Node, NodeKind};

use crate::Result;
use crate::lexer::TokenKind::*;
use crate::parser::Parser;
use crate::parser::core::Scan;
use crate::parser::memo::Match;
use crate::parser::shapes::{
    AtRuleShape, BlockDeclShape, BlockItem, ConditionPart, ExtendShape, ExtendTarget,
    IncludeShape, KeyframesSelectorKind, MixinShape, NestedRule, StylesheetItem,
};

impl Parser<'_, '_> {
    fn match_stylesheet_item(&mut self, i: usize) -> Option<Match<StylesheetItem>> {
        self.memoized(
            i,
            |slot| &mut slot.stylesheet_item,
            |p| {
                let alternatives: [(StylesheetItem, Scan<'_, '_>); 8] = [
                    (StylesheetItem::Spacing, Self::scan_sc),
                    (StylesheetItem::VariableDeclaration, Self::scan_variable_declaration),
                    (StylesheetItem::AtRule, Self::scan_at_rule),
                    (StylesheetItem::Extend, Self::scan_extend),
                    (StylesheetItem::Ruleset, Self::scan_ruleset),
                    (StylesheetItem::Mixin, Self::scan_mixin),
                    (StylesheetItem::Declaration, Self::scan_declaration),
                    (StylesheetItem::DeclarationDelimiter, Self::scan_decl_delim),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    /// Length of the run of stylesheet items starting at `i`; the parse
    /// fails at the first token it does not reach.
    pub(crate) fn scan_stylesheet(&mut self, i: usize) -> usize {
        let mut j = i;
        while let Some(item) = self.match_stylesheet_item(j) {
            j += item.len();
        }
        j - i
    }

    pub(crate) fn parse_stylesheet(&mut self) -> Result<Node> {
        let start = self.current();
        let mut content = Vec::new();
        while self.pos < self.tokens.len() {
            let Some(item) = self.match_stylesheet_item(self.pos) else {
                return Err(self.syntax_error(self.pos));
            };
            match item.shape {
                StylesheetItem::Spacing => content.extend(self.parse_sc()),
                StylesheetItem::VariableDeclaration | StylesheetItem::Declaration => {
                    content.push(self.parse_declaration()?)
                }
                StylesheetItem::AtRule => content.push(self.parse_at_rule()?),
                StylesheetItem::Extend => content.push(self.parse_extend()?),
                StylesheetItem::Ruleset => content.push(self.parse_ruleset()?),
                StylesheetItem::Mixin => content.push(self.parse_mixin()?),
                StylesheetItem::DeclarationDelimiter => content.push(self.parse_decl_delim()),
            }
        }
        Ok(Node::composite(NodeKind::Stylesheet, content, start))
    }

    /// `@name: value` with the colon glued to the name. Tried ahead of
    /// at-rules, which would otherwise claim it.
    fn scan_variable_declaration(&mut self, i: usize) -> usize {
        let variable = self.scan_variable(i);
        if variable == 0 || !self.is(i + variable, Colon) {
            return 0;
        }
        self.scan_declaration(i)
    }

    pub(crate) fn scan_ruleset(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.ruleset,
            |p| {
                let selectors = p.scan_selectors_group(i);
                if selectors == 0 {
                    return 0;
                }
                let mut j = i + selectors;
                j += p.scan_sc(j);
                match p.scan_block(j) {
                    0 => 0,
                    len => j + len - i,
                }
            },
        )
    }

    pub(crate) fn parse_ruleset(&mut self) -> Result<Node> {
        let start = self.current();
        let mut content = self.parse_selectors_group();
        content.extend(self.parse_sc());
        content.push(self.parse_block()?);
        Ok(Node::composite(NodeKind::Ruleset, content, start))
    }

    /// Brace matching only; the contents are checked while building.
    pub(crate) fn scan_block(&mut self, i: usize) -> usize {
        self.closer_of(i, LeftCurlyBracket)
            .map_or(0, |close| close + 1 - i)
    }

    pub(crate) fn parse_block(&mut self) -> Result<Node> {
        let start = self.current();
        let Some(close) = self.closer_of(self.pos, LeftCurlyBracket) else {
            return Err(self.syntax_error(self.pos));
        };
        self.bump(); // `{`

        let content = self.nested(|p| {
            let mut content = Vec::new();
            while p.pos < close {
                let Some(decl) = p.match_block_decl(p.pos) else {
                    return Err(p.syntax_error(p.pos));
                };
                p.parse_block_decl(decl.shape, &mut content)?;
            }
            Ok(content)
        })?;

        if self.pos != close {
            return Err(self.syntax_error(self.pos));
        }
        self.bump(); // `}`
        Ok(Node::composite(NodeKind::Block, content, start))
    }

    fn match_block_decl(&mut self, i: usize) -> Option<Match<BlockDeclShape>> {
        self.memoized(
            i,
            |slot| &mut slot.block_decl,
            |p| {
                let leading = p.scan_sc(i);
                let at = i + leading;
                if let Some(item) = p.match_block_item(at) {
                    let j = at + item.len();
                    if p.is(j, Semicolon) {
                        let trailing = p.scan_sc(j + 1);
                        if trailing > 0 {
                            return Some(Match::new(
                                j + 1 + trailing - i,
                                BlockDeclShape::ItemWithDelimiter,
                            ));
                        }
                    }
                    let j = j + p.scan_sc(j);
                    return Some(Match::new(j - i, BlockDeclShape::Item));
                }
                if p.is(at, Semicolon) {
                    let j = at + 1 + p.scan_sc(at + 1);
                    return Some(Match::new(j - i, BlockDeclShape::Delimiter));
                }
                (leading > 0).then(|| Match::new(leading, BlockDeclShape::Spacing))
            },
        )
    }

    fn parse_block_decl(&mut self, shape: BlockDeclShape, out: &mut Vec<Node>) -> Result<()> {
        out.extend(self.parse_sc());
        match shape {
            BlockDeclShape::ItemWithDelimiter => {
                out.push(self.parse_block_item()?);
                out.push(self.parse_decl_delim());
            }
            BlockDeclShape::Item => out.push(self.parse_block_item()?),
            BlockDeclShape::Delimiter => out.push(self.parse_decl_delim()),
            BlockDeclShape::Spacing => return Ok(()),
        }
        out.extend(self.parse_sc());
        Ok(())
    }

    fn match_block_item(&mut self, i: usize) -> Option<Match<BlockItem>> {
        self.memoized(
            i,
            |slot| &mut slot.block_item,
            |p| {
                let alternatives: [(BlockItem, Scan<'_, '_>); 6] = [
                    (BlockItem::Condition, Self::scan_condition),
                    (BlockItem::Extend, Self::scan_extend),
                    (BlockItem::Ruleset, Self::scan_ruleset),
                    (BlockItem::Declaration, Self::scan_declaration),
                    (BlockItem::AtRule, Self::scan_at_rule),
                    (BlockItem::Include, Self::scan_include),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    fn parse_block_item(&mut self) -> Result<Node> {
        let Some(item) = self.match_block_item(self.pos) else {
            return Err(self.syntax_error(self.pos));
        };
        match item.shape {
            BlockItem::Condition => self.parse_condition(),
            BlockItem::Extend => self.parse_extend(),
            BlockItem::Ruleset => self.parse_ruleset(),
            BlockItem::Declaration => self.parse_declaration(),
            BlockItem::AtRule => self.parse_at_rule(),
            BlockItem::Include => self.parse_include(),
        }
    }

    /// `property : value`
    pub(crate) fn scan_declaration(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.declaration,
            |p| {
                let property = p.scan_property(i);
                if property == 0 {
                    return 0;
                }
                let mut j = i + property;
                j += p.scan_sc(j);
                if p.scan_property_delim(j) == 0 {
                    return 0;
                }
                j += 1;
                j += p.scan_sc(j);
                match p.scan_value(j) {
                    0 => 0,
                    len => j + len - i,
                }
            },
        )
    }

    pub(crate) fn parse_declaration(&mut self) -> Result<Node> {
        let start = self.current();
        let mut content = vec![self.parse_property()];
        content.extend(self.parse_sc());
        content.push(self.parse_property_delim());
        content.extend(self.parse_sc());
        content.push(self.parse_value()?);
        Ok(Node::composite(NodeKind::Declaration, content, start))
    }

    pub(crate) fn scan_property(&mut self, i: usize) -> usize {
        match self.scan_variable(i) {
            0 => self.scan_ident(i),
            len => len,
        }
    }

    pub(crate) fn parse_property(&mut self) -> Node {
        let start = self.current();
        let name = if self.scan_variable(self.pos) > 0 {
            self.parse_variable()
        } else {
            self.parse_ident()
        };
        Node::composite(NodeKind::Property, vec![name], start)
    }

    fn match_at_rule(&mut self, i: usize) -> Option<Match<AtRuleShape>> {
        self.memoized(
            i,
            |slot| &mut slot.at_rule,
            |p| {
                let alternatives: [(AtRuleShape, Scan<'_, '_>); 4] = [
                    (AtRuleShape::Keyframes, Self::scan_keyframes_rule),
                    (AtRuleShape::WithRulesets, Self::scan_at_rule_with_rulesets),
                    (AtRuleShape::WithBlock, Self::scan_at_rule_with_block),
                    (AtRuleShape::Bare, Self::scan_at_rule_bare),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    pub(crate) fn scan_at_rule(&mut self, i: usize) -> usize {
        self.match_at_rule(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_at_rule(&mut self) -> Result<Node> {
        let start = self.current();
        let Some(m) = self.match_at_rule(self.pos) else {
            return Err(self.syntax_error(self.pos));
        };
        let mut content = vec![self.parse_at_keyword()];
        match m.shape {
            AtRuleShape::Keyframes => {
                content.extend(self.parse_sc());
                content.push(self.parse_ident());
                content.extend(self.parse_sc());
                content.push(self.parse_keyframes_blocks()?);
            }
            AtRuleShape::WithRulesets => {
                content.extend(self.parse_tsets()?);
                content.push(self.parse_nested_rules()?);
            }
            AtRuleShape::WithBlock => {
                content.extend(self.parse_tsets()?);
                content.push(self.parse_block()?);
            }
            AtRuleShape::Bare => content.extend(self.parse_tsets()?),
        }
        Ok(Node::composite(NodeKind::AtRule, content, start))
    }

    /// Index after the at-keyword and its prelude, or 0.
    fn scan_at_rule_head(&mut self, i: usize) -> usize {
        match self.scan_at_keyword(i) {
            0 => 0,
            keyword => i + keyword + self.scan_tsets(i + keyword),
        }
    }

    /// `@media screen { .a {} }`
    fn scan_at_rule_with_rulesets(&mut self, i: usize) -> usize {
        let j = self.scan_at_rule_head(i);
        if j == 0 {
            return 0;
        }
        let Some(close) = self.closer_of(j, LeftCurlyBracket) else {
            return 0;
        };
        let body = self.descend(|p| {
            let mut k = j + 1;
            while let Some(rule) = p.match_nested_rule(k) {
                k += rule.len();
            }
            k - j
        });
        if j + body == close { close + 1 - i } else { 0 }
    }

    /// `@font-face { src: url(a.woff); }`
    fn scan_at_rule_with_block(&mut self, i: usize) -> usize {
        let j = self.scan_at_rule_head(i);
        if j == 0 {
            return 0;
        }
        match self.scan_block(j) {
            0 => 0,
            len => j + len - i,
        }
    }

    /// `@import "a.less"`
    fn scan_at_rule_bare(&mut self, i: usize) -> usize {
        match self.scan_at_rule_head(i) {
            0 => 0,
            j => j - i,
        }
    }

    fn match_nested_rule(&mut self, i: usize) -> Option<Match<NestedRule>> {
        self.memoized(
            i,
            |slot| &mut slot.nested_rule,
            |p| {
                let alternatives: [(NestedRule, Scan<'_, '_>); 3] = [
                    (NestedRule::Spacing, Self::scan_sc),
                    (NestedRule::AtRule, Self::scan_at_rule),
                    (NestedRule::Ruleset, Self::scan_ruleset),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    /// Block whose children are only spacing, at-rules and rulesets.
    fn parse_nested_rules(&mut self) -> Result<Node> {
        let start = self.current();
        let Some(close) = self.closer_of(self.pos, LeftCurlyBracket) else {
            return Err(self.syntax_error(self.pos));
        };
        self.bump(); // `{`
        let content = self.nested(|p| {
            let mut content = Vec::new();
            while p.pos < close {
                let Some(rule) = p.match_nested_rule(p.pos) else {
                    return Err(p.syntax_error(p.pos));
                };
                match rule.shape {
                    NestedRule::Spacing => content.extend(p.parse_sc()),
                    NestedRule::AtRule => content.push(p.parse_at_rule()?),
                    NestedRule::Ruleset => content.push(p.parse_ruleset()?),
                }
            }
            Ok(content)
        })?;
        self.bump(); // `}`
        Ok(Node::composite(NodeKind::Block, content, start))
    }

    /// `@keyframes name { from {} 50% {} to {} }`, vendor prefixes included.
    fn scan_keyframes_rule(&mut self, i: usize) -> usize {
        let keyword = self.scan_at_keyword(i);
        if keyword == 0 || !self.join(i..i + keyword).contains("keyframes") {
            return 0;
        }
        let mut j = i + keyword;
        let spacing = self.scan_sc(j);
        if spacing == 0 {
            return 0;
        }
        j += spacing;
        let name = self.scan_ident(j);
        if name == 0 {
            return 0;
        }
        j += name;
        j += self.scan_sc(j);
        match self.scan_keyframes_blocks(j) {
            0 => 0,
            len => j + len - i,
        }
    }

    fn scan_keyframes_blocks(&mut self, i: usize) -> usize {
        let Some(close) = self.closer_of(i, LeftCurlyBracket) else {
            return 0;
        };
        let mut j = i + 1;
        j += self.scan_sc(j);
        let first = self.scan_keyframes_block(j);
        if first == 0 {
            return 0;
        }
        j += first;
        while j < close {
            let len = match self.scan_sc(j) {
                0 => self.scan_keyframes_block(j),
                len => len,
            };
            if len == 0 {
                break;
            }
            j += len;
        }
        if j == close { close + 1 - i } else { 0 }
    }

    fn parse_keyframes_blocks(&mut self) -> Result<Node> {
        let start = self.current();
        let Some(close) = self.closer_of(self.pos, LeftCurlyBracket) else {
            return Err(self.syntax_error(self.pos));
        };
        self.bump(); // `{`
        let content = self.nested(|p| {
            let mut content = Vec::new();
            while p.pos < close {
                if p.scan_sc(p.pos) > 0 {
                    content.extend(p.parse_sc());
                } else {
                    content.push(p.parse_keyframes_block()?);
                }
            }
            Ok(content)
        })?;
        self.bump(); // `}`
        Ok(Node::composite(NodeKind::Block, content, start))
    }

    /// Keyframe selector list, spacing, block.
    fn scan_keyframes_block(&mut self, i: usize) -> usize {
        let selectors = self.scan_keyframes_selectors(i);
        if selectors == 0 {
            return 0;
        }
        let mut j = i + selectors;
        j += self.scan_sc(j);
        match self.scan_block(j) {
            0 => 0,
            len => j + len - i,
        }
    }

    fn parse_keyframes_block(&mut self) -> Result<Node> {
        let start = self.current();
        let end = self.pos + self.scan_keyframes_selectors(self.pos);
        let mut content = vec![self.parse_keyframes_selector()];
        while self.pos < end {
            content.extend(self.parse_sc());
            content.push(self.parse_delim());
            content.extend(self.parse_sc());
            content.push(self.parse_keyframes_selector());
        }
        content.extend(self.parse_sc());
        content.push(self.parse_block()?);
        Ok(Node::composite(NodeKind::Ruleset, content, start))
    }

    /// `from, 50%` style lists.
    fn scan_keyframes_selectors(&mut self, i: usize) -> usize {
        let first = self.scan_keyframes_selector(i);
        if first == 0 {
            return 0;
        }
        let mut j = i + first;
        loop {
            let mut k = j + self.scan_sc(j);
            if !self.is(k, Comma) {
                break;
            }
            k += 1;
            k += self.scan_sc(k);
            match self.scan_keyframes_selector(k) {
                0 => break,
                len => j = k + len,
            }
        }
        j - i
    }

    fn match_keyframes_selector(&mut self, i: usize) -> Option<Match<KeyframesSelectorKind>> {
        self.memoized(
            i,
            |slot| &mut slot.keyframes_selector,
            |p| {
                let ident = p.scan_ident(i);
                if ident > 0 {
                    let name = p.join(i..i + ident);
                    return (name == "from" || name == "to")
                        .then(|| Match::new(ident, KeyframesSelectorKind::Keyword));
                }
                match p.scan_percentage(i) {
                    0 => None,
                    len => Some(Match::new(len, KeyframesSelectorKind::Percentage)),
                }
            },
        )
    }

    fn scan_keyframes_selector(&mut self, i: usize) -> usize {
        self.match_keyframes_selector(i).map_or(0, |m| m.len())
    }

    /// `Selector` wrapping a `KeyframesSelector`.
    fn parse_keyframes_selector(&mut self) -> Node {
        let start = self.current();
        let inner = match self.match_keyframes_selector(self.pos).map(|m| m.shape) {
            Some(KeyframesSelectorKind::Percentage) => self.parse_percentage(),
            _ => self.parse_ident(),
        };
        let keyframes = Node::composite(NodeKind::KeyframesSelector, vec![inner], start);
        Node::composite(NodeKind::Selector, vec![keyframes], start)
    }

    fn match_mixin(&mut self, i: usize) -> Option<Match<MixinShape>> {
        self.memoized(
            i,
            |slot| &mut slot.mixin,
            |p| {
                let head = p.scan_mixin_head(i);
                if head == 0 {
                    return None;
                }
                let mut j = i + head;
                j += p.scan_sc(j);
                j += p.scan_condition(j);
                match p.scan_block(j) {
                    0 => Some(Match::new(head, MixinShape::Bare)),
                    len => Some(Match::new(j + len - i, MixinShape::WithBlock)),
                }
            },
        )
    }

    /// `(class | id) spacing? arguments?`
    fn scan_mixin_head(&mut self, i: usize) -> usize {
        let name = self.scan_class_or_id(i);
        if name == 0 {
            return 0;
        }
        let mut j = i + name;
        j += self.scan_sc(j);
        j += self.scan_arguments(j);
        j - i
    }

    /// `.m(@a) when (@a > 0) { … }`, or a bare `.m(1)` call.
    pub(crate) fn scan_mixin(&mut self, i: usize) -> usize {
        self.match_mixin(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_mixin(&mut self) -> Result<Node> {
        let start = self.current();
        let Some(m) = self.match_mixin(self.pos) else {
            return Err(self.syntax_error(self.pos));
        };
        let mut content = vec![self.parse_class_or_id()];
        content.extend(self.parse_sc());
        if self.scan_arguments(self.pos) > 0 {
            content.push(self.parse_arguments()?);
        }
        if m.shape == MixinShape::WithBlock {
            content.extend(self.parse_sc());
            if self.scan_condition(self.pos) > 0 {
                content.push(self.parse_condition()?);
            }
            content.push(self.parse_block()?);
        }
        Ok(Node::composite(NodeKind::Mixin, content, start))
    }

    fn scan_class_or_id(&mut self, i: usize) -> usize {
        match self.scan_class(i) {
            0 => self.scan_id(i),
            len => len,
        }
    }

    fn parse_class_or_id(&mut self) -> Node {
        if self.scan_class(self.pos) > 0 {
            self.parse_class()
        } else {
            self.parse_id()
        }
    }

    fn match_include(&mut self, i: usize) -> Option<Match<IncludeShape>> {
        self.memoized(
            i,
            |slot| &mut slot.include,
            |p| {
                let head = p.scan_include_head(i);
                if head == 0 {
                    return None;
                }
                let mut j = i + head;
                let arguments = p.scan_arguments(j);
                if arguments == 0 {
                    return Some(Match::new(head, IncludeShape::Bare));
                }
                j += arguments;
                j += p.scan_sc(j);
                j += p.scan_important(j);
                Some(Match::new(j - i, IncludeShape::WithArguments))
            },
        )
    }

    /// `(class | id)` then any run of classes, ids, spacing and `>`.
    fn scan_include_head(&mut self, i: usize) -> usize {
        if self.scan_class_or_id(i) == 0 {
            return 0;
        }
        let mut j = i;
        loop {
            let len = match self.scan_class_or_id(j) {
                0 => match self.scan_sc(j) {
                    0 => usize::from(self.is(j, GreaterThanSign)),
                    len => len,
                },
                len => len,
            };
            if len == 0 {
                break;
            }
            j += len;
        }
        j - i
    }

    /// `.a > .b(1) !important`
    pub(crate) fn scan_include(&mut self, i: usize) -> usize {
        self.match_include(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_include(&mut self) -> Result<Node> {
        let start = self.current();
        let Some(m) = self.match_include(self.pos) else {
            return Err(self.syntax_error(self.pos));
        };
        let head_end = self.pos + self.scan_include_head(self.pos);
        let mut content = Vec::new();
        while self.pos < head_end {
            if self.scan_class_or_id(self.pos) > 0 {
                content.push(self.parse_class_or_id());
            } else if self.scan_sc(self.pos) > 0 {
                content.extend(self.parse_sc());
            } else {
                content.push(self.parse_operator());
            }
        }
        if m.shape == IncludeShape::WithArguments {
            content.push(self.parse_arguments()?);
            content.extend(self.parse_sc());
            if self.scan_important(self.pos) > 0 {
                content.push(self.parse_important());
            }
        }
        Ok(Node::composite(NodeKind::Include, content, start))
    }

    fn match_extend_target(&mut self, i: usize) -> Option<Match<ExtendTarget>> {
        self.memoized(
            i,
            |slot| &mut slot.extend_target,
            |p| {
                let alternatives: [(ExtendTarget, Scan<'_, '_>); 4] = [
                    (ExtendTarget::ParentSelector, Self::scan_parent_selector_with_extension),
                    (ExtendTarget::Ident, Self::scan_ident),
                    (ExtendTarget::Class, Self::scan_class),
                    (ExtendTarget::Id, Self::scan_id),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    fn match_extend(&mut self, i: usize) -> Option<Match<ExtendShape>> {
        self.memoized(
            i,
            |slot| &mut slot.extend,
            |p| {
                let target = p.match_extend_target(i)?;
                let j = i + target.len();
                if p.text_at(j + 1) != "extend" {
                    return None;
                }
                let pseudo = p.scan_pseudo_class(j);
                if pseudo == 0 {
                    return None;
                }
                let j = j + pseudo;
                let k = j + p.scan_sc(j);
                match p.scan_block(k) {
                    0 => Some(Match::new(j - i, ExtendShape::Bare)),
                    len => Some(Match::new(k + len - i, ExtendShape::WithBlock)),
                }
            },
        )
    }

    /// `.a:extend(.b)`, optionally followed by a block.
    pub(crate) fn scan_extend(&mut self, i: usize) -> usize {
        self.match_extend(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_extend(&mut self) -> Result<Node> {
        let start = self.current();
        let (Some(extend), Some(target)) =
            (self.match_extend(self.pos), self.match_extend_target(self.pos))
        else {
            return Err(self.syntax_error(self.pos));
        };
        let mut content = match target.shape {
            ExtendTarget::ParentSelector => self.parse_parent_selector_with_extension(),
            ExtendTarget::Ident => vec![self.parse_ident()],
            ExtendTarget::Class => vec![self.parse_class()],
            ExtendTarget::Id => vec![self.parse_id()],
        };
        content.push(self.parse_pseudo_class());
        if extend.shape == ExtendShape::WithBlock {
            content.extend(self.parse_sc());
            content.push(self.parse_block()?);
        }
        Ok(Node::composite(NodeKind::Extend, content, start))
    }

    /// `when (...)` guard, ending right before a block or at end of input.
    pub(crate) fn scan_condition(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.condition,
            |p| {
                if !p.is(i, Identifier) || p.text_at(i) != "when" || p.scan_ident(i) != 1 {
                    return 0;
                }
                let mut j = i + 1;
                while j < p.tokens.len() {
                    if p.scan_block(j) > 0 {
                        break;
                    }
                    match p.match_condition_part(j) {
                        Some(part) => j += part.len(),
                        None => return 0,
                    }
                }
                j - i
            },
        )
    }

    fn match_condition_part(&mut self, i: usize) -> Option<Match<ConditionPart>> {
        self.memoized(
            i,
            |slot| &mut slot.condition_part,
            |p| {
                let alternatives: [(ConditionPart, Scan<'_, '_>); 11] = [
                    (ConditionPart::Function, Self::scan_function),
                    (ConditionPart::Brackets, Self::scan_brackets),
                    (ConditionPart::Parentheses, Self::scan_parentheses),
                    (ConditionPart::Variable, Self::scan_variable),
                    (ConditionPart::Ident, Self::scan_ident),
                    (ConditionPart::Number, Self::scan_number),
                    (ConditionPart::Delimiter, Self::scan_delim),
                    (ConditionPart::Operator, Self::scan_operator),
                    (ConditionPart::Combinator, Self::scan_combinator),
                    (ConditionPart::Spacing, Self::scan_sc),
                    (ConditionPart::String, Self::scan_string),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    pub(crate) fn parse_condition(&mut self) -> Result<Node> {
        let start = self.current();
        let end = self.pos + self.scan_condition(self.pos);
        let mut content = vec![self.parse_ident()];
        while self.pos < end {
            let Some(part) = self.match_condition_part(self.pos) else {
                return Err(self.syntax_error(self.pos));
            };
            match part.shape {
                ConditionPart::Function => content.push(self.parse_function()?),
                ConditionPart::Brackets => content.push(self.parse_brackets()?),
                ConditionPart::Parentheses => content.push(self.parse_parentheses()?),
                ConditionPart::Variable => content.push(self.parse_variable()),
                ConditionPart::Ident => content.push(self.parse_ident()),
                ConditionPart::Number => content.push(self.parse_number()),
                ConditionPart::Delimiter => content.push(self.parse_delim()),
                ConditionPart::Operator => content.push(self.parse_operator()),
                ConditionPart::Combinator => content.push(self.parse_combinator()),
                ConditionPart::Spacing => content.extend(self.parse_sc()),
                ConditionPart::String => content.push(self.parse_string()),
            }
        }
        Ok(Node::composite(NodeKind::Condition, content, start))
    }
}
