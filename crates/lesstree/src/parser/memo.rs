//! Per-token memo side table.
//!
//! Every memoized recognizer owns one field of [`Slot`]. A field starts as
//! [`Cached::Unknown`] and is written once, with either the matched length and
//! shape or a definitive miss. Recognizers only look forward from their
//! index, so a cached answer is valid for the whole parse.

use super::shapes::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match<T> {
    len: u32,
    pub(crate) shape: T,
}

impl<T> Match<T> {
    #[inline]
    pub(crate) fn new(len: usize, shape: T) -> Self {
        debug_assert!(len > 0, "a match covers at least one token");
        Self {
            len: len as u32,
            shape,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cached<T> {
    Unknown,
    Miss,
    Hit(Match<T>),
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Cached::Unknown
    }
}

impl<T> From<Option<Match<T>>> for Cached<T> {
    fn from(result: Option<Match<T>>) -> Self {
        match result {
            Some(m) => Cached::Hit(m),
            None => Cached::Miss,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Slot {
    pub spacing: Cached<()>,
    pub ident: Cached<()>,
    pub number: Cached<()>,
    pub important: Cached<()>,
    pub progid: Cached<()>,
    pub variable: Cached<()>,
    pub interpolated_variable: Cached<()>,
    pub class: Cached<NameKind>,
    pub id: Cached<NameKind>,
    pub any: Cached<AnyKind>,
    pub tset: Cached<TsetKind>,
    pub arguments: Cached<()>,
    pub argument: Cached<ArgumentKind>,
    pub value: Cached<()>,
    pub value_part: Cached<ValuePart>,
    pub selectors_group: Cached<()>,
    pub selector: Cached<SelectorShape>,
    pub compound: Cached<CompoundShape>,
    pub combinator: Cached<()>,
    pub name_prefix: Cached<NamePrefixShape>,
    pub attribute_selector: Cached<AttributeSelectorShape>,
    pub pseudo_class: Cached<PseudoClassShape>,
    pub keyframes_selector: Cached<KeyframesSelectorKind>,
    pub ruleset: Cached<()>,
    pub declaration: Cached<()>,
    pub block_decl: Cached<BlockDeclShape>,
    pub block_item: Cached<BlockItem>,
    pub at_rule: Cached<AtRuleShape>,
    pub nested_rule: Cached<NestedRule>,
    pub mixin: Cached<MixinShape>,
    pub include: Cached<IncludeShape>,
    pub extend: Cached<ExtendShape>,
    pub extend_target: Cached<ExtendTarget>,
    pub condition: Cached<()>,
    pub condition_part: Cached<ConditionPart>,
    pub stylesheet_item: Cached<StylesheetItem>,
}

/// One [`Slot`] per token, allocated up front.
#[derive(Debug)]
pub(crate) struct MemoTable {
    slots: Vec<Slot>,
}

impl MemoTable {
    pub(crate) fn new(tokens: usize) -> Self {
        let mut slots = Vec::with_capacity(tokens);
        slots.resize_with(tokens, Slot::default);
        Self { slots }
    }

    #[inline]
    pub(crate) fn slot(&mut self, i: usize) -> &mut Slot {
        &mut self.slots[i]
    }
}
