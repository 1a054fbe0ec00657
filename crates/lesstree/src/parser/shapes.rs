//! Disambiguation tags recorded by recognizers and read back by builders.
//!
//! Variant order follows the order in which alternatives are tried.

/// Value fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnyKind {
    Brackets,
    Parentheses,
    String,
    VariablesList,
    Variable,
    Percentage,
    Dimension,
    Number,
    Uri,
    Expression,
    Function,
    Ident,
    Class,
    Unary,
}

/// Element of an at-rule prelude or a parenthesis/bracket group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TsetKind {
    Color,
    Any,
    Spacing,
    Operator,
}

/// Element of a mixin argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgumentKind {
    EscapedString,
    Declaration,
    VariablesList,
    Variable,
    Spacing,
    Unary,
    Operator,
    Delimiter,
    DeclarationDelimiter,
    String,
    Percentage,
    Dimension,
    Number,
    Uri,
    Function,
    Ident,
    Color,
    Block,
    Parentheses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValuePart {
    EscapedString,
    InterpolatedVariable,
    Variable,
    Color,
    Block,
    Progid,
    Any,
    AtKeyword,
    Operator,
    Important,
}

/// What follows the `.` of a class or the `#` of an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameKind {
    InterpolatedVariable,
    Ident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorShape {
    /// Starts with a compound selector.
    Compound,
    /// Starts with a combinator.
    Combinator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompoundShape {
    /// Led by a type selector or a parent selector.
    Typed,
    /// Only ids, classes, attributes and pseudos.
    Untyped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NamePrefixShape {
    WithNamespace,
    SeparatorOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttributeSelectorShape {
    WithValue,
    NameOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PseudoClassShape {
    /// `:nth-child(2n + 1)`
    NthFormula,
    /// `:nth-child(-3n)`
    NthMultiple,
    /// `:nth-child(+5)`
    NthOffset,
    /// `:not(.a, .b)`
    SelectorList,
    /// `:lang(de-DE)`
    Ident,
    /// `:hover`
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyframesSelectorKind {
    Keyword,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockDeclShape {
    /// Item, `;`, then at least one spacing token.
    ItemWithDelimiter,
    Item,
    Delimiter,
    Spacing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockItem {
    Condition,
    Extend,
    Ruleset,
    Declaration,
    AtRule,
    Include,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AtRuleShape {
    Keyframes,
    /// Body holds only rulesets and at-rules.
    WithRulesets,
    WithBlock,
    Bare,
}

/// Child of an at-rule body that holds only rulesets and at-rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NestedRule {
    Spacing,
    AtRule,
    Ruleset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MixinShape {
    WithBlock,
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IncludeShape {
    WithArguments,
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExtendShape {
    WithBlock,
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExtendTarget {
    ParentSelector,
    Ident,
    Class,
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConditionPart {
    Function,
    Brackets,
    Parentheses,
    Variable,
    Ident,
    Number,
    Delimiter,
    Operator,
    Combinator,
    Spacing,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StylesheetItem {
    Spacing,
    /// `@name:` declaration, tried before at-rules.
    VariableDeclaration,
    AtRule,
    Extend,
    Ruleset,
    Mixin,
    Declaration,
    DeclarationDelimiter,
}
