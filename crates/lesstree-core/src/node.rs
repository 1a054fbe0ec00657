//! Syntax tree nodes.
//!
//! A [`Node`] is immutable once built: its end position is derived from the
//! start, the content and the fixed [`Delimiters`] of its kind, never stored
//! independently.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::position::{Delimiters, Position, compute_end};

/// Every kind of node the parser can produce.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Stylesheet,
    Ruleset,
    Selector,
    CompoundSelector,
    TypeSelector,
    Combinator,
    Class,
    Id,
    AttributeSelector,
    AttributeName,
    AttributeMatch,
    AttributeValue,
    AttributeFlags,
    NamePrefix,
    NamespacePrefix,
    NamespaceSeparator,
    Namespace,
    PseudoClass,
    PseudoElement,
    ParentSelector,
    ParentSelectorExtension,
    KeyframesSelector,
    Declaration,
    Property,
    PropertyDelimiter,
    Value,
    DeclarationDelimiter,
    Delimiter,
    Block,
    AtRule,
    AtKeyword,
    Mixin,
    Include,
    Extend,
    Condition,
    Variable,
    VariablesList,
    InterpolatedVariable,
    Arguments,
    Function,
    Parentheses,
    Brackets,
    Space,
    MultilineComment,
    SinglelineComment,
    String,
    EscapedString,
    Number,
    Dimension,
    Percentage,
    Unary,
    Operator,
    Important,
    Uri,
    Raw,
    Expression,
    Progid,
    Color,
    Ident,
}

impl NodeKind {
    /// Punctuation consumed around this kind's content but not stored in it.
    pub const fn delimiters(self) -> Delimiters {
        use NodeKind::*;
        match self {
            Block | Parentheses | Brackets | Arguments | AttributeSelector => {
                Delimiters::new(1, 1)
            }
            Percentage => Delimiters::new(0, 1),
            // `@a...`
            VariablesList => Delimiters::new(0, 3),
            // `@{` … `}`
            InterpolatedVariable => Delimiters::new(2, 1),
            // `url(` … `)`
            Uri => Delimiters::new(4, 1),
            // `expression(` … `)`
            Expression => Delimiters::new(11, 1),
            MultilineComment => Delimiters::new(2, 2),
            SinglelineComment => Delimiters::new(2, 0),
            EscapedString | Color => Delimiters::new(1, 0),
            _ => Delimiters::NONE,
        }
    }
}

/// Either the literal text of a leaf or the ordered children of a composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Leaf(String),
    Composite(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(rename = "type")]
    kind: NodeKind,
    content: Content,
    start: Position,
    end: Position,
}

impl Node {
    pub fn new(kind: NodeKind, content: Content, start: Position) -> Self {
        let end = compute_end(&content, start, kind.delimiters());
        Self {
            kind,
            content,
            start,
            end,
        }
    }

    pub fn leaf(kind: NodeKind, text: impl Into<String>, start: Position) -> Self {
        Self::new(kind, Content::Leaf(text.into()), start)
    }

    pub fn composite(kind: NodeKind, children: Vec<Node>, start: Position) -> Self {
        Self::new(kind, Content::Composite(children), start)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Leaf text, `None` for composites.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Leaf(text) => Some(text),
            Content::Composite(_) => None,
        }
    }

    /// Children in source order; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Leaf(_) => &[],
            Content::Composite(children) => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }

    /// Pre-order traversal, starting with `self`.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }

    /// Indented `Kind start..end` listing, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match &self.content {
            Content::Leaf(text) => {
                let _ = writeln!(
                    out,
                    "{indent}{:?} {text:?} {}..{}",
                    self.kind, self.start, self.end
                );
            }
            Content::Composite(children) => {
                let _ = writeln!(out, "{indent}{:?} {}..{}", self.kind, self.start, self.end);
                for child in children {
                    child.dump_into(out, depth + 1);
                }
            }
        }
    }
}
