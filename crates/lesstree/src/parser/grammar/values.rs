//! Value fragments, groups, functions and argument lists.

use lesstree_core::{Node, NodeKind};

use crate::Result;
use crate::lexer::TokenKind::*;
use crate::parser::Parser;
use crate::parser::core::Scan;
use crate::parser::memo::Match;
use crate::parser::shapes::{AnyKind, ArgumentKind, TsetKind, ValuePart};

impl Parser<'_, '_> {
    pub(crate) fn match_any(&mut self, i: usize) -> Option<Match<AnyKind>> {
        self.memoized(
            i,
            |slot| &mut slot.any,
            |p| {
                let alternatives: [(AnyKind, Scan<'_, '_>); 14] = [
                    (AnyKind::Brackets, Self::scan_brackets),
                    (AnyKind::Parentheses, Self::scan_parentheses),
                    (AnyKind::String, Self::scan_string),
                    (AnyKind::VariablesList, Self::scan_variables_list),
                    (AnyKind::Variable, Self::scan_variable),
                    (AnyKind::Percentage, Self::scan_percentage),
                    (AnyKind::Dimension, Self::scan_dimension),
                    (AnyKind::Number, Self::scan_number),
                    (AnyKind::Uri, Self::scan_uri),
                    (AnyKind::Expression, Self::scan_expression),
                    (AnyKind::Function, Self::scan_function),
                    (AnyKind::Ident, Self::scan_ident),
                    (AnyKind::Class, Self::scan_class),
                    (AnyKind::Unary, Self::scan_unary),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    pub(crate) fn scan_any(&mut self, i: usize) -> usize {
        self.match_any(i).map_or(0, |m| m.len())
    }

    pub(crate) fn parse_any(&mut self) -> Result<Node> {
        let Some(m) = self.match_any(self.pos) else {
            return Err(self.syntax_error(self.pos));
        };
        Ok(match m.shape {
            AnyKind::Brackets => self.parse_brackets()?,
            AnyKind::Parentheses => self.parse_parentheses()?,
            AnyKind::String => self.parse_string(),
            AnyKind::VariablesList => self.parse_variables_list(),
            AnyKind::Variable => self.parse_variable(),
            AnyKind::Percentage => self.parse_percentage(),
            AnyKind::Dimension => self.parse_dimension(),
            AnyKind::Number => self.parse_number(),
            AnyKind::Uri => self.parse_uri()?,
            AnyKind::Expression => self.parse_expression(),
            AnyKind::Function => self.parse_function()?,
            AnyKind::Ident => self.parse_ident(),
            AnyKind::Class => self.parse_class(),
            AnyKind::Unary => self.parse_unary(),
        })
    }

    fn match_tset(&mut self, i: usize) -> Option<Match<TsetKind>> {
        self.memoized(
            i,
            |slot| &mut slot.tset,
            |p| {
                let alternatives: [(TsetKind, Scan<'_, '_>); 4] = [
                    (TsetKind::Color, Self::scan_color),
                    (TsetKind::Any, Self::scan_any),
                    (TsetKind::Spacing, Self::scan_sc),
                    (TsetKind::Operator, Self::scan_operator),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    pub(crate) fn scan_tsets(&mut self, i: usize) -> usize {
        let mut j = i;
        while let Some(m) = self.match_tset(j) {
            j += m.len();
        }
        j - i
    }

    pub(crate) fn parse_tsets(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        while let Some(m) = self.match_tset(self.pos) {
            match m.shape {
                TsetKind::Color => nodes.push(self.parse_color()),
                TsetKind::Any => nodes.push(self.parse_any()?),
                TsetKind::Spacing => nodes.extend(self.parse_sc()),
                TsetKind::Operator => nodes.push(self.parse_operator()),
            }
        }
        Ok(nodes)
    }

    pub(crate) fn scan_parentheses(&mut self, i: usize) -> usize {
        self.closer_of(i, LeftParenthesis)
            .map_or(0, |close| close + 1 - i)
    }

    pub(crate) fn parse_parentheses(&mut self) -> Result<Node> {
        self.parse_group(NodeKind::Parentheses)
    }

    pub(crate) fn scan_brackets(&mut self, i: usize) -> usize {
        self.closer_of(i, LeftSquareBracket)
            .map_or(0, |close| close + 1 - i)
    }

    pub(crate) fn parse_brackets(&mut self) -> Result<Node> {
        self.parse_group(NodeKind::Brackets)
    }

    /// `(...)` or `[...]` holding a tset sequence that must reach the closer.
    fn parse_group(&mut self, kind: NodeKind) -> Result<Node> {
        let start = self.current();
        let Some(close) = self.tokens.get(self.pos).and_then(|t| t.closer) else {
            return Err(self.syntax_error(self.pos));
        };
        self.bump();
        let content = self.nested(|p| p.parse_tsets())?;
        if self.pos != close {
            return Err(self.syntax_error(self.pos));
        }
        self.bump();
        Ok(Node::composite(kind, content, start))
    }

    /// Name immediately followed by a parenthesis group. The arguments are
    /// only validated while building.
    pub(crate) fn scan_function(&mut self, i: usize) -> usize {
        let name = self.scan_ident(i);
        if name == 0 {
            return 0;
        }
        self.closer_of(i + name, LeftParenthesis)
            .map_or(0, |close| close + 1 - i)
    }

    pub(crate) fn parse_function(&mut self) -> Result<Node> {
        let start = self.current();
        let name = self.parse_ident();
        let arguments = self.parse_arguments()?;
        Ok(Node::composite(
            NodeKind::Function,
            vec![name, arguments],
            start,
        ))
    }

    /// Mixin argument list: every element must be an argument.
    pub(crate) fn scan_arguments(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.arguments,
            |p| {
                let Some(close) = p.closer_of(i, LeftParenthesis) else {
                    return 0;
                };
                let mut j = i + 1;
                while j < close {
                    match p.scan_argument(j) {
                        0 => return 0,
                        len => j += len,
                    }
                }
                if j == close { close + 1 - i } else { 0 }
            },
        )
    }

    /// Argument list of a function or mixin. Declarations are tried first
    /// and a class is accepted as a last resort.
    pub(crate) fn parse_arguments(&mut self) -> Result<Node> {
        let start = self.current();
        let Some(close) = self.closer_of(self.pos, LeftParenthesis) else {
            return Err(self.syntax_error(self.pos));
        };
        self.bump(); // `(`

        let content = self.nested(|p| {
            let mut content = Vec::new();
            while p.pos < close {
                if p.scan_declaration(p.pos) > 0 {
                    content.push(p.parse_declaration()?);
                } else if let Some(m) = p.match_argument(p.pos) {
                    p.parse_argument(m.shape, &mut content)?;
                } else if p.scan_class(p.pos) > 0 {
                    content.push(p.parse_class());
                } else {
                    return Err(p.syntax_error(p.pos));
                }
            }
            Ok(content)
        })?;

        if self.pos != close {
            return Err(self.syntax_error(self.pos));
        }
        self.bump(); // `)`
        Ok(Node::composite(NodeKind::Arguments, content, start))
    }

    fn match_argument(&mut self, i: usize) -> Option<Match<ArgumentKind>> {
        self.memoized(
            i,
            |slot| &mut slot.argument,
            |p| {
                let alternatives: [(ArgumentKind, Scan<'_, '_>); 19] = [
                    (ArgumentKind::EscapedString, Self::scan_escaped_string),
                    (ArgumentKind::Declaration, Self::scan_declaration),
                    (ArgumentKind::VariablesList, Self::scan_variables_list),
                    (ArgumentKind::Variable, Self::scan_variable),
                    (ArgumentKind::Spacing, Self::scan_sc),
                    (ArgumentKind::Unary, Self::scan_unary),
                    (ArgumentKind::Operator, Self::scan_operator),
                    (ArgumentKind::Delimiter, Self::scan_delim),
                    (ArgumentKind::DeclarationDelimiter, Self::scan_decl_delim),
                    (ArgumentKind::String, Self::scan_string),
                    (ArgumentKind::Percentage, Self::scan_percentage),
                    (ArgumentKind::Dimension, Self::scan_dimension),
                    (ArgumentKind::Number, Self::scan_number),
                    (ArgumentKind::Uri, Self::scan_uri),
                    (ArgumentKind::Function, Self::scan_function),
                    (ArgumentKind::Ident, Self::scan_ident),
                    (ArgumentKind::Color, Self::scan_color),
                    (ArgumentKind::Block, Self::scan_block),
                    (ArgumentKind::Parentheses, Self::scan_parentheses),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    pub(crate) fn scan_argument(&mut self, i: usize) -> usize {
        self.match_argument(i).map_or(0, |m| m.len())
    }

    fn parse_argument(&mut self, shape: ArgumentKind, out: &mut Vec<Node>) -> Result<()> {
        let node = match shape {
            ArgumentKind::Spacing => {
                out.extend(self.parse_sc());
                return Ok(());
            }
            ArgumentKind::EscapedString => self.parse_escaped_string(),
            ArgumentKind::Declaration => self.parse_declaration()?,
            ArgumentKind::VariablesList => self.parse_variables_list(),
            ArgumentKind::Variable => self.parse_variable(),
            ArgumentKind::Unary => self.parse_unary(),
            ArgumentKind::Operator => self.parse_operator(),
            ArgumentKind::Delimiter => self.parse_delim(),
            ArgumentKind::DeclarationDelimiter => self.parse_decl_delim(),
            ArgumentKind::String => self.parse_string(),
            ArgumentKind::Percentage => self.parse_percentage(),
            ArgumentKind::Dimension => self.parse_dimension(),
            ArgumentKind::Number => self.parse_number(),
            ArgumentKind::Uri => self.parse_uri()?,
            ArgumentKind::Function => self.parse_function()?,
            ArgumentKind::Ident => self.parse_ident(),
            ArgumentKind::Color => self.parse_color(),
            ArgumentKind::Block => self.parse_block()?,
            ArgumentKind::Parentheses => self.parse_parentheses()?,
        };
        out.push(node);
        Ok(())
    }

    /// Value parts separated by optional spacing. A block ends the value.
    pub(crate) fn scan_value(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.value,
            |p| {
                let mut j = i;
                loop {
                    let spacing = p.scan_sc(j);
                    let Some(part) = p.match_value_part(j + spacing) else {
                        break;
                    };
                    j += spacing + part.len();
                    if part.shape == ValuePart::Block {
                        break;
                    }
                }
                j - i
            },
        )
    }

    pub(crate) fn parse_value(&mut self) -> Result<Node> {
        let start = self.current();
        let mut content = Vec::new();
        loop {
            let spacing = self.scan_sc(self.pos);
            let Some(part) = self.match_value_part(self.pos + spacing) else {
                break;
            };
            content.extend(self.parse_sc());
            content.push(self.parse_value_part(part.shape)?);
            if part.shape == ValuePart::Block {
                break;
            }
        }
        Ok(Node::composite(NodeKind::Value, content, start))
    }

    fn match_value_part(&mut self, i: usize) -> Option<Match<ValuePart>> {
        self.memoized(
            i,
            |slot| &mut slot.value_part,
            |p| {
                let alternatives: [(ValuePart, Scan<'_, '_>); 10] = [
                    (ValuePart::EscapedString, Self::scan_escaped_string),
                    (ValuePart::InterpolatedVariable, Self::scan_interpolated_variable),
                    (ValuePart::Variable, Self::scan_variable),
                    (ValuePart::Color, Self::scan_color),
                    (ValuePart::Block, Self::scan_block),
                    (ValuePart::Progid, Self::scan_progid),
                    (ValuePart::Any, Self::scan_any),
                    (ValuePart::AtKeyword, Self::scan_at_keyword),
                    (ValuePart::Operator, Self::scan_operator),
                    (ValuePart::Important, Self::scan_important),
                ];
                p.first_match(i, &alternatives)
            },
        )
    }

    fn parse_value_part(&mut self, shape: ValuePart) -> Result<Node> {
        Ok(match shape {
            ValuePart::EscapedString => self.parse_escaped_string(),
            ValuePart::InterpolatedVariable => self.parse_interpolated_variable(),
            ValuePart::Variable => self.parse_variable(),
            ValuePart::Color => self.parse_color(),
            ValuePart::Block => self.parse_block()?,
            ValuePart::Progid => self.parse_progid(),
            ValuePart::Any => self.parse_any()?,
            ValuePart::AtKeyword => self.parse_at_keyword(),
            ValuePart::Operator => self.parse_operator(),
            ValuePart::Important => self.parse_important(),
        })
    }
}
