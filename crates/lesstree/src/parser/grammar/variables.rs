use lesstree_core::{Node, NodeKind};

use crate::lexer::TokenKind::*;
use crate::parser::Parser;

impl Parser<'_, '_> {
    /// `@name`, or `@@name` for a variable holding a variable's name.
    pub(crate) fn scan_variable(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.variable,
            |p| {
                if !p.is(i, CommercialAt) {
                    return 0;
                }
                if i >= 2 && p.is(i - 1, CommercialAt) && p.is(i - 2, CommercialAt) {
                    return 0;
                }
                let name = match p.scan_variable(i + 1) {
                    0 => p.scan_ident(i + 1),
                    len => len,
                };
                if name == 0 { 0 } else { name + 1 }
            },
        )
    }

    pub(crate) fn parse_variable(&mut self) -> Node {
        let start = self.current();
        self.bump(); // `@`
        let name = if self.scan_variable(self.pos) > 0 {
            self.parse_variable()
        } else {
            self.parse_ident()
        };
        Node::composite(NodeKind::Variable, vec![name], start)
    }

    /// `@rest...`
    pub(crate) fn scan_variables_list(&mut self, i: usize) -> usize {
        let variable = self.scan_variable(i);
        if variable == 0 {
            return 0;
        }
        let mut dots = 0;
        while self.is(i + variable + dots, FullStop) {
            dots += 1;
        }
        if dots == 3 { variable + 3 } else { 0 }
    }

    pub(crate) fn parse_variables_list(&mut self) -> Node {
        let start = self.current();
        let variable = self.parse_variable();
        self.bump_n(3); // `...`
        Node::composite(NodeKind::VariablesList, vec![variable], start)
    }

    /// `@{name}`
    pub(crate) fn scan_interpolated_variable(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.interpolated_variable,
            |p| {
                if !p.is(i, CommercialAt) || !p.is(i + 1, LeftCurlyBracket) {
                    return 0;
                }
                let name = p.scan_ident(i + 2);
                if name > 0 && p.is(i + 2 + name, RightCurlyBracket) {
                    name + 3
                } else {
                    0
                }
            },
        )
    }

    pub(crate) fn parse_interpolated_variable(&mut self) -> Node {
        let start = self.current();
        self.bump_n(2); // `@{`
        let name = self.parse_ident();
        self.bump(); // `}`
        Node::composite(NodeKind::InterpolatedVariable, vec![name], start)
    }

    pub(crate) fn scan_at_keyword(&mut self, i: usize) -> usize {
        if !self.is(i, CommercialAt) {
            return 0;
        }
        match self.scan_ident(i + 1) {
            0 => 0,
            len => len + 1,
        }
    }

    pub(crate) fn parse_at_keyword(&mut self) -> Node {
        let start = self.current();
        self.bump(); // `@`
        let name = self.parse_ident();
        Node::composite(NodeKind::AtKeyword, vec![name], start)
    }
}
