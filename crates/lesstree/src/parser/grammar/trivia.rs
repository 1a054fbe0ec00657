use lesstree_core::{Node, NodeKind};

use crate::lexer::TokenKind::*;
use crate::parser::Parser;

impl Parser<'_, '_> {
    /// One whitespace run, however many tokens it spans.
    pub(crate) fn scan_s(&mut self, i: usize) -> usize {
        match self.tokens.get(i) {
            Some(token) if token.kind.is_whitespace() => {
                token.run_end.map_or(1, |end| end + 1 - i)
            }
            _ => 0,
        }
    }

    pub(crate) fn parse_s(&mut self) -> Node {
        let len = self.scan_s(self.pos);
        self.leaf(NodeKind::Space, len)
    }

    pub(crate) fn scan_comment_ml(&mut self, i: usize) -> usize {
        usize::from(self.is(i, CommentMl))
    }

    /// `/* … */`, stored without the markers.
    pub(crate) fn parse_comment_ml(&mut self) -> Node {
        let start = self.current();
        let text = self.text_at(self.pos);
        let inner = text.strip_prefix("/*").unwrap_or(text);
        let inner = inner.strip_suffix("*/").unwrap_or(inner);
        self.bump();
        Node::leaf(NodeKind::MultilineComment, inner, start)
    }

    pub(crate) fn scan_comment_sl(&mut self, i: usize) -> usize {
        usize::from(self.is(i, CommentSl))
    }

    /// `// …` up to the line break, stored without the marker.
    pub(crate) fn parse_comment_sl(&mut self) -> Node {
        let start = self.current();
        let text = self.text_at(self.pos);
        self.bump();
        Node::leaf(
            NodeKind::SinglelineComment,
            text.strip_prefix("//").unwrap_or(text),
            start,
        )
    }

    /// Any run of whitespace and comments.
    pub(crate) fn scan_sc(&mut self, i: usize) -> usize {
        self.memoized_len(
            i,
            |slot| &mut slot.spacing,
            |p| {
                let mut j = i;
                loop {
                    let len = match p.scan_s(j) {
                        0 => p.scan_comment_ml(j).max(p.scan_comment_sl(j)),
                        len => len,
                    };
                    if len == 0 {
                        break;
                    }
                    j += len;
                }
                j - i
            },
        )
    }

    pub(crate) fn parse_sc(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        loop {
            let node = match self.kind_at(self.pos) {
                Some(kind) if kind.is_whitespace() => self.parse_s(),
                Some(CommentMl) => self.parse_comment_ml(),
                Some(CommentSl) => self.parse_comment_sl(),
                _ => break,
            };
            nodes.push(node);
        }
        nodes
    }
}
