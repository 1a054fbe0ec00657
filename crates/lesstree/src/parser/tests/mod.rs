
use lesstree_core::Node;

use crate::parser::{StartSymbol, parse_str};

#[track_caller]
fn tree(source: &str, start: StartSymbol) -> Node {
    match parse_str(source, start) {
        Ok(node) => node,
        Err(err) => panic!("expected {source:?} to parse as {start}: {err}"),
    }
}

#[track_caller]
fn dump(source: &str, start: StartSymbol) -> String {
    tree(source, start).dump()
}

#[track_caller]
fn stylesheet(source: &str) -> String {
    dump(source, StartSymbol::Stylesheet)
}

/// Line of the syntax error `source` must raise.
#[track_caller]
fn error_line(source: &str, start: StartSymbol) -> u32 {
    match parse_str(source, start) {
        Ok(node) => panic!("expected {source:?} to be rejected, got:\n{}", node.dump()),
        Err(err) => match err.line() {
            Some(line) => line,
            None => panic!("expected a syntax error, got {err}"),
        },
    }
}
