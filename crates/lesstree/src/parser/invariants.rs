//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;

impl Parser<'_, '_> {
    /// A builder was entered only after its recognizer matched.
    #[inline]
    pub(super) fn assert_matched(&self, len: usize, what: &str) {
        debug_assert!(
            len > 0,
            "broken parser invariant: {what} built at token {} without a match (upstream caller's responsibility)",
            self.pos,
        );
    }

    /// A builder started at `from` consumed exactly the `len` tokens its
    /// recognizer measured.
    #[inline]
    pub(super) fn assert_consumed(&self, from: usize, len: usize, what: &str) {
        debug_assert_eq!(
            self.pos - from,
            len,
            "broken parser invariant: {what} at token {from} consumed a different length than recognized",
        );
    }

    #[inline]
    pub(super) fn assert_consumed_all(&self) {
        debug_assert_eq!(
            self.pos,
            self.tokens.len(),
            "broken parser invariant: parse stopped before the end of a fully recognized stream",
        );
    }
}
