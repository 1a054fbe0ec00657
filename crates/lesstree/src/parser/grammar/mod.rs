//! Grammar productions for LESS.
//!
//! Each production is a `scan_*` recognizer (or a `match_*` one when it also
//! records which alternative matched) paired with a `parse_*` builder, all
//! implemented as extensions of `Parser`.

mod atoms;
mod rules;
mod selectors;
mod trivia;
mod values;
mod variables;
