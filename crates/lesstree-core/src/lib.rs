//! Core data structures for lesstree.
//!
//! The parser in the `lesstree` crate produces [`Node`] trees; this crate holds
//! the tree itself and the position arithmetic that derives every node's end
//! from its start and content.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod node;
mod position;


pub use node::{Content, Node, NodeKind};
pub use position::{Delimiters, Position, compute_end};
