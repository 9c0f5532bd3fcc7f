//! Text rendering of parse results
//!
//! This module prints a [`ParseResult`](crate::parser::ParseResult) the way
//! the demo driver shows it: the raw message for a failure, otherwise the
//! matched/rest pair followed by the node tree.

pub mod tree;

// Re-export for convenience
pub use tree::*;
