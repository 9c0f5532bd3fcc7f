//! # Pegtree - Parser Combinators That Build a Labeled Tree
//!
//! Pegtree is a small algebra of parsing functions. Grammars are assembled
//! from character literals and a handful of combinators, and every parser
//! produces the same kind of result: the text it consumed, the text it left
//! over and a generic tree of labeled sub-matches.
//!
//! ## Architecture Overview
//!
//! 1. **Match model** (`parser::state`, `ast`) - [`parser::Match`] and the
//!    recursive [`ast::Node`] tree
//! 2. **Primitives** (`parser::primitive`) - single characters, character
//!    sets and ranges, literal strings
//! 3. **Combinators** (`parser::combinators`) - sequencing, ordered choice,
//!    repetition, optionality, labeling and separated lists
//! 4. **Rules** (`parser::rule`) - forward references for recursive grammars
//! 5. **Rendering** (`fmt`) - the indented text form of a result
//! 6. **Example grammar** (`grammar`) - a toy language with structs,
//!    functions, constants, `if`/`for` blocks and arithmetic
//!
//! ## Semantics
//!
//! ### Ordered choice
//! `a | b` commits to the first alternative that succeeds. `b` only runs
//! when `a` fails, on the same input, and `a`'s error is discarded. There is
//! no longest match.
//!
//! ### Building the tree
//! Plain character matches carry no nodes. [`parser::BoxedParser::map_to`]
//! turns a flat match into a leaf `name: "text"`, or regroups a match that
//! already has nodes under a container `name`. Sequencing hoists the nodes of
//! both sides without wrapping them; [`parser::many`] wraps each iteration's
//! nodes in an anonymous `item`.
//!
//! ### Purity
//! Parsers hold no mutable state. A [`parser::BoxedParser`] is `Send + Sync`
//! and can be applied from many threads at once once all of its rules are
//! defined.
//!
//! ## Example
//!
//! ```
//! use pegtree::grammar::Grammar;
//! use pegtree::parser::Parser;
//!
//! let grammar = Grammar::new().unwrap();
//! let result = grammar.constant().parse("const x = 100").unwrap();
//!
//! let constant = &result.nodes[0];
//! assert_eq!(constant.name, "const");
//! assert_eq!(constant.child("name").and_then(|n| n.as_text()), Some("x"));
//! assert_eq!(constant.child("value").and_then(|n| n.as_text()), Some("100"));
//! ```
//!
//! ## Module Structure
//!
//! - [`ast`] - The labeled node tree
//! - [`parser`] - Parsers, combinators and rules
//! - [`fmt`] - Result rendering
//! - [`grammar`] - The example grammar

pub mod ast;
pub mod fmt;
pub mod grammar;
pub mod parser;
