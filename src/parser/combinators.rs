use std::ops::{Add, BitOr};
use std::sync::Arc;

use crate::ast::Node;

use super::primitive::literal;
use super::state::{Match, ParseError, ParseResult, Parser};

type ParserFn = Arc<dyn for<'a> Fn(&'a str) -> ParseResult<'a> + Send + Sync>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser {
    parser: ParserFn,
}

impl Clone for BoxedParser {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl BoxedParser {
    pub fn new<F>(parser: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> ParseResult<'a> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl Parser for BoxedParser {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (self.parser)(input)
    }
}

impl std::fmt::Debug for BoxedParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BoxedParser")
    }
}

// === Combinators as methods ===

impl BoxedParser {
    /// Sequence: parse self, then other on whatever self left over.
    ///
    /// The first failure is returned unchanged. On success the matched
    /// text is the concatenation of both matches and the nodes of both
    /// sides are hoisted, left before right.
    pub fn and_then(self, other: BoxedParser) -> BoxedParser {
        BoxedParser::new(move |input: &str| {
            let first = self.parse(input)?;
            let second = other.parse(first.rest)?;
            let mut result = Match::spanning(input, second.rest);
            result.combine(first);
            result.combine(second);
            Ok(result)
        })
    }

    /// Ordered choice: try self, and only if it fails try other on the
    /// same input. Whatever other returns is returned verbatim; self's
    /// error is dropped.
    pub fn or_else(self, other: BoxedParser) -> BoxedParser {
        BoxedParser::new(move |input: &str| match self.parse(input) {
            Ok(result) => Ok(result),
            Err(_) => other.parse(input),
        })
    }

    /// Label the match of self as `name`.
    ///
    /// A flat match becomes a leaf `name: matched` (dropped when the match
    /// is empty). A match that already carries nodes is regrouped under a
    /// single container `name`, and its raw text is not recorded.
    pub fn map_to(self, name: impl Into<String>) -> BoxedParser {
        let name = name.into();
        BoxedParser::new(move |input: &str| {
            let inner = self.parse(input)?;
            let mut result = Match::new(inner.matched, inner.rest);
            if inner.nodes.is_empty() {
                result.add_text(&name, inner.matched);
            } else {
                result.add_children(&name, inner.nodes);
            }
            Ok(result)
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> A then B
impl Add<BoxedParser> for BoxedParser {
    type Output = BoxedParser;

    fn add(self, rhs: BoxedParser) -> Self::Output {
        self.and_then(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl BitOr<BoxedParser> for BoxedParser {
    type Output = BoxedParser;

    fn bitor(self, rhs: BoxedParser) -> Self::Output {
        self.or_else(rhs)
    }
}

// === Structural combinators ===

/// Always succeeds without consuming anything
pub fn empty() -> BoxedParser {
    BoxedParser::new(|input: &str| Ok(Match::new("", input)))
}

/// Never succeeds
fn fail(message: &'static str) -> BoxedParser {
    BoxedParser::new(move |_: &str| Err(ParseError::new(message)))
}

/// Left fold of [`BoxedParser::and_then`]. An empty list matches nothing
/// and always succeeds.
pub fn sequence(parsers: Vec<BoxedParser>) -> BoxedParser {
    parsers.into_iter().reduce(BoxedParser::and_then).unwrap_or_else(empty)
}

/// Left fold of [`BoxedParser::or_else`]. An empty list always fails.
pub fn choice(parsers: Vec<BoxedParser>) -> BoxedParser {
    parsers
        .into_iter()
        .reduce(BoxedParser::or_else)
        .unwrap_or_else(|| fail("No alternatives to choose from."))
}

/// Zero or one; never fails
pub fn opt(parser: BoxedParser) -> BoxedParser {
    choice(vec![parser, empty()])
}

/// Apply `parser` until it fails, starting at `input`. Nodes of every
/// successful iteration are wrapped in an anonymous `item` container.
/// Returns the remainder after the last successful iteration.
fn repeat<'a>(parser: &BoxedParser, mut input: &'a str, items: &mut Vec<Node>) -> &'a str {
    while let Ok(step) = parser.parse(input) {
        // a step that consumes nothing would succeed forever
        if step.rest.len() == input.len() {
            break;
        }
        input = step.rest;
        if !step.nodes.is_empty() {
            items.push(Node::children("item", step.nodes));
        }
    }
    input
}

/// Parse zero or more occurrences; never fails
pub fn many(parser: BoxedParser) -> BoxedParser {
    BoxedParser::new(move |input: &str| {
        let mut items = Vec::new();
        let rest = repeat(&parser, input, &mut items);
        let mut result = Match::spanning(input, rest);
        result.nodes = items;
        Ok(result)
    })
}

/// Parse one or more occurrences.
///
/// Fails with the first application's error. Unlike [`many`], the nodes
/// produced by the individual iterations are not kept.
pub fn many1(parser: BoxedParser) -> BoxedParser {
    BoxedParser::new(move |input: &str| {
        let first = parser.parse(input)?;
        let rest = if first.rest.len() == input.len() {
            first.rest
        } else {
            repeat(&parser, first.rest, &mut Vec::new())
        };
        Ok(Match::spanning(input, rest))
    })
}

/// list_of := [ws element] (ws separator ws element)*
///
/// Only the leading element is labeled `item`; the rest are picked up by
/// [`many`]'s anonymous wrapping when they carry nodes of their own.
pub fn list_of(whitespace: BoxedParser, element: BoxedParser, separator: char) -> BoxedParser {
    let head = opt(whitespace.clone() + element.clone()).map_to("item");
    let tail = many(sequence(vec![
        whitespace.clone(),
        literal(separator),
        whitespace,
        element,
    ]));
    head + tail
}
