use crate::ast::Node;

/// The single failure kind: a human-readable message, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

/// A successful parse: the consumed prefix, the untouched remainder and
/// every labeled node collected on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub matched: &'a str,
    pub rest: &'a str,
    pub nodes: Vec<Node>,
}

impl<'a> Match<'a> {
    pub fn new(matched: &'a str, rest: &'a str) -> Self {
        Self {
            matched,
            rest,
            nodes: Vec::new(),
        }
    }

    /// Match everything in `input` that precedes `rest`.
    ///
    /// `rest` must be a suffix of `input`.
    pub fn spanning(input: &'a str, rest: &'a str) -> Self {
        debug_assert!(input.ends_with(rest));
        Self::new(&input[..input.len() - rest.len()], rest)
    }

    /// Append a leaf node. Empty text is dropped.
    pub fn add_text(&mut self, name: &str, text: &str) {
        if !text.is_empty() {
            self.nodes.push(Node::text(name, text));
        }
    }

    /// Append a container node, even when `nodes` is empty.
    pub fn add_children(&mut self, name: &str, nodes: Vec<Node>) {
        self.nodes.push(Node::children(name, nodes));
    }

    /// Hoist the nodes of `other` into this match, keeping their order.
    pub fn combine(&mut self, other: Match<'_>) {
        self.nodes.extend(other.nodes);
    }

    pub fn is_complete(&self) -> bool {
        self.rest.is_empty()
    }
}

pub type ParseResult<'a> = Result<Match<'a>, ParseError>;

pub trait Parser {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a>;
}

impl<F> Parser for F
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a>,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        self(input)
    }
}
