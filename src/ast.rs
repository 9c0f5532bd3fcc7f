//! The labeled match tree
//!
//! There is no syntax tree per grammar rule. Every parser produces the
//! same generic shape: a list of named nodes, each holding either the text
//! it matched or a list of child nodes. Nodes only come into existence
//! through [`BoxedParser::map_to`](crate::parser::BoxedParser::map_to)
//! (and the anonymous `item` wrappers added by
//! [`many`](crate::parser::many)).

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    pub value: NodeValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NodeValue {
    /// Matched text of a flat sub-parse
    Text(String),
    /// Labeled sub-results, in the order they completed
    Children(Vec<Node>),
}

impl Node {
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: NodeValue::Text(text.into()),
        }
    }

    pub fn children(name: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            value: NodeValue::Children(nodes),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            NodeValue::Text(text) => Some(text),
            NodeValue::Children(_) => None,
        }
    }

    pub fn as_children(&self) -> Option<&[Node]> {
        match &self.value {
            NodeValue::Text(_) => None,
            NodeValue::Children(nodes) => Some(nodes),
        }
    }

    /// First direct child carrying `name`
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.as_children()?.iter().find(|node| node.name == name)
    }
}
