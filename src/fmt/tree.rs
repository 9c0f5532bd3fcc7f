use std::fmt::{self, Display};

use crate::ast::{Node, NodeValue};
use crate::parser::{Match, ParseResult};

const INDENT: &str = "    ";

struct Formatter {
    buffer: String,
    indent_level: usize,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Render a parse outcome: the bare error message on failure, the match
/// and its node tree on success.
pub fn render(result: &ParseResult<'_>) -> String {
    match result {
        Ok(found) => render_match(found),
        Err(err) => err.to_string(),
    }
}

pub fn render_match(found: &Match<'_>) -> String {
    let mut formatter = Formatter::new();

    formatter.write_str(&format!("Matched: \"{}\"", found.matched));
    formatter.write_newline();
    formatter.write_str(&format!("Rest: \"{}\"", found.rest));
    formatter.write_newline();
    format_nodes(&found.nodes, &mut formatter);

    formatter.finish()
}

fn format_nodes(nodes: &[Node], fmt: &mut Formatter) {
    for node in nodes {
        format_node(node, fmt);
    }
}

fn format_node(node: &Node, fmt: &mut Formatter) {
    fmt.write_indent();
    match &node.value {
        NodeValue::Text(text) => {
            fmt.write_str(&format!("{}: \"{}\"", node.name, text));
            fmt.write_newline();
        }
        NodeValue::Children(children) => {
            fmt.write_str(&format!("{}: {{", node.name));
            fmt.write_newline();
            fmt.indent();
            format_nodes(children, fmt);
            fmt.dedent();
            fmt.write_indent();
            fmt.write_str("}");
            fmt.write_newline();
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_node(self, &mut formatter);
        write!(f, "{}", formatter.finish())
    }
}
