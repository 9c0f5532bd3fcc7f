//! Control-flow statements

use crate::parser::{BoxedParser, literal_string, many, sequence};

use super::literal::{braced, identifier, whitespace};

/// if := "if" expression "{" block "}"
pub fn if_statement(expression: BoxedParser, block: BoxedParser) -> BoxedParser {
    sequence(vec![
        whitespace(),
        literal_string("if").map_to("type"),
        whitespace(),
        expression.map_to("condition"),
        braced(block),
    ])
    .map_to("if")
}

/// for := "for" identifier "in" value "{" block "}"
pub fn for_statement(value: BoxedParser, block: BoxedParser) -> BoxedParser {
    sequence(vec![
        whitespace(),
        literal_string("for").map_to("type"),
        whitespace(),
        identifier().map_to("variable"),
        whitespace(),
        literal_string("in"),
        whitespace(),
        value.map_to("iterable"),
        braced(block),
    ])
    .map_to("for")
}

/// block := (if | for)*
///
/// `block` is the deferred reference used for the nested bodies.
pub fn block(expression: BoxedParser, value: BoxedParser, block: BoxedParser) -> BoxedParser {
    many(if_statement(expression, block.clone()) | for_statement(value, block))
}
