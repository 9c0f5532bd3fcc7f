//! Top-level declarations

use crate::parser::{BoxedParser, choice, list_of, literal, literal_string, many, sequence};

use super::literal::{braced, identifier, integer, whitespace};

/// const := "const" identifier "=" integer
pub fn constant() -> BoxedParser {
    sequence(vec![
        whitespace(),
        literal_string("const").map_to("type"),
        whitespace(),
        identifier().map_to("name"),
        whitespace(),
        literal('='),
        whitespace(),
        integer().map_to("value"),
    ])
    .map_to("const")
}

/// parameter := identifier identifier
fn parameter() -> BoxedParser {
    sequence(vec![
        whitespace(),
        identifier().map_to("type"),
        whitespace(),
        identifier().map_to("name"),
    ])
    .map_to("parameter")
}

/// function := "function" identifier "(" parameters ")" "{" block "}"
pub fn function(block: BoxedParser) -> BoxedParser {
    sequence(vec![
        whitespace(),
        literal_string("function").map_to("type"),
        whitespace(),
        identifier().map_to("name"),
        whitespace(),
        literal('('),
        list_of(whitespace(), parameter(), ',').map_to("parameters"),
        whitespace(),
        literal(')'),
        braced(block),
    ])
    .map_to("function")
}

/// field := identifier identifier ";"
fn field() -> BoxedParser {
    sequence(vec![
        whitespace(),
        identifier().map_to("name"),
        whitespace(),
        identifier().map_to("field"),
        whitespace(),
        literal(';'),
    ])
}

/// struct := "struct" identifier "{" (field | function)* "}"
pub fn structure(function: BoxedParser) -> BoxedParser {
    sequence(vec![
        whitespace(),
        literal_string("struct").map_to("type"),
        whitespace(),
        identifier().map_to("name"),
        braced(many(field() | function)),
    ])
    .map_to("struct")
}

/// program := (struct | const | function)*
pub fn program(structure: BoxedParser, constant: BoxedParser, function: BoxedParser) -> BoxedParser {
    many(choice(vec![structure, constant, function])).map_to("ast")
}
