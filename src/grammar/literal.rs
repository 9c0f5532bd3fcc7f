//! Lexical rules shared by the whole grammar

use crate::parser::{BoxedParser, char_range, char_set, literal, many, many1, opt, sequence};

/// whitespace := [ \t\r\n]*
pub fn whitespace() -> BoxedParser {
    opt(many(char_set(" \t\r\n")))
}

pub fn digit() -> BoxedParser {
    char_range('0', '9')
}

/// letter := [a-z] | [A-Z]
pub fn letter() -> BoxedParser {
    char_range('a', 'z') | char_range('A', 'Z')
}

/// identifier := letter (letter | digit)*
pub fn identifier() -> BoxedParser {
    letter() + many(letter() | digit())
}

/// integer := digit+
pub fn integer() -> BoxedParser {
    many1(digit())
}

/// braced(inner) := "{" inner "}"
pub fn braced(inner: BoxedParser) -> BoxedParser {
    sequence(vec![
        whitespace(),
        literal('{'),
        inner,
        whitespace(),
        literal('}'),
    ])
}
