//! Arithmetic and comparison expressions

use crate::parser::{BoxedParser, choice, literal, literal_string, many, sequence};

use super::literal::{identifier, integer, whitespace};

/// value := integer | identifier | "(" expression ")"
///
/// `expression` is the deferred reference to the full expression rule.
pub fn value(expression: BoxedParser) -> BoxedParser {
    let parenthesized = sequence(vec![
        whitespace(),
        literal('('),
        whitespace(),
        expression,
        whitespace(),
        literal(')'),
    ]);

    choice(vec![integer(), identifier(), parenthesized])
}

/// binary := operand (op operand)*
///
/// The operands are labeled `left`/`right`, every trailing operation is
/// wrapped in an `item`, and the whole chain is labeled `kind`.
fn binary(operand: BoxedParser, op1: &str, op2: &str, kind: &str) -> BoxedParser {
    let operator = (literal_string(op1) | literal_string(op2)).map_to("operator");
    let tail = sequence(vec![
        whitespace(),
        operator,
        whitespace(),
        operand.clone().map_to("right"),
    ]);

    (operand.map_to("left") + many(tail)).map_to(kind)
}

/// expression := equality
/// equality   := additive (("==" | "!=") additive)*
/// additive   := term (("+" | "-") term)*
/// term       := value (("*" | "/") value)*
pub fn expression(value: BoxedParser) -> BoxedParser {
    let term = binary(value, "*", "/", "MulExpression");
    let additive = binary(term, "+", "-", "AddExpression");
    binary(additive, "==", "!=", "EqualityExpression")
}
