//! Example grammar for a small declarative language
//!
//! The grammar is built entirely from the public combinators and serves
//! as the reference client of the crate:
//! - `literal`: whitespace, identifiers, integers, braces
//! - `expression`: `*` `/`, `+` `-` and `==` `!=` chains over values
//! - `statement`: `if` and `for` blocks
//! - `declaration`: `const`, `function` and `struct` declarations
//!
//! Expressions and blocks are recursive, so [`Grammar::new`] declares a
//! [`Rule`] for each, builds everything on top of the deferred references
//! and only then defines the rules.

mod declaration;
mod expression;
mod literal;
mod statement;

use crate::parser::{BoxedParser, GrammarError, Rule};

pub use literal::{identifier, integer, whitespace};

#[derive(Debug, Clone)]
pub struct Grammar {
    expression: BoxedParser,
    constant: BoxedParser,
    function: BoxedParser,
    structure: BoxedParser,
    program: BoxedParser,
}

impl Grammar {
    pub fn new() -> Result<Self, GrammarError> {
        let expression_rule = Rule::new("expression");
        let block_rule = Rule::new("block");

        let value = expression::value(expression_rule.parser());
        let expression = expression::expression(value.clone());
        let block = statement::block(expression.clone(), value, block_rule.parser());

        expression_rule.define(expression.clone())?;
        block_rule.define(block)?;

        let constant = declaration::constant();
        let function = declaration::function(block_rule.parser());
        let structure = declaration::structure(function.clone());
        let program = declaration::program(structure.clone(), constant.clone(), function.clone());

        log::debug!("example grammar assembled");

        Ok(Self {
            expression,
            constant,
            function,
            structure,
            program,
        })
    }

    /// program := (struct | const | function)*, labeled `ast`
    pub fn program(&self) -> BoxedParser {
        self.program.clone()
    }

    pub fn expression(&self) -> BoxedParser {
        self.expression.clone()
    }

    pub fn constant(&self) -> BoxedParser {
        self.constant.clone()
    }

    pub fn function(&self) -> BoxedParser {
        self.function.clone()
    }

    pub fn structure(&self) -> BoxedParser {
        self.structure.clone()
    }
}
