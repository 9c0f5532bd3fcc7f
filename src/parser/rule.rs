//! Forward references for recursive grammars
//!
//! A grammar is a value built bottom-up, so a rule that mentions itself (or
//! an ancestor) has nothing to point at while it is being built. A [`Rule`]
//! is declared first, handed out as a deferred parser wherever it is
//! needed, and defined once the real parser exists:
//!
//! ```
//! use pegtree::parser::{Parser, Rule, literal, literal_string};
//!
//! let nested = Rule::new("nested");
//! let parser = (literal('(') + nested.parser() + literal(')')) | literal_string("a");
//! nested.define(parser.clone()).unwrap();
//!
//! assert_eq!(parser.parse("((a))").unwrap().matched, "((a))");
//! ```
//!
//! The slot is a [`OnceLock`], so defining happens-before any parse that
//! observes the definition, including parses on other threads.

use std::sync::{Arc, OnceLock};

use super::combinators::BoxedParser;
use super::state::{ParseError, Parser};

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("rule '{0}' is already defined")]
    AlreadyDefined(String),
}

/// A named slot for a parser that is defined after it is referenced.
///
/// A defined rule that refers to itself holds a reference to its own slot
/// and is never freed.
#[derive(Debug, Clone)]
pub struct Rule {
    name: Arc<str>,
    slot: Arc<OnceLock<BoxedParser>>,
}

impl Rule {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            slot: Arc::new(OnceLock::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }

    /// A parser that delegates to whatever this rule is defined as at
    /// parse time. Parsing through an undefined rule fails.
    pub fn parser(&self) -> BoxedParser {
        let name = Arc::clone(&self.name);
        let slot = Arc::clone(&self.slot);
        BoxedParser::new(move |input: &str| match slot.get() {
            Some(parser) => {
                log::trace!("entering rule '{name}'");
                parser.parse(input)
            }
            None => Err(ParseError::new(format!(
                "Rule '{name}' was used before it was defined."
            ))),
        })
    }

    pub fn define(&self, parser: BoxedParser) -> Result<(), GrammarError> {
        self.slot
            .set(parser)
            .map_err(|_| GrammarError::AlreadyDefined(self.name.to_string()))?;
        log::debug!("defined rule '{}'", self.name);
        Ok(())
    }
}
