//! Character-level parsers every grammar bottoms out in

use super::combinators::{BoxedParser, choice, sequence};
use super::state::{Match, ParseError};

/// Match exactly `expected` at the start of the input.
pub fn literal(expected: char) -> BoxedParser {
    BoxedParser::new(move |input: &str| {
        let Some(found) = input.chars().next() else {
            return Err(ParseError::new("End of input stream."));
        };

        if found == expected {
            let (matched, rest) = input.split_at(found.len_utf8());
            Ok(Match::new(matched, rest))
        } else {
            Err(ParseError::new(format!(
                "Expected '{expected}' but got '{found}'"
            )))
        }
    })
}

/// Any one character of `chars`
pub fn char_set(chars: &str) -> BoxedParser {
    choice(chars.chars().map(literal).collect())
}

/// Any one character in `lo..=hi`
pub fn char_range(lo: char, hi: char) -> BoxedParser {
    choice((lo..=hi).map(literal).collect())
}

/// The characters of `text`, in order
pub fn literal_string(text: &str) -> BoxedParser {
    sequence(text.chars().map(literal).collect())
}
