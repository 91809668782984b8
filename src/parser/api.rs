//! Public API for the parser.

use std::fmt;
use std::ops::Range;

use chumsky::error::Simple;
use chumsky::Parser;

use crate::ast::Node;
use crate::parser::combinators::pattern;

/// A rejected parse: the grammar could not consume the input.
///
/// There is no partial or recovered mode; the caller gets the offending
/// position and the alternatives the grammar would have accepted there.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Byte range of the offending input.
    pub span: Range<usize>,
    /// The character found there, if any.
    pub found: Option<char>,
    /// The alternatives attempted at that position.
    pub expected: Vec<String>,
}

impl ParseError {
    fn from_errors(errors: Vec<Simple<char>>) -> ParseError {
        // Report the attempt that made it furthest into the input.
        let error = errors
            .into_iter()
            .max_by_key(|e| e.span().start)
            .expect("chumsky reports at least one error on failure");
        let mut expected: Vec<String> = error
            .expected()
            .map(|alternative| match alternative {
                Some(c) => format!("'{}'", c),
                None => "end of input".to_string(),
            })
            .collect();
        expected.sort();
        expected.dedup();
        ParseError {
            span: error.span(),
            found: error.found().copied(),
            expected,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(c) => write!(
                f,
                "invalid pattern at offset {}: unexpected '{}'",
                self.span.start, c
            )?,
            None => write!(
                f,
                "invalid pattern at offset {}: unexpected end of input",
                self.span.start
            )?,
        }
        if !self.expected.is_empty() {
            write!(f, " (expected one of: {})", self.expected.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Parse pattern source into its syntax tree.
///
/// The result is always a root [`Node::Concat`]; empty input parses to
/// `Concat([])`. Any unconsumed input is a [`ParseError`].
pub fn parse(source: &str) -> Result<Node, ParseError> {
    pattern().parse(source).map_err(ParseError::from_errors)
}
