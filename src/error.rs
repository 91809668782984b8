//! Crate-level error type uniting the two failure modes of compilation.

use std::fmt;

use crate::parser::ParseError;
use crate::resolver::ResolveError;

/// Any failure a caller of [`crate::compile`] can see.
///
/// Parse failures mean the input never produced a tree; resolution failures
/// mean the tree was well-formed but named an unknown operator or macro.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Parse(ParseError),
    Resolve(ResolveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::Resolve(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Resolve(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Error {
        Error::Parse(error)
    }
}

impl From<ResolveError> for Error {
    fn from(error: ResolveError) -> Error {
        Error::Resolve(error)
    }
}
