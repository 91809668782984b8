//! Parsing of pattern source text into the AST.

pub mod api;
pub mod combinators;

#[cfg(test)]
mod tests;

pub use api::{parse, ParseError};
