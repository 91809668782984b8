//! # rebrace
//!
//! Compiles a readable, bracketed pattern language into standard regular
//! expressions. Authors write nested `[...]` expressions with named
//! operators, `#`-prefixed macros, quoted literals, alternation, and local
//! macro definitions instead of terse regex metacharacters:
//!
//! ```text
//! [capture 1+ #digit] items, [0-1 'roughly']
//! ```
//!
//! compiles to `(\d+) items, (?:roughly)?`.
//!
//! The pipeline has three pure stages: [`parse`] builds the syntax tree,
//! [`resolver::resolve`] translates it into assembler fragments (macro
//! definitions may appear anywhere and are collected before any lookup),
//! and [`assemble`] renders the fragments as regex text. [`compile`] runs
//! all three with the stock operator and macro catalog; [`compile_with`]
//! accepts a custom [`Resolver`].

pub mod asm;
pub mod ast;
pub mod error;
pub mod parser;
pub mod resolver;

pub use asm::{assemble, Fragment};
pub use ast::Node;
pub use error::Error;
pub use parser::{parse, ParseError};
pub use resolver::{resolve, DefaultResolver, MacroTable, ResolveError, Resolver};

/// Compile pattern source into a regular expression using the stock
/// operator and macro catalog.
pub fn compile(source: &str) -> Result<String, Error> {
    compile_with(source, &DefaultResolver)
}

/// Compile pattern source into a regular expression, resolving operators
/// and built-in macros through `resolver`.
pub fn compile_with(source: &str, resolver: &dyn Resolver) -> Result<String, Error> {
    let ast = parse(source)?;
    let table = MacroTable::collect(&ast)?;
    let fragment = resolve(&ast, &table, resolver)?;
    Ok(assemble(&fragment))
}
