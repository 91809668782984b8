//! Parser combinator functions for the bracketed pattern grammar.
//!
//! The grammar is ordered choice: the first alternative that matches wins,
//! and a committed alternative is never reconsidered. Reference grammar:
//!
//! ```text
//! pattern        = outer* EOF
//! outer          = outer_literal / braces
//! outer_literal  = [^\[\]]+
//! braces         = '[' ws? ops_inners? ws? ']'
//! ops_inners     = with_ops / inners
//! with_ops       = ops (ws inners)?
//! ops            = op (ws op)*
//! op             = [-+_A-Za-z0-9]+
//! inners         = or_body (ws? '|' ws? or_body)*
//! or_body        = inner (ws inner)*
//! inner          = inner_literal / def / macro / braces
//! macro          = '#' [A-Za-z0-9_]+
//! inner_literal  = "'" [^']* "'" / '"' [^"]* '"'
//! def            = macro '=' braces
//! ```
//!
//! Operators must be a contiguous prefix of a group: once inner content has
//! been consumed, a trailing operator-looking token has no production left to
//! match it and the parse fails as incomplete.

use chumsky::prelude::*;

use crate::ast::Node;

/// One or more whitespace characters, including newlines.
fn whitespace() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignored()
}

/// An operator token. The character class deliberately includes `-` and `+`
/// so quantifier-shaped names like `0-1` and `1+` lex as single operators.
fn operator_name() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_'))
        .repeated()
        .at_least(1)
        .collect()
}

/// A macro reference: `#` followed by letters, digits, or underscores.
/// The stored name keeps the sigil. Hyphens are not macro-name characters;
/// `[#a-]` leaves the `-` unconsumed and the parse fails.
fn macro_name() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    just('#')
        .ignore_then(
            filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
                .repeated()
                .at_least(1)
                .collect::<String>(),
        )
        .map(|name| format!("#{}", name))
}

/// A quoted literal. Contents run to the matching closing quote with no
/// escape processing; the other quote character is plain text inside.
fn quoted_literal() -> impl Parser<char, Node, Error = Simple<char>> + Clone {
    let single = just('\'')
        .ignore_then(filter(|c: &char| *c != '\'').repeated().collect::<String>())
        .then_ignore(just('\''));
    let double = just('"')
        .ignore_then(filter(|c: &char| *c != '"').repeated().collect::<String>())
        .then_ignore(just('"'));
    single.or(double).map(Node::Literal)
}

/// A bracketed group, fully recursive. An empty group elides to
/// [`Node::Nothing`] so enclosing context can drop it.
fn braces() -> impl Parser<char, Node, Error = Simple<char>> + Clone {
    recursive(|braces| {
        let def = macro_name()
            .then_ignore(just('='))
            .then(braces.clone())
            .map(|(name, body)| Node::Def(name, Box::new(body)));

        // Ordered: a quote starts a literal, a sigil starts a definition or
        // macro (definition first, since it is a longer match), a bracket
        // opens a nested group.
        let inner = quoted_literal()
            .or(def)
            .or(macro_name().map(Node::Macro))
            .or(braces);

        let or_body = inner
            .separated_by(whitespace())
            .at_least(1)
            .map(Node::concat);

        let pipe = whitespace()
            .or_not()
            .then(just('|'))
            .then(whitespace().or_not())
            .ignored();

        let inners = or_body.separated_by(pipe).at_least(1).map(Node::either);

        // Operators chain right-to-left: the leftmost written operator is
        // outermost. A group of bare operators has no sub-expression.
        let with_ops = operator_name()
            .separated_by(whitespace())
            .at_least(1)
            .then(whitespace().ignore_then(inners.clone()).or_not())
            .map(|(ops, sub)| Node::operator_chain(ops, sub.unwrap_or(Node::Nothing)));

        let ops_inners = with_ops.or(inners);

        just('[')
            .ignore_then(whitespace().or_not())
            .ignore_then(ops_inners.or_not())
            .then_ignore(whitespace().or_not())
            .then_ignore(just(']'))
            .map(|body| body.unwrap_or(Node::Nothing))
    })
}

/// The whole pattern: outer literal runs and bracketed groups, in source
/// order, consuming all input. The root is always a `Concat`; groups that
/// elided to `Nothing` contribute no items.
pub(crate) fn pattern() -> impl Parser<char, Node, Error = Simple<char>> {
    let outer_literal = filter(|c: &char| *c != '[' && *c != ']')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(Node::Literal);

    outer_literal
        .or(braces())
        .repeated()
        .then_ignore(end())
        .map(|items| {
            let mut flat = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Node::Concat(children) => flat.extend(children),
                    Node::Nothing => {}
                    other => flat.push(other),
                }
            }
            Node::Concat(flat)
        })
}
