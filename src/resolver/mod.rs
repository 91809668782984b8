//! Resolution of parsed nodes into assembler fragments.
//!
//! Operator and macro names are free-form strings resolved at runtime. The
//! [`Resolver`] trait is the pluggable boundary: it turns an operator name
//! plus its (possibly absent) resolved operand into a fragment, and supplies
//! fragments for built-in macro names. Local definitions are handled here,
//! not by the resolver: a [`MacroTable`] is built by a full scan of the tree
//! before any lookup, so references may precede their definition.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::asm::Fragment;
use crate::ast::Node;

/// A failure while translating a syntactically valid tree into fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No operator with this name is registered.
    UnknownOperator(String),
    /// A macro reference with neither a local definition nor a built-in.
    UndefinedMacro(String),
    /// The same macro name is defined more than once in the tree.
    DuplicateDefinition(String),
    /// The operator requires a sub-expression but none was written.
    MissingOperand(String),
    /// A definition refers to itself, directly or through other macros.
    RecursiveMacro(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownOperator(name) => write!(f, "unknown operator '{}'", name),
            ResolveError::UndefinedMacro(name) => write!(f, "undefined macro '{}'", name),
            ResolveError::DuplicateDefinition(name) => {
                write!(f, "macro '{}' is defined more than once", name)
            }
            ResolveError::MissingOperand(name) => {
                write!(f, "operator '{}' requires a sub-expression", name)
            }
            ResolveError::RecursiveMacro(name) => {
                write!(f, "macro '{}' refers to itself", name)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// The macro definitions of one tree, keyed by sigil-prefixed name.
///
/// Collected in a single pass over the whole tree, so lookup is independent
/// of lexical position.
pub struct MacroTable<'a> {
    defs: HashMap<&'a str, &'a Node>,
}

impl<'a> MacroTable<'a> {
    /// Scan `root` for definitions, including definitions nested inside
    /// other definitions' bodies.
    pub fn collect(root: &'a Node) -> Result<MacroTable<'a>, ResolveError> {
        let mut defs = HashMap::new();
        collect_defs(root, &mut defs)?;
        Ok(MacroTable { defs })
    }

    fn get(&self, name: &str) -> Option<&'a Node> {
        self.defs.get(name).copied()
    }
}

fn collect_defs<'a>(
    node: &'a Node,
    defs: &mut HashMap<&'a str, &'a Node>,
) -> Result<(), ResolveError> {
    match node {
        Node::Def(name, body) => {
            if defs.insert(name.as_str(), body.as_ref()).is_some() {
                return Err(ResolveError::DuplicateDefinition(name.clone()));
            }
            collect_defs(body, defs)
        }
        Node::Concat(items) | Node::Either(items) => {
            items.iter().try_for_each(|item| collect_defs(item, defs))
        }
        Node::Operator(_, sub) => collect_defs(sub, defs),
        Node::Literal(_) | Node::Macro(_) | Node::Nothing => Ok(()),
    }
}

/// The pluggable operator/macro catalog consumed during resolution.
pub trait Resolver {
    /// Produce a fragment for an operator applied to an already-resolved
    /// operand, or `None` of one when the operator stood alone.
    fn resolve_operator(
        &self,
        name: &str,
        sub: Option<Fragment>,
    ) -> Result<Fragment, ResolveError>;

    /// Produce a fragment for a built-in macro name, if there is one. Local
    /// definitions shadow built-ins and are looked up first.
    fn resolve_macro(&self, name: &str) -> Option<Fragment>;
}

/// Matches quantifier-shaped operator names: `3`, `1+`, `0-1`, `2-6`.
static QUANTIFIER_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(\+|-(\d+))?$").unwrap());

static BUILTIN_MACROS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("#digit", r"\d"),
        ("#word", r"\w"),
        ("#space", r"\s"),
        ("#any", "."),
        ("#start", "^"),
        ("#end", "$"),
        ("#letter", "[A-Za-z]"),
        ("#lowercase", "[a-z]"),
        ("#uppercase", "[A-Z]"),
        ("#alphanum", "[0-9A-Za-z]"),
        ("#tab", r"\t"),
        ("#newline", r"\n"),
    ])
});

fn quantifier_bounds(name: &str) -> Option<(u32, Option<u32>)> {
    let caps = QUANTIFIER_NAME.captures(name)?;
    let min: u32 = caps[1].parse().ok()?;
    match caps.get(2) {
        None => Some((min, Some(min))),
        Some(tail) if tail.as_str() == "+" => Some((min, None)),
        Some(_) => {
            let max: u32 = caps.get(3)?.as_str().parse().ok()?;
            Some((min, Some(max)))
        }
    }
}

/// The stock catalog: the quantifier family plus `capture` and
/// `case_insensitive`, and the built-in character-class macros.
///
/// Operator names are matched case-insensitively; macro names are
/// case-sensitive.
pub struct DefaultResolver;

impl Resolver for DefaultResolver {
    fn resolve_operator(
        &self,
        name: &str,
        sub: Option<Fragment>,
    ) -> Result<Fragment, ResolveError> {
        let lowered = name.to_ascii_lowercase();
        if let Some((min, max)) = quantifier_bounds(&lowered) {
            let sub = sub.ok_or_else(|| ResolveError::MissingOperand(name.to_string()))?;
            return Ok(Fragment::Multiple {
                min,
                max,
                is_greedy: true,
                sub: Box::new(sub),
            });
        }
        match lowered.as_str() {
            "capture" => {
                let sub = sub.ok_or_else(|| ResolveError::MissingOperand(name.to_string()))?;
                Ok(Fragment::Capture(Box::new(sub)))
            }
            "case_insensitive" => {
                let sub = sub.ok_or_else(|| ResolveError::MissingOperand(name.to_string()))?;
                Ok(Fragment::Flagged {
                    flags: "i".to_string(),
                    sub: Box::new(sub),
                })
            }
            _ => Err(ResolveError::UnknownOperator(name.to_string())),
        }
    }

    fn resolve_macro(&self, name: &str) -> Option<Fragment> {
        BUILTIN_MACROS
            .get(name)
            .map(|atom| Fragment::Atom((*atom).to_string()))
    }
}

/// Translate a tree into a fragment using `table` for local definitions and
/// `resolver` for operators and built-in macros.
pub fn resolve(
    node: &Node,
    table: &MacroTable,
    resolver: &dyn Resolver,
) -> Result<Fragment, ResolveError> {
    let mut in_progress = Vec::new();
    resolve_node(node, table, resolver, &mut in_progress)
}

fn resolve_node<'a>(
    node: &'a Node,
    table: &MacroTable<'a>,
    resolver: &dyn Resolver,
    in_progress: &mut Vec<&'a str>,
) -> Result<Fragment, ResolveError> {
    match node {
        Node::Literal(text) => Ok(Fragment::Literal(text.clone())),
        Node::Macro(name) => {
            if let Some(body) = table.get(name) {
                if in_progress.iter().any(|active| *active == name) {
                    return Err(ResolveError::RecursiveMacro(name.clone()));
                }
                in_progress.push(name);
                let fragment = resolve_node(body, table, resolver, in_progress)?;
                in_progress.pop();
                Ok(fragment)
            } else if let Some(fragment) = resolver.resolve_macro(name) {
                Ok(fragment)
            } else {
                Err(ResolveError::UndefinedMacro(name.clone()))
            }
        }
        Node::Concat(items) => items
            .iter()
            .map(|item| resolve_node(item, table, resolver, in_progress))
            .collect::<Result<Vec<_>, _>>()
            .map(Fragment::Concat),
        Node::Either(items) => items
            .iter()
            .map(|item| resolve_node(item, table, resolver, in_progress))
            .collect::<Result<Vec<_>, _>>()
            .map(Fragment::Either),
        Node::Operator(name, sub) => {
            let operand = match sub.as_ref() {
                Node::Nothing => None,
                other => Some(resolve_node(other, table, resolver, in_progress)?),
            };
            resolver.resolve_operator(name, operand)
        }
        // A definition matches nothing where it appears; its body is only
        // reachable through the table.
        Node::Def(..) => Ok(Fragment::Empty),
        Node::Nothing => Ok(Fragment::Empty),
    }
}
