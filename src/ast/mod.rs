//! AST node type definitions for parsed rebrace patterns.
//!
//! The parser produces exactly one [`Node`] per parse; the tree is a pure
//! value, never mutated after construction.

use serde::Serialize;

/// A node of the pattern syntax tree.
///
/// Every parse result is exactly one of these variants. The root of a
/// successful parse is always a `Concat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /// An exact character sequence to match verbatim.
    Literal(String),
    /// A reference to a named fragment; the name keeps its `#` sigil.
    Macro(String),
    /// Sequential composition. Always flat: a `Concat` never directly
    /// contains another `Concat`.
    Concat(Vec<Node>),
    /// Ordered alternation, at least two branches. Branch order is
    /// significant (first match wins).
    Either(Vec<Node>),
    /// A named modifier applied to a sub-expression, or to [`Node::Nothing`]
    /// when the operator stands alone (`[capture]`).
    Operator(String, Box<Node>),
    /// A local definition binding a macro name to a bracketed group.
    /// Definitions match nothing at their own position.
    Def(String, Box<Node>),
    /// The absent sub-expression. Distinct from `Concat([])`, which is the
    /// empty string.
    Nothing,
}

impl Node {
    /// Build a sequential composition from already-parsed items.
    ///
    /// Nested `Concat` items are spliced in and `Nothing` items (empty
    /// groups) elide. A single surviving item is returned directly; an empty
    /// sequence collapses to `Nothing` so enclosing groups can elide it too.
    pub(crate) fn concat(items: Vec<Node>) -> Node {
        let mut flat = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Node::Concat(children) => flat.extend(children),
                Node::Nothing => {}
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Node::Nothing,
            1 => flat.pop().expect("len checked"),
            _ => Node::Concat(flat),
        }
    }

    /// Build an alternation from parsed branches.
    ///
    /// A singleton never becomes an `Either`; it is the branch itself. The
    /// grammar guarantees at least one branch, so an empty list is a bug in
    /// the caller, not a parse failure.
    pub(crate) fn either(mut branches: Vec<Node>) -> Node {
        assert!(!branches.is_empty(), "alternation with no branches");
        if branches.len() == 1 {
            branches.pop().expect("len checked")
        } else {
            Node::Either(branches)
        }
    }

    /// Wrap `sub` in a right-nested operator chain. The leftmost written
    /// operator ends up outermost.
    pub(crate) fn operator_chain(ops: Vec<String>, sub: Node) -> Node {
        let mut result = sub;
        for name in ops.into_iter().rev() {
            result = Node::Operator(name, Box::new(result));
        }
        result
    }
}
