//! Assembly of resolved fragments into regex-syntax text.
//!
//! A [`Fragment`] is the resolved counterpart of an AST node: it knows how to
//! render itself as a piece of a regular expression. Rendering is a pure
//! function of the fragment; [`assemble`] always produces the same string for
//! the same tree.
//!
//! Wrapped rendering is the mode used wherever a quantifier (or another
//! postfix construct) must bind to the fragment as a whole: the fragment
//! encloses itself in a non-capturing group unless its output is already a
//! single regex atom.

use serde::Serialize;

/// A renderable piece of a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Fragment {
    /// Matches the empty string. Resolution of `Nothing` and of definition
    /// sites, which contribute nothing where they appear.
    Empty,
    /// Verbatim text; metacharacters are escaped on render.
    Literal(String),
    /// Pre-rendered regex text known to be a single atom (`\d`, `[a-z]`,
    /// `.`). Never needs grouping.
    Atom(String),
    /// Sequential composition.
    Concat(Vec<Fragment>),
    /// Ordered alternation.
    Either(Vec<Fragment>),
    /// Repetition of `sub` between `min` and `max` times; `max` of `None`
    /// means unbounded.
    Multiple {
        min: u32,
        max: Option<u32>,
        is_greedy: bool,
        sub: Box<Fragment>,
    },
    /// A numbered capturing group.
    Capture(Box<Fragment>),
    /// A group with inline flags, e.g. `(?i:...)`.
    Flagged { flags: String, sub: Box<Fragment> },
}

impl Fragment {
    /// Render this fragment. In wrapped mode the output is safe to append a
    /// quantifier to.
    pub fn to_regex(&self, wrap: bool) -> String {
        match self {
            Fragment::Empty => {
                if wrap {
                    "(?:)".to_string()
                } else {
                    String::new()
                }
            }
            Fragment::Literal(text) => {
                let escaped = regex::escape(text);
                // The wrap decision counts the original characters, not the
                // escaped output: a lone metacharacter escapes to two
                // characters but is still a single atom.
                if wrap && text.chars().count() != 1 {
                    format!("(?:{})", escaped)
                } else {
                    escaped
                }
            }
            Fragment::Atom(text) => text.clone(),
            Fragment::Concat(items) => match items.len() {
                0 => Fragment::Empty.to_regex(wrap),
                1 => items[0].to_regex(wrap),
                _ => {
                    // Alternation is the only construct that binds looser
                    // than sequencing; everything else joins bare.
                    let body: String = items
                        .iter()
                        .map(|item| item.to_regex(matches!(item, Fragment::Either(_))))
                        .collect();
                    if wrap {
                        format!("(?:{})", body)
                    } else {
                        body
                    }
                }
            },
            Fragment::Either(items) => {
                let body = items
                    .iter()
                    .map(|item| item.to_regex(false))
                    .collect::<Vec<_>>()
                    .join("|");
                if wrap {
                    format!("(?:{})", body)
                } else {
                    body
                }
            }
            Fragment::Multiple {
                min,
                max,
                is_greedy,
                sub,
            } => {
                let quantifier = match (*min, *max) {
                    (0, None) => "*".to_string(),
                    (1, None) => "+".to_string(),
                    (0, Some(1)) => "?".to_string(),
                    (m, Some(n)) if m == n => format!("{{{}}}", m),
                    (m, n) => {
                        let lower = if m == 0 { String::new() } else { m.to_string() };
                        let upper = n.map(|v| v.to_string()).unwrap_or_default();
                        format!("{{{},{}}}", lower, upper)
                    }
                };
                let mut rendered = format!("{}{}", sub.to_regex(true), quantifier);
                if !is_greedy {
                    rendered.push('?');
                }
                if wrap {
                    format!("(?:{})", rendered)
                } else {
                    rendered
                }
            }
            Fragment::Capture(sub) => format!("({})", sub.to_regex(false)),
            Fragment::Flagged { flags, sub } => {
                format!("(?{}:{})", flags, sub.to_regex(false))
            }
        }
    }
}

/// Render a fragment tree as a complete regular expression.
pub fn assemble(fragment: &Fragment) -> String {
    fragment.to_regex(false)
}
