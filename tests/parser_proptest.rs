//! Property-based tests for the pattern parser.
//!
//! These pin down the grammar's treatment of plain text: anything without
//! brackets is one literal run, quoting is transparent, and escaping in the
//! compiled output always matches the original text.

use proptest::prelude::*;
use rebrace::Node;

proptest! {
    #[test]
    fn bracket_free_text_is_a_single_literal(s in "[^\\[\\]]+") {
        let ast = rebrace::parse(&s).unwrap();
        prop_assert_eq!(ast, Node::Concat(vec![Node::Literal(s.clone())]));
    }

    #[test]
    fn single_quoted_text_roundtrips(s in "[^']{0,30}") {
        let source = format!("['{}']", s);
        let ast = rebrace::parse(&source).unwrap();
        prop_assert_eq!(ast, Node::Concat(vec![Node::Literal(s.clone())]));
    }

    #[test]
    fn double_quoted_text_roundtrips(s in "[^\"]{0,30}") {
        let source = format!("[\"{}\"]", s);
        let ast = rebrace::parse(&source).unwrap();
        prop_assert_eq!(ast, Node::Concat(vec![Node::Literal(s.clone())]));
    }

    #[test]
    fn compiled_literals_match_themselves(s in "[^\\[\\]]+") {
        let compiled = rebrace::compile(&s).unwrap();
        let re = regex::Regex::new(&compiled).unwrap();
        let found = re.find(&s).unwrap();
        prop_assert_eq!(found.range(), 0..s.len());
    }
}
