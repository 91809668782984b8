use crate::ast::Node;
use crate::parser::parse;

fn lit(s: &str) -> Node {
    Node::Literal(s.into())
}

fn mac(s: &str) -> Node {
    Node::Macro(s.into())
}

fn op(name: &str, sub: Node) -> Node {
    Node::Operator(name.into(), Box::new(sub))
}

fn def(name: &str, sub: Node) -> Node {
    Node::Def(name.into(), Box::new(sub))
}

fn cat(items: Vec<Node>) -> Node {
    Node::Concat(items)
}

fn alt(items: Vec<Node>) -> Node {
    Node::Either(items)
}

fn ok(source: &str) -> Node {
    parse(source).unwrap_or_else(|e| panic!("parse of {:?} failed: {}", source, e))
}

fn fails(source: &str) {
    assert!(
        parse(source).is_err(),
        "parse of {:?} unexpectedly succeeded: {:?}",
        source,
        parse(source)
    );
}

#[test]
fn outer_literals() {
    assert_eq!(ok(""), cat(vec![]));
    assert_eq!(ok("literal"), cat(vec![lit("literal")]));
}

#[test]
fn empty_groups() {
    assert_eq!(ok("[]"), cat(vec![]));
    assert_eq!(ok("a[]b"), cat(vec![lit("a"), lit("b")]));
    assert_eq!(ok("[[]]"), cat(vec![]));
}

#[test]
fn quoted_literals() {
    assert_eq!(ok("['literal']"), cat(vec![lit("literal")]));
    assert_eq!(ok("['']"), cat(vec![lit("")]));
    assert_eq!(ok(r#"['"']"#), cat(vec![lit("\"")]));
    assert_eq!(ok(r#"["'"]"#), cat(vec![lit("'")]));
}

#[test]
fn quoted_literal_sequences() {
    assert_eq!(ok("['11' '2']"), cat(vec![lit("11"), lit("2")]));
    assert_eq!(ok("[   '11' \t\n\r\n '2' ]"), cat(vec![lit("11"), lit("2")]));
    assert_eq!(ok("['1' '2' '3']"), cat(vec![lit("1"), lit("2"), lit("3")]));
    assert_eq!(
        ok(r#"["1" '2' '3']"#),
        cat(vec![lit("1"), lit("2"), lit("3")])
    );
    // A double-quoted literal swallows single quotes wholesale.
    assert_eq!(ok(r#"["1' '2' '3"]"#), cat(vec![lit("1' '2' '3")]));
}

#[test]
fn macros() {
    assert_eq!(ok("[#a]"), cat(vec![mac("#a")]));
    assert_eq!(ok("[#aloHa19]"), cat(vec![mac("#aloHa19")]));
    assert_eq!(ok("[#a #b]"), cat(vec![mac("#a"), mac("#b")]));
    assert_eq!(ok("[ #a ]"), cat(vec![mac("#a")]));
}

#[test]
fn macro_name_boundaries_fail() {
    fails("[#a-]");
    fails("[#a!]");
    fails("[#a-#b]");
}

#[test]
fn operators() {
    assert_eq!(ok("[op #a]"), cat(vec![op("op", mac("#a"))]));
    assert_eq!(ok("[op]"), cat(vec![op("op", Node::Nothing)]));
    assert_eq!(ok("[o p #a]"), cat(vec![op("o", op("p", mac("#a")))]));
}

#[test]
fn operators_only_as_prefix() {
    fails("[#a op]");
    fails("[op #a op]");
    fails("[op [] op]");
}

#[test]
fn nested_groups() {
    assert_eq!(
        ok("[a #d [b #e]]"),
        cat(vec![op("a", cat(vec![mac("#d"), op("b", mac("#e"))]))])
    );
    assert_eq!(
        ok("[a #d [b #e] [c #f]]"),
        cat(vec![op(
            "a",
            cat(vec![mac("#d"), op("b", mac("#e")), op("c", mac("#f"))])
        )])
    );
}

#[test]
fn nested_bare_groups_flatten() {
    // A nested group without operators splices into the enclosing sequence.
    assert_eq!(
        ok("[[#a #b] #c]"),
        cat(vec![mac("#a"), mac("#b"), mac("#c")])
    );
    // An empty nested group contributes nothing.
    assert_eq!(ok("[#a [] #b]"), cat(vec![mac("#a"), mac("#b")]));
}

#[test]
fn alternation() {
    assert_eq!(ok("[#a | #b]"), cat(vec![alt(vec![mac("#a"), mac("#b")])]));
    assert_eq!(
        ok("[#a | #b | #c]"),
        cat(vec![alt(vec![mac("#a"), mac("#b"), mac("#c")])])
    );
    assert_eq!(
        ok("[op #a | #b]"),
        cat(vec![op("op", alt(vec![mac("#a"), mac("#b")]))])
    );
    assert_eq!(
        ok("[op #a #b | #c]"),
        cat(vec![op(
            "op",
            alt(vec![cat(vec![mac("#a"), mac("#b")]), mac("#c")])
        )])
    );
}

#[test]
fn dangling_pipes_fail() {
    fails("[#a|]");
    fails("[op #a|]");
    fails("[op | #a]");
}

#[test]
fn definitions() {
    assert_eq!(ok("[#a=[#x]]"), cat(vec![def("#a", mac("#x"))]));
    assert_eq!(
        ok("[#a #a=[#x #y]]"),
        cat(vec![mac("#a"), def("#a", cat(vec![mac("#x"), mac("#y")]))])
    );
}

#[test]
fn interleaved_macros_literals_and_definitions() {
    assert_eq!(
        ok("[#save_num] Reasons To Switch, The [#save_num]th Made Me \
            [case_insensitive 'Laugh' | 'Cry'][#save_num=[capture 1+ #digit]]"),
        cat(vec![
            mac("#save_num"),
            lit(" Reasons To Switch, The "),
            mac("#save_num"),
            lit("th Made Me "),
            op("case_insensitive", alt(vec![lit("Laugh"), lit("Cry")])),
            def("#save_num", op("capture", op("1+", mac("#digit")))),
        ])
    );
}

#[test]
fn multi_line_pattern_with_definitions() {
    let source = "\
    [[capture 0-1 #proto] [capture #domain] '.' [capture #tld] [capture #path]
        #proto=['http' [0-1 's'] '://']
        #domain=[1+ #digit | #lowercase | '.' | '-']
        #tld=[2-6 #lowercase | '.']
        #path=['/' [0+ '/' | #alphanum | '.' | '-']]
    ]";
    assert_eq!(
        ok(source),
        cat(vec![
            op("capture", op("0-1", mac("#proto"))),
            op("capture", mac("#domain")),
            lit("."),
            op("capture", mac("#tld")),
            op("capture", mac("#path")),
            def(
                "#proto",
                cat(vec![lit("http"), op("0-1", lit("s")), lit("://")])
            ),
            def(
                "#domain",
                op(
                    "1+",
                    alt(vec![mac("#digit"), mac("#lowercase"), lit("."), lit("-")])
                )
            ),
            def("#tld", op("2-6", alt(vec![mac("#lowercase"), lit(".")]))),
            def(
                "#path",
                cat(vec![
                    lit("/"),
                    op(
                        "0+",
                        alt(vec![lit("/"), mac("#alphanum"), lit("."), lit("-")])
                    )
                ])
            ),
        ])
    );
}

#[test]
fn stray_closing_bracket_fails() {
    fails("]");
    fails("a]b");
    fails("[#a");
}

#[test]
fn error_reports_position_and_found_character() {
    let error = parse("[#a-]").unwrap_err();
    let message = error.to_string();
    assert!(
        message.starts_with("invalid pattern at offset"),
        "unexpected message: {}",
        message
    );
}
