use super::{
    build, paren_state, parse, tokenize_string, Node, ParseError, ParseErrorKind, ParserState,
    TokenType as TT, MAX_NESTING,
};

fn token_types(input: &str) -> Vec<(TT, &str)> {
    tokenize_string(input)
        .into_iter()
        .map(|t| (t.typ(), t.lexeme()))
        .collect()
}

fn parse_tree_matches(input: &str, tree_repr: &str) {
    let result = parse(input);
    assert!(
        matches!(result, Ok(Some(_))),
        "\nFailed to parse \"{}\": {:?}\n",
        input,
        result
    );
    if let Ok(Some(ref tree)) = result {
        let result_repr = format!("{tree:?}");
        assert!(
            result_repr.contains(tree_repr),
            "\nFailed to parse \"{}\":\nexpected \"{}\" somewhere in \"{}\"\n",
            input,
            tree_repr,
            result_repr
        )
    }
}

fn assert_raises_error(input: &str, kind: ParseErrorKind, msg: &str) {
    match parse(input) {
        Err(ParseError {
            kind: k, message, ..
        }) => {
            assert_eq!(kind, k, "wrong error kind for \"{input}\"");
            assert_eq!(msg, message.as_str());
        }
        other => panic!("expected an error for \"{input}\", got {other:?}"),
    }
}

#[test]
fn test_tokenize_parens_and_atoms() {
    assert_eq!(
        token_types("(+ 1 (* 2 3))"),
        vec![
            (TT::LPAR, "("),
            (TT::ATOM, "+"),
            (TT::ATOM, "1"),
            (TT::LPAR, "("),
            (TT::ATOM, "*"),
            (TT::ATOM, "2"),
            (TT::ATOM, "3"),
            (TT::RPAR, ")"),
            (TT::RPAR, ")"),
        ]
    );
}

#[test]
fn test_tokenize_skips_whitespace() {
    assert_eq!(
        token_types("  (list\n\t1.5\r\n  -2)  "),
        vec![
            (TT::LPAR, "("),
            (TT::ATOM, "list"),
            (TT::ATOM, "1.5"),
            (TT::ATOM, "-2"),
            (TT::RPAR, ")"),
        ]
    );
    assert!(tokenize_string("").is_empty());
    assert!(tokenize_string(" \n\t ").is_empty());
}

#[test]
fn test_tokenize_atoms_stop_at_parens() {
    assert_eq!(
        token_types("a(b)c"),
        vec![
            (TT::ATOM, "a"),
            (TT::LPAR, "("),
            (TT::ATOM, "b"),
            (TT::RPAR, ")"),
            (TT::ATOM, "c"),
        ]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize_string("(+ 1\n   22)");
    let twenty_two = tokens[3];
    assert_eq!(twenty_two.lexeme(), "22");
    assert_eq!(twenty_two.span.start.line, 2);
    assert_eq!(twenty_two.span.start.column, 3);
    assert_eq!(twenty_two.span.end.column, 5);
}

#[test]
fn test_paren_state() {
    assert_eq!(paren_state("(+ 1 2)"), ParserState::Ok);
    assert_eq!(paren_state("(+ 1 (* 2"), ParserState::ContinuationNeeded);
    assert_eq!(paren_state("(+ 1 2))"), ParserState::Overclosed);
    assert_eq!(paren_state(")("), ParserState::Overclosed);
}

#[test]
fn test_empty_program() {
    assert!(matches!(parse(""), Ok(None)));
    assert!(matches!(build(&[]), Ok(None)));
}

#[test]
fn test_single_atom() {
    parse_tree_matches("42", "Atom(Atom(\"42\"))");
    parse_tree_matches("  foo  ", "Atom(Atom(\"foo\"))");
}

#[test]
fn test_forms() {
    parse_tree_matches("()", "Form(Form { children: []");
    parse_tree_matches("(+ 1 2)", "Atom(\"+\")");
    parse_tree_matches("(+ 1 2)", "Atom(\"2\")");
    parse_tree_matches("(list (range 1 3) 4)", "Atom(\"range\")");
}

#[test]
fn test_nested_structure() {
    let tree = parse("(+ (* 2 3) (* 4 (+ 5 6)) 7)").unwrap().unwrap();
    let Node::Form(form) = tree else {
        panic!("expected a form");
    };
    assert_eq!(form.children().len(), 4);
    assert_eq!(form.head().map(|a| a.text()), Some("+"));
    match &form.children()[2] {
        Node::Form(inner) => {
            assert_eq!(inner.children().len(), 3);
            assert!(matches!(inner.children()[2], Node::Form(_)));
        }
        other => panic!("expected a nested form, got {other:?}"),
    }
    assert!(matches!(form.children()[3], Node::Atom(_)));
}

#[test]
fn test_form_span_covers_parens() {
    let tree = parse("(+ 1\n  (* 2 3))").unwrap().unwrap();
    let Node::Form(form) = tree else {
        panic!("expected a form");
    };
    let Node::Form(inner) = &form.children()[2] else {
        panic!("expected a nested form");
    };
    assert_eq!(inner.span.start.line, 2);
    assert_eq!(inner.span.start.column, 2);
    assert_eq!(inner.span.end.column, 9);
}

#[test]
fn test_tree_rendering() {
    let tree = parse("(+ 1 (* 2 3))").unwrap().unwrap();
    let rendered = tree.to_string();
    assert_eq!(
        rendered,
        "Form, 3 nodes\n  |Atom \"+\"\n  |Atom \"1\"\n  |Form, 3 nodes\n  |  |Atom \"*\"\n  |  |Atom \"2\"\n  |  |Atom \"3\"\n"
    );
}

#[test]
fn test_structural_errors() {
    assert_raises_error("(+ 1 2", ParseErrorKind::Unbalanced, "no matching `)` for `(`");
    assert_raises_error("(+ 1 (* 2 3)", ParseErrorKind::Unbalanced, "no matching `)` for `(`");
    assert_raises_error("(+ (* 2 3) 1", ParseErrorKind::Unbalanced, "no matching `)` for `(`");
    assert_raises_error("(+ (* 2 3 1)", ParseErrorKind::Unbalanced, "no matching `)` for `(`");
    assert_raises_error(")", ParseErrorKind::Unbalanced, "unexpected `)` with no matching `(`");
    assert_raises_error("(+ 1 2))", ParseErrorKind::Unbalanced, "unexpected `)` with no matching `(`");
    assert_raises_error(
        "(a) (b)",
        ParseErrorKind::Unexpected,
        "expected a single atom or a single parenthesized form",
    );
    assert_raises_error(
        "(a) b",
        ParseErrorKind::Unexpected,
        "expected a single atom or a single parenthesized form",
    );
    assert_raises_error(
        "1 2",
        ParseErrorKind::Unexpected,
        "expected a single atom or a single parenthesized form",
    );
    assert_raises_error(
        "+ 1 2)",
        ParseErrorKind::Unexpected,
        "expected a single atom or a single parenthesized form",
    );
}

#[test]
fn test_error_reports_location() {
    let err = parse("(+ 1\n  (* 2 3").unwrap_err();
    assert_eq!(err.span.start.line, 2);
    assert_eq!(err.span.start.column, 2);
    assert_eq!(err.to_string(), "no matching `)` for `(` at line 2, column 2");

    let err = parse("(+ 1\n  (* 2 3)").unwrap_err();
    assert_eq!(err.to_string(), "no matching `)` for `(` at line 1, column 0");

    let err = parse("(+ 1 2)\n)").unwrap_err();
    assert_eq!(err.to_string(), "unexpected `)` with no matching `(` at line 2, column 0");
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(+ ".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_nesting_limit() {
    assert!(parse(&nested(MAX_NESTING)).is_ok());
    let err = parse(&nested(MAX_NESTING + 1)).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooDeep);
    assert_eq!(err.span.start.column, 3 * MAX_NESTING);

    // a deep unclosed prefix stops at the limit rather than recursing further
    let err = parse(&"(".repeat(10 * MAX_NESTING)).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooDeep);
}

#[test]
fn test_wide_forms() {
    let program = format!("(+ {})", "1 (+ 2) ".repeat(5000));
    match parse(&program) {
        Ok(Some(Node::Form(form))) => assert_eq!(form.children().len(), 10_001),
        other => panic!("expected a form, got {other:?}"),
    }
}
