// End-to-end evaluation through the public API.

use sexprcalc::parser::{ParseErrorKind, MAX_NESTING};
use sexprcalc::{evaluate, Error, Interpreter, List, Number, ParseError, Value};

fn int(i: i64) -> Value {
    Value::Number(Number::Integer(i))
}

#[test]
fn nested_arithmetic() {
    assert_eq!(evaluate("(+ (* 2 3) (* 4 5))"), Ok(int(26)));
    assert_eq!(evaluate("(+ 5 6)"), Ok(int(11)));
    assert_eq!(
        evaluate("(* (+ 1 2) (+ 0.5 0.5))"),
        Ok(Value::Number(Number::Float(3.0)))
    );
}

#[test]
fn variadic_identities() {
    assert_eq!(evaluate("(+)"), Ok(int(0)));
    assert_eq!(evaluate("(*)"), Ok(int(1)));
    assert_eq!(evaluate("(list)"), Ok(Value::List(List::new())));
    assert_eq!(evaluate("(sum (list))"), Ok(int(0)));
}

#[test]
fn lists_and_ranges() {
    assert_eq!(
        evaluate("(range 3 7)").map(|v| v.to_string()),
        Ok("[3, 4, 5, 6]".to_string())
    );
    assert_eq!(evaluate("(range 5 5)"), Ok(Value::List(List::new())));
    assert_eq!(evaluate("(sum (range 1 5))"), Ok(int(10)));
    assert_eq!(
        evaluate("(list (* 1 2) (* 3 4))").map(|v| v.to_string()),
        Ok("[2, 12]".to_string())
    );
}

#[test]
fn oversized_ranges_are_errors() {
    assert!(matches!(
        evaluate("(range 0 9223372036854775807)"),
        Err(Error::Arithmetic { operator: "range", .. })
    ));
    assert!(matches!(
        evaluate("(range -9223372036854775808 0)"),
        Err(Error::Arithmetic { operator: "range", .. })
    ));
    assert!(matches!(
        evaluate("(sum (range 0 2000000000))"),
        Err(Error::Arithmetic { operator: "range", .. })
    ));
}

#[test]
fn nesting_depth() {
    let deep = |depth: usize| format!("{}1{}", "(+ ".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&deep(MAX_NESTING)), Ok(int(1)));
    assert!(matches!(
        evaluate(&deep(MAX_NESTING + 1)),
        Err(Error::Parse(ParseError {
            kind: ParseErrorKind::TooDeep,
            ..
        }))
    ));
    assert!(matches!(
        evaluate(&"(".repeat(100_000)),
        Err(Error::Parse(ParseError {
            kind: ParseErrorKind::TooDeep,
            ..
        }))
    ));
}

#[test]
fn multiline_program() {
    let program = "
        (sum
          (list 1
                (* 2 3)
                (+ 4 5)))
    ";
    assert_eq!(evaluate(program), Ok(int(16)));
}

#[test]
fn error_categories() {
    assert!(matches!(evaluate("(+ 1 2"), Err(Error::Parse(ParseError { .. }))));
    assert!(matches!(evaluate("(foo 1 2)"), Err(Error::NoOperator { .. })));
    assert!(matches!(
        evaluate("(sum 5)"),
        Err(Error::ArgumentType { operator: "sum", position: 1, .. })
    ));
    assert!(matches!(
        evaluate("(range 1 \"x\")"),
        Err(Error::ArgumentType { operator: "range", position: 2, .. })
    ));
    assert!(matches!(evaluate("hello"), Err(Error::Unresolved { .. })));
}

#[test]
fn interpreter_is_shareable_across_threads() {
    let interpreter = Interpreter::new();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || interpreter.evaluate(&format!("(* {i} {i})"))))
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("evaluation thread panicked"))
        .collect();
    assert_eq!(results, vec![Ok(int(0)), Ok(int(1)), Ok(int(4)), Ok(int(9))]);
}
