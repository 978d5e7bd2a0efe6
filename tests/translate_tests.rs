// tests/translate_tests.rs

use pretty_assertions::assert_eq;
use rpnlisp::{translate, ErrorKind, TokenCount};

// ---
// Well-formed expressions
// ---

#[test]
fn test_translate_matrix() {
    let cases = [
        ("single number", "5", "5"),
        ("basic addition", "2 2 +", "(+ 2 2)"),
        ("basic addition 2", "3 4 +", "(+ 3 4)"),
        ("power conversion", "45 78 0 + ^", "(pow 45 (+ 78 0))"),
        ("negative value", "28 52 / -2 -", "(- (/ 28 52) -2)"),
        (
            "alternation of operations",
            "69 69 69 69 69 69 69 ^ / - + * ^",
            "(pow 69 (* 69 (+ 69 (- 69 (/ 69 (pow 69 69))))))",
        ),
        (
            "big expression 1",
            "25 32 5 7 ^ - 44 37 + - *",
            "(* 25 (- (- 32 (pow 5 7)) (+ 44 37)))",
        ),
        (
            "big expression 2",
            "21 24 39 - 9 88 90 2 - ^ + 3 - / 0 * - 50 45 * +",
            "(+ (- 21 (* (/ (- 24 39) (- (+ 9 (pow 88 (- 90 2))) 3)) 0)) (* 50 45))",
        ),
        (
            "big expression 3",
            "42 69 + 49 28 99 ^ 1 25 4 ^ / - * 43 100 ^ / - 420 69 + -",
            "(- (- (+ 42 69) (/ (* 49 (- (pow 28 99) (/ 1 (pow 25 4)))) (pow 43 100))) (+ 420 69))",
        ),
        (
            "mixed precedence",
            "5 4 2 - 3 2 ^ * +",
            "(+ 5 (* (- 4 2) (pow 3 2)))",
        ),
    ];

    for (name, input, expected) in cases {
        let actual = translate(input).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(actual, expected, "{name}");
    }
}

#[test]
fn test_non_commutative_order_is_kept() {
    assert_eq!(translate("4 2 -").unwrap(), "(- 4 2)");
    assert_eq!(translate("4 2 /").unwrap(), "(/ 4 2)");
    assert_eq!(translate("4 2 ^").unwrap(), "(pow 4 2)");
}

#[test]
fn test_literals_are_normalized() {
    assert_eq!(translate("+5").unwrap(), "5");
    assert_eq!(translate("007 -0 +").unwrap(), "(+ 7 0)");
    assert_eq!(translate("  12\t").unwrap(), "12");
}

// ---
// Malformed expressions
// ---

fn kind_of(input: &str) -> ErrorKind {
    translate(input)
        .expect_err(&format!("expected {input:?} to fail"))
        .kind
}

#[test]
fn test_empty_input() {
    assert_eq!(kind_of(""), ErrorKind::EmptyInput);
    assert_eq!(kind_of("     "), ErrorKind::EmptyInput);
}

#[test]
fn test_bad_tokens() {
    let cases = [("58 0 div", "div"), ("69 69 _", "_"), ("faang", "faang"), ("1.5 2 +", "1.5")];
    for (input, token) in cases {
        assert_eq!(
            kind_of(input),
            ErrorKind::BadToken {
                token: token.into()
            },
            "input: {input}"
        );
    }
}

#[test]
fn test_wrong_number_of_tokens() {
    let cases = [
        "47 22 35",
        "69 69 + +",
        "69 69 69 69 - / + ^",
        "69 + 69 - 69 * 69",
        "+ / 69 69 / 69 69",
        "69 + 69 69 69 / + ^",
        "69 69 - 69 / * 69",
    ];
    for input in cases {
        assert!(
            matches!(kind_of(input), ErrorKind::WrongTokenCount(_)),
            "input: {input}"
        );
    }
}

#[test]
fn test_leftover_versus_underflow() {
    assert_eq!(
        kind_of("47 22 35"),
        ErrorKind::WrongTokenCount(TokenCount::Leftover { remaining: 3 })
    );
    assert!(matches!(
        kind_of("69 69 + +"),
        ErrorKind::WrongTokenCount(TokenCount::Underflow { .. })
    ));
}

#[test]
fn test_errors_are_invalid_input() {
    for input in ["", "58 0 div", "47 22 35"] {
        let err = translate(input).unwrap_err();
        assert!(err.to_string().starts_with("invalid input"), "{err}");
    }
}

// ---
// Deep nesting
// ---

const DEEP: usize = 200_000;

fn assert_balanced(rendered: &str, operators: usize) {
    assert_eq!(rendered.matches('(').count(), operators);
    assert_eq!(rendered.matches(')').count(), operators);
}

#[test]
fn test_deep_left_chain() {
    let mut input = String::from("1");
    for _ in 0..DEEP {
        input.push_str(" 1 +");
    }

    let rendered = translate(&input).unwrap();
    assert!(rendered.starts_with("(+ (+ (+ "));
    assert!(rendered.ends_with(" 1) 1) 1)"));
    assert_balanced(&rendered, DEEP);
}

#[test]
fn test_deep_right_chain() {
    let mut input = "1 ".repeat(DEEP + 1);
    input.push_str(&"+ ".repeat(DEEP));

    let rendered = translate(input.trim_end()).unwrap();
    assert!(rendered.starts_with("(+ 1 (+ 1 (+ 1 "));
    assert!(rendered.ends_with("(+ 1 1)))"));
    assert_balanced(&rendered, DEEP);
}
