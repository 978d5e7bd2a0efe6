//! Property tests over randomly generated well-formed expressions.

use proptest::prelude::*;
use rpnlisp::ast::{Operand, Operator};
use rpnlisp::{translate, ErrorKind, TokenCount};

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arb_tree() -> impl Strategy<Value = Operand> {
    let leaf = any::<i64>().prop_map(Operand::Literal);
    leaf.prop_recursive(6, 64, 2, |inner| {
        (arb_operator(), inner.clone(), inner).prop_map(|(op, l, r)| Operand::node(op, l, r))
    })
}

fn to_postfix(tree: &Operand) -> String {
    match tree {
        Operand::Literal(n) => n.to_string(),
        Operand::Node(node) => format!(
            "{} {} {}",
            to_postfix(&node.left),
            to_postfix(&node.right),
            node.op.symbol()
        ),
    }
}

proptest! {
    #[test]
    fn single_integer_is_unchanged(n in any::<i64>()) {
        prop_assert_eq!(translate(&n.to_string()).unwrap(), n.to_string());
    }

    #[test]
    fn parentheses_match_operator_count(tree in arb_tree()) {
        let output = translate(&to_postfix(&tree)).unwrap();
        let mut open = 0usize;
        let mut depth = 0isize;
        for c in output.chars() {
            match c {
                '(' => { open += 1; depth += 1; }
                ')' => { depth -= 1; prop_assert!(depth >= 0); }
                _ => {}
            }
        }
        prop_assert_eq!(depth, 0);
        prop_assert_eq!(open, tree.operator_count());
    }

    #[test]
    fn structure_survives_translation(tree in arb_tree()) {
        prop_assert_eq!(translate(&to_postfix(&tree)).unwrap(), tree.pretty());
    }

    #[test]
    fn translation_is_deterministic(tree in arb_tree()) {
        let line = to_postfix(&tree);
        prop_assert_eq!(translate(&line).unwrap(), translate(&line).unwrap());
    }

    #[test]
    fn extra_operand_is_left_over(tree in arb_tree(), extra in any::<i64>()) {
        let line = format!("{} {}", to_postfix(&tree), extra);
        let err = translate(&line).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::WrongTokenCount(TokenCount::Leftover { remaining: 2 }));
    }
}
