//! AST module for rpnlisp
//!
//! A translated expression is a strict binary tree: every [`ExpressionNode`]
//! owns exactly two [`Operand`] children, and an operand is either an integer
//! literal or another node. Nothing is shared, so plain `Box` ownership is all
//! the tree needs.

use serde::{Serialize, Serializer};

use crate::stack::ensure_sufficient_stack;

pub mod render;

// ============================================================================
// OPERATOR TABLE
// ============================================================================

/// The fixed set of binary operators understood in postfix input.
///
/// # Examples
///
/// ```rust
/// use rpnlisp::ast::Operator;
/// assert_eq!(Operator::from_symbol("^"), Some(Operator::Pow));
/// assert_eq!(Operator::Pow.lisp_symbol(), "pow");
/// assert_eq!(Operator::from_symbol("div"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// Looks up a postfix token. Only exact matches are operators.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "^" => Some(Operator::Pow),
            _ => None,
        }
    }

    /// The symbol as written in postfix input.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }

    /// The symbol as written in prefix output.
    pub const fn lisp_symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "pow",
        }
    }
}

// ============================================================================
// TREE
// ============================================================================

/// A value on the build stack and a child of every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(i64),
    Node(Box<ExpressionNode>),
}

/// One binary operation.
///
/// Dropping a node frees its subtree with a worklist rather than recursion, so
/// arbitrarily deep chains such as `1 1 + 1 + 1 + ...` can be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionNode {
    pub op: Operator,
    pub left: Operand,
    pub right: Operand,
}

impl ExpressionNode {
    pub fn new(op: Operator, left: Operand, right: Operand) -> Self {
        Self { op, left, right }
    }
}

impl Drop for ExpressionNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_node(&mut self.left, &mut pending);
        detach_node(&mut self.right, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_node(&mut node.left, &mut pending);
            detach_node(&mut node.right, &mut pending);
            // `node` now only holds literals and drops without recursing.
        }
    }
}

fn detach_node(operand: &mut Operand, pending: &mut Vec<Box<ExpressionNode>>) {
    if matches!(operand, Operand::Node(_)) {
        if let Operand::Node(node) = std::mem::replace(operand, Operand::Literal(0)) {
            pending.push(node);
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // serde recurses once per level; grow the stack instead of overflowing.
        ensure_sufficient_stack(|| match self {
            Operand::Literal(n) => serializer.serialize_newtype_variant("Operand", 0, "literal", n),
            Operand::Node(node) => serializer.serialize_newtype_variant("Operand", 1, "node", node),
        })
    }
}

impl Operand {
    /// Wraps a node as an operand.
    pub fn node(op: Operator, left: Operand, right: Operand) -> Self {
        Operand::Node(Box::new(ExpressionNode::new(op, left, right)))
    }

    /// Number of operator nodes in the tree.
    pub fn operator_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(operand) = pending.pop() {
            if let Operand::Node(node) = operand {
                count += 1;
                pending.push(&node.left);
                pending.push(&node.right);
            }
        }
        count
    }

    /// Height of the tree; a bare literal has height 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((operand, level)) = pending.pop() {
            match operand {
                Operand::Literal(_) => deepest = deepest.max(level),
                Operand::Node(node) => {
                    pending.push((&node.left, level + 1));
                    pending.push((&node.right, level + 1));
                }
            }
        }
        deepest
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Literal(value)
    }
}
