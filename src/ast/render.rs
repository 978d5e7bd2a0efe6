//! Prefix (Lisp-style) rendering of syntax trees.
//!
//! Literals print as plain decimal integers; every node prints as
//! `(<op> <left> <right>)` with the operator's output symbol. The match over
//! [`Operand`] is exhaustive, so there is no malformed child to report.

use std::fmt::{self, Write};

use super::{ExpressionNode, Operand};

impl Operand {
    /// Renders this operand in fully-parenthesized prefix form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rpnlisp::ast::{Operand, Operator};
    /// let tree = Operand::node(Operator::Pow, 45.into(), Operand::node(Operator::Add, 78.into(), 0.into()));
    /// assert_eq!(tree.pretty(), "(pow 45 (+ 78 0))");
    /// assert_eq!(Operand::Literal(5).pretty(), "5");
    /// ```
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_operand(&mut out, self);
        out
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_operand(f, self)
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self)
    }
}

/// Pending output while walking a tree; children are pushed in reverse.
enum Frame<'a> {
    Operand(&'a Operand),
    Text(&'static str),
}

fn write_operand<W: Write>(out: &mut W, operand: &Operand) -> fmt::Result {
    let mut frames = vec![Frame::Operand(operand)];
    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Text(text) => out.write_str(text)?,
            Frame::Operand(Operand::Literal(n)) => write!(out, "{n}")?,
            Frame::Operand(Operand::Node(node)) => {
                write!(out, "({} ", node.op.lisp_symbol())?;
                frames.push(Frame::Text(")"));
                frames.push(Frame::Operand(&node.right));
                frames.push(Frame::Text(" "));
                frames.push(Frame::Operand(&node.left));
            }
        }
    }
    Ok(())
}

fn write_node<W: Write>(out: &mut W, node: &ExpressionNode) -> fmt::Result {
    write!(out, "({} ", node.op.lisp_symbol())?;
    write_operand(out, &node.left)?;
    out.write_char(' ')?;
    write_operand(out, &node.right)?;
    out.write_char(')')
}
