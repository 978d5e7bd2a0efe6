//! Syntax module for rpnlisp
//!
//! Turns one line of postfix text into a syntax tree: [`lexer`] splits the line
//! into spanned tokens, [`builder`] folds them into an [`Operand`] with an
//! explicit value stack.
//!
//! [`Operand`]: crate::ast::Operand

pub mod builder;
pub mod lexer;

pub use builder::build;
pub use lexer::tokenize;

/// Represents a byte span in the input line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A whitespace-delimited slice of the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}
