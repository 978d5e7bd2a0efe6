//! rpnlisp translates postfix (Reverse Polish) arithmetic into fully
//! parenthesized prefix, Lisp-style expressions:
//!
//! ```rust
//! assert_eq!(rpnlisp::translate("5 4 2 - 3 2 ^ * +").unwrap(), "(+ 5 (* (- 4 2) (pow 3 2)))");
//! ```

pub use crate::engine::{compute, translate, ExecutionPipeline, OutputFormat};
pub use crate::errors::{ErrorKind, RunError, TokenCount, TranslateError};

pub mod ast;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod output;
mod stack;
pub mod syntax;
