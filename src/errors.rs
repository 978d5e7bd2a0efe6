//! rpnlisp Error Handling
//!
//! Every translation failure is a [`TranslateError`]: one struct carrying what
//! went wrong ([`ErrorKind`]), where it happened ([`SourceInfo`]) and how to help
//! ([`DiagnosticInfo`]). Failures that are not about the expression itself
//! (reading the input, writing the output) are reported as [`RunError`].

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::ast::Operator;
use crate::syntax::Span;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// The line being translated, kept so diagnostics can point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context for one input line.
    pub fn from_line(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }

    /// Span covering the whole line.
    pub fn full_span(&self) -> SourceSpan {
        SourceSpan::from(0..self.content.len())
    }
}

/// The single translation error type.
///
/// Its existence is the "invalid input" classification: anything that makes a
/// line untranslatable ends up here, and the message always says so.
#[derive(Debug)]
pub struct TranslateError {
    /// What went wrong (type-specific data)
    pub kind: ErrorKind,
    /// Where it happened
    pub source_info: SourceInfo,
    /// How to help
    pub diagnostic_info: DiagnosticInfo,
}

/// All the ways a line can fail to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The line contained no tokens at all.
    EmptyInput,
    /// A token is neither an operator nor a signed integer.
    BadToken { token: String },
    /// The stack did not line up with the operators.
    WrongTokenCount(TokenCount),
    /// A tree node is malformed. Operands are a closed enum, so the builder can
    /// never produce one; the kind is kept so callers can match on the full
    /// taxonomy.
    InvalidNodeShape { detail: String },
}

/// Which way the operand stack went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCount {
    /// An operator found fewer than two operands to combine.
    Underflow { operator: Operator },
    /// Nothing was left to return once all tokens were consumed.
    Missing,
    /// More than one value was left once all tokens were consumed.
    Leftover { remaining: usize },
}

/// Context-specific source information
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: &'static str,
}

/// Diagnostic enhancement data
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// Context-aware error creation.
pub trait ErrorReporting {
    /// Create an error with context-appropriate enhancements
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> TranslateError;

    fn empty_input(&self, span: SourceSpan) -> TranslateError {
        self.report(ErrorKind::EmptyInput, span)
    }

    fn bad_token(&self, token: &str, span: SourceSpan) -> TranslateError {
        self.report(
            ErrorKind::BadToken {
                token: token.into(),
            },
            span,
        )
    }

    fn operator_underflow(&self, operator: Operator, span: SourceSpan) -> TranslateError {
        self.report(
            ErrorKind::WrongTokenCount(TokenCount::Underflow { operator }),
            span,
        )
    }

    fn missing_value(&self, span: SourceSpan) -> TranslateError {
        self.report(ErrorKind::WrongTokenCount(TokenCount::Missing), span)
    }

    fn leftover_values(&self, remaining: usize, span: SourceSpan) -> TranslateError {
        self.report(
            ErrorKind::WrongTokenCount(TokenCount::Leftover { remaining }),
            span,
        )
    }
}

impl ErrorReporting for SourceContext {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> TranslateError {
        let phase = kind.phase();
        let error_code = format!("rpnlisp::{}::{}", phase, kind.code_suffix());
        let help = kind.help().map(String::from);

        TranslateError {
            kind,
            source_info: SourceInfo {
                source: self.to_named_source(),
                primary_span: span,
                phase,
            },
            diagnostic_info: DiagnosticInfo { help, error_code },
        }
    }
}

impl ErrorKind {
    /// Pipeline stage that detects this kind of error.
    pub const fn phase(&self) -> &'static str {
        match self {
            Self::EmptyInput => "parse",
            Self::BadToken { .. } | Self::WrongTokenCount(_) => "build",
            Self::InvalidNodeShape { .. } => "render",
        }
    }

    /// Get error code suffix for diagnostic codes
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::BadToken { .. } => "bad_token",
            Self::WrongTokenCount(_) => "wrong_token_count",
            Self::InvalidNodeShape { .. } => "invalid_node_shape",
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            Self::EmptyInput => Some("write an expression such as `2 2 +`"),
            Self::BadToken { .. } => {
                Some("operands must be integers and operators one of + - * / ^")
            }
            Self::WrongTokenCount(TokenCount::Underflow { .. }) => {
                Some("every operator needs two values before it")
            }
            Self::WrongTokenCount(TokenCount::Leftover { .. }) => {
                Some("add operators to combine the remaining values")
            }
            Self::WrongTokenCount(TokenCount::Missing) => None,
            Self::InvalidNodeShape { .. } => {
                Some("This is an internal error. Please report this as a bug.")
            }
        }
    }
}

impl fmt::Display for TokenCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenCount::Underflow { operator } => {
                write!(f, "operator '{}' needs two operands", operator.symbol())
            }
            TokenCount::Missing => write!(f, "no value left on the stack"),
            TokenCount::Leftover { remaining } => {
                write!(f, "{} values left on the stack, expected 1", remaining)
            }
        }
    }
}

impl std::error::Error for TranslateError {}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::EmptyInput => write!(f, "invalid input: empty value"),
            ErrorKind::BadToken { token } => write!(f, "invalid input: bad token '{}'", token),
            ErrorKind::WrongTokenCount(count) => {
                write!(f, "invalid input: wrong number of tokens: {}", count)
            }
            ErrorKind::InvalidNodeShape { detail } => {
                write!(f, "invalid input: invalid node shape: {}", detail)
            }
        }
    }
}

impl Diagnostic for TranslateError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label().into()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl TranslateError {
    fn primary_label(&self) -> &'static str {
        match &self.kind {
            ErrorKind::EmptyInput => "nothing to translate",
            ErrorKind::BadToken { .. } => "not an operator or integer",
            ErrorKind::WrongTokenCount(TokenCount::Underflow { .. }) => "not enough operands",
            ErrorKind::WrongTokenCount(TokenCount::Missing) => "no result",
            ErrorKind::WrongTokenCount(TokenCount::Leftover { .. }) => "uncombined values",
            ErrorKind::InvalidNodeShape { .. } => "malformed node",
        }
    }
}

/// Converts a token Span to a miette SourceSpan.
pub fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::from(span.start..span.end)
}

// ============================================================================
// RUN ERRORS - input/output around the core
// ============================================================================

/// Errors from a full run: reading the line, translating it, writing it out.
#[derive(Debug, Error, Diagnostic)]
pub enum RunError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Translate(#[from] TranslateError),

    #[error("failed to read expression from {origin}")]
    #[diagnostic(code(rpnlisp::io::read))]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write result to {destination}")]
    #[diagnostic(code(rpnlisp::io::write))]
    Write {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode syntax tree")]
    #[diagnostic(code(rpnlisp::io::encode))]
    Encode(#[from] serde_json::Error),
}

impl RunError {
    /// The translation error, if this run failed on the expression itself.
    pub fn as_translate(&self) -> Option<&TranslateError> {
        match self {
            RunError::Translate(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints an error with full miette diagnostics to stderr.
pub fn print_error<E>(error: E)
where
    E: Diagnostic + Send + Sync + 'static,
{
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Report;

    fn context(line: &str) -> SourceContext {
        SourceContext::from_line("test", line)
    }

    #[test]
    fn codes_follow_phase_and_kind() {
        let ctx = context("58 0 div");
        let err = ctx.bad_token("div", (5..8).into());
        assert_eq!(err.diagnostic_info.error_code, "rpnlisp::build::bad_token");
        assert_eq!(err.source_info.phase, "build");

        let err = ctx.empty_input(ctx.full_span());
        assert_eq!(err.diagnostic_info.error_code, "rpnlisp::parse::empty_input");
    }

    #[test]
    fn every_message_is_invalid_input() {
        let ctx = context("69 69 + +");
        let errors = [
            ctx.empty_input(ctx.full_span()),
            ctx.bad_token("x", (0..1).into()),
            ctx.operator_underflow(Operator::Add, (8..9).into()),
            ctx.missing_value(ctx.full_span()),
            ctx.leftover_values(3, ctx.full_span()),
            ctx.report(
                ErrorKind::InvalidNodeShape {
                    detail: "child is neither literal nor node".into(),
                },
                ctx.full_span(),
            ),
        ];
        for err in errors {
            assert!(err.to_string().starts_with("invalid input: "), "{err}");
        }
    }

    #[test]
    fn report_points_at_offending_token() {
        let ctx = context("58 0 div");
        let err = ctx.bad_token("div", (5..8).into());
        let output = format!("{:?}", Report::new(err));
        assert!(output.contains("bad token 'div'"));
        assert!(output.contains("not an operator or integer"));
        assert!(output.contains("operands must be integers"));
    }

    #[test]
    fn underflow_names_the_operator() {
        let ctx = context("2 ^");
        let err = ctx.operator_underflow(Operator::Pow, (2..3).into());
        assert_eq!(
            err.to_string(),
            "invalid input: wrong number of tokens: operator '^' needs two operands"
        );
    }
}
