use std::io::BufRead;

use tracing::debug;

use crate::{
    ast::Operand,
    errors::{ErrorReporting, RunError, SourceContext, TranslateError},
    output::OutputSink,
    syntax::{build, tokenize},
};

/// Name used for diagnostics when the line has no better origin.
pub const DEFAULT_SOURCE_NAME: &str = "expression";

// ============================================================================
// CORE TRANSLATION
// ============================================================================

/// Translates one line of postfix notation into a prefix, Lisp-style expression.
///
/// # Examples
///
/// ```rust
/// assert_eq!(rpnlisp::translate("2 2 +").unwrap(), "(+ 2 2)");
/// assert_eq!(rpnlisp::translate("45 78 0 + ^").unwrap(), "(pow 45 (+ 78 0))");
/// assert!(rpnlisp::translate("58 0 div").is_err());
/// ```
pub fn translate(line: &str) -> Result<String, TranslateError> {
    ExecutionPipeline::translate_source(line, DEFAULT_SOURCE_NAME)
}

/// What the pipeline emits for a successfully parsed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The prefix expression, e.g. `(+ 2 2)`.
    #[default]
    Prefix,
    /// The syntax tree as pretty-printed JSON.
    Ast,
}

/// Source -> core -> sink, configured once per run.
#[derive(Debug, Clone)]
pub struct ExecutionPipeline {
    /// Name shown in diagnostics for the translated line.
    pub source_name: String,
    pub format: OutputFormat,
}

impl Default for ExecutionPipeline {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            format: OutputFormat::Prefix,
        }
    }
}

impl ExecutionPipeline {
    pub fn new(source_name: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            source_name: source_name.into(),
            format,
        }
    }

    /// Tokenizes and builds the tree for one line.
    pub fn parse_source(line: &str, source_name: &str) -> Result<Operand, TranslateError> {
        let source = SourceContext::from_line(source_name, line);
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Err(source.empty_input(source.full_span()));
        }
        build(&tokens, &source)
    }

    /// Parses one line and renders it in prefix form.
    pub fn translate_source(line: &str, source_name: &str) -> Result<String, TranslateError> {
        debug!(source = source_name, line, "translating");
        let tree = Self::parse_source(line, source_name)?;
        let rendered = tree.pretty();
        debug!(
            operators = tree.operator_count(),
            depth = tree.depth(),
            "translated"
        );
        Ok(rendered)
    }

    /// Reads the first line from `input`, translates it and emits the result.
    ///
    /// Nothing reaches the sink unless translation succeeds.
    pub fn execute(&self, input: impl BufRead, sink: &mut dyn OutputSink) -> Result<(), RunError> {
        let line = read_line(input, &self.source_name)?;
        let text = match self.format {
            OutputFormat::Prefix => Self::translate_source(&line, &self.source_name)?,
            OutputFormat::Ast => {
                let tree = Self::parse_source(&line, &self.source_name)?;
                serde_json::to_string_pretty(&tree)?
            }
        };
        sink.emit(&text).map_err(|source| RunError::Write {
            destination: sink.destination(),
            source,
        })
    }
}

/// Reads one line from `input` and translates it into `sink` with the default
/// pipeline.
pub fn compute(input: impl BufRead, sink: &mut dyn OutputSink) -> Result<(), RunError> {
    ExecutionPipeline::default().execute(input, sink)
}

/// Reads up to and excluding the first line break. A missing line reads as
/// empty.
pub fn read_line(mut input: impl BufRead, origin: &str) -> Result<String, RunError> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|source| RunError::Read {
            origin: origin.to_string(),
            source,
        })?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
