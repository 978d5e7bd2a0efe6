//! Command-line arguments for the rpnlisp CLI, declared with clap's derive API.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use super::source::LineSource;
use crate::engine::OutputFormat;
use crate::output::{FileSink, OutputSink, StdoutSink};

/// The main CLI argument structure.
///
/// Exactly one of `-e` and `-f` must be given; clap rejects both or neither as
/// a usage error before anything is translated.
#[derive(Debug, Parser)]
#[command(
    name = "rpnlisp",
    version,
    about = "Translate a postfix (Reverse Polish) expression into prefix, Lisp-style notation."
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["expression", "file"])
))]
pub struct RpnlispArgs {
    /// Expression to translate, e.g. "4 2 - 3 *".
    #[arg(short = 'e', long, value_name = "EXPRESSION", allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// File whose first line holds the expression; "-" reads standard input.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// File to write the result to. Defaults to standard output.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the syntax tree as JSON instead of the prefix expression.
    #[arg(long)]
    pub ast: bool,
}

impl RpnlispArgs {
    /// The line source selected by `-e` or `-f`.
    pub fn line_source(&self) -> LineSource {
        match (&self.expression, &self.file) {
            (Some(expression), _) => LineSource::Expression(expression.clone()),
            (None, Some(path)) if path.as_os_str() == "-" => LineSource::Stdin,
            (None, Some(path)) => LineSource::File(path.clone()),
            // The required argument group rules this out.
            (None, None) => LineSource::Stdin,
        }
    }

    /// The sink selected by `-o`.
    pub fn sink(&self) -> Box<dyn OutputSink> {
        match &self.output {
            Some(path) => Box::new(FileSink::new(path)),
            None => Box::new(StdoutSink),
        }
    }

    pub fn format(&self) -> OutputFormat {
        if self.ast {
            OutputFormat::Ast
        } else {
            OutputFormat::Prefix
        }
    }
}
