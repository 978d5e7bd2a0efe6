//! Where the CLI gets its line of input from.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::PathBuf;

use crate::errors::RunError;

/// One of the mutually exclusive input choices on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    /// Literal text from `-e`.
    Expression(String),
    /// A file from `-f`; only its first line is used.
    File(PathBuf),
    /// Standard input, from `-f -`.
    Stdin,
}

impl LineSource {
    /// Name shown in diagnostics and read errors.
    pub fn name(&self) -> String {
        match self {
            LineSource::Expression(_) => "expression".into(),
            LineSource::File(path) => path.display().to_string(),
            LineSource::Stdin => "<stdin>".into(),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, RunError> {
        match self {
            LineSource::Expression(text) => Ok(Box::new(Cursor::new(text.clone().into_bytes()))),
            LineSource::File(path) => {
                let file = File::open(path).map_err(|source| RunError::Read {
                    origin: self.name(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            LineSource::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}
