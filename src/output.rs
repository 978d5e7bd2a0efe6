//! Output sinks for translation results.
//!
//! The engine hands its finished string to an [`OutputSink`]; the CLI picks
//! standard output or a file, tests capture into an [`OutputBuffer`].

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

// Output sink for translated expressions, to make I/O testable and injectable.
pub trait OutputSink {
    fn emit(&mut self, text: &str) -> io::Result<()>;

    /// Human-readable name of where output goes, for error messages.
    fn destination(&self) -> String;
}

// ============================================================================
// OUTPUT SINKS: OutputBuffer, StdoutSink and FileSink implementations
// ============================================================================

/// OutputBuffer: collects output into a String for testing or programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
        Ok(())
    }

    fn destination(&self) -> String {
        "output buffer".into()
    }
}

/// StdoutSink: writes output to stdout for CLI use.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }

    fn destination(&self) -> String {
        "standard output".into()
    }
}

/// FileSink: writes output to a file.
///
/// The file is created (or truncated) on the first emit, never before, so a run
/// that fails leaves the destination untouched. The file holds exactly the
/// emitted text with no trailing newline.
#[derive(Debug)]
pub struct FileSink {
    pub path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileSink {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        fs::write(&self.path, text)
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}
