//! The rpnlisp Command-Line Interface.
//!
//! This module is the main entry point for the binary: it picks a line source
//! and a sink from the arguments and runs the translation pipeline between them.

use std::process;
use std::sync::Once;

use clap::Parser;
use tracing::info;

use crate::cli::args::RpnlispArgs;
use crate::engine::ExecutionPipeline;
use crate::errors::{print_error, RunError};

pub mod args;
pub mod source;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=rpnlisp=debug` or
/// `RUST_LOG=rpnlisp=trace`; logs go to stderr so stdout only ever carries the
/// translation.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// The main entry point for the CLI.
pub fn run() {
    let args = RpnlispArgs::parse();
    init_tracing();

    if let Err(e) = execute(&args) {
        print_error(e);
        process::exit(1);
    }
}

/// Runs one translation as described by `args`.
pub fn execute(args: &RpnlispArgs) -> Result<(), RunError> {
    let source = args.line_source();
    let mut sink = args.sink();
    info!(
        source = %source.name(),
        sink = %sink.destination(),
        "running translation"
    );

    let pipeline = ExecutionPipeline::new(source.name(), args.format());
    pipeline.execute(source.open()?, sink.as_mut())
}
