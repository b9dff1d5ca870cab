//! Simple CLI that reads HTML from stdin and writes the cleaned document
//! to stdout.
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.
//! Exits with status 1 when the input cannot be cleaned.

use html_cleaner::{clean_bytes, logging};
use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let Some(cleaned) = clean_bytes(&html) else {
        return ExitCode::FAILURE;
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(cleaned.as_bytes()).and_then(|()| stdout.flush()) {
        tracing::error!("Failed to write to stdout: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
