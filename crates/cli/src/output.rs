// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and verdict output.
//!
//! Provides ANSI color support with automatic terminal detection.

use cliverify_capture::{CheckEntry, CheckOutcome};
use std::io::{self, IsTerminal, Write};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a recorded check verdict to stdout.
pub fn print_verdict(entry: &CheckEntry) {
    let is_tty = io::stdout().is_terminal();
    write_verdict(&mut io::stdout(), entry, is_tty);
}

/// Write a check verdict: `PASS check` or `FAIL check [kind]: diagnostic`.
fn write_verdict<W: Write>(writer: &mut W, entry: &CheckEntry, is_terminal: bool) {
    let (color, line) = match &entry.outcome {
        CheckOutcome::Passed => ("\x1b[32m", format!("PASS {}", entry.check)),
        CheckOutcome::Failed { kind, diagnostic } => (
            "\x1b[31m",
            format!("FAIL {} [{}]: {}", entry.check, kind, diagnostic),
        ),
    };
    if is_terminal {
        let _ = writeln!(writer, "{}{}\x1b[0m", color, line);
    } else {
        let _ = writeln!(writer, "{}", line);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
