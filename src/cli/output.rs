//! Handles all user-facing output for the CLI.
//!
//! Results go to stdout, colored only when stdout is a terminal. Errors go to stderr as full
//! miette reports.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::atoms::BuiltinRegistry;
use crate::diagnostics::RtsError;
use crate::value::Value;

fn stdout_stream() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Prints an evaluation result to the console.
pub fn print_result(value: &Value) {
    let mut stdout = stdout_stream();
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = writeln!(stdout, "{}", value);
    let _ = stdout.reset();
}

/// Prints every registered builtin with its arity and description.
pub fn print_builtins(registry: &BuiltinRegistry) {
    let mut stdout = stdout_stream();
    for name in registry.list() {
        let Some(builtin) = registry.get(&name) else {
            continue;
        };
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
        let _ = write!(stdout, "{:<16}", builtin.name);
        let _ = stdout.reset();
        let _ = writeln!(stdout, "/{}  {}", builtin.arity, builtin.doc);
    }
}

/// Prints an RtsError with full miette diagnostics.
pub fn print_error(error: RtsError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
