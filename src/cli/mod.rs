//! The graphrts Command-Line Interface.
//!
//! Parses arguments, loads configuration, sets up logging, and dispatches to the subcommand
//! handlers. [`run`] returns the process exit code.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, RtsArgs};
use crate::diagnostics::{ErrorType, RtsError};
use crate::runtime::config::RuntimeConfig;
use crate::runtime::eval::Machine;
use crate::runtime::registry::build_default_builtin_registry;
use crate::value::ValueRef;

pub mod args;
pub mod literal;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> i32 {
    // Usage errors share the exit code of other malformed input; help and version exit 0.
    let args = match RtsArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ErrorType::Parse.exit_code() } else { 0 };
        }
    };
    init_logging(args.verbose);

    match dispatch(args) {
        Ok(()) => 0,
        Err(e) => {
            let code = e.error_type().exit_code();
            output::print_error(e);
            code
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "graphrts=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GRAPHRTS_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn dispatch(args: RtsArgs) -> Result<(), RtsError> {
    let mut config = match &args.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(max_steps) = args.max_steps {
        config = config.with_max_steps(max_steps);
    }
    debug!(?config, "configuration loaded");

    match args.command {
        Command::Apply { builtin, args } => handle_apply(config, &builtin, &args),
        Command::Builtins => {
            output::print_builtins(&build_default_builtin_registry());
            Ok(())
        }
    }
}

/// Handles the `apply` subcommand.
fn handle_apply(config: RuntimeConfig, builtin: &str, literals: &[String]) -> Result<(), RtsError> {
    let args = literals
        .iter()
        .map(|text| literal::parse_literal(text).map(|v| v.into_ref()))
        .collect::<Result<Vec<ValueRef>, _>>()?;
    let registry = build_default_builtin_registry();
    let mut machine = Machine::new(config);
    let result = machine.call(&registry, builtin, args)?;
    debug!(
        steps = machine.steps(),
        max_steps = machine.config().max_steps,
        "evaluation finished"
    );
    output::print_result(&result);
    Ok(())
}
