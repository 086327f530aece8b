//! Defines the command-line arguments and subcommands for the graphrts CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "graphrts",
    version,
    about = "Apply curried runtime builtins to literal arguments."
)]
pub struct RtsArgs {
    /// Runtime configuration file (.yaml, .yml or .json).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the application budget.
    #[arg(long, global = true, value_name = "N")]
    pub max_steps: Option<usize>,

    /// Enable debug logging (GRAPHRTS_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply a builtin to arguments, one at a time, left to right.
    Apply {
        /// The builtin to apply.
        #[arg(required = true)]
        builtin: String,
        /// Argument literals: 42, true, list:<lit>, constr:<tag>:<lit>, idata:<int>, bytes:<hex>.
        #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
        args: Vec<String>,
    },
    /// List all available builtins with their arity.
    Builtins,
}
