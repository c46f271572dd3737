//! CLI command definitions for cw-poller-config
//!
//! Commands for checking a poller configuration and inspecting how task and
//! account names resolve against it.

use crate::format::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and validate CloudWatch poller configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    /// Output format for printed configuration
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the configuration and print a summary (default)
    Check,

    /// Print a task by name
    Task {
        /// Task name (case-sensitive)
        name: String,
    },

    /// Print the account a name resolves to, or the default account
    Account {
        /// Account name (case-sensitive)
        name: String,
    },
}
