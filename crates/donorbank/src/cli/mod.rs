//! Command-line interface for donorbank.
//!
//! This module provides the CLI structure for the `donors` binary, the
//! presentation layer in front of the registry.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, DeleteCommand, ListCommand, RegisterCommand, SearchCommand, UpdateCommand,
};

/// donors - Keep track of blood donors
///
/// Register, search, list, update and delete donors stored in a local JSON
/// file.
#[derive(Debug, Parser)]
#[command(name = "donors")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Donor file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Increase verbosity (-v for registry activity, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new donor
    Register(RegisterCommand),

    /// Search donors by blood type and location
    Search(SearchCommand),

    /// List all donors
    List(ListCommand),

    /// Update a donor's details
    Update(UpdateCommand),

    /// Delete a donor
    Delete(DeleteCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
