//! Command-line interface for phonebook.
//!
//! This module provides the CLI structure for the `phonebook` binary.

mod commands;
mod demo;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, ConfigCommand, LookupCommand, OutputFormat, StatusCommand};
pub use demo::{run_demo, write_contact};

/// phonebook - Keep your contacts in a plain JSON file
///
/// Run without a command to walk through a demonstration that adds, lists,
/// finds, and removes sample contacts.
#[derive(Debug, Parser)]
#[command(name = "phonebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Contacts file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `demo`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the demonstration sequence (replaces the contacts file)
    Demo,

    /// Add a contact
    Add(AddCommand),

    /// Remove a contact by phone number
    Remove {
        /// Phone number of the contact to remove
        phone: String,
    },

    /// Find a contact by phone number
    Find(LookupCommand),

    /// List all contacts sorted by name
    List {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Show contacts file status
    Status(StatusCommand),

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

    /// Get the command to run, falling back to the demonstration.
    #[must_use]
    pub fn command_or_demo(self) -> Command {
        self.command.unwrap_or(Command::Demo)
    }
}
