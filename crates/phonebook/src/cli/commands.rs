//! CLI command definitions.
//!
//! This module defines the arguments of the `phonebook` subcommands.

use clap::{Args, Subcommand, ValueEnum};

use crate::contact::NewContact;

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Name of the contact
    pub name: String,

    /// Phone number (must not already be in the directory)
    pub phone: String,

    /// Email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Postal address
    #[arg(short, long, default_value = "")]
    pub address: String,
}

impl From<AddCommand> for NewContact {
    fn from(cmd: AddCommand) -> Self {
        NewContact::new(cmd.name, cmd.phone)
            .email(cmd.email)
            .address(cmd.address)
    }
}

/// Find command arguments.
#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Phone number to look up
    pub phone: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output, in the same shape as the contacts file
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_command_into_new_contact() {
        let cmd = AddCommand {
            name: "Maria Lopez".to_string(),
            phone: "098765432".to_string(),
            email: "maria@email.com".to_string(),
            address: String::new(),
        };

        let input = NewContact::from(cmd);
        assert_eq!(
            input,
            NewContact::new("Maria Lopez", "098765432").email("maria@email.com")
        );
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
