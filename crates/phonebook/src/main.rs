//! `phonebook` - CLI for the phonebook contact directory
//!
//! Without a subcommand this runs the demonstration sequence against the
//! configured contacts file.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use phonebook::cli::{
    run_demo, write_contact, Cli, Command, ConfigCommand, LookupCommand, OutputFormat,
};
use phonebook::{init_logging, Config, Contact, Directory};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    let config = Config::load_from(cli.config.clone())?;
    let contacts_path = cli.file.clone().unwrap_or_else(|| config.contacts_path());

    match cli.command_or_demo() {
        Command::Demo => Ok(run_demo(&contacts_path, &mut io::stdout().lock())?),
        Command::Add(add_cmd) => {
            let mut directory = Directory::open(&contacts_path)?;
            let phone = add_cmd.phone.clone();
            if directory.add(add_cmd.into())? {
                println!("Added contact {phone}");
            } else {
                println!("A contact with phone {phone} already exists");
            }
            Ok(())
        }
        Command::Remove { phone } => {
            let mut directory = Directory::open(&contacts_path)?;
            if directory.remove(&phone)? {
                println!("Removed contact {phone}");
            } else {
                println!("No contact with phone {phone}");
            }
            Ok(())
        }
        Command::Find(lookup) => handle_find(&contacts_path, &lookup),
        Command::List { format } => {
            let directory = Directory::open(&contacts_path)?;
            print_contacts(&directory.list(), format)
        }
        Command::Status(status_cmd) => handle_status(&contacts_path, status_cmd.json),
        Command::Config(config_cmd) => handle_config(&config, &contacts_path, &config_cmd),
    }
}

fn handle_find(contacts_path: &Path, lookup: &LookupCommand) -> CliResult {
    let directory = Directory::open(contacts_path)?;
    match directory.find(&lookup.phone) {
        Some(contact) => print_contacts(&[contact], lookup.format),
        None => {
            println!("No contact with phone {}", lookup.phone);
            Ok(())
        }
    }
}

fn handle_status(contacts_path: &Path, json: bool) -> CliResult {
    let directory = Directory::open(contacts_path)?;
    let stats = directory.stats();
    let format_time = |t: Option<chrono::NaiveDateTime>| t.map(|t| t.to_string());

    if json {
        let status = serde_json::json!({
            "contacts_path": contacts_path,
            "file_exists": contacts_path.exists(),
            "total_contacts": stats.total_contacts,
            "oldest_registration": format_time(stats.oldest_registration),
            "newest_registration": format_time(stats.newest_registration),
            "file_size_bytes": stats.file_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("phonebook status");
        println!("----------------");
        println!("Contacts file: {}", contacts_path.display());
        println!("Contacts:      {}", stats.total_contacts);
        println!("File size:     {} bytes", stats.file_size_bytes);
        if let (Some(oldest), Some(newest)) =
            (stats.oldest_registration, stats.newest_registration)
        {
            println!("Oldest:        {oldest}");
            println!("Newest:        {newest}");
        }
    }
    Ok(())
}

fn handle_config(config: &Config, contacts_path: &Path, cmd: &ConfigCommand) -> CliResult {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Contacts path:      {}", contacts_path.display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}

fn print_contacts(contacts: &[&Contact], format: OutputFormat) -> CliResult {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Plain => {
            if contacts.is_empty() {
                writeln!(out, "No contacts.")?;
            }
            for contact in contacts {
                write_contact(&mut out, contact)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(contacts)?)?;
        }
    }
    Ok(())
}
