//! `phonebook` - A personal contact directory backed by a JSON file
//!
//! This library provides the contact record type and the directory that keeps
//! contacts in memory while mirroring every change to a local file.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod directory;
pub mod error;
pub mod logging;

pub use config::Config;
pub use contact::{Contact, NewContact};
pub use directory::{Directory, DirectoryStats};
pub use error::{Error, Result};
pub use logging::init_logging;
