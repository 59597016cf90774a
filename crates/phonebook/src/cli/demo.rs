//! Demonstration sequence run when `phonebook` is called without a command.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::info;

use crate::contact::{Contact, NewContact};
use crate::directory::Directory;
use crate::error::{Error, Result};

/// Run the demonstration against the contacts file at `contacts_path`.
///
/// Any existing file is deleted before the directory is opened, so the run
/// always starts from an empty directory.
///
/// # Errors
///
/// Returns an error if the old file cannot be deleted, the contacts file
/// cannot be written, or `out` fails.
pub fn run_demo(contacts_path: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "=== PHONEBOOK DEMO ===")?;
    writeln!(out)?;

    match fs::remove_file(contacts_path) {
        Ok(()) => info!("Removed existing contacts file {}", contacts_path.display()),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(Error::ContactsFileWrite {
                path: contacts_path.to_path_buf(),
                source,
            })
        }
    }
    let mut directory = Directory::open(contacts_path)?;

    writeln!(out, "1. Adding sample contacts...")?;
    directory.add(
        NewContact::new("Juan Perez", "099123456")
            .email("juan@email.com")
            .address("Av. Principal 123"),
    )?;
    directory.add(
        NewContact::new("Maria Lopez", "098765432")
            .email("maria@email.com")
            .address("Calle 456"),
    )?;
    writeln!(out, "Contacts added")?;

    writeln!(out)?;
    writeln!(out, "2. Listing all contacts:")?;
    for contact in directory.list() {
        write_contact(out, contact)?;
    }

    writeln!(out)?;
    writeln!(out, "3. Looking up contact by phone...")?;
    if let Some(contact) = directory.find("099123456") {
        writeln!(out, "Contact found:")?;
        write_contact(out, contact)?;
    }

    writeln!(out)?;
    writeln!(out, "4. Removing contact...")?;
    if directory.remove("098765432")? {
        writeln!(out, "Contact removed")?;
    }

    writeln!(out)?;
    writeln!(out, "5. Final contact list:")?;
    for contact in directory.list() {
        write_contact(out, contact)?;
    }

    writeln!(out)?;
    writeln!(out, "=== DEMO COMPLETE ===")?;
    Ok(())
}

/// Write one contact as a plain-text block.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_contact(out: &mut impl Write, contact: &Contact) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Name: {}", contact.name())?;
    writeln!(out, "Phone: {}", contact.phone())?;
    writeln!(out, "Email: {}", contact.email())?;
    writeln!(out, "Address: {}", contact.address())?;
    writeln!(out, "{}", "-".repeat(30))?;
    Ok(())
}
