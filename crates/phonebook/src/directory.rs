//! Contact directory for phonebook.
//!
//! This module provides the in-memory contact collection and its JSON backing
//! file. Every successful mutation rewrites the whole file; the file is read
//! once, when the directory is opened.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::contact::{Contact, NewContact, REGISTRATION_FORMAT};
use crate::error::{Error, Result};

/// Indentation used when writing the contacts file.
const FILE_INDENT: &[u8] = b"    ";

/// A contact directory mirrored to a JSON file.
///
/// Contacts are kept in insertion order, which is also the order they are
/// written to disk. Phone numbers are unique within a directory.
#[derive(Debug)]
pub struct Directory {
    /// Path to the backing file.
    path: PathBuf,
    /// Contacts in insertion order.
    contacts: Vec<Contact>,
    /// Position of each contact in `contacts`, keyed by phone.
    by_phone: HashMap<String, usize>,
}

impl Directory {
    /// Open the directory backed by the file at `path`.
    ///
    /// A missing file yields an empty directory; the file is only created by
    /// the first successful mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not a JSON
    /// array of contacts, holds a contact with a blank name, or repeats a
    /// phone number.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let contacts = load(&path)?;
        let by_phone = index_by_phone(&contacts)?;

        info!(
            "Opened directory with {} contacts at {}",
            contacts.len(),
            path.display()
        );
        Ok(Self {
            path,
            contacts,
            by_phone,
        })
    }

    /// Get the path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a contact.
    ///
    /// Returns `false`, leaving the directory untouched, if a contact with the
    /// same phone number already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the backing file cannot be
    /// written.
    pub fn add(&mut self, input: NewContact) -> Result<bool> {
        if self.by_phone.contains_key(&input.phone) {
            debug!("Skipping contact with existing phone {}", input.phone);
            return Ok(false);
        }

        let contact = input.into_contact()?;
        debug!("Adding contact {} ({})", contact.name(), contact.phone());

        self.by_phone
            .insert(contact.phone().to_string(), self.contacts.len());
        self.contacts.push(contact);
        self.persist()?;
        Ok(true)
    }

    /// Remove the contact with the given phone number.
    ///
    /// Returns `false` if no contact has that phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    pub fn remove(&mut self, phone: &str) -> Result<bool> {
        let Some(position) = self.by_phone.remove(phone) else {
            return Ok(false);
        };

        let removed = self.contacts.remove(position);
        debug!("Removed contact {} ({})", removed.name(), removed.phone());

        // Everything after the removed contact shifted down by one.
        for (offset, contact) in self.contacts[position..].iter().enumerate() {
            self.by_phone
                .insert(contact.phone().to_string(), position + offset);
        }

        self.persist()?;
        Ok(true)
    }

    /// Find the contact with the given phone number.
    #[must_use]
    pub fn find(&self, phone: &str) -> Option<&Contact> {
        self.by_phone
            .get(phone)
            .and_then(|&position| self.contacts.get(position))
    }

    /// List all contacts sorted by name.
    ///
    /// Names compare byte-wise, so uppercase sorts before lowercase. Contacts
    /// with equal names keep their insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    /// Iterate over contacts in insertion order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory has no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Get directory statistics.
    #[must_use]
    pub fn stats(&self) -> DirectoryStats {
        let registrations: Vec<NaiveDateTime> = self
            .contacts
            .iter()
            .filter_map(|c| {
                NaiveDateTime::parse_from_str(c.registered_at(), REGISTRATION_FORMAT).ok()
            })
            .collect();

        let file_size_bytes = fs::metadata(&self.path).map_or(0, |m| m.len());

        DirectoryStats {
            total_contacts: self.contacts.len(),
            oldest_registration: registrations.iter().min().copied(),
            newest_registration: registrations.iter().max().copied(),
            file_size_bytes,
        }
    }

    /// Rewrite the backing file with every contact.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let write_error = |source: std::io::Error| Error::ContactsFileWrite {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut writer,
            PrettyFormatter::with_indent(FILE_INDENT),
        );
        self.contacts
            .serialize(&mut serializer)
            .map_err(|err| write_error(err.into()))?;
        writer.flush().map_err(write_error)?;

        debug!(
            "Wrote {} contacts to {}",
            self.contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Statistics about a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Total number of contacts.
    pub total_contacts: usize,
    /// Earliest registration time.
    pub oldest_registration: Option<NaiveDateTime>,
    /// Latest registration time.
    pub newest_registration: Option<NaiveDateTime>,
    /// Size of the backing file in bytes (0 if it does not exist yet).
    pub file_size_bytes: u64,
}

/// Read the contacts stored at `path`.
fn load(path: &Path) -> Result<Vec<Contact>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No contacts file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::ContactsFileRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let contacts: Vec<Contact> =
        serde_json::from_str(&raw).map_err(|source| Error::ContactsFileParse {
            path: path.to_path_buf(),
            source,
        })?;

    for contact in &contacts {
        contact.validate()?;
    }
    Ok(contacts)
}

fn index_by_phone(contacts: &[Contact]) -> Result<HashMap<String, usize>> {
    let mut by_phone = HashMap::with_capacity(contacts.len());
    for (position, contact) in contacts.iter().enumerate() {
        if by_phone
            .insert(contact.phone().to_string(), position)
            .is_some()
        {
            return Err(Error::DuplicatePhone {
                phone: contact.phone().to_string(),
            });
        }
    }
    Ok(by_phone)
}
