//! Error types for phonebook.
//!
//! This module defines all error types used throughout the phonebook crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for phonebook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Backing File Errors ===
    /// Failed to read the contacts file.
    #[error("failed to read contacts file {path}: {source}")]
    ContactsFileRead {
        /// Path to the contacts file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the contacts file.
    #[error("failed to write contacts file {path}: {source}")]
    ContactsFileWrite {
        /// Path to the contacts file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The contacts file is not a valid JSON array of contacts.
    #[error("malformed contacts file {path}: {source}")]
    ContactsFileParse {
        /// Path to the contacts file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Two stored contacts share the same phone number.
    #[error("duplicate phone number in contacts file: {phone}")]
    DuplicatePhone {
        /// The repeated phone number.
        phone: String,
    },

    // === Contact Errors ===
    /// A contact failed validation.
    #[error("invalid contact: {message}")]
    InvalidContact {
        /// Description of the validation failure.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for phonebook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new invalid contact error.
    #[must_use]
    pub fn invalid_contact(message: impl Into<String>) -> Self {
        Self::InvalidContact {
            message: message.into(),
        }
    }

    /// Check if this error means the contacts file content could not be used.
    #[must_use]
    pub fn is_malformed_file(&self) -> bool {
        matches!(
            self,
            Self::ContactsFileParse { .. } | Self::DuplicatePhone { .. }
        )
    }

    /// Check if this error came from writing the contacts file.
    #[must_use]
    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::ContactsFileWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_contact_display() {
        let err = Error::invalid_contact("name must not be empty");
        assert_eq!(err.to_string(), "invalid contact: name must not be empty");
    }

    #[test]
    fn test_duplicate_phone_display() {
        let err = Error::DuplicatePhone {
            phone: "099123456".to_string(),
        };
        assert!(err.to_string().contains("099123456"));
    }

    #[test]
    fn test_is_malformed_file() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = Error::ContactsFileParse {
            path: PathBuf::from("contacts.json"),
            source: json_err,
        };
        assert!(err.is_malformed_file());

        let err = Error::DuplicatePhone {
            phone: "1".to_string(),
        };
        assert!(err.is_malformed_file());

        assert!(!Error::invalid_contact("x").is_malformed_file());
    }

    #[test]
    fn test_is_write_error() {
        let err = Error::ContactsFileWrite {
            path: PathBuf::from("/readonly/contacts.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_write_error());
        assert!(err.to_string().contains("/readonly/contacts.json"));

        let io_err = std::io::Error::other("boom");
        assert!(!Error::from(io_err).is_write_error());
    }

    #[test]
    fn test_contacts_file_read_display() {
        let err = Error::ContactsFileRead {
            path: PathBuf::from("/data/contacts.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/contacts.json"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "contacts_path must not be empty".to_string(),
        };
        assert!(err.to_string().contains("contacts_path"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_boxed_error_display() {
        let err: Box<dyn std::error::Error> = Error::DuplicatePhone {
            phone: "099123456".to_string(),
        }
        .into();

        let line = format!("Error: {err}");
        assert_eq!(line, "Error: duplicate phone number in contacts file: 099123456");
        assert!(!line.contains("DuplicatePhone"));
    }
}
