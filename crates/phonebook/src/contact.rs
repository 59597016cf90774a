//! Contact record types for phonebook.
//!
//! This module defines the contact value object and the input used to create
//! one. The serde form of [`Contact`] is the on-disk form used by the
//! contacts file.

use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Format of the registration timestamp (`YYYY-MM-DD HH:MM:SS`, local time).
pub const REGISTRATION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single contact.
///
/// The phone number identifies the contact within a directory. The
/// registration timestamp is set once when the contact is created and has no
/// setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "nombre")]
    name: String,

    #[serde(rename = "telefono")]
    phone: String,

    #[serde(default)]
    email: String,

    #[serde(rename = "direccion", default)]
    address: String,

    // Absent in files written by hand; those contacts are stamped on load.
    #[serde(rename = "fecha_registro", default = "registration_stamp")]
    registered_at: String,
}

impl Contact {
    /// Create a new contact registered now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContact`] if `name` is empty or only whitespace.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self> {
        let contact = Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            registered_at: registration_stamp(),
        };
        contact.validate()?;
        Ok(contact)
    }

    /// Check the invariants a stored contact must hold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContact`] if the name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_contact(format!(
                "name must not be empty (phone {})",
                self.phone
            )));
        }
        Ok(())
    }

    /// The contact's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contact's phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The contact's email, empty if unknown.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The contact's postal address, empty if unknown.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// When the contact was registered, formatted as [`REGISTRATION_FORMAT`].
    #[must_use]
    pub fn registered_at(&self) -> &str {
        &self.registered_at
    }

    /// Flatten the contact into a string-keyed map.
    ///
    /// Keys are the field names used in code (`name`, `phone`, ...); the
    /// contacts file uses the serde form with its Spanish keys instead.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.name.clone()),
            ("phone", self.phone.clone()),
            ("email", self.email.clone()),
            ("address", self.address.clone()),
            ("registered_at", self.registered_at.clone()),
        ])
    }
}

/// Input for adding a contact to a directory.
///
/// Email and address default to empty text.
///
/// ```
/// use phonebook::NewContact;
///
/// let input = NewContact::new("Juan Perez", "099123456").email("juan@email.com");
/// assert_eq!(input.address, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    /// Name of the contact.
    pub name: String,
    /// Phone number of the contact.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
}

impl NewContact {
    /// Start an input with just a name and phone number.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Set the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the postal address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Build the contact, stamping the registration time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContact`] if the name is blank.
    pub fn into_contact(self) -> Result<Contact> {
        Contact::new(self.name, self.phone, self.email, self.address)
    }
}

fn registration_stamp() -> String {
    Local::now().format(REGISTRATION_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_contact_new() {
        let contact = Contact::new(
            "Juan Perez",
            "099123456",
            "juan@email.com",
            "Av. Principal 123",
        )
        .unwrap();

        assert_eq!(contact.name(), "Juan Perez");
        assert_eq!(contact.phone(), "099123456");
        assert_eq!(contact.email(), "juan@email.com");
        assert_eq!(contact.address(), "Av. Principal 123");
    }

    #[test]
    fn test_registration_timestamp_format() {
        let contact = Contact::new("Maria Lopez", "098765432", "", "").unwrap();
        let parsed = NaiveDateTime::parse_from_str(contact.registered_at(), REGISTRATION_FORMAT);
        assert!(parsed.is_ok(), "bad stamp: {}", contact.registered_at());
        assert_eq!(contact.registered_at().len(), 19);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Contact::new("", "099123456", "", "");
        assert!(matches!(result, Err(Error::InvalidContact { .. })));

        let result = Contact::new("   ", "099123456", "", "");
        assert!(matches!(result, Err(Error::InvalidContact { .. })));
    }

    #[test]
    fn test_to_map_keys() {
        let contact = Contact::new("Juan Perez", "099123456", "", "").unwrap();
        let map = contact.to_map();

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(
            keys,
            vec!["address", "email", "name", "phone", "registered_at"]
        );
        assert_eq!(map["name"], "Juan Perez");
        assert_eq!(map["phone"], "099123456");
        assert_eq!(map["email"], "");
        assert_eq!(map["registered_at"], contact.registered_at());
    }

    #[test]
    fn test_serialized_keys_and_order() {
        let contact = Contact::new("Juan Perez", "099123456", "j@e.com", "Calle 1").unwrap();
        let json = serde_json::to_string(&contact).unwrap();

        let nombre = json.find("\"nombre\"").unwrap();
        let telefono = json.find("\"telefono\"").unwrap();
        let email = json.find("\"email\"").unwrap();
        let direccion = json.find("\"direccion\"").unwrap();
        let fecha = json.find("\"fecha_registro\"").unwrap();
        assert!(nombre < telefono && telefono < email && email < direccion && direccion < fecha);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"nombre": "Ana", "telefono": "091000000"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();

        assert_eq!(contact.email(), "");
        assert_eq!(contact.address(), "");
        assert!(!contact.registered_at().is_empty());
    }

    #[test]
    fn test_deserialize_keeps_stored_timestamp() {
        let json = r#"{
            "nombre": "Ana",
            "telefono": "091000000",
            "fecha_registro": "2020-01-02 03:04:05"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.registered_at(), "2020-01-02 03:04:05");
    }

    #[test]
    fn test_deserialize_missing_phone_fails() {
        let json = r#"{"nombre": "Ana"}"#;
        assert!(serde_json::from_str::<Contact>(json).is_err());
    }

    #[test]
    fn test_new_contact_builder() {
        let input = NewContact::new("Maria Lopez", "098765432")
            .email("maria@email.com")
            .address("Calle 456");

        let contact = input.into_contact().unwrap();
        assert_eq!(contact.email(), "maria@email.com");
        assert_eq!(contact.address(), "Calle 456");
    }

    #[test]
    fn test_new_contact_defaults_empty() {
        let input = NewContact::new("Maria Lopez", "098765432");
        assert_eq!(input.email, "");
        assert_eq!(input.address, "");
    }
}
