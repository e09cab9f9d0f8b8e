use fancy_regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::LazyLock;

use super::ContactError;
use crate::model::ContactReceipt;

/// Something, an `@`, something, a dot, something; no whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Whether `email` has the shape of an address. Deliverability is not checked.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.is_match(email).ok())
        .unwrap_or(false)
}

/// The inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];
}

impl Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        };
        f.write_str(name)
    }
}

/// Raw state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub(crate) fn set_value(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Checks presence of every field, then the email shape.
    pub fn validate(&self) -> Result<ContactReceipt, ContactError> {
        for field in ContactField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(ContactReceipt {
            name: self.name.trim().to_string(),
            email: email.to_string(),
        })
    }
}
