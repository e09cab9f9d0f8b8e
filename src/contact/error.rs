//! Error types for the contact form.

use thiserror::Error;

use super::ContactField;

/// Errors that end a contact-form submission attempt.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactError {
    /// A required field was left empty.
    #[error("Please fill in all fields ({0} is empty)")]
    MissingField(ContactField),

    /// The address does not look like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidEmail(String),

    /// The contact form event loop is no longer reachable.
    #[error("Contact form unavailable: {0}")]
    FormUnavailable(String),
}
