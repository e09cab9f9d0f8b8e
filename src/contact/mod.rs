//! # Contact
//!
//! The "get in touch" form: name, email and message, all required, with a
//! shape check on the email address.
//!
//! - [`ContactForm`] - raw field state and validation
//! - [`ContactError`] - why a message was rejected
//! - [`new()`] - Factory function that creates the form loop and its client

pub mod entity;
pub mod error;
mod form;

pub use error::*;
pub use form::*;

use crate::clients::ContactClient;
use crate::framework::FormActor;

/// Creates a new contact form loop and its client.
pub fn new(buffer_size: usize) -> (FormActor<ContactForm>, ContactClient) {
    let (actor, generic_client) = FormActor::new(buffer_size);
    (actor, ContactClient::new(generic_client))
}
