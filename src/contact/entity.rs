//! FormEntity trait implementation for the contact form. No context is needed.

use super::{ContactError, ContactField, ContactForm};
use crate::framework::FormEntity;
use crate::model::ContactReceipt;

impl FormEntity for ContactForm {
    type Field = ContactField;
    type Submission = ContactReceipt;
    type Context = ();
    type Error = ContactError;

    fn on_input(&mut self, field: ContactField, value: String, _ctx: &()) {
        self.set_value(field, value);
    }

    fn submit(&self, _ctx: &()) -> Result<ContactReceipt, ContactError> {
        self.validate()
    }
}
