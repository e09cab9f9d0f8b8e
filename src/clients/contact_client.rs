//! # Contact Client
//!
//! Provides a high‑level API for the contact form loop.
use crate::clients::form_handle::{recover, FormHandle};
use crate::contact::{ContactError, ContactField, ContactForm};
use crate::framework::{FormClient, FrameworkError};
use crate::model::ContactReceipt;
use async_trait::async_trait;
use tracing::instrument;

/// Client for interacting with the contact form.
#[derive(Clone)]
pub struct ContactClient {
    inner: FormClient<ContactForm>,
}

impl ContactClient {
    pub fn new(inner: FormClient<ContactForm>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FormHandle<ContactForm> for ContactClient {
    type Error = ContactError;

    fn inner(&self) -> &FormClient<ContactForm> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover(e, ContactError::FormUnavailable)
    }
}

impl ContactClient {
    /// Fills in and submits the whole form in one go.
    #[instrument(skip(self, message))]
    pub async fn send_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactReceipt, ContactError> {
        self.fill(ContactField::Name, name).await?;
        self.fill(ContactField::Email, email).await?;
        self.fill(ContactField::Message, message).await?;
        self.submit().await
    }
}
