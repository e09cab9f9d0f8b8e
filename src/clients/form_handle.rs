//! # FormHandle Trait
//!
//! Common interface for form-specific clients: default `fill`, `snapshot`,
//! `submit` and `reset` methods built on top of a generic [`FormClient`].
use crate::framework::{FormClient, FormEntity, FrameworkError};
use async_trait::async_trait;

/// Trait for form-specific clients to inherit the standard form events.
#[async_trait]
pub trait FormHandle<T: FormEntity>: Send + Sync {
    /// The form-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic FormClient.
    fn inner(&self) -> &FormClient<T>;

    /// Map framework errors to the form's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Types `value` into `field`, returning the updated form.
    #[tracing::instrument(skip(self))]
    async fn fill(&self, field: T::Field, value: &str) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .input(field, value.to_string())
            .await
            .map_err(Self::map_error)
    }

    /// Reads the current form.
    async fn snapshot(&self) -> Result<T, Self::Error> {
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Submits the form. On success the form is cleared.
    #[tracing::instrument(skip(self))]
    async fn submit(&self) -> Result<T::Submission, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().submit().await.map_err(Self::map_error)
    }

    /// Clears every field.
    #[tracing::instrument(skip(self))]
    async fn reset(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().reset().await.map_err(Self::map_error)
    }
}

/// Recovers the form's own error from a rejection, or wraps the channel failure.
pub(crate) fn recover<E>(e: FrameworkError, unavailable: impl FnOnce(String) -> E) -> E
where
    E: std::error::Error + 'static,
{
    match e {
        FrameworkError::Rejected(inner) => match inner.downcast::<E>() {
            Ok(err) => *err,
            Err(other) => unavailable(other.to_string()),
        },
        other => unavailable(other.to_string()),
    }
}
