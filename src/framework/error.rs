//! # Framework Errors
//!
//! Errors raised by the form event loop itself, as opposed to the domain errors
//! a form reports when a submission is rejected.

/// Errors that can occur while talking to a [`FormActor`](crate::framework::FormActor).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Form closed")]
    FormClosed,
    #[error("Form dropped response channel")]
    FormDropped,
    #[error("Rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}
