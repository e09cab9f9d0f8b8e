//! # FormEntity Trait
//!
//! The contract every form (booking, contact) implements to be driven by the
//! generic [`FormActor`](crate::framework::FormActor). The form owns its raw field
//! values; the event loop owns the form.
//!
//! # Provided Methods (Hooks)
//! - [`FormEntity::on_open`] runs when the loop starts and after every reset.
//!   The default implementation does nothing.

use std::fmt::{Debug, Display};

/// Trait that any form must implement to be managed by a `FormActor`.
///
/// # Context
/// `Context` is injected at [`FormActor::run`](crate::framework::FormActor::run)
/// rather than at construction, and handed to every hook. The booking form uses it
/// to learn today's date.
pub trait FormEntity: Default + Clone + Debug + Send + Sync + 'static {
    /// Identifies one input of the form.
    type Field: Copy + Debug + Display + Send + Sync;

    /// The value produced by an accepted submission.
    type Submission: Clone + Debug + Send + Sync;

    /// The runtime context (dependencies) injected into the loop.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Why a submission was rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called on a freshly defaulted form, before any input arrives.
    fn on_open(&mut self, _ctx: &Self::Context) {}

    /// Stores the raw value typed into `field`.
    fn on_input(&mut self, field: Self::Field, value: String, ctx: &Self::Context);

    /// Validates the current values and produces the submission outcome.
    ///
    /// Must not mutate the form: on rejection the values stay as entered.
    fn submit(&self, ctx: &Self::Context) -> Result<Self::Submission, Self::Error>;
}
