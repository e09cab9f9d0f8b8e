//! Generic form event loop.
//!
//! This module provides the building blocks that turn user interface events into
//! sequential, typed requests against a form value.
//!
//! # Main Components
//!
//! - [`FormEntity`] - Trait that forms implement to be driven by a loop
//! - [`FormActor`] - Generic event loop owning one form
//! - [`FormClient`] - Type-safe handle for sending events to the loop
//! - [`FrameworkError`] - Channel and rejection errors

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;

pub use actor::FormActor;
pub use client::FormClient;
pub use entity::FormEntity;
pub use error::FrameworkError;
pub use message::{FormRequest, Response};
