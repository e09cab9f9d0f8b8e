//! # Front Desk Lifecycle
//!
//! Starts, wires and stops the form loops.
//!
//! 1. **Creation** - each form module's `new()` returns its loop and client
//! 2. **Context injection** - the booking loop receives its [`Clock`](crate::booking::Clock)
//!    at `run(context)`, not at construction
//! 3. **Graceful shutdown** - dropping every client closes the channels; the loops
//!    exit and [`FrontDesk::shutdown`] awaits them
//!
//! Configuration lives in [`FrontDeskConfig`]; logging is set up once with
//! [`setup_tracing`].

pub mod config;
pub mod front_desk;
pub mod tracing;

pub use config::*;
pub use front_desk::*;
pub use self::tracing::*;
