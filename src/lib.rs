//! # The Grand Palatial Front Desk
//!
//! > **Booking quotes and form handling for The Grand Palatial's website.**
//!
//! The crate splits into a pure core that validates stays and prices them, and
//! a thin shell that receives form events one at a time and reports either a
//! confirmation or a typed error.
//!
//! ## 🏗️ Design
//!
//! ### Functional core
//! [`DateRangeValidator`](booking::DateRangeValidator) and
//! [`PriceCalculator`](booking::PriceCalculator) take values and return values.
//! "Today" is always an argument, so every rule is testable without a clock.
//!
//! ### Imperative shell
//! Each form (booking, contact) is owned by a [`FormActor`](framework::FormActor)
//! that applies input events sequentially, the same way a browser dispatches them.
//! A submission returns `Result<Confirmation, Error>` instead of popping a dialog;
//! the caller decides how to show it.
//!
//! ### Errors
//! Each form has its own `thiserror` enum ([`BookingError`](booking::BookingError),
//! [`ContactError`](contact::ContactError)). The clients recover those enums intact
//! from the loop, so callers can match on `PastCheckIn` rather than on strings.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - rooms, stays, quotes, receipts
//! - [`booking`] - date validation, pricing and the booking form
//! - [`contact`] - the contact form
//! - [`framework`] - the generic form event loop
//! - [`clients`] - typed handles for each form
//! - [`lifecycle`] - [`FrontDesk`](lifecycle::FrontDesk), configuration, tracing
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Quote a stay
//! RUST_LOG=info cargo run -- 2025-06-10 2025-06-13 2 executive
//!
//! # Run the tests
//! cargo test
//! ```

pub mod booking;
pub mod clients;
pub mod contact;
pub mod framework;
pub mod lifecycle;
pub mod model;
