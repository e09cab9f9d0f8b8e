//! # Booking
//!
//! The booking price calculator and the form that feeds it.
//!
//! ## Structure
//!
//! - [`DateRangeValidator`] - decides whether a stay is bookable and counts its nights
//! - [`PriceCalculator`] - prices a stay from the nightly rate table
//! - [`BookingRequestHandler`] - raw form values in, [`BookingConfirmation`](crate::model::BookingConfirmation) or [`BookingError`] out
//! - [`BookingForm`] - raw field state, driven by a [`FormActor`](crate::framework::FormActor)
//! - [`Clock`] - source of today's date, injected as the form's context
//! - [`new()`] - Factory function that creates the form loop and its client
//!
//! The validator and calculator are pure; only the form loop holds state.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use grand_palatial::booking::{self, FixedClock};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = booking::new(8);
//!     let today: chrono::NaiveDate = "2025-06-01".parse()?;
//!     tokio::spawn(actor.run(Arc::new(FixedClock(today))));
//!
//!     client.enter("2025-06-10", "2025-06-13", "2", "executive").await?;
//!     let confirmation = client.submit_booking().await?;
//!     assert_eq!(confirmation.quote.total_price, 1350);
//!     Ok(())
//! }
//! ```

mod clock;
pub mod entity;
pub mod error;
mod form;
mod handler;
mod pricing;
mod validator;

pub use clock::*;
pub use error::*;
pub use form::*;
pub use handler::*;
pub use pricing::*;
pub use validator::*;

use crate::clients::BookingClient;
use crate::framework::FormActor;

/// Creates a new booking form loop and its client.
pub fn new(buffer_size: usize) -> (FormActor<BookingForm>, BookingClient) {
    let (actor, generic_client) = FormActor::new(buffer_size);
    (actor, BookingClient::new(generic_client))
}
