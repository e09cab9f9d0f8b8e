//! Error types for the booking form.

use thiserror::Error;

use super::BookingField;

/// Errors that end a booking submission attempt.
///
/// Every variant is terminal for the current submission: the form keeps its
/// values and the guest resubmits after correcting them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    /// A required field was left empty.
    #[error("Please fill in all fields ({0} is empty)")]
    MissingField(BookingField),

    /// A date field holds something other than an ISO 8601 calendar date.
    #[error("Invalid {field} date: {value}")]
    InvalidDate { field: BookingField, value: String },

    /// Check-in falls before today.
    #[error("Check-in date cannot be in the past")]
    PastCheckIn,

    /// Check-out is on or before check-in.
    #[error("Check-out must be after check-in")]
    InvalidOrder,

    /// The room selector holds a value outside the rate table.
    #[error("Unknown room category: {0}")]
    UnknownCategory(String),

    /// The booking form event loop is no longer reachable.
    #[error("Booking form unavailable: {0}")]
    FormUnavailable(String),
}
