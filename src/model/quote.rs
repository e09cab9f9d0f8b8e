use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::{DateRange, RoomCategory};

/// Hotel name used when rendering confirmations without explicit configuration.
pub const DEFAULT_HOTEL_NAME: &str = "The Grand Palatial";

/// Currency symbol prefixed to prices by default.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// The priced outcome of a valid booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuote {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub category: RoomCategory,
    pub total_price: u64,
}

impl BookingQuote {
    /// Creates a quote for an accepted stay.
    ///
    /// # Arguments
    /// * `stay` - Validated date range
    /// * `category` - Selected room tier
    /// * `total_price` - Price computed for the whole stay
    pub fn new(stay: DateRange, category: RoomCategory, total_price: u64) -> Self {
        Self {
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            nights: stay.nights(),
            category,
            total_price,
        }
    }
}

/// A confirmed booking submission: the quote plus the echoed guest count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub quote: BookingQuote,
    pub guests: String,
}

impl BookingConfirmation {
    /// Renders the confirmation message shown to the guest.
    pub fn message(&self, hotel_name: &str, currency_symbol: &str) -> String {
        let quote = &self.quote;
        format!(
            "Booking Confirmed!\n\n\
             Check-in: {}\n\
             Check-out: {}\n\
             Nights: {}\n\
             Room: {}\n\
             Guests: {}\n\n\
             Total: {}{}\n\n\
             Thank you for choosing {}!",
            quote.check_in,
            quote.check_out,
            quote.nights,
            quote.category,
            self.guests,
            currency_symbol,
            quote.total_price,
            hotel_name,
        )
    }
}

impl Display for BookingConfirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message(DEFAULT_HOTEL_NAME, DEFAULT_CURRENCY_SYMBOL))
    }
}
