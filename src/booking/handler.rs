use chrono::NaiveDate;
use tracing::debug;

use super::{BookingError, BookingField, BookingForm, DateRangeValidator, PriceCalculator};
use crate::model::{BookingConfirmation, RoomCategory};

/// Turns a filled-in booking form into a confirmation.
pub struct BookingRequestHandler;

impl BookingRequestHandler {
    /// Validates the form against `today` and prices the stay.
    ///
    /// Checks run in this order, stopping at the first failure:
    /// 1. every field is filled in
    /// 2. both dates parse
    /// 3. the date range is acceptable
    /// 4. the room selector names a known category
    pub fn confirm(form: &BookingForm, today: NaiveDate) -> Result<BookingConfirmation, BookingError> {
        for field in BookingField::ALL {
            form.required(field)?;
        }

        let check_in = form.date(BookingField::CheckIn)?;
        let check_out = form.date(BookingField::CheckOut)?;
        let stay = DateRangeValidator::accept(check_in, check_out, today)?;

        let category: RoomCategory = form.required(BookingField::Room)?.parse()?;
        let quote = PriceCalculator::quote(stay, category);
        debug!(?quote, "Quote computed");

        Ok(BookingConfirmation {
            quote,
            guests: form.required(BookingField::Guests)?.to_string(),
        })
    }
}
