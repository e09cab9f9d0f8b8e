use chrono::{NaiveDate, NaiveDateTime};

use super::BookingError;
use crate::model::DateRange;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Decides whether a check-in/check-out pair is bookable relative to today.
pub struct DateRangeValidator;

impl DateRangeValidator {
    /// Validates the stay and returns its number of nights.
    ///
    /// # Errors
    /// - [`BookingError::PastCheckIn`] if `check_in` is before `today` (checked first)
    /// - [`BookingError::InvalidOrder`] if `check_out` is not after `check_in`
    pub fn validate(
        check_in: NaiveDate,
        check_out: NaiveDate,
        today: NaiveDate,
    ) -> Result<u32, BookingError> {
        Self::accept(check_in, check_out, today).map(|stay| stay.nights())
    }

    /// Same as [`validate`](Self::validate), with "today" taken from a full
    /// timestamp whose time of day is dropped.
    pub fn validate_at(
        check_in: NaiveDate,
        check_out: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<u32, BookingError> {
        Self::validate(check_in, check_out, now.date())
    }

    /// Validates the stay and returns it as an accepted [`DateRange`].
    pub fn accept(
        check_in: NaiveDate,
        check_out: NaiveDate,
        today: NaiveDate,
    ) -> Result<DateRange, BookingError> {
        if check_in < today {
            return Err(BookingError::PastCheckIn);
        }
        if check_out <= check_in {
            return Err(BookingError::InvalidOrder);
        }

        // check_out > check_in, so the span is strictly positive
        let seconds = check_out
            .signed_duration_since(check_in)
            .num_seconds()
            .unsigned_abs();
        let nights = u32::try_from(seconds.div_ceil(SECONDS_PER_DAY)).unwrap_or(u32::MAX);

        Ok(DateRange::accepted(check_in, check_out, nights))
    }
}
