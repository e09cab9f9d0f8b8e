use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::BookingError;

/// The inputs of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingField {
    CheckIn,
    CheckOut,
    Guests,
    Room,
}

impl BookingField {
    /// Fields in the order they appear on the form.
    pub const ALL: [BookingField; 4] = [
        BookingField::CheckIn,
        BookingField::CheckOut,
        BookingField::Guests,
        BookingField::Room,
    ];
}

impl Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BookingField::CheckIn => "check-in",
            BookingField::CheckOut => "check-out",
            BookingField::Guests => "guests",
            BookingField::Room => "room",
        };
        f.write_str(name)
    }
}

/// Raw state of the booking form as the guest typed it.
///
/// `check_in_min` and `check_out_min` mirror the date pickers' minimum
/// constraints. They only guide input; [`BookingRequestHandler`](super::BookingRequestHandler)
/// validates independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub room: String,
    pub check_in_min: Option<NaiveDate>,
    pub check_out_min: Option<NaiveDate>,
}

impl BookingForm {
    /// Raw value of a field.
    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::CheckIn => &self.check_in,
            BookingField::CheckOut => &self.check_out,
            BookingField::Guests => &self.guests,
            BookingField::Room => &self.room,
        }
    }

    pub(crate) fn set_value(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::CheckIn => self.check_in = value,
            BookingField::CheckOut => self.check_out = value,
            BookingField::Guests => self.guests = value,
            BookingField::Room => self.room = value,
        }
    }

    /// Both date pickers start at today.
    pub(crate) fn apply_minimums(&mut self, today: NaiveDate) {
        self.check_in_min = Some(today);
        self.check_out_min = Some(today);
    }

    /// Trimmed value of a required field.
    pub(crate) fn required(&self, field: BookingField) -> Result<&str, BookingError> {
        let value = self.value(field).trim();
        if value.is_empty() {
            return Err(BookingError::MissingField(field));
        }
        Ok(value)
    }

    /// Parses a date field as an ISO 8601 calendar date.
    pub(crate) fn date(&self, field: BookingField) -> Result<NaiveDate, BookingError> {
        let value = self.required(field)?;
        value.parse().map_err(|_| BookingError::InvalidDate {
            field,
            value: value.to_string(),
        })
    }
}
