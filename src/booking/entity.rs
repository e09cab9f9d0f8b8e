//! FormEntity trait implementation for the booking form.
//!
//! The injected context is the [`Clock`] that supplies today's date, both for the
//! date pickers' minimum constraints and for validating a submission.

use std::sync::Arc;

use super::{BookingError, BookingField, BookingForm, BookingRequestHandler, Clock};
use crate::framework::FormEntity;
use crate::model::BookingConfirmation;

impl FormEntity for BookingForm {
    type Field = BookingField;
    type Submission = BookingConfirmation;
    type Context = Arc<dyn Clock>;
    type Error = BookingError;

    fn on_open(&mut self, clock: &Arc<dyn Clock>) {
        self.apply_minimums(clock.today());
    }

    /// Stores the raw value.
    ///
    /// A check-in that parses as a date becomes the check-out minimum; anything
    /// else puts the check-out minimum back to the check-in minimum.
    fn on_input(&mut self, field: BookingField, value: String, _clock: &Arc<dyn Clock>) {
        self.set_value(field, value);
        if field == BookingField::CheckIn {
            self.check_out_min = self.date(BookingField::CheckIn).ok().or(self.check_in_min);
        }
    }

    fn submit(&self, clock: &Arc<dyn Clock>) -> Result<BookingConfirmation, BookingError> {
        BookingRequestHandler::confirm(self, clock.today())
    }
}
