use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An accepted check-in/check-out pair.
///
/// Only [`crate::booking::DateRangeValidator`] constructs a `DateRange`, so holding
/// one means check-in was not in the past and check-out falls strictly after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
    nights: u32,
}

impl DateRange {
    pub(crate) fn accepted(check_in: NaiveDate, check_out: NaiveDate, nights: u32) -> Self {
        Self {
            check_in,
            check_out,
            nights,
        }
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights of the stay, always at least one.
    pub fn nights(&self) -> u32 {
        self.nights
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.check_in, self.check_out)
    }
}
