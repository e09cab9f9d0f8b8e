use chrono::{Local, NaiveDate};

/// Source of "today" for date validation and the minimum-date constraints.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads today's date from the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
