//! Time source for transaction ids, dates and outbound timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use std::cell::Cell;

pub trait Clock {
    /// Current time in epoch milliseconds
    fn now_millis(&self) -> i64;

    /// Today's calendar date
    fn today(&self) -> NaiveDate;
}

/// Wall clock. Dates are taken in UTC, matching an ISO timestamp cut at `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock frozen at a given instant, advanced manually
#[derive(Debug, Clone)]
pub struct FixedClock {
    millis: Cell<i64>,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis: Cell::new(millis) }
    }

    pub fn advance(&self, millis: i64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }

    fn today(&self) -> NaiveDate {
        DateTime::<Utc>::from_timestamp_millis(self.millis.get())
            .map(|dt| dt.date_naive())
            .unwrap_or_default()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Format a date the way transactions store it
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
