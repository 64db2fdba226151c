use tracing::debug;

use crate::time::Date;

/// Holds the simulated "today".
///
/// Only the two clock commands move it; admissions and discharges read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clock {
    today: Date,
}

impl Clock {
    pub fn new(today: Date) -> Self {
        Self { today }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn set(&mut self, date: Date) {
        debug!(from = %self.today, to = %date, "clock set");
        self.today = date;
    }

    /// Moves the clock forward. Returns the new date, or `None` (clock untouched)
    /// when the result falls outside the calendar.
    pub fn advance(&mut self, days: u32) -> Option<Date> {
        let next = self.today.advance(days)?;
        debug!(from = %self.today, to = %next, days, "clock advanced");
        self.today = next;
        Some(next)
    }
}
