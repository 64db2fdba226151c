use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

/// A calendar day in the proleptic Gregorian calendar.
///
/// Rendered and parsed as `D.M.YYYY`, without zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected a date in D.M.YYYY format, got `{0}`")]
    Format(String),
    #[error("{0} is not a valid calendar date")]
    Invalid(String),
}

impl Date {
    /// Builds a date, returning `None` for combinations the calendar does not have
    /// (day 31 of a 30 day month, 29.2 outside leap years, month 13, ...).
    pub fn new(day: u32, month: u32, year: u32) -> Option<Self> {
        let year: i32 = i32::try_from(year).ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the date `days` later, or `None` if that leaves the supported range.
    pub fn advance(self, days: u32) -> Option<Self> {
        self.0.checked_add_days(Days::new(u64::from(days))).map(Self)
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl Default for Date {
    /// The simulation starts on 24.2.2021.
    fn default() -> Self {
        Self(NaiveDate::from_ymd_opt(2021, 2, 24).unwrap_or_default())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.day(), self.month(), self.year())
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateParseError::Format(s.to_string()));
        };

        let parse = |part: &str| -> Result<u32, DateParseError> {
            crate::utils::numeric::parse_number(part, false)
                .ok_or_else(|| DateParseError::Format(s.to_string()))
        };

        Date::new(parse(*day)?, parse(*month)?, parse(*year)?)
            .ok_or_else(|| DateParseError::Invalid(s.to_string()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
