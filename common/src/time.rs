//! # Simulated Time
//!
//! The hospital never looks at the wall clock. "Today" is a value that only
//! moves when a command moves it.
//!
//! * [`date::Date`]: a validated calendar day.
//! * [`clock::Clock`]: the holder of "today", injected into whoever needs it.

pub mod clock;
pub mod date;

pub use clock::Clock;
pub use date::{Date, DateParseError};
