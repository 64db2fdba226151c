//! Shared building blocks for the hospital workspace.
//!
//! * [`config`]: runtime switches collected from the command line.
//! * [`time`]: the calendar [`time::Date`] primitive and the [`time::Clock`] service.
//! * [`utils`]: small parsing helpers shared by the core and the CLI.

pub mod config;
pub mod time;
pub mod utils;
