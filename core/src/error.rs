use hospital_common::time::Date;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HospitalError {
    /// Duplicate recruitment, or admission of a patient who is already in.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Unknown staff id, or a patient id that is unknown or not currently admitted
    /// (depending on what the command requires).
    #[error("Can't find anything matching: {0}")]
    NotFound(String),

    /// A value that must be a non-negative integer literal was something else.
    #[error("Wrong type of parameters.")]
    InvalidArgument { field: &'static str, value: String },

    /// Numeric components that do not name a real calendar day.
    #[error("Not a valid date: {day}.{month}.{year}")]
    InvalidDate { day: u32, month: u32, year: u32 },

    /// Moving the clock would leave the supported calendar range.
    #[error("Cannot advance {from} by {days} days")]
    DateOverflow { from: Date, days: u32 },
}

/// The coarse outcome classes a command can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    InvalidArgument,
}

impl HospitalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidArgument { .. } | Self::InvalidDate { .. } | Self::DateOverflow { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }

    pub(crate) fn not_numeric(field: &'static str, value: &str) -> Self {
        debug!(field, value, "rejected non-numeric argument");
        Self::InvalidArgument {
            field,
            value: value.to_string(),
        }
    }
}
