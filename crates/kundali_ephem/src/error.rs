//! Error type for ephemeris queries.

use std::error::Error;
use std::fmt;

/// Errors produced by ephemeris sources and the sidereal adapter.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Latitude or longitude outside the valid geographic range.
    InvalidCoordinate(&'static str),

    /// The source is not initialized or its data cannot be loaded.
    Unavailable(&'static str),

    /// The source could not produce a position for this query.
    Compute {
        body: &'static str,
        jd: f64,
        reason: &'static str,
    },

    /// Invalid civil instant passed through to a query.
    Time(kundali_time::TimeError),
}

impl fmt::Display for EphemerisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::Compute { body, jd, reason } => {
                write!(f, "cannot compute {body} at JD {jd}: {reason}")
            }
            Self::Time(e) => write!(f, "invalid instant: {e}"),
        }
    }
}

impl Error for EphemerisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<kundali_time::TimeError> for EphemerisError {
    fn from(e: kundali_time::TimeError) -> Self {
        Self::Time(e)
    }
}
