//! Error type shared by the panchang, dasha and tara modules.

use std::error::Error;
use std::fmt;

use kundali_chart::ChartError;
use kundali_ephem::EphemerisError;
use kundali_time::TimeError;

/// Errors from Vedic calendar and period calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Nakshatra number outside 1–27.
    InvalidNakshatra(u8),

    /// Elapsed fraction outside [0, 1].
    InvalidFraction(f64),

    /// The underlying ephemeris query failed.
    Ephemeris(EphemerisError),

    /// Chart construction failed.
    Chart(ChartError),

    /// A computed Julian Date could not be expressed as a civil instant.
    Time(TimeError),
}

impl fmt::Display for VedicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNakshatra(n) => write!(f, "nakshatra {n} outside 1-27"),
            Self::InvalidFraction(x) => write!(f, "elapsed fraction {x} outside [0, 1]"),
            Self::Ephemeris(e) => write!(f, "ephemeris failure: {e}"),
            Self::Chart(e) => write!(f, "chart failure: {e}"),
            Self::Time(e) => write!(f, "time conversion failure: {e}"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Chart(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for VedicError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<ChartError> for VedicError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
