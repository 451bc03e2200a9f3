//! The pluggable astronomical source interface.

use crate::body::Body;
use crate::error::EphemerisError;

/// A geocentric ecliptic position in the tropical (equinox-of-date) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
}

/// A sidereal body state as handed to chart consumers.
///
/// Longitudes are **sidereal** (Lahiri ayanamsha applied); every downstream
/// consumer builds on that single convention.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BodyState {
    /// Sidereal ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Rate of change of longitude in degrees per day; negative while
    /// retrograde.
    pub speed_deg_per_day: f64,
}

/// Supplier of raw tropical positions.
///
/// Implementations must be usable from concurrent request handlers, hence
/// `Send + Sync`. A source either answers or fails; it never substitutes a
/// default position.
pub trait EphemerisSource: Send + Sync {
    /// Geocentric tropical ecliptic position of `body` at a UTC Julian Date.
    fn tropical_position(&self, body: Body, jd: f64) -> Result<EclipticPosition, EphemerisError>;
}
