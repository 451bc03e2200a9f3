//! Ephemeris layer: pluggable astronomical sources behind a fixed sidereal
//! adapter.
//!
//! The [`EphemerisSource`] trait supplies raw tropical positions; the
//! [`Ephemeris`] adapter converts them to Lahiri sidereal longitudes, adds
//! finite-difference speeds, and computes the ascendant and house cusps.
//! [`MeanEphemeris`] is the built-in data-free source, valid 1800–2050.

pub mod adapter;
pub mod ayanamsha;
pub mod body;
pub mod coords;
pub mod error;
pub mod global;
pub mod mean;
pub mod source;

pub use adapter::{Ephemeris, HouseSystem};
pub use ayanamsha::{LAHIRI_J2000_DEG, OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, lahiri_ayanamsha_deg};
pub use body::{ALL_BODIES, Body};
pub use coords::GeoCoordinate;
pub use error::EphemerisError;
pub use global::{global, install};
pub use mean::{MeanEphemeris, supported_epoch_range};
pub use source::{BodyState, EclipticPosition, EphemerisSource};
