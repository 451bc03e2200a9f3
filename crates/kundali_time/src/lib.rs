//! Time and angle foundations for the kundali engine.
//!
//! Provides [`UtcInstant`], the canonical calendar representation used
//! throughout the workspace, Julian Day and sidereal-time conversions,
//! the [`Vaar`] weekday, and the wraparound angle arithmetic every
//! downstream calculation depends on.

pub mod angle;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod vaar;

pub use angle::{forward_distance_deg, normalize_360, signed_delta_deg};
pub use error::TimeError;
pub use instant::UtcInstant;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
