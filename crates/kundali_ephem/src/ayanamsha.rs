//! Lahiri ayanamsha: the tropical-to-sidereal longitude offset.
//!
//! The sidereal zodiac is anchored to the fixed stars; the tropical zodiac
//! to the precessing equinox. Their separation at any epoch is the J2000.0
//! reference value plus the accumulated general precession since J2000.0.
//!
//! Sources:
//! - Precession: IAU 2006 (Capitaine, Wallace & Chapront 2003, Table 1).
//! - Lahiri reference: Indian Calendar Reform Committee (1957), Spica at
//!   0° Libra sidereal.

use kundali_time::jd_to_centuries;

/// Lahiri (Chitrapaksha) ayanamsha at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// Mean obliquity of the ecliptic at J2000.0 (84381.448″), degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.448 / 3600.0;

/// Mean obliquity of the ecliptic at J2000.0, radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;

/// IAU 2006 general precession in ecliptic longitude, arcseconds.
///
/// `t` is Julian centuries since J2000.0. The dominant linear term is
/// ~5028.80″/century ≈ 1.3969°/century.
pub fn general_precession_arcsec(t: f64) -> f64 {
    t * (5028.796195
        + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))))
}

/// Lahiri ayanamsha in degrees at a UTC Julian Date.
pub fn lahiri_ayanamsha_deg(jd: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_arcsec(jd_to_centuries(jd)) / 3600.0
}
