//! Mean lunar node (Rahu).
//!
//! Ω, the mean longitude of the ascending node of the lunar orbit, from the
//! IERS Conventions 2010 fundamental-argument polynomial. The node regresses
//! through the zodiac in ~18.6 years.

use kundali_time::normalize_360;

/// Mean ascending node longitude in degrees at `t` Julian centuries from
/// J2000.0.
pub fn mean_node_deg(t: f64) -> f64 {
    let arcsec = 450_160.398_036
        + t * (-6_962_890.5431 + t * (7.4722 + t * (0.007_702 + t * -0.000_059_39)));
    normalize_360(arcsec / 3600.0)
}
