//! Earth Rotation Angle and sidereal time.
//!
//! UTC is used directly as UT1 here; the sub-second UT1−UTC offset is far
//! below the accuracy of the mean-element ephemeris this library feeds.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{J2000_JD, jd_to_centuries};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a Julian Date (UT1), radians in `[0, 2π)`.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du),
/// Du = JD − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_48 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a Julian Date (UT1), radians in `[0, 2π)`.
///
/// GMST = ERA + a fifth-order polynomial in Julian centuries, expressed in
/// arcseconds:
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let t = jd_to_centuries(jd_ut1);
    let poly_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * -0.0000000368))));

    (earth_rotation_angle_rad(jd_ut1) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time: GMST plus observer east longitude, radians in `[0, 2π)`.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
