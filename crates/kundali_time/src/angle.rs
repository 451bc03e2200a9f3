//! Wraparound angle arithmetic shared by every calculation layer.

/// Normalize an angle to [0, 360) degrees.
///
/// Never returns 360.0; `-0.0` maps to `0.0`.
pub fn normalize_360(deg: f64) -> f64 {
    // For a tiny negative remainder, r + 360.0 rounds up to exactly 360.0;
    // fold that back onto 0.0 so the half-open interval holds.
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r + 0.0 }
}

/// Forward (directional) angular distance from `from` to `to` in degrees.
///
/// `(to - from) mod 360`, always in [0, 360). Not symmetric: the result is
/// how far `to` lies ahead of `from` travelling in increasing longitude.
pub fn forward_distance_deg(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

/// Signed smallest difference `b - a` in degrees, result in (-180, 180].
///
/// Used for finite-difference speed estimation across the 0/360 seam.
pub fn signed_delta_deg(a: f64, b: f64) -> f64 {
    let d = normalize_360(b - a);
    if d > 180.0 { d - 360.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_identity_in_range() {
        assert!((normalize_360(123.456) - 123.456).abs() < 1e-12);
    }

    #[test]
    fn normalize_full_turns() {
        for k in -4i32..=4 {
            let x = 42.5 + 360.0 * k as f64;
            assert!((normalize_360(x) - 42.5).abs() < 1e-9, "k={k}");
        }
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_never_360() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-360.0), 0.0);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        // -1e-16 % 360 is a tiny negative; adding 360 rounds to 360.0 exactly.
        let r = normalize_360(-1e-16);
        assert!(r < 360.0, "normalize_360(-1e-16) returned {r}");
        assert!(r >= 0.0);
    }

    #[test]
    fn normalize_negative_zero() {
        let r = normalize_360(-0.0);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn forward_distance_directional() {
        assert!((forward_distance_deg(10.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((forward_distance_deg(20.0, 10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn forward_distance_wraps() {
        assert!((forward_distance_deg(350.0, 5.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn signed_delta_across_seam() {
        assert!((signed_delta_deg(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((signed_delta_deg(1.0, 359.0) + 2.0).abs() < 1e-12);
    }
}
