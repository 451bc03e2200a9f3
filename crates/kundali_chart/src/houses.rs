//! House cusps and house lookup.

use kundali_time::{forward_distance_deg, normalize_360};

/// Twelve house cusp longitudes in degrees; index 0 is cusp 1 (the
/// ascendant degree, or its sign start under whole-sign houses).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct HouseCusps(pub [f64; 12]);

impl HouseCusps {
    /// House (1–12) holding a longitude.
    ///
    /// Each house spans from its cusp (inclusive) to the next cusp
    /// (exclusive), wrapping at 360°.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        let lon = normalize_360(longitude_deg);
        for i in 0..12 {
            let start = self.0[i];
            let span = forward_distance_deg(start, self.0[(i + 1) % 12]);
            let offset = forward_distance_deg(start, lon);
            if offset < span {
                return i as u8 + 1;
            }
        }
        // Reachable only if a cusp coincides with the query longitude and
        // floating-point puts the offset exactly at every span edge.
        12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps(asc: f64) -> HouseCusps {
        let mut c = [0.0; 12];
        for (i, cusp) in c.iter_mut().enumerate() {
            *cusp = normalize_360(asc + 30.0 * i as f64);
        }
        HouseCusps(c)
    }

    #[test]
    fn cusp_is_inclusive_lower_bound() {
        let cusps = equal_cusps(100.0);
        assert_eq!(cusps.house_of(100.0), 1);
        assert_eq!(cusps.house_of(129.999), 1);
        assert_eq!(cusps.house_of(130.0), 2);
    }

    #[test]
    fn wraps_through_zero() {
        let cusps = equal_cusps(350.0);
        assert_eq!(cusps.house_of(355.0), 1);
        assert_eq!(cusps.house_of(10.0), 1);
        assert_eq!(cusps.house_of(20.0), 2);
        assert_eq!(cusps.house_of(349.0), 12);
    }

    #[test]
    fn every_longitude_lands_in_some_house() {
        let cusps = equal_cusps(123.456);
        for k in 0..720 {
            let h = cusps.house_of(k as f64 * 0.5);
            assert!((1..=12).contains(&h));
        }
    }
}
