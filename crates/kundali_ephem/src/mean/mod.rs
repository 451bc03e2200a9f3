//! Built-in mean-element astronomical source.
//!
//! Deterministic and data-free: planetary positions from Standish mean
//! Keplerian elements, the Moon from a truncated Meeus series, the nodes
//! from the IERS mean-node polynomial. Valid 1800–2050, matching the
//! element table's fit interval; queries outside that window fail rather
//! than extrapolate.

mod kepler;
mod moon;
mod node;

use kundali_time::{jd_to_centuries, normalize_360};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::source::{EclipticPosition, EphemerisSource};

use kepler::{MeanElements, heliocentric_position};

/// First supported epoch, 1800-Jan-01 0h UT.
const JD_MIN: f64 = 2_378_496.5;
/// Last supported epoch, 2050-Jan-01 0h UT.
const JD_MAX: f64 = 2_469_807.5;

/// The built-in deterministic source.
///
/// Stateless; construction is free and every query is a pure function of
/// `(body, jd)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanEphemeris;

impl MeanEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn check_epoch(body: Body, jd: f64) -> Result<(), EphemerisError> {
        // Leave a day of slack at each end so finite-difference sampling
        // near the boundary still resolves.
        if !jd.is_finite() || jd < JD_MIN - 1.0 || jd > JD_MAX + 1.0 {
            return Err(EphemerisError::Compute {
                body: body.name(),
                jd,
                reason: "epoch outside the 1800-2050 mean-element range",
            });
        }
        Ok(())
    }

    fn planet_longitude(
        body: Body,
        elements: &MeanElements,
        t: f64,
        jd: f64,
    ) -> Result<EclipticPosition, EphemerisError> {
        let no_convergence = || EphemerisError::Compute {
            body: body.name(),
            jd,
            reason: "kepler iteration did not converge",
        };

        let planet = heliocentric_position(&elements.at(t)).ok_or_else(no_convergence)?;
        let earth = heliocentric_position(&kepler::EARTH.at(t)).ok_or_else(no_convergence)?;

        let x = planet[0] - earth[0];
        let y = planet[1] - earth[1];
        let z = planet[2] - earth[2];

        Ok(EclipticPosition {
            longitude_deg: normalize_360(y.atan2(x).to_degrees()),
            latitude_deg: z.atan2(x.hypot(y)).to_degrees(),
        })
    }

    fn sun_position(t: f64, jd: f64) -> Result<EclipticPosition, EphemerisError> {
        let earth =
            heliocentric_position(&kepler::EARTH.at(t)).ok_or(EphemerisError::Compute {
                body: "Sun",
                jd,
                reason: "kepler iteration did not converge",
            })?;

        // The geocentric Sun is the anti-Earth point.
        Ok(EclipticPosition {
            longitude_deg: normalize_360((-earth[1]).atan2(-earth[0]).to_degrees()),
            latitude_deg: (-earth[2]).atan2(earth[0].hypot(earth[1])).to_degrees(),
        })
    }
}

impl EphemerisSource for MeanEphemeris {
    fn tropical_position(&self, body: Body, jd: f64) -> Result<EclipticPosition, EphemerisError> {
        Self::check_epoch(body, jd)?;
        let t = jd_to_centuries(jd);

        match body {
            Body::Sun => Self::sun_position(t, jd),
            Body::Moon => {
                let (lon, lat) = moon::moon_position(t);
                Ok(EclipticPosition {
                    longitude_deg: lon,
                    latitude_deg: lat,
                })
            }
            Body::Rahu => Ok(EclipticPosition {
                longitude_deg: node::mean_node_deg(t),
                latitude_deg: 0.0,
            }),
            Body::Ketu => Ok(EclipticPosition {
                longitude_deg: normalize_360(node::mean_node_deg(t) + 180.0),
                latitude_deg: 0.0,
            }),
            Body::Mercury => Self::planet_longitude(body, &kepler::MERCURY, t, jd),
            Body::Venus => Self::planet_longitude(body, &kepler::VENUS, t, jd),
            Body::Mars => Self::planet_longitude(body, &kepler::MARS, t, jd),
            Body::Jupiter => Self::planet_longitude(body, &kepler::JUPITER, t, jd),
            Body::Saturn => Self::planet_longitude(body, &kepler::SATURN, t, jd),
        }
    }
}

/// Inclusive epoch bounds of the built-in source, as Julian Dates.
pub fn supported_epoch_range() -> (f64, f64) {
    (JD_MIN, JD_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;
    use kundali_time::J2000_JD;

    #[test]
    fn epoch_constants_match_calendar() {
        assert_eq!(kundali_time::calendar_to_jd(1800, 1, 1.0), JD_MIN);
        assert_eq!(kundali_time::calendar_to_jd(2050, 1, 1.0), JD_MAX);
    }

    #[test]
    fn rejects_out_of_range_epochs() {
        let src = MeanEphemeris::new();
        assert!(src.tropical_position(Body::Sun, JD_MIN - 1000.0).is_err());
        assert!(src.tropical_position(Body::Sun, JD_MAX + 1000.0).is_err());
        assert!(src.tropical_position(Body::Sun, f64::NAN).is_err());
    }

    #[test]
    fn all_bodies_resolve_at_j2000() {
        let src = MeanEphemeris::new();
        for &body in &ALL_BODIES {
            let pos = src.tropical_position(body, J2000_JD).unwrap();
            assert!((0.0..360.0).contains(&pos.longitude_deg), "{body:?}");
            assert!(pos.latitude_deg.abs() < 10.0, "{body:?}");
        }
    }

    #[test]
    fn sun_near_280_at_j2000() {
        // Tropical solar longitude at 2000-Jan-01 12h ≈ 280.4°
        let src = MeanEphemeris::new();
        let pos = src.tropical_position(Body::Sun, J2000_JD).unwrap();
        assert!((pos.longitude_deg - 280.4).abs() < 1.0, "{}", pos.longitude_deg);
        assert!(pos.latitude_deg.abs() < 0.01);
    }

    #[test]
    fn nodes_are_opposite() {
        let src = MeanEphemeris::new();
        let rahu = src.tropical_position(Body::Rahu, J2000_JD).unwrap();
        let ketu = src.tropical_position(Body::Ketu, J2000_JD).unwrap();
        let gap = kundali_time::forward_distance_deg(rahu.longitude_deg, ketu.longitude_deg);
        assert!((gap - 180.0).abs() < 1e-9);
    }

    #[test]
    fn deterministic() {
        let src = MeanEphemeris::new();
        let a = src.tropical_position(Body::Mars, 2_448_026.9375).unwrap();
        let b = src.tropical_position(Body::Mars, 2_448_026.9375).unwrap();
        assert_eq!(a, b);
    }
}
