//! The sidereal adapter: tropical source positions in, chart-ready
//! sidereal states and house cusps out.

use std::f64::consts::TAU;
use std::sync::Arc;

use kundali_time::{UtcInstant, gmst_rad, local_sidereal_time_rad, normalize_360, signed_delta_deg};

use crate::ayanamsha::{OBLIQUITY_J2000_RAD, lahiri_ayanamsha_deg};
use crate::body::Body;
use crate::coords::GeoCoordinate;
use crate::error::EphemerisError;
use crate::mean::MeanEphemeris;
use crate::source::{BodyState, EphemerisSource};

/// House division scheme for cusp computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub enum HouseSystem {
    /// Twelve equal 30° houses measured from the ascendant degree.
    #[default]
    EqualFromAscendant,
    /// Each house is the whole sign, starting at the sign holding the
    /// ascendant.
    WholeSign,
}

/// Half-day step used for the symmetric finite-difference speed estimate.
const SPEED_STEP_DAYS: f64 = 0.5;

/// Fixed adapter over a pluggable tropical source.
///
/// All conversion to the sidereal frame happens here, so a swapped-in
/// higher-precision source changes accuracy without touching any consumer.
#[derive(Clone)]
pub struct Ephemeris {
    source: Arc<dyn EphemerisSource>,
}

impl Ephemeris {
    pub fn new(source: Arc<dyn EphemerisSource>) -> Self {
        Self { source }
    }

    /// Adapter over the built-in mean-element source.
    pub fn with_mean_source() -> Self {
        Self::new(Arc::new(MeanEphemeris::new()))
    }

    /// Sidereal state of one body at a UTC Julian Date.
    pub fn body_state_at_jd(&self, body: Body, jd: f64) -> Result<BodyState, EphemerisError> {
        let pos = self.source.tropical_position(body, jd)?;
        let before = self
            .source
            .tropical_position(body, jd - SPEED_STEP_DAYS)?;
        let after = self.source.tropical_position(body, jd + SPEED_STEP_DAYS)?;

        // Seam-aware: the sample pair may straddle 0°/360°.
        let speed = signed_delta_deg(before.longitude_deg, after.longitude_deg)
            / (2.0 * SPEED_STEP_DAYS);

        Ok(BodyState {
            longitude_deg: normalize_360(pos.longitude_deg - lahiri_ayanamsha_deg(jd)),
            latitude_deg: pos.latitude_deg,
            speed_deg_per_day: speed,
        })
    }

    /// Sidereal states for a set of bodies, in the order requested.
    ///
    /// Positions are geocentric, so the observer site does not shift them;
    /// the coordinate rides along for call-site symmetry with [`Self::cusps`].
    pub fn positions(
        &self,
        instant: &UtcInstant,
        _coordinate: &GeoCoordinate,
        bodies: &[Body],
    ) -> Result<Vec<(Body, BodyState)>, EphemerisError> {
        let jd = instant.to_julian_day();
        bodies
            .iter()
            .map(|&body| Ok((body, self.body_state_at_jd(body, jd)?)))
            .collect()
    }

    /// Sidereal ascendant degree for an instant and site.
    pub fn ascendant_deg(
        &self,
        instant: &UtcInstant,
        coordinate: &GeoCoordinate,
    ) -> Result<f64, EphemerisError> {
        let jd = instant.to_julian_day();
        let lst = local_sidereal_time_rad(gmst_rad(jd), coordinate.longitude_rad());
        let eps = OBLIQUITY_J2000_RAD;
        let phi = coordinate.latitude_rad();

        let asc = f64::atan2(
            -lst.cos(),
            lst.sin() * eps.cos() + phi.tan() * eps.sin(),
        )
        .rem_euclid(TAU);

        Ok(normalize_360(asc.to_degrees() - lahiri_ayanamsha_deg(jd)))
    }

    /// Twelve sidereal house cusp longitudes; cusp 1 carries the ascendant.
    pub fn cusps(
        &self,
        instant: &UtcInstant,
        coordinate: &GeoCoordinate,
        system: HouseSystem,
    ) -> Result<[f64; 12], EphemerisError> {
        let asc = self.ascendant_deg(instant, coordinate)?;
        let first = match system {
            HouseSystem::EqualFromAscendant => asc,
            // Whole-sign: the cusp snaps back to the sign boundary.
            HouseSystem::WholeSign => (asc / 30.0).floor() * 30.0,
        };

        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_360(first + 30.0 * i as f64);
        }
        Ok(cusps)
    }
}

impl std::fmt::Debug for Ephemeris {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ephemeris").finish_non_exhaustive()
    }
}
