//! Flat entry points over the layered crates, using one process-wide
//! ephemeris.
//!
//! ```no_run
//! use kundali::{GeoCoordinate, UtcInstant, analyze, calculate_chart};
//!
//! let instant = UtcInstant::new(1990, 5, 15, 10.5)?;
//! let place = GeoCoordinate::new(28.6139, 77.2090)?;
//! let chart = calculate_chart(&instant, &place)?;
//! for finding in analyze(&chart) {
//!     println!("{}: {:.1}", finding.key, finding.score);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use kundali_time::{
    J2000_JD, TimeError, UtcInstant, Vaar, calendar_to_jd, forward_distance_deg, jd_to_calendar,
    normalize_360, signed_delta_deg, vaar_from_jd,
};

pub use kundali_ephem::{
    ALL_BODIES, Body, BodyState, EclipticPosition, Ephemeris, EphemerisError, EphemerisSource,
    GeoCoordinate, HouseSystem, MeanEphemeris, global, install, lahiri_ayanamsha_deg,
};

pub use kundali_chart::{
    ALL_NAKSHATRAS, ALL_RASHIS, ALL_VARGAS, ChartConfig, ChartData, ChartError, HouseCusps,
    Nakshatra, NakshatraPosition, PlanetPosition, Rashi, RashiPosition, Varga, VargaChart,
    nakshatra_from_longitude, rashi_from_longitude, varga_longitude, varga_sign,
};

pub use kundali_vedic::{
    DashaConfig, DashaPeriod, Finding, FindingKind, Karana, Paksha, Panchang, Tara, TaraBala,
    Tithi, VedicError, Yoga, analyze, calculate_tara_bala, panchang_from_longitudes, periods_at,
    vimshottari_from_moon, vimshottari_from_nakshatra,
};

/// Build a chart with the default configuration and the process-wide
/// ephemeris.
pub fn calculate_chart(
    instant: &UtcInstant,
    coordinate: &GeoCoordinate,
) -> Result<ChartData, ChartError> {
    calculate_chart_with(instant, coordinate, &ChartConfig::default())
}

/// Build a chart with explicit options.
pub fn calculate_chart_with(
    instant: &UtcInstant,
    coordinate: &GeoCoordinate,
    config: &ChartConfig,
) -> Result<ChartData, ChartError> {
    kundali_chart::build_chart(global(), instant, coordinate, config)
}

/// Panchang for an instant from the process-wide ephemeris.
pub fn calculate_panchang(
    instant: &UtcInstant,
    coordinate: &GeoCoordinate,
) -> Result<Panchang, VedicError> {
    kundali_vedic::calculate_panchang(global(), instant, coordinate)
}

/// Vimshottari dasha tree for a birth instant, from the Moon's position at
/// that instant.
pub fn vimshottari_dasha(
    instant: &UtcInstant,
    config: &DashaConfig,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let jd = instant.to_julian_day();
    let moon = global().body_state_at_jd(Body::Moon, jd)?;
    kundali_vedic::vimshottari_from_moon(moon.longitude_deg, jd, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_chart_matches_explicit_build() {
        let instant = UtcInstant::new(1990, 5, 15, 10.5).unwrap();
        let place = GeoCoordinate::new(28.6139, 77.2090).unwrap();
        let a = calculate_chart(&instant, &place).unwrap();
        let b =
            kundali_chart::build_chart(global(), &instant, &place, &ChartConfig::default())
                .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn dasha_opens_with_moon_nakshatra_lord() {
        let instant = UtcInstant::new(1990, 5, 15, 10.5).unwrap();
        let place = GeoCoordinate::new(28.6139, 77.2090).unwrap();
        let cfg = DashaConfig::default();
        let periods = vimshottari_dasha(&instant, &cfg).unwrap();

        let chart = calculate_chart(&instant, &place).unwrap();
        let moon_nak = chart.position(Body::Moon).nakshatra;
        let entry = ((moon_nak - 1) % 9) as usize;
        assert_eq!(periods[0].lord, kundali_vedic::DASHA_LORDS[entry]);
    }
}
