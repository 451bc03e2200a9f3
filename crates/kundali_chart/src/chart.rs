//! Natal chart assembly.

use kundali_ephem::{ALL_BODIES, Body, Ephemeris, GeoCoordinate, HouseSystem};
use kundali_time::UtcInstant;

use crate::error::ChartError;
use crate::houses::HouseCusps;
use crate::nakshatra::nakshatra_from_longitude;
use crate::rashi::rashi_from_longitude;
use crate::varga::{ALL_VARGAS, Varga, VargaChart, varga_sign};

/// One placed body in the chart.
///
/// Sign, nakshatra, pada and house are always re-derived from the longitude
/// and the cusps at build time; they never drift from the raw position.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// Sidereal longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    /// House 1–12.
    pub house: u8,
    /// Sign 1–12.
    pub sign: u8,
    /// Nakshatra 1–27.
    pub nakshatra: u8,
    /// Pada 1–4.
    pub pada: u8,
}

/// Chart construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub house_system: HouseSystem,
    /// Divisional charts to compute, in output order.
    pub vargas: Vec<Varga>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::EqualFromAscendant,
            vargas: ALL_VARGAS.to_vec(),
        }
    }
}

/// A complete computed chart. Value type; build once, read everywhere.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartData {
    pub instant: UtcInstant,
    pub coordinate: GeoCoordinate,
    /// Sidereal ascendant degree.
    pub ascendant_deg: f64,
    pub cusps: HouseCusps,
    /// The nine bodies in graha order.
    pub positions: [PlanetPosition; 9],
    pub vargas: Vec<VargaChart>,
}

impl ChartData {
    /// Position of one body.
    pub fn position(&self, body: Body) -> &PlanetPosition {
        &self.positions[body.index()]
    }
}

/// Build a chart for an instant and site.
///
/// Deterministic: with a deterministic source, identical inputs yield
/// bit-identical output.
pub fn build_chart(
    ephemeris: &Ephemeris,
    instant: &UtcInstant,
    coordinate: &GeoCoordinate,
    config: &ChartConfig,
) -> Result<ChartData, ChartError> {
    let ascendant_deg = ephemeris.ascendant_deg(instant, coordinate)?;
    let cusps = HouseCusps(ephemeris.cusps(instant, coordinate, config.house_system)?);
    let states = ephemeris.positions(instant, coordinate, &ALL_BODIES)?;

    let mut positions = [PlanetPosition {
        body: Body::Sun,
        longitude_deg: 0.0,
        speed_deg_per_day: 0.0,
        retrograde: false,
        house: 1,
        sign: 1,
        nakshatra: 1,
        pada: 1,
    }; 9];

    for (slot, (body, state)) in positions.iter_mut().zip(states) {
        let rashi = rashi_from_longitude(state.longitude_deg);
        let nak = nakshatra_from_longitude(state.longitude_deg);
        *slot = PlanetPosition {
            body,
            longitude_deg: state.longitude_deg,
            speed_deg_per_day: state.speed_deg_per_day,
            // The nodes run backwards by definition, whatever the source's
            // node model reports.
            retrograde: body.is_node() || state.speed_deg_per_day < 0.0,
            house: cusps.house_of(state.longitude_deg),
            sign: rashi.sign,
            nakshatra: nak.index,
            pada: nak.pada,
        };
    }

    let vargas = config
        .vargas
        .iter()
        .map(|&varga| {
            let mut signs = [0u8; 9];
            for (sign, pos) in signs.iter_mut().zip(&positions) {
                *sign = varga_sign(pos.longitude_deg, varga);
            }
            VargaChart { varga, signs }
        })
        .collect();

    Ok(ChartData {
        instant: *instant,
        coordinate: *coordinate,
        ascendant_deg,
        cusps,
        positions,
        vargas,
    })
}
