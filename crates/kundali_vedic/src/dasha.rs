//! Vimshottari dasha: the 120-year nakshatra-keyed planetary period cycle.
//!
//! The birth nakshatra fixes the opening lord; the fraction of the
//! nakshatra the Moon has already traversed consumes the same fraction of
//! that lord's period. Period bounds at every level come from cumulative
//! fractions of the parent span, so sibling bounds meet exactly and no
//! rounding accumulates along the chain.

use kundali_chart::nakshatra_from_longitude;
use kundali_ephem::Body;
use kundali_time::UtcInstant;

use crate::error::VedicError;

/// The nine dasha lords in cycle order, starting from Ketu.
pub const DASHA_LORDS: [Body; 9] = [
    Body::Ketu,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Rahu,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

/// Whole years allotted to each lord, aligned with [`DASHA_LORDS`].
pub const DASHA_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Total cycle length in years.
pub const TOTAL_YEARS: f64 = 120.0;

/// Days per dasha year (Julian year).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Dasha generation options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaConfig {
    /// Generate top-level periods until they cover this many years after
    /// birth.
    pub lookahead_years: f64,
    /// Nesting depth: 1 = mahadasha only, 2 = +antardasha,
    /// 3 = +pratyantardasha.
    pub depth: u8,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            lookahead_years: TOTAL_YEARS,
            depth: 3,
        }
    }
}

/// One dasha period, possibly subdivided.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DashaPeriod {
    pub lord: Body,
    pub start_jd: f64,
    pub end_jd: f64,
    /// 1 for mahadasha, 2 for antardasha, 3 for pratyantardasha.
    pub depth: u8,
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    pub fn span_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Period start as a civil instant.
    pub fn start_instant(&self) -> Result<UtcInstant, VedicError> {
        Ok(UtcInstant::from_julian_day(self.start_jd)?)
    }

    /// Period end as a civil instant.
    pub fn end_instant(&self) -> Result<UtcInstant, VedicError> {
        Ok(UtcInstant::from_julian_day(self.end_jd)?)
    }
}

/// Subdivide a period into nine sub-periods by cumulative fractions.
///
/// Sub-lords start from the parent's own lord and keep the cycle order;
/// sub-period i spans `years[i] / 120` of the parent. Bounds are computed
/// from the parent start each time, never by accumulating spans.
fn subdivide(parent: &mut DashaPeriod, max_depth: u8) {
    if parent.depth >= max_depth {
        return;
    }

    let span = parent.span_days();
    let start_idx = DASHA_LORDS
        .iter()
        .position(|&l| l == parent.lord)
        .unwrap_or(0);

    let mut cumulative = 0.0;
    let mut bounds = [0.0f64; 10];
    for i in 0..9 {
        bounds[i] = parent.start_jd + span * (cumulative / TOTAL_YEARS);
        cumulative += DASHA_YEARS[(start_idx + i) % 9];
    }
    bounds[9] = parent.end_jd;

    parent.children = (0..9)
        .map(|i| {
            let mut child = DashaPeriod {
                lord: DASHA_LORDS[(start_idx + i) % 9],
                start_jd: bounds[i],
                end_jd: bounds[i + 1],
                depth: parent.depth + 1,
                children: Vec::new(),
            };
            subdivide(&mut child, max_depth);
            child
        })
        .collect();
}

/// Vimshottari periods from an explicit birth nakshatra.
///
/// `nakshatra` is 1–27; `elapsed_fraction` in [0, 1] is how much of the
/// nakshatra the Moon had traversed at birth, which shortens the opening
/// period by the same fraction.
pub fn vimshottari_from_nakshatra(
    nakshatra: u8,
    elapsed_fraction: f64,
    birth_jd: f64,
    config: &DashaConfig,
) -> Result<Vec<DashaPeriod>, VedicError> {
    if !(1..=27).contains(&nakshatra) {
        return Err(VedicError::InvalidNakshatra(nakshatra));
    }
    if !(0.0..=1.0).contains(&elapsed_fraction) {
        return Err(VedicError::InvalidFraction(elapsed_fraction));
    }

    let entry = ((nakshatra - 1) % 9) as usize;
    let horizon_jd = birth_jd + config.lookahead_years * DAYS_PER_YEAR;

    let mut periods = Vec::new();
    let mut start = birth_jd;
    let mut idx = entry;
    let mut first = true;

    while start < horizon_jd {
        let full_days = DASHA_YEARS[idx] * DAYS_PER_YEAR;
        let days = if first {
            first = false;
            full_days * (1.0 - elapsed_fraction)
        } else {
            full_days
        };

        let mut period = DashaPeriod {
            lord: DASHA_LORDS[idx],
            start_jd: start,
            end_jd: start + days,
            depth: 1,
            children: Vec::new(),
        };
        subdivide(&mut period, config.depth);

        start = period.end_jd;
        idx = (idx + 1) % 9;
        periods.push(period);
    }

    Ok(periods)
}

/// Vimshottari periods from the birth Moon's sidereal longitude.
pub fn vimshottari_from_moon(
    moon_longitude_deg: f64,
    birth_jd: f64,
    config: &DashaConfig,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let nak = nakshatra_from_longitude(moon_longitude_deg);
    vimshottari_from_nakshatra(nak.index, nak.elapsed_fraction, birth_jd, config)
}

/// The period at `jd` at each requested depth, outermost first.
///
/// Returns an empty vec when `jd` falls outside every generated period.
pub fn periods_at<'a>(periods: &'a [DashaPeriod], jd: f64) -> Vec<&'a DashaPeriod> {
    let mut chain = Vec::new();
    let mut level = periods;
    while let Some(hit) = level.iter().find(|p| jd >= p.start_jd && jd < p.end_jd) {
        chain.push(hit);
        level = &hit.children;
    }
    chain
}
