//! Rashi (zodiac sign) binning.

use kundali_time::normalize_360;

/// The twelve sidereal signs in zodiac order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All twelve rashis in order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Rashi::Mesha => "Mesha",
            Rashi::Vrishabha => "Vrishabha",
            Rashi::Mithuna => "Mithuna",
            Rashi::Karka => "Karka",
            Rashi::Simha => "Simha",
            Rashi::Kanya => "Kanya",
            Rashi::Tula => "Tula",
            Rashi::Vrischika => "Vrischika",
            Rashi::Dhanu => "Dhanu",
            Rashi::Makara => "Makara",
            Rashi::Kumbha => "Kumbha",
            Rashi::Meena => "Meena",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Rashi::Mesha => "Aries",
            Rashi::Vrishabha => "Taurus",
            Rashi::Mithuna => "Gemini",
            Rashi::Karka => "Cancer",
            Rashi::Simha => "Leo",
            Rashi::Kanya => "Virgo",
            Rashi::Tula => "Libra",
            Rashi::Vrischika => "Scorpio",
            Rashi::Dhanu => "Sagittarius",
            Rashi::Makara => "Capricorn",
            Rashi::Kumbha => "Aquarius",
            Rashi::Meena => "Pisces",
        }
    }
}

/// A longitude resolved to its sign.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RashiPosition {
    /// 1-based sign number, 1 = Mesha.
    pub sign: u8,
    pub rashi: Rashi,
    /// Degrees into the sign, [0, 30).
    pub degrees_in_sign: f64,
}

/// Resolve a sidereal longitude to its sign.
///
/// Bins are half-open: 29.999° is still sign 1, exactly 30.0° is sign 2.
pub fn rashi_from_longitude(longitude_deg: f64) -> RashiPosition {
    let lon = normalize_360(longitude_deg);
    let idx = ((lon / 30.0).floor() as usize).min(11);
    RashiPosition {
        sign: idx as u8 + 1,
        rashi: ALL_RASHIS[idx],
        degrees_in_sign: lon - idx as f64 * 30.0,
    }
}
