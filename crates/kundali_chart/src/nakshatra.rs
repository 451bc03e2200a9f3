//! Nakshatra (lunar mansion) binning.

use kundali_time::normalize_360;

/// Width of one nakshatra: 360° / 27 = 13°20′.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Width of one pada (quarter nakshatra): 3°20′.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras in zodiac order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order.
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }
}

/// A longitude resolved to its nakshatra and pada.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NakshatraPosition {
    /// 1-based nakshatra number, 1 = Ashwini.
    pub index: u8,
    pub nakshatra: Nakshatra,
    /// 1-based quarter within the nakshatra, 1–4.
    pub pada: u8,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Fraction still to traverse, (0, 1].
    pub remaining_fraction: f64,
}

/// Resolve a sidereal longitude to nakshatra, pada and traversal fraction.
///
/// Bins are half-open like the sign bins: the exact start of a nakshatra
/// belongs to it, the exact end to its successor.
pub fn nakshatra_from_longitude(longitude_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(longitude_deg);
    let idx = ((lon / NAKSHATRA_SPAN_DEG).floor() as usize).min(26);
    let into = lon - idx as f64 * NAKSHATRA_SPAN_DEG;
    let elapsed = into / NAKSHATRA_SPAN_DEG;
    let pada = ((into / PADA_SPAN_DEG).floor() as u8).min(3) + 1;

    NakshatraPosition {
        index: idx as u8 + 1,
        nakshatra: ALL_NAKSHATRAS[idx],
        pada,
        elapsed_fraction: elapsed,
        remaining_fraction: 1.0 - elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_bins() {
        assert_eq!(nakshatra_from_longitude(0.0).nakshatra, Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_longitude(359.99).nakshatra, Nakshatra::Revati);
        assert_eq!(nakshatra_from_longitude(359.99).index, 27);
    }

    #[test]
    fn boundary_belongs_to_next() {
        let pos = nakshatra_from_longitude(NAKSHATRA_SPAN_DEG);
        assert_eq!(pos.nakshatra, Nakshatra::Bharani);
        assert_eq!(pos.elapsed_fraction, 0.0);
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_from_longitude(0.0).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN_DEG).pada, 2);
        assert_eq!(nakshatra_from_longitude(3.0 * PADA_SPAN_DEG).pada, 4);
        assert_eq!(nakshatra_from_longitude(NAKSHATRA_SPAN_DEG - 1e-9).pada, 4);
    }

    #[test]
    fn fractions_complement() {
        let pos = nakshatra_from_longitude(100.0);
        assert!((pos.elapsed_fraction + pos.remaining_fraction - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mid_nakshatra_half_elapsed() {
        let pos = nakshatra_from_longitude(NAKSHATRA_SPAN_DEG * 4.5);
        assert_eq!(pos.index, 5);
        assert!((pos.elapsed_fraction - 0.5).abs() < 1e-12);
    }
}
