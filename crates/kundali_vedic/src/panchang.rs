//! Panchang: the five limbs of the Vedic calendar day.
//!
//! Tithi, vaara, nakshatra, yoga and karana, all derived from the sidereal
//! Sun and Moon longitudes at one instant. Every limb is a fixed binning of
//! either the Sun–Moon elongation or their sum; the bins are half-open so
//! boundary values roll into the next limb.

use kundali_chart::{NakshatraPosition, nakshatra_from_longitude};
use kundali_ephem::{Body, Ephemeris, GeoCoordinate};
use kundali_time::{UtcInstant, Vaar, forward_distance_deg, normalize_360, vaar_from_jd};

use crate::error::VedicError;

/// Degrees of elongation per tithi.
const TITHI_SPAN_DEG: f64 = 12.0;

/// Degrees of Sun+Moon sum per yoga, 360/27.
const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Degrees of elongation per karana, one half tithi.
const KARANA_SPAN_DEG: f64 = 6.0;

/// Waxing or waning half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Paksha {
    /// Waxing: elongation below 180°.
    Shukla,
    /// Waning: elongation at or above 180°.
    Krishna,
}

/// The fifteen tithi names of one paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    /// Full moon, tithi 15.
    Purnima,
    /// New moon, tithi 30.
    Amavasya,
}

impl Tithi {
    /// Name for a 1-based tithi number in 1–30.
    fn from_number(n: u8) -> Tithi {
        const FIRST_FOURTEEN: [Tithi; 14] = [
            Tithi::Pratipada,
            Tithi::Dwitiya,
            Tithi::Tritiya,
            Tithi::Chaturthi,
            Tithi::Panchami,
            Tithi::Shashthi,
            Tithi::Saptami,
            Tithi::Ashtami,
            Tithi::Navami,
            Tithi::Dashami,
            Tithi::Ekadashi,
            Tithi::Dwadashi,
            Tithi::Trayodashi,
            Tithi::Chaturdashi,
        ];
        match n {
            15 => Tithi::Purnima,
            30 => Tithi::Amavasya,
            _ => FIRST_FOURTEEN[((n - 1) % 15) as usize],
        }
    }
}

/// The 27 yogas in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

/// The eleven karana names: one leading fixed, seven movable, three
/// trailing fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

impl Karana {
    /// Name for a 1-based karana number in 1–60.
    ///
    /// Karana 1 is Kimstughna; 2–57 cycle through the seven movable
    /// karanas eight times; 58–60 are Shakuni, Chatushpada, Naga.
    fn from_number(n: u8) -> Karana {
        const MOVABLE: [Karana; 7] = [
            Karana::Bava,
            Karana::Balava,
            Karana::Kaulava,
            Karana::Taitila,
            Karana::Gara,
            Karana::Vanija,
            Karana::Vishti,
        ];
        match n {
            1 => Karana::Kimstughna,
            58 => Karana::Shakuni,
            59 => Karana::Chatushpada,
            60 => Karana::Naga,
            _ => MOVABLE[((n - 2) % 7) as usize],
        }
    }
}

/// The five limbs for one instant.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Panchang {
    /// Tithi number 1–30.
    pub tithi_number: u8,
    pub tithi: Tithi,
    pub paksha: Paksha,
    pub vaar: Vaar,
    /// Nakshatra of the Moon, with traversal fractions.
    pub nakshatra: NakshatraPosition,
    /// Yoga number 1–27.
    pub yoga_number: u8,
    pub yoga: Yoga,
    /// Karana number 1–60.
    pub karana_number: u8,
    pub karana: Karana,
}

/// Panchang from explicit sidereal Sun and Moon longitudes plus the civil
/// Julian Date (for the weekday).
pub fn panchang_from_longitudes(sun_lon: f64, moon_lon: f64, jd: f64) -> Panchang {
    let elongation = forward_distance_deg(sun_lon, moon_lon);

    let tithi_number = ((elongation / TITHI_SPAN_DEG).floor() as u8).min(29) + 1;
    let paksha = if elongation < 180.0 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };

    let sum = normalize_360(sun_lon + moon_lon);
    let yoga_number = ((sum / YOGA_SPAN_DEG).floor() as u8).min(26) + 1;

    let karana_number = ((elongation / KARANA_SPAN_DEG).floor() as u8).min(59) + 1;

    Panchang {
        tithi_number,
        tithi: Tithi::from_number(tithi_number),
        paksha,
        vaar: vaar_from_jd(jd),
        nakshatra: nakshatra_from_longitude(moon_lon),
        yoga_number,
        yoga: ALL_YOGAS[(yoga_number - 1) as usize],
        karana_number,
        karana: Karana::from_number(karana_number),
    }
}

/// Panchang for an instant, using the ephemeris for Sun and Moon.
pub fn calculate_panchang(
    ephemeris: &Ephemeris,
    instant: &UtcInstant,
    coordinate: &GeoCoordinate,
) -> Result<Panchang, VedicError> {
    let states = ephemeris.positions(instant, coordinate, &[Body::Sun, Body::Moon])?;
    let sun = states[0].1.longitude_deg;
    let moon = states[1].1.longitude_deg;
    Ok(panchang_from_longitudes(sun, moon, instant.to_julian_day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tithi_bins() {
        // Elongation 0 -> tithi 1, 12 -> tithi 2, just below 12 -> tithi 1.
        assert_eq!(panchang_from_longitudes(0.0, 0.0, 2_451_545.0).tithi_number, 1);
        assert_eq!(panchang_from_longitudes(0.0, 11.999, 2_451_545.0).tithi_number, 1);
        assert_eq!(panchang_from_longitudes(0.0, 12.0, 2_451_545.0).tithi_number, 2);
        assert_eq!(panchang_from_longitudes(0.0, 359.999, 2_451_545.0).tithi_number, 30);
    }

    #[test]
    fn panchang_serializes_to_json() {
        let p = panchang_from_longitudes(10.0, 190.0, 2_451_545.0);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["tithi_number"], 16);
        assert_eq!(json["paksha"], "Krishna");
        assert_eq!(json["vaar"], "Shanivara");
    }

    #[test]
    fn exact_opposition_starts_krishna() {
        // 180.0° exactly rolls into tithi 16 and the waning half.
        let p = panchang_from_longitudes(10.0, 190.0, 2_451_545.0);
        assert_eq!(p.tithi_number, 16);
        assert_eq!(p.paksha, Paksha::Krishna);
        assert_eq!(p.tithi, Tithi::Pratipada);
    }

    #[test]
    fn full_and_new_moon_names() {
        let full = panchang_from_longitudes(0.0, 175.0, 2_451_545.0);
        assert_eq!(full.tithi_number, 15);
        assert_eq!(full.tithi, Tithi::Purnima);
        assert_eq!(full.paksha, Paksha::Shukla);

        let new = panchang_from_longitudes(0.0, 355.0, 2_451_545.0);
        assert_eq!(new.tithi_number, 30);
        assert_eq!(new.tithi, Tithi::Amavasya);
        assert_eq!(new.paksha, Paksha::Krishna);
    }

    #[test]
    fn elongation_is_directional() {
        // Moon behind the Sun means a large elongation, not a small one.
        let p = panchang_from_longitudes(100.0, 90.0, 2_451_545.0);
        assert_eq!(p.tithi_number, 30);
    }

    #[test]
    fn yoga_bins() {
        assert_eq!(panchang_from_longitudes(0.0, 0.0, 2_451_545.0).yoga_number, 1);
        let p = panchang_from_longitudes(10.0, 10.0, 2_451_545.0);
        // sum 20 / 13.333 -> bin 1 -> yoga 2 (Priti)
        assert_eq!(p.yoga_number, 2);
        assert_eq!(p.yoga, Yoga::Priti);
        // Sum wraps past 360.
        let wrapped = panchang_from_longitudes(350.0, 20.0, 2_451_545.0);
        assert_eq!(wrapped.yoga_number, 1);
    }

    #[test]
    fn karana_name_cycle() {
        // #1 Kimstughna at elongation 0.
        assert_eq!(panchang_from_longitudes(0.0, 0.0, 2_451_545.0).karana, Karana::Kimstughna);
        // #2 Bava starts at 6°.
        let second = panchang_from_longitudes(0.0, 6.0, 2_451_545.0);
        assert_eq!(second.karana_number, 2);
        assert_eq!(second.karana, Karana::Bava);
        // #9 wraps the movable cycle back to Bava.
        let ninth = panchang_from_longitudes(0.0, 48.0, 2_451_545.0);
        assert_eq!(ninth.karana_number, 9);
        assert_eq!(ninth.karana, Karana::Bava);
        // #58-60 are the trailing fixed karanas.
        let n58 = panchang_from_longitudes(0.0, 342.0, 2_451_545.0);
        assert_eq!(n58.karana_number, 58);
        assert_eq!(n58.karana, Karana::Shakuni);
        let n60 = panchang_from_longitudes(0.0, 359.0, 2_451_545.0);
        assert_eq!(n60.karana_number, 60);
        assert_eq!(n60.karana, Karana::Naga);
    }

    #[test]
    fn karana_57_is_vishti() {
        // #57 closes the eighth movable cycle.
        let p = panchang_from_longitudes(0.0, 341.0, 2_451_545.0);
        assert_eq!(p.karana_number, 57);
        assert_eq!(p.karana, Karana::Vishti);
    }

    #[test]
    fn weekday_carried_from_jd() {
        let jd = kundali_time::calendar_to_jd(1990, 5, 15.4375);
        let p = panchang_from_longitudes(30.0, 90.0, jd);
        assert_eq!(p.vaar, Vaar::Mangalavara);
    }

    #[test]
    fn moon_nakshatra_included() {
        let p = panchang_from_longitudes(0.0, 100.0, 2_451_545.0);
        assert_eq!(p.nakshatra.index, nakshatra_from_longitude(100.0).index);
    }

    #[test]
    fn end_to_end_with_mean_source() {
        let eph = Ephemeris::with_mean_source();
        let t = UtcInstant::new(1990, 5, 15, 10.5).unwrap();
        let c = GeoCoordinate::new(28.6139, 77.2090).unwrap();
        let p = calculate_panchang(&eph, &t, &c).unwrap();
        assert!((1..=30).contains(&p.tithi_number));
        assert!((1..=27).contains(&p.yoga_number));
        assert!((1..=60).contains(&p.karana_number));
        assert_eq!(p.vaar, Vaar::Mangalavara);
    }
}
