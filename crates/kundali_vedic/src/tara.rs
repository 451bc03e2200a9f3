//! Tara Bala: nakshatra-count compatibility between two Moon positions.

use kundali_chart::nakshatra_from_longitude;

/// The nine-fold tara cycle, in counting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Tara {
    /// Birth star itself.
    Janma,
    /// Wealth.
    Sampat,
    /// Danger.
    Vipat,
    /// Well-being.
    Kshema,
    /// Obstacles.
    Pratyak,
    /// Accomplishment.
    Sadhana,
    /// Loss.
    Naidhana,
    /// Friendship.
    Mitra,
    /// Great friendship.
    ParamaMitra,
}

/// The cycle in order; counts 1, 10, 19 map to entry 0.
pub const TARA_CYCLE: [Tara; 9] = [
    Tara::Janma,
    Tara::Sampat,
    Tara::Vipat,
    Tara::Kshema,
    Tara::Pratyak,
    Tara::Sadhana,
    Tara::Naidhana,
    Tara::Mitra,
    Tara::ParamaMitra,
];

impl Tara {
    pub const fn name(self) -> &'static str {
        match self {
            Tara::Janma => "Janma",
            Tara::Sampat => "Sampat",
            Tara::Vipat => "Vipat",
            Tara::Kshema => "Kshema",
            Tara::Pratyak => "Pratyak",
            Tara::Sadhana => "Sadhana",
            Tara::Naidhana => "Naidhana",
            Tara::Mitra => "Mitra",
            Tara::ParamaMitra => "Parama Mitra",
        }
    }

    /// The five classically favorable categories.
    pub const fn is_favorable(self) -> bool {
        matches!(
            self,
            Tara::Sampat | Tara::Kshema | Tara::Sadhana | Tara::Mitra | Tara::ParamaMitra
        )
    }
}

/// Result of a tara comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TaraBala {
    /// Inclusive forward nakshatra count; a same-nakshatra comparison wraps
    /// the whole cycle to 27.
    pub count: u8,
    pub tara: Tara,
}

/// Tara Bala from one Moon longitude to another.
///
/// Counts nakshatras forward from the first Moon's star to the second's,
/// inclusive at both ends. The relation is directional: swapping the
/// arguments generally changes the answer.
pub fn calculate_tara_bala(from_moon_lon: f64, to_moon_lon: f64) -> TaraBala {
    let from = nakshatra_from_longitude(from_moon_lon).index as i16;
    let to = nakshatra_from_longitude(to_moon_lon).index as i16;

    // Inclusive count: both endpoint stars are counted, so the adjacent
    // star is 2 and the same star wraps the full cycle to 27.
    let d = (to - from).rem_euclid(27) as u8;
    let count = if d == 0 { 27 } else { d + 1 };

    TaraBala {
        count,
        tara: TARA_CYCLE[((count - 1) % 9) as usize],
    }
}
