//! Varga (divisional chart) transforms.
//!
//! Each varga divides the 30° span of a sign into N equal parts and sends
//! each part to a target sign by a fixed rule from the Parashari
//! (Brihat Parashara Hora Shastra) definitions. The transforms are pure
//! integer/longitude arithmetic, independent of one another.

use kundali_time::normalize_360;

use crate::rashi::rashi_from_longitude;

/// The nine divisional charts computed by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Varga {
    /// Rashi: the natal chart itself.
    D1,
    /// Hora (2 parts).
    D2,
    /// Drekkana (3 parts).
    D3,
    /// Saptamsha (7 parts).
    D7,
    /// Navamsha (9 parts).
    D9,
    /// Dashamsha (10 parts).
    D10,
    /// Dwadashamsha (12 parts).
    D12,
    /// Trimshamsha (30 parts).
    D30,
    /// Shashtiamsha (60 parts).
    D60,
}

/// All supported vargas in D-number order.
pub const ALL_VARGAS: [Varga; 9] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
    Varga::D30,
    Varga::D60,
];

impl Varga {
    /// Number of divisions per sign.
    pub const fn divisions(self) -> u16 {
        match self {
            Varga::D1 => 1,
            Varga::D2 => 2,
            Varga::D3 => 3,
            Varga::D7 => 7,
            Varga::D9 => 9,
            Varga::D10 => 10,
            Varga::D12 => 12,
            Varga::D30 => 30,
            Varga::D60 => 60,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Varga::D1 => "Rashi",
            Varga::D2 => "Hora",
            Varga::D3 => "Drekkana",
            Varga::D7 => "Saptamsha",
            Varga::D9 => "Navamsha",
            Varga::D10 => "Dashamsha",
            Varga::D12 => "Dwadashamsha",
            Varga::D30 => "Trimshamsha",
            Varga::D60 => "Shashtiamsha",
        }
    }
}

/// Element class of a 0-based sign index; drives the D9/D60 start sign.
///
/// Fire 0,4,8; Earth 1,5,9; Air 2,6,10; Water 3,7,11.
fn element_start(sign_idx: u8) -> u16 {
    match sign_idx % 4 {
        0 => 0, // fire -> Mesha
        1 => 9, // earth -> Makara
        2 => 6, // air -> Tula
        _ => 3, // water -> Karka
    }
}

/// Target 0-based sign for one division of one natal sign.
fn target_sign(varga: Varga, natal_idx: u8, div_idx: u16) -> u8 {
    // 0-based even indices are the odd signs of the 1-based tradition.
    let odd_sign = natal_idx % 2 == 0;

    let start = match varga {
        Varga::D1 => natal_idx as u16,
        // Hora cycles from double the sign index.
        Varga::D2 => (natal_idx as u16 * 2) % 12,
        // Drekkana steps through the trines.
        Varga::D3 => return ((natal_idx as u16 + div_idx * 4) % 12) as u8,
        // Odd signs count from themselves, even signs from an offset.
        Varga::D7 => {
            if odd_sign {
                natal_idx as u16
            } else {
                (natal_idx as u16 + 6) % 12
            }
        }
        Varga::D10 => {
            if odd_sign {
                natal_idx as u16
            } else {
                (natal_idx as u16 + 8) % 12
            }
        }
        Varga::D9 | Varga::D60 => element_start(natal_idx),
        Varga::D12 => natal_idx as u16,
        // Trimshamsha: odd signs count from Mesha, even from Meena.
        Varga::D30 => {
            if odd_sign {
                0
            } else {
                11
            }
        }
    };

    ((start + div_idx) % 12) as u8
}

/// Transform a sidereal longitude into a varga chart longitude in [0, 360).
pub fn varga_longitude(sidereal_lon: f64, varga: Varga) -> f64 {
    let lon = normalize_360(sidereal_lon);
    if varga == Varga::D1 {
        return lon;
    }

    let natal_idx = ((lon / 30.0).floor() as u8).min(11);
    let pos_in_sign = lon - natal_idx as f64 * 30.0;
    let divisions = varga.divisions();
    let deg_per_div = 30.0 / divisions as f64;

    let div_idx = ((pos_in_sign / deg_per_div).floor() as u16).min(divisions - 1);
    let target = target_sign(varga, natal_idx, div_idx);

    // Stretch the division back out to a full 30° sign.
    let pos_in_div = pos_in_sign - div_idx as f64 * deg_per_div;
    let scaled = pos_in_div / deg_per_div * 30.0;

    normalize_360(target as f64 * 30.0 + scaled)
}

/// 1-based varga sign for a sidereal longitude.
pub fn varga_sign(sidereal_lon: f64, varga: Varga) -> u8 {
    rashi_from_longitude(varga_longitude(sidereal_lon, varga)).sign
}

/// One divisional chart: the varga sign of each of the nine bodies, in
/// graha order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VargaChart {
    pub varga: Varga,
    /// 1-based varga sign per body, indexed by body order in the chart.
    pub signs: [u8; 9],
}
