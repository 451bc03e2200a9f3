//! Static dignity and rulership data.
//!
//! All signs are 1-based (1 = Mesha). The tables are the classical
//! Parashari assignments; rules consult them instead of hard-coding
//! conditions.

use kundali_ephem::Body;

/// Signs a body rules.
pub fn own_signs(body: Body) -> &'static [u8] {
    match body {
        Body::Sun => &[5],
        Body::Moon => &[4],
        Body::Mars => &[1, 8],
        Body::Mercury => &[3, 6],
        Body::Jupiter => &[9, 12],
        Body::Venus => &[2, 7],
        Body::Saturn => &[10, 11],
        Body::Rahu | Body::Ketu => &[],
    }
}

/// Exaltation sign, if the body has one.
pub fn exaltation_sign(body: Body) -> Option<u8> {
    match body {
        Body::Sun => Some(1),
        Body::Moon => Some(2),
        Body::Mars => Some(10),
        Body::Mercury => Some(6),
        Body::Jupiter => Some(4),
        Body::Venus => Some(12),
        Body::Saturn => Some(7),
        Body::Rahu | Body::Ketu => None,
    }
}

/// Debilitation sign: always opposite the exaltation sign.
pub fn debilitation_sign(body: Body) -> Option<u8> {
    exaltation_sign(body).map(|s| (s + 5) % 12 + 1)
}

/// Ruler of a 1-based sign.
pub fn sign_lord(sign: u8) -> Body {
    match sign {
        1 | 8 => Body::Mars,
        2 | 7 => Body::Venus,
        3 | 6 => Body::Mercury,
        4 => Body::Moon,
        5 => Body::Sun,
        9 | 12 => Body::Jupiter,
        _ => Body::Saturn,
    }
}

/// The natural benefics used by the yoga rules.
pub const NATURAL_BENEFICS: [Body; 3] = [Body::Mercury, Body::Jupiter, Body::Venus];

/// The five non-luminary planets (nodes excluded).
pub const TRUE_PLANETS: [Body; 5] = [
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
];

/// 1-based house/sign count from one sign to another, 1–12.
pub fn sign_distance(from_sign: u8, to_sign: u8) -> u8 {
    ((to_sign as i16 - from_sign as i16).rem_euclid(12)) as u8 + 1
}
