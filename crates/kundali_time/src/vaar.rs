//! Weekday (vaara) derivation from the Julian Date.

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All weekdays in order, Sunday first.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    /// English weekday name.
    pub fn english_name(&self) -> &'static str {
        match self {
            Vaar::Ravivara => "Sunday",
            Vaar::Somavara => "Monday",
            Vaar::Mangalavara => "Tuesday",
            Vaar::Budhavara => "Wednesday",
            Vaar::Guruvara => "Thursday",
            Vaar::Shukravara => "Friday",
            Vaar::Shanivara => "Saturday",
        }
    }

    /// Sanskrit name.
    pub fn name(&self) -> &'static str {
        match self {
            Vaar::Ravivara => "Ravivara",
            Vaar::Somavara => "Somavara",
            Vaar::Mangalavara => "Mangalavara",
            Vaar::Budhavara => "Budhavara",
            Vaar::Guruvara => "Guruvara",
            Vaar::Shukravara => "Shukravara",
            Vaar::Shanivara => "Shanivara",
        }
    }
}

/// Weekday for a Julian Date, using the civil (midnight-to-midnight) day.
///
/// JD 0.0 fell on a Monday noon, so `(jd + 1.5).floor() % 7` maps 0 to
/// Sunday.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let idx = ((jd + 1.5).floor().rem_euclid(7.0)) as usize;
    ALL_VAARS[idx]
}
