//! Chart construction: sign and nakshatra binning, houses, divisional
//! charts, and the natal chart builder.

pub mod chart;
pub mod error;
pub mod houses;
pub mod nakshatra;
pub mod rashi;
pub mod varga;

pub use chart::{ChartConfig, ChartData, PlanetPosition, build_chart};
pub use error::ChartError;
pub use houses::HouseCusps;
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraPosition, PADA_SPAN_DEG,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiPosition, rashi_from_longitude};
pub use varga::{ALL_VARGAS, Varga, VargaChart, varga_longitude, varga_sign};
