//! Vedic calendar and interpretation layer: panchang, Vimshottari dasha,
//! Tara Bala, and the rule-based chart analysis engine.

pub mod analysis;
pub mod dasha;
pub mod error;
pub mod panchang;
pub mod tara;

pub use analysis::{Finding, FindingKind, RULES, Rule, analyze};
pub use dasha::{
    DASHA_LORDS, DASHA_YEARS, DAYS_PER_YEAR, DashaConfig, DashaPeriod, TOTAL_YEARS, periods_at,
    vimshottari_from_moon, vimshottari_from_nakshatra,
};
pub use error::VedicError;
pub use panchang::{
    Karana, Paksha, Panchang, Tithi, Yoga, calculate_panchang, panchang_from_longitudes,
};
pub use tara::{TARA_CYCLE, Tara, TaraBala, calculate_tara_bala};
