//! Validated civil UTC instants.

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A civil date with a fractional hour of day, interpreted as UTC.
///
/// Construction goes through [`UtcInstant::new`], which rejects impossible
/// calendar dates and out-of-range hours, so a held value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct UtcInstant {
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
}

impl UtcInstant {
    /// Build an instant from calendar fields.
    ///
    /// `hour` is a decimal hour in `[0, 24)` (e.g. `10.5` for 10:30).
    pub fn new(year: i32, month: u32, day: u32, hour: f64) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidInstant("month must be in 1..=12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidInstant("day out of range for month"));
        }
        if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
            return Err(TimeError::InvalidInstant("hour must be in [0, 24)"));
        }
        Ok(Self { year, month, day, hour })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Decimal hour of day in `[0, 24)`.
    pub fn hour(&self) -> f64 {
        self.hour
    }

    /// Julian Date of this instant.
    pub fn to_julian_day(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.hour / 24.0)
    }

    /// Reconstruct an instant from a Julian Date.
    pub fn from_julian_day(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::InvalidInstant("julian day must be finite"));
        }
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor();
        let hour = ((day_frac - day) * 24.0).clamp(0.0, 24.0 - 1e-9);
        Self::new(year, month, day as u32, hour)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_fields() {
        assert!(UtcInstant::new(2024, 13, 1, 0.0).is_err());
        assert!(UtcInstant::new(2024, 2, 30, 0.0).is_err());
        assert!(UtcInstant::new(2023, 2, 29, 0.0).is_err());
        assert!(UtcInstant::new(2024, 6, 15, 24.0).is_err());
        assert!(UtcInstant::new(2024, 6, 15, -0.5).is_err());
        assert!(UtcInstant::new(2024, 6, 15, f64::NAN).is_err());
    }

    #[test]
    fn leap_day_accepted() {
        assert!(UtcInstant::new(2024, 2, 29, 12.0).is_ok());
        assert!(UtcInstant::new(2000, 2, 29, 12.0).is_ok());
        assert!(UtcInstant::new(1900, 2, 29, 12.0).is_err());
    }

    #[test]
    fn julian_day_round_trip() {
        let t = UtcInstant::new(1990, 5, 15, 10.5).unwrap();
        let jd = t.to_julian_day();
        let back = UtcInstant::from_julian_day(jd).unwrap();
        assert_eq!(back.year(), 1990);
        assert_eq!(back.month(), 5);
        assert_eq!(back.day(), 15);
        assert!((back.hour() - 10.5).abs() < 1e-6);
    }

    #[test]
    fn j2000_epoch() {
        let t = UtcInstant::new(2000, 1, 1, 12.0).unwrap();
        assert!((t.to_julian_day() - crate::julian::J2000_JD).abs() < 1e-9);
    }
}
