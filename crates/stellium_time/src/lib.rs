//! Julian Date conversions and the daily sampling rule.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - The fixed noon-UTC sampling instant used for daily charts
//!
//! Calendar dates at the public boundary are [`chrono::NaiveDate`]; Julian
//! Dates are plain `f64` days, the unit every ephemeris provider consumes.

pub mod julian;

use chrono::{Datelike, NaiveDate};

pub use julian::{DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries};

/// Julian Date of 12:00:00 UTC on the given calendar date.
///
/// Daily charts sample each body once, at civil noon. Planetary longitudes
/// move slowly enough for noon to represent the whole day; for the Moon near
/// a sign boundary the crossing can land a day early or late relative to the
/// true instant. That trade-off is deliberate and documented rather than
/// compensated with sub-day sampling.
pub fn noon_jd(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day() as f64 + 0.5)
}

/// Whole days elapsed from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_of_j2000_day() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(noon_jd(date), J2000_JD);
    }

    #[test]
    fn noon_is_integer_jd() {
        // Noon UTC falls on integer Julian Dates.
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(noon_jd(date).fract(), 0.0);
    }

    #[test]
    fn consecutive_days_one_apart() {
        let d1 = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(noon_jd(d2) - noon_jd(d1), 1.0);
    }

    #[test]
    fn days_between_signs() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(days_between(a, b), 7);
        assert_eq!(days_between(b, a), -7);
    }
}
