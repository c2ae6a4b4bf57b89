//! Lunar phase labeling.
//!
//! Synodic-cycle approximation: days elapsed since a fixed reference new
//! moon, folded into a 29.5-day cycle and split into four labeled quadrants
//! of ~7.4 days. This is a narrative label, not an illumination fraction —
//! good enough for display text, not for precision astronomy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stellium_time::days_between;

/// Length of the model's synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.5;

/// The four labeled phases of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl LunarPhase {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::FullMoon => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        }
    }
}

/// Reference new moon: 2000-01-06 (18:14 UTC; the date is what the model
/// uses, whole days being its resolution).
fn reference_new_moon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 6).expect("valid reference date")
}

/// Phase label for a calendar date.
///
/// Quadrant thresholds split the 29.5-day cycle at 7.4 / 14.8 / 22.1 days.
pub fn phase_for_date(date: NaiveDate) -> LunarPhase {
    let days_since = days_between(reference_new_moon(), date) as f64;
    let cycle_position = days_since.rem_euclid(SYNODIC_MONTH_DAYS);

    if cycle_position < 7.4 {
        LunarPhase::NewMoon
    } else if cycle_position < 14.8 {
        LunarPhase::FirstQuarter
    } else if cycle_position < 22.1 {
        LunarPhase::FullMoon
    } else {
        LunarPhase::LastQuarter
    }
}
