//! Full chart snapshot record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use stellium_ephem::Body;

use crate::aspect::Aspect;
use crate::lunation::LunarPhase;
use crate::position::PlanetaryPosition;
use crate::zodiac::ZodiacSign;

/// Everything derived for one calendar date. Immutable value object;
/// persistence, if any, belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    /// The queried astronomical date.
    pub date: NaiveDate,
    /// Wall-clock instant the snapshot was computed (distinct from `date`).
    pub generated_at: DateTime<Utc>,
    /// The Sun's sign for the day; `None` when the Sun lookup failed.
    pub sun_sign: Option<ZodiacSign>,
    /// Lunar phase label.
    pub moon_phase: LunarPhase,
    /// Resolved placements, in tracked-body order.
    pub positions: Vec<PlanetaryPosition>,
    /// Classified aspects between the resolved bodies.
    pub aspects: Vec<Aspect>,
    /// Bodies whose lookup failed.
    pub unresolved: Vec<Body>,
    /// Reserved for house cusps; never populated here.
    pub houses: Option<Vec<f64>>,
    /// Tag identifying the provider dataset and method.
    pub calculation_method: String,
}
