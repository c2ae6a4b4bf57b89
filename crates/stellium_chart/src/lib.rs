//! Astrological chart computation over an ephemeris provider.
//!
//! This crate provides:
//! - Zodiac sign mapping from ecliptic longitude
//! - Per-body placements sampled at noon UTC, with explicit degraded-result
//!   reporting
//! - Aspect classification over body pairs (fixed priority, sparse)
//! - Synodic lunar-phase labeling
//! - Full chart snapshots combining all of the above
//!
//! The provider is injected through [`stellium_ephem::EphemerisSource`];
//! see [`ChartCalculator`] for the operation surface.

pub mod aspect;
pub mod calculator;
pub mod chart;
pub mod lunation;
pub mod position;
pub mod zodiac;

pub use aspect::{
    ASPECT_PRIORITY, Aspect, AspectKind, EXACT_ORB_DEG, aspects_between, classify_separation,
    shortest_separation,
};
pub use calculator::ChartCalculator;
pub use chart::ChartSnapshot;
pub use lunation::{LunarPhase, SYNODIC_MONTH_DAYS, phase_for_date};
pub use position::{PlanetaryPosition, PositionSet};
pub use zodiac::{ALL_SIGNS, SignPosition, ZodiacSign, sign_from_longitude};
