//! Aspect detection between body pairs.
//!
//! An aspect is a named angular relationship between two longitudes. Each
//! kind has a defining angle and an orb tolerance; the five kinds are tested
//! in a fixed priority order and the first match wins, so a pair never
//! carries two aspects even where tolerance windows touch. Preserve that
//! order: near window boundaries a different priority would classify
//! differently.

use serde::{Deserialize, Serialize};
use stellium_ephem::Body;

use crate::position::PlanetaryPosition;

/// Orb at or below which an aspect counts as exact.
pub const EXACT_ORB_DEG: f64 = 2.0;

/// The five recognized aspect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// Classification priority. First matching kind wins.
pub const ASPECT_PRIORITY: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    /// The defining angle in degrees.
    pub const fn exact_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
        }
    }

    /// Maximum deviation from the defining angle that still qualifies.
    pub const fn max_orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition => 8.0,
            Self::Trine | Self::Square => 6.0,
            Self::Sextile => 4.0,
        }
    }

    /// Lowercase name, as used in event descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Trine => "trine",
            Self::Square => "square",
            Self::Sextile => "sextile",
        }
    }
}

/// A classified aspect between two bodies. Immutable value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// First body of the pair (earlier in tracked order).
    pub body1: Body,
    /// Second body of the pair.
    pub body2: Body,
    /// The aspect kind.
    pub kind: AspectKind,
    /// Unsigned deviation from the kind's defining angle, in degrees.
    pub orb_deg: f64,
    /// True when `orb_deg` ≤ [`EXACT_ORB_DEG`].
    pub exact: bool,
}

/// Shortest-arc angular separation of two longitudes, range [0, 180].
pub fn shortest_separation(lon1_deg: f64, lon2_deg: f64) -> f64 {
    let diff = (lon1_deg - lon2_deg).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Classify a separation against the priority-ordered aspect kinds.
///
/// Returns the first kind whose tolerance window contains the separation,
/// with the orb, or `None` when no window matches.
pub fn classify_separation(separation_deg: f64) -> Option<(AspectKind, f64)> {
    for kind in ASPECT_PRIORITY {
        let orb = (separation_deg - kind.exact_angle()).abs();
        if orb <= kind.max_orb() {
            return Some((kind, orb));
        }
    }
    None
}

/// Detect aspects over every unordered pair of distinct bodies.
///
/// Pure function of the input: positions are expected to come from a single
/// instant. Pairs matching no kind produce nothing — aspects are sparse.
pub fn aspects_between(positions: &[PlanetaryPosition]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for (i, p1) in positions.iter().enumerate() {
        for p2 in &positions[i + 1..] {
            let separation = shortest_separation(p1.longitude_deg, p2.longitude_deg);
            if let Some((kind, orb)) = classify_separation(separation) {
                aspects.push(Aspect {
                    body1: p1.body,
                    body2: p2.body,
                    kind,
                    orb_deg: orb,
                    exact: orb <= EXACT_ORB_DEG,
                });
            }
        }
    }
    aspects
}
