//! Planetary position records.

use serde::{Deserialize, Serialize};
use stellium_ephem::Body;

use crate::zodiac::ZodiacSign;

/// One body's placement at the sampled instant. Immutable value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryPosition {
    /// The body.
    pub body: Body,
    /// Display symbol.
    pub symbol: char,
    /// Ecliptic longitude in degrees, range [0, 360).
    pub longitude_deg: f64,
    /// The zodiac sign containing the longitude.
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degree_in_sign: f64,
    /// Always `false`. Motion-direction detection needs the longitude rate
    /// between two close instants and is not computed here.
    pub retrograde: bool,
}

/// Result of sampling all tracked bodies at one instant.
///
/// Bodies the provider could not resolve are listed in `unresolved` rather
/// than silently dropped, so callers can tell a complete chart from a
/// degraded one without reading logs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionSet {
    /// Resolved placements, in tracked-body order.
    pub positions: Vec<PlanetaryPosition>,
    /// Bodies whose lookup failed.
    pub unresolved: Vec<Body>,
}

impl PositionSet {
    /// True when every tracked body resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Placement of a specific body, if it resolved.
    pub fn position_of(&self, body: Body) -> Option<&PlanetaryPosition> {
        self.positions.iter().find(|p| p.body == body)
    }
}
