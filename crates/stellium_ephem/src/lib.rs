//! Ephemeris provider boundary: tracked bodies and the position contract.
//!
//! This crate provides:
//! - [`Body`], the ten tracked bodies with stable identifiers, display
//!   symbols, and NAIF-style lookup codes
//! - [`EphemerisSource`], the minimal contract every position provider
//!   implements: ecliptic longitude/latitude/distance for a body at a
//!   Julian Date, as observed from Earth
//! - [`AnalyticEphemeris`], a self-contained low-precision provider
//! - [`scripted::ScriptedEphemeris`], a table-driven provider for tests
//!
//! Any dataset honoring [`EphemerisSource`] is substitutable — different
//! source files, precision, or time-span coverage never change downstream
//! chart logic. Implementations must be safe for concurrent read access;
//! the trait requires `Send + Sync` so a provider can sit behind an
//! `Arc` shared across threads.

pub mod analytic;
pub mod scripted;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analytic::AnalyticEphemeris;

/// The ten bodies tracked by daily charts.
///
/// These are the classical seven plus the outer three. Lunar nodes,
/// asteroids, and house cusps are not bodies and do not belong here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All tracked bodies in traditional order (Sun first, Pluto last).
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Stable lowercase identifier, used in serialized records.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// Display name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Astrological display symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::Sun => '☉',
            Self::Moon => '☽',
            Self::Mercury => '☿',
            Self::Venus => '♀',
            Self::Mars => '♂',
            Self::Jupiter => '♃',
            Self::Saturn => '♄',
            Self::Uranus => '♅',
            Self::Neptune => '♆',
            Self::Pluto => '♇',
        }
    }

    /// NAIF-style body code, the lookup key kernel-backed providers use.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
            Self::Uranus => 799,
            Self::Neptune => 899,
            Self::Pluto => 999,
        }
    }

    /// Convert a NAIF-style body code back into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            799 => Some(Self::Uranus),
            899 => Some(Self::Neptune),
            999 => Some(Self::Pluto),
            _ => None,
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Geocentric ecliptic position of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoord {
    /// Ecliptic longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from Earth in astronomical units.
    pub distance_au: f64,
}

/// Provider errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no data for this body.
    #[error("unsupported body: {0}")]
    UnsupportedBody(Body),
    /// The requested instant falls outside the provider's validity span.
    #[error("epoch out of range: jd {jd}")]
    EpochOutOfRange { jd: f64 },
    /// Provider-specific failure.
    #[error("provider error: {0}")]
    Provider(String),
}

/// The position contract consumed by the chart layer.
///
/// A provider owns its dataset, loaded once at construction and read-only
/// thereafter. Queries take a UTC Julian Date; providers that distinguish
/// time scales convert internally.
pub trait EphemerisSource: Send + Sync {
    /// Geocentric ecliptic position of `body` at `jd_utc`.
    fn ecliptic_position(&self, body: Body, jd_utc: f64) -> Result<EclipticCoord, EphemerisError>;

    /// Short tag identifying the dataset and method, stamped into chart
    /// records so downstream consumers can tell providers apart.
    fn method(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_bodies() {
        assert_eq!(ALL_BODIES.len(), 10);
    }

    #[test]
    fn body_indices_sequential() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn body_code_roundtrip() {
        for b in ALL_BODIES {
            assert_eq!(Body::from_code(b.code()), Some(b));
        }
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert_eq!(Body::from_code(399), None); // Earth is the observer, not a target
        assert_eq!(Body::from_code(-1), None);
    }

    #[test]
    fn ids_are_lowercase_names() {
        for b in ALL_BODIES {
            assert_eq!(b.id(), b.display_name().to_lowercase());
        }
    }

    #[test]
    fn symbols_distinct() {
        let mut seen = std::collections::HashSet::new();
        for b in ALL_BODIES {
            assert!(seen.insert(b.symbol()), "duplicate symbol for {b}");
        }
    }

    #[test]
    fn error_display() {
        let e = EphemerisError::UnsupportedBody(Body::Pluto);
        assert_eq!(e.to_string(), "unsupported body: Pluto");
    }

    // Compile-time assertion: trait objects must be shareable across threads.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        fn check() {
            assert_send_sync::<dyn EphemerisSource>();
        }
    };
}
