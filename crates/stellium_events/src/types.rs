//! Event records produced by the range scan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kinds of notable events the scan detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A body crossed into a new zodiac sign.
    Ingress,
    /// A New Moon or Full Moon day.
    LunarPhase,
    /// An aspect within the exactness orb.
    ExactAspect,
}

impl EventKind {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ingress => "Ingress",
            Self::LunarPhase => "Lunar Phase",
            Self::ExactAspect => "Exact Aspect",
        }
    }
}

/// One notable event. Ephemeral value object, scoped to a scanned range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstroEvent {
    /// Day the event was detected (noon-sampled; see the scan docs for the
    /// boundary caveat).
    pub date: NaiveDate,
    /// Event kind.
    pub kind: EventKind,
    /// Human-readable description, e.g. "Moon enters Taurus".
    pub description: String,
}
