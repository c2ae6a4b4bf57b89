//! The chart calculator: the sole authority for deriving astrological data
//! from raw ephemeris positions.

use chrono::{NaiveDate, Utc};
use tracing::warn;

use stellium_ephem::{ALL_BODIES, Body, EphemerisSource};
use stellium_time::noon_jd;

use crate::aspect::{Aspect, aspects_between};
use crate::chart::ChartSnapshot;
use crate::lunation::{LunarPhase, phase_for_date};
use crate::position::{PlanetaryPosition, PositionSet};
use crate::zodiac::sign_from_longitude;

/// Stateless calculator over one injected ephemeris provider.
///
/// Construct one at process startup and pass it to whatever needs chart
/// data; with a mock provider the whole surface is testable offline. The
/// calculator holds no mutable state, so sharing it read-only across
/// threads is safe whenever the provider's dataset is safe for concurrent
/// reads — which [`EphemerisSource`]'s `Send + Sync` bound requires of
/// implementations.
#[derive(Debug, Clone)]
pub struct ChartCalculator<S: EphemerisSource> {
    source: S,
}

impl<S: EphemerisSource> ChartCalculator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The injected provider.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Sample every tracked body at 12:00:00 UTC on `date`.
    ///
    /// A body the provider cannot resolve is skipped, logged, and recorded
    /// in the returned set's `unresolved` list; the remaining bodies are
    /// still computed. No lookup is retried. Deterministic for a fixed
    /// provider.
    pub fn positions(&self, date: NaiveDate) -> PositionSet {
        let jd = noon_jd(date);
        let mut set = PositionSet::default();

        for body in ALL_BODIES {
            match self.source.ecliptic_position(body, jd) {
                Ok(coord) => {
                    let placement = sign_from_longitude(coord.lon_deg);
                    set.positions.push(PlanetaryPosition {
                        body,
                        symbol: body.symbol(),
                        longitude_deg: coord.lon_deg,
                        sign: placement.sign,
                        sign_index: placement.sign_index,
                        degree_in_sign: placement.degree_in_sign,
                        retrograde: false,
                    });
                }
                Err(error) => {
                    warn!(body = body.id(), %error, %date, "skipping unresolved body");
                    set.unresolved.push(body);
                }
            }
        }
        set
    }

    /// Classify aspects over the given placements.
    ///
    /// Pure pass-through to [`aspects_between`]; the input is expected to
    /// come from a single instant, not mixed dates.
    pub fn aspects(&self, positions: &[PlanetaryPosition]) -> Vec<Aspect> {
        aspects_between(positions)
    }

    /// Lunar phase label for `date`.
    pub fn moon_phase(&self, date: NaiveDate) -> LunarPhase {
        phase_for_date(date)
    }

    /// Compose positions, aspects, and lunar phase into a full snapshot.
    ///
    /// The sun sign falls back to `None` when the Sun lookup failed
    /// upstream; nothing here raises on a degraded provider.
    pub fn chart(&self, date: NaiveDate) -> ChartSnapshot {
        let set = self.positions(date);
        let aspects = aspects_between(&set.positions);
        let sun_sign = set.position_of(Body::Sun).map(|p| p.sign);

        ChartSnapshot {
            date,
            generated_at: Utc::now(),
            sun_sign,
            moon_phase: phase_for_date(date),
            positions: set.positions,
            aspects,
            unresolved: set.unresolved,
            houses: None,
            calculation_method: self.source.method().to_string(),
        }
    }
}
