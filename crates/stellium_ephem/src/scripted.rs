//! Table-driven provider for tests.
//!
//! Positions are scripted per body as a longitude at a reference epoch plus
//! a constant daily rate, so a test can pin bodies in place or march the
//! Moon across a sign boundary on a chosen day. Failures are scripted the
//! same way, which is how the degraded-chart paths get exercised without a
//! broken dataset on disk.

use std::collections::HashMap;

use crate::{Body, EclipticCoord, EphemerisError, EphemerisSource};

#[derive(Debug, Clone, Copy)]
struct Motion {
    lon_at_epoch: f64,
    rate_deg_per_day: f64,
}

/// Scripted ephemeris: fixed or linearly-moving longitudes per body.
///
/// Bodies without an entry resolve to [`EphemerisError::UnsupportedBody`];
/// bodies scripted with [`failing`](Self::failing) resolve to
/// [`EphemerisError::Provider`]. Latitude is always 0 and distance 1 au —
/// chart logic only consumes longitude.
#[derive(Debug, Clone)]
pub struct ScriptedEphemeris {
    epoch_jd: f64,
    bodies: HashMap<Body, Motion>,
    failures: Vec<Body>,
}

impl ScriptedEphemeris {
    /// New empty script; `epoch_jd` anchors every body's scripted motion.
    pub fn at_epoch(epoch_jd: f64) -> Self {
        Self {
            epoch_jd,
            bodies: HashMap::new(),
            failures: Vec::new(),
        }
    }

    /// Pin `body` at a fixed longitude for all instants.
    pub fn fixed(mut self, body: Body, lon_deg: f64) -> Self {
        self.bodies.insert(
            body,
            Motion {
                lon_at_epoch: lon_deg,
                rate_deg_per_day: 0.0,
            },
        );
        self
    }

    /// Script `body` at `lon_deg` on the epoch, advancing `rate_deg_per_day`.
    pub fn moving(mut self, body: Body, lon_deg: f64, rate_deg_per_day: f64) -> Self {
        self.bodies.insert(
            body,
            Motion {
                lon_at_epoch: lon_deg,
                rate_deg_per_day,
            },
        );
        self
    }

    /// Script `body` to fail every lookup with a provider error.
    pub fn failing(mut self, body: Body) -> Self {
        self.bodies.remove(&body);
        self.failures.push(body);
        self
    }
}

impl EphemerisSource for ScriptedEphemeris {
    fn ecliptic_position(&self, body: Body, jd_utc: f64) -> Result<EclipticCoord, EphemerisError> {
        if self.failures.contains(&body) {
            return Err(EphemerisError::Provider(format!(
                "scripted failure for {body}"
            )));
        }
        let motion = self
            .bodies
            .get(&body)
            .ok_or(EphemerisError::UnsupportedBody(body))?;
        let lon = motion.lon_at_epoch + motion.rate_deg_per_day * (jd_utc - self.epoch_jd);
        Ok(EclipticCoord {
            lon_deg: lon.rem_euclid(360.0),
            lat_deg: 0.0,
            distance_au: 1.0,
        })
    }

    fn method(&self) -> &str {
        "scripted-table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_body_holds_longitude() {
        let eph = ScriptedEphemeris::at_epoch(2_460_000.0).fixed(Body::Sun, 15.0);
        let a = eph.ecliptic_position(Body::Sun, 2_460_000.0).unwrap();
        let b = eph.ecliptic_position(Body::Sun, 2_460_010.0).unwrap();
        assert_eq!(a.lon_deg, 15.0);
        assert_eq!(b.lon_deg, 15.0);
    }

    #[test]
    fn moving_body_advances_and_wraps() {
        let eph = ScriptedEphemeris::at_epoch(2_460_000.0).moving(Body::Moon, 350.0, 13.0);
        let next_day = eph.ecliptic_position(Body::Moon, 2_460_001.0).unwrap();
        assert!((next_day.lon_deg - 3.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_body_unsupported() {
        let eph = ScriptedEphemeris::at_epoch(2_460_000.0);
        assert_eq!(
            eph.ecliptic_position(Body::Pluto, 2_460_000.0),
            Err(EphemerisError::UnsupportedBody(Body::Pluto))
        );
    }

    #[test]
    fn scripted_failure_reported() {
        let eph = ScriptedEphemeris::at_epoch(2_460_000.0)
            .fixed(Body::Sun, 0.0)
            .failing(Body::Sun);
        assert!(matches!(
            eph.ecliptic_position(Body::Sun, 2_460_000.0),
            Err(EphemerisError::Provider(_))
        ));
    }
}
