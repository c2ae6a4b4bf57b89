//! Golden-value checks for the built-in analytic provider.
//!
//! Validates against well-known almanac facts (equinox/solstice solar
//! longitudes, a NASA full-moon date, maximum inner-planet elongations)
//! with tolerances matching the provider's documented degree-level accuracy.

use chrono::NaiveDate;
use stellium_ephem::{AnalyticEphemeris, Body, EphemerisSource};
use stellium_time::noon_jd;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Absolute shortest-arc distance between two longitudes.
fn arc(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// March equinox 2024 (Mar 20, 03:06 UTC): solar longitude crosses 0 deg.
#[test]
fn march_equinox_2024() {
    let eph = AnalyticEphemeris::new();
    let sun = eph
        .ecliptic_position(Body::Sun, noon_jd(date(2024, 3, 20)))
        .unwrap();
    assert!(arc(sun.lon_deg, 0.0) < 2.0, "got {:.3}", sun.lon_deg);
}

/// June solstice 2024 (Jun 20, 20:51 UTC): solar longitude near 90 deg.
#[test]
fn june_solstice_2024() {
    let eph = AnalyticEphemeris::new();
    let sun = eph
        .ecliptic_position(Body::Sun, noon_jd(date(2024, 6, 20)))
        .unwrap();
    assert!(arc(sun.lon_deg, 90.0) < 2.0, "got {:.3}", sun.lon_deg);
}

/// December solstice 2023 (Dec 22, 03:27 UTC): solar longitude near 270 deg.
#[test]
fn december_solstice_2023() {
    let eph = AnalyticEphemeris::new();
    let sun = eph
        .ecliptic_position(Body::Sun, noon_jd(date(2023, 12, 22)))
        .unwrap();
    assert!(arc(sun.lon_deg, 270.0) < 2.0, "got {:.3}", sun.lon_deg);
}

/// NASA: Full Moon 2024-Jan-25 ~17:54 UTC — Sun/Moon elongation near 180.
#[test]
fn full_moon_jan_2024() {
    let eph = AnalyticEphemeris::new();
    let jd = noon_jd(date(2024, 1, 25));
    let sun = eph.ecliptic_position(Body::Sun, jd).unwrap();
    let moon = eph.ecliptic_position(Body::Moon, jd).unwrap();
    let elongation = arc(sun.lon_deg, moon.lon_deg);
    assert!((elongation - 180.0).abs() < 10.0, "got {elongation:.2}");
}

/// NASA: New Moon 2024-Jan-11 ~11:57 UTC — Sun/Moon elongation near 0.
#[test]
fn new_moon_jan_2024() {
    let eph = AnalyticEphemeris::new();
    let jd = noon_jd(date(2024, 1, 11));
    let sun = eph.ecliptic_position(Body::Sun, jd).unwrap();
    let moon = eph.ecliptic_position(Body::Moon, jd).unwrap();
    assert!(arc(sun.lon_deg, moon.lon_deg) < 10.0);
}

/// Venus never strays more than ~47 deg from the Sun.
#[test]
fn venus_elongation_bounded() {
    let eph = AnalyticEphemeris::new();
    let mut day = date(2023, 1, 1);
    let end = date(2025, 1, 1);
    while day < end {
        let jd = noon_jd(day);
        let sun = eph.ecliptic_position(Body::Sun, jd).unwrap();
        let venus = eph.ecliptic_position(Body::Venus, jd).unwrap();
        let elongation = arc(sun.lon_deg, venus.lon_deg);
        assert!(elongation < 50.0, "{day}: elongation {elongation:.2}");
        day = day + chrono::Duration::days(10);
    }
}

/// Mercury never strays more than ~28 deg from the Sun.
#[test]
fn mercury_elongation_bounded() {
    let eph = AnalyticEphemeris::new();
    let mut day = date(2023, 1, 1);
    let end = date(2025, 1, 1);
    while day < end {
        let jd = noon_jd(day);
        let sun = eph.ecliptic_position(Body::Sun, jd).unwrap();
        let mercury = eph.ecliptic_position(Body::Mercury, jd).unwrap();
        let elongation = arc(sun.lon_deg, mercury.lon_deg);
        assert!(elongation < 31.0, "{day}: elongation {elongation:.2}");
        day = day + chrono::Duration::days(10);
    }
}

/// Bit-identical output for repeated queries: the dataset is read-only.
#[test]
fn queries_deterministic() {
    let eph = AnalyticEphemeris::new();
    let jd = noon_jd(date(2024, 5, 5));
    for body in stellium_ephem::ALL_BODIES {
        let a = eph.ecliptic_position(body, jd).unwrap();
        let b = eph.ecliptic_position(body, jd).unwrap();
        assert_eq!(a.lon_deg.to_bits(), b.lon_deg.to_bits(), "{body}");
    }
}
