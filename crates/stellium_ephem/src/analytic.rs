//! Built-in low-precision ephemeris.
//!
//! Planets and Sun: JPL mean Keplerian elements at J2000 with linear
//! per-century rates (Standish, *Keplerian Elements for Approximate
//! Positions of the Major Planets*, 1800–2050 table), propagated with a
//! Newton–Raphson Kepler solve. Geocentric positions come from
//! heliocentric target minus heliocentric Earth (Earth–Moon barycenter
//! elements stand in for Earth; the offset is below 0.001 au).
//!
//! Moon: truncated lunar-theory series (Meeus-style leading terms),
//! geocentric directly.
//!
//! Accuracy is at the degree level — adequate for sign placement and
//! narrative use, not for precision astronomy. A Chebyshev-kernel provider
//! can replace this behind the same trait when higher fidelity is needed.

use stellium_time::{J2000_JD, jd_to_centuries};

use crate::{Body, EclipticCoord, EphemerisError, EphemerisSource};

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 1.495_978_707e8;

/// Validity span of the mean-element tables: 1800-01-01 .. 2050-01-01.
const JD_MIN: f64 = 2_378_496.5;
const JD_MAX: f64 = 2_469_807.5;

/// J2000 mean orbital elements with per-century rates.
///
/// Each pair is `[value_at_j2000, rate_per_century]`. Angles in degrees,
/// semi-major axis in au.
#[derive(Debug, Clone, Copy)]
struct MeanElements {
    /// Semi-major axis.
    a: [f64; 2],
    /// Eccentricity.
    e: [f64; 2],
    /// Inclination to the ecliptic.
    i: [f64; 2],
    /// Mean longitude.
    l: [f64; 2],
    /// Longitude of perihelion.
    peri: [f64; 2],
    /// Longitude of the ascending node.
    node: [f64; 2],
}

const MERCURY: MeanElements = MeanElements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49],
    l: [252.250_323_50, 149_472.674_111_75],
    peri: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

const VENUS: MeanElements = MeanElements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90],
    l: [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

/// Earth–Moon barycenter, used as the observer position.
const EARTH_MOON_BARY: MeanElements = MeanElements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68],
    l: [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

const MARS: MeanElements = MeanElements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31],
    l: [-4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

const JUPITER: MeanElements = MeanElements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14],
    l: [34.396_440_51, 3_034.746_127_75],
    peri: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

const SATURN: MeanElements = MeanElements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09],
    l: [49.954_244_23, 1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

const URANUS: MeanElements = MeanElements {
    a: [19.189_164_64, -0.001_961_76],
    e: [0.047_257_44, -0.000_043_97],
    i: [0.772_637_83, -0.002_429_39],
    l: [313.238_104_51, 428.482_027_85],
    peri: [170.954_276_30, 0.408_052_81],
    node: [74.016_925_03, 0.042_405_89],
};

const NEPTUNE: MeanElements = MeanElements {
    a: [30.069_922_76, 0.000_262_91],
    e: [0.008_590_48, 0.000_051_05],
    i: [1.770_043_47, 0.000_353_72],
    l: [-55.120_029_69, 218.459_453_25],
    peri: [44.964_762_27, -0.322_414_64],
    node: [131.784_225_74, -0.005_086_64],
};

const PLUTO: MeanElements = MeanElements {
    a: [39.482_116_75, -0.000_315_96],
    e: [0.248_827_30, 0.000_051_70],
    i: [17.140_012_06, 0.000_048_18],
    l: [238.929_038_33, 145.207_805_15],
    peri: [224.068_916_29, -0.040_629_42],
    node: [110.303_936_84, -0.011_834_82],
};

/// Normalize an angle to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Solve Kepler's equation `E - e sin E = M` for the eccentric anomaly.
///
/// Newton–Raphson with `E0 = M + e sin M`; converges in a handful of
/// iterations for every planetary eccentricity in the table (max ~0.25).
fn eccentric_anomaly(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad;
    let mut ecc = m + e * m.sin();
    for _ in 0..20 {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Heliocentric ecliptic-J2000 position in au at `t` Julian centuries.
fn heliocentric(el: &MeanElements, t: f64) -> [f64; 3] {
    let a = el.a[0] + el.a[1] * t;
    let e = el.e[0] + el.e[1] * t;
    let i = (el.i[0] + el.i[1] * t).to_radians();
    let l = el.l[0] + el.l[1] * t;
    let peri = el.peri[0] + el.peri[1] * t;
    let node = el.node[0] + el.node[1] * t;

    let m = normalize_360(l - peri).to_radians();
    let w = (peri - node).to_radians();
    let o = node.to_radians();

    let ecc = eccentric_anomaly(m, e);

    // Position in the orbital plane, x toward perihelion.
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sin_w, cos_w) = w.sin_cos();
    let (sin_o, cos_o) = o.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    [
        (cos_w * cos_o - sin_w * sin_o * cos_i) * xp
            + (-sin_w * cos_o - cos_w * sin_o * cos_i) * yp,
        (cos_w * sin_o + sin_w * cos_o * cos_i) * xp
            + (-sin_w * sin_o + cos_w * cos_o * cos_i) * yp,
        sin_w * sin_i * xp + cos_w * sin_i * yp,
    ]
}

/// Convert an ecliptic position vector (au) to longitude/latitude/distance.
fn vector_to_coord(v: [f64; 3]) -> EclipticCoord {
    let [x, y, z] = v;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return EclipticCoord {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_au: 0.0,
        };
    }
    let lon = y.atan2(x);
    let lon = if lon < 0.0 {
        lon + 2.0 * std::f64::consts::PI
    } else {
        lon
    };
    EclipticCoord {
        lon_deg: lon.to_degrees(),
        lat_deg: (z / r).asin().to_degrees(),
        distance_au: r,
    }
}

/// Geocentric lunar position from the leading series terms.
///
/// Mean longitude plus the principal elliptic term in longitude, the
/// principal term in latitude, and the principal term in distance.
fn moon_coord(jd: f64) -> EclipticCoord {
    let d = jd - J2000_JD;

    let mean_lon = 218.316 + 13.176_396 * d;
    let mean_anomaly = (134.963 + 13.064_993 * d).to_radians();
    let arg_latitude = (93.272 + 13.229_350 * d).to_radians();

    let lon = normalize_360(mean_lon + 6.289 * mean_anomaly.sin());
    let lat = 5.128 * arg_latitude.sin();
    let distance_km = 385_001.0 - 20_905.0 * mean_anomaly.cos();

    EclipticCoord {
        lon_deg: lon,
        lat_deg: lat,
        distance_au: distance_km / KM_PER_AU,
    }
}

fn planet_elements(body: Body) -> Option<&'static MeanElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon => None,
    }
}

/// Self-contained low-precision provider. Carries no state; the element
/// tables are compiled in, so construction never fails and clones are free.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisSource for AnalyticEphemeris {
    fn ecliptic_position(&self, body: Body, jd_utc: f64) -> Result<EclipticCoord, EphemerisError> {
        if !jd_utc.is_finite() || !(JD_MIN..=JD_MAX).contains(&jd_utc) {
            return Err(EphemerisError::EpochOutOfRange { jd: jd_utc });
        }
        // UTC vs TDB is ~70 s, far below this dataset's precision floor.
        let t = jd_to_centuries(jd_utc);

        let coord = match body {
            Body::Moon => moon_coord(jd_utc),
            Body::Sun => {
                let earth = heliocentric(&EARTH_MOON_BARY, t);
                vector_to_coord([-earth[0], -earth[1], -earth[2]])
            }
            _ => {
                let el = planet_elements(body).expect("planet has mean elements");
                let planet = heliocentric(el, t);
                let earth = heliocentric(&EARTH_MOON_BARY, t);
                vector_to_coord([
                    planet[0] - earth[0],
                    planet[1] - earth[1],
                    planet[2] - earth[2],
                ])
            }
        };
        Ok(coord)
    }

    fn method(&self) -> &str {
        "keplerian-mean-elements-j2000"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit() {
        // e = 0 → E = M exactly.
        for m in [0.0, 0.5, 1.0, 3.0] {
            assert!((eccentric_anomaly(m, 0.0) - m).abs() < 1e-12);
        }
    }

    #[test]
    fn kepler_converges_high_eccentricity() {
        let m = 1.2_f64;
        let e = 0.25;
        let ecc = eccentric_anomaly(m, e);
        assert!((ecc - e * ecc.sin() - m).abs() < 1e-10);
    }

    #[test]
    fn earth_distance_one_au() {
        let earth = heliocentric(&EARTH_MOON_BARY, 0.0);
        let r = (earth[0] * earth[0] + earth[1] * earth[1] + earth[2] * earth[2]).sqrt();
        assert!((r - 1.0).abs() < 0.02, "got {r}");
    }

    #[test]
    fn sun_longitude_at_j2000() {
        // Sun's apparent longitude on 2000-01-01 12:00 is ~280.4 deg.
        let eph = AnalyticEphemeris::new();
        let sun = eph.ecliptic_position(Body::Sun, J2000_JD).unwrap();
        assert!((sun.lon_deg - 280.4).abs() < 1.0, "got {}", sun.lon_deg);
        assert!(sun.lat_deg.abs() < 0.01);
        assert!((sun.distance_au - 0.983).abs() < 0.01);
    }

    #[test]
    fn moon_daily_motion() {
        let eph = AnalyticEphemeris::new();
        let m1 = eph.ecliptic_position(Body::Moon, J2000_JD).unwrap();
        let m2 = eph.ecliptic_position(Body::Moon, J2000_JD + 1.0).unwrap();
        let delta = normalize_360(m2.lon_deg - m1.lon_deg);
        // Mean lunar motion is ~13.2 deg/day; the elliptic term swings it
        // between roughly 11.7 and 14.8.
        assert!((11.0..16.0).contains(&delta), "got {delta}");
    }

    #[test]
    fn moon_distance_plausible() {
        let eph = AnalyticEphemeris::new();
        let moon = eph.ecliptic_position(Body::Moon, J2000_JD).unwrap();
        let km = moon.distance_au * KM_PER_AU;
        assert!((356_000.0..407_000.0).contains(&km), "got {km} km");
    }

    #[test]
    fn all_bodies_resolve_in_range() {
        let eph = AnalyticEphemeris::new();
        for body in crate::ALL_BODIES {
            let coord = eph.ecliptic_position(body, 2_460_000.0).unwrap();
            assert!((0.0..360.0).contains(&coord.lon_deg), "{body}: {coord:?}");
            assert!(coord.distance_au > 0.0);
        }
    }

    #[test]
    fn epoch_outside_validity_rejected() {
        let eph = AnalyticEphemeris::new();
        let err = eph.ecliptic_position(Body::Mars, 2_300_000.0).unwrap_err();
        assert!(matches!(err, EphemerisError::EpochOutOfRange { .. }));
        let err = eph.ecliptic_position(Body::Mars, f64::NAN).unwrap_err();
        assert!(matches!(err, EphemerisError::EpochOutOfRange { .. }));
    }

    #[test]
    fn outer_planets_move_slowly() {
        // Geocentric Pluto drifts by parallax more than by its own orbit,
        // but still stays within a couple of degrees per month.
        let eph = AnalyticEphemeris::new();
        let p1 = eph.ecliptic_position(Body::Pluto, 2_460_000.0).unwrap();
        let p2 = eph.ecliptic_position(Body::Pluto, 2_460_030.0).unwrap();
        let diff = (p2.lon_deg - p1.lon_deg).abs();
        let delta = if diff > 180.0 { 360.0 - diff } else { diff };
        assert!(delta < 2.5, "Pluto moved {delta} deg in 30 days");
    }
}
