//! Zodiac sign computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Given an ecliptic longitude, we identify
//! which sign the point falls in and the decimal degrees within that sign.

use serde::{Deserialize, Serialize};

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Display name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

/// Sign placement of an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    /// The sign.
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degree_in_sign: f64,
}

/// Normalize longitude to [0, 360).
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Determine the zodiac sign from an ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_from_longitude(lon_deg: f64) -> SignPosition {
    let lon = normalize_360(lon_deg);
    let sign_index = (lon / 30.0).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_index = sign_index.min(11);
    let degree_in_sign = lon - (sign_index as f64) * 30.0;

    SignPosition {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        degree_in_sign,
    }
}
