//! Rashi (zodiac sign) lookup and whole-sign houses.
//!
//! Twelve equal signs of 30° starting from Mesha (Aries) at 0° sidereal.

use serde::Serialize;

use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 1-based sign number (Mesha = 1).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi for a 1-based sign number, wrapping modulo 12.
    pub const fn from_number(n: u8) -> Self {
        ALL_RASHIS[(n as usize + 11) % 12]
    }
}

/// Sign position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 1-based sign number, 1..=12.
    pub index: u8,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
}

/// 1-based sign number: `floor(lon / 30) + 1`.
pub fn sign_index(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon / 30.0).floor() as u8 + 1).min(12)
}

/// Degrees elapsed within the sign, [0, 30).
pub fn degree_in_sign(sidereal_lon_deg: f64) -> f64 {
    normalize_360(sidereal_lon_deg) % 30.0
}

pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let index = sign_index(sidereal_lon_deg);
    RashiInfo {
        rashi: Rashi::from_number(index),
        index,
        degree_in_sign: degree_in_sign(sidereal_lon_deg),
    }
}

/// Whole-sign house of a planet: `((planet_sign − asc_sign) mod 12) + 1`.
pub fn whole_sign_house(planet_sign: u8, ascendant_sign: u8) -> u8 {
    ((i16::from(planet_sign) - i16::from(ascendant_sign)).rem_euclid(12) + 1) as u8
}
