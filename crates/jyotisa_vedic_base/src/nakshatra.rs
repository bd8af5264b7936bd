//! Nakshatra (lunar mansion) lookup.
//!
//! 27 equal divisions of 13°20′, each split into four padas of 3°20′.

use serde::Serialize;

use crate::util::normalize_360;

/// Span of one nakshatra in degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada (quarter nakshatra): 3°20′.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra for a 1-based number, clamped to 1..=27.
    pub const fn from_number(n: u8) -> Self {
        let n = if n == 0 { 1 } else if n > 27 { 27 } else { n };
        ALL_NAKSHATRAS_27[(n - 1) as usize]
    }
}

/// Position of a sidereal longitude within the nakshatra scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// 1-based number, 1..=27.
    pub index: u8,
    /// Pada (quarter), 1..=4.
    pub pada: u8,
    /// Degrees traversed within the nakshatra, [0, 13.333…).
    pub degrees_in_nakshatra: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction_elapsed: f64,
}

pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let idx0 = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in = (lon - f64::from(idx0) * NAKSHATRA_SPAN_27).max(0.0);
    // Pada from arcminutes: each pada is 200′.
    let pada = (((degrees_in * 60.0) / 200.0).floor() as u8 + 1).min(4);
    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS_27[idx0 as usize],
        index: idx0 + 1,
        pada,
        degrees_in_nakshatra: degrees_in,
        fraction_elapsed: (degrees_in / NAKSHATRA_SPAN_27).min(1.0),
    }
}
