//! Tithi (lunar day) names and paksha.
//!
//! Tithi index is `floor(norm(Moon − Sun) / 12°) + 1`, 1..=30. Indices 1-15
//! fall in Shukla (waxing) paksha, 16-30 in Krishna (waning).

use serde::Serialize;

/// Elongation span of one tithi in degrees.
pub const TITHI_SPAN_DEG: f64 = 12.0;

pub const TITHI_COUNT: u8 = 30;

pub const TITHI_NAMES: [&str; 30] = [
    "Shukla Pratipada",
    "Shukla Dwitiya",
    "Shukla Tritiya",
    "Shukla Chaturthi",
    "Shukla Panchami",
    "Shukla Shashti",
    "Shukla Saptami",
    "Shukla Ashtami",
    "Shukla Navami",
    "Shukla Dashami",
    "Shukla Ekadashi",
    "Shukla Dwadashi",
    "Shukla Trayodashi",
    "Shukla Chaturdashi",
    "Purnima",
    "Krishna Pratipada",
    "Krishna Dwitiya",
    "Krishna Tritiya",
    "Krishna Chaturthi",
    "Krishna Panchami",
    "Krishna Shashti",
    "Krishna Saptami",
    "Krishna Ashtami",
    "Krishna Navami",
    "Krishna Dashami",
    "Krishna Ekadashi",
    "Krishna Dwadashi",
    "Krishna Trayodashi",
    "Krishna Chaturdashi",
    "Amavasya",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Name for a 1-based tithi index. Out-of-range indices are clamped.
pub fn tithi_name(index: u8) -> &'static str {
    TITHI_NAMES[usize::from(index.clamp(1, TITHI_COUNT) - 1)]
}

pub fn paksha_for(index: u8) -> Paksha {
    if index <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_new_moon() {
        assert_eq!(tithi_name(15), "Purnima");
        assert_eq!(tithi_name(30), "Amavasya");
        assert_eq!(paksha_for(15), Paksha::Shukla);
        assert_eq!(paksha_for(16), Paksha::Krishna);
    }

    #[test]
    fn clamps() {
        assert_eq!(tithi_name(0), "Shukla Pratipada");
        assert_eq!(tithi_name(31), "Amavasya");
    }
}
