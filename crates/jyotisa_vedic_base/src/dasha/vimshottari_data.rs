//! Vimshottari cycle: nine lords, their years, and nakshatra lordship.

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Total cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Lords in cycle order with their full mahadasha years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Position of `lord` in [`VIMSHOTTARI_SEQUENCE`].
pub fn sequence_position(lord: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(g, _)| *g == lord)
        .unwrap_or(0)
}

/// Full mahadasha years of a lord.
pub fn vimshottari_years(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[sequence_position(lord)].1
}

/// Lord of a nakshatra. Lordship repeats every nine nakshatras from Ashwini.
pub fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    VIMSHOTTARI_SEQUENCE[usize::from(nakshatra.index()) % 9].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_sums_to_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn lordship() {
        assert_eq!(nakshatra_lord(Nakshatra::Ashwini), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Bharani), Graha::Shukra);
        assert_eq!(nakshatra_lord(Nakshatra::Magha), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Mula), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Revati), Graha::Buddh);
        assert_eq!(nakshatra_lord(Nakshatra::Rohini), Graha::Chandra);
    }

    #[test]
    fn years_lookup() {
        assert_eq!(vimshottari_years(Graha::Shukra), 20.0);
        assert_eq!(vimshottari_years(Graha::Buddh), 17.0);
    }
}
