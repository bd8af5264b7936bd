//! Birth balance: how much of the first mahadasha remains at birth.

use serde::Serialize;

use super::vimshottari_data::{nakshatra_lord, vimshottari_years};
use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    pub nakshatra: Nakshatra,
    pub lord: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Remaining years of the lord's mahadasha.
    pub balance_years: f64,
}

/// Balance from the Moon's sidereal longitude:
/// `lord_years × (1 − elapsed_fraction)`.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let pos = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = nakshatra_lord(pos.nakshatra);
    BirthBalance {
        nakshatra: pos.nakshatra,
        lord,
        elapsed_fraction: pos.fraction_elapsed,
        balance_years: vimshottari_years(lord) * (1.0 - pos.fraction_elapsed),
    }
}
