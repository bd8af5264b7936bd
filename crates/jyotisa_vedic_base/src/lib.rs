//! Vedic building blocks for the jyotisa engine.
//!
//! - Sector helpers and fixed lookup tables: rashi, nakshatra, tithi, yoga,
//!   karana, vaar, graha
//! - Day segments: Rahukalam, Yamagandam, Gulika, Abhijit Muhurta
//! - Ascendant two-method cross-check
//! - Sunrise/sunset derived from any ephemeris provider
//! - Vimshottari dasha balance, hierarchy and snapshot math
//!
//! Everything here is pure given its inputs; ephemeris access lives behind
//! the `jyotisa_core` provider traits.

pub mod dasha;
pub mod error;
pub mod graha;
pub mod kala;
pub mod karana;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use kala::{
    DAY_SEGMENT_COUNT, DaySegment, GULIKA_SEGMENTS, InauspiciousPeriod, RAHUKALAM_SEGMENTS,
    YAMAGANDAM_SEGMENTS, abhijit_muhurta, day_segments, inauspicious_segment,
};
pub use karana::{KARANA_COUNT, KARANA_SPAN_DEG, Karana, MOVABLE_KARANAS, karana_for_slot};
pub use lagna::{
    AscendantMethod, AscendantSelection, DEFAULT_CROSS_CHECK_TOLERANCE_DEG, cross_check_ascendant,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraPosition, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Rashi, RashiInfo, degree_in_sign, rashi_from_longitude, sign_index,
    whole_sign_house,
};
pub use riseset::{RiseSetCalculator, SUNRISE_DEPRESSION_DEG};
pub use tithi::{Paksha, TITHI_COUNT, TITHI_NAMES, TITHI_SPAN_DEG, paksha_for, tithi_name};
pub use util::{normalize_360, normalize_to_pm180, sector_end_reached, sector_index};
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{YOGA_COUNT, YOGA_NAMES, yoga_name};
