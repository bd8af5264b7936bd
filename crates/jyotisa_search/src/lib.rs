//! Event search and chart orchestration for the jyotisa engine.
//!
//! This crate provides:
//! - A coarse-scan + bisection boundary finder ([`find_crossing`])
//! - Panchanga: Tithi, Nakshatra, Yoga, Karana with end times, Vaar, day
//!   segments and Abhijit Muhurta
//! - Sidereal ascendant with a two-method cross-check, graha placements
//! - Vimshottari dasha hierarchy and snapshot from a birth instant
//!
//! Every entry point takes its provider and ayanamsha explicitly.

pub mod dasha;
pub mod error;
pub mod kundali;
pub mod kundali_types;
pub mod panchang;
pub mod panchang_types;
pub mod search_util;

pub use dasha::{DashaMethod, DashaRequest, dasha_for_birth, dasha_snapshot_at};
pub use error::SearchError;
pub use jyotisa_vedic_base::dasha::MAX_HORIZON_YEARS;
pub use kundali::{ascendant_for, birth_chart, graha_placements};
pub use kundali_types::{AscendantConfig, AscendantResult, BirthChart, PlanetPlacement};
pub use panchang::{
    element_at, karana_at, nakshatra_at, panchanga_for_date, sun_moon_longitudes, tithi_at,
    yoga_at,
};
pub use panchang_types::{ALL_ELEMENT_KINDS, ElementKind, PanchangaElement, PanchangaInfo};
pub use search_util::{Crossing, CrossingConfig, MAX_SEARCH_HORIZON_DAYS, find_crossing};
