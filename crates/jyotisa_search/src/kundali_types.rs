//! Types for ascendant and graha placement results.

use chrono::{DateTime, Utc};
use jyotisa_core::{AyanamshaSystem, GeoLocation};
use jyotisa_vedic_base::{
    AscendantMethod, DEFAULT_CROSS_CHECK_TOLERANCE_DEG, Graha, NakshatraPosition, Rashi,
};
use serde::Serialize;

use crate::error::SearchError;

/// Ascendant cross-check settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscendantConfig {
    /// Largest acceptable disagreement between the two methods, degrees.
    pub tolerance_deg: f64,
}

impl Default for AscendantConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: DEFAULT_CROSS_CHECK_TOLERANCE_DEG,
        }
    }
}

impl AscendantConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.tolerance_deg.is_finite() || !(0.0..=180.0).contains(&self.tolerance_deg) {
            return Err(SearchError::InvalidConfig(
                "ascendant tolerance must be within [0, 180]",
            ));
        }
        Ok(())
    }
}

/// Sidereal ascendant with the cross-check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AscendantResult {
    /// Selected sidereal longitude, [0, 360).
    pub longitude_deg: f64,
    pub sign: Rashi,
    /// 1-based sign number.
    pub sign_index: u8,
    pub degree_in_sign: f64,
    pub method: AscendantMethod,
    /// Circular difference between the two candidates.
    pub delta_deg: f64,
    pub direct_sidereal_deg: f64,
    pub tropical_minus_ayanamsha_deg: f64,
    pub ayanamsha_deg: f64,
}

/// One graha's sidereal position in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPlacement {
    pub graha: Graha,
    pub longitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub sign: Rashi,
    /// 1-based sign number.
    pub sign_index: u8,
    pub degree_in_sign: f64,
    /// Whole-sign house from the ascendant sign, 1..=12.
    pub house: u8,
    pub retrograde: bool,
}

/// Ascendant, nine placements and the Moon's nakshatra for one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    pub instant: DateTime<Utc>,
    pub location: GeoLocation,
    pub ayanamsha: AyanamshaSystem,
    pub ayanamsha_deg: f64,
    pub ascendant: AscendantResult,
    pub placements: Vec<PlanetPlacement>,
    pub moon_nakshatra: NakshatraPosition,
}

impl BirthChart {
    pub fn placement(&self, graha: Graha) -> Option<&PlanetPlacement> {
        self.placements.iter().find(|p| p.graha == graha)
    }
}
