//! Ascendant (lagna) cross-check between two independent derivations.
//!
//! 1. Direct sidereal house computation from the provider.
//! 2. Tropical house computation minus the provider's ayanamsha.
//!
//! The direct value is used when both agree within the tolerance; otherwise
//! the subtracted value is used and the divergence is logged. The circular
//! delta is always reported.

use serde::Serialize;
use tracing::warn;

use crate::util::{normalize_360, normalize_to_pm180};

/// Default agreement tolerance in degrees.
pub const DEFAULT_CROSS_CHECK_TOLERANCE_DEG: f64 = 0.1;

/// Which derivation produced the reported ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AscendantMethod {
    DirectSidereal,
    TropicalMinusAyanamsha,
}

impl AscendantMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DirectSidereal => "direct sidereal",
            Self::TropicalMinusAyanamsha => "tropical minus ayanamsha",
        }
    }
}

/// Outcome of the two-method comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AscendantSelection {
    /// Chosen sidereal ascendant, [0, 360).
    pub longitude_deg: f64,
    pub method: AscendantMethod,
    /// Absolute circular difference between the two candidates, [0, 180].
    pub delta_deg: f64,
    pub direct_sidereal_deg: f64,
    pub tropical_minus_ayanamsha_deg: f64,
}

impl AscendantSelection {
    pub fn methods_agree(&self, tolerance_deg: f64) -> bool {
        self.delta_deg <= tolerance_deg
    }
}

/// Compare the direct sidereal ascendant with tropical − ayanamsha.
pub fn cross_check_ascendant(
    direct_sidereal_deg: f64,
    tropical_deg: f64,
    ayanamsha_deg: f64,
    tolerance_deg: f64,
) -> AscendantSelection {
    let direct = normalize_360(direct_sidereal_deg);
    let subtracted = normalize_360(tropical_deg - ayanamsha_deg);
    let delta = normalize_to_pm180(direct - subtracted).abs();

    let (longitude_deg, method) = if delta <= tolerance_deg {
        (direct, AscendantMethod::DirectSidereal)
    } else {
        warn!(
            direct_deg = direct,
            subtracted_deg = subtracted,
            delta_deg = delta,
            "ascendant methods diverge; using tropical minus ayanamsha"
        );
        (subtracted, AscendantMethod::TropicalMinusAyanamsha)
    };

    AscendantSelection {
        longitude_deg,
        method,
        delta_deg: delta,
        direct_sidereal_deg: direct,
        tropical_minus_ayanamsha_deg: subtracted,
    }
}
