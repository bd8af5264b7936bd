//! Dasha orchestration: bridges the ephemeris provider with the pure-math
//! dasha computation in jyotisa_vedic_base.
//!
//! Two entry points:
//! - `dasha_for_birth`: the hierarchy down to the requested depth
//! - `dasha_snapshot_at`: the active chain at a query time, expanding only
//!   the branch that contains it

use std::str::FromStr;

use chrono::{DateTime, Utc};
use jyotisa_core::{AyanamshaSystem, Body, EphemerisProvider};
use jyotisa_vedic_base::dasha::{
    DEFAULT_HORIZON_YEARS, DashaHierarchy, DashaSnapshot, MAX_DASHA_DEPTH, active_periods_at,
    vimshottari_hierarchy,
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Dasha systems accepted by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DashaMethod {
    #[default]
    Vimshottari,
    Yogini,
    CharA,
}

impl DashaMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Yogini => "Yogini",
            Self::CharA => "CharA",
        }
    }
}

impl std::fmt::Display for DashaMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DashaMethod {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vimshottari" => Ok(Self::Vimshottari),
            "yogini" => Ok(Self::Yogini),
            "chara" | "char_a" => Ok(Self::CharA),
            _ => Err(SearchError::InvalidConfig("unknown dasha method")),
        }
    }
}

/// What to compute for a dasha query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaRequest {
    pub method: DashaMethod,
    /// Levels to expand, 1..=3.
    pub depth: u8,
    pub horizon_years: f64,
}

impl Default for DashaRequest {
    fn default() -> Self {
        Self {
            method: DashaMethod::Vimshottari,
            depth: MAX_DASHA_DEPTH,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

fn require_vimshottari(method: DashaMethod) -> Result<(), SearchError> {
    match method {
        DashaMethod::Vimshottari => Ok(()),
        DashaMethod::Yogini => Err(SearchError::NotImplemented("Yogini dasha")),
        DashaMethod::CharA => Err(SearchError::NotImplemented("CharA dasha")),
    }
}

/// Dasha hierarchy for a birth instant.
pub fn dasha_for_birth<P: EphemerisProvider>(
    provider: &P,
    birth: DateTime<Utc>,
    ayanamsha: AyanamshaSystem,
    request: &DashaRequest,
) -> Result<DashaHierarchy, SearchError> {
    require_vimshottari(request.method)?;
    let moon = provider.sidereal_longitude(birth, Body::Moon, ayanamsha)?;
    Ok(vimshottari_hierarchy(
        birth,
        moon,
        request.depth,
        request.horizon_years,
    )?)
}

/// Active periods at `query_time`, `request.depth` levels deep.
///
/// Only mahadashas are built up front; deeper levels are generated for the
/// containing branch alone.
pub fn dasha_snapshot_at<P: EphemerisProvider>(
    provider: &P,
    birth: DateTime<Utc>,
    ayanamsha: AyanamshaSystem,
    request: &DashaRequest,
    query_time: DateTime<Utc>,
) -> Result<DashaSnapshot, SearchError> {
    require_vimshottari(request.method)?;
    let moon = provider.sidereal_longitude(birth, Body::Moon, ayanamsha)?;
    let hierarchy = vimshottari_hierarchy(birth, moon, 1, request.horizon_years)?;
    Ok(active_periods_at(&hierarchy, query_time, request.depth)?)
}
