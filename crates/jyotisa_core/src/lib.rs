//! Ephemeris provider contract for the jyotisa engine.
//!
//! This crate defines the query surface the Vedic engines depend on:
//! - [`Body`] identifiers and [`HouseFrame`] selection
//! - [`AyanamshaSystem`] with IAU 2006 precession
//! - [`EphemerisProvider`] and [`SunTimesProvider`] traits
//! - [`TableEngine`], a provider backed by a sampled longitude table
//!
//! Computed points (Ketu, house placements) are derived downstream.

use serde::{Deserialize, Serialize};

pub mod angle;
pub mod ayanamsha;
pub mod engine;
pub mod error;
pub mod houses;
pub mod location;
pub mod provider;

pub use angle::{circular_distance, normalize_360, normalize_to_pm180};
pub use ayanamsha::{ALL_AYANAMSHAS, AyanamshaSystem, general_precession_longitude_deg};
pub use engine::{TableEngine, TableSample};
pub use error::ProviderError;
pub use houses::{
    OBLIQUITY_J2000_DEG, ascendant_longitude_deg, mean_obliquity_deg, tropical_ascendant_deg,
};
pub use location::GeoLocation;
pub use provider::{EphemerisProvider, LongitudeSample, SunTimes, SunTimesProvider};

/// Bodies queried from an ephemeris provider.
///
/// `MeanNode` is the Moon's mean ascending node (Rahu). The descending node
/// is never queried; it is always the ascending node + 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    MeanNode,
}

pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::MeanNode,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
        }
    }
}

impl std::str::FromStr for Body {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" => Ok(Self::Sun),
            "moon" => Ok(Self::Moon),
            "mars" => Ok(Self::Mars),
            "mercury" => Ok(Self::Mercury),
            "jupiter" => Ok(Self::Jupiter),
            "venus" => Ok(Self::Venus),
            "saturn" => Ok(Self::Saturn),
            "mean_node" | "rahu" => Ok(Self::MeanNode),
            _ => Err(ProviderError::UnknownBody(s.to_string())),
        }
    }
}

/// Zodiac frame for ascendant queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseFrame {
    Tropical,
    Sidereal,
}
