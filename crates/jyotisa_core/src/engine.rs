//! Table-backed reference provider.
//!
//! [`TableEngine`] serves longitudes from a JSON table of tropical ecliptic
//! longitudes sampled at UTC instants. Values between samples are linearly
//! interpolated on the unwrapped circle, so samples must be close enough that
//! no body moves more than 180° between neighbours. Ascendants come from
//! local sidereal time; sidereal values subtract the requested ayanamsha.
//!
//! ```json
//! { "samples": [
//!     { "instant": "2024-01-01T00:00:00Z",
//!       "longitudes": { "sun": 280.1, "moon": 190.4, "mean_node": 15.2 } }
//! ] }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angle::{normalize_360, normalize_to_pm180};
use crate::ayanamsha::AyanamshaSystem;
use crate::error::ProviderError;
use crate::houses::tropical_ascendant_deg;
use crate::location::GeoLocation;
use crate::provider::{EphemerisProvider, LongitudeSample};
use crate::{Body, HouseFrame};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSample {
    pub instant: DateTime<Utc>,
    /// Tropical longitudes in degrees.
    pub longitudes: BTreeMap<Body, f64>,
}

#[derive(Debug, Deserialize)]
struct TableFile {
    samples: Vec<TableSample>,
}

/// Read-only ephemeris provider over a sampled longitude table.
#[derive(Debug, Clone)]
pub struct TableEngine {
    samples: Vec<TableSample>,
}

impl TableEngine {
    /// Build from samples. Sorts by instant; requires at least two samples,
    /// distinct instants and finite longitudes.
    pub fn from_samples(mut samples: Vec<TableSample>) -> Result<Self, ProviderError> {
        if samples.len() < 2 {
            return Err(ProviderError::InvalidTable(
                "at least two samples are required".to_string(),
            ));
        }
        samples.sort_by_key(|s| s.instant);
        if samples.windows(2).any(|w| w[0].instant == w[1].instant) {
            return Err(ProviderError::InvalidTable(
                "duplicate sample instants".to_string(),
            ));
        }
        if samples
            .iter()
            .any(|s| s.longitudes.values().any(|v| !v.is_finite()))
        {
            return Err(ProviderError::InvalidTable(
                "longitudes must be finite".to_string(),
            ));
        }
        let engine = Self { samples };
        let (start, end) = engine.coverage();
        debug!(samples = engine.samples.len(), %start, %end, "ephemeris table ready");
        Ok(engine)
    }

    /// Parse a JSON table.
    pub fn from_json_str(json: &str) -> Result<Self, ProviderError> {
        let file: TableFile =
            serde_json::from_str(json).map_err(|e| ProviderError::InvalidTable(e.to_string()))?;
        Self::from_samples(file.samples)
    }

    /// Load a JSON table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::InvalidTable(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// First and last sample instants.
    pub fn coverage(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.samples.first().map(|s| s.instant).unwrap_or_default();
        let end = self.samples.last().map(|s| s.instant).unwrap_or_default();
        (start, end)
    }

    fn bracket(
        &self,
        instant: DateTime<Utc>,
    ) -> Result<(&TableSample, &TableSample), ProviderError> {
        let n = self.samples.len();
        let idx = self.samples.partition_point(|s| s.instant <= instant);
        let upper = match idx {
            0 => return Err(ProviderError::OutOfRange(instant)),
            i if i == n => {
                if self.samples[n - 1].instant == instant {
                    n - 1
                } else {
                    return Err(ProviderError::OutOfRange(instant));
                }
            }
            i => i,
        };
        Ok((&self.samples[upper - 1], &self.samples[upper]))
    }

    /// Interpolated tropical longitude and speed.
    pub fn tropical_longitude_and_speed(
        &self,
        instant: DateTime<Utc>,
        body: Body,
    ) -> Result<LongitudeSample, ProviderError> {
        let (a, b) = self.bracket(instant)?;
        let l0 = *a
            .longitudes
            .get(&body)
            .ok_or(ProviderError::MissingBody(body))?;
        let l1 = *b
            .longitudes
            .get(&body)
            .ok_or(ProviderError::MissingBody(body))?;

        let span = micros_between(a.instant, b.instant)?;
        let elapsed = micros_between(a.instant, instant)?;
        let delta = normalize_to_pm180(l1 - l0);
        let frac = elapsed / span;

        Ok(LongitudeSample {
            longitude_deg: normalize_360(l0 + delta * frac),
            speed_deg_per_day: delta / (span / MICROS_PER_DAY),
        })
    }
}

fn micros_between(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<f64, ProviderError> {
    (to - from)
        .num_microseconds()
        .map(|m| m as f64)
        .ok_or(ProviderError::Numerical("sample spacing overflows microseconds"))
}

impl EphemerisProvider for TableEngine {
    fn longitude_and_speed(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        ayanamsha: AyanamshaSystem,
    ) -> Result<LongitudeSample, ProviderError> {
        let tropical = self.tropical_longitude_and_speed(instant, body)?;
        Ok(LongitudeSample {
            longitude_deg: normalize_360(tropical.longitude_deg - ayanamsha.value_at(instant)),
            speed_deg_per_day: tropical.speed_deg_per_day,
        })
    }

    fn ascendant(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
        ayanamsha: AyanamshaSystem,
        frame: HouseFrame,
    ) -> Result<f64, ProviderError> {
        location.validate()?;
        let tropical = tropical_ascendant_deg(instant, location);
        Ok(match frame {
            HouseFrame::Tropical => tropical,
            HouseFrame::Sidereal => normalize_360(tropical - ayanamsha.value_at(instant)),
        })
    }

    fn ayanamsha_value(
        &self,
        instant: DateTime<Utc>,
        ayanamsha: AyanamshaSystem,
    ) -> Result<f64, ProviderError> {
        Ok(ayanamsha.value_at(instant))
    }
}
