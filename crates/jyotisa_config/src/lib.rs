//! Engine defaults loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! stock configuration: Rishikesh, `Asia/Kolkata`, Lahiri, a 48 h / 10 min
//! / 30 s boundary search, 0.1° ascendant tolerance and a three-level,
//! 120-year Vimshottari dasha.
//!
//! ```toml
//! ayanamsha = "raman"
//!
//! [location]
//! latitude_deg = 28.6139
//! longitude_deg = 77.209
//! timezone = "Asia/Kolkata"
//!
//! [search]
//! resolution_seconds = 10
//!
//! [dasha]
//! depth = 2
//! ```

pub mod error;

use std::path::Path;

use chrono::TimeDelta;
use chrono_tz::Tz;
use jyotisa_core::{AyanamshaSystem, GeoLocation};
use jyotisa_search::{AscendantConfig, CrossingConfig, DashaMethod, DashaRequest, MAX_HORIZON_YEARS};
use jyotisa_time::parse_timezone;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// Default observer: Rishikesh, India.
pub const DEFAULT_LATITUDE_DEG: f64 = 30.0869;
pub const DEFAULT_LONGITUDE_DEG: f64 = 78.2676;
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Observer location and civil timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSection {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// IANA timezone name.
    pub timezone: String,
}

impl Default for LocationSection {
    fn default() -> Self {
        Self {
            latitude_deg: DEFAULT_LATITUDE_DEG,
            longitude_deg: DEFAULT_LONGITUDE_DEG,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Boundary search precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub horizon_hours: i64,
    pub coarse_step_minutes: i64,
    pub resolution_seconds: i64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            horizon_hours: 48,
            coarse_step_minutes: 10,
            resolution_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AscendantSection {
    pub tolerance_deg: f64,
}

impl Default for AscendantSection {
    fn default() -> Self {
        Self {
            tolerance_deg: AscendantConfig::default().tolerance_deg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaSection {
    pub method: DashaMethod,
    pub depth: u8,
    pub horizon_years: f64,
}

impl Default for DashaSection {
    fn default() -> Self {
        let request = DashaRequest::default();
        Self {
            method: request.method,
            depth: request.depth,
            horizon_years: request.horizon_years,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JyotisaConfig {
    pub ayanamsha: AyanamshaSystem,
    pub location: LocationSection,
    pub search: SearchSection,
    pub ascendant: AscendantSection,
    pub dasha: DashaSection,
}

impl JyotisaConfig {
    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geo_location()?;
        self.timezone()?;
        self.crossing_config()?.validate()?;
        self.ascendant_config().validate()?;
        let depth = self.dasha.depth;
        if !(1..=3).contains(&depth) {
            return Err(ConfigError::Invalid("dasha depth must be 1, 2 or 3"));
        }
        let years = self.dasha.horizon_years;
        if !years.is_finite() || years <= 0.0 {
            return Err(ConfigError::Invalid("dasha horizon must be positive"));
        }
        if years > MAX_HORIZON_YEARS {
            return Err(ConfigError::Invalid("dasha horizon must not exceed 1000 years"));
        }
        Ok(())
    }

    pub fn geo_location(&self) -> Result<GeoLocation, ConfigError> {
        Ok(GeoLocation::new(
            self.location.latitude_deg,
            self.location.longitude_deg,
        )?)
    }

    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        Ok(parse_timezone(&self.location.timezone)?)
    }

    pub fn crossing_config(&self) -> Result<CrossingConfig, ConfigError> {
        let s = &self.search;
        let horizon = TimeDelta::try_hours(s.horizon_hours)
            .ok_or(ConfigError::Invalid("search horizon out of range"))?;
        let coarse_step = TimeDelta::try_minutes(s.coarse_step_minutes)
            .ok_or(ConfigError::Invalid("coarse step out of range"))?;
        let resolution = TimeDelta::try_seconds(s.resolution_seconds)
            .ok_or(ConfigError::Invalid("resolution out of range"))?;
        Ok(CrossingConfig {
            horizon,
            coarse_step,
            resolution,
        })
    }

    pub fn ascendant_config(&self) -> AscendantConfig {
        AscendantConfig {
            tolerance_deg: self.ascendant.tolerance_deg,
        }
    }

    pub fn dasha_request(&self) -> DashaRequest {
        DashaRequest {
            method: self.dasha.method,
            depth: self.dasha.depth,
            horizon_years: self.dasha.horizon_years,
        }
    }
}
