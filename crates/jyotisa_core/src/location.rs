//! Observer location.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ProviderError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
        };
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(ProviderError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(ProviderError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(GeoLocation::new(90.0, -180.0).is_ok());
        assert!(GeoLocation::new(30.0869, 78.2676).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoLocation::new(90.5, 0.0).is_err());
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }
}
