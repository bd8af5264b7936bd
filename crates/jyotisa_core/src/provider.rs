//! Provider contracts consumed by the panchanga, chart and dasha engines.
//!
//! Every query takes the ayanamsha explicitly; providers hold no sidereal
//! mode state, so a single provider can serve concurrent callers that use
//! different systems.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::ayanamsha::AyanamshaSystem;
use crate::error::ProviderError;
use crate::location::GeoLocation;
use crate::{Body, HouseFrame};

/// Longitude and its rate of change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeSample {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Longitudinal speed in degrees per day. Negative when retrograde.
    pub speed_deg_per_day: f64,
}

/// Sunrise and sunset for one civil date, in the caller's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
}

/// Source of sidereal longitudes, ascendants and ayanamsha values.
pub trait EphemerisProvider {
    /// Sidereal longitude and speed of `body`.
    fn longitude_and_speed(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        ayanamsha: AyanamshaSystem,
    ) -> Result<LongitudeSample, ProviderError>;

    /// Ascendant longitude in the requested frame.
    fn ascendant(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
        ayanamsha: AyanamshaSystem,
        frame: HouseFrame,
    ) -> Result<f64, ProviderError>;

    /// Ayanamsha value in degrees.
    fn ayanamsha_value(
        &self,
        instant: DateTime<Utc>,
        ayanamsha: AyanamshaSystem,
    ) -> Result<f64, ProviderError>;

    /// Sidereal longitude of `body` in degrees.
    fn sidereal_longitude(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        ayanamsha: AyanamshaSystem,
    ) -> Result<f64, ProviderError> {
        Ok(self
            .longitude_and_speed(instant, body, ayanamsha)?
            .longitude_deg)
    }
}

/// Source of civil sunrise and sunset.
pub trait SunTimesProvider {
    fn sun_times(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz: Tz,
    ) -> Result<SunTimes, ProviderError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn longitude_and_speed(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        ayanamsha: AyanamshaSystem,
    ) -> Result<LongitudeSample, ProviderError> {
        (**self).longitude_and_speed(instant, body, ayanamsha)
    }

    fn ascendant(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
        ayanamsha: AyanamshaSystem,
        frame: HouseFrame,
    ) -> Result<f64, ProviderError> {
        (**self).ascendant(instant, location, ayanamsha, frame)
    }

    fn ayanamsha_value(
        &self,
        instant: DateTime<Utc>,
        ayanamsha: AyanamshaSystem,
    ) -> Result<f64, ProviderError> {
        (**self).ayanamsha_value(instant, ayanamsha)
    }
}
