//! Analytic providers for integration tests.
//!
//! Sun and Moon move at constant rates from an epoch, so every sector
//! crossing has a closed-form instant.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use jyotisa_core::{
    AyanamshaSystem, Body, EphemerisProvider, GeoLocation, HouseFrame, LongitudeSample,
    ProviderError, SunTimes, SunTimesProvider, normalize_360,
};

pub const KOLKATA: Tz = chrono_tz::Asia::Kolkata;

pub fn rishikesh() -> GeoLocation {
    GeoLocation::new(30.0869, 78.2676).unwrap()
}

/// Constant-rate sidereal sky.
#[derive(Debug, Clone)]
pub struct LinearSky {
    pub epoch: DateTime<Utc>,
    pub sun0: f64,
    pub sun_rate: f64,
    pub moon0: f64,
    pub moon_rate: f64,
    pub ayanamsha_deg: f64,
    /// Direct sidereal ascendant.
    pub ascendant_deg: f64,
    /// Added to the tropical ascendant to make the two methods disagree.
    pub tropical_skew_deg: f64,
}

impl LinearSky {
    pub fn new(epoch: DateTime<Utc>, sun0: f64, moon0: f64) -> Self {
        Self {
            epoch,
            sun0,
            sun_rate: 1.0,
            moon0,
            moon_rate: 13.2,
            ayanamsha_deg: 24.1,
            ascendant_deg: 95.0,
            tropical_skew_deg: 0.0,
        }
    }

    pub fn days(&self, instant: DateTime<Utc>) -> f64 {
        (instant - self.epoch).num_microseconds().unwrap() as f64 / 86_400_000_000.0
    }

    /// Instant `days` after the epoch.
    pub fn at(&self, days: f64) -> DateTime<Utc> {
        self.epoch + TimeDelta::microseconds((days * 86_400_000_000.0).round() as i64)
    }
}

impl EphemerisProvider for LinearSky {
    fn longitude_and_speed(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        _ayanamsha: AyanamshaSystem,
    ) -> Result<LongitudeSample, ProviderError> {
        let d = self.days(instant);
        let (lon0, rate) = match body {
            Body::Sun => (self.sun0, self.sun_rate),
            Body::Moon => (self.moon0, self.moon_rate),
            Body::Mars => (100.0, 0.5),
            Body::Mercury => (200.0, -0.3),
            Body::Jupiter => (45.0, 0.1),
            Body::Venus => (300.0, 1.2),
            Body::Saturn => (330.0, 0.03),
            Body::MeanNode => (10.0, -0.053),
        };
        Ok(LongitudeSample {
            longitude_deg: normalize_360(lon0 + rate * d),
            speed_deg_per_day: rate,
        })
    }

    fn ascendant(
        &self,
        _instant: DateTime<Utc>,
        _location: &GeoLocation,
        _ayanamsha: AyanamshaSystem,
        frame: HouseFrame,
    ) -> Result<f64, ProviderError> {
        Ok(match frame {
            HouseFrame::Sidereal => self.ascendant_deg,
            HouseFrame::Tropical => {
                normalize_360(self.ascendant_deg + self.ayanamsha_deg + self.tropical_skew_deg)
            }
        })
    }

    fn ayanamsha_value(
        &self,
        _instant: DateTime<Utc>,
        _ayanamsha: AyanamshaSystem,
    ) -> Result<f64, ProviderError> {
        Ok(self.ayanamsha_deg)
    }
}

/// Sunrise 06:00 and sunset 18:00 local, every day.
#[derive(Debug, Clone, Copy)]
pub struct FixedSunTimes;

fn local(date: NaiveDate, hour: u32, tz: Tz) -> Result<DateTime<Tz>, ProviderError> {
    let naive = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap());
    tz.from_local_datetime(&naive)
        .single()
        .ok_or(ProviderError::NoRiseSet("ambiguous local time"))
}

impl SunTimesProvider for FixedSunTimes {
    fn sun_times(
        &self,
        date: NaiveDate,
        _location: &GeoLocation,
        tz: Tz,
    ) -> Result<SunTimes, ProviderError> {
        Ok(SunTimes {
            sunrise: local(date, 6, tz)?,
            sunset: local(date, 18, tz)?,
        })
    }
}

/// Sunrise on 2024-03-20 (a Wednesday) in Kolkata, 00:30 UTC.
pub fn equinox_sunrise() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 0, 30, 0).unwrap()
}

pub fn equinox_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
}
