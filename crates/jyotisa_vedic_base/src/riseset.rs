//! Sunrise and sunset from the provider's Sun position.
//!
//! Iterative hour-angle method: the Sun's tropical ecliptic longitude is
//! converted to RA/Dec with the mean obliquity, the rise/set hour angle for a
//! 50′ depression (34′ refraction + 16′ semidiameter) is solved, and the
//! event time is refined until the correction drops below ~0.1 s.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;
use jyotisa_core::{
    AyanamshaSystem, Body, EphemerisProvider, GeoLocation, ProviderError, SunTimes,
    SunTimesProvider, mean_obliquity_deg,
};
use jyotisa_time::{centuries_since_j2000, jd_from_utc, local_sidereal_time_rad};
use tracing::debug;

const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 s).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Apparent sidereal rotation, radians per solar day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Standard sunrise/sunset depression below the geometric horizon, degrees.
pub const SUNRISE_DEPRESSION_DEG: f64 = 50.0 / 60.0;

/// [`SunTimesProvider`] that derives rise/set from an [`EphemerisProvider`].
#[derive(Debug, Clone)]
pub struct RiseSetCalculator<P> {
    provider: P,
    depression_deg: f64,
}

impl<P: EphemerisProvider> RiseSetCalculator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            depression_deg: SUNRISE_DEPRESSION_DEG,
        }
    }

    /// Override the horizon depression (e.g. 6° for civil twilight).
    pub fn with_depression_deg(mut self, depression_deg: f64) -> Self {
        self.depression_deg = depression_deg;
        self
    }

    fn sun_ra_dec(&self, instant: DateTime<Utc>) -> Result<(f64, f64), ProviderError> {
        // Any system works: the offset is added straight back.
        let system = AyanamshaSystem::Lahiri;
        let sidereal = self.provider.sidereal_longitude(instant, Body::Sun, system)?;
        let ayanamsha = self.provider.ayanamsha_value(instant, system)?;
        let lambda = (sidereal + ayanamsha).to_radians();
        let eps = mean_obliquity_deg(centuries_since_j2000(jd_from_utc(instant))).to_radians();
        let ra = (lambda.sin() * eps.cos()).atan2(lambda.cos()).rem_euclid(TAU);
        let dec = (eps.sin() * lambda.sin()).asin();
        Ok((ra, dec))
    }

    fn hour_angle(&self, phi: f64, dec: f64) -> Result<f64, ProviderError> {
        let h0 = (-self.depression_deg).to_radians();
        let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if cos_h > 1.0 {
            return Err(ProviderError::NoRiseSet("sun stays below the horizon"));
        }
        if cos_h < -1.0 {
            return Err(ProviderError::NoRiseSet("sun stays above the horizon"));
        }
        Ok(cos_h.acos())
    }

    fn event(
        &self,
        approx_noon: DateTime<Utc>,
        location: &GeoLocation,
        rising: bool,
    ) -> Result<DateTime<Utc>, ProviderError> {
        let phi = location.latitude_rad();
        let (ra, dec) = self.sun_ra_dec(approx_noon)?;
        let h0 = self.hour_angle(phi, dec)?;

        let lst_noon = local_sidereal_time_rad(approx_noon, location.longitude_deg);
        let transit = approx_noon + days(-wrap_pi(lst_noon - ra) / SIDEREAL_RATE);
        let offset = days(h0 / SIDEREAL_RATE);
        let mut event = if rising {
            transit - offset
        } else {
            transit + offset
        };

        for _ in 0..MAX_ITERATIONS {
            let (ra_i, dec_i) = self.sun_ra_dec(event)?;
            let h_i = self.hour_angle(phi, dec_i)?;
            let lst = local_sidereal_time_rad(event, location.longitude_deg);
            let ha_actual = wrap_pi(lst - ra_i);
            let ha_target = if rising { -h_i } else { h_i };
            let correction = wrap_pi(ha_target - ha_actual) / SIDEREAL_RATE;
            event += days(correction);
            if correction.abs() < CONVERGENCE_DAYS {
                break;
            }
        }
        Ok(event)
    }
}

impl<P: EphemerisProvider> SunTimesProvider for RiseSetCalculator<P> {
    fn sun_times(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz: Tz,
    ) -> Result<SunTimes, ProviderError> {
        location.validate()?;
        // Local mean noon on the civil date, expressed in UTC.
        let noon = date.and_time(NaiveTime::MIN).and_utc() + TimeDelta::hours(12)
            - days(location.longitude_deg / 360.0);
        let sunrise = self.event(noon, location, true)?;
        let sunset = self.event(noon, location, false)?;
        debug!(%date, %sunrise, %sunset, "sun times");
        Ok(SunTimes {
            sunrise: sunrise.with_timezone(&tz),
            sunset: sunset.with_timezone(&tz),
        })
    }
}

fn wrap_pi(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}

fn days(d: f64) -> TimeDelta {
    TimeDelta::microseconds((d * 86_400_000_000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotisa_core::{HouseFrame, LongitudeSample, normalize_360};

    /// Sun parked at a fixed tropical longitude.
    struct FixedSun(f64);

    impl EphemerisProvider for FixedSun {
        fn longitude_and_speed(
            &self,
            instant: DateTime<Utc>,
            _body: Body,
            ayanamsha: AyanamshaSystem,
        ) -> Result<LongitudeSample, ProviderError> {
            Ok(LongitudeSample {
                longitude_deg: normalize_360(self.0 - ayanamsha.value_at(instant)),
                speed_deg_per_day: 0.0,
            })
        }

        fn ascendant(
            &self,
            _instant: DateTime<Utc>,
            _location: &GeoLocation,
            _ayanamsha: AyanamshaSystem,
            _frame: HouseFrame,
        ) -> Result<f64, ProviderError> {
            Ok(0.0)
        }

        fn ayanamsha_value(
            &self,
            instant: DateTime<Utc>,
            ayanamsha: AyanamshaSystem,
        ) -> Result<f64, ProviderError> {
            Ok(ayanamsha.value_at(instant))
        }
    }

    fn equinox_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn equator_equinox_day_length() {
        let calc = RiseSetCalculator::new(FixedSun(0.0));
        let loc = GeoLocation::new(0.0, 0.0).unwrap();
        let t = calc.sun_times(equinox_date(), &loc, Tz::UTC).unwrap();
        let length = (t.sunset - t.sunrise).num_seconds();
        // 12h plus twice the 50′ depression at 15°/h, less the sidereal speed-up.
        let expected = 12 * 3600 + 400 - 118;
        assert!((length - expected).abs() < 60, "day length {length}s");
    }

    #[test]
    fn transit_at_sun_right_ascension() {
        let calc = RiseSetCalculator::new(FixedSun(0.0));
        let loc = GeoLocation::new(0.0, 0.0).unwrap();
        let t = calc.sun_times(equinox_date(), &loc, Tz::UTC).unwrap();
        let rise = t.sunrise.with_timezone(&Utc);
        let mid = rise + (t.sunset.with_timezone(&Utc) - rise) / 2;
        let lst = wrap_pi(local_sidereal_time_rad(mid, 0.0));
        assert!(lst.abs() < 0.002, "lst at midday = {lst}");
    }

    #[test]
    fn polar_summer_never_sets() {
        let calc = RiseSetCalculator::new(FixedSun(90.0));
        let loc = GeoLocation::new(80.0, 0.0).unwrap();
        assert!(matches!(
            calc.sun_times(equinox_date(), &loc, Tz::UTC),
            Err(ProviderError::NoRiseSet(_))
        ));
        let south = GeoLocation::new(-80.0, 0.0).unwrap();
        assert!(calc.sun_times(equinox_date(), &south, Tz::UTC).is_err());
    }

    #[test]
    fn results_carry_requested_zone() {
        let calc = RiseSetCalculator::new(FixedSun(0.0));
        let loc = GeoLocation::new(30.0869, 78.2676).unwrap();
        let tz: Tz = "Asia/Kolkata".parse().unwrap();
        let t = calc.sun_times(equinox_date(), &loc, tz).unwrap();
        assert_eq!(t.sunrise.timezone(), tz);
        assert_eq!(t.sunrise.date_naive(), equinox_date());
        assert!(t.sunrise < t.sunset);
    }
}
