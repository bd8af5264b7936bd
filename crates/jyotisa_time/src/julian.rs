//! Julian Date conversions for UTC instants.

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT, used here on the UTC scale).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch, 1970-01-01 00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of a UTC instant, with sub-second precision.
pub fn jd_from_utc(instant: DateTime<Utc>) -> f64 {
    let secs = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// UTC instant for a Julian Date, rounded to the nearest microsecond.
pub fn utc_from_jd(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::JulianOutOfRange(jd.to_string()));
    }
    let micros = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1e6).round();
    if micros.abs() >= i64::MAX as f64 {
        return Err(TimeError::JulianOutOfRange(jd.to_string()));
    }
    DateTime::from_timestamp_micros(micros as i64)
        .ok_or_else(|| TimeError::JulianOutOfRange(jd.to_string()))
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_noon() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((jd_from_utc(t) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn unix_epoch() {
        let t = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!((jd_from_utc(t) - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn jd_back_to_utc() {
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
        let back = utc_from_jd(jd_from_utc(t)).unwrap();
        assert!((back - t).num_milliseconds().abs() < 1);
    }

    #[test]
    fn non_finite_rejected() {
        assert!(utc_from_jd(f64::NAN).is_err());
        assert!(utc_from_jd(f64::INFINITY).is_err());
    }

    #[test]
    fn one_century() {
        assert!((centuries_since_j2000(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-12);
    }
}
