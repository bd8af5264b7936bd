//! Ascendant geometry.

use chrono::{DateTime, Utc};
use jyotisa_time::{centuries_since_j2000, jd_from_utc, local_sidereal_time_rad};

use crate::angle::normalize_360;
use crate::location::GeoLocation;

/// IAU 2006 mean obliquity of the ecliptic at J2000.0 (84381.406″), degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// IAU 2006 mean obliquity of the ecliptic, degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.406 + t * (-46.836769 + t * (-0.0001831 + t * 0.00200340));
    arcsec / 3600.0
}

/// Tropical ascendant longitude in degrees from local sidereal time,
/// geographic latitude and obliquity (all radians).
///
/// λ = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))
pub fn ascendant_longitude_deg(lst_rad: f64, latitude_rad: f64, obliquity_rad: f64) -> f64 {
    let y = lst_rad.cos();
    let x = -(lst_rad.sin() * obliquity_rad.cos() + latitude_rad.tan() * obliquity_rad.sin());
    normalize_360(y.atan2(x).to_degrees())
}

/// Tropical ascendant at a UTC instant for a location.
pub fn tropical_ascendant_deg(instant: DateTime<Utc>, location: &GeoLocation) -> f64 {
    let lst = local_sidereal_time_rad(instant, location.longitude_deg);
    let eps = mean_obliquity_deg(centuries_since_j2000(jd_from_utc(instant))).to_radians();
    ascendant_longitude_deg(lst, location.latitude_deg.to_radians(), eps)
}
