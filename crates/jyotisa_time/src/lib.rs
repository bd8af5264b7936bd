//! Time normalization for the jyotisa engine.
//!
//! - Civil date, clock-time and IANA timezone parsing into UTC instants
//! - Julian Date conversions
//! - Greenwich and local mean sidereal time

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    ClockTime, civil_to_utc, local_to_utc, localize, parse_clock_time, parse_date, parse_instant,
    parse_timezone,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, centuries_since_j2000,
    jd_from_utc, utc_from_jd,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
