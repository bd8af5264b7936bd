//! Greenwich and local mean sidereal time.
//!
//! UT1 is approximated by UTC; the sub-second difference is far below the
//! precision needed for ascendant and rise/set work.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Utc};

use crate::julian::{J2000_JD, centuries_since_j2000, jd_from_utc};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵)″
pub fn gmst_rad(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (earth_rotation_angle_rad(jd) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local mean sidereal time in radians for an instant and east longitude (degrees).
pub fn local_sidereal_time_rad(instant: DateTime<Utc>, longitude_east_deg: f64) -> f64 {
    (gmst_rad(jd_from_utc(instant)) + longitude_east_deg.to_radians()).rem_euclid(TAU)
}
