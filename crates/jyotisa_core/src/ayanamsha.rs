//! Ayanamsha (precession offset) for the supported sidereal systems.
//!
//! Each system is fixed by its value at J2000.0; the offset at any other
//! instant adds the IAU 2006 general precession in longitude.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use jyotisa_time::{centuries_since_j2000, jd_from_utc};
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Sidereal reference system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0° Libra.
    #[default]
    Lahiri,
    /// B.V. Raman.
    Raman,
    /// Krishnamurti Paddhati.
    #[serde(alias = "kp")]
    Krishnamurti,
}

pub const ALL_AYANAMSHAS: [AyanamshaSystem; 3] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::Raman,
    AyanamshaSystem::Krishnamurti,
];

impl AyanamshaSystem {
    /// Ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::Raman => 22.370,
            Self::Krishnamurti => 23.850,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::Krishnamurti => "Krishnamurti",
        }
    }

    /// Mean ayanamsha in degrees at a UTC instant.
    pub fn value_at(self, instant: DateTime<Utc>) -> f64 {
        let t = centuries_since_j2000(jd_from_utc(instant));
        self.reference_j2000_deg() + general_precession_longitude_deg(t)
    }
}

impl fmt::Display for AyanamshaSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AyanamshaSystem {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lahiri" => Ok(Self::Lahiri),
            "raman" => Ok(Self::Raman),
            "krishnamurti" | "kp" => Ok(Self::Krishnamurti),
            _ => Err(ProviderError::UnknownAyanamsha(s.to_string())),
        }
    }
}

/// IAU 2006 general precession in longitude, degrees.
///
/// p_A = 5028.796195·t + 1.1054348·t² + 0.00007964·t³ − 0.000023857·t⁴
/// − 0.0000000383·t⁵ arcseconds, t in Julian centuries from J2000.0.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let arcsec = t
        * (5028.796195
            + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))));
    arcsec / 3600.0
}
