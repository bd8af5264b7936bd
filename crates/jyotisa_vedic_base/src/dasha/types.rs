//! Core types for Vimshottari dasha periods.

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Year length for dasha arithmetic (mean Gregorian year).
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Default mahadasha horizon in years (one full cycle).
pub const DEFAULT_HORIZON_YEARS: f64 = 120.0;

/// Deepest supported level.
pub const MAX_DASHA_DEPTH: u8 = 3;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 1,
    Antardasha = 2,
    Pratyantardasha = 3,
}

impl DashaLevel {
    /// Level for a 1-based depth.
    pub fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(Self::Mahadasha),
            2 => Some(Self::Antardasha),
            3 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    pub const fn depth(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period and, when expanded, its sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub lord: Graha,
    pub level: DashaLevel,
    /// Inclusive.
    pub start: DateTime<Utc>,
    /// Exclusive.
    pub end: DateTime<Utc>,
    /// Contiguous partition of [start, end); empty when not expanded.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Duration in (365.2425-day) years.
    pub fn duration_years(&self) -> f64 {
        self.duration().num_microseconds().unwrap_or_default() as f64
            / (DAYS_PER_YEAR * 86_400_000_000.0)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn start_in(&self, tz: Tz) -> DateTime<Tz> {
        self.start.with_timezone(&tz)
    }

    pub fn end_in(&self, tz: Tz) -> DateTime<Tz> {
        self.end.with_timezone(&tz)
    }

    /// Copy without sub-periods.
    pub fn shallow(&self) -> Self {
        Self {
            lord: self.lord,
            level: self.level,
            start: self.start,
            end: self.end,
            children: Vec::new(),
        }
    }
}

/// Complete Vimshottari tree for one birth instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaHierarchy {
    pub birth: DateTime<Utc>,
    /// Moon's sidereal longitude at birth, degrees.
    pub moon_longitude_deg: f64,
    pub birth_nakshatra: Nakshatra,
    /// Lord of the first mahadasha.
    pub starting_lord: Graha,
    /// Years of the first mahadasha remaining at birth.
    pub balance_years: f64,
    pub horizon_years: f64,
    /// Number of levels expanded, 1..=3.
    pub depth: u8,
    pub mahadashas: Vec<DashaPeriod>,
}

/// Active chain of periods at one instant, mahadasha first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaSnapshot {
    pub query: DateTime<Utc>,
    pub periods: Vec<DashaPeriod>,
}
