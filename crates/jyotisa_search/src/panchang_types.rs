//! Types for panchanga classification results.

use chrono::{DateTime, NaiveDate, Utc};
use jyotisa_core::{AyanamshaSystem, GeoLocation};
use jyotisa_vedic_base::{
    DAY_SEGMENT_COUNT, DaySegment, KARANA_COUNT, KARANA_SPAN_DEG, NAKSHATRA_SPAN_27, Paksha,
    TITHI_COUNT, TITHI_SPAN_DEG, Vaar, YOGA_COUNT, karana_for_slot, normalize_360, tithi_name,
    yoga_name,
};
use serde::Serialize;

use crate::search_util::Crossing;

/// The four sector-based panchanga elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
}

pub const ALL_ELEMENT_KINDS: [ElementKind; 4] = [
    ElementKind::Tithi,
    ElementKind::Nakshatra,
    ElementKind::Yoga,
    ElementKind::Karana,
];

impl ElementKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "Tithi",
            Self::Nakshatra => "Nakshatra",
            Self::Yoga => "Yoga",
            Self::Karana => "Karana",
        }
    }

    /// Width of one sector in degrees.
    pub const fn sector_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SPAN_DEG,
            Self::Nakshatra | Self::Yoga => NAKSHATRA_SPAN_27,
            Self::Karana => KARANA_SPAN_DEG,
        }
    }

    pub const fn count(self) -> u8 {
        match self {
            Self::Tithi => TITHI_COUNT,
            Self::Nakshatra => 27,
            Self::Yoga => YOGA_COUNT,
            Self::Karana => KARANA_COUNT,
        }
    }

    /// Angular quantity in [0, 360) from sidereal Sun and Moon longitudes.
    pub fn quantity(self, sun_deg: f64, moon_deg: f64) -> f64 {
        match self {
            Self::Tithi | Self::Karana => normalize_360(moon_deg - sun_deg),
            Self::Nakshatra => normalize_360(moon_deg),
            Self::Yoga => normalize_360(sun_deg + moon_deg),
        }
    }

    /// Name of the 1-based sector `index`.
    pub fn name_for(self, index: u8) -> &'static str {
        match self {
            Self::Tithi => tithi_name(index),
            Self::Nakshatra => jyotisa_vedic_base::Nakshatra::from_number(index).name(),
            Self::Yoga => yoga_name(index),
            Self::Karana => karana_for_slot(index).name(),
        }
    }
}

/// One element in force at the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangaElement {
    pub kind: ElementKind,
    /// 1-based index within the cycle.
    pub index: u8,
    pub name: &'static str,
    /// When the element ends.
    pub end: Crossing,
}

/// Full panchanga for one civil date and place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangaInfo {
    pub date: NaiveDate,
    pub location: GeoLocation,
    /// IANA name of the timezone used for the civil date.
    pub timezone: String,
    pub ayanamsha: AyanamshaSystem,
    /// Ayanamsha value at sunrise, degrees.
    pub ayanamsha_deg: f64,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    /// Weekday of the local sunrise.
    pub vaar: Vaar,
    pub tithi: PanchangaElement,
    pub paksha: Paksha,
    pub nakshatra: PanchangaElement,
    pub yoga: PanchangaElement,
    pub karana: PanchangaElement,
    /// Eight equal parts of [sunrise, sunset).
    pub day_segments: [DaySegment; DAY_SEGMENT_COUNT],
    pub rahukalam: DaySegment,
    pub yamagandam: DaySegment,
    pub gulika: DaySegment,
    pub abhijit_muhurta: DaySegment,
}
