//! Daylight partitions: the eight equal day segments, the weekday-selected
//! Rahukalam, Yamagandam and Gulika segments, and Abhijit Muhurta.
//!
//! Boundaries are computed in integer nanoseconds from sunrise so the eight
//! segments tile [sunrise, sunset) exactly and the last one ends at sunset.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::VedicError;
use crate::vaar::Vaar;

pub const DAY_SEGMENT_COUNT: usize = 8;

/// 1-based Rahukalam segment by weekday, Sunday first.
pub const RAHUKALAM_SEGMENTS: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];
/// 1-based Yamagandam segment by weekday, Sunday first.
pub const YAMAGANDAM_SEGMENTS: [u8; 7] = [5, 3, 6, 2, 7, 5, 4];
/// 1-based Gulika segment by weekday, Sunday first.
pub const GULIKA_SEGMENTS: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// A half-open interval [start, end) of daylight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySegment {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DaySegment {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Weekday-selected inauspicious day segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InauspiciousPeriod {
    Rahukalam,
    Yamagandam,
    Gulika,
}

impl InauspiciousPeriod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rahukalam => "Rahukalam",
            Self::Yamagandam => "Yamagandam",
            Self::Gulika => "Gulika",
        }
    }

    /// 1-based segment number for a weekday.
    pub const fn segment_for(self, vaar: Vaar) -> u8 {
        let table = match self {
            Self::Rahukalam => &RAHUKALAM_SEGMENTS,
            Self::Yamagandam => &YAMAGANDAM_SEGMENTS,
            Self::Gulika => &GULIKA_SEGMENTS,
        };
        table[vaar.index() as usize]
    }
}

fn daylight_nanos(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Result<i64, VedicError> {
    if sunset <= sunrise {
        return Err(VedicError::InvalidInput("sunset must be after sunrise"));
    }
    (sunset - sunrise)
        .num_nanoseconds()
        .ok_or(VedicError::InvalidInput("daylight span too long"))
}

/// Split [sunrise, sunset) into eight equal, contiguous segments.
pub fn day_segments(
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> Result<[DaySegment; DAY_SEGMENT_COUNT], VedicError> {
    let total = daylight_nanos(sunrise, sunset)?;
    let n = DAY_SEGMENT_COUNT as i64;
    let boundary = |i: i64| {
        if i == n {
            sunset
        } else {
            sunrise + TimeDelta::nanoseconds(total * i / n)
        }
    };
    Ok(std::array::from_fn(|i| {
        let i = i as i64;
        DaySegment {
            start: boundary(i),
            end: boundary(i + 1),
        }
    }))
}

/// The segment selected for `period` on `vaar`.
pub fn inauspicious_segment(
    period: InauspiciousPeriod,
    vaar: Vaar,
    segments: &[DaySegment; DAY_SEGMENT_COUNT],
) -> DaySegment {
    let number = period.segment_for(vaar).clamp(1, DAY_SEGMENT_COUNT as u8);
    segments[usize::from(number - 1)]
}

/// Abhijit Muhurta: the central 1/15 of daylight, centred on local noon
/// (the sunrise/sunset midpoint).
pub fn abhijit_muhurta(
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> Result<DaySegment, VedicError> {
    let total = daylight_nanos(sunrise, sunset)?;
    let mid = sunrise + TimeDelta::nanoseconds(total / 2);
    let half = TimeDelta::nanoseconds(total / 30);
    Ok(DaySegment {
        start: mid - half,
        end: mid + half,
    })
}
