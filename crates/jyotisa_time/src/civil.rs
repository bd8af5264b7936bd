//! Civil date and clock-time normalization.
//!
//! Turns a local calendar date, a wall-clock time (24-hour or 12-hour with a
//! meridiem marker), and an IANA timezone name into an absolute UTC instant.
//! Every field is validated; nothing is silently defaulted.
//!
//! DST policy: an ambiguous local time (autumn overlap) resolves to the
//! earlier of the two instants; a local time inside a spring-forward gap is
//! rejected with [`TimeError::NonexistentLocalTime`].

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Naive datetime layouts accepted by [`parse_instant`] when no offset is given.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Wall-clock time of day, always stored on the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    /// Create a validated 24-hour clock time.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                input: format!("{hour:02}:{minute:02}:{second:02}"),
                reason: "field out of range",
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Convert to a chrono `NaiveTime`.
    pub fn to_naive(self) -> NaiveTime {
        // Fields are range-checked at construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or(NaiveTime::MIN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let trimmed = s.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();
    if parts.len() != 3
        || parts[0].len() != 4
        || parts[1].len() != 2
        || parts[2].len() != 2
        || !parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(TimeError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse a wall-clock time.
///
/// Accepts `HH:MM`, `HH:MM:SS`, and `H:MM[:SS] AM/PM` (meridiem is
/// case-insensitive and may be separated by whitespace). On the 12-hour
/// clock the hour must be 1..=12; `12 AM` is midnight and `12 PM` is noon.
pub fn parse_clock_time(s: &str) -> Result<ClockTime, TimeError> {
    let trimmed = s.trim();
    let (body, meridiem) = split_meridiem(trimmed);
    let body = body.trim_end();

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(TimeError::time(s, "expected HH:MM, HH:MM:SS, or H:MM AM/PM"));
    }

    let hour = parse_field(s, parts[0], 1, 2)?;
    let minute = parse_field(s, parts[1], 2, 2)?;
    let second = match parts.get(2) {
        Some(p) => parse_field(s, p, 2, 2)?,
        None => 0,
    };

    let hour = match meridiem {
        Some(m) => {
            if !(1..=12).contains(&hour) {
                return Err(TimeError::time(s, "12-hour clock hour must be 1-12"));
            }
            let base = hour % 12;
            match m {
                Meridiem::Am => base,
                Meridiem::Pm => base + 12,
            }
        }
        None => hour,
    };

    ClockTime::new(hour, minute, second).map_err(|_| TimeError::time(s, "field out of range"))
}

fn split_meridiem(s: &str) -> (&str, Option<Meridiem>) {
    let Some(split) = s.len().checked_sub(2) else {
        return (s, None);
    };
    let (Some(head), Some(tail)) = (s.get(..split), s.get(split..)) else {
        return (s, None);
    };
    if tail.eq_ignore_ascii_case("am") {
        (head, Some(Meridiem::Am))
    } else if tail.eq_ignore_ascii_case("pm") {
        (head, Some(Meridiem::Pm))
    } else {
        (s, None)
    }
}

fn parse_field(input: &str, field: &str, min_len: usize, max_len: usize) -> Result<u32, TimeError> {
    if field.len() < min_len || field.len() > max_len || !field.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(TimeError::time(input, "fields must be numeric (H:MM or HH:MM:SS)"));
    }
    field
        .parse::<u32>()
        .map_err(|_| TimeError::time(input, "fields must be numeric (H:MM or HH:MM:SS)"))
}

/// Resolve an IANA timezone name such as `Asia/Kolkata`.
pub fn parse_timezone(name: &str) -> Result<Tz, TimeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

/// Attach a timezone to a naive local datetime.
///
/// Ambiguous times resolve to the earlier instant; nonexistent times fail.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, TimeError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(a, b) => Ok(if a <= b { a } else { b }),
        LocalResult::None => Err(TimeError::NonexistentLocalTime(naive.to_string())),
    }
}

/// Combine an already-parsed local date and clock time into a UTC instant.
pub fn civil_to_utc(date: NaiveDate, time: ClockTime, tz: Tz) -> Result<DateTime<Utc>, TimeError> {
    let local = localize(date.and_time(time.to_naive()), tz)?;
    Ok(local.with_timezone(&Utc))
}

/// Parse a local date, clock time, and timezone name into a UTC instant.
pub fn local_to_utc(date: &str, time: &str, tz: &str) -> Result<DateTime<Utc>, TimeError> {
    let date = parse_date(date)?;
    let time = parse_clock_time(time)?;
    let tz = parse_timezone(tz)?;
    civil_to_utc(date, time, tz)
}

/// Parse an instant that is either RFC 3339 (offset-qualified) or a naive
/// local datetime interpreted in `tz`.
pub fn parse_instant(s: &str, tz: Tz) -> Result<DateTime<Utc>, TimeError> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return localize(naive, tz).map(|dt| dt.with_timezone(&Utc));
        }
    }
    Err(TimeError::InvalidInstant(s.to_string()))
}
