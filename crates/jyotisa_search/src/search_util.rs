//! Event-boundary root-finder.
//!
//! Locates the instant a boolean predicate flips from false to true with a
//! coarse forward scan followed by bisection of the bracketing step.
//!
//! Contract: the predicate must be false-then-true at most once inside the
//! horizon. Angular quantities used by the panchanga cross each sector
//! boundary once per window; a predicate that flips more than once (e.g. a
//! body stationing near a boundary) yields the first coarse-step flip.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tracing::warn;

use crate::error::SearchError;

/// Longest accepted scan horizon.
pub const MAX_SEARCH_HORIZON_DAYS: i64 = 366;

/// Scan and refinement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingConfig {
    /// How far ahead to scan before giving up.
    pub horizon: TimeDelta,
    /// Coarse scan step.
    pub coarse_step: TimeDelta,
    /// Bisection stops once the bracket is no wider than this.
    pub resolution: TimeDelta,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            horizon: TimeDelta::hours(48),
            coarse_step: TimeDelta::minutes(10),
            resolution: TimeDelta::seconds(30),
        }
    }
}

impl CrossingConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.horizon <= TimeDelta::zero() {
            return Err(SearchError::InvalidConfig("horizon must be positive"));
        }
        if self.horizon > TimeDelta::days(MAX_SEARCH_HORIZON_DAYS) {
            return Err(SearchError::InvalidConfig("horizon must not exceed 366 days"));
        }
        if self.coarse_step <= TimeDelta::zero() {
            return Err(SearchError::InvalidConfig("coarse step must be positive"));
        }
        if self.resolution <= TimeDelta::zero() {
            return Err(SearchError::InvalidConfig("resolution must be positive"));
        }
        if self.coarse_step > self.horizon {
            return Err(SearchError::InvalidConfig(
                "coarse step must not exceed the horizon",
            ));
        }
        Ok(())
    }
}

/// Result of a boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Crossing {
    /// Upper (true) bracket endpoint, or the horizon when not found.
    pub instant: DateTime<Utc>,
    /// False when the predicate never turned true within the horizon.
    pub found: bool,
}

/// Find the first instant at or after `start` where `predicate` is true,
/// to within `config.resolution`.
///
/// If the predicate is already true at `start`, `start` is returned. If it
/// never becomes true, the horizon end is returned with `found = false`.
pub fn find_crossing<F>(
    start: DateTime<Utc>,
    mut predicate: F,
    config: &CrossingConfig,
) -> Result<Crossing, SearchError>
where
    F: FnMut(DateTime<Utc>) -> Result<bool, SearchError>,
{
    config.validate()?;
    let end = start
        .checked_add_signed(config.horizon)
        .ok_or(SearchError::InvalidConfig("horizon overflows the calendar"))?;

    let mut lo = start;
    let mut hi = start;
    loop {
        if predicate(hi)? {
            break;
        }
        if hi >= end {
            warn!(%start, %end, "no crossing within horizon");
            return Ok(Crossing {
                instant: end,
                found: false,
            });
        }
        lo = hi;
        hi = hi
            .checked_add_signed(config.coarse_step)
            .map_or(end, |next| next.min(end));
    }

    while hi - lo > config.resolution {
        let mid = lo + (hi - lo) / 2;
        if predicate(mid)? {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Ok(Crossing {
        instant: hi,
        found: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 0, 52, 0).unwrap()
    }

    #[test]
    fn step_predicate_within_resolution() {
        let cfg = CrossingConfig::default();
        let target = t0() + TimeDelta::seconds(37_777);
        let c = find_crossing(t0(), |t| Ok(t >= target), &cfg).unwrap();
        assert!(c.found);
        assert!(c.instant >= target);
        assert!(c.instant - target <= cfg.resolution);
    }

    #[test]
    fn true_at_start_returns_start() {
        let c = find_crossing(t0(), |_| Ok(true), &CrossingConfig::default()).unwrap();
        assert_eq!(c.instant, t0());
        assert!(c.found);
    }

    #[test]
    fn never_true_falls_back_to_horizon() {
        let cfg = CrossingConfig::default();
        let c = find_crossing(t0(), |_| Ok(false), &cfg).unwrap();
        assert!(!c.found);
        assert_eq!(c.instant, t0() + cfg.horizon);
    }

    #[test]
    fn horizon_not_multiple_of_step() {
        let cfg = CrossingConfig {
            horizon: TimeDelta::minutes(25),
            coarse_step: TimeDelta::minutes(10),
            resolution: TimeDelta::seconds(1),
        };
        let target = t0() + TimeDelta::minutes(24);
        let c = find_crossing(t0(), |t| Ok(t >= target), &cfg).unwrap();
        assert!(c.found);
        assert!(c.instant - target <= cfg.resolution);
    }

    #[test]
    fn double_crossing_returns_first_flip() {
        let cfg = CrossingConfig::default();
        let t1 = t0() + TimeDelta::seconds(7_777);
        let t2 = t1 + TimeDelta::hours(2);
        let t3 = t0() + TimeDelta::hours(30);
        let c = find_crossing(t0(), |t| Ok((t >= t1 && t < t2) || t >= t3), &cfg).unwrap();
        assert!(c.found);
        assert!(c.instant >= t1);
        assert!(c.instant - t1 <= cfg.resolution);
    }

    #[test]
    fn oversized_horizon_is_rejected() {
        let cfg = CrossingConfig {
            horizon: TimeDelta::try_hours(2_000_000_000_000).unwrap(),
            ..CrossingConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SearchError::InvalidConfig(_))));
        assert!(matches!(
            find_crossing(t0(), |_| Ok(false), &cfg),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn horizon_near_calendar_end_errors() {
        let cfg = CrossingConfig::default();
        let start = DateTime::<Utc>::MAX_UTC - TimeDelta::hours(1);
        assert!(matches!(
            find_crossing(start, |_| Ok(false), &cfg),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn predicate_errors_propagate() {
        let r = find_crossing(
            t0(),
            |_| Err(SearchError::InvalidConfig("boom")),
            &CrossingConfig::default(),
        );
        assert!(r.is_err());
    }

    #[test]
    fn rejects_bad_config() {
        let cfg = CrossingConfig {
            resolution: TimeDelta::zero(),
            ..CrossingConfig::default()
        };
        assert!(find_crossing(t0(), |_| Ok(true), &cfg).is_err());
    }
}
