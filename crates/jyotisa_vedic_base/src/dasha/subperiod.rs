//! Proportional sub-period generation.
//!
//! A parent ruled by lord L is split among all nine lords, starting at L, in
//! proportion to `years / 120`. Arithmetic is in whole microseconds and the
//! last child's end is snapped to the parent's end.

use chrono::TimeDelta;

use super::types::{DAYS_PER_YEAR, DashaPeriod};
use super::vimshottari_data::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, sequence_position};
use crate::graha::Graha;

/// Duration of a (fractional) number of days, rounded to the microsecond.
pub fn days_to_duration(days: f64) -> TimeDelta {
    TimeDelta::microseconds((days * 86_400_000_000.0).round() as i64)
}

/// Duration of a (fractional) number of 365.2425-day years.
pub fn years_to_duration(years: f64) -> TimeDelta {
    days_to_duration(years * DAYS_PER_YEAR)
}

/// Cycle rotated to begin at `lord`.
pub fn build_cyclic_sequence(lord: Graha) -> [(Graha, f64); 9] {
    let start = sequence_position(lord);
    std::array::from_fn(|i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}

/// Snap the last child's end to the parent's end to absorb rounding drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent: &DashaPeriod) {
    if let Some(last) = children.last_mut() {
        last.end = parent.end;
    }
}

/// Children of `parent` at the next level. Empty at the deepest level.
pub fn proportional_children(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(level) = parent.level.child_level() else {
        return Vec::new();
    };
    let parent_micros = parent.duration().num_microseconds().unwrap_or_default() as f64;

    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start;
    for (lord, years) in build_cyclic_sequence(parent.lord) {
        let span = (parent_micros * years / VIMSHOTTARI_TOTAL_YEARS).round() as i64;
        let end = cursor + TimeDelta::microseconds(span);
        children.push(DashaPeriod {
            lord,
            level,
            start: cursor,
            end,
            children: Vec::new(),
        });
        cursor = end;
    }
    snap_last_child_end(&mut children, parent);
    children
}
