//! Vimshottari mahadasha generation, on-demand expansion and snapshots.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::balance::nakshatra_birth_balance;
use super::subperiod::{build_cyclic_sequence, proportional_children, years_to_duration};
use super::types::{DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, MAX_DASHA_DEPTH};
use crate::error::VedicError;

/// Cumulative-year slack below which the horizon counts as reached.
const HORIZON_EPS_YEARS: f64 = 1e-9;

/// Upper bound on the horizon.
pub const MAX_HORIZON_YEARS: f64 = 1_000.0;

fn validate_depth(depth: u8) -> Result<DashaLevel, VedicError> {
    DashaLevel::from_depth(depth).ok_or(VedicError::InvalidDashaLevel(depth))
}

/// Top-level periods from birth until `horizon_years` have elapsed.
///
/// The first period is the birth balance; later ones use full years in cycle
/// order. Each end is `birth + cumulative_years`, and the final period is
/// truncated to end exactly at the horizon.
pub fn vimshottari_mahadashas(
    birth: DateTime<Utc>,
    moon_sidereal_lon: f64,
    horizon_years: f64,
) -> Result<Vec<DashaPeriod>, VedicError> {
    if !horizon_years.is_finite() || horizon_years <= 0.0 || horizon_years > MAX_HORIZON_YEARS {
        return Err(VedicError::InvalidInput(
            "dasha horizon must be within (0, 1000] years",
        ));
    }
    let balance = nakshatra_birth_balance(moon_sidereal_lon);
    let sequence = build_cyclic_sequence(balance.lord);

    let mut periods = Vec::new();
    let mut cumulative = 0.0;
    let mut cursor = birth;
    for (i, (lord, full_years)) in sequence.iter().cycle().enumerate() {
        let years = if i == 0 {
            balance.balance_years
        } else {
            *full_years
        };
        let mut next = cumulative + years;
        let last = next >= horizon_years - HORIZON_EPS_YEARS;
        if last {
            next = horizon_years;
        }
        let end = birth + years_to_duration(next);
        if end > cursor {
            periods.push(DashaPeriod {
                lord: *lord,
                level: DashaLevel::Mahadasha,
                start: cursor,
                end,
                children: Vec::new(),
            });
        }
        cursor = end;
        cumulative = next;
        if last {
            break;
        }
    }
    Ok(periods)
}

/// Sub-periods of `parent` at the next level.
pub fn vimshottari_children(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    proportional_children(parent)
}

fn expand(period: &mut DashaPeriod, depth: u8) {
    if period.level.depth() >= depth {
        return;
    }
    period.children = vimshottari_children(period);
    for child in &mut period.children {
        expand(child, depth);
    }
}

/// Full tree down to `depth` levels (1..=3).
pub fn vimshottari_hierarchy(
    birth: DateTime<Utc>,
    moon_sidereal_lon: f64,
    depth: u8,
    horizon_years: f64,
) -> Result<DashaHierarchy, VedicError> {
    validate_depth(depth)?;
    let balance = nakshatra_birth_balance(moon_sidereal_lon);
    let mut mahadashas = vimshottari_mahadashas(birth, moon_sidereal_lon, horizon_years)?;
    for maha in &mut mahadashas {
        expand(maha, depth);
    }
    debug!(
        nakshatra = balance.nakshatra.name(),
        lord = balance.lord.english_name(),
        balance_years = balance.balance_years,
        mahadashas = mahadashas.len(),
        depth,
        "vimshottari hierarchy"
    );
    Ok(DashaHierarchy {
        birth,
        moon_longitude_deg: moon_sidereal_lon,
        birth_nakshatra: balance.nakshatra,
        starting_lord: balance.lord,
        balance_years: balance.balance_years,
        horizon_years,
        depth,
        mahadashas,
    })
}

/// Active period chain at `instant`, `depth` levels deep.
///
/// Levels not expanded in the hierarchy are generated on demand. Returns an
/// empty chain when `instant` lies outside the hierarchy.
pub fn active_periods_at(
    hierarchy: &DashaHierarchy,
    instant: DateTime<Utc>,
    depth: u8,
) -> Result<DashaSnapshot, VedicError> {
    validate_depth(depth)?;
    let mut periods = Vec::with_capacity(usize::from(MAX_DASHA_DEPTH));
    let mut current = hierarchy
        .mahadashas
        .iter()
        .find(|p| p.contains(instant))
        .cloned();

    while let Some(period) = current {
        let reached = period.level.depth() >= depth;
        let children = if reached {
            Vec::new()
        } else if period.children.is_empty() {
            vimshottari_children(&period)
        } else {
            period.children.clone()
        };
        periods.push(period.shallow());
        current = children.into_iter().find(|c| c.contains(instant));
    }

    Ok(DashaSnapshot {
        query: instant,
        periods,
    })
}
