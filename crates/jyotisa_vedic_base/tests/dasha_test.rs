//! Integration tests for Vimshottari hierarchy invariants.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use jyotisa_vedic_base::Graha;
use jyotisa_vedic_base::dasha::{
    DAYS_PER_YEAR, DashaLevel, DashaPeriod, active_periods_at, days_to_duration,
    vimshottari_hierarchy,
};

fn birth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1985, 11, 2, 21, 45, 0).unwrap()
}

fn assert_partitioned(parent: &DashaPeriod) {
    if parent.children.is_empty() {
        return;
    }
    assert_eq!(parent.children.first().unwrap().start, parent.start);
    assert_eq!(parent.children.last().unwrap().end, parent.end);
    for w in parent.children.windows(2) {
        assert_eq!(w[0].end, w[1].start, "gap or overlap under {:?}", parent.lord);
    }
    assert_eq!(parent.children[0].lord, parent.lord);
    for child in &parent.children {
        assert!(child.start <= child.end);
        assert_partitioned(child);
    }
}

#[test]
fn children_partition_every_parent() {
    for moon in [0.0, 7.77, 93.4, 200.0, 359.99] {
        let h = vimshottari_hierarchy(birth(), moon, 3, 120.0).unwrap();
        for maha in &h.mahadashas {
            assert_eq!(maha.children.len(), 9);
            assert_partitioned(maha);
        }
    }
}

#[test]
fn ashwini_start_gives_exact_ketu_then_venus_then_sun() {
    let h = vimshottari_hierarchy(birth(), 0.0, 1, 120.0).unwrap();
    let m = &h.mahadashas;
    assert_eq!(m[0].lord, Graha::Ketu);
    assert_eq!(m[0].end, birth() + days_to_duration(7.0 * DAYS_PER_YEAR));
    assert_eq!((m[0].end - m[0].start).num_seconds(), 220_898_664);
    assert_eq!(m[1].lord, Graha::Shukra);
    assert!((m[1].duration_years() - 20.0).abs() < 1e-9);
    assert_eq!(m[2].lord, Graha::Surya);
    assert!((m[2].duration_years() - 6.0).abs() < 1e-9);
}

#[test]
fn total_span_is_horizon() {
    let h = vimshottari_hierarchy(birth(), 123.456, 1, 120.0).unwrap();
    let total: f64 = h.mahadashas.iter().map(DashaPeriod::duration_years).sum();
    assert!((total - 120.0).abs() < 1e-6, "total = {total}");
}

#[test]
fn snapshot_chain_is_nested() {
    let h = vimshottari_hierarchy(birth(), 211.0, 3, 120.0).unwrap();
    let at = birth() + TimeDelta::days(365 * 33 + 17);
    let snap = active_periods_at(&h, at, 3).unwrap();
    assert_eq!(snap.periods.len(), 3);
    let levels: Vec<DashaLevel> = snap.periods.iter().map(|p| p.level).collect();
    assert_eq!(
        levels,
        vec![
            DashaLevel::Mahadasha,
            DashaLevel::Antardasha,
            DashaLevel::Pratyantardasha
        ]
    );
    for w in snap.periods.windows(2) {
        assert!(w[0].start <= w[1].start && w[1].end <= w[0].end);
    }
    assert!(snap.periods.iter().all(|p| p.contains(at)));
}

#[test]
fn timezone_rendering_keeps_instant() {
    let h = vimshottari_hierarchy(birth(), 0.0, 1, 120.0).unwrap();
    let tz: chrono_tz::Tz = "Asia/Kolkata".parse().unwrap();
    let local = h.mahadashas[0].start_in(tz);
    assert_eq!(local.with_timezone(&Utc), birth());
    assert_eq!(local.format("%H:%M").to_string(), "03:15");
}
