//! Panchanga elements against closed-form crossing instants.

mod common;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use common::{FixedSunTimes, KOLKATA, LinearSky, equinox_date, equinox_sunrise, rishikesh};
use jyotisa_core::{AyanamshaSystem, GeoLocation};
use jyotisa_search::{
    CrossingConfig, ElementKind, PanchangaElement, SearchError, karana_at, nakshatra_at,
    panchanga_for_date, tithi_at, yoga_at,
};
use jyotisa_vedic_base::{Paksha, Vaar};

const AYA: AyanamshaSystem = AyanamshaSystem::Lahiri;

fn assert_ends_near(el: &PanchangaElement, expected: DateTime<Utc>, cfg: &CrossingConfig) {
    assert!(el.end.found, "{} end not found", el.name);
    let err = el.end.instant - expected;
    assert!(
        err >= TimeDelta::seconds(-1) && err <= cfg.resolution,
        "{}: got {}, expected {}",
        el.name,
        el.end.instant,
        expected
    );
}

#[test]
fn first_sectors_end_at_analytic_instants() {
    let sky = LinearSky::new(equinox_sunrise(), 0.0, 5.0);
    let cfg = CrossingConfig::default();
    let start = equinox_sunrise();

    // Elongation 5°, growing 12.2°/day.
    let tithi = tithi_at(&sky, start, AYA, &cfg).unwrap();
    assert_eq!((tithi.kind, tithi.index, tithi.name), (ElementKind::Tithi, 1, "Shukla Pratipada"));
    assert_ends_near(&tithi, sky.at(7.0 / 12.2), &cfg);

    let karana = karana_at(&sky, start, AYA, &cfg).unwrap();
    assert_eq!((karana.index, karana.name), (1, "Kimstughna"));
    assert_ends_near(&karana, sky.at(1.0 / 12.2), &cfg);

    // Moon alone, 13.2°/day, boundary at 13°20′.
    let nakshatra = nakshatra_at(&sky, start, AYA, &cfg).unwrap();
    assert_eq!((nakshatra.index, nakshatra.name), (1, "Ashwini"));
    assert_ends_near(&nakshatra, sky.at((40.0 / 3.0 - 5.0) / 13.2), &cfg);

    // Sum grows 14.2°/day.
    let yoga = yoga_at(&sky, start, AYA, &cfg).unwrap();
    assert_eq!((yoga.index, yoga.name), (1, "Vishkambha"));
    assert_ends_near(&yoga, sky.at((40.0 / 3.0 - 5.0) / 14.2), &cfg);
}

#[test]
fn last_sector_ends_at_wraparound() {
    let sky = LinearSky::new(equinox_sunrise(), 0.0, 355.0);
    let cfg = CrossingConfig::default();
    let start = equinox_sunrise();

    let tithi = tithi_at(&sky, start, AYA, &cfg).unwrap();
    assert_eq!((tithi.index, tithi.name), (30, "Amavasya"));
    assert_ends_near(&tithi, sky.at(5.0 / 12.2), &cfg);

    let karana = karana_at(&sky, start, AYA, &cfg).unwrap();
    assert_eq!((karana.index, karana.name), (60, "Naga"));
    assert_ends_near(&karana, sky.at(5.0 / 12.2), &cfg);

    let nakshatra = nakshatra_at(&sky, start, AYA, &cfg).unwrap();
    assert_eq!((nakshatra.index, nakshatra.name), (27, "Revati"));
    assert_ends_near(&nakshatra, sky.at(5.0 / 13.2), &cfg);
}

#[test]
fn stalled_elongation_reports_missing_crossing() {
    let mut sky = LinearSky::new(equinox_sunrise(), 0.0, 5.0);
    sky.moon_rate = sky.sun_rate;
    let cfg = CrossingConfig::default();
    let tithi = tithi_at(&sky, equinox_sunrise(), AYA, &cfg).unwrap();
    assert!(!tithi.end.found);
    assert_eq!(tithi.end.instant, equinox_sunrise() + cfg.horizon);
}

#[test]
fn finer_resolution_tightens_error() {
    let sky = LinearSky::new(equinox_sunrise(), 0.0, 5.0);
    let cfg = CrossingConfig {
        resolution: TimeDelta::seconds(1),
        ..CrossingConfig::default()
    };
    let tithi = tithi_at(&sky, equinox_sunrise(), AYA, &cfg).unwrap();
    assert_ends_near(&tithi, sky.at(7.0 / 12.2), &cfg);
}

#[test]
fn full_panchanga_for_wednesday() {
    let sky = LinearSky::new(equinox_sunrise(), 0.0, 5.0);
    let cfg = CrossingConfig::default();
    let info = panchanga_for_date(
        &sky,
        &FixedSunTimes,
        equinox_date(),
        &rishikesh(),
        KOLKATA,
        AYA,
        &cfg,
    )
    .unwrap();

    assert_eq!(info.sunrise, equinox_sunrise());
    assert_eq!(info.sunset, equinox_sunrise() + TimeDelta::hours(12));
    assert_eq!(info.vaar, Vaar::Budhvaar);
    assert_eq!(info.paksha, Paksha::Shukla);
    assert_eq!(info.tithi.index, 1);
    assert_eq!(info.timezone, "Asia/Kolkata");
    assert!((info.ayanamsha_deg - 24.1).abs() < 1e-12);

    let local = |h: u32, m: u32| {
        KOLKATA
            .with_ymd_and_hms(2024, 3, 20, h, m, 0)
            .unwrap()
            .with_timezone(&Utc)
    };
    // Wednesday: Rahukalam 5th, Yamagandam 2nd, Gulika 4th segment.
    assert_eq!(info.rahukalam.start, local(12, 0));
    assert_eq!(info.rahukalam.end, local(13, 30));
    assert_eq!(info.yamagandam.start, local(7, 30));
    assert_eq!(info.gulika.start, local(10, 30));
    assert_eq!(info.abhijit_muhurta.start, local(11, 36));
    assert_eq!(info.abhijit_muhurta.end, local(12, 24));
}

#[test]
fn day_segments_tile_daylight() {
    let sky = LinearSky::new(equinox_sunrise(), 0.0, 5.0);
    let info = panchanga_for_date(
        &sky,
        &FixedSunTimes,
        equinox_date(),
        &rishikesh(),
        KOLKATA,
        AYA,
        &CrossingConfig::default(),
    )
    .unwrap();
    assert_eq!(info.day_segments[0].start, info.sunrise);
    assert_eq!(info.day_segments[7].end, info.sunset);
    for w in info.day_segments.windows(2) {
        assert_eq!(w[0].end, w[1].start);
    }
}

#[test]
fn sunrise_weekday_is_local() {
    // 06:00 Thursday in Auckland (UTC+13) is 17:00 Wednesday in UTC.
    let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
    let sky = LinearSky::new(equinox_sunrise(), 0.0, 5.0);
    let info = panchanga_for_date(
        &sky,
        &FixedSunTimes,
        date,
        &rishikesh(),
        chrono_tz::Pacific::Auckland,
        AYA,
        &CrossingConfig::default(),
    )
    .unwrap();
    assert_eq!(info.sunrise, Utc.with_ymd_and_hms(2024, 3, 20, 17, 0, 0).unwrap());
    assert_eq!(info.vaar, Vaar::Guruvaar);
}

#[test]
fn invalid_inputs_rejected() {
    let sky = LinearSky::new(equinox_sunrise(), 0.0, 5.0);
    let bad = GeoLocation {
        latitude_deg: 95.0,
        longitude_deg: 0.0,
    };
    let err = panchanga_for_date(
        &sky,
        &FixedSunTimes,
        equinox_date(),
        &bad,
        KOLKATA,
        AYA,
        &CrossingConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::Provider(_)));

    let cfg = CrossingConfig {
        coarse_step: TimeDelta::zero(),
        ..CrossingConfig::default()
    };
    assert!(matches!(
        tithi_at(&sky, equinox_sunrise(), AYA, &cfg),
        Err(SearchError::InvalidConfig(_))
    ));
}

#[test]
fn panchanga_serializes_to_json() {
    let sky = LinearSky::new(equinox_sunrise(), 0.0, 5.0);
    let info = panchanga_for_date(
        &sky,
        &FixedSunTimes,
        equinox_date(),
        &rishikesh(),
        KOLKATA,
        AYA,
        &CrossingConfig::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["tithi"]["name"], "Shukla Pratipada");
    assert_eq!(json["vaar"], "Budhvaar");
    assert_eq!(json["tithi"]["end"]["found"], true);
}
