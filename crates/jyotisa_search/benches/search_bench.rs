use std::path::PathBuf;

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotisa_core::{AyanamshaSystem, GeoLocation, TableEngine};
use jyotisa_search::{
    AscendantConfig, CrossingConfig, DashaRequest, birth_chart, dasha_snapshot_at,
    find_crossing, panchanga_for_date, tithi_at,
};
use jyotisa_vedic_base::RiseSetCalculator;

fn load_engine() -> Option<TableEngine> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../jyotisa_core/tests/data/jan2024.json");
    if !path.exists() {
        eprintln!("Skipping benchmarks: table not found");
        return None;
    }
    Some(TableEngine::load(&path).expect("should load table"))
}

fn crossing_bench(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    let target = start + chrono::TimeDelta::seconds(123_457);
    let config = CrossingConfig::default();

    let mut group = c.benchmark_group("search_crossing");
    group.bench_function("find_crossing_step", |b| {
        b.iter(|| find_crossing(black_box(start), |t| Ok(t >= target), &config).unwrap())
    });
    group.finish();
}

fn panchanga_bench(c: &mut Criterion) {
    let engine = match load_engine() {
        Some(v) => v,
        None => return,
    };
    let sun = RiseSetCalculator::new(&engine);
    let location = GeoLocation::new(30.0869, 78.2676).expect("valid location");
    let date = NaiveDate::from_ymd_opt(2024, 1, 8).expect("valid date");
    let instant = Utc.with_ymd_and_hms(2024, 1, 8, 1, 30, 0).unwrap();
    let config = CrossingConfig::default();

    let mut group = c.benchmark_group("search_panchanga");
    group.sample_size(20);
    group.bench_function("tithi_at", |b| {
        b.iter(|| {
            tithi_at(&engine, black_box(instant), AyanamshaSystem::Lahiri, &config)
                .expect("search should succeed")
        })
    });
    group.bench_function("panchanga_for_date", |b| {
        b.iter(|| {
            panchanga_for_date(
                &engine,
                &sun,
                black_box(date),
                &location,
                chrono_tz::Asia::Kolkata,
                AyanamshaSystem::Lahiri,
                &config,
            )
            .expect("panchanga should succeed")
        })
    });
    group.finish();
}

fn chart_and_dasha_bench(c: &mut Criterion) {
    let engine = match load_engine() {
        Some(v) => v,
        None => return,
    };
    let location = GeoLocation::new(30.0869, 78.2676).expect("valid location");
    let birth = Utc.with_ymd_and_hms(2024, 1, 10, 4, 0, 0).unwrap();
    let at = Utc.with_ymd_and_hms(2060, 6, 1, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("search_chart_dasha");
    group.bench_function("birth_chart", |b| {
        b.iter(|| {
            birth_chart(
                &engine,
                black_box(birth),
                &location,
                AyanamshaSystem::Lahiri,
                &AscendantConfig::default(),
            )
            .expect("chart should succeed")
        })
    });
    group.bench_function("dasha_snapshot_at", |b| {
        b.iter(|| {
            dasha_snapshot_at(
                &engine,
                black_box(birth),
                AyanamshaSystem::Lahiri,
                &DashaRequest::default(),
                black_box(at),
            )
            .expect("snapshot should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, crossing_bench, panchanga_bench, chart_and_dasha_bench);
criterion_main!(benches);
