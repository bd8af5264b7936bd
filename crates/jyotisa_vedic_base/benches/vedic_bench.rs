use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotisa_vedic_base::dasha::{active_periods_at, vimshottari_hierarchy};
use jyotisa_vedic_base::{cross_check_ascendant, day_segments, nakshatra_from_longitude};

fn dasha_bench(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(1990, 7, 4, 5, 0, 0).unwrap();
    let at = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();

    let mut group = c.benchmark_group("vimshottari");
    group.bench_function("hierarchy_depth3", |b| {
        b.iter(|| vimshottari_hierarchy(black_box(birth), black_box(211.3), 3, 120.0).unwrap())
    });
    let shallow = vimshottari_hierarchy(birth, 211.3, 1, 120.0).unwrap();
    group.bench_function("snapshot_on_demand", |b| {
        b.iter(|| active_periods_at(black_box(&shallow), black_box(at), 3).unwrap())
    });
    group.finish();
}

fn tables_bench(c: &mut Criterion) {
    let rise = Utc.with_ymd_and_hms(2024, 3, 20, 0, 52, 0).unwrap();
    let set = Utc.with_ymd_and_hms(2024, 3, 20, 13, 1, 0).unwrap();

    let mut group = c.benchmark_group("vedic_tables");
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(147.25)))
    });
    group.bench_function("day_segments", |b| {
        b.iter(|| day_segments(black_box(rise), black_box(set)).unwrap())
    });
    group.bench_function("cross_check_ascendant", |b| {
        b.iter(|| cross_check_ascendant(black_box(100.0), black_box(124.18), 24.18, 0.1))
    });
    group.finish();
}

criterion_group!(benches, dasha_bench, tables_bench);
criterion_main!(benches);
