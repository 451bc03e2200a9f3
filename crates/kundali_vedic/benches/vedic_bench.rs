use criterion::{Criterion, black_box, criterion_group, criterion_main};

use kundali_chart::{ChartConfig, build_chart};
use kundali_ephem::{Ephemeris, GeoCoordinate};
use kundali_time::UtcInstant;
use kundali_vedic::{
    DashaConfig, analyze, calculate_tara_bala, panchang_from_longitudes, vimshottari_from_moon,
};

fn panchang_bench(c: &mut Criterion) {
    let jd = 2_448_026.9375;

    let mut group = c.benchmark_group("panchang");
    group.bench_function("from_longitudes", |b| {
        b.iter(|| panchang_from_longitudes(black_box(31.2), black_box(211.7), black_box(jd)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_448_026.9375;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari_depth_1", |b| {
        let cfg = DashaConfig { lookahead_years: 120.0, depth: 1 };
        b.iter(|| vimshottari_from_moon(black_box(211.7), black_box(birth_jd), &cfg))
    });
    group.bench_function("vimshottari_depth_3", |b| {
        let cfg = DashaConfig { lookahead_years: 120.0, depth: 3 };
        b.iter(|| vimshottari_from_moon(black_box(211.7), black_box(birth_jd), &cfg))
    });
    group.finish();
}

fn tara_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tara");
    group.bench_function("tara_bala", |b| {
        b.iter(|| calculate_tara_bala(black_box(100.0), black_box(211.7)))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let eph = Ephemeris::with_mean_source();
    let instant = UtcInstant::new(1990, 5, 15, 10.5).unwrap();
    let coordinate = GeoCoordinate::new(28.6139, 77.2090).unwrap();
    let chart = build_chart(&eph, &instant, &coordinate, &ChartConfig::default()).unwrap();

    let mut group = c.benchmark_group("analysis");
    group.bench_function("build_chart", |b| {
        b.iter(|| build_chart(&eph, &instant, &coordinate, &ChartConfig::default()))
    });
    group.bench_function("analyze", |b| b.iter(|| analyze(black_box(&chart))));
    group.finish();
}

criterion_group!(benches, panchang_bench, dasha_bench, tara_bench, analysis_bench);
criterion_main!(benches);
