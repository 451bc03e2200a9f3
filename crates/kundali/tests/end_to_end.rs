//! Full-stack scenario: one birth instant through chart, panchang, dasha,
//! tara and analysis.

use kundali::{
    ALL_BODIES, Body, ChartConfig, DashaConfig, GeoCoordinate, UtcInstant, Vaar, Varga,
    analyze, calculate_chart, calculate_chart_with, calculate_panchang, calculate_tara_bala,
    vimshottari_dasha,
};

fn birth() -> (UtcInstant, GeoCoordinate) {
    (
        UtcInstant::new(1990, 5, 15, 10.5).unwrap(),
        GeoCoordinate::new(28.6139, 77.2090).unwrap(),
    )
}

#[test]
fn chart_has_nine_placed_bodies() {
    let (instant, place) = birth();
    let chart = calculate_chart(&instant, &place).unwrap();

    assert_eq!(chart.positions.len(), 9);
    for (pos, body) in chart.positions.iter().zip(ALL_BODIES) {
        assert_eq!(pos.body, body);
        assert!((0.0..360.0).contains(&pos.longitude_deg), "{body:?}");
        assert!((1..=12).contains(&pos.sign));
        assert!((1..=12).contains(&pos.house));
        assert!((1..=27).contains(&pos.nakshatra));
        assert!((1..=4).contains(&pos.pada));
    }
    assert!((0.0..360.0).contains(&chart.ascendant_deg));
}

#[test]
fn recompute_is_bit_identical() {
    let (instant, place) = birth();
    let a = calculate_chart(&instant, &place).unwrap();
    let b = calculate_chart(&instant, &place).unwrap();
    for (pa, pb) in a.positions.iter().zip(&b.positions) {
        assert_eq!(pa.longitude_deg.to_bits(), pb.longitude_deg.to_bits());
        assert_eq!(pa.speed_deg_per_day.to_bits(), pb.speed_deg_per_day.to_bits());
    }
    assert_eq!(a.ascendant_deg.to_bits(), b.ascendant_deg.to_bits());
}

#[test]
fn varga_set_follows_config() {
    let (instant, place) = birth();
    let config = ChartConfig {
        vargas: vec![Varga::D1, Varga::D9],
        ..ChartConfig::default()
    };
    let chart = calculate_chart_with(&instant, &place, &config).unwrap();
    assert_eq!(chart.vargas.len(), 2);
    assert_eq!(chart.vargas[1].varga, Varga::D9);
    for sign in chart.vargas[1].signs {
        assert!((1..=12).contains(&sign));
    }
}

#[test]
fn panchang_limbs_in_range() {
    let (instant, place) = birth();
    let p = calculate_panchang(&instant, &place).unwrap();

    assert!((1..=30).contains(&p.tithi_number));
    assert!((1..=27).contains(&p.yoga_number));
    assert!((1..=60).contains(&p.karana_number));
    // 1990-May-15 was a Tuesday everywhere on Earth.
    assert_eq!(p.vaar, Vaar::Mangalavara);

    // The panchang Moon nakshatra matches the chart's Moon.
    let chart = calculate_chart(&instant, &place).unwrap();
    assert_eq!(p.nakshatra.index, chart.position(Body::Moon).nakshatra);
}

#[test]
fn dasha_tree_is_contiguous() {
    let (instant, _) = birth();
    let cfg = DashaConfig { lookahead_years: 120.0, depth: 3 };
    let periods = vimshottari_dasha(&instant, &cfg).unwrap();

    assert!(!periods.is_empty());
    assert!((periods[0].start_jd - instant.to_julian_day()).abs() < 1e-9);

    fn walk(periods: &[kundali::DashaPeriod]) {
        for pair in periods.windows(2) {
            assert!(
                (pair[0].end_jd - pair[1].start_jd).abs() < 1e-6,
                "gap between {:?} and {:?}",
                pair[0].lord,
                pair[1].lord
            );
        }
        for p in periods {
            if !p.children.is_empty() {
                assert!((p.children[0].start_jd - p.start_jd).abs() < 1e-6);
                assert!((p.children[8].end_jd - p.end_jd).abs() < 1e-6);
                walk(&p.children);
            }
        }
    }
    walk(&periods);
}

#[test]
fn tara_self_comparison_is_27() {
    let (instant, place) = birth();
    let chart = calculate_chart(&instant, &place).unwrap();
    let moon = chart.position(Body::Moon).longitude_deg;
    let tara = calculate_tara_bala(moon, moon);
    assert_eq!(tara.count, 27);
}

#[test]
fn analysis_is_stable() {
    let (instant, place) = birth();
    let chart = calculate_chart(&instant, &place).unwrap();
    let report = analyze(&chart);
    assert_eq!(report, analyze(&chart));
    for pair in report.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn chart_serializes_to_json() {
    let (instant, place) = birth();
    let chart = calculate_chart(&instant, &place).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["positions"].as_array().unwrap().len(), 9);
    assert!(json["ascendant_deg"].is_number());
}
