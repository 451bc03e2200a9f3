//! The rule catalogue.
//!
//! Each rule is a pure function of the chart, emits at most one finding,
//! and knows nothing about the others. Thresholds and dignity checks come
//! from the tables module.

use kundali_chart::ChartData;
use kundali_ephem::Body;
use kundali_time::forward_distance_deg;

use super::tables::{
    NATURAL_BENEFICS, TRUE_PLANETS, debilitation_sign, exaltation_sign, own_signs, sign_distance,
};
use super::{Finding, FindingKind};

/// A rule inspects the chart and may emit one finding.
pub type Rule = fn(&ChartData) -> Option<Finding>;

/// The ordered registry. Registration order breaks score ties in the final
/// report.
pub const RULES: &[(&str, Rule)] = &[
    ("gajakesari", gajakesari),
    ("ruchaka", ruchaka),
    ("bhadra", bhadra),
    ("hamsa", hamsa),
    ("malavya", malavya),
    ("shasha", shasha),
    ("kaal_sarpa", kaal_sarpa),
    ("adhi_yoga", adhi_yoga),
    ("mangal_dosha", mangal_dosha),
    ("kemadruma", kemadruma),
    ("budhaditya", budhaditya),
    ("chandra_mangal", chandra_mangal),
    ("exalted_planets", exalted_planets),
    ("debilitated_planets", debilitated_planets),
    ("retrograde_cluster", retrograde_cluster),
];

/// Houses counted from the ascendant that make a kendra.
const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Jupiter in a kendra counted from the Moon.
fn gajakesari(chart: &ChartData) -> Option<Finding> {
    let moon = chart.position(Body::Moon);
    let jupiter = chart.position(Body::Jupiter);
    let from_moon = sign_distance(moon.sign, jupiter.sign);
    if !KENDRA_HOUSES.contains(&from_moon) {
        return None;
    }
    Some(Finding {
        kind: FindingKind::Yoga,
        key: "gajakesari",
        score: 8.0,
        bodies: vec![Body::Moon, Body::Jupiter],
        houses: vec![moon.house, jupiter.house],
    })
}

/// Shared shape of the five Mahapurusha yogas: the planet sits in a kendra
/// house in its own or exaltation sign.
fn mahapurusha(chart: &ChartData, body: Body, key: &'static str) -> Option<Finding> {
    let pos = chart.position(body);
    if !KENDRA_HOUSES.contains(&pos.house) {
        return None;
    }
    let dignified =
        own_signs(body).contains(&pos.sign) || exaltation_sign(body) == Some(pos.sign);
    if !dignified {
        return None;
    }
    Some(Finding {
        kind: FindingKind::Yoga,
        key,
        score: 7.5,
        bodies: vec![body],
        houses: vec![pos.house],
    })
}

fn ruchaka(chart: &ChartData) -> Option<Finding> {
    mahapurusha(chart, Body::Mars, "ruchaka")
}

fn bhadra(chart: &ChartData) -> Option<Finding> {
    mahapurusha(chart, Body::Mercury, "bhadra")
}

fn hamsa(chart: &ChartData) -> Option<Finding> {
    mahapurusha(chart, Body::Jupiter, "hamsa")
}

fn malavya(chart: &ChartData) -> Option<Finding> {
    mahapurusha(chart, Body::Venus, "malavya")
}

fn shasha(chart: &ChartData) -> Option<Finding> {
    mahapurusha(chart, Body::Saturn, "shasha")
}

/// All seven planets hemmed inside one half of the Rahu-Ketu axis.
fn kaal_sarpa(chart: &ChartData) -> Option<Finding> {
    let rahu = chart.position(Body::Rahu).longitude_deg;
    let planets = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
    ];

    let ahead_of_rahu =
        |body: Body| forward_distance_deg(rahu, chart.position(body).longitude_deg) < 180.0;

    let first_side = ahead_of_rahu(planets[0]);
    if planets[1..].iter().any(|&b| ahead_of_rahu(b) != first_side) {
        return None;
    }
    Some(Finding {
        kind: FindingKind::Dosha,
        key: "kaal_sarpa",
        score: 7.0,
        bodies: vec![Body::Rahu, Body::Ketu],
        houses: vec![
            chart.position(Body::Rahu).house,
            chart.position(Body::Ketu).house,
        ],
    })
}

/// All three natural benefics in the 6th, 7th or 8th sign from the Moon.
fn adhi_yoga(chart: &ChartData) -> Option<Finding> {
    let moon_sign = chart.position(Body::Moon).sign;
    let placed = NATURAL_BENEFICS.iter().all(|&b| {
        let d = sign_distance(moon_sign, chart.position(b).sign);
        (6..=8).contains(&d)
    });
    if !placed {
        return None;
    }
    Some(Finding {
        kind: FindingKind::Yoga,
        key: "adhi_yoga",
        score: 6.5,
        bodies: NATURAL_BENEFICS.to_vec(),
        houses: NATURAL_BENEFICS
            .iter()
            .map(|&b| chart.position(b).house)
            .collect(),
    })
}

/// Mars in one of the houses that afflict partnership.
fn mangal_dosha(chart: &ChartData) -> Option<Finding> {
    let mars = chart.position(Body::Mars);
    if ![1, 2, 4, 7, 8, 12].contains(&mars.house) {
        return None;
    }
    Some(Finding {
        kind: FindingKind::Dosha,
        key: "mangal_dosha",
        score: 6.0,
        bodies: vec![Body::Mars],
        houses: vec![mars.house],
    })
}

/// Moon with no planetary neighbor in the adjacent signs.
fn kemadruma(chart: &ChartData) -> Option<Finding> {
    let moon = chart.position(Body::Moon);
    let supported = TRUE_PLANETS.iter().any(|&b| {
        let d = sign_distance(moon.sign, chart.position(b).sign);
        d == 2 || d == 12
    });
    if supported {
        return None;
    }
    Some(Finding {
        kind: FindingKind::Dosha,
        key: "kemadruma",
        score: 5.5,
        bodies: vec![Body::Moon],
        houses: vec![moon.house],
    })
}

/// Sun and Mercury conjunct by sign.
fn budhaditya(chart: &ChartData) -> Option<Finding> {
    let sun = chart.position(Body::Sun);
    let mercury = chart.position(Body::Mercury);
    if sun.sign != mercury.sign {
        return None;
    }
    Some(Finding {
        kind: FindingKind::Yoga,
        key: "budhaditya",
        score: 5.0,
        bodies: vec![Body::Sun, Body::Mercury],
        houses: vec![sun.house],
    })
}

/// Moon and Mars conjunct by sign.
fn chandra_mangal(chart: &ChartData) -> Option<Finding> {
    let moon = chart.position(Body::Moon);
    let mars = chart.position(Body::Mars);
    if moon.sign != mars.sign {
        return None;
    }
    Some(Finding {
        kind: FindingKind::Yoga,
        key: "chandra_mangal",
        score: 5.0,
        bodies: vec![Body::Moon, Body::Mars],
        houses: vec![moon.house],
    })
}

/// One finding naming every exalted body.
fn exalted_planets(chart: &ChartData) -> Option<Finding> {
    let exalted: Vec<Body> = chart
        .positions
        .iter()
        .filter(|p| exaltation_sign(p.body) == Some(p.sign))
        .map(|p| p.body)
        .collect();
    if exalted.is_empty() {
        return None;
    }
    let houses = exalted.iter().map(|&b| chart.position(b).house).collect();
    Some(Finding {
        kind: FindingKind::Strength,
        key: "exalted_planets",
        score: 4.0,
        bodies: exalted,
        houses,
    })
}

/// One finding naming every debilitated body.
fn debilitated_planets(chart: &ChartData) -> Option<Finding> {
    let debilitated: Vec<Body> = chart
        .positions
        .iter()
        .filter(|p| debilitation_sign(p.body) == Some(p.sign))
        .map(|p| p.body)
        .collect();
    if debilitated.is_empty() {
        return None;
    }
    let houses = debilitated.iter().map(|&b| chart.position(b).house).collect();
    Some(Finding {
        kind: FindingKind::Caution,
        key: "debilitated_planets",
        score: 4.0,
        bodies: debilitated,
        houses,
    })
}

/// Three or more of the five planets retrograde at once.
fn retrograde_cluster(chart: &ChartData) -> Option<Finding> {
    let retro: Vec<Body> = TRUE_PLANETS
        .iter()
        .copied()
        .filter(|&b| chart.position(b).retrograde)
        .collect();
    if retro.len() < 3 {
        return None;
    }
    let houses = retro.iter().map(|&b| chart.position(b).house).collect();
    Some(Finding {
        kind: FindingKind::Caution,
        key: "retrograde_cluster",
        score: 3.0,
        bodies: retro,
        houses,
    })
}
