//! Truncated lunar theory (Meeus, *Astronomical Algorithms*, Ch. 47).
//!
//! Keeps the largest periodic terms of the ELP-2000/82 reduction: enough
//! for a couple of arcminutes in longitude, far inside one nakshatra pada.

use kundali_time::normalize_360;

/// Fundamental arguments in degrees at `t` Julian centuries from J2000.0.
struct Arguments {
    /// Mean longitude of the Moon.
    lp: f64,
    /// Mean elongation of the Moon from the Sun.
    d: f64,
    /// Mean anomaly of the Sun.
    m: f64,
    /// Mean anomaly of the Moon.
    mp: f64,
    /// Argument of latitude.
    f: f64,
}

fn arguments(t: f64) -> Arguments {
    Arguments {
        lp: normalize_360(218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t),
        d: normalize_360(297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t),
        m: normalize_360(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t),
        mp: normalize_360(134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t),
        f: normalize_360(93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t),
    }
}

/// Longitude series: coefficient (degrees) and multipliers of (D, M, M′, F).
const LON_TERMS: [(f64, i8, i8, i8, i8); 14] = [
    (6.288_774, 0, 0, 1, 0),
    (1.274_027, 2, 0, -1, 0),
    (0.658_314, 2, 0, 0, 0),
    (0.213_618, 0, 0, 2, 0),
    (-0.185_116, 0, 1, 0, 0),
    (-0.114_332, 0, 0, 0, 2),
    (0.058_793, 2, 0, -2, 0),
    (0.057_066, 2, -1, -1, 0),
    (0.053_322, 2, 0, 1, 0),
    (0.045_758, 2, -1, 0, 0),
    (-0.040_923, 0, 1, -1, 0),
    (-0.034_720, 1, 0, 0, 0),
    (-0.030_383, 0, 1, 1, 0),
    (0.015_327, 2, 0, 0, -2),
];

/// Latitude series: coefficient (degrees) and multipliers of (D, M, M′, F).
const LAT_TERMS: [(f64, i8, i8, i8, i8); 8] = [
    (5.128_122, 0, 0, 0, 1),
    (0.280_602, 0, 0, 1, 1),
    (0.277_693, 0, 0, 1, -1),
    (0.173_237, 2, 0, 0, -1),
    (0.055_413, 2, 0, -1, 1),
    (0.046_271, 2, 0, -1, -1),
    (0.032_573, 2, 0, 0, 1),
    (0.017_198, 0, 0, 2, 1),
];

fn sum_series(args: &Arguments, terms: &[(f64, i8, i8, i8, i8)]) -> f64 {
    terms
        .iter()
        .map(|&(coeff, cd, cm, cmp, cf)| {
            let arg = cd as f64 * args.d + cm as f64 * args.m + cmp as f64 * args.mp
                + cf as f64 * args.f;
            coeff * arg.to_radians().sin()
        })
        .sum()
}

/// Geocentric tropical ecliptic longitude and latitude of the Moon in
/// degrees at `t` Julian centuries from J2000.0.
pub fn moon_position(t: f64) -> (f64, f64) {
    let args = arguments(t);
    let lon = normalize_360(args.lp + sum_series(&args, &LON_TERMS));
    let lat = sum_series(&args, &LAT_TERMS);
    (lon, lat)
}
