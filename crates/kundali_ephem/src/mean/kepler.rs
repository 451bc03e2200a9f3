//! Standish mean Keplerian elements and the heliocentric position solver.
//!
//! Elements and rates from E.M. Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL), 1800 AD – 2050 AD
//! table. Good to a few arcminutes over that interval, which is ample for
//! sign- and nakshatra-level placement.

/// Osculating element set at one epoch: semi-major axis (au), eccentricity,
/// inclination, mean longitude, longitude of perihelion, longitude of the
/// ascending node (degrees).
#[derive(Debug, Clone, Copy)]
pub struct Elements {
    pub a: f64,
    pub e: f64,
    pub i_deg: f64,
    pub l_deg: f64,
    pub peri_deg: f64,
    pub node_deg: f64,
}

/// J2000.0 value and per-century rate for each element.
#[derive(Debug, Clone, Copy)]
pub struct MeanElements {
    pub a: (f64, f64),
    pub e: (f64, f64),
    pub i_deg: (f64, f64),
    pub l_deg: (f64, f64),
    pub peri_deg: (f64, f64),
    pub node_deg: (f64, f64),
}

impl MeanElements {
    /// Elements at `t` Julian centuries from J2000.0.
    pub fn at(&self, t: f64) -> Elements {
        Elements {
            a: self.a.0 + self.a.1 * t,
            e: self.e.0 + self.e.1 * t,
            i_deg: self.i_deg.0 + self.i_deg.1 * t,
            l_deg: self.l_deg.0 + self.l_deg.1 * t,
            peri_deg: self.peri_deg.0 + self.peri_deg.1 * t,
            node_deg: self.node_deg.0 + self.node_deg.1 * t,
        }
    }
}

pub const MERCURY: MeanElements = MeanElements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i_deg: (7.004_979_02, -0.005_947_49),
    l_deg: (252.250_323_50, 149_472.674_111_75),
    peri_deg: (77.457_796_28, 0.160_476_89),
    node_deg: (48.330_765_93, -0.125_340_81),
};

pub const VENUS: MeanElements = MeanElements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i_deg: (3.394_676_05, -0.000_788_90),
    l_deg: (181.979_099_50, 58_517.815_387_29),
    peri_deg: (131.602_467_18, 0.002_683_29),
    node_deg: (76.679_842_55, -0.277_694_18),
};

/// Earth-Moon barycenter; close enough to the Earth for mean-element work.
pub const EARTH: MeanElements = MeanElements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i_deg: (-0.000_015_31, -0.012_946_68),
    l_deg: (100.464_571_66, 35_999.372_449_81),
    peri_deg: (102.937_681_93, 0.323_273_64),
    node_deg: (0.0, 0.0),
};

pub const MARS: MeanElements = MeanElements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i_deg: (1.849_691_42, -0.008_131_31),
    l_deg: (-4.553_432_05, 19_140.302_684_99),
    peri_deg: (-23.943_629_59, 0.444_410_88),
    node_deg: (49.559_538_91, -0.292_573_43),
};

pub const JUPITER: MeanElements = MeanElements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i_deg: (1.304_396_95, -0.001_837_14),
    l_deg: (34.396_440_51, 3034.746_127_75),
    peri_deg: (14.728_479_83, 0.212_526_68),
    node_deg: (100.473_909_09, 0.204_691_06),
};

pub const SATURN: MeanElements = MeanElements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i_deg: (2.485_991_87, 0.001_936_09),
    l_deg: (49.954_244_23, 1222.493_622_01),
    peri_deg: (92.598_878_31, -0.418_972_16),
    node_deg: (113.662_424_48, -0.288_677_94),
};

/// Solve Kepler's equation `E − e·sin E = M` by Newton iteration.
///
/// `m_rad` is the mean anomaly in radians. Returns the eccentric anomaly in
/// radians, or `None` if the iteration fails to converge (it cannot for the
/// eccentricities in the table above, but the caller still checks).
pub fn solve_kepler(m_rad: f64, e: f64) -> Option<f64> {
    let m = m_rad.rem_euclid(std::f64::consts::TAU);
    let mut ecc_anom = m + e * m.sin();
    for _ in 0..30 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-12 {
            return Some(ecc_anom);
        }
    }
    None
}

/// Heliocentric ecliptic position (au) from an element set.
///
/// Returns `None` on Kepler non-convergence.
pub fn heliocentric_position(el: &Elements) -> Option<[f64; 3]> {
    let omega = (el.peri_deg - el.node_deg).to_radians();
    let node = el.node_deg.to_radians();
    let incl = el.i_deg.to_radians();
    let m = (el.l_deg - el.peri_deg).to_radians();

    let ecc_anom = solve_kepler(m, el.e)?;

    // Position in the orbital plane, perihelion on +x.
    let xp = el.a * (ecc_anom.cos() - el.e);
    let yp = el.a * (1.0 - el.e * el.e).sqrt() * ecc_anom.sin();

    let (sin_o, cos_o) = omega.sin_cos();
    let (sin_n, cos_n) = node.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    let x = (cos_o * cos_n - sin_o * sin_n * cos_i) * xp
        + (-sin_o * cos_n - cos_o * sin_n * cos_i) * yp;
    let y = (cos_o * sin_n + sin_o * cos_n * cos_i) * xp
        + (-sin_o * sin_n + cos_o * cos_n * cos_i) * yp;
    let z = (sin_o * sin_i) * xp + (cos_o * sin_i) * yp;

    Some([x, y, z])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit() {
        // e = 0: E == M
        let e_anom = solve_kepler(1.234, 0.0).unwrap();
        assert!((e_anom - 1.234).abs() < 1e-12);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &(m, e) in &[(0.5, 0.2056), (3.0, 0.0934), (6.0, 0.0539)] {
            let ecc_anom = solve_kepler(m, e).unwrap();
            let back = ecc_anom - e * ecc_anom.sin();
            assert!((back - m.rem_euclid(std::f64::consts::TAU)).abs() < 1e-10);
        }
    }

    #[test]
    fn earth_distance_near_one_au() {
        let el = EARTH.at(0.0);
        let p = heliocentric_position(&el).unwrap();
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 1.0).abs() < 0.02, "r = {r}");
    }

    #[test]
    fn jupiter_distance_near_five_au() {
        let el = JUPITER.at(0.0);
        let p = heliocentric_position(&el).unwrap();
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 5.2).abs() < 0.3, "r = {r}");
    }
}
