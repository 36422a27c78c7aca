//! Truncated IAU 1980 nutation: the 18 largest lunisolar terms,
//! accurate to about 0.01" over 1900-2100.
use crate::constants::ARCSEC_TO_RAD;
use crate::rotation::{r1, r3};

use nalgebra::Matrix3;

/// Series amplitudes are tabulated in 0.1 mas
const AMPLITUDE_TO_ARCSEC: f64 = 1.0E-4;

/// Each row: `[D, M, M', F, Ω]` multipliers, then
/// `(S₀, S₁)` for Δψ and `(C₀, C₁)` for Δε, as `S₀ + S₁ T`.
#[rustfmt::skip]
const TERMS: [([i8; 5], f64, f64, f64, f64); 18] = [
    //  D   M  M'   F   Ω         S0      S1       C0     C1
    ([ 0,  0,  0,  0,  1], -171996.0, -174.2, 92025.0,  8.9),
    ([-2,  0,  0,  2,  2],  -13187.0,   -1.6,  5736.0, -3.1),
    ([ 0,  0,  0,  2,  2],   -2274.0,   -0.2,   977.0, -0.5),
    ([ 0,  0,  0,  0,  2],    2062.0,    0.2,  -895.0,  0.5),
    ([ 0,  1,  0,  0,  0],    1426.0,   -3.4,    54.0, -0.1),
    ([ 0,  0,  1,  0,  0],     712.0,    0.1,    -7.0,  0.0),
    ([-2,  1,  0,  2,  2],    -517.0,    1.2,   224.0, -0.6),
    ([ 0,  0,  0,  2,  1],    -386.0,   -0.4,   200.0,  0.0),
    ([ 0,  0,  1,  2,  2],    -301.0,    0.0,   129.0, -0.1),
    ([-2, -1,  0,  2,  2],     217.0,   -0.5,   -95.0,  0.3),
    ([-2,  0,  1,  0,  0],    -158.0,    0.0,     0.0,  0.0),
    ([-2,  0,  0,  2,  1],     129.0,    0.1,   -70.0,  0.0),
    ([ 0,  0, -1,  2,  2],     123.0,    0.0,   -53.0,  0.0),
    ([ 2,  0,  0,  0,  0],      63.0,    0.0,     0.0,  0.0),
    ([ 0,  0,  1,  0,  1],      63.0,    0.1,   -33.0,  0.0),
    ([ 2,  0, -1,  2,  2],     -59.0,    0.0,    26.0,  0.0),
    ([ 0,  0, -1,  0,  1],     -58.0,   -0.1,    32.0,  0.0),
    ([ 0,  0,  1,  2,  1],     -51.0,    0.0,    27.0,  0.0),
];

/// Delaunay arguments `[D, M, M', F, Ω]` in radians,
/// from Julian centuries TT since J2000.0.
pub(crate) fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    // mean elongation of the Moon from the Sun
    let d = 297.85036 + 445267.111480 * t - 0.0019142 * t2 + t3 / 189474.0;
    // mean anomaly of the Sun
    let m = 357.52772 + 35999.050340 * t - 0.0001603 * t2 - t3 / 300000.0;
    // mean anomaly of the Moon
    let mp = 134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0;
    // Moon argument of latitude
    let f = 93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0;
    // longitude of the Moon ascending node
    let om = 125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0;

    [d, m, mp, f, om].map(|deg| deg.rem_euclid(360.0).to_radians())
}

/// IAU 1980 mean obliquity of the ecliptic (rad)
pub fn mean_obliquity_rad(t: f64) -> f64 {
    let eps_arcsec = 84381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    eps_arcsec * ARCSEC_TO_RAD
}

/// Nutation in longitude and obliquity.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Nutation {
    /// Δψ (rad)
    pub longitude_rad: f64,
    /// Δε (rad)
    pub obliquity_rad: f64,
}

impl Nutation {
    /// Evaluates the series at `t` Julian centuries TT since J2000.0.
    pub fn at(t: f64) -> Self {
        let args = fundamental_arguments(t);

        let (mut dpsi, mut deps) = (0.0_f64, 0.0_f64);

        for (mult, s0, s1, c0, c1) in TERMS.iter() {
            let arg = mult
                .iter()
                .zip(args.iter())
                .map(|(k, a)| *k as f64 * a)
                .sum::<f64>();

            let (sin, cos) = arg.sin_cos();
            dpsi += (s0 + s1 * t) * sin;
            deps += (c0 + c1 * t) * cos;
        }

        Self {
            longitude_rad: dpsi * AMPLITUDE_TO_ARCSEC * ARCSEC_TO_RAD,
            obliquity_rad: deps * AMPLITUDE_TO_ARCSEC * ARCSEC_TO_RAD,
        }
    }

    /// Equation of the equinoxes (rad), with the two 1994 correction terms.
    pub fn equation_of_equinoxes(&self, t: f64) -> f64 {
        let om = fundamental_arguments(t)[4];
        let true_obliquity = mean_obliquity_rad(t) + self.obliquity_rad;
        self.longitude_rad * true_obliquity.cos()
            + (0.00264 * om.sin() + 0.000063 * (2.0 * om).sin()) * ARCSEC_TO_RAD
    }

    /// MEMED to TETED rotation, given the mean obliquity (rad).
    pub fn matrix(&self, mean_obliquity: f64) -> Matrix3<f64> {
        let true_obliquity = mean_obliquity + self.obliquity_rad;
        r1(-true_obliquity) * r3(-self.longitude_rad) * r1(mean_obliquity)
    }
}
