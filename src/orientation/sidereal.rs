//! Greenwich Mean Sidereal Time, IAU 1982 formulation.
use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY};

use std::f64::consts::TAU;

/// Seconds of sidereal time to radians
const SIDEREAL_S_TO_RAD: f64 = TAU / SECONDS_PER_DAY;

/// UT1 centuries since J2000.0
fn ut1_centuries(jd_ut1: f64) -> f64 {
    (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Greenwich Mean Sidereal Time (rad, [0, 2π)), at given UT1 Julian date.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let tu = ut1_centuries(jd_ut1);
    let gmst_s = 67310.54841
        + (876600.0 * 3600.0 + 8640184.812866) * tu
        + 0.093104 * tu * tu
        - 6.2E-6 * tu * tu * tu;
    gmst_s.rem_euclid(SECONDS_PER_DAY) * SIDEREAL_S_TO_RAD
}

/// GMST rate of change (rad.s⁻¹), at given UT1 Julian date.
pub fn gmst_rate_rad_s(jd_ut1: f64) -> f64 {
    let tu = ut1_centuries(jd_ut1);
    let ds_dtu = 876600.0 * 3600.0 + 8640184.812866 + 2.0 * 0.093104 * tu - 3.0 * 6.2E-6 * tu * tu;
    ds_dtu / (DAYS_PER_JULIAN_CENTURY * SECONDS_PER_DAY) * SIDEREAL_S_TO_RAD
}

#[cfg(test)]
mod test {
    use super::{gmst_rad, gmst_rate_rad_s};
    use crate::constants::EARTH_ANGULAR_VEL_RAD;

    #[test]
    fn gmst_j2000() {
        // 18h41m50.548s
        let gmst = gmst_rad(2451545.0).to_degrees();
        assert!((gmst - 280.460618).abs() < 1.0E-5, "GMST={}°", gmst);
    }

    #[test]
    fn gmst_1987() {
        // 1987-04-10T00:00:00 UT1: 13h10m46.3668s
        let gmst = gmst_rad(2446895.5).to_degrees();
        assert!((gmst - 197.693195).abs() < 1.0E-5, "GMST={}°", gmst);

        // 1987-04-10T19:21:00 UT1: 8h34m57.0896s
        let gmst = gmst_rad(2446895.5 + (19.0 + 21.0 / 60.0) / 24.0).to_degrees();
        assert!((gmst - 128.737873).abs() < 1.0E-5, "GMST={}°", gmst);
    }

    #[test]
    fn gmst_rate() {
        let rate = gmst_rate_rad_s(2460197.5);
        assert!((rate - EARTH_ANGULAR_VEL_RAD).abs() < 1.0E-10, "rate={}", rate);
    }
}
