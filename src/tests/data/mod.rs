//! Reference data shared by the test suites
use crate::prelude::{epoch_from_mjd, Anomaly, Epoch, KeplerianElements, Vector3};

/// 2023-09-11T12:00:00 UTC
pub const REFERENCE_MJD: f64 = 60197.5;

/// Earth fixed reference site (km), above 23.5°N 137.5°E
pub const REFERENCE_ITRS_KM: (f64, f64, f64) = (-5413.11749016, 4960.20830485, 3177.18312508);

pub const REFERENCE_LATITUDE_DEG: f64 = 23.511926934;

pub const REFERENCE_LONGITUDE_DEG: f64 = 137.5;

pub const REFERENCE_ALTITUDE_KM: f64 = 1625.2463743;

pub fn reference_epoch() -> Epoch {
    epoch_from_mjd(REFERENCE_MJD).unwrap()
}

pub fn reference_itrs_position() -> Vector3<f64> {
    let (x, y, z) = REFERENCE_ITRS_KM;
    Vector3::new(x, y, z)
}

/// Moderately eccentric, slightly inclined orbit
pub fn reference_elements() -> KeplerianElements {
    KeplerianElements::new(10000.0, 0.4, 0.1, 0.2, 0.3, Anomaly::Mean(0.5)).unwrap()
}

/// Cartesian state of [reference_elements] (km, km.s⁻¹)
pub fn reference_state() -> (Vector3<f64>, Vector3<f64>) {
    (
        Vector3::new(-371.699100768, 7116.797929520, 707.237130596),
        Vector3::new(-8.196341526980, 2.035988089022, 0.363589329685),
    )
}
