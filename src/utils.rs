use std::f64::consts::{PI, TAU};

/// Reduces angle (rad) to [0, 2π).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid may round up to 2π for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Returns principal difference a - b (rad), in [-π, π).
pub fn angle_diff(a: f64, b: f64) -> f64 {
    (a - b + PI).rem_euclid(TAU) - PI
}

/// Wraps longitude (ddeg) to [-180, 180].
pub(crate) fn wrap_longitude_deg(lon_deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon_deg) {
        lon_deg
    } else {
        (lon_deg + 180.0).rem_euclid(360.0) - 180.0
    }
}
