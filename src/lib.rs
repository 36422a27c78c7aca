#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod anomaly;
mod cfg;
pub mod constants;
mod elements;
mod error;
mod frame;
mod geodetic;
mod orbit;
mod orientation;
mod rotation;
mod state;
mod time;
mod transform;
mod utils;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::anomaly::{Anomaly, AnomalySet, AnomalySolver};
    pub use crate::cfg::{Config, DegenerateConventions, KeplerSolverOpts, OrientationOpts};
    pub use crate::constants::EarthConstants;
    pub use crate::elements::{KeplerianElements, OrbitClass};
    pub use crate::error::{Error, ErrorKind};
    pub use crate::frame::Frame;
    pub use crate::geodetic::{Ellipsoid, GeodeticConverter, GeodeticCoordinate};
    pub use crate::orbit::KeplerianCartesianConverter;
    pub use crate::orientation::{EarthOrientation, Nutation, Precession};
    pub use crate::rotation::FrameRotation;
    pub use crate::state::StateVector;
    pub use crate::time::{epoch_from_mjd, MJD_MAX, MJD_MIN};
    pub use crate::transform::FrameTransformer;
    // re-export
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::{Error, ErrorKind};

pub mod models {
    //! Standalone Earth orientation models
    pub use crate::orientation::{gmst_rad, gmst_rate_rad_s, mean_obliquity_rad};
    pub use crate::rotation::{r1, r2, r3};
    pub use crate::utils::{angle_diff, normalize_angle};
}

use prelude::{
    AnomalySolver, Epoch, Frame, GeodeticConverter, GeodeticCoordinate, KeplerSolverOpts,
    KeplerianCartesianConverter, KeplerianElements, StateVector, Vector3,
};

/// Converts this [StateVector] from `from` to `to` [Frame] at this [Epoch],
/// using default Earth constants and orientation parameters.
pub fn convert(
    from: Frame,
    to: Frame,
    epoch: Epoch,
    state: &StateVector,
) -> Result<StateVector, Error> {
    transform::FrameTransformer::default().convert(from, to, epoch, state)
}

/// Converts this ITRS position (km) to WGS84 [GeodeticCoordinate].
pub fn cartesian_to_geodetic(position_km: &Vector3<f64>) -> Result<GeodeticCoordinate, Error> {
    GeodeticConverter::default().cartesian_to_geodetic(position_km)
}

/// Converts WGS84 latitude (ddeg), longitude (ddeg) and altitude (km) to ITRS position (km).
pub fn geodetic_to_cartesian(
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_km: f64,
) -> Result<Vector3<f64>, Error> {
    let coords = GeodeticCoordinate::new(latitude_deg, longitude_deg, altitude_km)?;
    Ok(GeodeticConverter::default().geodetic_to_cartesian(&coords))
}

/// True anomaly (rad) from mean anomaly (rad).
/// Uses default [KeplerSolverOpts] unless specified.
pub fn true_from_mean(
    eccentricity: f64,
    mean_anomaly_rad: f64,
    opts: Option<KeplerSolverOpts>,
) -> Result<f64, Error> {
    AnomalySolver::new(opts.unwrap_or_default()).true_from_mean(eccentricity, mean_anomaly_rad)
}

/// Mean anomaly (rad) from true anomaly (rad).
pub fn mean_from_true(eccentricity: f64, true_anomaly_rad: f64) -> Result<f64, Error> {
    AnomalySolver::default().mean_from_true(eccentricity, true_anomaly_rad)
}

/// True anomaly (rad) from eccentric anomaly (rad).
pub fn true_from_eccentric(eccentricity: f64, eccentric_anomaly_rad: f64) -> Result<f64, Error> {
    AnomalySolver::default().true_from_eccentric(eccentricity, eccentric_anomaly_rad)
}

/// Eccentric anomaly (rad) from true anomaly (rad).
pub fn eccentric_from_true(eccentricity: f64, true_anomaly_rad: f64) -> Result<f64, Error> {
    AnomalySolver::default().eccentric_from_true(eccentricity, true_anomaly_rad)
}

/// Converts [KeplerianElements] to an Earth centered TETED [StateVector].
pub fn elements_to_state(
    elements: &KeplerianElements,
    epoch: Epoch,
) -> Result<StateVector, Error> {
    KeplerianCartesianConverter::default().elements_to_state(elements, epoch)
}

/// Resolves Earth centered [KeplerianElements] from inertial position (km)
/// and velocity (km.s⁻¹).
pub fn state_to_elements(
    position_km: &Vector3<f64>,
    velocity_km_s: &Vector3<f64>,
) -> Result<KeplerianElements, Error> {
    KeplerianCartesianConverter::default().state_to_elements(position_km, velocity_km_s)
}
