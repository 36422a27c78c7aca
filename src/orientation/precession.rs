//! IAU 1976 precession, from the J2000.0 mean equator and equinox
//! to the mean equator and equinox of date.
use crate::constants::ARCSEC_TO_RAD;
use crate::rotation::{r2, r3};

use nalgebra::Matrix3;

/// Equatorial precession angles ζ, θ, z.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Precession {
    /// ζ (rad)
    pub zeta_rad: f64,
    /// θ (rad)
    pub theta_rad: f64,
    /// z (rad)
    pub z_rad: f64,
}

impl Precession {
    /// Evaluates the angles at `t` Julian centuries TT since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            zeta_rad: (2306.2181 * t + 0.30188 * t2 + 0.017998 * t3) * ARCSEC_TO_RAD,
            theta_rad: (2004.3109 * t - 0.42665 * t2 - 0.041833 * t3) * ARCSEC_TO_RAD,
            z_rad: (2306.2181 * t + 1.09468 * t2 + 0.018203 * t3) * ARCSEC_TO_RAD,
        }
    }

    /// GCRS (J2000.0 mean) to MEMED rotation
    pub fn matrix(&self) -> Matrix3<f64> {
        r3(-self.z_rad) * r2(self.theta_rad) * r3(-self.zeta_rad)
    }
}
