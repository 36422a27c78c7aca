//! Earth orientation: sidereal time, precession, nutation and polar motion.
use log::trace;
use nalgebra::Matrix3;

use crate::{
    cfg::OrientationOpts,
    constants::ARCSEC_TO_RAD,
    error::Error,
    prelude::Epoch,
    rotation::{r1, r2, r3, FrameRotation},
    time::{check_epoch, julian_centuries_tt, julian_date_ut1},
    utils::normalize_angle,
};

mod nutation;
mod precession;
mod sidereal;

pub use nutation::{mean_obliquity_rad, Nutation};
pub use precession::Precession;
pub use sidereal::{gmst_rad, gmst_rate_rad_s};

/// [EarthOrientation] gathers every time dependent angle needed
/// to relate the Earth fixed frame to the inertial frames, at one [Epoch].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EarthOrientation {
    /// [Epoch] of evaluation
    pub epoch: Epoch,
    /// Julian centuries TT since J2000.0
    pub t_tt: f64,
    /// UT1 Julian date
    pub jd_ut1: f64,
    /// Greenwich Mean Sidereal Time (rad)
    pub gmst_rad: f64,
    /// Equation of the equinoxes (rad)
    pub equation_of_equinoxes_rad: f64,
    /// Mean obliquity of the ecliptic (rad)
    pub mean_obliquity_rad: f64,
    /// [Precession] angles
    pub precession: Precession,
    /// [Nutation] angles
    pub nutation: Nutation,
    /// Pole coordinates (rad)
    pub polar_motion_rad: (f64, f64),
}

impl EarthOrientation {
    /// Evaluates the [EarthOrientation] at this [Epoch].
    /// Fails if the [Epoch] lies outside the supported time frame.
    pub fn at(epoch: Epoch, opts: &OrientationOpts) -> Result<Self, Error> {
        check_epoch(epoch)?;

        let t_tt = julian_centuries_tt(epoch);
        let jd_ut1 = julian_date_ut1(epoch, opts.dut1_s);

        let nutation = Nutation::at(t_tt);

        let s = Self {
            epoch,
            t_tt,
            jd_ut1,
            gmst_rad: gmst_rad(jd_ut1),
            equation_of_equinoxes_rad: nutation.equation_of_equinoxes(t_tt),
            mean_obliquity_rad: mean_obliquity_rad(t_tt),
            precession: Precession::at(t_tt),
            nutation,
            polar_motion_rad: (
                opts.polar_motion_x_arcsec * ARCSEC_TO_RAD,
                opts.polar_motion_y_arcsec * ARCSEC_TO_RAD,
            ),
        };

        trace!(
            "{} - T={:.9} gmst={:.9} eqeq={:.3E} dpsi={:.3E} deps={:.3E}",
            epoch,
            t_tt,
            s.gmst_rad,
            s.equation_of_equinoxes_rad,
            s.nutation.longitude_rad,
            s.nutation.obliquity_rad
        );

        Ok(s)
    }

    /// Greenwich Apparent Sidereal Time (rad, [0, 2π))
    pub fn gast_rad(&self) -> f64 {
        normalize_angle(self.gmst_rad + self.equation_of_equinoxes_rad)
    }

    /// True obliquity of the ecliptic (rad)
    pub fn true_obliquity_rad(&self) -> f64 {
        self.mean_obliquity_rad + self.nutation.obliquity_rad
    }

    /// GCRS to MEMED rotation
    pub fn precession_matrix(&self) -> Matrix3<f64> {
        self.precession.matrix()
    }

    /// MEMED to TETED rotation
    pub fn nutation_matrix(&self) -> Matrix3<f64> {
        self.nutation.matrix(self.mean_obliquity_rad)
    }

    /// TETED to TEME rotation
    pub fn equinox_matrix(&self) -> Matrix3<f64> {
        r3(self.equation_of_equinoxes_rad)
    }

    /// ITRS to pseudo Earth fixed (PEF) rotation
    pub fn polar_motion_matrix(&self) -> Matrix3<f64> {
        let (xp, yp) = self.polar_motion_rad;
        r1(yp) * r2(xp)
    }

    /// TETED to pseudo Earth fixed (PEF) rotation, spinning at `angular_velocity_rad_s`.
    pub fn earth_rotation(&self, angular_velocity_rad_s: f64) -> FrameRotation {
        FrameRotation::spin_z(self.gast_rad(), angular_velocity_rad_s)
    }
}
