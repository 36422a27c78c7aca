#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{constants::EarthConstants, geodetic::Ellipsoid};

mod orientation;
mod solver;

pub use orientation::OrientationOpts;
pub use solver::KeplerSolverOpts;

const fn default_circular_aop() -> f64 {
    0.0
}

const fn default_equatorial_raan() -> f64 {
    0.0
}

const fn default_eccentricity_tolerance() -> f64 {
    1.0E-10
}

const fn default_inclination_tolerance() -> f64 {
    1.0E-10
}

/// Angles that are undefined for circular and/or equatorial orbits
/// are replaced by these conventions when elements are resolved from
/// a Cartesian state. Resulting elements are convention dependent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegenerateConventions {
    /// Argument of periapsis (rad) used when the orbit is circular.
    /// The anomaly is then measured from this direction.
    #[cfg_attr(feature = "serde", serde(default = "default_circular_aop"))]
    pub circular_aop_rad: f64,
    /// Right ascension of the ascending node (rad) used when the orbit is equatorial.
    #[cfg_attr(feature = "serde", serde(default = "default_equatorial_raan"))]
    pub equatorial_raan_rad: f64,
    /// Orbits with eccentricity below this value are circular.
    #[cfg_attr(feature = "serde", serde(default = "default_eccentricity_tolerance"))]
    pub eccentricity_tolerance: f64,
    /// Orbits with |sin(i)| below this value are equatorial.
    #[cfg_attr(feature = "serde", serde(default = "default_inclination_tolerance"))]
    pub inclination_tolerance: f64,
}

impl Default for DegenerateConventions {
    fn default() -> Self {
        Self {
            circular_aop_rad: default_circular_aop(),
            equatorial_raan_rad: default_equatorial_raan(),
            eccentricity_tolerance: default_eccentricity_tolerance(),
            inclination_tolerance: default_inclination_tolerance(),
        }
    }
}

/// [Config] gathers the physical constants and numerical settings
/// shared by all converters.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// [EarthConstants] (gravitational parameter, rotation rate..)
    #[cfg_attr(feature = "serde", serde(default))]
    pub constants: EarthConstants,
    /// Reference [Ellipsoid] for geodetic coordinates
    #[cfg_attr(feature = "serde", serde(default))]
    pub ellipsoid: Ellipsoid,
    /// Kepler equation [KeplerSolverOpts]
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: KeplerSolverOpts,
    /// Earth [OrientationOpts]
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: OrientationOpts,
    /// [DegenerateConventions] for circular / equatorial orbits
    #[cfg_attr(feature = "serde", serde(default))]
    pub conventions: DegenerateConventions,
}

impl Config {
    /// Copies and returns [Config] with updated [EarthConstants]
    pub fn with_constants(&self, constants: EarthConstants) -> Self {
        let mut s = *self;
        s.constants = constants;
        s
    }

    /// Copies and returns [Config] with updated [Ellipsoid]
    pub fn with_ellipsoid(&self, ellipsoid: Ellipsoid) -> Self {
        let mut s = *self;
        s.ellipsoid = ellipsoid;
        s
    }

    /// Copies and returns [Config] with updated [KeplerSolverOpts]
    pub fn with_solver_opts(&self, solver: KeplerSolverOpts) -> Self {
        let mut s = *self;
        s.solver = solver;
        s
    }

    /// Copies and returns [Config] with updated [OrientationOpts]
    pub fn with_orientation_opts(&self, orientation: OrientationOpts) -> Self {
        let mut s = *self;
        s.orientation = orientation;
        s
    }

    /// Copies and returns [Config] with updated [DegenerateConventions]
    pub fn with_conventions(&self, conventions: DegenerateConventions) -> Self {
        let mut s = *self;
        s.conventions = conventions;
        s
    }
}
