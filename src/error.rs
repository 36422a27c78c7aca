use thiserror::Error;

use crate::prelude::Frame;

/// Broad classification of an [Error].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input lies outside of the mathematically valid range.
    Domain,
    /// Unsupported or mismatched [Frame] tag.
    InvalidFrame,
    /// Iterative solver exhausted its iteration budget.
    Convergence,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Epochs are expressed as MJD (UTC days) and must lie within the
    /// supported 1900-2100 window.
    #[error("epoch MJD {mjd} outside supported range [{min}, {max}]")]
    EpochOutOfRange { mjd: f64, min: f64, max: f64 },

    #[error("non finite {0} value")]
    NonFinite(&'static str),

    /// The anomaly solver and the element converters only
    /// support elliptical orbits.
    #[error("eccentricity {0} outside valid range [0,1) for elliptical solver")]
    InvalidEccentricity(f64),

    #[error("inclination {0} rad outside valid range [0,π]")]
    InvalidInclination(f64),

    #[error("semi-major axis {0} km must be strictly positive")]
    InvalidSemiMajorAxis(f64),

    #[error("latitude {0}° outside valid range [-90,90]")]
    InvalidLatitude(f64),

    #[error("invalid ellipsoid: semi-major axis {semi_major_axis_km} km, flattening {flattening}")]
    InvalidEllipsoid {
        semi_major_axis_km: f64,
        flattening: f64,
    },

    #[error("gravitational parameter {0} km³.s⁻² must be strictly positive")]
    InvalidGravitationalParameter(f64),

    /// Geodetic latitude is undefined at the center of the ellipsoid.
    #[error("position {0} km is too close to the geocenter")]
    Geocenter(f64),

    /// Position and velocity are (anti)parallel: the orbital plane is undefined.
    #[error("rectilinear orbit: angular momentum {0} km².s⁻¹ is zero")]
    Rectilinear(f64),

    /// Hyperbolic and parabolic trajectories are not supported.
    #[error("unbound orbit: eccentricity {eccentricity}, specific energy {energy} km².s⁻²")]
    UnboundOrbit { eccentricity: f64, energy: f64 },

    #[error("missing velocity: keplerian elements require a full state")]
    MissingVelocity,

    #[error("unknown frame \"{0}\"")]
    UnknownFrame(String),

    /// The [StateVector](crate::prelude::StateVector) tag does not match the requested source.
    #[error("frame mismatch: expecting {expected} state, got {found}")]
    FrameMismatch { expected: Frame, found: Frame },

    /// Keplerian elements only describe motion in non rotating frames.
    #[error("{0} is a rotating frame: keplerian elements need an inertial frame")]
    NonInertialFrame(Frame),

    #[error("kepler equation not converged after {iterations} iterations (|ΔE|={residual:e} rad)")]
    Convergence { iterations: usize, residual: f64 },
}

impl Error {
    /// Returns the [ErrorKind] of this [Error].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownFrame(_) | Self::FrameMismatch { .. } | Self::NonInertialFrame(_) => {
                ErrorKind::InvalidFrame
            },
            Self::Convergence { .. } => ErrorKind::Convergence,
            _ => ErrorKind::Domain,
        }
    }
}
