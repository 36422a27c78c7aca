//! Mean, eccentric and true anomalies of elliptical orbits.
use log::{debug, error, trace};
use std::f64::consts::PI;

use crate::{
    cfg::KeplerSolverOpts,
    error::Error,
    utils::{angle_diff, normalize_angle},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Above this eccentricity, Newton iterations are seeded at π
const HIGH_ECCENTRICITY_SEED: f64 = 0.8;

/// Relative stop criterion for tolerances below the float resolution
const ULP_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Orbital position [Anomaly] (rad).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Anomaly {
    /// Mean anomaly (rad)
    Mean(f64),
    /// Eccentric anomaly (rad)
    Eccentric(f64),
    /// True anomaly (rad)
    True(f64),
}

impl Anomaly {
    /// Returns the angle (rad), whatever the kind.
    pub fn value_rad(&self) -> f64 {
        match self {
            Self::Mean(v) | Self::Eccentric(v) | Self::True(v) => *v,
        }
    }

    /// Copies and returns this [Anomaly] reduced to [0, 2π).
    pub fn normalized(&self) -> Self {
        match self {
            Self::Mean(v) => Self::Mean(normalize_angle(*v)),
            Self::Eccentric(v) => Self::Eccentric(normalize_angle(*v)),
            Self::True(v) => Self::True(normalize_angle(*v)),
        }
    }
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mean(v) => write!(f, "M={:.9} rad", v),
            Self::Eccentric(v) => write!(f, "E={:.9} rad", v),
            Self::True(v) => write!(f, "ν={:.9} rad", v),
        }
    }
}

/// The three anomalies of one orbital position (rad, [0, 2π)).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnomalySet {
    pub mean: f64,
    pub eccentric: f64,
    pub true_anomaly: f64,
}

/// [AnomalySolver] converts between anomalies, solving Kepler's equation
/// `M = E - e sin(E)` by Newton-Raphson iterations.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AnomalySolver {
    opts: KeplerSolverOpts,
}

fn check_eccentricity(e: f64) -> Result<(), Error> {
    if !e.is_finite() || !(0.0..1.0).contains(&e) {
        return Err(Error::InvalidEccentricity(e));
    }
    Ok(())
}

fn check_angle(angle: f64) -> Result<(), Error> {
    if !angle.is_finite() {
        return Err(Error::NonFinite("anomaly"));
    }
    Ok(())
}

impl AnomalySolver {
    pub fn new(opts: KeplerSolverOpts) -> Self {
        Self { opts }
    }

    /// Returns [KeplerSolverOpts] currently in use
    pub fn opts(&self) -> &KeplerSolverOpts {
        &self.opts
    }

    /// Solves Kepler's equation for the eccentric anomaly (rad).
    pub fn eccentric_from_mean(&self, e: f64, mean: f64) -> Result<f64, Error> {
        check_eccentricity(e)?;
        check_angle(mean)?;

        // iterate in [-π, π): E stays small where 1 - e cos(E) vanishes
        let m = angle_diff(mean, 0.0);
        let mut ecc = if e < HIGH_ECCENTRICITY_SEED {
            m
        } else {
            PI.copysign(m)
        };
        let mut delta = f64::INFINITY;

        for iter in 0..self.opts.max_iterations {
            let f = ecc - e * ecc.sin() - m;
            let df = 1.0 - e * ecc.cos();

            delta = f / df;
            ecc -= delta;

            trace!("kepler iter={} E={:.15} ΔE={:.3E}", iter, ecc, delta);

            // never stricter than the float resolution of E
            let tolerance = self.opts.tolerance.max(ULP_TOLERANCE * ecc.abs());

            if delta.abs() <= tolerance {
                debug!("kepler (e={}, M={}) converged in {} iterations", e, m, iter + 1);
                return Ok(normalize_angle(ecc));
            }
        }

        error!(
            "kepler (e={}, M={}) did not converge: |ΔE|={:.3E}",
            e,
            m,
            delta.abs()
        );

        Err(Error::Convergence {
            iterations: self.opts.max_iterations,
            residual: delta.abs(),
        })
    }

    /// Mean anomaly (rad) from eccentric anomaly
    pub fn mean_from_eccentric(&self, e: f64, eccentric: f64) -> Result<f64, Error> {
        check_eccentricity(e)?;
        check_angle(eccentric)?;
        Ok(normalize_angle(eccentric - e * eccentric.sin()))
    }

    /// True anomaly (rad) from eccentric anomaly
    pub fn true_from_eccentric(&self, e: f64, eccentric: f64) -> Result<f64, Error> {
        check_eccentricity(e)?;
        check_angle(eccentric)?;
        let (sin_half, cos_half) = (eccentric / 2.0).sin_cos();
        let nu = 2.0 * ((1.0 + e).sqrt() * sin_half).atan2((1.0 - e).sqrt() * cos_half);
        Ok(normalize_angle(nu))
    }

    /// Eccentric anomaly (rad) from true anomaly
    pub fn eccentric_from_true(&self, e: f64, true_anomaly: f64) -> Result<f64, Error> {
        check_eccentricity(e)?;
        check_angle(true_anomaly)?;
        let (sin_half, cos_half) = (true_anomaly / 2.0).sin_cos();
        let ecc = 2.0 * ((1.0 - e).sqrt() * sin_half).atan2((1.0 + e).sqrt() * cos_half);
        Ok(normalize_angle(ecc))
    }

    /// True anomaly (rad) from mean anomaly
    pub fn true_from_mean(&self, e: f64, mean: f64) -> Result<f64, Error> {
        let ecc = self.eccentric_from_mean(e, mean)?;
        self.true_from_eccentric(e, ecc)
    }

    /// Mean anomaly (rad) from true anomaly
    pub fn mean_from_true(&self, e: f64, true_anomaly: f64) -> Result<f64, Error> {
        let ecc = self.eccentric_from_true(e, true_anomaly)?;
        self.mean_from_eccentric(e, ecc)
    }

    /// Resolves all three anomalies from any [Anomaly].
    pub fn resolve(&self, e: f64, anomaly: Anomaly) -> Result<AnomalySet, Error> {
        match anomaly {
            Anomaly::Mean(m) => {
                let eccentric = self.eccentric_from_mean(e, m)?;
                Ok(AnomalySet {
                    mean: normalize_angle(m),
                    eccentric,
                    true_anomaly: self.true_from_eccentric(e, eccentric)?,
                })
            },
            Anomaly::Eccentric(ecc) => Ok(AnomalySet {
                mean: self.mean_from_eccentric(e, ecc)?,
                eccentric: normalize_angle(ecc),
                true_anomaly: self.true_from_eccentric(e, ecc)?,
            }),
            Anomaly::True(nu) => {
                let eccentric = self.eccentric_from_true(e, nu)?;
                Ok(AnomalySet {
                    mean: self.mean_from_eccentric(e, eccentric)?,
                    eccentric,
                    true_anomaly: normalize_angle(nu),
                })
            },
        }
    }
}
