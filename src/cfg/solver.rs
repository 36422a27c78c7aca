//! Kepler equation solver settings

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const fn default_tolerance() -> f64 {
    1.0E-14
}

const fn default_max_iterations() -> usize {
    100
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerSolverOpts {
    /// Absolute tolerance on the eccentric anomaly update (rad).
    /// Iteration stops once |ΔE| is below this value.
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance"))]
    pub tolerance: f64,
    /// Maximal number of Newton-Raphson iterations,
    /// after which we give up with a convergence error.
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,
}

impl Default for KeplerSolverOpts {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl KeplerSolverOpts {
    /// Settings for fast, approximate applications (plotting, coarse screening).
    pub fn fast_preset() -> Self {
        Self {
            tolerance: 1.0E-8,
            max_iterations: 20,
        }
    }

    /// Copies and returns [KeplerSolverOpts] with updated tolerance.
    pub fn with_tolerance(&self, tolerance: f64) -> Self {
        let mut s = *self;
        s.tolerance = tolerance;
        s
    }

    /// Copies and returns [KeplerSolverOpts] with updated iteration cap.
    pub fn with_max_iterations(&self, max_iterations: usize) -> Self {
        let mut s = *self;
        s.max_iterations = max_iterations;
        s
    }
}
