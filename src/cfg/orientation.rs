//! Earth orientation parameters

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Earth orientation parameters that cannot be modeled and are usually
/// published by the IERS. The defaults (all null) cancel UT1-UTC and the polar
/// motion, which is sufficient for km-level tracking.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationOpts {
    /// |UT1-UTC| (s)
    #[cfg_attr(feature = "serde", serde(default))]
    pub dut1_s: f64,
    /// Pole X coordinate (arcsec)
    #[cfg_attr(feature = "serde", serde(default))]
    pub polar_motion_x_arcsec: f64,
    /// Pole Y coordinate (arcsec)
    #[cfg_attr(feature = "serde", serde(default))]
    pub polar_motion_y_arcsec: f64,
}

impl OrientationOpts {
    /// Copies and returns [OrientationOpts] with updated |UT1-UTC| (s).
    pub fn with_dut1_s(&self, dut1_s: f64) -> Self {
        let mut s = *self;
        s.dut1_s = dut1_s;
        s
    }

    /// Copies and returns [OrientationOpts] with updated pole coordinates (arcsec).
    pub fn with_polar_motion_arcsec(&self, x_arcsec: f64, y_arcsec: f64) -> Self {
        let mut s = *self;
        s.polar_motion_x_arcsec = x_arcsec;
        s.polar_motion_y_arcsec = y_arcsec;
        s
    }
}
