use crate::prelude::{Frame, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [StateVector] is a position (and optional velocity),
/// tagged with the [Frame] it is expressed in.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVector {
    /// Position (km)
    pub position_km: Vector3<f64>,
    /// Velocity (km.s⁻¹)
    pub velocity_km_s: Option<Vector3<f64>>,
    /// [Frame] this state is expressed in
    pub frame: Frame,
}

impl StateVector {
    /// Builds a position only [StateVector].
    pub fn from_position(position_km: Vector3<f64>, frame: Frame) -> Self {
        Self {
            position_km,
            velocity_km_s: None,
            frame,
        }
    }

    /// Builds a position and velocity [StateVector].
    pub fn from_position_velocity(
        position_km: Vector3<f64>,
        velocity_km_s: Vector3<f64>,
        frame: Frame,
    ) -> Self {
        Self {
            position_km,
            velocity_km_s: Some(velocity_km_s),
            frame,
        }
    }

    /// Copies and returns [StateVector] with updated velocity.
    pub fn with_velocity(&self, velocity_km_s: Vector3<f64>) -> Self {
        let mut s = *self;
        s.velocity_km_s = Some(velocity_km_s);
        s
    }

    /// Copies and returns [StateVector] re-tagged to [Frame].
    /// Coordinates are not modified.
    pub fn with_frame(&self, frame: Frame) -> Self {
        let mut s = *self;
        s.frame = frame;
        s
    }

    /// Distance to the origin (km)
    pub fn radius_km(&self) -> f64 {
        self.position_km.norm()
    }

    /// Velocity magnitude (km.s⁻¹), if known.
    pub fn speed_km_s(&self) -> Option<f64> {
        self.velocity_km_s.map(|v| v.norm())
    }
}

impl std::fmt::Display for StateVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = self.position_km;
        write!(f, "{} r=({:.6}, {:.6}, {:.6}) km", self.frame, r.x, r.y, r.z)?;
        if let Some(v) = self.velocity_km_s {
            write!(f, " v=({:.9}, {:.9}, {:.9}) km/s", v.x, v.y, v.z)?;
        }
        Ok(())
    }
}
