//! Elementary (passive) rotations and time dependent frame rotations.
use nalgebra::{Matrix3, Vector3};

/// Passive rotation of `angle` (rad) about the X axis.
pub fn r1(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Passive rotation of `angle` (rad) about the Y axis.
pub fn r2(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Passive rotation of `angle` (rad) about the Z axis.
pub fn r3(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// d[r3]/dθ
fn r3_derivative(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(-s, c, 0.0, -c, -s, 0.0, 0.0, 0.0, 0.0)
}

/// [FrameRotation] maps coordinates from one frame to another:
/// `r' = R r` and `v' = R v + Ṙ r`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameRotation {
    /// Rotation matrix R
    pub rotation: Matrix3<f64>,
    /// Time derivative Ṙ (s⁻¹)
    pub rate: Matrix3<f64>,
}

impl Default for FrameRotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl FrameRotation {
    pub fn identity() -> Self {
        Self::fixed(Matrix3::identity())
    }

    /// Builds a time invariant [FrameRotation].
    pub fn fixed(rotation: Matrix3<f64>) -> Self {
        Self {
            rotation,
            rate: Matrix3::zeros(),
        }
    }

    /// Builds a [FrameRotation] of `angle` (rad) about the Z axis,
    /// turning at `angle_rate` (rad.s⁻¹).
    pub fn spin_z(angle: f64, angle_rate: f64) -> Self {
        Self {
            rotation: r3(angle),
            rate: r3_derivative(angle) * angle_rate,
        }
    }

    /// Returns the inverse [FrameRotation]: Rᵀ and Ṙᵀ.
    pub fn inverse(&self) -> Self {
        Self {
            rotation: self.rotation.transpose(),
            rate: self.rate.transpose(),
        }
    }

    /// Chains `next` after `self`.
    pub fn then(&self, next: &Self) -> Self {
        Self {
            rotation: next.rotation * self.rotation,
            rate: next.rate * self.rotation + next.rotation * self.rate,
        }
    }

    /// Rotates a position vector.
    pub fn apply_position(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * position
    }

    /// Rotates a velocity vector, including the transport term.
    pub fn apply_velocity(&self, position: &Vector3<f64>, velocity: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * velocity + self.rate * position
    }
}
