//! Classical orbital elements.
use std::f64::consts::{PI, TAU};

use crate::{
    anomaly::{Anomaly, AnomalySet, AnomalySolver},
    error::Error,
    utils::normalize_angle,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape classification of an elliptical orbit, within a tolerance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrbitClass {
    /// Inclined and eccentric: every element is defined.
    Elliptical,
    /// Circular and inclined: periapsis is undefined.
    Circular,
    /// Eccentric and equatorial: ascending node is undefined.
    Equatorial,
    /// Circular and equatorial: both periapsis and node are undefined.
    CircularEquatorial,
}

impl std::fmt::Display for OrbitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Elliptical => write!(f, "elliptical"),
            Self::Circular => write!(f, "circular"),
            Self::Equatorial => write!(f, "equatorial"),
            Self::CircularEquatorial => write!(f, "circular-equatorial"),
        }
    }
}

/// [KeplerianElements] of an elliptical orbit.
/// Angles are expressed in radians, reduced to [0, 2π) except the inclination
/// which lies within [0, π]. Fields are only reachable through accessors,
/// so that every instance went through [KeplerianElements::new].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ElementsFields"))]
pub struct KeplerianElements {
    semi_major_axis_km: f64,
    eccentricity: f64,
    inclination_rad: f64,
    raan_rad: f64,
    aop_rad: f64,
    anomaly: Anomaly,
    /// Every [Anomaly], once resolved
    #[cfg_attr(feature = "serde", serde(skip))]
    derived: Option<AnomalySet>,
}

/// Unchecked description, validated into [KeplerianElements] on deserialization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ElementsFields {
    semi_major_axis_km: f64,
    eccentricity: f64,
    inclination_rad: f64,
    raan_rad: f64,
    aop_rad: f64,
    anomaly: Anomaly,
}

#[cfg(feature = "serde")]
impl TryFrom<ElementsFields> for KeplerianElements {
    type Error = Error;

    fn try_from(fields: ElementsFields) -> Result<Self, Error> {
        Self::new(
            fields.semi_major_axis_km,
            fields.eccentricity,
            fields.inclination_rad,
            fields.raan_rad,
            fields.aop_rad,
            fields.anomaly,
        )
    }
}

impl KeplerianElements {
    /// Builds new [KeplerianElements]. Out of domain values are rejected,
    /// never clamped. Angles are reduced to [0, 2π).
    pub fn new(
        semi_major_axis_km: f64,
        eccentricity: f64,
        inclination_rad: f64,
        raan_rad: f64,
        aop_rad: f64,
        anomaly: Anomaly,
    ) -> Result<Self, Error> {
        if !semi_major_axis_km.is_finite() || semi_major_axis_km <= 0.0 {
            return Err(Error::InvalidSemiMajorAxis(semi_major_axis_km));
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(Error::InvalidEccentricity(eccentricity));
        }
        if !inclination_rad.is_finite() || !(0.0..=PI).contains(&inclination_rad) {
            return Err(Error::InvalidInclination(inclination_rad));
        }
        if !raan_rad.is_finite() {
            return Err(Error::NonFinite("raan"));
        }
        if !aop_rad.is_finite() {
            return Err(Error::NonFinite("argument of periapsis"));
        }
        if !anomaly.value_rad().is_finite() {
            return Err(Error::NonFinite("anomaly"));
        }

        Ok(Self {
            semi_major_axis_km,
            eccentricity,
            inclination_rad,
            raan_rad: normalize_angle(raan_rad),
            aop_rad: normalize_angle(aop_rad),
            anomaly: anomaly.normalized(),
            derived: None,
        })
    }

    /// Semi-major axis (km)
    pub fn semi_major_axis_km(&self) -> f64 {
        self.semi_major_axis_km
    }

    /// Eccentricity, in [0, 1)
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Inclination (rad), in [0, π]
    pub fn inclination_rad(&self) -> f64 {
        self.inclination_rad
    }

    /// Right ascension of the ascending node (rad)
    pub fn raan_rad(&self) -> f64 {
        self.raan_rad
    }

    /// Argument of periapsis (rad)
    pub fn aop_rad(&self) -> f64 {
        self.aop_rad
    }

    /// Position on the orbit, as originally expressed
    pub fn anomaly(&self) -> Anomaly {
        self.anomaly
    }

    /// Copies and returns [KeplerianElements] moved to this [Anomaly].
    /// Previously resolved anomalies are discarded.
    pub fn with_anomaly(&self, anomaly: Anomaly) -> Result<Self, Error> {
        Self::new(
            self.semi_major_axis_km,
            self.eccentricity,
            self.inclination_rad,
            self.raan_rad,
            self.aop_rad,
            anomaly,
        )
    }

    /// Copies and returns [KeplerianElements] with this eccentricity.
    /// Previously resolved anomalies are discarded.
    pub fn with_eccentricity(&self, eccentricity: f64) -> Result<Self, Error> {
        Self::new(
            self.semi_major_axis_km,
            eccentricity,
            self.inclination_rad,
            self.raan_rad,
            self.aop_rad,
            self.anomaly,
        )
    }

    /// Copies and returns [KeplerianElements] with all anomalies resolved.
    pub fn with_derived_anomalies(&self, solver: &AnomalySolver) -> Result<Self, Error> {
        let mut s = *self;
        s.derived = Some(solver.resolve(self.eccentricity, self.anomaly)?);
        Ok(s)
    }

    /// Returns resolved [AnomalySet], if [Self::with_derived_anomalies] was invoked.
    pub fn derived_anomalies(&self) -> Option<&AnomalySet> {
        self.derived.as_ref()
    }

    /// Returns the true anomaly (rad), solving Kepler's equation if need be.
    pub fn true_anomaly_rad(&self, solver: &AnomalySolver) -> Result<f64, Error> {
        if let Some(set) = self.derived {
            return Ok(set.true_anomaly);
        }
        match self.anomaly {
            Anomaly::True(nu) => Ok(nu),
            Anomaly::Eccentric(ecc) => solver.true_from_eccentric(self.eccentricity, ecc),
            Anomaly::Mean(m) => solver.true_from_mean(self.eccentricity, m),
        }
    }

    /// Returns the mean anomaly (rad).
    pub fn mean_anomaly_rad(&self, solver: &AnomalySolver) -> Result<f64, Error> {
        if let Some(set) = self.derived {
            return Ok(set.mean);
        }
        match self.anomaly {
            Anomaly::Mean(m) => Ok(m),
            Anomaly::Eccentric(ecc) => solver.mean_from_eccentric(self.eccentricity, ecc),
            Anomaly::True(nu) => solver.mean_from_true(self.eccentricity, nu),
        }
    }

    /// Mean motion (rad.s⁻¹) around a body of gravitational parameter `mu` (km³.s⁻²)
    pub fn mean_motion_rad_s(&self, mu_km3_s2: f64) -> f64 {
        (mu_km3_s2 / self.semi_major_axis_km.powi(3)).sqrt()
    }

    /// Orbital period (s)
    pub fn period_s(&self, mu_km3_s2: f64) -> f64 {
        TAU / self.mean_motion_rad_s(mu_km3_s2)
    }

    /// Semi-latus rectum (km)
    pub fn semi_latus_rectum_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.eccentricity.powi(2))
    }

    pub fn periapsis_radius_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_radius_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 + self.eccentricity)
    }

    /// Specific orbital energy (km².s⁻²)
    pub fn specific_energy(&self, mu_km3_s2: f64) -> f64 {
        -mu_km3_s2 / (2.0 * self.semi_major_axis_km)
    }

    pub fn is_circular(&self, tolerance: f64) -> bool {
        self.eccentricity < tolerance
    }

    /// True for prograde and retrograde equatorial orbits.
    pub fn is_equatorial(&self, tolerance: f64) -> bool {
        self.inclination_rad.sin().abs() < tolerance
    }

    /// Classifies this orbit, using the same tolerance for both criteria.
    pub fn classify(&self, tolerance: f64) -> OrbitClass {
        match (self.is_circular(tolerance), self.is_equatorial(tolerance)) {
            (false, false) => OrbitClass::Elliptical,
            (true, false) => OrbitClass::Circular,
            (false, true) => OrbitClass::Equatorial,
            (true, true) => OrbitClass::CircularEquatorial,
        }
    }
}

impl std::fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "a={:.3}km e={:.6} i={:.6}° Ω={:.6}° ω={:.6}° {}",
            self.semi_major_axis_km,
            self.eccentricity,
            self.inclination_rad.to_degrees(),
            self.raan_rad.to_degrees(),
            self.aop_rad.to_degrees(),
            self.anomaly,
        )
    }
}
