#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Earth angular velocity, in WGS84 frame rad/s
pub const EARTH_ANGULAR_VEL_RAD: f64 = 7.2921151467E-5;

/// Earth gravitational constant (km^3 s-2)
pub const EARTH_GRAVITATION_MU_KM3_S2: f64 = 398600.4418;

/// WGS84 Earth Frame Ellipsoid semi-major axis (kilometers)
pub const EARTH_SEMI_MAJOR_AXIS_WGS84_KM: f64 = 6378.137;

/// WGS84 Earth Frame Ellipsoid flattening
pub const EARTH_FLATTENING_WGS84: f64 = 1.0 / 298.257223563;

/// EGM96 un-normalized second zonal harmonic
pub const EARTH_J2: f64 = 1.08262668E-3;

/// J2000.0 reference epoch, as Julian date
pub const J2000_JD: f64 = 2451545.0;

/// Days per julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Arcseconds to radians
pub const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Physical [EarthConstants] injected into the components that need them.
/// [EarthConstants::default] is the WGS84 / EGM96 set.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EarthConstants {
    /// Equatorial radius (km)
    pub radius_km: f64,
    /// Gravitational parameter (km³.s⁻²)
    pub mu_km3_s2: f64,
    /// Second zonal harmonic
    pub j2: f64,
    /// Rotation rate (rad.s⁻¹)
    pub angular_velocity_rad_s: f64,
}

impl Default for EarthConstants {
    fn default() -> Self {
        Self::WGS84
    }
}

impl EarthConstants {
    pub const WGS84: Self = Self {
        radius_km: EARTH_SEMI_MAJOR_AXIS_WGS84_KM,
        mu_km3_s2: EARTH_GRAVITATION_MU_KM3_S2,
        j2: EARTH_J2,
        angular_velocity_rad_s: EARTH_ANGULAR_VEL_RAD,
    };

    /// Copies and returns [EarthConstants] with updated equatorial radius.
    pub fn with_radius_km(&self, radius_km: f64) -> Self {
        let mut s = *self;
        s.radius_km = radius_km;
        s
    }

    /// Copies and returns [EarthConstants] with updated second zonal harmonic.
    pub fn with_j2(&self, j2: f64) -> Self {
        let mut s = *self;
        s.j2 = j2;
        s
    }

    /// Copies and returns [EarthConstants] with updated gravitational parameter.
    pub fn with_mu_km3_s2(&self, mu_km3_s2: f64) -> Self {
        let mut s = *self;
        s.mu_km3_s2 = mu_km3_s2;
        s
    }

    /// Copies and returns [EarthConstants] with updated rotation rate.
    pub fn with_angular_velocity_rad_s(&self, angular_velocity_rad_s: f64) -> Self {
        let mut s = *self;
        s.angular_velocity_rad_s = angular_velocity_rad_s;
        s
    }
}
