//! Geodetic coordinates on a reference ellipsoid.
use log::trace;

use crate::{
    cfg::Config,
    constants::{EarthConstants, EARTH_FLATTENING_WGS84, EARTH_SEMI_MAJOR_AXIS_WGS84_KM},
    error::Error,
    prelude::Vector3,
    utils::wrap_longitude_deg,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Positions closer than this to the geocenter (km) have no geodetic solution
const GEOCENTER_TOLERANCE_KM: f64 = 1.0E-6;

/// Distance to the polar axis (km) under which the longitude is undefined
const POLAR_AXIS_TOLERANCE_KM: f64 = 1.0E-9;

/// Bowring iteration stop criterion (rad)
const LATITUDE_TOLERANCE_RAD: f64 = 1.0E-14;

const MAX_LATITUDE_ITERATIONS: usize = 16;

/// Oblate reference [Ellipsoid].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// Equatorial radius (km)
    pub semi_major_axis_km: f64,
    /// Flattening (a-b)/a
    pub flattening: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    pub const WGS84: Self = Self {
        semi_major_axis_km: EARTH_SEMI_MAJOR_AXIS_WGS84_KM,
        flattening: EARTH_FLATTENING_WGS84,
    };

    /// Builds a new [Ellipsoid]. The semi-major axis must be strictly positive
    /// and the flattening within [0, 1).
    pub fn new(semi_major_axis_km: f64, flattening: f64) -> Result<Self, Error> {
        let valid = semi_major_axis_km.is_finite()
            && semi_major_axis_km > 0.0
            && flattening.is_finite()
            && (0.0..1.0).contains(&flattening);

        if !valid {
            return Err(Error::InvalidEllipsoid {
                semi_major_axis_km,
                flattening,
            });
        }

        Ok(Self {
            semi_major_axis_km,
            flattening,
        })
    }

    /// Builds an [Ellipsoid] whose flattening is derived from the second
    /// zonal harmonic, to first order: f = 3/2 J2 + q/2 with q = ω²a³/μ.
    pub fn from_j2(
        semi_major_axis_km: f64,
        j2: f64,
        mu_km3_s2: f64,
        angular_velocity_rad_s: f64,
    ) -> Result<Self, Error> {
        if !(mu_km3_s2.is_finite() && mu_km3_s2 > 0.0) {
            return Err(Error::InvalidGravitationalParameter(mu_km3_s2));
        }
        let q = angular_velocity_rad_s.powi(2) * semi_major_axis_km.powi(3) / mu_km3_s2;
        Self::new(semi_major_axis_km, 1.5 * j2 + 0.5 * q)
    }

    /// Builds the [Ellipsoid] in hydrostatic equilibrium with these [EarthConstants],
    /// see [Self::from_j2].
    pub fn from_constants(constants: &EarthConstants) -> Result<Self, Error> {
        Self::from_j2(
            constants.radius_km,
            constants.j2,
            constants.mu_km3_s2,
            constants.angular_velocity_rad_s,
        )
    }

    /// Polar radius (km)
    pub fn semi_minor_axis_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.flattening)
    }

    /// First eccentricity squared
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Second eccentricity squared
    fn second_eccentricity_squared(&self) -> f64 {
        let e2 = self.eccentricity_squared();
        e2 / (1.0 - e2)
    }

    /// Prime vertical radius of curvature (km) at this geodetic latitude (rad)
    fn prime_vertical_radius_km(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        self.semi_major_axis_km / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }
}

/// [GeodeticCoordinate]s are always relative to the ITRS.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticCoordinate {
    /// Geodetic latitude (ddeg), in [-90, 90]
    pub latitude_deg: f64,
    /// Longitude (ddeg), in [-180, 180]
    pub longitude_deg: f64,
    /// Altitude above the ellipsoid (km)
    pub altitude_km: f64,
}

impl GeodeticCoordinate {
    /// Builds a new [GeodeticCoordinate]. Latitude must be within [-90, 90],
    /// longitude is wrapped to [-180, 180].
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_km: f64) -> Result<Self, Error> {
        if !latitude_deg.is_finite() {
            return Err(Error::NonFinite("latitude"));
        }
        if !longitude_deg.is_finite() {
            return Err(Error::NonFinite("longitude"));
        }
        if !altitude_km.is_finite() {
            return Err(Error::NonFinite("altitude"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(Error::InvalidLatitude(latitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg: wrap_longitude_deg(longitude_deg),
            altitude_km,
        })
    }

    /// Longitude (ddeg) in [0, 360)
    pub fn longitude_0_360_deg(&self) -> f64 {
        let lon = self.longitude_deg.rem_euclid(360.0);
        if lon >= 360.0 {
            0.0
        } else {
            lon
        }
    }
}

impl std::fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat={:.6}° lon={:.6}° alt={:.3}km",
            self.latitude_deg, self.longitude_deg, self.altitude_km
        )
    }
}

/// [GeodeticConverter] converts ITRS coordinates to and from geodetic
/// coordinates, on a given [Ellipsoid].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GeodeticConverter {
    ellipsoid: Ellipsoid,
}

impl GeodeticConverter {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    /// Creates a new [GeodeticConverter] on the [Ellipsoid] of this [Config],
    /// which is validated first.
    pub fn from_config(cfg: &Config) -> Result<Self, Error> {
        let ellipsoid = Ellipsoid::new(cfg.ellipsoid.semi_major_axis_km, cfg.ellipsoid.flattening)?;
        Ok(Self::new(ellipsoid))
    }

    /// Returns the reference [Ellipsoid]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Resolves the [GeodeticCoordinate] of this ITRS position (km),
    /// using Bowring's iteration on the parametric latitude.
    pub fn cartesian_to_geodetic(
        &self,
        position_km: &Vector3<f64>,
    ) -> Result<GeodeticCoordinate, Error> {
        let (x, y, z) = (position_km[0], position_km[1], position_km[2]);

        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(Error::NonFinite("position"));
        }

        let r = position_km.norm();
        if r < GEOCENTER_TOLERANCE_KM {
            return Err(Error::Geocenter(r));
        }

        let a = self.ellipsoid.semi_major_axis_km;
        let b = self.ellipsoid.semi_minor_axis_km();
        let f = self.ellipsoid.flattening;
        let e2 = self.ellipsoid.eccentricity_squared();
        let ep2 = self.ellipsoid.second_eccentricity_squared();

        let p = x.hypot(y);

        if p < POLAR_AXIS_TOLERANCE_KM {
            let latitude_deg = if z >= 0.0 { 90.0 } else { -90.0 };
            return Ok(GeodeticCoordinate {
                latitude_deg,
                longitude_deg: 0.0,
                altitude_km: z.abs() - b,
            });
        }

        let longitude_deg = y.atan2(x).to_degrees();

        let mut beta = z.atan2((1.0 - f) * p);
        let mut lat_rad = beta;

        for i in 0..MAX_LATITUDE_ITERATIONS {
            let (sin_b, cos_b) = beta.sin_cos();
            let lat = (z + ep2 * b * sin_b.powi(3)).atan2(p - e2 * a * cos_b.powi(3));
            let delta = (lat - lat_rad).abs();
            lat_rad = lat;

            if delta < LATITUDE_TOLERANCE_RAD {
                trace!("geodetic latitude converged after {} iterations", i + 1);
                break;
            }

            let (sin_lat, cos_lat) = lat.sin_cos();
            beta = ((1.0 - f) * sin_lat).atan2(cos_lat);
        }

        let (sin_lat, cos_lat) = lat_rad.sin_cos();
        let altitude_km = p * cos_lat + z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt();

        Ok(GeodeticCoordinate {
            latitude_deg: lat_rad.to_degrees(),
            longitude_deg: wrap_longitude_deg(longitude_deg),
            altitude_km,
        })
    }

    /// Converts [GeodeticCoordinate] to ITRS position (km)
    pub fn geodetic_to_cartesian(&self, coords: &GeodeticCoordinate) -> Vector3<f64> {
        let lat_rad = coords.latitude_deg.to_radians();
        let lon_rad = coords.longitude_deg.to_radians();
        let h = coords.altitude_km;

        let n = self.ellipsoid.prime_vertical_radius_km(lat_rad);
        let e2 = self.ellipsoid.eccentricity_squared();

        let (sin_lat, cos_lat) = lat_rad.sin_cos();
        let (sin_lon, cos_lon) = lon_rad.sin_cos();

        Vector3::new(
            (n + h) * cos_lat * cos_lon,
            (n + h) * cos_lat * sin_lon,
            (n * (1.0 - e2) + h) * sin_lat,
        )
    }
}
