//! Keplerian elements to and from Cartesian states.
use log::{debug, warn};

use crate::{
    anomaly::{Anomaly, AnomalySolver},
    cfg::{Config, DegenerateConventions},
    elements::KeplerianElements,
    error::Error,
    prelude::{Epoch, Frame, StateVector, Vector3},
    rotation::{r1, r3},
    time::check_epoch,
    utils::normalize_angle,
};

/// [KeplerianCartesianConverter] converts [KeplerianElements] to [StateVector]s
/// and back, around a central body of gravitational parameter μ.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KeplerianCartesianConverter {
    /// Gravitational parameter (km³.s⁻²)
    mu_km3_s2: f64,
    /// [AnomalySolver]
    solver: AnomalySolver,
    /// [DegenerateConventions]
    conventions: DegenerateConventions,
}

impl Default for KeplerianCartesianConverter {
    fn default() -> Self {
        Self {
            mu_km3_s2: crate::constants::EARTH_GRAVITATION_MU_KM3_S2,
            solver: AnomalySolver::default(),
            conventions: DegenerateConventions::default(),
        }
    }
}

impl KeplerianCartesianConverter {
    /// Creates a new [KeplerianCartesianConverter].
    /// μ must be finite and strictly positive.
    pub fn new(
        mu_km3_s2: f64,
        solver: AnomalySolver,
        conventions: DegenerateConventions,
    ) -> Result<Self, Error> {
        if !mu_km3_s2.is_finite() || mu_km3_s2 <= 0.0 {
            return Err(Error::InvalidGravitationalParameter(mu_km3_s2));
        }
        Ok(Self {
            mu_km3_s2,
            solver,
            conventions,
        })
    }

    /// Creates a new [KeplerianCartesianConverter] from [Config].
    pub fn from_config(cfg: &Config) -> Result<Self, Error> {
        Self::new(
            cfg.constants.mu_km3_s2,
            AnomalySolver::new(cfg.solver),
            cfg.conventions,
        )
    }

    /// Gravitational parameter (km³.s⁻²)
    pub fn mu_km3_s2(&self) -> f64 {
        self.mu_km3_s2
    }

    /// Returns the [AnomalySolver] in use
    pub fn solver(&self) -> &AnomalySolver {
        &self.solver
    }

    /// Converts [KeplerianElements] to a [StateVector] expressed in this inertial [Frame].
    pub fn to_cartesian(
        &self,
        elements: &KeplerianElements,
        frame: Frame,
    ) -> Result<StateVector, Error> {
        if !frame.is_inertial() {
            return Err(Error::NonInertialFrame(frame));
        }

        let e = elements.eccentricity();
        let nu = elements.true_anomaly_rad(&self.solver)?;
        let p = elements.semi_latus_rectum_km();

        let (sin_nu, cos_nu) = nu.sin_cos();
        let r = p / (1.0 + e * cos_nu);
        let vp = (self.mu_km3_s2 / p).sqrt();

        let r_pqw = Vector3::new(r * cos_nu, r * sin_nu, 0.0);
        let v_pqw = Vector3::new(-vp * sin_nu, vp * (e + cos_nu), 0.0);

        // perifocal to inertial
        let q = r3(-elements.raan_rad())
            * r1(-elements.inclination_rad())
            * r3(-elements.aop_rad());

        Ok(StateVector::from_position_velocity(
            q * r_pqw,
            q * v_pqw,
            frame,
        ))
    }

    /// Converts [KeplerianElements] to a true of date (TETED) [StateVector],
    /// valid at this [Epoch].
    pub fn elements_to_state(
        &self,
        elements: &KeplerianElements,
        epoch: Epoch,
    ) -> Result<StateVector, Error> {
        check_epoch(epoch)?;
        self.to_cartesian(elements, Frame::TETED)
    }

    /// Resolves the [KeplerianElements] of this [StateVector].
    /// The state must have a velocity and be expressed in an inertial [Frame].
    pub fn to_elements(&self, state: &StateVector) -> Result<KeplerianElements, Error> {
        if !state.frame.is_inertial() {
            return Err(Error::NonInertialFrame(state.frame));
        }
        let velocity_km_s = state.velocity_km_s.ok_or(Error::MissingVelocity)?;
        self.state_to_elements(&state.position_km, &velocity_km_s)
    }

    /// Resolves [KeplerianElements] from inertial position (km) and velocity (km.s⁻¹).
    /// Returned elements use a true [Anomaly] with every anomaly resolved.
    pub fn state_to_elements(
        &self,
        position_km: &Vector3<f64>,
        velocity_km_s: &Vector3<f64>,
    ) -> Result<KeplerianElements, Error> {
        if position_km.iter().any(|x| !x.is_finite()) {
            return Err(Error::NonFinite("position"));
        }
        if velocity_km_s.iter().any(|x| !x.is_finite()) {
            return Err(Error::NonFinite("velocity"));
        }

        let mu = self.mu_km3_s2;
        let r = position_km.norm();
        let v = velocity_km_s.norm();

        if r == 0.0 {
            return Err(Error::Geocenter(r));
        }

        let h = position_km.cross(velocity_km_s);
        let h_norm = h.norm();

        if h_norm <= f64::EPSILON * r * v {
            return Err(Error::Rectilinear(h_norm));
        }

        let energy = v * v / 2.0 - mu / r;
        let e_vec = ((v * v - mu / r) * *position_km
            - position_km.dot(velocity_km_s) * *velocity_km_s)
            / mu;
        let e = e_vec.norm();

        if energy >= 0.0 || e >= 1.0 {
            return Err(Error::UnboundOrbit {
                eccentricity: e,
                energy,
            });
        }

        let a = -mu / (2.0 * energy);

        let h_hat = h / h_norm;

        // ascending node: z × h
        let node = Vector3::new(-h[1], h[0], 0.0);
        let node_norm = node.norm();

        let inclination = node_norm.atan2(h[2]);

        let raan = if node_norm / h_norm < self.conventions.inclination_tolerance {
            warn!(
                "equatorial orbit (i={:.3E} rad): using Ω={} rad",
                inclination, self.conventions.equatorial_raan_rad
            );
            self.conventions.equatorial_raan_rad
        } else {
            normalize_angle(node[1].atan2(node[0]))
        };

        let n_hat = Vector3::new(raan.cos(), raan.sin(), 0.0);
        let m_hat = h_hat.cross(&n_hat);

        let aop = if e < self.conventions.eccentricity_tolerance {
            warn!(
                "circular orbit (e={:.3E}): using ω={} rad",
                e, self.conventions.circular_aop_rad
            );
            self.conventions.circular_aop_rad
        } else {
            let e_hat = e_vec / e;
            normalize_angle(n_hat.cross(&e_hat).dot(&h_hat).atan2(n_hat.dot(&e_hat)))
        };

        // periapsis direction, or its conventional substitute
        let p_hat = aop.cos() * n_hat + aop.sin() * m_hat;
        let nu = p_hat.cross(position_km).dot(&h_hat).atan2(p_hat.dot(position_km));

        let elements = KeplerianElements::new(a, e, inclination, raan, aop, Anomaly::True(nu))?
            .with_derived_anomalies(&self.solver)?;

        debug!("{}", elements);

        Ok(elements)
    }
}

#[cfg(test)]
mod test {
    use super::KeplerianCartesianConverter;
    use crate::{
        anomaly::{Anomaly, AnomalySolver},
        cfg::DegenerateConventions,
        elements::KeplerianElements,
        error::{Error, ErrorKind},
        prelude::{Frame, StateVector, Vector3},
    };

    #[test]
    fn invalid_mu() {
        for mu in [0.0, -1.0, f64::NAN] {
            assert!(KeplerianCartesianConverter::new(
                mu,
                AnomalySolver::default(),
                DegenerateConventions::default()
            )
            .is_err());
        }
    }

    #[test]
    fn rotating_frame() {
        let conv = KeplerianCartesianConverter::default();
        let kep = KeplerianElements::new(7000.0, 0.01, 0.5, 0.0, 0.0, Anomaly::Mean(0.0)).unwrap();
        assert_eq!(
            conv.to_cartesian(&kep, Frame::ITRS),
            Err(Error::NonInertialFrame(Frame::ITRS))
        );

        let st = StateVector::from_position_velocity(
            Vector3::new(7000.0, 0.0, 0.0),
            Vector3::new(0.0, 7.5, 0.0),
            Frame::ITRS,
        );
        assert_eq!(conv.to_elements(&st).unwrap_err().kind(), ErrorKind::InvalidFrame);
    }

    #[test]
    fn missing_velocity() {
        let conv = KeplerianCartesianConverter::default();
        let st = StateVector::from_position(Vector3::new(7000.0, 0.0, 0.0), Frame::GCRS);
        assert_eq!(conv.to_elements(&st), Err(Error::MissingVelocity));
    }

    #[test]
    fn rectilinear_and_unbound() {
        let conv = KeplerianCartesianConverter::default();
        let r = Vector3::new(7000.0, 0.0, 0.0);

        match conv.state_to_elements(&r, &Vector3::new(3.0, 0.0, 0.0)) {
            Err(Error::Rectilinear(_)) => {},
            other => panic!("expecting rectilinear error, got {:?}", other),
        }

        // escape velocity is ~10.67 km/s at this radius
        match conv.state_to_elements(&r, &Vector3::new(0.0, 11.0, 0.0)) {
            Err(e @ Error::UnboundOrbit { .. }) => {
                assert_eq!(e.kind(), ErrorKind::Domain);
                assert!(e.to_string().contains("unbound orbit"));
            },
            other => panic!("expecting unbound orbit, got {:?}", other),
        }

        assert_eq!(
            conv.state_to_elements(&Vector3::zeros(), &Vector3::new(0.0, 7.0, 0.0)),
            Err(Error::Geocenter(0.0))
        );
    }

    #[test]
    fn circular_velocity() {
        let conv = KeplerianCartesianConverter::default();
        let kep = KeplerianElements::new(7000.0, 0.0, 0.9, 0.0, 0.0, Anomaly::True(0.0)).unwrap();
        let st = conv.to_cartesian(&kep, Frame::GCRS).unwrap();
        let v_circ = (conv.mu_km3_s2() / 7000.0).sqrt();
        assert!((st.radius_km() - 7000.0).abs() < 1.0E-9);
        assert!((st.speed_km_s().unwrap() - v_circ).abs() < 1.0E-12);
    }
}
