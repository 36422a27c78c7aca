//! Frame to frame conversions.
use log::debug;

use crate::{
    cfg::{Config, OrientationOpts},
    constants::EarthConstants,
    error::Error,
    orientation::EarthOrientation,
    prelude::{Epoch, Frame, StateVector},
    rotation::FrameRotation,
};

/// [FrameTransformer] converts [StateVector]s between any pair of [Frame]s.
///
/// The rotation chain is
/// `GCRS -P-> MEMED -N-> TETED -R3(GAST)-> PEF -Wᵀ-> ITRS`,
/// with `TEME = R3(eqeq) TETED` branching off the true of date frame.
/// Precession and nutation rates are neglected: only the Earth rotation
/// contributes to the velocity transport term.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct FrameTransformer {
    /// [EarthConstants] (rotation rate)
    constants: EarthConstants,
    /// [OrientationOpts]
    opts: OrientationOpts,
}

impl FrameTransformer {
    /// Creates a new [FrameTransformer].
    pub fn new(constants: EarthConstants, opts: OrientationOpts) -> Self {
        Self { constants, opts }
    }

    /// Creates a new [FrameTransformer] from [Config].
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.constants, cfg.orientation)
    }

    /// Evaluates the [EarthOrientation] at this [Epoch].
    pub fn orientation(&self, epoch: Epoch) -> Result<EarthOrientation, Error> {
        EarthOrientation::at(epoch, &self.opts)
    }

    /// GCRS to `frame` rotation
    fn from_gcrs(&self, eop: &EarthOrientation, frame: Frame) -> FrameRotation {
        let mod_gcrs = eop.precession_matrix();
        let tod_gcrs = eop.nutation_matrix() * mod_gcrs;
        match frame {
            Frame::GCRS => FrameRotation::identity(),
            Frame::MEMED => FrameRotation::fixed(mod_gcrs),
            Frame::TETED => FrameRotation::fixed(tod_gcrs),
            Frame::TEME => FrameRotation::fixed(eop.equinox_matrix() * tod_gcrs),
            Frame::ITRS => FrameRotation::fixed(tod_gcrs)
                .then(&eop.earth_rotation(self.constants.angular_velocity_rad_s))
                .then(&FrameRotation::fixed(eop.polar_motion_matrix().transpose())),
        }
    }

    fn rotation_at(&self, eop: &EarthOrientation, from: Frame, to: Frame) -> FrameRotation {
        if from == to {
            return FrameRotation::identity();
        }
        self.from_gcrs(eop, from)
            .inverse()
            .then(&self.from_gcrs(eop, to))
    }

    /// Returns the `from` to `to` [FrameRotation] at this [Epoch].
    pub fn rotation(&self, from: Frame, to: Frame, epoch: Epoch) -> Result<FrameRotation, Error> {
        let eop = self.orientation(epoch)?;
        Ok(self.rotation_at(&eop, from, to))
    }

    fn apply(rotation: &FrameRotation, state: &StateVector, to: Frame) -> StateVector {
        let position_km = rotation.apply_position(&state.position_km);
        let velocity_km_s = state
            .velocity_km_s
            .map(|v| rotation.apply_velocity(&state.position_km, &v));
        StateVector {
            position_km,
            velocity_km_s,
            frame: to,
        }
    }

    fn check_frame(from: Frame, state: &StateVector) -> Result<(), Error> {
        if state.frame != from {
            return Err(Error::FrameMismatch {
                expected: from,
                found: state.frame,
            });
        }
        Ok(())
    }

    /// Converts this [StateVector] expressed in `from` to `to` [Frame],
    /// at desired [Epoch].
    /// The [StateVector] must be tagged `from`.
    pub fn convert(
        &self,
        from: Frame,
        to: Frame,
        epoch: Epoch,
        state: &StateVector,
    ) -> Result<StateVector, Error> {
        Self::check_frame(from, state)?;
        let eop = self.orientation(epoch)?;
        let rotation = self.rotation_at(&eop, from, to);

        debug!("{} - {} -> {} R={}", epoch, from, to, rotation.rotation);

        Ok(Self::apply(&rotation, state, to))
    }

    /// Converts this [StateVector] to `to` [Frame], at desired [Epoch].
    pub fn transform(
        &self,
        state: &StateVector,
        to: Frame,
        epoch: Epoch,
    ) -> Result<StateVector, Error> {
        self.convert(state.frame, to, epoch, state)
    }

    /// Converts a batch of [StateVector]s sharing the same [Epoch].
    /// The orientation is evaluated once. Every [StateVector] must be tagged `from`.
    pub fn convert_many(
        &self,
        from: Frame,
        to: Frame,
        epoch: Epoch,
        states: &[StateVector],
    ) -> Result<Vec<StateVector>, Error> {
        for state in states.iter() {
            Self::check_frame(from, state)?;
        }

        let eop = self.orientation(epoch)?;
        let rotation = self.rotation_at(&eop, from, to);

        debug!("{} - {} -> {} ({} states)", epoch, from, to, states.len());

        Ok(states
            .iter()
            .map(|state| Self::apply(&rotation, state, to))
            .collect())
    }
}
