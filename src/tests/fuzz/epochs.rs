use rand::prelude::*;

use crate::{
    error::Error,
    prelude::{
        epoch_from_mjd, Epoch, Frame, FrameTransformer, StateVector, Vector3, MJD_MAX, MJD_MIN,
    },
    tests::{
        fuzz::{random_within, test_rng},
        init_logger,
    },
};

const NUM_EPOCHS: usize = 500;

fn random_state<R: Rng>(rng: &mut R, frame: Frame) -> StateVector {
    let position_km = Vector3::new(
        random_within(rng, -42000.0, 42000.0),
        random_within(rng, -42000.0, 42000.0),
        random_within(rng, -42000.0, 42000.0),
    );
    let velocity_km_s = Vector3::new(
        random_within(rng, -8.0, 8.0),
        random_within(rng, -8.0, 8.0),
        random_within(rng, -8.0, 8.0),
    );
    StateVector::from_position_velocity(position_km, velocity_km_s, frame)
}

#[test]
fn random_epochs_and_frames() {
    init_logger();

    let mut rng = test_rng(10);
    let transformer = FrameTransformer::default();

    for _ in 0..NUM_EPOCHS {
        let mjd = random_within(&mut rng, MJD_MIN, MJD_MAX);
        let t = epoch_from_mjd(mjd).unwrap();

        let from = *Frame::ALL.choose(&mut rng).unwrap();
        let to = *Frame::ALL.choose(&mut rng).unwrap();

        let state = random_state(&mut rng, from);
        let there = transformer.convert(from, to, t, &state).unwrap();
        let back = transformer.convert(to, from, t, &there).unwrap();

        // rotations preserve the norm
        assert!((there.radius_km() - state.radius_km()).abs() < 1.0E-8);

        let dr = (back.position_km - state.position_km).norm();
        let dv = (back.velocity_km_s.unwrap() - state.velocity_km_s.unwrap()).norm();
        assert!(dr < 1.0E-6, "MJD {} {}->{}: |dr|={:.3E}", mjd, from, to, dr);
        assert!(dv < 1.0E-9, "MJD {} {}->{}: |dv|={:.3E}", mjd, from, to, dv);
    }
}

#[test]
fn out_of_range_epochs() {
    let mut rng = test_rng(11);
    let transformer = FrameTransformer::default();
    let state = random_state(&mut rng, Frame::GCRS);

    for mjd in [MJD_MIN - 1.0, MJD_MAX + 1.0, 0.0, 1.0E6] {
        assert!(matches!(
            epoch_from_mjd(mjd),
            Err(Error::EpochOutOfRange { .. })
        ));

        let t = Epoch::from_mjd_utc(mjd);
        assert!(matches!(
            transformer.convert(Frame::GCRS, Frame::ITRS, t, &state),
            Err(Error::EpochOutOfRange { .. })
        ));
    }

    for mjd in [MJD_MIN, MJD_MAX] {
        let t = epoch_from_mjd(mjd).unwrap();
        assert!(transformer.convert(Frame::GCRS, Frame::ITRS, t, &state).is_ok());
    }
}
