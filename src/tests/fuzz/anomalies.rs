use log::info;
use std::f64::consts::TAU;

use crate::{
    prelude::{Anomaly, AnomalySolver},
    tests::{
        fuzz::{random_within, test_rng},
        init_logger,
    },
    utils::angle_diff,
};

const NUM_SAMPLES: usize = 10_000;

#[test]
fn mean_true_mean_composition() {
    init_logger();

    let mut rng = test_rng(0);
    let solver = AnomalySolver::default();
    let mut worst = 0.0_f64;

    for _ in 0..NUM_SAMPLES {
        let e = random_within(&mut rng, 0.0, 0.99);
        let m = random_within(&mut rng, 0.0, TAU);

        let nu = solver.true_from_mean(e, m).unwrap();
        let back = solver.mean_from_true(e, nu).unwrap();

        let err = angle_diff(back, m).abs();
        worst = worst.max(err);
        assert!(err < 1.0E-12, "e={} M={} -> ν={} -> M={}", e, m, nu, back);
    }

    info!("worst M->ν->M error: {:.3E} rad", worst);
}

#[test]
fn eccentric_true_eccentric_composition() {
    let mut rng = test_rng(1);
    let solver = AnomalySolver::default();

    for _ in 0..NUM_SAMPLES {
        let e = random_within(&mut rng, 0.0, 0.999);
        let ecc = random_within(&mut rng, -2.0 * TAU, 2.0 * TAU);

        let nu = solver.true_from_eccentric(e, ecc).unwrap();
        let back = solver.eccentric_from_true(e, nu).unwrap();

        assert!(angle_diff(back, ecc).abs() < 1.0E-12, "e={} E={}", e, ecc);
        assert!((0.0..TAU).contains(&back));
    }
}

#[test]
fn same_half_orbit() {
    // all three anomalies agree on the half orbit
    let mut rng = test_rng(2);
    let solver = AnomalySolver::default();

    for _ in 0..NUM_SAMPLES {
        let e = random_within(&mut rng, 0.0, 0.99);
        let m = random_within(&mut rng, 0.01, TAU - 0.01);

        let set = solver.resolve(e, Anomaly::Mean(m)).unwrap();
        let upper = set.mean < TAU / 2.0;
        assert_eq!(set.eccentric < TAU / 2.0, upper, "{:?}", set);
        assert_eq!(set.true_anomaly < TAU / 2.0, upper, "{:?}", set);
    }
}
