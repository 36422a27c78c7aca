use rstest::*;

use std::f64::consts::TAU;

use crate::{
    error::{Error, ErrorKind},
    prelude::{Anomaly, AnomalySolver, KeplerSolverOpts},
    tests::init_logger,
    utils::angle_diff,
};

#[test]
fn moderate_eccentricity() {
    init_logger();

    let e = 0.5;
    let m = 0.2;

    let solver = AnomalySolver::default();
    let ecc = solver.eccentric_from_mean(e, m).unwrap();
    assert!((ecc - 0.390175249625).abs() < 1.0E-11, "E={}", ecc);

    let nu = crate::true_from_mean(e, m, None).unwrap();
    assert!((nu - 0.659516385557).abs() < 1.0E-11, "ν={}", nu);

    let back = crate::mean_from_true(e, nu).unwrap();
    assert!((back - m).abs() < 1.0E-12);

    assert!((crate::eccentric_from_true(e, nu).unwrap() - ecc).abs() < 1.0E-12);
    assert!((crate::true_from_eccentric(e, ecc).unwrap() - nu).abs() < 1.0E-12);
}

#[test]
fn reached_within_five_iterations() {
    let opts = KeplerSolverOpts::default().with_max_iterations(5);
    let nu = crate::true_from_mean(0.5, 0.2, Some(opts)).unwrap();
    assert!((nu - 0.659516385557).abs() < 1.0E-11);

    let opts = KeplerSolverOpts::default().with_max_iterations(2);
    match crate::true_from_mean(0.5, 0.2, Some(opts)) {
        Err(e @ Error::Convergence { .. }) => {
            assert_eq!(e.kind(), ErrorKind::Convergence);
        },
        other => panic!("expecting convergence error, got {:?}", other),
    }
}

#[rstest]
#[case(0.0)]
#[case(0.01)]
#[case(0.2)]
#[case(0.5)]
#[case(0.8)]
#[case(0.9)]
#[case(0.95)]
#[case(0.99)]
fn converges_with_default_cap(#[case] e: f64) {
    let solver = AnomalySolver::default();
    for i in 0..72 {
        let m = i as f64 * TAU / 72.0;
        let ecc = solver.eccentric_from_mean(e, m).unwrap();
        let residual = angle_diff(ecc - e * ecc.sin(), m);
        assert!(residual.abs() < 1.0E-12, "e={} M={} residual={:.3E}", e, m, residual);
    }
}

#[rstest]
#[case(0.95)]
#[case(0.98)]
#[case(0.99)]
fn converges_close_to_periapsis(#[case] e: f64) {
    // dense sweep on both sides of M = 0 (mod 2π)
    let solver = AnomalySolver::default();
    let n = 20_000;
    for i in 0..=n {
        let offset = 0.05 * i as f64 / n as f64;
        for m in [TAU - offset, offset] {
            let ecc = solver
                .eccentric_from_mean(e, m)
                .unwrap_or_else(|err| panic!("e={} M={}: {}", e, m, err));
            assert!((0.0..TAU).contains(&ecc));
            let residual = angle_diff(ecc - e * ecc.sin(), m);
            assert!(residual.abs() < 1.0E-12, "e={} M={} residual={:.3E}", e, m, residual);
        }
    }
}

#[test]
fn fast_preset() {
    let fast = AnomalySolver::new(KeplerSolverOpts::fast_preset());
    let precise = AnomalySolver::default();
    let a = fast.true_from_mean(0.7, 2.5).unwrap();
    let b = precise.true_from_mean(0.7, 2.5).unwrap();
    assert!((a - b).abs() < 1.0E-7);
}

#[rstest]
#[case(1.0)]
#[case(1.2)]
#[case(-0.01)]
#[case(f64::NAN)]
fn elliptical_only(#[case] e: f64) {
    for result in [
        crate::true_from_mean(e, 1.0, None),
        crate::mean_from_true(e, 1.0),
        crate::true_from_eccentric(e, 1.0),
        crate::eccentric_from_true(e, 1.0),
    ] {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(err.to_string().contains("eccentricity"), "{}", err);
    }
}

#[test]
fn resolved_set_is_normalized() {
    let solver = AnomalySolver::default();
    for anomaly in [
        Anomaly::Mean(-0.3),
        Anomaly::Eccentric(10.0),
        Anomaly::True(-4.0 * TAU),
    ] {
        let set = solver.resolve(0.6, anomaly).unwrap();
        for value in [set.mean, set.eccentric, set.true_anomaly] {
            assert!((0.0..TAU).contains(&value), "{} -> {:?}", anomaly, set);
        }
    }
}
