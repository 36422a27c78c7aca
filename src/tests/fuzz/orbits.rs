use log::info;
use std::f64::consts::{PI, TAU};

use crate::{
    prelude::{
        Anomaly, Frame, GeodeticConverter, GeodeticCoordinate, KeplerianCartesianConverter,
        KeplerianElements,
    },
    tests::{
        fuzz::{random_within, test_rng},
        init_logger,
    },
    utils::angle_diff,
};

const NUM_ORBITS: usize = 2_000;

const NUM_SITES: usize = 5_000;

#[test]
fn random_orbits_round_trip() {
    init_logger();

    let mut rng = test_rng(20);
    let converter = KeplerianCartesianConverter::default();
    let solver = *converter.solver();

    let mut worst_m = 0.0_f64;

    for _ in 0..NUM_ORBITS {
        let kep = KeplerianElements::new(
            random_within(&mut rng, 6600.0, 50000.0),
            random_within(&mut rng, 0.001, 0.9),
            random_within(&mut rng, 0.01, PI - 0.01),
            random_within(&mut rng, 0.0, TAU),
            random_within(&mut rng, 0.0, TAU),
            Anomaly::Mean(random_within(&mut rng, 0.0, TAU)),
        )
        .unwrap();

        let state = converter.to_cartesian(&kep, Frame::GCRS).unwrap();
        let solved = converter.to_elements(&state).unwrap();

        assert!(
            (solved.semi_major_axis_km() - kep.semi_major_axis_km()).abs()
                < 1.0E-9 * kep.semi_major_axis_km(),
            "{} / {}",
            solved,
            kep
        );
        assert!(
            (solved.eccentricity() - kep.eccentricity()).abs() < 1.0E-9,
            "{} / {}",
            solved,
            kep
        );
        assert!(
            (solved.inclination_rad() - kep.inclination_rad()).abs() < 1.0E-9,
            "{} / {}",
            solved,
            kep
        );
        assert!(
            angle_diff(solved.raan_rad(), kep.raan_rad()).abs() < 1.0E-9,
            "{} / {}",
            solved,
            kep
        );
        assert!(
            angle_diff(solved.aop_rad(), kep.aop_rad()).abs() < 1.0E-8,
            "{} / {}",
            solved,
            kep
        );

        let m = solved.mean_anomaly_rad(&solver).unwrap();
        let err = angle_diff(m, kep.anomaly().value_rad()).abs();
        worst_m = worst_m.max(err);
        assert!(err < 1.0E-8, "{} / {}", solved, kep);
    }

    info!("worst mean anomaly error: {:.3E} rad", worst_m);
}

#[test]
fn random_sites_round_trip() {
    let mut rng = test_rng(21);
    let converter = GeodeticConverter::default();

    for _ in 0..NUM_SITES {
        let coords = GeodeticCoordinate::new(
            random_within(&mut rng, -90.0, 90.0),
            random_within(&mut rng, -180.0, 180.0),
            random_within(&mut rng, -5.0, 40000.0),
        )
        .unwrap();

        let position = converter.geodetic_to_cartesian(&coords);
        let solved = converter.cartesian_to_geodetic(&position).unwrap();

        assert!(
            (solved.latitude_deg - coords.latitude_deg).abs() < 1.0E-9,
            "{} / {}",
            solved,
            coords
        );
        assert!(
            (solved.altitude_km - coords.altitude_km).abs() < 1.0E-8,
            "{} / {}",
            solved,
            coords
        );

        if coords.latitude_deg.abs() < 89.9999 {
            let dlon =
                (solved.longitude_deg - coords.longitude_deg + 180.0).rem_euclid(360.0) - 180.0;
            assert!(dlon.abs() < 1.0E-9, "{} / {}", solved, coords);
        }
    }
}
