// Host-side tests for target sampling and volume configuration.

use echo_core::*;
use glam::Vec3;
use rand::prelude::*;

#[test]
fn generate_returns_requested_count_within_bounds() {
    let volume = SensingVolume::new(Vec3::new(3.0, 0.0, -4.0), 20.0, 10.0).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let points = generate(&volume, 200, 0.5, &mut rng);
    assert_eq!(points.len(), 200);
    for p in &points {
        assert!((p.position.x - 3.0).abs() <= 10.0 + 1e-4, "x out of range: {p:?}");
        assert!((p.position.z + 4.0).abs() <= 5.0 + 1e-4, "z out of range: {p:?}");
        assert_eq!(p.position.y, 0.5);
    }
}

#[test]
fn generate_zero_count_is_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate(&SensingVolume::default(), 0, 0.5, &mut rng).is_empty());
}

#[test]
fn generate_is_reproducible_for_a_seed() {
    let volume = SensingVolume::default();
    let a = generate(&volume, 10, 0.5, &mut StdRng::seed_from_u64(42));
    let b = generate(&volume, 10, 0.5, &mut StdRng::seed_from_u64(42));
    let c = generate(&volume, 10, 0.5, &mut StdRng::seed_from_u64(43));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn generate_spreads_over_the_footprint() {
    // Points land on both sides of the center on each axis
    let volume = SensingVolume::default();
    let points = generate(&volume, 500, 0.5, &mut StdRng::seed_from_u64(3));
    assert!(points.iter().any(|p| p.position.x < -5.0));
    assert!(points.iter().any(|p| p.position.x > 5.0));
    assert!(points.iter().any(|p| p.position.z < -5.0));
    assert!(points.iter().any(|p| p.position.z > 5.0));
    assert!(points.iter().all(|p| volume.contains_xz(p.position)));
}

#[test]
fn zero_extent_collapses_to_center() {
    let volume = SensingVolume::new(Vec3::new(1.0, 0.0, 2.0), 0.0, 0.0).unwrap();
    let points = generate(&volume, 5, 0.5, &mut StdRng::seed_from_u64(9));
    for p in points {
        assert_eq!(p.position, Vec3::new(1.0, 0.5, 2.0));
    }
}

#[test]
fn volume_rejects_negative_or_non_finite_extents() {
    assert!(matches!(
        SensingVolume::new(Vec3::ZERO, -1.0, 5.0),
        Err(EchoError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        SensingVolume::new(Vec3::ZERO, 5.0, f32::NAN),
        Err(EchoError::InvalidConfiguration(_))
    ));
    assert!(SensingVolume::new(Vec3::ZERO, 0.0, 0.0).is_ok());
}

#[test]
fn square_around_spans_both_axes() {
    let volume = SensingVolume::square_around(Vec3::ZERO, DEFAULT_MAX_DISTANCE).unwrap();
    assert_eq!(volume.width(), 16.0);
    assert_eq!(volume.depth(), 16.0);
    assert!(volume.contains_xz(Vec3::new(8.0, 3.0, -8.0)));
    assert!(!volume.contains_xz(Vec3::new(8.1, 0.0, 0.0)));
}

#[test]
fn config_validation_catches_bad_ranges() {
    assert!(EchoConfig::default().validate().is_ok());

    let zero_range = EchoConfig {
        max_distance: 0.0,
        ..EchoConfig::default()
    };
    assert!(matches!(
        zero_range.validate(),
        Err(EchoError::InvalidConfiguration(_))
    ));

    let negative_radius = EchoConfig {
        radar_radius: -100.0,
        ..EchoConfig::default()
    };
    assert!(negative_radius.validate().is_err());

    let bad_height = EchoConfig {
        target_height: f32::INFINITY,
        ..EchoConfig::default()
    };
    assert!(bad_height.validate().is_err());
}
