// Host-side tests for vertex displacement.

use glam::{Vec2, Vec3};
use orb_core::deform::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_direction(rng: &mut StdRng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if let Some(n) = v.try_normalize() {
            return n;
        }
    }
}

#[test]
fn smoothstep_handles_both_ramp_directions() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);

    // Falling ramp
    assert_eq!(smoothstep(0.3, -1.0, 0.3), 0.0);
    assert_eq!(smoothstep(0.3, -1.0, -1.0), 1.0);
    assert!(smoothstep(0.3, -1.0, -0.5) > smoothstep(0.3, -1.0, 0.0));
}

#[test]
fn zero_strength_pointer_term_is_exactly_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..256 {
        let dir = random_direction(&mut rng);
        let pointer = Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        assert_eq!(pointer_displacement(dir, pointer, 0.0), 0.0);

        let t = rng.gen_range(0.0..100.0);
        assert_eq!(displacement(dir, t, pointer, 0.0), ambient_displacement(dir, t));
    }
}

#[test]
fn indent_faces_the_pointer() {
    let pointer = Vec2::new(0.5, -0.25);
    let axis = pointer_axis(pointer);
    assert!((axis.length() - 1.0).abs() < 1e-6);

    let d = pointer_displacement(axis, pointer, 1.0);
    assert!((d - -0.15).abs() < 1e-6, "indent = {d}");

    let half = pointer_displacement(axis, pointer, 0.5);
    assert!((half - -0.075).abs() < 1e-6);
}

#[test]
fn far_side_bulges_outward() {
    let pointer = Vec2::ZERO;
    let axis = pointer_axis(pointer);
    let d = pointer_displacement(-axis, pointer, 1.0);
    assert!((d - 0.08).abs() < 1e-6, "bulge = {d}");
}

#[test]
fn rim_bulges_sideways() {
    // Pointer at center: axis is +z, so +x is on the rim
    let d = pointer_displacement(Vec3::X, Vec2::ZERO, 1.0);
    assert!(d > 0.0);
    assert!(d < 0.06);
}

#[test]
fn ambient_displacement_is_bounded_and_moves() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut moved = false;
    for _ in 0..512 {
        let dir = random_direction(&mut rng);
        let t = rng.gen_range(0.0..600.0);
        let a = ambient_displacement(dir, t);
        assert!(a.abs() <= 0.2, "ambient {a} at t={t}");
        if (ambient_displacement(dir, t + 1.0) - a).abs() > 1e-4 {
            moved = true;
        }
    }
    assert!(moved);
}

#[test]
fn deform_vertex_moves_along_the_radius() {
    let mut rng = StdRng::seed_from_u64(9);
    let pointer = Vec2::new(-0.3, 0.6);
    for _ in 0..128 {
        let dir = random_direction(&mut rng);
        let t = rng.gen_range(0.0..50.0);
        let moved = deform_vertex(dir, t, pointer, 0.7);
        let expected = 1.0 + displacement(dir, t, pointer, 0.7);

        assert!((moved.length() - expected).abs() < 1e-5);
        assert!(moved.normalize().dot(dir) > 0.9999);
    }
}

#[test]
fn deformation_is_deterministic() {
    let p = Vec3::new(0.2, -0.4, 0.89).normalize();
    let a = deform_vertex(p, 12.5, Vec2::new(0.1, 0.2), 0.4);
    let b = deform_vertex(p, 12.5, Vec2::new(0.1, 0.2), 0.4);
    assert_eq!(a, b);
}
