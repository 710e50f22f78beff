// Host-side tests for pointer smoothing.

use glam::Vec2;
use orb_core::interaction::{approach, proximity_strength};
use orb_core::{InteractionSmoother, OrbError, PointerEvent, SmoothingConfig, TargetRect};

/// 400x400 element at the origin, centered on (200, 200).
fn square() -> TargetRect {
    TargetRect::new(0.0, 0.0, 400.0, 400.0).unwrap()
}

fn moved(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Moved { x, y }
}

#[test]
fn target_rect_rejects_empty_area() {
    assert_eq!(
        TargetRect::new(0.0, 0.0, 0.0, 10.0),
        Err(OrbError::ZeroSizedTarget {
            width: 0.0,
            height: 10.0
        })
    );
    assert!(TargetRect::new(0.0, 0.0, 10.0, -1.0).is_err());
    assert!(TargetRect::new(0.0, 0.0, f32::NAN, 10.0).is_err());
}

#[test]
fn target_rect_normalizes_with_y_up() {
    let rect = TargetRect::new(100.0, 50.0, 200.0, 100.0).unwrap();
    assert_eq!(rect.center(), Vec2::new(200.0, 100.0));
    assert_eq!(rect.half_extent(), Vec2::new(100.0, 50.0));

    assert_eq!(rect.normalize(Vec2::new(200.0, 100.0)), Vec2::ZERO);
    assert_eq!(rect.normalize(Vec2::new(300.0, 50.0)), Vec2::new(1.0, 1.0));
    assert_eq!(rect.normalize(Vec2::new(100.0, 150.0)), Vec2::new(-1.0, -1.0));
}

#[test]
fn proximity_falls_off_linearly() {
    assert_eq!(proximity_strength(0.0, 120.0), 1.0);
    assert_eq!(proximity_strength(120.0, 120.0), 0.0);
    assert!((proximity_strength(60.0, 120.0) - 0.5).abs() < 1e-6);
    assert!((proximity_strength(30.0, 120.0) - 0.75).abs() < 1e-6);
    assert_eq!(proximity_strength(200.0, 120.0), 0.0);
}

#[test]
fn approach_moves_a_fraction_of_the_gap() {
    assert!((approach(0.0, 1.0, 0.08) - 0.08).abs() < 1e-7);
    assert!((approach(1.0, 0.0, 0.12) - 0.88).abs() < 1e-7);
    assert_eq!(approach(0.5, 0.5, 0.12), 0.5);
}

#[test]
fn pointer_at_center_converges_geometrically() {
    let rect = square();
    let mut s = InteractionSmoother::default();
    s.handle(moved(200.0, 200.0), &rect);

    assert_eq!(s.pointer().strength_target, 1.0);
    assert_eq!(s.pointer().target, Vec2::ZERO);

    let mut previous_error = 1.0f32;
    for n in 1..=60 {
        s.update();
        let strength = s.pointer().smoothed_strength;
        let expected = 1.0 - 0.92f32.powi(n);
        assert!(
            (strength - expected).abs() < 1e-4,
            "frame {n}: {strength} vs {expected}"
        );

        // Monotone, never overshoots
        let error = 1.0 - strength;
        assert!(error > 0.0);
        assert!(error < previous_error);
        previous_error = error;
    }
    // Centered pointer pushes nowhere
    assert_eq!(s.offset(), Vec2::ZERO);
}

#[test]
fn pointer_out_of_range_has_no_effect() {
    let rect = square();
    let mut s = InteractionSmoother::default();
    s.handle(moved(400.0, 200.0), &rect);
    assert_eq!(s.pointer().strength_target, 0.0);
    assert_eq!(s.pointer().target, Vec2::ZERO);

    for _ in 0..30 {
        s.update();
    }
    assert_eq!(s.pointer().smoothed_strength, 0.0);
    assert_eq!(s.offset(), Vec2::ZERO);
}

#[test]
fn proximity_boundary_is_exclusive() {
    let rect = square();
    let mut s = InteractionSmoother::default();
    s.handle(moved(250.0, 200.0), &rect);
    assert!((s.pointer().target.x - 0.25).abs() < 1e-6);

    // Exactly 120 px away does not update the direction
    s.handle(moved(320.0, 200.0), &rect);
    assert_eq!(s.pointer().strength_target, 0.0);
    assert!((s.pointer().target.x - 0.25).abs() < 1e-6);
}

#[test]
fn direction_is_sticky_while_fading_out() {
    let rect = square();
    let mut s = InteractionSmoother::default();
    s.handle(moved(260.0, 200.0), &rect);
    for _ in 0..20 {
        s.update();
    }
    let before = s.pointer().target;

    s.handle(PointerEvent::Ended, &rect);
    assert_eq!(s.pointer().strength_target, 0.0);
    assert_eq!(s.pointer().target, before);

    let mut last = s.pointer().smoothed_strength;
    for _ in 0..20 {
        s.update();
        let now = s.pointer().smoothed_strength;
        assert!(now < last);
        last = now;
    }
    // Smoothed direction keeps approaching the retained target
    assert!(s.pointer().smoothed.x > 0.0);
}

#[test]
fn orb_is_pushed_away_from_pointer() {
    let rect = square();
    let mut s = InteractionSmoother::default();
    // 60 px right of center: direction (0.3, 0), strength 0.5
    s.handle(moved(260.0, 200.0), &rect);
    assert!((s.pointer().strength_target - 0.5).abs() < 1e-6);

    for _ in 0..500 {
        s.update();
    }
    let p = s.pointer();
    assert!((p.smoothed.x - 0.3).abs() < 1e-4);
    assert!((p.smoothed_strength - 0.5).abs() < 1e-4);
    assert!((s.offset().x - -0.03).abs() < 1e-4, "offset {:?}", s.offset());
    assert!(s.offset().y.abs() < 1e-6);
}

#[test]
fn pointer_above_pushes_down() {
    let rect = square();
    let mut s = InteractionSmoother::default();
    s.handle(moved(200.0, 150.0), &rect);
    assert!(s.pointer().target.y > 0.0);
    for _ in 0..100 {
        s.update();
    }
    assert!(s.offset().y < 0.0);
}

#[test]
fn custom_proximity_radius() {
    let rect = square();
    let config = SmoothingConfig {
        proximity_px: 50.0,
        ..SmoothingConfig::default()
    };
    let mut s = InteractionSmoother::new(config);
    s.handle(moved(260.0, 200.0), &rect);
    assert_eq!(s.pointer().strength_target, 0.0);

    s.handle(moved(225.0, 200.0), &rect);
    assert!((s.pointer().strength_target - 0.5).abs() < 1e-6);
    assert_eq!(s.config().proximity_px, 50.0);
}
