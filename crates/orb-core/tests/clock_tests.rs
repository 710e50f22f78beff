// Host-side tests for the pausable clock.

use instant::Instant;
use orb_core::Clock;
use std::time::Duration;

fn at(t0: Instant, secs: f64) -> Instant {
    t0 + Duration::from_secs_f64(secs)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn running_clock_tracks_wall_time() {
    let t0 = Instant::now();
    let clock = Clock::started_at(t0);
    assert!(clock.is_running());
    assert!(approx(clock.elapsed_at(t0), 0.0));
    assert!(approx(clock.elapsed_at(at(t0, 1.5)), 1.5));
}

#[test]
fn resume_continues_without_a_jump() {
    let t0 = Instant::now();
    let mut clock = Clock::started_at(t0);

    clock.stop_at(at(t0, 2.0));
    assert!(!clock.is_running());
    assert!(approx(clock.elapsed_at(at(t0, 10.0)), 2.0));

    clock.start_at(at(t0, 10.0));
    assert!(approx(clock.elapsed_at(at(t0, 10.0)), 2.0));
    assert!(approx(clock.elapsed_at(at(t0, 11.0)), 3.0));
}

#[test]
fn start_and_stop_are_idempotent() {
    let t0 = Instant::now();
    let mut clock = Clock::started_at(t0);

    clock.start_at(at(t0, 5.0));
    assert!(approx(clock.elapsed_at(at(t0, 6.0)), 6.0));

    clock.stop_at(at(t0, 6.0));
    clock.stop_at(at(t0, 9.0));
    assert!(approx(clock.elapsed_at(at(t0, 20.0)), 6.0));
}

#[test]
fn instants_before_start_do_not_go_negative() {
    let t0 = Instant::now();
    let later = at(t0, 3.0);
    let clock = Clock::started_at(later);
    assert!(approx(clock.elapsed_at(t0), 0.0));
}

#[test]
fn default_clock_is_running() {
    let clock = Clock::default();
    assert!(clock.is_running());
    assert!(clock.elapsed() >= 0.0);
}
