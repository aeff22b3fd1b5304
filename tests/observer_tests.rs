//! Observer and Frame Timing Tests
//!
//! Tests for:
//! - Closed-form drag integration (decay, terminal velocity)
//! - Yaw wrapping and pitch clamping
//! - Direction vectors and focus point
//! - Movement axes from held keys
//! - FrameClock millisecond carry and FpsCounter windows

use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI, TAU};

use bulkhead::app::MovementInput;
use bulkhead::utils::{FpsCounter, FrameClock, Observer, ObserverSettings};
use glam::{Vec2, Vec3};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).abs().max_element() < tolerance
}

fn still_observer() -> Observer {
    Observer::new(&ObserverSettings {
        position: Vec3::ZERO,
        ..ObserverSettings::default()
    })
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn observer_defaults_face_negative_z() {
    let observer = Observer::default();
    assert_eq!(observer.position(), Vec3::new(0.0, 0.0, 14.0));
    assert_eq!(observer.velocity(), Vec3::ZERO);
    assert!(vec3_approx(observer.front(), Vec3::NEG_Z, EPSILON));
    assert!(approx_eq(observer.right().x, 1.0));
    assert!(approx_eq(observer.right().y, 0.0));
    assert!(approx_eq(observer.sensitivity(), 0.0003));
}

#[test]
fn observer_settings_angles_are_wrapped() {
    let observer = Observer::new(&ObserverSettings {
        theta: TAU + 1.0,
        phi: FRAC_PI_2 + 0.25,
        ..ObserverSettings::default()
    });
    assert!(approx_eq(observer.theta(), 1.0));
    assert!(approx_eq(observer.phi(), 0.25));
}

#[test]
fn observer_focus_point_is_one_unit_ahead() {
    let observer = Observer::default();
    let focus = observer.focus_point();
    assert!(approx_eq(focus.distance(observer.position()), 1.0));
    assert!(vec3_approx(focus, Vec3::new(0.0, 0.0, 13.0), EPSILON));
}

// ============================================================================
// Physics
// ============================================================================

#[test]
fn observer_velocity_decays_without_force() {
    let mut observer = still_observer();
    observer.set_velocity(Vec3::X);
    observer.update_position(100);

    // v = v0 · e^(-k t / m), x = v0 · m/k · (1 - e^(-k t / m))
    let decay = (-0.5_f32).exp();
    assert!(approx_eq(observer.velocity().x, decay));
    assert!((observer.position().x - 200.0 * (1.0 - decay)).abs() < 1e-3);
    assert_eq!(observer.velocity().y, 0.0);
}

#[test]
fn observer_reaches_terminal_velocity() {
    let mut observer = still_observer();
    observer.apply_force(1.0, 0.0);
    assert!(vec3_approx(observer.force(), Vec3::NEG_Z * 0.35, EPSILON));

    observer.update_position(100_000);
    // F / k along the view direction
    assert!(vec3_approx(observer.velocity(), Vec3::NEG_Z * 0.07, EPSILON));
}

#[test]
fn observer_force_is_consumed_by_update() {
    let mut observer = still_observer();
    observer.apply_force(1.0, 1.0);
    observer.update_position(16);
    assert_eq!(observer.force(), Vec3::ZERO);
    assert!(observer.velocity().length() > 0.0);
}

#[test]
fn observer_integration_is_frame_rate_independent() {
    let mut coarse = still_observer();
    let mut fine = still_observer();
    coarse.set_velocity(Vec3::new(0.5, 0.0, -0.25));
    fine.set_velocity(Vec3::new(0.5, 0.0, -0.25));

    coarse.update_position(100);
    for _ in 0..10 {
        fine.update_position(10);
    }
    assert!(vec3_approx(coarse.position(), fine.position(), 1e-3));
    assert!(vec3_approx(coarse.velocity(), fine.velocity(), 1e-5));
}

#[test]
fn observer_strafe_stays_horizontal() {
    let mut observer = still_observer();
    observer.set_phi(0.5);
    observer.apply_force(0.0, 1.0);
    assert_eq!(observer.force().y, 0.0);
    assert!(approx_eq(observer.force().x, 0.35));
}

#[test]
fn observer_tick_uses_movement() {
    let mut observer = still_observer();
    let input = MovementInput {
        forward: true,
        ..MovementInput::default()
    };
    observer.apply_movement(&input);
    observer.tick(1000);
    assert!(observer.position().z < 0.0);
    assert!(approx_eq(observer.position().x, 0.0));
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn observer_pitch_is_clamped() {
    let mut observer = Observer::default();
    observer.look(0.0, -1.0e6);
    assert!(approx_eq(observer.phi(), FRAC_PI_2 - 0.001));

    observer.look(0.0, 1.0e7);
    assert!(approx_eq(observer.phi(), -FRAC_PI_2 + 0.001));
}

#[test]
fn observer_yaw_wraps() {
    let mut observer = Observer::default();
    for _ in 0..100 {
        observer.look(10_000.0, 0.0);
    }
    assert!(observer.theta().abs() < TAU);
}

#[test]
fn observer_look_defers_vector_update() {
    let mut observer = Observer::default();
    let before = observer.front();
    observer.look(PI / 2.0 / 0.0003, 0.0);
    assert_eq!(observer.front(), before);

    observer.tick(0);
    assert!(vec3_approx(observer.front(), Vec3::X, 1e-3));
}

#[test]
fn observer_set_theta_refreshes_vectors() {
    let mut observer = Observer::default();
    observer.set_theta(0.0);
    assert!(vec3_approx(observer.front(), Vec3::X, EPSILON));
    let right = observer.right();
    assert!(approx_eq(right.x, 0.0) && approx_eq(right.y, 1.0));

    observer.set_phi(FRAC_PI_2);
    assert!(vec3_approx(observer.front(), Vec3::Y, EPSILON));
}

#[test]
fn observer_position_setters() {
    let mut observer = Observer::default();
    observer.set_x(1.0);
    observer.set_y(2.0);
    observer.set_z(3.0);
    assert_eq!(observer.position(), Vec3::new(1.0, 2.0, 3.0));

    observer.set_position(Vec3::ONE);
    assert_eq!(observer.position(), Vec3::ONE);
}

// ============================================================================
// MovementInput
// ============================================================================

#[test]
fn movement_single_axis_is_unit() {
    let mut input = MovementInput::new();
    assert!(input.is_idle());
    assert_eq!(input.axes(), (0.0, 0.0));

    input.backward = true;
    assert_eq!(input.axes(), (-1.0, 0.0));
}

#[test]
fn movement_diagonal_is_normalized() {
    let input = MovementInput {
        forward: true,
        left: true,
        ..MovementInput::default()
    };
    let (front, right) = input.axes();
    assert!(approx_eq(front, FRAC_1_SQRT_2));
    assert!(approx_eq(right, -FRAC_1_SQRT_2));
    assert!(approx_eq(Vec2::new(front, right).length(), 1.0));
}

#[test]
fn movement_opposite_keys_cancel() {
    let mut input = MovementInput {
        forward: true,
        backward: true,
        right: true,
        ..MovementInput::default()
    };
    assert_eq!(input.axes(), (0.0, 1.0));

    input.clear();
    assert!(input.is_idle());
}

// ============================================================================
// FrameClock / FpsCounter
// ============================================================================

#[test]
fn frame_clock_carries_remainder() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(16_667), 16);
    assert_eq!(clock.remainder_us(), 667);
    assert_eq!(clock.tick(16_667), 17);
    assert_eq!(clock.tick(16_667), 17);
    assert_eq!(clock.remainder_us(), 1);

    assert_eq!(clock.elapsed_ms, 50);
    assert_eq!(clock.frame_count, 3);
    assert!((clock.fps() - 60.0).abs() < 0.01);
}

#[test]
fn frame_clock_accepts_durations() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.fps(), 0.0);
    assert_eq!(clock.tick_duration(std::time::Duration::from_millis(40)), 40);
    assert_eq!(clock.delta_ms, 40);
}

#[test]
fn frame_clock_saturates_on_huge_frames() {
    let mut clock = FrameClock::new();
    clock.tick(1_999);
    assert_eq!(clock.remainder_us(), 999);

    let delta = clock.tick_duration(std::time::Duration::MAX);
    assert_eq!(delta, u64::MAX / 1000);
    assert_eq!(clock.remainder_us(), u64::MAX % 1000);

    clock.tick(u64::MAX);
    assert_eq!(clock.elapsed_ms, 1 + 2 * (u64::MAX / 1000));
    assert_eq!(clock.frame_count, 3);
}

#[test]
fn fps_counter_reports_once_per_second() {
    let mut counter = FpsCounter::new();
    for _ in 0..62 {
        assert_eq!(counter.update(16), None);
    }
    let fps = counter.update(16).unwrap();
    assert!(approx_eq(fps, 62.5));
    assert!(approx_eq(counter.current_fps, 62.5));
    assert_eq!(counter.update(16), None);
}
