//! Animation System Tests
//!
//! Tests for:
//! - Easing curve boundary values and midpoint continuity
//! - Animation windows, finishing and reset
//! - AnimationGroup shared clock
//! - AnimationPlayer selection and auto-stop

use bulkhead::animation::{
    Animation, AnimationGroup, AnimationPlayer, AnimationState, Easing, PlaybackStatus,
};
use bulkhead::errors::Error;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn write(target: &mut f32, value: f32) {
    *target = value;
}

#[derive(Debug, Default)]
struct Pair {
    a: f32,
    b: f32,
}

fn linear(start: u64, duration: u64, first: f32, last: f32) -> Animation<f32> {
    Animation::new(start, duration, first, last, Easing::Linear, write)
}

// ============================================================================
// Easing
// ============================================================================

fn is_exponential(easing: Easing) -> bool {
    matches!(
        easing,
        Easing::ExponentialIn | Easing::ExponentialOut | Easing::ExponentialInOut
    )
}

#[test]
fn easing_named_curves_start_at_zero_and_end_at_one() {
    for easing in Easing::NAMED.iter().copied().filter(|e| !is_exponential(*e)) {
        assert!(approx_eq(easing.apply(0.0), 0.0), "{} at 0", easing.name());
        assert!(approx_eq(easing.apply(1.0), 1.0), "{} at 1", easing.name());
    }
}

#[test]
fn easing_exponential_boundaries_are_exact() {
    assert_eq!(Easing::ExponentialIn.apply(0.0), 2.0_f32.powi(-10));
    assert_eq!(Easing::ExponentialIn.apply(1.0), 1.0);
    assert_eq!(Easing::ExponentialOut.apply(0.0), 0.0);
    assert_eq!(Easing::ExponentialOut.apply(1.0), 1.0 - 2.0_f32.powi(-10));
    assert_eq!(Easing::ExponentialInOut.apply(0.0), 2.0_f32.powi(-11));
    assert_eq!(Easing::ExponentialInOut.apply(1.0), 1.0 - 2.0_f32.powi(-11));
}

#[test]
fn easing_in_out_curves_meet_at_half() {
    let in_out = [
        Easing::QuadraticInOut,
        Easing::CubicInOut,
        Easing::QuarticInOut,
        Easing::QuinticInOut,
        Easing::SinusoidalInOut,
        Easing::ExponentialInOut,
        Easing::CircularInOut,
    ];
    for easing in in_out {
        let below = easing.apply(0.5 - 1e-4);
        let at = easing.apply(0.5);
        let above = easing.apply(0.5 + 1e-4);
        assert!(approx_eq(at, 0.5), "{} at 0.5 = {at}", easing.name());
        // the circular curve is vertical at the seam
        if !matches!(easing, Easing::CircularInOut) {
            assert!(
                (below - at).abs() < 1e-3 && (above - at).abs() < 1e-3,
                "{} jumps",
                easing.name()
            );
        }
    }
}

#[test]
fn easing_in_is_slower_than_out_early_on() {
    assert!(Easing::QuadraticIn.apply(0.25) < Easing::Linear.apply(0.25));
    assert!(Easing::QuadraticOut.apply(0.25) > Easing::Linear.apply(0.25));
    assert!(approx_eq(Easing::CubicIn.apply(0.5), 0.125));
}

#[test]
fn easing_hold_and_custom() {
    assert_eq!(Easing::Hold.apply(0.3), 0.0);
    assert_eq!(Easing::Hold.apply(1.0), 0.0);

    let square = Easing::Custom(|t| t * t);
    assert!(approx_eq(square.apply(0.5), 0.25));
    assert_eq!(square.name(), "custom");
}

// ============================================================================
// Animation
// ============================================================================

#[test]
fn animation_linear_end_to_end() {
    let mut value = -1.0;
    let mut anim = Animation::from_start(1000, 0.0, 10.0, Easing::Linear, write);

    anim.advance(0, &mut value);
    assert_eq!(value, 0.0);
    assert_eq!(anim.state(), AnimationState::Running);

    anim.advance(500, &mut value);
    assert!(approx_eq(value, 5.0));
    assert!(!anim.is_finished());

    anim.advance(600, &mut value);
    assert_eq!(value, 10.0);
    assert!(anim.is_finished());

    anim.advance(100, &mut value);
    assert_eq!(value, 10.0);
    assert!(anim.is_finished());
}

#[test]
fn animation_first_tick_ignores_delta() {
    let mut value = -1.0;
    let mut anim = linear(0, 1000, 0.0, 10.0);

    anim.advance(700, &mut value);
    assert_eq!(value, 0.0);
    assert_eq!(anim.elapsed(), 0);
}

#[test]
fn animation_writes_nothing_before_window() {
    let mut value = -1.0;
    let mut anim = linear(300, 100, 0.0, 1.0);

    anim.advance(0, &mut value);
    anim.advance(200, &mut value);
    assert_eq!(value, -1.0);

    anim.advance(150, &mut value);
    assert!(approx_eq(value, 0.5));
}

#[test]
fn animation_finished_state_is_idempotent() {
    let mut value = 0.0;
    let mut anim = linear(0, 100, 0.0, 1.0);
    anim.advance(0, &mut value);
    anim.advance(200, &mut value);
    assert!(anim.is_finished());

    // no write once finished
    value = 42.0;
    anim.advance(50, &mut value);
    anim.advance(5000, &mut value);
    assert_eq!(value, 42.0);
    assert_eq!(anim.state(), AnimationState::Finished);
}

#[test]
fn animation_reset_restarts_playback() {
    let mut value = 0.0;
    let mut anim = linear(0, 100, 2.0, 4.0);
    anim.advance(0, &mut value);
    anim.advance(500, &mut value);
    assert!(anim.is_finished());

    value = -1.0;
    anim.reset();
    assert_eq!(anim.state(), AnimationState::NotStarted);
    assert_eq!(value, -1.0);

    anim.advance(900, &mut value);
    assert_eq!(value, 2.0);
    anim.advance(50, &mut value);
    assert!(approx_eq(value, 3.0));
}

#[test]
fn animation_hold_pins_value() {
    let mut value = 0.0;
    let mut anim = Animation::hold(0, 100, 7.5, write);

    anim.advance(0, &mut value);
    assert_eq!(value, 7.5);
    anim.advance(60, &mut value);
    assert_eq!(value, 7.5);
    assert!(matches!(anim.easing(), Easing::Hold));
}

#[test]
fn animation_zero_duration_saturates() {
    let mut value = 0.0;
    let mut anim = linear(0, 0, 1.0, 3.0);

    anim.advance(0, &mut value);
    assert_eq!(value, 3.0);
    assert!(!anim.value_at(0).is_nan());

    anim.advance(1, &mut value);
    assert!(anim.is_finished());
}

#[test]
fn animation_window_accessors() {
    let anim = linear(250, 500, 0.0, 1.0);
    assert_eq!(anim.start(), 250);
    assert_eq!(anim.duration(), 500);
    assert_eq!(anim.end(), 750);
    assert!(approx_eq(anim.value_at(250), 0.5));
}

// ============================================================================
// AnimationGroup
// ============================================================================

fn two_lengths() -> AnimationGroup<Pair> {
    AnimationGroup::new(
        "pair",
        vec![
            Animation::from_start(500, 0.0, 1.0, Easing::Linear, |p: &mut Pair, v| p.a = v),
            Animation::from_start(1000, 0.0, 1.0, Easing::Linear, |p: &mut Pair, v| p.b = v),
        ],
    )
}

#[test]
fn group_finishes_with_its_longest_member() {
    let mut pair = Pair::default();
    let mut group = two_lengths();
    assert_eq!(group.duration(), 1000);

    group.advance(0, &mut pair);
    group.advance(400, &mut pair);
    assert!(!group.is_finished());
    assert!(approx_eq(pair.a, 0.8));
    assert!(approx_eq(pair.b, 0.4));

    // the clock has to pass the end of the last window
    group.advance(601, &mut pair);
    assert!(group.is_finished());
    assert_eq!(pair.a, 1.0);
    assert_eq!(pair.b, 1.0);
}

#[test]
fn group_ticks_every_member_each_advance() {
    let mut pair = Pair::default();
    let mut group = two_lengths();

    group.advance(0, &mut pair);
    group.advance(600, &mut pair);
    // first member is done, second keeps receiving the tick
    assert_eq!(pair.a, 1.0);
    assert!(approx_eq(pair.b, 0.6));

    group.advance(200, &mut pair);
    assert!(approx_eq(pair.b, 0.8));
}

#[test]
fn group_reset_clears_finished() {
    let mut pair = Pair::default();
    let mut group = two_lengths();
    group.advance(0, &mut pair);
    group.advance(2000, &mut pair);
    assert!(group.is_finished());

    group.reset();
    assert!(!group.is_finished());
    assert!(group.animations().all(|a| a.state() == AnimationState::NotStarted));
}

#[test]
fn empty_group_finishes_on_first_advance() {
    let mut value = 0.0;
    let mut group: AnimationGroup<f32> = AnimationGroup::new("empty", Vec::new());
    assert!(group.is_empty());
    group.advance(0, &mut value);
    assert!(group.is_finished());
}

// ============================================================================
// AnimationPlayer
// ============================================================================

fn player() -> AnimationPlayer<f32> {
    let groups = vec![
        AnimationGroup::new("a", vec![linear(0, 100, 0.0, 1.0)]),
        AnimationGroup::new("b", vec![linear(0, 200, 0.0, 2.0)]),
        AnimationGroup::new("c", vec![linear(0, 300, 0.0, 3.0)]),
    ];
    AnimationPlayer::new(groups).unwrap()
}

#[test]
fn player_requires_groups() {
    assert!(matches!(
        AnimationPlayer::<f32>::new(Vec::new()),
        Err(Error::NoAnimationGroups)
    ));
}

#[test]
fn player_selection_wraps() {
    let mut player = player();
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.previous(), 2);
    assert_eq!(player.current().name(), "c");
    assert_eq!(player.next(), 0);
    assert_eq!(player.select(7), 1);
    assert_eq!(player.select(-4), 2);
}

#[test]
fn player_idle_when_paused() {
    let mut value = -1.0;
    let mut player = player();
    assert_eq!(player.advance(50, &mut value), PlaybackStatus::Idle);
    assert_eq!(value, -1.0);
}

#[test]
fn player_stops_and_rewinds_finished_group() {
    let mut value = 0.0;
    let mut player = player();
    assert!(player.toggle());

    assert_eq!(player.advance(0, &mut value), PlaybackStatus::Playing);
    assert_eq!(player.advance(50, &mut value), PlaybackStatus::Playing);
    assert_eq!(player.advance(100, &mut value), PlaybackStatus::Finished);
    assert_eq!(value, 1.0);
    assert!(!player.is_playing());

    // replay starts from the beginning
    player.play();
    player.advance(999, &mut value);
    assert_eq!(value, 0.0);
}

#[test]
fn player_select_resets_and_pauses() {
    let mut value = 0.0;
    let mut player = player();
    player.select(1);
    player.play();
    player.advance(0, &mut value);
    player.advance(100, &mut value);
    assert!(approx_eq(value, 1.0));

    player.select(1);
    assert!(!player.is_playing());
    assert!(
        player
            .current()
            .animations()
            .all(|a| a.state() == AnimationState::NotStarted)
    );
}

#[test]
fn player_toggle_pauses_mid_group() {
    let mut value = 0.0;
    let mut player = player();
    player.toggle();
    player.advance(0, &mut value);
    player.advance(40, &mut value);
    assert!(!player.toggle());

    player.advance(1000, &mut value);
    assert!(approx_eq(value, 0.4));

    player.toggle();
    player.advance(20, &mut value);
    assert!(approx_eq(value, 0.6));
}
