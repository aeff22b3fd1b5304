//! The five scripted sequences of the walkthrough.

use std::f32::consts::{FRAC_PI_2, PI};

use bulkhead::{Animation, AnimationGroup, Easing};

use crate::scene::State;

type Anim = Animation<State>;

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

fn x(s: &mut State, v: f32) {
    s.observer.set_x(v);
}

fn y(s: &mut State, v: f32) {
    s.observer.set_y(v);
}

fn z(s: &mut State, v: f32) {
    s.observer.set_z(v);
}

fn theta(s: &mut State, v: f32) {
    s.observer.set_theta(v);
}

fn phi(s: &mut State, v: f32) {
    s.observer.set_phi(v);
}

fn door(s: &mut State, v: f32) {
    s.params.door_angle = v;
}

fn valve(s: &mut State, v: f32) {
    s.params.valve_angle = v;
}

fn lock(s: &mut State, v: f32) {
    s.params.lock_progress = v;
}

fn solidness(s: &mut State, v: f32) {
    s.params.solidness = v;
}

fn skybox(s: &mut State, v: f32) {
    s.params.skybox_angle = v;
}

/// Pins the observer at a pose for `duration` ms from `start`.
fn hold_pose(start: u64, duration: u64, pose: [f32; 5]) -> [Anim; 5] {
    [
        Animation::hold(start, duration, pose[0], x),
        Animation::hold(start, duration, pose[1], y),
        Animation::hold(start, duration, pose[2], z),
        Animation::hold(start, duration, pose[3], theta),
        Animation::hold(start, duration, pose[4], phi),
    ]
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// Visits the valve, the lock and the top of the door, unlocks it, opens it
/// and walks through.
fn tour() -> AnimationGroup<State> {
    use Easing::{CubicIn, CubicOut, QuinticIn, QuinticInOut, QuinticOut, SinusoidalInOut};

    let valve_pose = [3.7245, 0.4326, 5.2588, -2.0418, -0.1119];
    let lock_pose = [3.3553, -0.0807, -3.6262, -4.3809, -0.0318];
    let top_pose = [6.5451, 2.6621, 8.3658, -2.1264, -0.1854];

    let mut animations: Vec<Anim> = vec![
        // door shut, valve straight, bolts out
        Animation::hold_from_start(1050, 0.0, valve),
        Animation::hold_from_start(1050, 1.0, lock),
        Animation::hold_from_start(15050, 0.0, door),
        // to the valve
        Animation::from_start(1050, 0.0, 3.7245, QuinticInOut, x),
        Animation::from_start(1050, 0.0, 0.4326, QuinticInOut, y),
        Animation::from_start(1050, 14.0, 5.2588, QuinticInOut, z),
        Animation::from_start(1050, 3.0 * FRAC_PI_2, -2.0418 + 2.0 * PI, QuinticInOut, theta),
        Animation::from_start(1050, 0.0, -0.1119, QuinticInOut, phi),
    ];
    animations.extend(hold_pose(1050, 2450, valve_pose));

    animations.extend([
        // spin the valve
        Animation::new(1050, 6475, 0.0, 5400.0, CubicIn, valve),
        Animation::new(7525, 6475, 0.0, 360.0, CubicOut, valve),
        Animation::hold(14000, 4900, 0.0, valve),
        // retract the bolts
        Animation::new(1050, 12950, 1.0, 0.0, SinusoidalInOut, lock),
        Animation::hold(14000, 4900, 0.0, lock),
        // to the lock
        Animation::new(3500, 525, 3.7245, 5.0, QuinticIn, x),
        Animation::new(4025, 525, 5.0, 3.3553, QuinticOut, x),
        Animation::new(3500, 525, 0.4326, 0.1760, QuinticIn, y),
        Animation::new(4025, 525, 0.1760, -0.0807, QuinticOut, y),
        Animation::new(3500, 525, 5.2588, -0.1430, QuinticIn, z),
        Animation::new(4025, 525, -0.1430, -3.6262, QuinticOut, z),
        Animation::new(3500, 525, -2.0418, -4.3809, QuinticIn, theta),
        Animation::new(3500, 525, -0.1119, -0.0318, QuinticIn, phi),
    ]);
    animations.extend(hold_pose(4550, 2450, lock_pose));

    animations.extend([
        // over the top
        Animation::new(7000, 525, 3.3553, 5.0, QuinticIn, x),
        Animation::new(7525, 525, 5.0, 6.5451, QuinticOut, x),
        Animation::new(7000, 525, -0.0807, 0.1760, QuinticIn, y),
        Animation::new(7525, 525, 0.1760, 2.6621, QuinticOut, y),
        Animation::new(7000, 525, -3.6262, -0.1430, QuinticIn, z),
        Animation::new(7525, 525, -0.1430, 8.3658, QuinticOut, z),
        Animation::new(7000, 1050, -4.3809, -2.1264, QuinticInOut, theta),
        Animation::new(7000, 1050, -0.0318, -0.1854, QuinticInOut, phi),
    ]);
    animations.extend(hold_pose(8050, 5600, top_pose));

    animations.extend([
        // back in front of the door
        Animation::new(13650, 1050, 6.5451, 0.0, QuinticInOut, x),
        Animation::new(13650, 1050, 2.6621, 2.6621, QuinticInOut, y),
        Animation::new(13650, 1050, 8.3658, 14.0, QuinticInOut, z),
        Animation::new(13650, 1050, -2.1264, 3.0 * FRAC_PI_2 - 2.0 * PI, QuinticInOut, theta),
        Animation::new(13650, 1050, -0.1854, -0.1854, QuinticInOut, phi),
    ]);
    animations.extend(hold_pose(14700, 4200, [0.0, 2.6621, 14.0, 3.0 * FRAC_PI_2, -0.1854]));

    animations.extend([
        // open up
        Animation::new(15050, 1050, 0.0, 135.0, QuinticInOut, door),
        Animation::hold(16100, 2800, 135.0, door),
        // and walk through
        Animation::new(16800, 2100, 0.0, 0.0, QuinticInOut, x),
        Animation::new(16800, 2100, 2.6621, 0.0, QuinticInOut, y),
        Animation::new(16800, 2100, 14.0, -14.0, QuinticInOut, z),
        Animation::new(16800, 2100, 3.0 * FRAC_PI_2, FRAC_PI_2, QuinticInOut, theta),
        Animation::new(16800, 2100, -0.1854, 0.0, QuinticInOut, phi),
    ]);

    AnimationGroup::new("tour", animations)
}

/// One lap around the door at eye level.
fn orbit() -> AnimationGroup<State> {
    use Easing::{Linear, SinusoidalIn, SinusoidalOut};

    AnimationGroup::new(
        "orbit",
        vec![
            Animation::from_start(150, 0.0, 14.0, SinusoidalOut, x),
            Animation::new(150, 150, 14.0, 0.0, SinusoidalIn, x),
            Animation::new(300, 150, 0.0, -14.0, SinusoidalOut, x),
            Animation::new(450, 150, -14.0, 0.0, SinusoidalIn, x),
            Animation::hold_from_start(600, 0.0, y),
            Animation::from_start(150, 14.0, 0.0, SinusoidalIn, z),
            Animation::new(150, 150, 0.0, -14.0, SinusoidalOut, z),
            Animation::new(300, 150, -14.0, 0.0, SinusoidalIn, z),
            Animation::new(450, 150, 0.0, 14.0, SinusoidalOut, z),
            Animation::from_start(600, 3.0 * FRAC_PI_2, -FRAC_PI_2, Linear, theta),
            Animation::hold_from_start(600, 0.0, phi),
        ],
    )
}

/// Opens the door from the starting spot and closes it again.
fn swing() -> AnimationGroup<State> {
    let mut animations = Vec::from(hold_pose(0, 3100, [0.0, 0.0, 14.0, -FRAC_PI_2, 0.0]));
    animations.extend([
        Animation::from_start(1050, 0.0, 135.0, Easing::QuinticInOut, door),
        Animation::hold(1050, 1000, 135.0, door),
        Animation::new(2050, 1050, 135.0, 0.0, Easing::QuinticInOut, door),
    ]);
    AnimationGroup::new("swing", animations)
}

/// Fades the model out and back in.
fn fade() -> AnimationGroup<State> {
    AnimationGroup::new(
        "fade",
        vec![
            Animation::from_start(1050, 1.0, 0.0, Easing::QuinticInOut, solidness),
            Animation::hold(1050, 1000, 0.0, solidness),
            Animation::new(2050, 1050, 0.0, 1.0, Easing::QuinticInOut, solidness),
        ],
    )
}

/// One full turn of the skybox, dragging the sun along.
fn sky() -> AnimationGroup<State> {
    AnimationGroup::new(
        "sky",
        vec![Animation::from_start(5000, 0.0, 360.0, Easing::QuinticInOut, skybox)],
    )
}

pub fn groups() -> Vec<AnimationGroup<State>> {
    vec![tour(), orbit(), swing(), fade(), sky()]
}
