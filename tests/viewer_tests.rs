//! Viewer and Key Binding Tests
//!
//! Tests for:
//! - KeyBindings dispatch, case folding and duplicate rejection
//! - Controls overlay text
//! - Viewer frame order (skybox pass, lights, scene pass)
//! - Playback versus free movement
//! - Field of view bounds and exit requests

use bulkhead::animation::{Animation, AnimationGroup, AnimationPlayer, Easing};
use bulkhead::app::{Key, KeyBindings, ShadingMode, SpecialKey, Viewer, ViewerSettings, ViewerState};
use bulkhead::errors::Error;
use bulkhead::render::{DrawItem, FrameInfo, RecordingSink, RenderPass, RenderSink};
use bulkhead::resources::primitives::{CuboidOptions, SphereOptions};
use bulkhead::scene::{Light, Shape, ShapeArena, ShapeKey};
use glam::{Vec3, Vec4};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Debug, Default)]
struct Door {
    angle: f32,
}

type State = ViewerState<Door>;

fn open_door() -> AnimationGroup<State> {
    AnimationGroup::new(
        "open",
        vec![Animation::from_start(100, 0.0, 90.0, Easing::Linear, |s: &mut State, v| {
            s.params.angle = v;
        })],
    )
}

fn walk_away() -> AnimationGroup<State> {
    AnimationGroup::new(
        "walk",
        vec![Animation::from_start(100, 14.0, 20.0, Easing::Linear, |s: &mut State, v| {
            s.observer.set_z(v);
        })],
    )
}

struct Fixture {
    viewer: Viewer<Door>,
    keys: KeyBindings<Viewer<Door>>,
    door: ShapeKey,
}

fn fixture() -> Fixture {
    let mut arena = ShapeArena::<State>::new();
    let door = arena
        .insert(
            Shape::leaf(CuboidOptions::new(1.0, 2.0, 0.1))
                .rotate_with(|s: &State| Vec3::new(0.0, s.params.angle, 0.0)),
        )
        .unwrap();
    let frame = arena.insert(Shape::leaf(CuboidOptions::new(1.2, 2.2, 0.2))).unwrap();
    let root = arena.group(vec![door, frame]).unwrap();
    let sky = arena.insert(Shape::leaf(SphereOptions::new(1.0, 4))).unwrap();

    let player = AnimationPlayer::new(vec![open_door(), walk_away()]).unwrap();
    let mut viewer = Viewer::new(ViewerSettings::default(), Door::default(), arena, root, player)
        .unwrap()
        .with_skybox(sky)
        .unwrap();
    viewer.add_light(Light::new_directional(Vec4::ONE, Vec4::ONE, Vec3::Y));
    viewer.add_light(
        Light::new_directional(Vec4::ONE, Vec4::ONE, Vec3::NEG_Z)
            .with_enabled(bulkhead::core::DynamicValue::computed(|s: &State| s.toggles.flashlight)),
    );

    let keys = Viewer::default_bindings().unwrap();
    viewer.set_instructions(keys.instructions());
    Fixture { viewer, keys, door }
}

fn press(f: &mut Fixture, key: Key) {
    assert!(f.keys.key_down(key, &mut f.viewer), "{key} is not bound");
    f.keys.key_up(key, &mut f.viewer);
}

/// Captures the per-frame header.
#[derive(Default)]
struct FrameProbe {
    debug: bool,
    instructions: usize,
    ambient: Vec4,
    fov: Option<f32>,
}

impl RenderSink for FrameProbe {
    fn begin_frame(&mut self, frame: &FrameInfo<'_>) {
        self.debug = frame.debug.is_some();
        self.fov = frame.debug.map(|d| d.fov);
        self.instructions = frame.instructions.len();
        self.ambient = frame.global_ambient;
    }

    fn draw_shape(&mut self, _item: &DrawItem<'_>) {}
}

// ============================================================================
// KeyBindings
// ============================================================================

#[test]
fn bindings_fold_letter_case() {
    let mut keys = KeyBindings::<u32>::new();
    keys.on_press(Key::Char(b'q'), "Count", |n| *n += 1).unwrap();

    let mut count = 0;
    assert!(keys.key_down(Key::Char(b'q'), &mut count));
    assert!(keys.key_down(Key::Char(b'Q'), &mut count));
    assert_eq!(count, 2);
    assert!(!keys.key_down(Key::Char(b'e'), &mut count));
}

#[test]
fn bindings_reject_duplicates() {
    let mut keys = KeyBindings::<u32>::new();
    keys.on_press(Key::Char(b'a'), "First", |_| {}).unwrap();
    let err = keys.on_press(Key::Char(b'A'), "Second", |_| {}).unwrap_err();
    assert_eq!(err, Error::DuplicateKeyBinding(Key::Char(b'A')));
    assert_eq!(keys.len(), 1);
}

#[test]
fn hold_sets_flag_until_release() {
    let mut keys = KeyBindings::<bool>::new();
    keys.hold(Key::Char(b'w'), "Move", |b| b).unwrap();

    let mut held = false;
    keys.key_down(Key::Char(b'w'), &mut held);
    assert!(held);
    keys.key_up(Key::Char(b'W'), &mut held);
    assert!(!held);
}

#[test]
fn key_up_without_handler_still_matches() {
    let mut keys = KeyBindings::<u32>::new();
    keys.on_press(Key::Special(SpecialKey::F5), "Count", |n| *n += 1).unwrap();
    let mut count = 0;
    assert!(keys.key_up(Key::Special(SpecialKey::F5), &mut count));
    assert_eq!(count, 0);
}

#[test]
fn toggle_flips_on_press_only() {
    let mut keys = KeyBindings::<bool>::new();
    keys.toggle(Key::Char(b'l'), "L", "Toggle lights", |b| b).unwrap();

    let mut on = false;
    assert!(keys.key_down(Key::Char(b'l'), &mut on));
    assert!(on);
    assert!(keys.key_up(Key::Char(b'l'), &mut on));
    assert!(on);
    keys.key_down(Key::Char(b'L'), &mut on);
    assert!(!on);

    // unbound keys report no match and leave the target alone
    assert!(!keys.key_up(Key::Char(b'k'), &mut on));
    assert!(!keys.key_down(Key::Special(SpecialKey::F5), &mut on));
    assert!(!on);
}

#[test]
fn key_names() {
    assert_eq!(Key::ESCAPE.to_string(), "ESC");
    assert_eq!(Key::SPACE.to_string(), "Spacebar");
    assert_eq!(Key::Char(b'w').to_string(), "W");
    assert_eq!(Key::Special(SpecialKey::Left).to_string(), "Left Arrow");
    assert_eq!(Key::Special(SpecialKey::F11).to_string(), "F11");
}

#[test]
fn default_instructions() {
    let f = fixture();
    let lines = f.viewer.instructions();
    assert_eq!(lines[0], "Controls:");
    assert_eq!(lines[1], "[Move mouse] Look around");
    assert_eq!(lines.len(), 4 + f.keys.len());

    for expected in [
        "[W] Move forward",
        "[M] Toggle mesh",
        "[F3] Toggle debug information",
        "[Spacebar] Play/pause animation",
        "[Right Arrow] Go to next animation",
        "[ESC] Exit",
    ] {
        assert!(lines.iter().any(|l| l == expected), "missing '{expected}'");
    }
}

// ============================================================================
// Toggles
// ============================================================================

#[test]
fn toggle_keys_flip_flags() {
    let mut f = fixture();
    assert!(!f.viewer.state().toggles.mesh);
    press(&mut f, Key::Char(b'm'));
    assert!(f.viewer.state().toggles.mesh);
    press(&mut f, Key::Char(b'M'));
    assert!(!f.viewer.state().toggles.mesh);

    assert!(f.viewer.state().toggles.flashlight);
    press(&mut f, Key::Char(b'f'));
    assert!(!f.viewer.state().toggles.flashlight);
}

#[test]
fn shading_keys() {
    let mut f = fixture();
    assert_eq!(f.viewer.state().shading, ShadingMode::Phong);
    press(&mut f, Key::Char(b'g'));
    assert_eq!(f.viewer.state().shading, ShadingMode::Gouraud);
    press(&mut f, Key::Char(b'h'));
    assert_eq!(f.viewer.state().shading, ShadingMode::Off);
}

#[test]
fn escape_requests_exit() {
    let mut f = fixture();
    assert!(!f.viewer.exit_requested());
    press(&mut f, Key::ESCAPE);
    assert!(f.viewer.exit_requested());
}

// ============================================================================
// Frame order
// ============================================================================

#[test]
fn frame_draws_skybox_then_scene() {
    let mut f = fixture();
    let mut sink = RecordingSink::new();
    f.viewer.frame(16, &mut sink).unwrap();

    assert_eq!(sink.frames, 1);
    assert_eq!(sink.passes, vec![RenderPass::Skybox, RenderPass::Scene]);
    assert_eq!(sink.draws_in(RenderPass::Skybox).count(), 1);
    assert_eq!(sink.draws_in(RenderPass::Scene).count(), 2);
    assert_eq!(sink.draws_in(RenderPass::Scene).next().unwrap().shape, f.door);
}

#[test]
fn skybox_toggle_skips_its_pass() {
    let mut f = fixture();
    press(&mut f, Key::Char(b'b'));

    let mut sink = RecordingSink::new();
    f.viewer.frame(16, &mut sink).unwrap();
    assert_eq!(sink.passes, vec![RenderPass::Scene]);
    assert_eq!(sink.draws.len(), 2);
}

#[test]
fn lights_are_resolved_each_frame() {
    let mut f = fixture();
    let mut sink = RecordingSink::new();
    f.viewer.frame(16, &mut sink).unwrap();
    assert_eq!(sink.lights.len(), 2);
    assert!(sink.lights[1].enabled);
    assert_eq!(sink.lights[1].index, 1);

    press(&mut f, Key::Char(b'f'));
    f.viewer.frame(16, &mut sink).unwrap();
    assert!(!sink.lights[1].enabled);
    assert!(sink.lights[0].enabled);
}

#[test]
fn overlays_follow_toggles() {
    let mut f = fixture();
    let mut probe = FrameProbe::default();
    f.viewer.render(&mut probe).unwrap();
    assert!(probe.debug);
    assert_eq!(probe.instructions, f.viewer.instructions().len());
    assert!(approx_eq(probe.ambient.x, 0.1));

    press(&mut f, Key::Special(SpecialKey::F3));
    press(&mut f, Key::Special(SpecialKey::F4));
    f.viewer.render(&mut probe).unwrap();
    assert!(!probe.debug);
    assert_eq!(probe.instructions, 0);
}

// ============================================================================
// Movement and playback
// ============================================================================

#[test]
fn held_keys_move_observer() {
    let mut f = fixture();
    let start = f.viewer.observer().position();
    f.keys.key_down(Key::Char(b'w'), &mut f.viewer);
    let mut sink = RecordingSink::new();
    for _ in 0..30 {
        f.viewer.frame(16, &mut sink).unwrap();
    }
    f.keys.key_up(Key::Char(b'w'), &mut f.viewer);

    let moved = f.viewer.observer().position();
    assert!(moved.z < start.z);
    assert!(f.viewer.observer().velocity().length() > 0.0);
}

#[test]
fn playback_drives_state_and_stops() {
    let mut f = fixture();
    let mut sink = RecordingSink::new();

    press(&mut f, Key::SPACE);
    assert!(f.viewer.is_playing());
    f.viewer.frame(16, &mut sink).unwrap();
    f.viewer.frame(50, &mut sink).unwrap();
    assert!(approx_eq(f.viewer.params().angle, 45.0));

    for _ in 0..10 {
        f.viewer.frame(16, &mut sink).unwrap();
    }
    assert!(!f.viewer.is_playing());
    assert_eq!(f.viewer.params().angle, 90.0);
    // the door is drawn rotated
    let door = sink.draws_in(RenderPass::Scene).next().unwrap();
    assert!(door.world.transform_point3(Vec3::X).z < -0.99);
}

#[test]
fn starting_playback_stops_observer() {
    let mut f = fixture();
    f.viewer.state_mut().observer.set_velocity(Vec3::new(1.0, 0.0, 0.0));
    assert!(f.viewer.toggle_playback());
    assert_eq!(f.viewer.observer().velocity(), Vec3::ZERO);

    // pausing keeps whatever the animation left
    assert!(!f.viewer.toggle_playback());
}

#[test]
fn movement_is_ignored_while_playing() {
    let mut f = fixture();
    f.viewer.next_animation();
    press(&mut f, Key::SPACE);
    f.keys.key_down(Key::Char(b'a'), &mut f.viewer);

    let mut sink = RecordingSink::new();
    f.viewer.frame(16, &mut sink).unwrap();
    f.viewer.frame(50, &mut sink).unwrap();
    let p = f.viewer.observer().position();
    assert!(approx_eq(p.z, 17.0));
    assert_eq!(p.x, 0.0);
}

#[test]
fn look_is_ignored_while_playing() {
    let mut f = fixture();
    let theta = f.viewer.observer().theta();

    f.viewer.toggle_playback();
    f.viewer.look(500.0, 0.0);
    assert_eq!(f.viewer.observer().theta(), theta);

    f.viewer.toggle_playback();
    f.viewer.look(500.0, 0.0);
    assert!(approx_eq(f.viewer.observer().theta(), theta + 0.15));
}

#[test]
fn arrow_keys_cycle_groups() {
    let mut f = fixture();
    assert_eq!(f.viewer.player().current_index(), 0);
    press(&mut f, Key::Special(SpecialKey::Right));
    assert_eq!(f.viewer.player().current().name(), "walk");
    press(&mut f, Key::Special(SpecialKey::Right));
    assert_eq!(f.viewer.player().current_index(), 0);
    press(&mut f, Key::Special(SpecialKey::Left));
    assert_eq!(f.viewer.player().current_index(), 1);
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn zoom_is_bounded() {
    let mut f = fixture();
    assert_eq!(f.viewer.fov(), 75.0);
    f.viewer.zoom_in();
    assert_eq!(f.viewer.fov(), 74.0);

    for _ in 0..200 {
        f.viewer.zoom_out();
    }
    assert_eq!(f.viewer.fov(), 179.0);

    for _ in 0..300 {
        f.viewer.zoom_in();
    }
    assert_eq!(f.viewer.fov(), 1.0);

    let mut probe = FrameProbe::default();
    f.viewer.render(&mut probe).unwrap();
    assert_eq!(probe.fov, Some(1.0));
}

#[test]
fn resize_changes_aspect() {
    let mut f = fixture();
    let wide = f.viewer.projection();
    f.viewer.resize(720, 720);
    assert!(approx_eq(f.viewer.settings().aspect_ratio(), 1.0));
    assert_ne!(f.viewer.projection(), wide);

    f.viewer.resize(100, 0);
    assert!(approx_eq(f.viewer.settings().aspect_ratio(), 1.0));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn viewer_requires_live_root() {
    let arena = ShapeArena::<State>::new();
    let player = AnimationPlayer::new(vec![open_door()]).unwrap();
    let result =
        Viewer::new(ViewerSettings::default(), Door::default(), arena, ShapeKey::default(), player);
    assert!(matches!(result, Err(Error::ShapeNotFound(_))));
}

#[test]
fn skybox_must_exist() {
    let mut arena = ShapeArena::<State>::new();
    let root = arena.insert(Shape::leaf(CuboidOptions::default())).unwrap();
    let player = AnimationPlayer::new(vec![open_door()]).unwrap();
    let viewer =
        Viewer::new(ViewerSettings::default(), Door::default(), arena, root, player).unwrap();
    assert!(matches!(viewer.with_skybox(ShapeKey::default()), Err(Error::ShapeNotFound(_))));
}
