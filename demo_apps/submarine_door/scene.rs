//! The submarine door model: frame, hinges and a swinging door carrying
//! a porthole, a valve wheel and a sliding lock.

use bulkhead::errors::Result;
use bulkhead::scene::light::QuadraticAttenuation;
use bulkhead::{
    CuboidOptions, DonutOptions, DynamicValue, Light, Material, MaterialState, PrismWallOptions,
    RingOptions, Shape, ShapeArena, ShapeKey, SphereOptions, TextureId, Transformation,
    ViewerState,
};
use glam::{Vec3, Vec4};

/// Animated cells of the door model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorParams {
    /// Door swing in degrees, 0 when closed.
    pub door_angle: f32,
    /// Valve wheel rotation in degrees.
    pub valve_angle: f32,
    /// 1 when the lock bolts are fully out, 0 when retracted.
    pub lock_progress: f32,
    /// Opacity multiplier of the whole model.
    pub solidness: f32,
    pub skybox_angle: f32,
}

impl Default for DoorParams {
    fn default() -> Self {
        Self {
            door_angle: 0.0,
            valve_angle: 0.0,
            lock_progress: 1.0,
            solidness: 1.0,
            skybox_angle: 0.0,
        }
    }
}

pub type State = ViewerState<DoorParams>;

pub const SKYBOX_TEXTURE: TextureId = TextureId(0);

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
const TRANSPARENT_BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 0.5);
const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
const YELLOW: Vec4 = Vec4::new(1.0, 1.0, 0.0, 1.0);
const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

const WHITE_METAL: MaterialState = MaterialState::new(Vec4::ONE, Vec4::ONE, Vec4::ONE, 76.8);
const GRAY_METAL: MaterialState = MaterialState::new(
    Vec4::new(0.7, 0.7, 0.7, 1.0),
    Vec4::new(0.7, 0.7, 0.7, 1.0),
    Vec4::new(0.9, 0.9, 0.9, 1.0),
    76.8,
);
const DARK_GRAY_METAL: MaterialState = MaterialState::new(
    Vec4::new(0.25, 0.25, 0.25, 1.0),
    Vec4::new(0.4, 0.4, 0.4, 1.0),
    Vec4::new(0.774_597, 0.774_597, 0.774_597, 1.0),
    76.8,
);
const RED_METAL: MaterialState = MaterialState::new(
    Vec4::new(1.0, 0.207_25, 0.207_25, 1.0),
    Vec4::new(1.0, 0.5, 0.5, 1.0),
    Vec4::new(1.0, 0.5, 0.5, 1.0),
    76.8,
);
const YELLOW_METAL: MaterialState = MaterialState::new(
    Vec4::new(0.5, 0.5, 0.0, 1.0),
    Vec4::new(0.5, 0.5, 0.0, 1.0),
    Vec4::new(0.6, 0.6, 0.5, 1.0),
    32.0,
);
const GLASS: MaterialState = MaterialState::new(
    Vec4::new(0.1, 0.187_25, 0.174_5, 0.4),
    Vec4::new(0.396, 0.741_51, 0.691_02, 0.4),
    Vec4::new(0.297_254, 0.308_29, 0.306_678, 0.8),
    12.8,
);
const SILVER: MaterialState = MaterialState::new(
    Vec4::new(0.773_911, 0.773_911, 0.773_911, 1.0),
    Vec4::new(0.773_911, 0.773_911, 0.773_911, 1.0),
    Vec4::new(0.773_911, 0.773_911, 0.773_911, 1.0),
    100.0,
);

/// Material whose diffuse alpha follows the model's solidness.
fn faded(material: MaterialState) -> Material<State> {
    let mut faded = Material::from(material);
    let diffuse = material.diffuse;
    faded.diffuse =
        DynamicValue::computed(move |s: &State| diffuse.with_w(diffuse.w * s.params.solidness));
    faded
}

/// Leaf whose subdivided mesh is drawn while the mesh toggle is on.
fn meshed(shape: Shape<State>, level: u32) -> Shape<State> {
    shape
        .with_mesh_level(level)
        .with_mesh_enabled(DynamicValue::computed(|s: &State| s.toggles.mesh))
}

fn translate(x: f32, y: f32, z: f32) -> Transformation<State> {
    Transformation::translate(Vec3::new(x, y, z))
}

fn rotate(x: f32, y: f32, z: f32) -> Transformation<State> {
    Transformation::rotate(Vec3::new(x, y, z))
}

/// 1.0 for the first copy of a mirrored pair.
fn first(index: usize) -> f32 {
    f32::from(u8::from(index == 0))
}

/// Slide of lock bolt `index` out of five for a given lock progress.
#[must_use]
pub fn lock_bolt_offset(progress: f32, index: usize) -> f32 {
    let i = index as f32;
    if progress < i / 5.0 {
        0.0
    } else if progress >= (i + 1.0) / 5.0 {
        1.0
    } else {
        progress * 5.0 - i
    }
}

// ---------------------------------------------------------------------------
// Parts
// ---------------------------------------------------------------------------

fn valve(arena: &mut ShapeArena<State>) -> Result<ShapeKey> {
    let stem_wall = arena.insert(
        meshed(Shape::leaf(PrismWallOptions::new(0.1, 1.0, 40)), 4)
            .with_material(faded(WHITE_METAL)),
    )?;
    let stem_cap = arena.insert(
        Shape::leaf(SphereOptions::partial(0.1, 20, 0.0, 10, 0.0, 20))
            .with_material(faded(WHITE_METAL))
            .translate(Vec3::new(0.0, 0.0, 0.5)),
    )?;
    let stem = arena.group([stem_wall, stem_cap])?;

    let rim = arena.insert(
        Shape::leaf(DonutOptions::new(0.6, 0.8, 41, 10))
            .with_material(faded(RED_METAL))
            .with_color(RED),
    )?;
    let spoke = arena.insert(
        meshed(Shape::leaf(PrismWallOptions::partial(0.05, 0.7, 15, 0.0, 15)), 4)
            .with_material(faded(YELLOW_METAL))
            .with_color(YELLOW),
    )?;
    let spokes = arena.clone_n(spoke, 3, |i, spoke| {
        spoke
            .push_transform(rotate(0.0, i as f32 * 360.0 / 3.0, 0.0))
            .push_transform(translate(0.0, 0.0, 0.35));
    })?;
    arena.update(spokes, |s| {
        s.push_transform(rotate(-90.0, 0.0, 0.0));
    })?;
    let wheel = arena.insert(Shape::compound([rim, spokes]).translate(Vec3::new(0.0, 0.0, 0.45)))?;

    arena.insert(
        Shape::compound([stem, wheel])
            .translate(Vec3::new(0.4, 0.0, 0.06))
            .scale(Vec3::splat(0.3))
            .translate(Vec3::new(0.0, 0.0, 0.5))
            .rotate_with(|s: &State| Vec3::new(0.0, 0.0, s.params.valve_angle)),
    )
}

fn window(arena: &mut ShapeArena<State>) -> Result<ShapeKey> {
    let border = arena.insert(
        meshed(Shape::leaf(RingOptions::new(0.8, 1.0, 0.1, 40)), 3)
            .with_material(faded(DARK_GRAY_METAL))
            .with_color(WHITE),
    )?;

    let bolt = arena.insert(
        Shape::leaf(SphereOptions::partial(0.05, 16, 0.0, 8, 0.0, 16))
            .with_material(faded(SILVER))
            .with_color(YELLOW),
    )?;
    let bolts = arena.clone_n(bolt, 10, |i, bolt| {
        bolt.push_transform(rotate(0.0, i as f32 * 360.0 / 10.0, 0.0))
            .push_transform(translate(0.0, 0.0, 0.9))
            .push_transform(rotate(90.0, 0.0, 0.0));
    })?;
    arena.update(bolts, |s| {
        s.push_transform(translate(0.0, 0.0, 0.05)).push_transform(rotate(-90.0, 0.0, 0.0));
    })?;

    let glass = arena.insert(
        Shape::leaf(SphereOptions::partial(0.8, 40, 0.0, 20, 0.0, 40))
            .with_material(faded(GLASS))
            .with_color(TRANSPARENT_BLUE)
            .scale(Vec3::new(1.0, 1.0, 0.35)),
    )?;

    arena.insert(
        Shape::compound([border, bolts, glass])
            .translate(Vec3::new(0.0, 0.8, 0.06))
            .scale(Vec3::splat(0.35))
            .translate(Vec3::new(0.0, 0.0, 0.05)),
    )
}

/// Both hinges, already placed on the frame.
fn hinges(arena: &mut ShapeArena<State>) -> Result<ShapeKey> {
    let pin = arena.insert(
        Shape::leaf(PrismWallOptions::partial(0.4, 1.2, 16, 0.0, 16))
            .with_material(faded(RED_METAL))
            .with_color(RED),
    )?;

    let pin_end = arena.insert(
        Shape::leaf(DonutOptions::partial(0.4, 1.2, 20, 5.0, 5, 16, 0.0, 16))
            .with_material(faded(RED_METAL))
            .with_color(RED)
            .translate(Vec3::new(0.0, 0.8, 0.0))
            .rotate(Vec3::new(90.0, 90.0, 0.0)),
    )?;
    let pin_ends = arena.clone_n(pin_end, 2, |i, end| {
        end.push_transform(translate(0.0, 0.6 - 1.2 * first(i), 0.0))
            .push_transform(rotate(180.0 * first(i), 0.0, 0.0));
    })?;

    let knuckle_ring = arena.insert(
        Shape::leaf(RingOptions::partial(0.4, 0.5, 0.5, 16, 0.0, 16))
            .with_material(faded(YELLOW_METAL))
            .with_color(YELLOW),
    )?;
    let knuckle_arm = arena.insert(
        Shape::leaf(DonutOptions::partial(0.6, 1.0, 20, 15.0, 5, 16, 0.0, 16))
            .with_material(faded(YELLOW_METAL))
            .with_color(YELLOW)
            .translate(Vec3::new(0.4, 0.8, 0.0)),
    )?;
    let knuckle = arena.group([knuckle_ring, knuckle_arm])?;
    let knuckles = arena.clone_n(knuckle, 2, |i, knuckle| {
        knuckle
            .push_transform(Transformation::rotate(DynamicValue::computed(|s: &State| {
                Vec3::new(0.0, 0.0, -s.params.door_angle)
            })))
            .push_transform(translate(0.0, 0.0, 0.35 - 0.7 * first(i)));
    })?;

    let hinge = arena.insert(
        Shape::compound([pin, pin_ends, knuckles])
            .translate(Vec3::new(-0.75, 0.0, 0.06))
            .scale(Vec3::splat(0.12))
            .translate(Vec3::new(0.0, 0.0, 0.8))
            .rotate(Vec3::new(-90.0, 0.0, 0.0)),
    )?;
    arena.clone_n(hinge, 2, |i, hinge| {
        hinge.push_transform(translate(0.0, 0.0, 5.0 - 10.0 * first(i)));
    })
}

fn lock(arena: &mut ShapeArena<State>) -> Result<ShapeKey> {
    let body = arena.insert(
        Shape::leaf(PrismWallOptions::new(0.25, 1.0, 20)).with_material(faded(WHITE_METAL)),
    )?;
    let cap = arena.insert(
        Shape::leaf(SphereOptions::partial(0.25, 10, 0.0, 5, 0.0, 10))
            .with_material(faded(WHITE_METAL))
            .translate(Vec3::new(0.0, 0.0, 0.5)),
    )?;
    let cylinder = arena.group([body, cap])?;

    let cylinders = arena.clone_n(cylinder, 5, |i, cylinder| {
        cylinder.push_transform(Transformation::translate(DynamicValue::computed(move |s: &State| {
            Vec3::new(0.0, -0.7 * i as f32, lock_bolt_offset(s.params.lock_progress, i))
        })));
    })?;
    arena.update(cylinders, |s| {
        s.push_transform(rotate(0.0, 90.0, 0.0)).push_transform(translate(0.0, 1.4, -0.5));
    })?;

    arena.insert(
        Shape::compound([cylinders])
            .translate(Vec3::new(0.52, 0.0, -0.025))
            .scale(Vec3::splat(0.1)),
    )
}

fn frame(arena: &mut ShapeArena<State>) -> Result<ShapeKey> {
    let outer_bar = arena.insert(
        meshed(Shape::leaf(CuboidOptions::new(0.26, 1.6, 0.06)), 6)
            .with_material(faded(DARK_GRAY_METAL)),
    )?;
    let inner_bar = arena.insert(
        meshed(Shape::leaf(CuboidOptions::new(0.10, 1.6, 0.02)), 6)
            .with_material(faded(DARK_GRAY_METAL))
            .translate(Vec3::new(-0.18, 0.0, -0.02)),
    )?;
    let bar = arena.group([outer_bar, inner_bar])?;
    let side_bars = arena.clone_n(bar, 2, |i, bar| {
        bar.push_transform(translate(0.8 - 1.6 * first(i), 0.0, 0.0))
            .push_transform(rotate(0.0, 0.0, 180.0 * first(i)));
    })?;

    let side_bolt = arena.insert(
        Shape::leaf(SphereOptions::partial(0.06, 20, 0.0, 10, 0.0, 20))
            .with_color(YELLOW)
            .with_material(faded(SILVER)),
    )?;
    let side_bolts = arena.clone_with(side_bolt, 2, |arena, i, bolt| {
        arena.update(bolt, |b| {
            b.push_transform(translate(0.8 - 1.6 * first(i), 0.0, 0.0));
        })?;
        arena.clone_n(bolt, 2 + 2 * i, |j, b| {
            b.push_transform(translate(0.0, 0.65 - 1.3 * (j as f32 + first(i)) / 3.0, 0.0));
        })
    })?;
    arena.update(side_bolts, |s| {
        s.push_transform(translate(0.0, 0.0, 0.03));
    })?;

    let arch = arena.insert(
        meshed(Shape::leaf(RingOptions::partial(0.67, 0.93, 0.06, 40, 0.0, 20)), 6)
            .with_material(faded(DARK_GRAY_METAL)),
    )?;
    let inner_arch = arena.insert(
        meshed(Shape::leaf(RingOptions::partial(0.57, 0.67, 0.02, 40, 0.0, 20)), 6)
            .with_material(faded(DARK_GRAY_METAL))
            .translate(Vec3::new(0.0, 0.0, -0.02)),
    )?;
    let arch_bolt = arena.insert(
        Shape::leaf(SphereOptions::partial(0.06, 20, 0.0, 10, 0.0, 20))
            .with_color(YELLOW)
            .with_material(faded(SILVER)),
    )?;
    let arch_bolts = arena.clone_n(arch_bolt, 4, |i, bolt| {
        bolt.push_transform(rotate(0.0, (i as f32 + 1.0) * 180.0 / 5.0 - 90.0, 0.0))
            .push_transform(translate(0.0, 0.0, 0.8))
            .push_transform(rotate(90.0, 0.0, 0.0));
    })?;
    arena.update(arch_bolts, |s| {
        s.push_transform(translate(0.0, 0.0, 0.03)).push_transform(rotate(-90.0, 0.0, 0.0));
    })?;
    let arch = arena.group([arch, inner_arch, arch_bolts])?;
    let arches = arena.clone_n(arch, 2, |i, arch| {
        arch.push_transform(translate(0.0, 0.8 - 1.6 * first(i), 0.0))
            .push_transform(rotate(180.0 * first(i), 180.0 * first(i), 0.0));
    })?;

    arena.insert(
        Shape::compound([side_bars, side_bolts, arches]).translate(Vec3::new(0.0, 0.0, 0.03)),
    )
}

fn panel(arena: &mut ShapeArena<State>) -> Result<ShapeKey> {
    let front = arena.insert(
        meshed(Shape::leaf(CuboidOptions::new(1.28, 1.6, 0.04)), 6)
            .with_material(faded(GRAY_METAL))
            .with_color(GREEN)
            .translate(Vec3::new(0.0, 0.0, 0.04)),
    )?;
    let back = arena.insert(
        meshed(Shape::leaf(CuboidOptions::new(1.04, 1.6, 0.17)), 6)
            .with_material(faded(GRAY_METAL))
            .with_color(BLUE)
            .translate(Vec3::new(0.0, 0.0, -0.065)),
    )?;
    let middle = arena.group([front, back])?;

    let cap_front = arena.insert(
        meshed(Shape::leaf(RingOptions::partial(0.0, 0.64, 0.04, 40, 0.0, 20)), 5)
            .with_material(faded(GRAY_METAL))
            .with_color(GREEN)
            .translate(Vec3::new(0.0, 0.0, 0.04)),
    )?;
    let cap_back = arena.insert(
        meshed(Shape::leaf(RingOptions::partial(0.0, 0.52, 0.17, 40, 0.0, 20)), 5)
            .with_material(faded(GRAY_METAL))
            .with_color(BLUE)
            .translate(Vec3::new(0.0, 0.0, -0.065)),
    )?;
    let cap = arena.group([cap_front, cap_back])?;
    let caps = arena.clone_n(cap, 2, |i, cap| {
        cap.push_transform(translate(0.0, 0.8 - 1.6 * first(i), 0.0))
            .push_transform(rotate(0.0, 0.0, 180.0 * first(i)));
    })?;

    arena.group([middle, caps])
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

pub struct DoorScene {
    pub arena: ShapeArena<State>,
    pub root: ShapeKey,
    pub skybox: ShapeKey,
}

pub fn build() -> Result<DoorScene> {
    let mut arena = ShapeArena::new();

    let frame = frame(&mut arena)?;
    let hinges = hinges(&mut arena)?;

    let panel = panel(&mut arena)?;
    let window = window(&mut arena)?;
    let valve = valve(&mut arena)?;
    let lock = lock(&mut arena)?;
    let door = arena.insert(
        Shape::compound([panel, window, valve, lock])
            .translate(Vec3::new(-0.75, 0.0, 0.156))
            .rotate_with(|s: &State| Vec3::new(0.0, -s.params.door_angle, 0.0))
            .translate(Vec3::new(0.75, 0.0, -0.156)),
    )?;

    let root = arena.insert(Shape::compound([frame, hinges, door]).scale(Vec3::splat(4.0)))?;

    let skybox = arena.insert(
        Shape::leaf(SphereOptions::new(1.0, 20))
            .with_texture(SKYBOX_TEXTURE)
            .rotate_with(|s: &State| Vec3::new(0.0, s.params.skybox_angle, 0.0)),
    )?;

    log::info!(
        "Door model built: {} leaves, {} arena slots",
        arena.leaf_count(root)?,
        arena.len()
    );

    Ok(DoorScene { arena, root, skybox })
}

/// The sun, circling with the skybox, and the observer's flashlight.
pub fn lights() -> Vec<Light<State>> {
    let sun = Light::new_directional(
        Vec4::new(0.4, 0.4, 0.4, 1.0),
        Vec4::new(0.2, 0.2, 0.2, 1.0),
        DynamicValue::computed(|s: &State| {
            let angle = (s.params.skybox_angle + 22.0).to_radians();
            Vec3::new(angle.sin(), 1.0, angle.cos())
        }),
    );

    let flashlight = Light::new_spot(
        Vec4::ONE,
        Vec4::ONE,
        DynamicValue::computed(|s: &State| s.observer.position() - s.observer.front()),
        DynamicValue::computed(|s: &State| s.observer.front()),
        20.0,
        1.0,
        QuadraticAttenuation::new(1.0, 0.05, 0.025),
    )
    .with_enabled(DynamicValue::computed(|s: &State| s.toggles.flashlight));

    vec![sun, flashlight]
}

#[cfg(test)]
mod tests {
    use bulkhead::{RecordingSink, RenderPass, RenderSink, ViewerSettings};

    use super::*;

    #[test]
    fn bolts_slide_out_one_after_another() {
        assert_eq!(lock_bolt_offset(0.0, 0), 0.0);
        assert!((lock_bolt_offset(0.1, 0) - 0.5).abs() < 1e-5);
        assert_eq!(lock_bolt_offset(0.1, 1), 0.0);
        assert_eq!(lock_bolt_offset(1.0, 4), 1.0);
        assert_eq!(lock_bolt_offset(0.7, 2), 1.0);
    }

    #[test]
    fn door_model_renders() {
        let door = build().unwrap();
        let state = State::new(&ViewerSettings::default(), DoorParams::default());
        let mut sink = RecordingSink::new();
        sink.begin_pass(RenderPass::Scene);

        let drawn = door.arena.render(door.root, &state, &mut sink).unwrap();
        assert_eq!(drawn, door.arena.leaf_count(door.root).unwrap());
        assert!(sink.draws.iter().all(|d| d.quads > 0));

        let sky = door.arena.get(door.skybox).unwrap().as_leaf().unwrap();
        assert_eq!(sky.texture(), Some(SKYBOX_TEXTURE));
    }

    #[test]
    fn flashlight_follows_toggle() {
        let mut state = State::new(&ViewerSettings::default(), DoorParams::default());
        let lights = lights();
        assert!(lights[1].resolve(&state, 1).enabled);
        state.toggles.flashlight = false;
        assert!(!lights[1].resolve(&state, 1).enabled);
        assert_eq!(lights[0].resolve(&state, 0).position.w, 0.0);
    }
}
