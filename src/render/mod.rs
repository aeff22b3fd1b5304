//! Render sink contract
//!
//! The core never talks to a graphics API. Each frame it resolves every
//! dynamic value, composes matrices and hands the result to a
//! [`RenderSink`]:
//!
//! ```text
//! begin_frame ─► begin_pass(Skybox) ─► draw_shape*
//!             ─► begin_pass(Scene)  ─► draw_light* ─► draw_shape* ─► present
//! ```
//!
//! Sinks implement only the calls they care about; everything but
//! [`RenderSink::draw_shape`] has an empty default.

use glam::{Mat4, Vec3, Vec4};

use crate::app::settings::{RenderToggles, ShadingMode};
use crate::resources::geometry::QuadMesh;
use crate::resources::material::MaterialState;
use crate::resources::texture::TextureId;
use crate::scene::ShapeKey;
use crate::scene::light::QuadraticAttenuation;

/// Which part of the frame subsequent draws belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    /// Drawn with [`FrameInfo::skybox_view`], depth writes off.
    Skybox,
    /// Drawn with [`FrameInfo::view`].
    Scene,
}

/// Observer readout for the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub fov: f32,
    pub animation: usize,
    pub playing: bool,
    pub position: Vec3,
    pub velocity: Vec3,
    pub theta: f32,
    pub phi: f32,
}

/// Per-frame camera and pipeline state.
#[derive(Debug, Clone)]
pub struct FrameInfo<'a> {
    pub index: u64,
    pub delta_ms: u64,
    pub view: Mat4,
    /// Rotation-only view used for the skybox.
    pub skybox_view: Mat4,
    pub projection: Mat4,
    /// Scene-wide ambient term added on top of every light.
    pub global_ambient: Vec4,
    pub toggles: RenderToggles,
    pub shading: ShadingMode,
    /// Present when the debug overlay is enabled.
    pub debug: Option<DebugInfo>,
    /// Help lines; empty when the instructions overlay is disabled.
    pub instructions: &'a [String],
}

/// A resolved light, ready for a fixed-function style light slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Slot index, in registration order.
    pub index: usize,
    pub enabled: bool,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    /// Homogeneous position: `w = 0` for directional lights.
    pub position: Vec4,
    pub attenuation: Option<QuadraticAttenuation>,
    pub spot: Option<SpotState>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotState {
    pub direction: Vec3,
    /// Cone half-angle in degrees.
    pub cutoff: f32,
    pub exponent: f32,
}

/// One leaf shape, fully resolved for drawing.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub shape: ShapeKey,
    /// Model matrix (the view is applied by the sink).
    pub world: Mat4,
    pub material: MaterialState,
    pub texture: Option<TextureId>,
    pub mesh: &'a QuadMesh,
    /// Whether `mesh` is the subdivided variant.
    pub smooth: bool,
}

/// The external rendering collaborator.
pub trait RenderSink {
    fn begin_frame(&mut self, _frame: &FrameInfo<'_>) {}

    fn begin_pass(&mut self, _pass: RenderPass) {}

    fn draw_light(&mut self, _light: &LightState) {}

    fn draw_shape(&mut self, item: &DrawItem<'_>);

    fn present(&mut self) {}
}

/// Sink that only records what it was given. Handy for headless runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub frames: u64,
    pub passes: Vec<RenderPass>,
    pub lights: Vec<LightState>,
    pub draws: Vec<RecordedDraw>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedDraw {
    pub shape: ShapeKey,
    pub pass: Option<RenderPass>,
    pub world: Mat4,
    pub material: MaterialState,
    pub texture: Option<TextureId>,
    pub quads: usize,
    pub smooth: bool,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.passes.clear();
        self.lights.clear();
        self.draws.clear();
    }

    pub fn draws_in(&self, pass: RenderPass) -> impl Iterator<Item = &RecordedDraw> {
        self.draws.iter().filter(move |d| d.pass == Some(pass))
    }
}

impl RenderSink for RecordingSink {
    fn begin_frame(&mut self, _frame: &FrameInfo<'_>) {
        self.frames += 1;
        self.clear();
    }

    fn begin_pass(&mut self, pass: RenderPass) {
        self.passes.push(pass);
    }

    fn draw_light(&mut self, light: &LightState) {
        self.lights.push(*light);
    }

    fn draw_shape(&mut self, item: &DrawItem<'_>) {
        self.draws.push(RecordedDraw {
            shape: item.shape,
            pass: self.passes.last().copied(),
            world: item.world,
            material: item.material,
            texture: item.texture,
            quads: item.mesh.quad_count(),
            smooth: item.smooth,
        });
    }
}
