use glam::{Mat4, Vec3};

use crate::animation::{AnimationPlayer, PlaybackStatus};
use crate::app::input::MovementInput;
use crate::app::keys::{Key, KeyBindings, SpecialKey};
use crate::app::settings::{RenderToggles, ShadingMode, ViewerSettings};
use crate::errors::{Error, Result};
use crate::render::{DebugInfo, FrameInfo, RenderPass, RenderSink};
use crate::scene::light::Light;
use crate::scene::{ShapeArena, ShapeKey};
use crate::utils::fps_counter::FpsCounter;
use crate::utils::observer::Observer;

/// Everything animations, dynamic values and key handlers may read or write.
///
/// `P` holds the application's own scene parameters (door angles and the
/// like).
#[derive(Debug, Clone)]
pub struct ViewerState<P> {
    pub observer: Observer,
    pub movement: MovementInput,
    pub toggles: RenderToggles,
    pub shading: ShadingMode,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Set by the exit key; the host loop decides when to stop.
    pub exit_requested: bool,
    pub params: P,
}

impl<P> ViewerState<P> {
    #[must_use]
    pub fn new(settings: &ViewerSettings, params: P) -> Self {
        Self {
            observer: Observer::new(&settings.observer),
            movement: MovementInput::default(),
            toggles: settings.toggles,
            shading: settings.shading,
            fov: settings.fov,
            exit_requested: false,
            params,
        }
    }
}

/// Scene state plus the per-frame driver around it.
///
/// Each [`frame`](Self::frame) either plays the selected animation group or
/// moves the observer from the held movement keys, then hands the resolved
/// scene to a [`RenderSink`]. While an animation plays it is the only writer
/// of the state: mouse look and movement are ignored.
///
/// # Example
///
/// ```rust,ignore
/// let mut viewer = Viewer::new(ViewerSettings::default(), params, arena, root, player)?;
/// let bindings = Viewer::default_bindings()?;
/// viewer.set_instructions(bindings.instructions());
///
/// bindings.key_down(Key::SPACE, &mut viewer);
/// viewer.frame(clock.tick(frame_us), &mut sink)?;
/// ```
pub struct Viewer<P> {
    state: ViewerState<P>,
    settings: ViewerSettings,
    player: AnimationPlayer<ViewerState<P>>,
    arena: ShapeArena<ViewerState<P>>,
    root: ShapeKey,
    skybox: Option<ShapeKey>,
    lights: Vec<Light<ViewerState<P>>>,
    instructions: Vec<String>,
    fps: FpsCounter,
    frame_index: u64,
    last_delta_ms: u64,
}

impl<P> Viewer<P> {
    /// Fails with [`Error::ShapeNotFound`] when `root` is not in `arena`.
    pub fn new(
        settings: ViewerSettings,
        params: P,
        arena: ShapeArena<ViewerState<P>>,
        root: ShapeKey,
        player: AnimationPlayer<ViewerState<P>>,
    ) -> Result<Self> {
        if !arena.contains(root) {
            return Err(Error::ShapeNotFound(root));
        }

        log::info!(
            "Viewer ready: {} shapes, {} animation groups",
            arena.len(),
            player.len()
        );

        Ok(Self {
            state: ViewerState::new(&settings, params),
            settings,
            player,
            arena,
            root,
            skybox: None,
            lights: Vec::new(),
            instructions: Vec::new(),
            fps: FpsCounter::new(),
            frame_index: 0,
            last_delta_ms: 0,
        })
    }

    /// Sets the shape drawn around the eye in the skybox pass.
    pub fn with_skybox(mut self, skybox: ShapeKey) -> Result<Self> {
        if !self.arena.contains(skybox) {
            return Err(Error::ShapeNotFound(skybox));
        }
        self.skybox = Some(skybox);
        Ok(self)
    }

    /// Registers a light and returns its slot index.
    pub fn add_light(&mut self, light: Light<ViewerState<P>>) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn set_instructions(&mut self, instructions: Vec<String>) {
        self.instructions = instructions;
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Advances the simulation by `delta_ms` and renders into `sink`.
    pub fn frame(&mut self, delta_ms: u64, sink: &mut dyn RenderSink) -> Result<()> {
        self.fps.update(delta_ms);
        self.advance(delta_ms);
        self.render(sink)
    }

    /// Steps either the active animation group or the observer.
    pub fn advance(&mut self, delta_ms: u64) -> PlaybackStatus {
        self.last_delta_ms = delta_ms;
        if self.player.is_playing() {
            let status = self.player.advance(delta_ms, &mut self.state);
            if status == PlaybackStatus::Finished {
                log::info!("Animation {} finished", self.player.current_index());
            }
            status
        } else {
            let movement = self.state.movement;
            self.state.observer.apply_movement(&movement);
            self.state.observer.tick(delta_ms);
            PlaybackStatus::Idle
        }
    }

    /// Resolves the current state and draws it, without advancing time.
    pub fn render(&mut self, sink: &mut dyn RenderSink) -> Result<()> {
        let observer = &self.state.observer;
        let toggles = self.state.toggles;

        let info = FrameInfo {
            index: self.frame_index,
            delta_ms: self.last_delta_ms,
            view: Mat4::look_at_rh(observer.position(), observer.focus_point(), Vec3::Y),
            skybox_view: Mat4::look_at_rh(Vec3::ZERO, observer.front(), Vec3::Y),
            projection: self.projection(),
            global_ambient: self.settings.global_ambient,
            toggles,
            shading: self.state.shading,
            debug: toggles.debug_info.then(|| self.debug_info()),
            instructions: if toggles.instructions { self.instructions.as_slice() } else { &[] },
        };
        self.frame_index += 1;

        sink.begin_frame(&info);

        if toggles.skybox
            && let Some(skybox) = self.skybox
        {
            sink.begin_pass(RenderPass::Skybox);
            self.arena.render(skybox, &self.state, sink)?;
        }

        sink.begin_pass(RenderPass::Scene);
        for (index, light) in self.lights.iter().enumerate() {
            sink.draw_light(&light.resolve(&self.state, index));
        }
        let drawn = self.arena.render(self.root, &self.state, sink)?;
        log::trace!("Frame {}: {} shapes drawn", info.index, drawn);

        sink.present();
        Ok(())
    }

    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.state.fov.to_radians(),
            self.settings.aspect_ratio(),
            self.settings.near,
            self.settings.render_distance,
        )
    }

    #[must_use]
    pub fn debug_info(&self) -> DebugInfo {
        let observer = &self.state.observer;
        DebugInfo {
            fps: self.fps.current_fps,
            fov: self.state.fov,
            animation: self.player.current_index(),
            playing: self.player.is_playing(),
            position: observer.position(),
            velocity: observer.velocity(),
            theta: observer.theta(),
            phi: observer.phi(),
        }
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Starts or pauses the selected group. Starting stops the observer.
    pub fn toggle_playback(&mut self) -> bool {
        let playing = self.player.toggle();
        if playing {
            self.state.observer.set_velocity(Vec3::ZERO);
        }
        playing
    }

    pub fn next_animation(&mut self) -> usize {
        self.player.next()
    }

    pub fn previous_animation(&mut self) -> usize {
        self.player.previous()
    }

    /// Mouse look by a pixel displacement; ignored while playing.
    pub fn look(&mut self, dx: f32, dy: f32) {
        if !self.player.is_playing() {
            self.state.observer.look(dx, dy);
        }
    }

    /// Narrows the field of view by one degree.
    pub fn zoom_in(&mut self) {
        if self.state.fov > self.settings.min_fov {
            self.state.fov -= 1.0;
        }
    }

    /// Widens the field of view by one degree.
    pub fn zoom_out(&mut self) {
        if self.state.fov < self.settings.max_fov {
            self.state.fov += 1.0;
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.settings.width = width;
        self.settings.height = height;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn state(&self) -> &ViewerState<P> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewerState<P> {
        &mut self.state
    }

    #[must_use]
    pub fn params(&self) -> &P {
        &self.state.params
    }

    pub fn params_mut(&mut self) -> &mut P {
        &mut self.state.params
    }

    #[must_use]
    pub fn observer(&self) -> &Observer {
        &self.state.observer
    }

    #[must_use]
    pub fn player(&self) -> &AnimationPlayer<ViewerState<P>> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut AnimationPlayer<ViewerState<P>> {
        &mut self.player
    }

    #[must_use]
    pub fn arena(&self) -> &ShapeArena<ViewerState<P>> {
        &self.arena
    }

    #[must_use]
    pub fn root(&self) -> ShapeKey {
        self.root
    }

    #[must_use]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    #[must_use]
    pub fn fov(&self) -> f32 {
        self.state.fov
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.state.exit_requested
    }

    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }
}

impl<P: 'static> Viewer<P> {
    /// The standard controls.
    pub fn default_bindings() -> Result<KeyBindings<Self>> {
        let mut keys = KeyBindings::<Self>::new();
        keys.hold(Key::Char(b'w'), "Move forward", |v| &mut v.state.movement.forward)?
            .hold(Key::Char(b'a'), "Move left", |v| &mut v.state.movement.left)?
            .hold(Key::Char(b's'), "Move back", |v| &mut v.state.movement.backward)?
            .hold(Key::Char(b'd'), "Move right", |v| &mut v.state.movement.right)?;

        keys.toggle(Key::Char(b'f'), "F", "Toggle flashlight", |v| &mut v.state.toggles.flashlight)?
            .toggle(Key::Char(b'b'), "B", "Toggle skybox", |v| &mut v.state.toggles.skybox)?
            .toggle(Key::Char(b'z'), "Z", "Toggle wireframe", |v| &mut v.state.toggles.wireframe)?
            .toggle(Key::Char(b'x'), "X", "Toggle axes", |v| &mut v.state.toggles.axes)?
            .toggle(Key::Char(b'l'), "L", "Toggle lighting", |v| &mut v.state.toggles.lighting)?
            .toggle(Key::Char(b'c'), "C", "Toggle culling", |v| &mut v.state.toggles.culling)?
            .toggle(Key::Char(b'm'), "M", "Toggle mesh", |v| &mut v.state.toggles.mesh)?;

        keys.on_press(Key::Char(b'p'), "Turn on Phong shading", |v| {
            v.state.shading = ShadingMode::Phong;
        })?
        .on_press(Key::Char(b'g'), "Turn on Gouraud shading", |v| {
            v.state.shading = ShadingMode::Gouraud;
        })?
        .on_press(Key::Char(b'h'), "Turn off shaders", |v| {
            v.state.shading = ShadingMode::Off;
        })?;

        keys.toggle(
            Key::Special(SpecialKey::F3),
            "F3",
            "Toggle debug information",
            |v| &mut v.state.toggles.debug_info,
        )?
        .toggle(
            Key::Special(SpecialKey::F4),
            "F4",
            "Toggle instructions",
            |v| &mut v.state.toggles.instructions,
        )?
        .toggle(
            Key::Special(SpecialKey::F11),
            "F11",
            "Toggle fullscreen",
            |v| &mut v.state.toggles.fullscreen,
        )?;

        keys.on_press(Key::SPACE, "Play/pause animation", |v| {
            v.toggle_playback();
        })?
        .on_press(Key::Special(SpecialKey::Left), "Go to previous animation", |v| {
            v.previous_animation();
        })?
        .on_press(Key::Special(SpecialKey::Right), "Go to next animation", |v| {
            v.next_animation();
        })?
        .on_press(Key::ESCAPE, "Exit", |v| {
            log::info!("Exit requested");
            v.state.exit_requested = true;
        })?;

        Ok(keys)
    }
}

impl<P: std::fmt::Debug> std::fmt::Debug for Viewer<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("state", &self.state)
            .field("player", &self.player)
            .field("arena", &self.arena)
            .field("lights", &self.lights.len())
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}
