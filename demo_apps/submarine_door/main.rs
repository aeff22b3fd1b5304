//! Submarine Door Walkthrough
//!
//! Builds the door model, registers the five scripted sequences and drives
//! the viewer headlessly at 60 Hz, pressing keys the way a user would:
//! walk up to the door, then play every sequence to the end.
//!
//! Run with `RUST_LOG=info` (or `debug` for per-group details).

mod animations;
mod scene;

use anyhow::Context;
use bulkhead::render::{DrawItem, FrameInfo, LightState, RenderPass, RenderSink};
use bulkhead::{AnimationPlayer, FrameClock, Key, KeyBindings, SpecialKey, Viewer, ViewerSettings};

use crate::scene::DoorParams;

/// 60 Hz, in microseconds.
const FRAME_US: u64 = 16_667;
/// Safety net for a sequence that never finishes.
const MAX_FRAMES_PER_SEQUENCE: u32 = 60 * 60;

/// Sink that keeps per-frame statistics and logs a summary now and then.
#[derive(Default)]
struct LoggingSink {
    frame: u64,
    pass: Option<RenderPass>,
    skybox_draws: usize,
    scene_draws: usize,
    quads: usize,
    lights_on: usize,
}

impl RenderSink for LoggingSink {
    fn begin_frame(&mut self, frame: &FrameInfo<'_>) {
        self.frame = frame.index;
        self.pass = None;
        self.skybox_draws = 0;
        self.scene_draws = 0;
        self.quads = 0;
        self.lights_on = 0;

        if frame.index % 120 == 0
            && let Some(debug) = &frame.debug
        {
            log::info!(
                "frame {}: fps {:.0}, fov {}, animation {}{}, at {:.3} looking ({:.3}, {:.3})",
                frame.index,
                debug.fps,
                debug.fov,
                debug.animation,
                if debug.playing { " (playing)" } else { "" },
                debug.position,
                debug.theta,
                debug.phi
            );
        }
    }

    fn begin_pass(&mut self, pass: RenderPass) {
        self.pass = Some(pass);
    }

    fn draw_light(&mut self, light: &LightState) {
        if light.enabled {
            self.lights_on += 1;
        }
    }

    fn draw_shape(&mut self, item: &DrawItem<'_>) {
        match self.pass {
            Some(RenderPass::Skybox) => self.skybox_draws += 1,
            _ => self.scene_draws += 1,
        }
        self.quads += item.mesh.quad_count();
    }

    fn present(&mut self) {
        log::trace!(
            "frame {}: {} skybox + {} scene shapes, {} quads, {} lights on",
            self.frame,
            self.skybox_draws,
            self.scene_draws,
            self.quads,
            self.lights_on
        );
    }
}

struct Session {
    viewer: Viewer<DoorParams>,
    keys: KeyBindings<Viewer<DoorParams>>,
    clock: FrameClock,
    sink: LoggingSink,
}

impl Session {
    fn step(&mut self) -> anyhow::Result<()> {
        let delta = self.clock.tick(FRAME_US);
        self.viewer.frame(delta, &mut self.sink)?;
        Ok(())
    }

    fn press(&mut self, key: Key) {
        self.keys.key_down(key, &mut self.viewer);
        self.keys.key_up(key, &mut self.viewer);
    }

    /// Holds `key` for `frames` frames.
    fn hold(&mut self, key: Key, frames: u32) -> anyhow::Result<()> {
        self.keys.key_down(key, &mut self.viewer);
        for _ in 0..frames {
            self.step()?;
        }
        self.keys.key_up(key, &mut self.viewer);
        Ok(())
    }

    fn play_current(&mut self) -> anyhow::Result<()> {
        let name = self.viewer.player().current().name().to_owned();
        log::info!("Playing '{name}'");

        self.press(Key::SPACE);
        let mut frames = 0;
        while self.viewer.is_playing() && frames < MAX_FRAMES_PER_SEQUENCE {
            self.step()?;
            frames += 1;
        }

        log::info!(
            "'{name}' done after {frames} frames, observer at {:.3}",
            self.viewer.observer().position()
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let door = scene::build().context("building the door model")?;
    let player = AnimationPlayer::new(animations::groups())?;

    let mut viewer = Viewer::new(
        ViewerSettings::default(),
        DoorParams::default(),
        door.arena,
        door.root,
        player,
    )?
    .with_skybox(door.skybox)?;
    for light in scene::lights() {
        viewer.add_light(light);
    }

    let keys = Viewer::default_bindings()?;
    viewer.set_instructions(keys.instructions());
    for line in viewer.instructions() {
        log::debug!("{line}");
    }

    let mut session = Session {
        viewer,
        keys,
        clock: FrameClock::new(),
        sink: LoggingSink::default(),
    };

    // walk towards the door, glancing left
    session.hold(Key::Char(b'w'), 90)?;
    session.viewer.look(-400.0, 0.0);
    session.hold(Key::Char(b'd'), 30)?;
    session.viewer.zoom_in();

    // smooth meshes for the walkthrough
    session.press(Key::Char(b'M'));

    let sequences = session.viewer.player().len();
    for _ in 0..sequences {
        session.play_current()?;
        session.press(Key::Special(SpecialKey::Right));
    }

    session.press(Key::ESCAPE);
    if session.viewer.exit_requested() {
        log::info!(
            "Finished after {} frames ({} ms simulated)",
            session.clock.frame_count,
            session.clock.elapsed_ms
        );
    }
    Ok(())
}
