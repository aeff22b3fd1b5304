//! Viewer Settings
//!
//! Plain `Default`-able configuration for a [`Viewer`](super::Viewer).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bulkhead::app::settings::{RenderToggles, ViewerSettings};
//!
//! let settings = ViewerSettings {
//!     fov: 60.0,
//!     toggles: RenderToggles {
//!         skybox: false,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! ```

use glam::Vec4;

pub use crate::utils::observer::ObserverSettings;

// ---------------------------------------------------------------------------
// ShadingMode
// ---------------------------------------------------------------------------

/// Which lighting model the host renderer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Per-fragment lighting.
    #[default]
    Phong,
    /// Per-vertex lighting.
    Gouraud,
    /// Fixed-function pipeline, no shader program.
    Off,
}

// ---------------------------------------------------------------------------
// RenderToggles
// ---------------------------------------------------------------------------

/// Switches the host renderer honors each frame.
///
/// `flashlight` and `mesh` are also read by the scene itself: the spotlight
/// and subdivided meshes are bound to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderToggles {
    pub wireframe: bool,
    /// Back-face culling.
    pub culling: bool,
    pub lighting: bool,
    /// Draw the world axes.
    pub axes: bool,
    pub flashlight: bool,
    pub skybox: bool,
    /// Draw subdivided meshes where a shape has them.
    pub mesh: bool,
    /// Debug overlay (fps, camera readout).
    pub debug_info: bool,
    /// Controls overlay.
    pub instructions: bool,
    pub fullscreen: bool,
}

impl Default for RenderToggles {
    fn default() -> Self {
        Self {
            wireframe: false,
            culling: true,
            lighting: true,
            axes: false,
            flashlight: true,
            skybox: true,
            mesh: false,
            debug_info: true,
            instructions: true,
            fullscreen: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewerSettings
// ---------------------------------------------------------------------------

/// Initial viewer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub observer: ObserverSettings,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub min_fov: f32,
    pub max_fov: f32,
    /// Far clipping distance.
    pub render_distance: f32,
    /// Near clipping distance.
    pub near: f32,
    /// Viewport size in pixels, used for the aspect ratio.
    pub width: u32,
    pub height: u32,
    /// Ambient term applied to the whole scene, independent of the lights.
    pub global_ambient: Vec4,
    pub toggles: RenderToggles,
    pub shading: ShadingMode,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            observer: ObserverSettings::default(),
            fov: 75.0,
            min_fov: 1.0,
            max_fov: 179.0,
            render_distance: 100.0,
            near: 0.1,
            width: 1280,
            height: 720,
            global_ambient: Vec4::new(0.1, 0.1, 0.1, 1.0),
            toggles: RenderToggles::default(),
            shading: ShadingMode::default(),
        }
    }
}

impl ViewerSettings {
    /// Width over height; 1 for a degenerate viewport.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
