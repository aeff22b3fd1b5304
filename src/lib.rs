#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod app;
pub mod core;
pub mod errors;
pub mod render;
pub mod resources;
pub mod scene;
pub mod utils;

pub use animation::{Animation, AnimationGroup, AnimationPlayer, Easing, PlaybackStatus};
pub use app::{Key, KeyBindings, SpecialKey, Viewer, ViewerSettings, ViewerState};
pub use crate::core::DynamicValue;
pub use errors::{Error, Result};
pub use render::{DrawItem, FrameInfo, LightState, RecordingSink, RenderPass, RenderSink};
pub use resources::primitives::*;
pub use resources::{Material, MaterialState, Primitive, QuadMesh, TextureId};
pub use scene::{Light, QuadraticAttenuation, Shape, ShapeArena, ShapeKey, Transformation};
pub use utils::{FrameClock, Observer, ObserverSettings};
