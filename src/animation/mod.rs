//! Animation System
//!
//! Timed scalar interpolations writing into explicit application state:
//! - [`Easing`]: normalized progress curves
//! - [`Animation`]: one eased interpolation over a time window
//! - [`AnimationGroup`]: animations sharing one clock
//! - [`AnimationPlayer`]: selects and plays one group at a time

pub mod action;
pub mod easing;
pub mod group;
pub mod player;

pub use action::{Animation, AnimationState};
pub use easing::Easing;
pub use group::AnimationGroup;
pub use player::{AnimationPlayer, PlaybackStatus};
