//! Application layer
//!
//! - [`Viewer`]: owns the scene state and drives one frame at a time
//! - [`settings`]: plain configuration structs
//! - [`keys`]: key binding table for the controls
//! - [`input`]: held movement keys

pub mod input;
pub mod keys;
pub mod settings;
pub mod viewer;

pub use input::MovementInput;
pub use keys::{Key, KeyBindings, SpecialKey};
pub use settings::{ObserverSettings, RenderToggles, ShadingMode, ViewerSettings};
pub use viewer::{Viewer, ViewerState};
