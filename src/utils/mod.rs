//! Utility Module
//!
//! - [`Observer`]: first-person camera body with mass and drag
//! - [`FrameClock`]: millisecond ticks from host frame times
//! - [`FpsCounter`]: averaged frame rate for the debug overlay

pub mod fps_counter;
pub mod observer;
pub mod time;

pub use fps_counter::FpsCounter;
pub use observer::{Observer, ObserverSettings};
pub use time::FrameClock;
