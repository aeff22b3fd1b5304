//! Core value types shared by the scene and render layers.

pub mod value;

pub use value::DynamicValue;
