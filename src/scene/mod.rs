//! Shape composition
//!
//! Procedural shape trees and their transforms:
//! - Shape: leaf primitive or compound of child keys
//! - Transformation / TransformStack: ordered translate, rotate and scale
//! - ShapeArena: slot-map storage, deep copies and the clone combinator
//! - Light: dynamic directional, point and spot lights

pub mod arena;
pub mod light;
pub mod shape;
pub mod transform;

pub use arena::ShapeArena;
pub use light::{Light, LightKind, QuadraticAttenuation};
pub use shape::{Leaf, LeafGeometry, Shape, ShapeKind};
pub use transform::{TransformKind, TransformStack, Transformation};

use slotmap::new_key_type;

new_key_type! {
    pub struct ShapeKey;
}
