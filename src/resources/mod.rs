//! Geometry and surface resources
//!
//! CPU-side data handed to the render sink, independent of any GPU API:
//! - Geometry: quad meshes and bounds
//! - Primitives: procedural generators
//! - Subdivision: quad smoothing passes
//! - Material: animated surface parameters
//! - Texture: opaque texture handles

pub mod geometry;
pub mod material;
pub mod primitives;
pub mod subdivision;
pub mod texture;

pub use geometry::{BoundingBox, Quad, QuadMesh, Vertex};
pub use material::{Material, MaterialState};
pub use primitives::Primitive;
pub use texture::TextureId;
