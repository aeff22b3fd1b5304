//! Procedural primitives.
//!
//! Every generator produces a flat [`QuadMesh`] from closed-form
//! parametric equations. Curved primitives accept offset/span arguments
//! that generate only an angular slice (a half sphere, a quarter torus...).

pub mod cuboid;
pub mod donut;
pub mod prism_wall;
pub mod ring;
pub mod sphere;

pub use cuboid::{CuboidOptions, create_cuboid};
pub use donut::{DonutOptions, create_donut};
pub use prism_wall::{PrismWallOptions, create_prism_wall};
pub use ring::{RingOptions, create_ring};
pub use sphere::{SphereOptions, create_sphere};

use crate::errors::{Error, Result};
use crate::resources::geometry::QuadMesh;

/// The closed set of generators a leaf shape can carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cuboid(CuboidOptions),
    PrismWall(PrismWallOptions),
    Sphere(SphereOptions),
    Donut(DonutOptions),
    Ring(RingOptions),
}

impl Primitive {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Cuboid(_) => "Cuboid",
            Primitive::PrismWall(_) => "PrismWall",
            Primitive::Sphere(_) => "Sphere",
            Primitive::Donut(_) => "Donut",
            Primitive::Ring(_) => "Ring",
        }
    }

    /// Rejects parameters no geometry can be generated from.
    pub fn validate(&self) -> Result<()> {
        match self {
            Primitive::Cuboid(o) => o.validate(),
            Primitive::PrismWall(o) => o.validate(),
            Primitive::Sphere(o) => o.validate(),
            Primitive::Donut(o) => o.validate(),
            Primitive::Ring(o) => o.validate(),
        }
    }

    /// Number of quads [`generate`](Self::generate) emits.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        match self {
            Primitive::Cuboid(o) => o.quad_count(),
            Primitive::PrismWall(o) => o.quad_count(),
            Primitive::Sphere(o) => o.quad_count(),
            Primitive::Donut(o) => o.quad_count(),
            Primitive::Ring(o) => o.quad_count(),
        }
    }

    #[must_use]
    pub fn generate(&self) -> QuadMesh {
        match self {
            Primitive::Cuboid(o) => create_cuboid(o),
            Primitive::PrismWall(o) => create_prism_wall(o),
            Primitive::Sphere(o) => create_sphere(o),
            Primitive::Donut(o) => create_donut(o),
            Primitive::Ring(o) => create_ring(o),
        }
    }
}

impl From<CuboidOptions> for Primitive {
    fn from(options: CuboidOptions) -> Self {
        Primitive::Cuboid(options)
    }
}

impl From<PrismWallOptions> for Primitive {
    fn from(options: PrismWallOptions) -> Self {
        Primitive::PrismWall(options)
    }
}

impl From<SphereOptions> for Primitive {
    fn from(options: SphereOptions) -> Self {
        Primitive::Sphere(options)
    }
}

impl From<DonutOptions> for Primitive {
    fn from(options: DonutOptions) -> Self {
        Primitive::Donut(options)
    }
}

impl From<RingOptions> for Primitive {
    fn from(options: RingOptions) -> Self {
        Primitive::Ring(options)
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

pub(crate) fn ensure(
    condition: bool,
    kind: &'static str,
    reason: impl FnOnce() -> String,
) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidPrimitive { kind, reason: reason() })
    }
}

pub(crate) fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
