use std::f64::consts::TAU;

use glam::{Vec2, Vec3};

use crate::errors::Result;
use crate::resources::geometry::{Quad, QuadMesh, Vertex};
use crate::resources::primitives::{ensure, non_negative, positive};

/// Side wall of a regular prism whose axis is Z.
///
/// With `span < sides` only an angular slice of the wall is generated,
/// starting `offset` steps from the +X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismWallOptions {
    pub radius: f32,
    pub height: f32,
    pub sides: u32,
    pub offset: f32,
    pub span: u32,
}

impl Default for PrismWallOptions {
    fn default() -> Self {
        Self::new(1.0, 1.0, 32)
    }
}

impl PrismWallOptions {
    /// Full wall.
    #[must_use]
    pub fn new(radius: f32, height: f32, sides: u32) -> Self {
        Self::partial(radius, height, sides, 0.0, sides)
    }

    /// Angular slice of `span` sides.
    #[must_use]
    pub fn partial(radius: f32, height: f32, sides: u32, offset: f32, span: u32) -> Self {
        Self {
            radius,
            height,
            sides,
            offset,
            span,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure(positive(self.radius), "PrismWall", || {
            format!("radius must be positive, got {}", self.radius)
        })?;
        ensure(non_negative(self.height), "PrismWall", || {
            format!("height must not be negative, got {}", self.height)
        })?;
        ensure(self.sides >= 3, "PrismWall", || {
            format!("needs at least 3 sides, got {}", self.sides)
        })?;
        ensure(self.span >= 1, "PrismWall", || "span must cover at least one side".to_string())?;
        ensure(self.offset.is_finite(), "PrismWall", || "offset must be finite".to_string())
    }

    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.span as usize
    }
}

#[must_use]
pub fn create_prism_wall(options: &PrismWallOptions) -> QuadMesh {
    let half = options.height / 2.0;
    let span = options.span;

    let column = |i: u32| {
        let theta = TAU * (f64::from(i) + f64::from(options.offset)) / f64::from(options.sides);
        let direction = Vec3::new(theta.cos() as f32, theta.sin() as f32, 0.0);
        let u = i as f32 / span as f32;
        let rim = direction * options.radius;
        let top = Vertex::new(rim + Vec3::Z * half, direction, Vec2::new(u, 1.0));
        let bottom = Vertex::new(rim - Vec3::Z * half, direction, Vec2::new(u, 0.0));
        (top, bottom)
    };

    (0..span)
        .map(|i| {
            let (top0, bottom0) = column(i);
            let (top1, bottom1) = column(i + 1);
            Quad::new([top0, bottom0, bottom1, top1])
        })
        .collect()
}
