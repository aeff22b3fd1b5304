use std::f64::consts::TAU;

use glam::{Vec2, Vec3};

use crate::errors::Result;
use crate::resources::geometry::{Quad, QuadMesh, Vertex};
use crate::resources::primitives::{ensure, non_negative};

/// Flat washer around Z with a rectangular cross-section.
///
/// Every angular step emits four quads: top (+Z), inner wall, bottom (-Z)
/// and outer wall. An `inner_radius` of zero closes the hole and yields a
/// disc (or pie slice with a partial span).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingOptions {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub height: f32,
    pub detail: u32,
    pub offset: f32,
    pub span: u32,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self::new(0.5, 1.0, 0.1, 32)
    }
}

impl RingOptions {
    /// Full ring.
    #[must_use]
    pub fn new(inner_radius: f32, outer_radius: f32, height: f32, detail: u32) -> Self {
        Self::partial(inner_radius, outer_radius, height, detail, 0.0, detail)
    }

    #[must_use]
    pub fn partial(
        inner_radius: f32,
        outer_radius: f32,
        height: f32,
        detail: u32,
        offset: f32,
        span: u32,
    ) -> Self {
        Self {
            inner_radius,
            outer_radius,
            height,
            detail,
            offset,
            span,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure(non_negative(self.inner_radius), "Ring", || {
            format!("inner radius must not be negative, got {}", self.inner_radius)
        })?;
        ensure(self.outer_radius > self.inner_radius, "Ring", || {
            format!(
                "outer radius {} must exceed inner radius {}",
                self.outer_radius, self.inner_radius
            )
        })?;
        ensure(non_negative(self.height), "Ring", || {
            format!("height must not be negative, got {}", self.height)
        })?;
        ensure(self.detail >= 3, "Ring", || {
            format!("detail must be at least 3, got {}", self.detail)
        })?;
        ensure(self.span >= 1, "Ring", || "span must cover at least one step".to_string())?;
        ensure(self.offset.is_finite(), "Ring", || "offset must be finite".to_string())
    }

    #[must_use]
    pub fn quad_count(&self) -> usize {
        4 * self.span as usize
    }
}

/// Cross-section corners walked in face order: top, inner wall, bottom, outer wall.
const PROFILE: [(Edge, f32); 5] = [
    (Edge::Outer, 1.0),
    (Edge::Inner, 1.0),
    (Edge::Inner, -1.0),
    (Edge::Outer, -1.0),
    (Edge::Outer, 1.0),
];

#[derive(Clone, Copy)]
enum Edge {
    Inner,
    Outer,
}

#[must_use]
pub fn create_ring(options: &RingOptions) -> QuadMesh {
    let half = options.height / 2.0;
    let span = options.span;

    let direction = |i: u32| {
        let theta = TAU * (f64::from(i) + f64::from(options.offset)) / f64::from(options.detail);
        Vec3::new(theta.cos() as f32, theta.sin() as f32, 0.0)
    };

    let point = |i: u32, j: usize, normal: Vec3| {
        let (edge, side) = PROFILE[j];
        let radius = match edge {
            Edge::Inner => options.inner_radius,
            Edge::Outer => options.outer_radius,
        };
        let position = direction(i) * radius + Vec3::Z * (side * half);
        let uv = Vec2::new(i as f32 / span as f32, j as f32 / 4.0);
        Vertex::new(position, normal, uv)
    };

    let mut mesh = QuadMesh::with_capacity(options.quad_count());
    for i in 0..span {
        for j in 0..4 {
            let normal = |step: u32| match j {
                0 => Vec3::Z,
                1 => -direction(step),
                2 => Vec3::NEG_Z,
                _ => direction(step),
            };
            mesh.push(Quad::new([
                point(i, j, normal(i)),
                point(i + 1, j, normal(i + 1)),
                point(i + 1, j + 1, normal(i + 1)),
                point(i, j + 1, normal(i)),
            ]));
        }
    }
    mesh
}
