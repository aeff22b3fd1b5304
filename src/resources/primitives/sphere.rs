use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{Vec2, Vec3};

use crate::errors::Result;
use crate::resources::geometry::{Quad, QuadMesh, Vertex};
use crate::resources::primitives::{ensure, positive};

/// UV sphere, optionally restricted to a slice.
///
/// `detail` is the number of steps around a full turn of longitude and
/// along a full half-turn of latitude. `offset_x`/`span_x` select the
/// longitude steps (around Y), `offset_y`/`span_y` the latitude steps
/// (from the north pole down). A full sphere has `span_x == span_y == detail`;
/// `span_x == detail / 2` gives the +Z hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOptions {
    pub radius: f32,
    pub detail: u32,
    pub offset_x: f32,
    pub span_x: u32,
    pub offset_y: f32,
    pub span_y: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self::new(1.0, 20)
    }
}

impl SphereOptions {
    /// Full sphere.
    #[must_use]
    pub fn new(radius: f32, detail: u32) -> Self {
        Self::partial(radius, detail, 0.0, detail, 0.0, detail)
    }

    #[must_use]
    pub fn partial(
        radius: f32,
        detail: u32,
        offset_x: f32,
        span_x: u32,
        offset_y: f32,
        span_y: u32,
    ) -> Self {
        Self {
            radius,
            detail,
            offset_x,
            span_x,
            offset_y,
            span_y,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure(positive(self.radius), "Sphere", || {
            format!("radius must be positive, got {}", self.radius)
        })?;
        ensure(self.detail >= 2, "Sphere", || {
            format!("detail must be at least 2, got {}", self.detail)
        })?;
        ensure(self.span_x >= 1 && self.span_y >= 1, "Sphere", || {
            format!("spans must be at least 1, got {}x{}", self.span_x, self.span_y)
        })?;
        ensure(self.offset_x.is_finite() && self.offset_y.is_finite(), "Sphere", || {
            "offsets must be finite".to_string()
        })
    }

    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.span_x as usize * self.span_y as usize
    }
}

#[must_use]
pub fn create_sphere(options: &SphereOptions) -> QuadMesh {
    let detail = f64::from(options.detail);
    let span_x = options.span_x;
    let span_y = options.span_y;

    // i walks latitude rows, j walks longitude columns
    let point = |i: u32, j: u32| {
        let theta = FRAC_PI_2 - PI * (f64::from(i) + f64::from(options.offset_y)) / detail;
        let phi = TAU * (f64::from(j) + f64::from(options.offset_x)) / detail;

        let normal = Vec3::new(
            (theta.cos() * phi.cos()) as f32,
            theta.sin() as f32,
            (theta.cos() * phi.sin()) as f32,
        );
        let uv = Vec2::new(j as f32 / span_x as f32, (span_y - i) as f32 / span_y as f32);

        Vertex::new(normal * options.radius, normal, uv)
    };

    let mut mesh = QuadMesh::with_capacity(options.quad_count());
    for i in 0..span_y {
        for j in 0..span_x {
            mesh.push(Quad::new([
                point(i, j + 1),
                point(i + 1, j + 1),
                point(i + 1, j),
                point(i, j),
            ]));
        }
    }
    mesh
}
