use std::f64::consts::TAU;

use glam::{Vec2, Vec3};

use crate::errors::Result;
use crate::resources::geometry::{Quad, QuadMesh, Vertex};
use crate::resources::primitives::{ensure, non_negative};

/// Torus lying in the XY plane, optionally restricted to a slice.
///
/// The tube runs between `inner_radius` and `outer_radius`. `detail_xy`
/// steps go around Z (the ring), `detail_z` steps around the tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutOptions {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub detail_xy: u32,
    pub offset_xy: f32,
    pub span_xy: u32,
    pub detail_z: u32,
    pub offset_z: f32,
    pub span_z: u32,
}

impl Default for DonutOptions {
    fn default() -> Self {
        Self::new(0.5, 1.0, 32, 16)
    }
}

impl DonutOptions {
    /// Full torus.
    #[must_use]
    pub fn new(inner_radius: f32, outer_radius: f32, detail_xy: u32, detail_z: u32) -> Self {
        Self::partial(
            inner_radius,
            outer_radius,
            detail_xy,
            0.0,
            detail_xy,
            detail_z,
            0.0,
            detail_z,
        )
    }

    #[must_use]
    pub fn partial(
        inner_radius: f32,
        outer_radius: f32,
        detail_xy: u32,
        offset_xy: f32,
        span_xy: u32,
        detail_z: u32,
        offset_z: f32,
        span_z: u32,
    ) -> Self {
        Self {
            inner_radius,
            outer_radius,
            detail_xy,
            offset_xy,
            span_xy,
            detail_z,
            offset_z,
            span_z,
        }
    }

    /// Distance from the centre to the middle of the tube.
    #[must_use]
    pub fn middle_radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Radius of the tube cross-section.
    #[must_use]
    pub fn tube_radius(&self) -> f32 {
        (self.outer_radius - self.inner_radius) / 2.0
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure(non_negative(self.inner_radius), "Donut", || {
            format!("inner radius must not be negative, got {}", self.inner_radius)
        })?;
        ensure(self.outer_radius > self.inner_radius, "Donut", || {
            format!(
                "outer radius {} must exceed inner radius {}",
                self.outer_radius, self.inner_radius
            )
        })?;
        ensure(self.detail_xy >= 3 && self.detail_z >= 3, "Donut", || {
            format!("details must be at least 3, got {}x{}", self.detail_xy, self.detail_z)
        })?;
        ensure(self.span_xy >= 1 && self.span_z >= 1, "Donut", || {
            format!("spans must be at least 1, got {}x{}", self.span_xy, self.span_z)
        })?;
        ensure(self.offset_xy.is_finite() && self.offset_z.is_finite(), "Donut", || {
            "offsets must be finite".to_string()
        })
    }

    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.span_xy as usize * self.span_z as usize
    }
}

#[must_use]
pub fn create_donut(options: &DonutOptions) -> QuadMesh {
    let middle = f64::from(options.middle_radius());
    let tube = f64::from(options.tube_radius());

    let point = |i: u32, j: u32| {
        let theta =
            TAU * (f64::from(i) + f64::from(options.offset_xy)) / f64::from(options.detail_xy);
        let phi = TAU * (f64::from(j) + f64::from(options.offset_z)) / f64::from(options.detail_z);
        let reach = middle + tube * phi.cos();

        let position = Vec3::new(
            (reach * theta.cos()) as f32,
            (reach * theta.sin()) as f32,
            (tube * phi.sin()) as f32,
        );
        let normal = Vec3::new(
            (phi.cos() * theta.cos()) as f32,
            (phi.cos() * theta.sin()) as f32,
            phi.sin() as f32,
        );
        let uv = Vec2::new(
            i as f32 / options.span_xy as f32,
            j as f32 / options.span_z as f32,
        );
        Vertex::new(position, normal, uv)
    };

    let mut mesh = QuadMesh::with_capacity(options.quad_count());
    for i in 0..options.span_xy {
        for j in 0..options.span_z {
            mesh.push(Quad::new([
                point(i, j),
                point(i + 1, j),
                point(i + 1, j + 1),
                point(i, j + 1),
            ]));
        }
    }
    mesh
}
