use glam::{Vec2, Vec3};

use crate::errors::Result;
use crate::resources::geometry::{Quad, QuadMesh, Vertex};
use crate::resources::primitives::{ensure, positive};

/// Axis-aligned box centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidOptions {
    /// Extent along X.
    pub width: f32,
    /// Extent along Y.
    pub height: f32,
    /// Extent along Z.
    pub length: f32,
}

impl Default for CuboidOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            length: 1.0,
        }
    }
}

impl CuboidOptions {
    #[must_use]
    pub fn new(width: f32, height: f32, length: f32) -> Self {
        Self { width, height, length }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure(positive(self.width), "Cuboid", || {
            format!("width must be positive, got {}", self.width)
        })?;
        ensure(positive(self.height), "Cuboid", || {
            format!("height must be positive, got {}", self.height)
        })?;
        ensure(positive(self.length), "Cuboid", || {
            format!("length must be positive, got {}", self.length)
        })
    }

    #[must_use]
    pub fn quad_count(&self) -> usize {
        6
    }
}

#[must_use]
pub fn create_cuboid(options: &CuboidOptions) -> QuadMesh {
    let w = options.width / 2.0;
    let h = options.height / 2.0;
    let l = options.length / 2.0;

    // (normal, [(position, uv); 4]) per face
    let faces: [(Vec3, [([f32; 3], [f32; 2]); 4]); 6] = [
        // Front face (+Z)
        (
            Vec3::Z,
            [
                ([-w, -h, l], [1.0, 0.0]),
                ([w, -h, l], [1.0, 1.0]),
                ([w, h, l], [0.0, 1.0]),
                ([-w, h, l], [0.0, 0.0]),
            ],
        ),
        // Back face (-Z)
        (
            Vec3::NEG_Z,
            [
                ([-w, h, -l], [0.0, 0.0]),
                ([w, h, -l], [0.0, 1.0]),
                ([w, -h, -l], [1.0, 1.0]),
                ([-w, -h, -l], [1.0, 0.0]),
            ],
        ),
        // Left face (-X)
        (
            Vec3::NEG_X,
            [
                ([-w, h, l], [0.0, 0.0]),
                ([-w, h, -l], [0.0, 1.0]),
                ([-w, -h, -l], [1.0, 1.0]),
                ([-w, -h, l], [1.0, 0.0]),
            ],
        ),
        // Right face (+X)
        (
            Vec3::X,
            [
                ([w, -h, l], [1.0, 0.0]),
                ([w, -h, -l], [1.0, 1.0]),
                ([w, h, -l], [0.0, 1.0]),
                ([w, h, l], [0.0, 0.0]),
            ],
        ),
        // Top face (+Y)
        (
            Vec3::Y,
            [
                ([w, h, l], [1.0, 0.0]),
                ([w, h, -l], [1.0, 1.0]),
                ([-w, h, -l], [0.0, 1.0]),
                ([-w, h, l], [0.0, 0.0]),
            ],
        ),
        // Bottom face (-Y)
        (
            Vec3::NEG_Y,
            [
                ([-w, -h, l], [0.0, 0.0]),
                ([-w, -h, -l], [0.0, 1.0]),
                ([w, -h, -l], [1.0, 1.0]),
                ([w, -h, l], [1.0, 0.0]),
            ],
        ),
    ];

    faces
        .iter()
        .map(|(normal, corners)| {
            Quad::new(corners.map(|(position, uv)| {
                Vertex::new(Vec3::from_array(position), *normal, Vec2::from_array(uv))
            }))
        })
        .collect()
}
