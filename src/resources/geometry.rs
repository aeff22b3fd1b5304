use glam::{Vec2, Vec3};

/// One corner of a quad: position, shading normal and texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    #[must_use]
    pub const fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self { position, normal, uv }
    }

    /// Average of the given vertices, with the normal renormalized.
    ///
    /// Opposing normals cancel out; the result then falls back to the
    /// first vertex normal instead of a zero vector.
    #[must_use]
    pub fn average(vertices: &[Vertex]) -> Self {
        let n = vertices.len().max(1) as f32;
        let mut position = Vec3::ZERO;
        let mut normal = Vec3::ZERO;
        let mut uv = Vec2::ZERO;
        for v in vertices {
            position += v.position;
            normal += v.normal;
            uv += v.uv;
        }
        let fallback = vertices.first().map_or(Vec3::ZERO, |v| v.normal);
        Self {
            position: position / n,
            normal: normal.try_normalize().unwrap_or(fallback),
            uv: uv / n,
        }
    }
}

/// A planar-ish quad with corners in counter-clockwise winding.
///
/// The corner ring is the adjacency: corner `c` shares an edge with
/// corners `c + 1` and `c - 1` (mod 4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vertex; 4],
}

impl Quad {
    #[must_use]
    pub const fn new(corners: [Vertex; 4]) -> Self {
        Self { corners }
    }

    /// Midpoint of the edge from corner `c` to corner `c + 1`.
    #[must_use]
    pub fn edge_midpoint(&self, c: usize) -> Vertex {
        Vertex::average(&[self.corners[c % 4], self.corners[(c + 1) % 4]])
    }

    /// Average of the four corners.
    #[must_use]
    pub fn center(&self) -> Vertex {
        Vertex::average(&self.corners)
    }
}

/// Axis-aligned bounds of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

/// Flat list of quads, the geometry unit handed to the render sink.
///
/// Buffers are laid out four vertices per quad, in quad order, which is
/// what a `GL_QUADS`-style draw consumes directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadMesh {
    quads: Vec<Quad>,
}

impl QuadMesh {
    #[must_use]
    pub fn new(quads: Vec<Quad>) -> Self {
        Self { quads }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            quads: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    #[must_use]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.quads.len() * 4
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.quads.iter().flat_map(|q| q.corners.iter())
    }

    // ========================================================================
    // Flat buffers
    // ========================================================================

    #[must_use]
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices().map(|v| v.position.to_array()).collect()
    }

    #[must_use]
    pub fn normals(&self) -> Vec<[f32; 3]> {
        self.vertices().map(|v| v.normal.to_array()).collect()
    }

    #[must_use]
    pub fn uvs(&self) -> Vec<[f32; 2]> {
        self.vertices().map(|v| v.uv.to_array()).collect()
    }

    /// Bounds of all vertex positions, `None` for an empty mesh.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut vertices = self.vertices();
        let first = vertices.next()?.position;
        let (min, max) = vertices.fold((first, first), |(min, max), v| {
            (min.min(v.position), max.max(v.position))
        });
        Some(BoundingBox { min, max })
    }
}

impl FromIterator<Quad> for QuadMesh {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
