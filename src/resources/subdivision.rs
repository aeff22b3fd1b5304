//! Quad subdivision ("mesh smoothing").
//!
//! Each pass splits every quad into four. Sub-quad `c` keeps corner `c` of
//! the parent and is completed by the midpoint of edge `(c, c+1)`, the face
//! centre and the midpoint of edge `(c-1, c)`, laid out so the parent
//! winding is preserved:
//!
//! ```text
//!  3 ---- m2 ---- 2
//!  |  q3   |  q2  |
//!  m3 --- ctr --- m1
//!  |  q0   |  q1  |
//!  0 ---- m0 ---- 1
//! ```
//!
//! Positions, normals and texture coordinates are averaged; normals are
//! renormalized. Neighbouring quads compute identical midpoints for a
//! shared edge, so a pass never opens cracks.

use crate::resources::geometry::{Quad, QuadMesh, Vertex};

/// Number of passes applied for a mesh level. Level 1 (and below) is the base mesh.
#[must_use]
pub fn passes_for_level(level: u32) -> u32 {
    level.saturating_sub(1)
}

/// Splits one quad into its four children, in corner order.
#[must_use]
pub fn split_quad(quad: &Quad) -> [Quad; 4] {
    let center = quad.center();
    let mids: [Vertex; 4] = std::array::from_fn(|c| quad.edge_midpoint(c));

    std::array::from_fn(|c| {
        let mut corners = [Vertex::default(); 4];
        corners[c] = quad.corners[c];
        corners[(c + 1) % 4] = mids[c];
        corners[(c + 2) % 4] = center;
        corners[(c + 3) % 4] = mids[(c + 3) % 4];
        Quad::new(corners)
    })
}

/// One subdivision pass over the whole mesh.
#[must_use]
pub fn subdivide_once(mesh: &QuadMesh) -> QuadMesh {
    let mut out = QuadMesh::with_capacity(mesh.quad_count() * 4);
    for quad in mesh.quads() {
        for child in split_quad(quad) {
            out.push(child);
        }
    }
    out
}

/// Applies `passes` subdivision passes.
#[must_use]
pub fn subdivide(mesh: &QuadMesh, passes: u32) -> QuadMesh {
    let mut current = mesh.clone();
    for _ in 0..passes {
        current = subdivide_once(&current);
    }
    current
}
