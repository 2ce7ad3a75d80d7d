//! # Mesh Buffer
//!
//! Flat, renderer-ready triangle representation.
//!
//! All geometry stays f64 inside the kernel; export to f32 happens here, at
//! the rendering boundary.

use serde::{Deserialize, Serialize};

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// A flat triangle buffer handed to the rendering layer.
///
/// ## Memory Layout
///
/// - `positions`: `[x0, y0, z0, x1, y1, z1, ...]` - 3 floats per vertex
/// - `normals`: `[nx0, ny0, nz0, ...]` - empty unless computed downstream
/// - `indices`: `[i0, i1, i2, ...]` - 3 indices per triangle
/// - `transform`: column-major 4x4 affine matrix
///
/// ## Invariants
///
/// - `indices.len() % 3 == 0`
/// - every index `< positions.len() / 3`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffer {
    /// Vertex positions, 3 floats per vertex.
    pub positions: Vec<f32>,
    /// Vertex normals, 3 floats per vertex; empty by default.
    pub normals: Vec<f32>,
    /// Triangle indices, 3 per triangle.
    pub indices: Vec<u32>,
    /// Column-major affine transform carried from the source geometry.
    pub transform: [f32; 16],
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl MeshBuffer {
    /// Creates an empty buffer: zero vertices, zero triangles, identity
    /// transform. Means "nothing to draw", not a failure.
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            transform: IDENTITY,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Checks the structural invariants.
    pub fn validate(&self) -> bool {
        if self.positions.len() % 3 != 0 || self.indices.len() % 3 != 0 {
            return false;
        }
        if !self.normals.is_empty() && self.normals.len() != self.positions.len() {
            return false;
        }
        let vertex_count = self.vertex_count() as u32;
        self.indices.iter().all(|&i| i < vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_valid() {
        let buffer = MeshBuffer::empty();
        assert!(buffer.is_empty());
        assert_eq!(buffer.vertex_count(), 0);
        assert_eq!(buffer.triangle_count(), 0);
        assert!(buffer.validate());
    }

    #[test]
    fn empty_buffer_has_identity_transform() {
        let buffer = MeshBuffer::empty();
        assert_eq!(buffer.transform[0], 1.0);
        assert_eq!(buffer.transform[5], 1.0);
        assert_eq!(buffer.transform[1], 0.0);
    }

    #[test]
    fn validate_rejects_out_of_range_indices() {
        let buffer = MeshBuffer {
            positions: vec![0.0; 9],
            normals: Vec::new(),
            indices: vec![0, 1, 3],
            transform: IDENTITY,
        };
        assert!(!buffer.validate());
    }

    #[test]
    fn validate_rejects_partial_triangles() {
        let buffer = MeshBuffer {
            positions: vec![0.0; 9],
            normals: Vec::new(),
            indices: vec![0, 1],
            transform: IDENTITY,
        };
        assert!(!buffer.validate());
    }

    #[test]
    fn serializes_for_the_render_boundary() {
        let buffer = MeshBuffer::empty();
        let json = serde_json::to_string(&buffer);
        assert!(json.is_ok());
    }
}
