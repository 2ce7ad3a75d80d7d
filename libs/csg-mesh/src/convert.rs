//! # Geometry → Triangle Buffer Conversion
//!
//! Turns any kernel result into a flat, non-deduplicated triangle soup.
//!
//! ## Input shapes, tried in order
//!
//! 1. a solid - tessellate its polygons
//! 2. a bare polygon list - tessellate directly
//! 3. a 2D profile or point set - manufacture a minimal solid with a thin
//!    linear extrusion, then tessellate that
//! 4. anything else - empty buffer
//!
//! ## Winding
//!
//! Polygons with exactly 3 vertices pass through with vertex order untouched;
//! that order defines the front face and must not be changed casually. Larger
//! polygons fan-triangulate from vertex 0 with `i` descending from `N-3` to
//! `0`, emitting `(v0, v[i+1], v[i+2])`. The descending order is the
//! pipeline's winding convention; reproduce it exactly or compensate with a
//! consistent reversal downstream.
//!
//! Polygons with fewer than 3 vertices are skipped; they never abort the
//! conversion.

use crate::buffer::MeshBuffer;
use config::constants::FALLBACK_EXTRUDE_HEIGHT;
use csg_kernel::ops::extrude::{extrude_linear, LinearExtrudeOptions};
use csg_kernel::{Geometry, PointSet, Polygon, Profile};
use glam::{DMat4, DVec3};

/// Converts one kernel result into a triangle buffer.
///
/// Infallible: inputs with nothing to tessellate yield an empty buffer.
/// Normals are left empty (computed downstream); the source geometry's
/// transform passes through unchanged.
///
/// # Example
///
/// ```rust
/// use csg_kernel::primitives::cube;
/// use csg_kernel::Geometry;
/// use csg_mesh::convert;
///
/// let buffer = convert(&Geometry::Solid(cube(1.0, false).unwrap()));
/// assert_eq!(buffer.triangle_count(), 12);
/// assert!(buffer.normals.is_empty());
/// ```
pub fn convert(geometry: &Geometry) -> MeshBuffer {
    match geometry {
        Geometry::Solid(solid) => soup(solid.polygons(), solid.transform()),
        Geometry::Polygons(polygons) => soup(polygons, DMat4::IDENTITY),
        Geometry::Profile(profile) => profile_fallback(profile),
        Geometry::Points(points) => points_fallback(points),
        Geometry::Empty => MeshBuffer::empty(),
    }
}

/// Converts N results independently, preserving input order.
///
/// Malformed entries yield empty buffers; the output list always has exactly
/// as many entries as the input.
pub fn convert_batch(geometries: &[&Geometry]) -> Vec<MeshBuffer> {
    geometries.iter().map(|g| convert(g)).collect()
}

/// Rescues a bare 2D profile with a negligible-height extrusion.
fn profile_fallback(profile: &Profile) -> MeshBuffer {
    let options = LinearExtrudeOptions {
        height: FALLBACK_EXTRUDE_HEIGHT,
        twist: 0.0,
        slices: 1,
    };
    match extrude_linear(profile, &options) {
        Ok(solid) => soup(solid.polygons(), solid.transform()),
        Err(_) => MeshBuffer::empty(),
    }
}

/// Rescues a bare point set by treating it as an XY outline.
fn points_fallback(points: &PointSet) -> MeshBuffer {
    if points.points().len() < 3 {
        return MeshBuffer::empty();
    }
    let outline = points.points().iter().map(|p| p.truncate()).collect();
    profile_fallback(&Profile::new(outline))
}

/// Fan-triangulates polygons into a flat soup.
fn soup(polygons: &[Polygon], transform: DMat4) -> MeshBuffer {
    let mut buffer = MeshBuffer {
        positions: Vec::new(),
        normals: Vec::new(),
        indices: Vec::new(),
        transform: transform_to_f32(transform),
    };

    for polygon in polygons {
        let vertices = polygon.vertices();
        let n = vertices.len();
        if n < 3 {
            // degenerate facet: skip, keep the rest
            continue;
        }
        for i in (0..=n - 3).rev() {
            emit(&mut buffer, vertices[0], vertices[i + 1], vertices[i + 2]);
        }
    }

    buffer
}

fn emit(buffer: &mut MeshBuffer, a: DVec3, b: DVec3, c: DVec3) {
    let base = (buffer.positions.len() / 3) as u32;
    for vertex in [a, b, c] {
        buffer
            .positions
            .extend([vertex.x as f32, vertex.y as f32, vertex.z as f32]);
    }
    buffer.indices.extend([base, base + 1, base + 2]);
}

fn transform_to_f32(transform: DMat4) -> [f32; 16] {
    transform.to_cols_array().map(|v| v as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use csg_kernel::primitives::{cube, rectangle};
    use glam::DVec2;

    fn vertex(buffer: &MeshBuffer, index: usize) -> DVec3 {
        DVec3::new(
            f64::from(buffer.positions[index * 3]),
            f64::from(buffer.positions[index * 3 + 1]),
            f64::from(buffer.positions[index * 3 + 2]),
        )
    }

    #[test]
    fn triangle_passes_through_unchanged() {
        let triangle = Polygon::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ]);
        let buffer = convert(&Geometry::Polygons(vec![triangle.clone()]));
        assert_eq!(buffer.triangle_count(), 1);
        for (i, expected) in triangle.vertices().iter().enumerate() {
            assert_eq!(vertex(&buffer, i), *expected);
        }
    }

    #[test]
    fn quad_fans_in_descending_order() {
        let v = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let buffer = convert(&Geometry::Polygons(vec![Polygon::new(v.to_vec())]));
        assert_eq!(buffer.triangle_count(), 2);
        // First emitted triangle is (v0, v2, v3), then (v0, v1, v2)
        assert_eq!(vertex(&buffer, 0), v[0]);
        assert_eq!(vertex(&buffer, 1), v[2]);
        assert_eq!(vertex(&buffer, 2), v[3]);
        assert_eq!(vertex(&buffer, 3), v[0]);
        assert_eq!(vertex(&buffer, 4), v[1]);
        assert_eq!(vertex(&buffer, 5), v[2]);
    }

    #[test]
    fn soup_never_deduplicates() {
        let buffer = convert(&Geometry::Solid(cube(1.0, false).unwrap()));
        assert_eq!(buffer.triangle_count(), 12);
        assert_eq!(buffer.vertex_count(), 3 * buffer.triangle_count());
        assert!(buffer.validate());
    }

    #[test]
    fn degenerate_polygons_are_skipped_not_fatal() {
        let polygons = vec![
            Polygon::new(vec![DVec3::ZERO, DVec3::X]),
            Polygon::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y]),
        ];
        let buffer = convert(&Geometry::Polygons(polygons));
        assert_eq!(buffer.triangle_count(), 1);
    }

    #[test]
    fn bare_profile_converts_through_extrusion_fallback() {
        let profile = rectangle(DVec2::splat(2.0), true).unwrap();
        let buffer = convert(&Geometry::Profile(profile));
        assert!(!buffer.is_empty());
        assert_eq!(buffer.indices.len() % 3, 0);
        assert!(buffer.validate());
    }

    #[test]
    fn point_set_converts_through_extrusion_fallback() {
        let points = PointSet::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
        ]);
        let buffer = convert(&Geometry::Points(points));
        assert!(!buffer.is_empty());
        assert_eq!(buffer.indices.len() % 3, 0);
    }

    #[test]
    fn too_few_points_yield_an_empty_buffer() {
        let points = PointSet::new(vec![DVec3::ZERO, DVec3::X]);
        let buffer = convert(&Geometry::Points(points));
        assert!(buffer.is_empty());
    }

    #[test]
    fn transform_passes_through_unchanged() {
        let solid = cube(1.0, false)
            .unwrap()
            .transformed(DMat4::from_translation(DVec3::new(3.0, 4.0, 5.0)));
        let buffer = convert(&Geometry::Solid(solid));
        // Column-major: translation sits in the last column
        assert_relative_eq!(buffer.transform[12], 3.0);
        assert_relative_eq!(buffer.transform[13], 4.0);
        assert_relative_eq!(buffer.transform[14], 5.0);
        // Local-space positions untouched by the transform
        assert_relative_eq!(buffer.positions.iter().copied().fold(f32::MIN, f32::max), 1.0);
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let good = Geometry::Solid(cube(1.0, false).unwrap());
        let empty = Geometry::Empty;
        let malformed = Geometry::Points(PointSet::new(vec![DVec3::ZERO]));
        let buffers = convert_batch(&[&good, &empty, &malformed, &good]);
        assert_eq!(buffers.len(), 4);
        assert!(!buffers[0].is_empty());
        assert!(buffers[1].is_empty());
        assert!(buffers[2].is_empty());
        assert_eq!(buffers[0], buffers[3]);
    }
}
