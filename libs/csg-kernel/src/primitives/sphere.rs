//! # Sphere Primitive
//!
//! Generates polygons for spheres using latitude/longitude tessellation.

use crate::error::KernelError;
use crate::geometry::{Polygon, Solid};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `segments` - Number of segments around the circumference
///
/// # Algorithm
///
/// - `num_rings = (segments + 1) / 2`
/// - Each ring at polar angle `phi = 180° * (i + 0.5) / num_rings`
/// - No pole vertices - the first and last rings become polygon caps
///
/// # Example
///
/// ```rust
/// use csg_kernel::primitives::sphere;
///
/// let solid = sphere(5.0, 16).unwrap();
/// assert!(!solid.is_empty());
/// ```
pub fn sphere(radius: f64, segments: u32) -> Result<Solid, KernelError> {
    if radius <= 0.0 {
        return Err(KernelError::degenerate(format!(
            "sphere radius must be positive: {radius}"
        )));
    }
    if segments < 3 {
        return Err(KernelError::degenerate(format!(
            "sphere segments must be at least 3: {segments}"
        )));
    }

    let num_rings = (segments + 1) / 2;

    let mut rings: Vec<Vec<DVec3>> = Vec::with_capacity(num_rings as usize);
    for i in 0..num_rings {
        // Polar angle (0 = top, PI = bottom), offset so poles fall between rings
        let phi = PI * (i as f64 + 0.5) / num_rings as f64;
        let ring_radius = radius * phi.sin();
        let z = radius * phi.cos();

        let ring = (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                DVec3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), z)
            })
            .collect();
        rings.push(ring);
    }

    let mut polygons = Vec::new();

    // Top cap: first ring as one polygon, counter-clockwise seen from above
    polygons.push(Polygon::new(rings[0].clone()));

    // Middle bands: quads between adjacent rings
    for i in 0..(num_rings as usize - 1) {
        let upper = &rings[i];
        let lower = &rings[i + 1];
        for j in 0..segments as usize {
            let j_next = (j + 1) % segments as usize;
            polygons.push(Polygon::new(vec![
                upper[j],
                lower[j],
                lower[j_next],
                upper[j_next],
            ]));
        }
    }

    // Bottom cap: last ring reversed so the face points down
    let mut bottom = rings[num_rings as usize - 1].clone();
    bottom.reverse();
    polygons.push(Polygon::new(bottom));

    Ok(Solid::from_polygons(polygons))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_basic() {
        let solid = sphere(5.0, 16).unwrap();
        assert!(!solid.is_empty());
        // 2 caps + (rings - 1) bands of `segments` quads
        let num_rings = (16 + 1) / 2;
        assert_eq!(solid.polygons().len(), 2 + (num_rings - 1) * 16);
    }

    #[test]
    fn sphere_bounding_box() {
        let radius = 5.0;
        let solid = sphere(radius, 32).unwrap();
        let (min, max) = solid.bounding_box().unwrap();
        let tolerance = radius * 0.1;
        assert!(min.x >= -radius - tolerance && max.x <= radius + tolerance);
        assert!(min.y >= -radius - tolerance && max.y <= radius + tolerance);
        assert!(min.z >= -radius - tolerance && max.z <= radius + tolerance);
    }

    #[test]
    fn sphere_invalid_radius() {
        assert!(sphere(0.0, 16).is_err());
        assert!(sphere(-5.0, 16).is_err());
    }

    #[test]
    fn sphere_too_few_segments() {
        assert!(sphere(5.0, 2).is_err());
    }
}
