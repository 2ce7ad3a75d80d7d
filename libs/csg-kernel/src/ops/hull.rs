//! # Convex Hull
//!
//! 3D convex hull via QuickHull (Barber, Dobkin, Huhdanpaa), operating on
//! the world-space vertices of any geometry operands.
//!
//! ## Algorithm
//!
//! 1. Build an initial tetrahedron from extreme points
//! 2. Assign remaining points to faces they are outside of
//! 3. For each face with outside points: take the farthest, find the horizon
//!    of visible faces, re-triangulate from the horizon to that point
//! 4. Repeat until no face has outside points

use crate::error::KernelError;
use crate::geometry::{Geometry, Polygon, Solid};
use config::constants::PLANE_EPSILON;
use glam::DVec3;
use std::collections::HashMap;

/// Computes the convex hull of the combined vertices of N operands.
///
/// # Example
///
/// ```rust
/// use csg_kernel::ops::hull::hull;
/// use csg_kernel::primitives::cube;
/// use csg_kernel::Geometry;
///
/// let solid = cube(2.0, false).unwrap();
/// let hulled = hull(&[&Geometry::Solid(solid)]).unwrap();
/// assert_eq!(hulled.polygons().len(), 12);
/// ```
pub fn hull(operands: &[&Geometry]) -> Result<Solid, KernelError> {
    if operands.is_empty() {
        return Err(KernelError::invalid_argument(
            "hull requires at least one operand",
        ));
    }
    let mut points = Vec::new();
    for geometry in operands {
        points.extend(geometry.world_vertices());
    }
    let triangles = convex_hull(&points)?;
    Ok(Solid::from_polygons(triangles))
}

/// Hulls consecutive operand pairs and unions the results.
pub fn hull_chain(operands: &[&Geometry]) -> Result<Solid, KernelError> {
    if operands.len() < 2 {
        return Err(KernelError::invalid_argument(
            "hullChain requires at least two operands",
        ));
    }
    let mut polygons = Vec::new();
    for pair in operands.windows(2) {
        let link = hull(pair)?;
        polygons.extend(link.baked_polygons());
    }
    Ok(Solid::from_polygons(polygons))
}

/// Computes the convex hull triangles of a point cloud.
pub fn convex_hull(points: &[DVec3]) -> Result<Vec<Polygon>, KernelError> {
    let points = dedup_points(points);
    if points.len() < 4 {
        return Err(KernelError::degenerate(format!(
            "convex hull requires at least 4 unique points: {}",
            points.len()
        )));
    }

    let mut faces = initial_simplex(&points)?;
    iterate(&mut faces, &points);

    Ok(faces
        .iter()
        .map(|face| {
            Polygon::new(vec![
                points[face.vertices[0]],
                points[face.vertices[1]],
                points[face.vertices[2]],
            ])
        })
        .collect())
}

/// A triangular hull face with its outward plane and conflict list.
#[derive(Debug, Clone)]
struct HullFace {
    vertices: [usize; 3],
    normal: DVec3,
    distance: f64,
    outside_points: Vec<usize>,
}

impl HullFace {
    fn new(v0: usize, v1: usize, v2: usize, points: &[DVec3]) -> Self {
        let p0 = points[v0];
        let normal = (points[v1] - p0).cross(points[v2] - p0).normalize_or_zero();
        Self {
            vertices: [v0, v1, v2],
            normal,
            distance: normal.dot(p0),
            outside_points: Vec::new(),
        }
    }

    /// Oriented so the normal points away from `interior`.
    fn outward(v0: usize, v1: usize, v2: usize, interior: DVec3, points: &[DVec3]) -> Self {
        let face = Self::new(v0, v1, v2, points);
        let center = (points[v0] + points[v1] + points[v2]) / 3.0;
        if face.normal.dot(interior - center) > 0.0 {
            Self::new(v0, v2, v1, points)
        } else {
            face
        }
    }

    fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.distance
    }

    fn is_outside(&self, point: DVec3) -> bool {
        self.signed_distance(point) > PLANE_EPSILON
    }

    fn farthest_point(&self, points: &[DVec3]) -> Option<usize> {
        self.outside_points
            .iter()
            .copied()
            .max_by(|&a, &b| {
                self.signed_distance(points[a])
                    .total_cmp(&self.signed_distance(points[b]))
            })
    }
}

fn dedup_points(points: &[DVec3]) -> Vec<DVec3> {
    let mut unique: Vec<DVec3> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|u| (*u - *p).length() < PLANE_EPSILON) {
            unique.push(*p);
        }
    }
    unique
}

fn initial_simplex(points: &[DVec3]) -> Result<Vec<HullFace>, KernelError> {
    // Extreme points on each axis seed the search
    let mut extremes = [0usize; 6];
    for (i, p) in points.iter().enumerate() {
        if p.x < points[extremes[0]].x {
            extremes[0] = i;
        }
        if p.x > points[extremes[1]].x {
            extremes[1] = i;
        }
        if p.y < points[extremes[2]].y {
            extremes[2] = i;
        }
        if p.y > points[extremes[3]].y {
            extremes[3] = i;
        }
        if p.z < points[extremes[4]].z {
            extremes[4] = i;
        }
        if p.z > points[extremes[5]].z {
            extremes[5] = i;
        }
    }

    let (p0, p1) = farthest_pair(&extremes, points);
    let p2 = farthest_from_line(p0, p1, points)?;
    let p3 = farthest_from_plane(p0, p1, p2, points)?;

    let centroid = (points[p0] + points[p1] + points[p2] + points[p3]) / 4.0;
    let mut faces = vec![
        HullFace::outward(p0, p1, p2, centroid, points),
        HullFace::outward(p0, p2, p3, centroid, points),
        HullFace::outward(p0, p3, p1, centroid, points),
        HullFace::outward(p1, p3, p2, centroid, points),
    ];

    for idx in 0..points.len() {
        if idx == p0 || idx == p1 || idx == p2 || idx == p3 {
            continue;
        }
        assign_to_first_visible(idx, points[idx], &mut faces);
    }

    Ok(faces)
}

fn farthest_pair(indices: &[usize; 6], points: &[DVec3]) -> (usize, usize) {
    let mut best = (indices[0], indices[1]);
    let mut max_dist = 0.0;
    for (i, &a) in indices.iter().enumerate() {
        for &b in indices.iter().skip(i + 1) {
            let dist = (points[a] - points[b]).length_squared();
            if dist > max_dist {
                max_dist = dist;
                best = (a, b);
            }
        }
    }
    best
}

fn farthest_from_line(p0: usize, p1: usize, points: &[DVec3]) -> Result<usize, KernelError> {
    let dir = (points[p1] - points[p0]).normalize_or_zero();
    let mut best = None;
    let mut max_dist = PLANE_EPSILON;
    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 {
            continue;
        }
        let v = *p - points[p0];
        let dist = (v - v.dot(dir) * dir).length();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }
    best.ok_or_else(|| KernelError::degenerate("all hull points are collinear"))
}

fn farthest_from_plane(
    p0: usize,
    p1: usize,
    p2: usize,
    points: &[DVec3],
) -> Result<usize, KernelError> {
    let normal = (points[p1] - points[p0])
        .cross(points[p2] - points[p0])
        .normalize_or_zero();
    let mut best = None;
    let mut max_dist = PLANE_EPSILON;
    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 || i == p2 {
            continue;
        }
        let dist = normal.dot(*p - points[p0]).abs();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }
    best.ok_or_else(|| KernelError::degenerate("all hull points are coplanar"))
}

fn assign_to_first_visible(idx: usize, point: DVec3, faces: &mut [HullFace]) {
    for face in faces.iter_mut() {
        if face.is_outside(point) {
            face.outside_points.push(idx);
            return;
        }
    }
}

fn iterate(faces: &mut Vec<HullFace>, points: &[DVec3]) {
    let max_iterations = points.len() * 2;

    for _ in 0..max_iterations {
        let face_idx = match faces.iter().position(|f| !f.outside_points.is_empty()) {
            Some(idx) => idx,
            None => return,
        };
        let farthest = match faces[face_idx].farthest_point(points) {
            Some(p) => p,
            None => continue,
        };
        let eye = points[farthest];

        let visible: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_outside(eye))
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            continue;
        }

        let horizon = horizon_edges(faces, &visible);

        let mut orphaned: Vec<usize> = Vec::new();
        for &idx in &visible {
            orphaned.extend(&faces[idx].outside_points);
        }
        orphaned.retain(|&p| p != farthest);

        let mut doomed = visible.clone();
        doomed.sort_unstable_by(|a, b| b.cmp(a));
        for idx in doomed {
            faces.swap_remove(idx);
        }

        let interior = hull_centroid(faces, points);
        for (e0, e1) in horizon {
            faces.push(HullFace::outward(e0, e1, farthest, interior, points));
        }

        for idx in orphaned {
            assign_to_first_visible(idx, points[idx], faces);
        }
    }
}

/// Edges of visible faces that are not shared with another visible face.
fn horizon_edges(faces: &[HullFace], visible: &[usize]) -> Vec<(usize, usize)> {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    let edges_of = |idx: usize| {
        let v = faces[idx].vertices;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])]
    };

    for &idx in visible {
        for (a, b) in edges_of(idx) {
            let key = if a < b { (a, b) } else { (b, a) };
            *edge_count.entry(key).or_insert(0) += 1;
        }
    }

    let mut horizon = Vec::new();
    for &idx in visible {
        for (a, b) in edges_of(idx) {
            let key = if a < b { (a, b) } else { (b, a) };
            if edge_count[&key] == 1 {
                // Winding order of the dying face is preserved
                horizon.push((a, b));
            }
        }
    }
    horizon
}

fn hull_centroid(faces: &[HullFace], points: &[DVec3]) -> DVec3 {
    let mut sum = DVec3::ZERO;
    let mut count = 0usize;
    let mut seen: Vec<usize> = Vec::new();
    for face in faces {
        for &v in &face.vertices {
            if !seen.contains(&v) {
                seen.push(v);
                sum += points[v];
                count += 1;
            }
        }
    }
    if count > 0 {
        sum / count as f64
    } else {
        DVec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cube;
    use glam::DMat4;

    #[test]
    fn hull_of_tetrahedron_points() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.5, 1.0, 0.0),
            DVec3::new(0.5, 0.5, 1.0),
        ];
        let triangles = convex_hull(&points).unwrap();
        assert_eq!(triangles.len(), 4);
    }

    #[test]
    fn hull_of_cube_corners() {
        let solid = cube(1.0, false).unwrap();
        let hulled = hull(&[&Geometry::Solid(solid)]).unwrap();
        // 6 faces * 2 triangles
        assert_eq!(hulled.polygons().len(), 12);
    }

    #[test]
    fn interior_points_do_not_affect_the_hull() {
        let mut points: Vec<DVec3> = cube(1.0, false)
            .unwrap()
            .baked_polygons()
            .iter()
            .flat_map(|p| p.vertices().to_vec())
            .collect();
        points.push(DVec3::splat(0.5));
        let triangles = convex_hull(&points).unwrap();
        assert_eq!(triangles.len(), 12);
    }

    #[test]
    fn hull_spans_both_operands() {
        let a = cube(1.0, false).unwrap();
        let b = cube(1.0, false)
            .unwrap()
            .transformed(DMat4::from_translation(DVec3::new(5.0, 0.0, 0.0)));
        let spanned = hull(&[&Geometry::Solid(a), &Geometry::Solid(b)]).unwrap();
        let (min, max) = spanned.bounding_box().unwrap();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn hull_chain_requires_two_operands() {
        let solid = cube(1.0, false).unwrap();
        assert!(hull_chain(&[&Geometry::Solid(solid)]).is_err());
    }

    #[test]
    fn coplanar_points_are_rejected() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        ];
        assert!(convex_hull(&points).is_err());
    }
}
