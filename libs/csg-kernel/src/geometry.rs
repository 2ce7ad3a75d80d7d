//! # Geometry Model
//!
//! Core geometry representation shared by every kernel operation.
//!
//! All coordinates use f64 internally. Export to f32 only happens at the
//! rendering boundary (`csg-mesh`). Solids carry a lazily composed affine
//! transform that is baked into vertices only when an operation genuinely
//! needs world-space coordinates (booleans, hull).

use glam::{DMat4, DVec2, DVec3};

/// A planar polygon with at least 3 vertices in counter-clockwise order when
/// viewed from the front face.
///
/// Degenerate polygons (fewer than 3 vertices, collinear vertices) are
/// representable; downstream consumers decide whether to skip or reject them.
///
/// # Example
///
/// ```rust
/// use csg_kernel::Polygon;
/// use glam::DVec3;
///
/// let triangle = Polygon::new(vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// ]);
/// assert_eq!(triangle.vertices().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<DVec3>,
}

impl Polygon {
    /// Creates a polygon from vertices in winding order.
    pub fn new(vertices: Vec<DVec3>) -> Self {
        Self { vertices }
    }

    /// Returns the vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Reverses the winding order, inverting the front face.
    pub fn flipped(&self) -> Polygon {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Polygon { vertices }
    }

    /// Returns the polygon with every vertex transformed by `matrix`.
    pub fn transformed(&self, matrix: DMat4) -> Polygon {
        Polygon {
            vertices: self
                .vertices
                .iter()
                .map(|v| matrix.transform_point3(*v))
                .collect(),
        }
    }
}

/// A solid: a closed polygon boundary plus a lazily composed transform.
///
/// Transform operations only update the matrix; vertices are baked on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    polygons: Vec<Polygon>,
    transform: DMat4,
}

impl Solid {
    /// Creates a solid from local-space polygons with an identity transform.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            transform: DMat4::IDENTITY,
        }
    }

    /// Returns the local-space polygons.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns the carried affine transform.
    #[inline]
    pub fn transform(&self) -> DMat4 {
        self.transform
    }

    /// Returns true if the solid has no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Composes `matrix` on top of the carried transform.
    pub fn transformed(&self, matrix: DMat4) -> Solid {
        Solid {
            polygons: self.polygons.clone(),
            transform: matrix * self.transform,
        }
    }

    /// Bakes the carried transform into world-space polygons.
    pub fn baked_polygons(&self) -> Vec<Polygon> {
        if self.transform == DMat4::IDENTITY {
            return self.polygons.clone();
        }
        self.polygons
            .iter()
            .map(|p| p.transformed(self.transform))
            .collect()
    }

    /// Axis-aligned bounding box of the baked polygons, if any vertices exist.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        let mut seen = false;
        for polygon in self.baked_polygons() {
            for vertex in polygon.vertices() {
                min = min.min(*vertex);
                max = max.max(*vertex);
                seen = true;
            }
        }
        seen.then_some((min, max))
    }
}

/// A 2D outline in the XY plane, counter-clockwise, plus a carried transform.
///
/// Profiles are the input to extrusion and the subject of the mesh
/// converter's thin-extrusion fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<DVec2>,
    transform: DMat4,
}

impl Profile {
    /// Creates a profile from outline points in counter-clockwise order.
    pub fn new(points: Vec<DVec2>) -> Self {
        Self {
            points,
            transform: DMat4::IDENTITY,
        }
    }

    /// Returns the outline points.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the carried affine transform.
    #[inline]
    pub fn transform(&self) -> DMat4 {
        self.transform
    }

    /// Composes `matrix` on top of the carried transform.
    pub fn transformed(&self, matrix: DMat4) -> Profile {
        Profile {
            points: self.points.clone(),
            transform: matrix * self.transform,
        }
    }
}

/// A bare vertex set with no connectivity.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<DVec3>,
}

impl PointSet {
    /// Creates a point set.
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// Returns the points.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the points with `matrix` applied.
    pub fn transformed(&self, matrix: DMat4) -> PointSet {
        PointSet {
            points: self
                .points
                .iter()
                .map(|p| matrix.transform_point3(*p))
                .collect(),
        }
    }
}

/// Every shape a kernel operation can produce.
///
/// The variants mirror what the mesh converter knows how to handle: solids
/// produce polygons directly, bare polygon lists are used as-is, profiles and
/// point sets go through the extrusion fallback, and `Empty` renders nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A polygon-bounded solid.
    Solid(Solid),
    /// A bare list of world-space polygons.
    Polygons(Vec<Polygon>),
    /// A 2D outline.
    Profile(Profile),
    /// A bare vertex set.
    Points(PointSet),
    /// Nothing to draw.
    Empty,
}

impl Geometry {
    /// Returns the solid form, if this geometry is one.
    pub fn as_solid(&self) -> Option<&Solid> {
        match self {
            Geometry::Solid(solid) => Some(solid),
            _ => None,
        }
    }

    /// Returns the profile form, if this geometry is one.
    pub fn as_profile(&self) -> Option<&Profile> {
        match self {
            Geometry::Profile(profile) => Some(profile),
            _ => None,
        }
    }

    /// World-space vertices of this geometry, used by hull operations.
    pub fn world_vertices(&self) -> Vec<DVec3> {
        match self {
            Geometry::Solid(solid) => solid
                .baked_polygons()
                .iter()
                .flat_map(|p| p.vertices().iter().copied())
                .collect(),
            Geometry::Polygons(polygons) => polygons
                .iter()
                .flat_map(|p| p.vertices().iter().copied())
                .collect(),
            Geometry::Profile(profile) => profile
                .points()
                .iter()
                .map(|p| profile.transform().transform_point3(p.extend(0.0)))
                .collect(),
            Geometry::Points(points) => points.points().to_vec(),
            Geometry::Empty => Vec::new(),
        }
    }
}
