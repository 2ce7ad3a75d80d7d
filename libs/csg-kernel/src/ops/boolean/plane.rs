//! # Splitting Planes
//!
//! Plane representation with polygon classification and splitting, the
//! building block of the BSP clipper.

use crate::geometry::Polygon;
use config::constants::PLANE_EPSILON;
use glam::DVec3;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// A plane in 3D space defined by a unit normal and distance from origin.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Derives the plane of a polygon from its first three vertices.
    ///
    /// Returns `None` for degenerate polygons (too few vertices or collinear
    /// leading vertices).
    pub fn from_polygon(polygon: &Polygon) -> Option<Self> {
        let v = polygon.vertices();
        if v.len() < 3 {
            return None;
        }
        let normal = (v[1] - v[0]).cross(v[2] - v[0]);
        if normal.length() < PLANE_EPSILON {
            return None;
        }
        let normal = normal.normalize();
        Some(Self {
            normal,
            w: normal.dot(v[0]),
        })
    }

    /// Returns the plane with its orientation reversed.
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Returns the unit normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Splits `polygon` by this plane into the four output lists.
    ///
    /// Coplanar polygons go to `coplanar_front` or `coplanar_back` depending
    /// on their orientation relative to this plane; spanning polygons are cut
    /// along the intersection and both halves keep the original winding.
    /// Fragments that degenerate below 3 vertices are dropped.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let vertices = polygon.vertices();

        let mut polygon_type = COPLANAR;
        let mut types = Vec::with_capacity(vertices.len());
        for vertex in vertices {
            let t = self.normal.dot(*vertex) - self.w;
            let vertex_type = if t < -PLANE_EPSILON {
                BACK
            } else if t > PLANE_EPSILON {
                FRONT
            } else {
                COPLANAR
            };
            polygon_type |= vertex_type;
            types.push(vertex_type);
        }

        match polygon_type {
            COPLANAR => {
                // Orientation decides which side the coplanar polygon belongs to
                match Plane::from_polygon(polygon) {
                    Some(plane) if plane.normal.dot(self.normal) > 0.0 => {
                        coplanar_front.push(polygon.clone());
                    }
                    Some(_) => coplanar_back.push(polygon.clone()),
                    None => {} // degenerate, drop
                }
            }
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let mut f: Vec<DVec3> = Vec::with_capacity(vertices.len() + 1);
                let mut b: Vec<DVec3> = Vec::with_capacity(vertices.len() + 1);
                for i in 0..vertices.len() {
                    let j = (i + 1) % vertices.len();
                    let ti = types[i];
                    let tj = types[j];
                    let vi = vertices[i];
                    let vj = vertices[j];
                    if ti != BACK {
                        f.push(vi);
                    }
                    if ti != FRONT {
                        b.push(vi);
                    }
                    if (ti | tj) == SPANNING {
                        let t = (self.w - self.normal.dot(vi)) / self.normal.dot(vj - vi);
                        let v = vi.lerp(vj, t);
                        f.push(v);
                        b.push(v);
                    }
                }
                if f.len() >= 3 {
                    front.push(Polygon::new(f));
                }
                if b.len() >= 3 {
                    back.push(Polygon::new(b));
                }
            }
        }
    }
}
