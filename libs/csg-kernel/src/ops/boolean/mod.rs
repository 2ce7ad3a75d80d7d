//! # Boolean Operations
//!
//! Variadic union, subtract, and intersect over solids.
//!
//! `subtract` and `intersect` clip through BSP trees (csg.js algorithm).
//! `union` composes at the triangle-soup level: operands are baked into
//! world space and their boundaries concatenated. Interior faces survive but
//! are invisible to a depth-tested renderer, operand winding is preserved
//! exactly, and the result never exceeds the summed operand facet count.
//!
//! Operand validation lives here, not in the worker registry: empty operand
//! lists are rejected by the kernel itself.

mod bsp;
mod plane;

pub use bsp::BspNode;
pub use plane::Plane;

use crate::error::KernelError;
use crate::geometry::{Polygon, Solid};

/// Unions N solids.
///
/// # Example
///
/// ```rust
/// use csg_kernel::ops::boolean::union;
/// use csg_kernel::primitives::cube;
///
/// let a = cube(2.0, false).unwrap();
/// let b = cube(2.0, true).unwrap();
/// let merged = union(&[&a, &b]).unwrap();
/// assert_eq!(merged.polygons().len(), 12);
/// ```
pub fn union(operands: &[&Solid]) -> Result<Solid, KernelError> {
    require_operands("union", operands)?;
    let mut polygons = Vec::new();
    for solid in operands {
        polygons.extend(solid.baked_polygons());
    }
    Ok(Solid::from_polygons(polygons))
}

/// Subtracts the second and later solids from the first.
pub fn subtract(operands: &[&Solid]) -> Result<Solid, KernelError> {
    require_operands("subtract", operands)?;
    let mut result = operands[0].baked_polygons();
    for other in &operands[1..] {
        result = subtract_pair(result, other.baked_polygons());
    }
    Ok(Solid::from_polygons(result))
}

/// Intersects N solids.
pub fn intersect(operands: &[&Solid]) -> Result<Solid, KernelError> {
    require_operands("intersect", operands)?;
    let mut result = operands[0].baked_polygons();
    for other in &operands[1..] {
        result = intersect_pair(result, other.baked_polygons());
    }
    Ok(Solid::from_polygons(result))
}

fn require_operands(operation: &'static str, operands: &[&Solid]) -> Result<(), KernelError> {
    if operands.is_empty() {
        return Err(KernelError::invalid_argument(format!(
            "{operation} requires at least one operand"
        )));
    }
    Ok(())
}

fn subtract_pair(a_polygons: Vec<Polygon>, b_polygons: Vec<Polygon>) -> Vec<Polygon> {
    let mut a = BspNode::new(a_polygons);
    let mut b = BspNode::new(b_polygons);
    a.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());
    a.invert();
    a.all_polygons()
}

fn intersect_pair(a_polygons: Vec<Polygon>, b_polygons: Vec<Polygon>) -> Vec<Polygon> {
    let mut a = BspNode::new(a_polygons);
    let mut b = BspNode::new(b_polygons);
    a.invert();
    b.clip_to(&a);
    b.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    a.build(b.all_polygons());
    a.invert();
    a.all_polygons()
}
