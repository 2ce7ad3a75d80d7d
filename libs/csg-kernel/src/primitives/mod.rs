//! # Primitives
//!
//! Polygon generation for basic 3D solids and 2D profiles.

mod cuboid;
mod cylinder;
mod profile2d;
mod sphere;

pub use cuboid::{cube, cuboid};
pub use cylinder::cylinder;
pub use profile2d::{circle, rectangle};
pub use sphere::sphere;
