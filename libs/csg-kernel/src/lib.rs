//! # CSG Kernel
//!
//! The embedded solid-modeling kernel for the CSG worker pipeline.
//! Produces and combines polygonal geometry; results are handed back to the
//! worker as opaque values and only tessellated at the rendering boundary.
//!
//! ## Architecture
//!
//! ```text
//! csg-worker (registry) → csg-kernel (Geometry) → csg-mesh (MeshBuffer)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Boolean Operations**: BSP trees (csg.js algorithm) for subtract and
//!   intersect; union composes at the triangle-soup level
//! - **Hull**: QuickHull
//! - **Extrusion**: prism extrusion with optional twist
//! - **Primitives**: direct polygon generation
//!
//! ## Usage
//!
//! ```rust
//! use csg_kernel::primitives::cube;
//!
//! let solid = cube(10.0, false).unwrap();
//! assert_eq!(solid.polygons().len(), 6);
//! ```

pub mod error;
pub mod geometry;
pub mod ops;
pub mod primitives;
pub mod transform;

pub use error::KernelError;
pub use geometry::{Geometry, PointSet, Polygon, Profile, Solid};
