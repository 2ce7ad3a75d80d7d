//! # CSG Mesh
//!
//! Converts kernel geometry into flat triangle buffers for an external
//! rendering layer.
//!
//! ## Architecture
//!
//! ```text
//! csg-kernel (Geometry) → csg-mesh (MeshBuffer) → renderer
//! ```
//!
//! Conversion is infallible by design: inputs that cannot be tessellated
//! degrade to an empty buffer ("nothing to draw"), never an error. Degenerate
//! 2D profiles and point sets are rescued by a thin linear extrusion before
//! tessellation.
//!
//! ## Usage
//!
//! ```rust
//! use csg_kernel::primitives::cube;
//! use csg_kernel::Geometry;
//! use csg_mesh::convert;
//!
//! let solid = cube(10.0, false).unwrap();
//! let buffer = convert(&Geometry::Solid(solid));
//! assert_eq!(buffer.triangle_count(), 12);
//! ```

pub mod buffer;
pub mod convert;

pub use buffer::MeshBuffer;
pub use convert::{convert, convert_batch};
