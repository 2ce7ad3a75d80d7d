//! # Kernel Operations
//!
//! Boolean composition, extrusion, and convex hull.

pub mod boolean;
pub mod extrude;
pub mod hull;
