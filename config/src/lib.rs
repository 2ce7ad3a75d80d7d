//! # Config Crate
//!
//! Centralized configuration constants for the CSG worker pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CACHE_FLUSH_THRESHOLD, FALLBACK_EXTRUDE_HEIGHT};
//!
//! // Cache lifecycle: a run boundary flushes once this many entries exist.
//! assert_eq!(CACHE_FLUSH_THRESHOLD, 10_000);
//!
//! // Degenerate 2D inputs are extruded by a negligible height before
//! // tessellation.
//! assert!(FALLBACK_EXTRUDE_HEIGHT < 0.01);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Kernel Agnostic**: No values tied to a specific geometry backend
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
