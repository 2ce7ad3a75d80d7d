//! Centralized configuration values shared across the CSG worker pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Maximum number of memoized entries the per-channel cache may hold before a
/// run boundary triggers an unconditional full flush.
///
/// The cache never evicts individual entries; once this threshold is crossed
/// the next `startRun` drops everything and lets the pipeline recompute.
///
/// # Examples
/// ```
/// use config::constants::CACHE_FLUSH_THRESHOLD;
/// assert_eq!(CACHE_FLUSH_THRESHOLD, 10_000);
/// ```
pub const CACHE_FLUSH_THRESHOLD: usize = 10_000;

/// Extrusion height applied to bare 2D profiles and point sets that reach the
/// mesh converter without any polygon form.
///
/// The value is negligible on purpose: the fallback manufactures the thinnest
/// solid that still tessellates, it does not try to guess a meaningful depth.
///
/// # Examples
/// ```
/// use config::constants::FALLBACK_EXTRUDE_HEIGHT;
/// assert!(FALLBACK_EXTRUDE_HEIGHT > 0.0);
/// assert!(FALLBACK_EXTRUDE_HEIGHT <= 0.001);
/// ```
pub const FALLBACK_EXTRUDE_HEIGHT: f64 = 0.001;

/// Default tessellation segment count for primitives that require angular
/// resolution such as cylinders, spheres, or circles.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Numerical tolerance used when classifying points against BSP planes.
///
/// # Examples
/// ```
/// use config::constants::PLANE_EPSILON;
/// assert!(PLANE_EPSILON < 1.0e-3);
/// ```
pub const PLANE_EPSILON: f64 = 1.0e-5;

/// Immutable snapshot of worker configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::WorkerConfig;
/// let config = WorkerConfig::default();
/// assert!(config.cache_flush_threshold > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerConfig {
    /// Entry count above which a run boundary performs a full cache flush.
    pub cache_flush_threshold: usize,
    /// Default segment count for primitives that require polygonal subdivision.
    pub default_segments: u32,
}

impl WorkerConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// threshold and default segments.
    ///
    /// # Examples
    /// ```
    /// use config::constants::WorkerConfig;
    /// let cfg = WorkerConfig::new(100, 24).expect("valid config");
    /// assert_eq!(cfg.cache_flush_threshold, 100);
    /// ```
    pub fn new(cache_flush_threshold: usize, default_segments: u32) -> Result<Self, ConfigError> {
        if cache_flush_threshold == 0 {
            return Err(ConfigError::InvalidThreshold(cache_flush_threshold));
        }
        if default_segments < 3 {
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        Ok(Self {
            cache_flush_threshold,
            default_segments,
        })
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            cache_flush_threshold: CACHE_FLUSH_THRESHOLD,
            default_segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the flush threshold is zero.
    InvalidThreshold(usize),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold(value) => {
                write!(f, "cache_flush_threshold must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "default_segments must be >= 3: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
