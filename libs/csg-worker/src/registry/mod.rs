//! # Operation Registry
//!
//! Static mapping from operation names to typed handlers. Names resolve once,
//! at the dispatcher boundary, into the [`OperationId`] enum; from there every
//! call path is statically typed and match-exhaustive, so adding an operation
//! without a handler fails to compile instead of falling through to a runtime
//! not-found.
//!
//! Handlers are thin adapters: destructure and validate the request fields,
//! convert user-facing degrees to the kernel's radians, spread list fields
//! into the kernel's variadic slices, call the kernel, and hand back its
//! native result as an opaque handle. Empty or degenerate argument lists are
//! the kernel's own responsibility to accept or reject.

mod args;
mod booleans;
mod extrusions;
mod hulls;
mod primitives;
mod transforms;

pub use args::Args;

use crate::error::WorkerError;
use crate::value::{Inputs, Value};
use config::constants::DEFAULT_SEGMENTS;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Every operation name the worker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationId {
    /// Reserved names that bypass both registry and cache.
    Lifecycle(LifecycleOp),
    /// Cacheable compute operations.
    Call(CallOp),
}

/// Reserved lifecycle commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOp {
    /// Run-boundary marker.
    StartRun,
    /// Explicit cache flush.
    FlushCache,
}

/// Cacheable compute operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOp {
    /// Convert one handle to a triangle buffer.
    Render,
    /// Convert a list of handles, order-preserving.
    RenderBatch,
    /// A `service.method` registry call.
    Registry(RegistryOp),
}

/// The registry's `service.method` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryOp {
    Primitive(PrimitiveOp),
    Boolean(BooleanOp),
    Transform(TransformOp),
    Extrusion(ExtrusionOp),
    Hull(HullOp),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveOp {
    Cube,
    Cuboid,
    Sphere,
    Cylinder,
    Rectangle,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOp {
    Translate,
    Rotate,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrusionOp {
    ExtrudeLinear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullOp {
    Hull,
    HullChain,
}

impl FromStr for OperationId {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, ()> {
        match name {
            "startRun" => return Ok(Self::Lifecycle(LifecycleOp::StartRun)),
            "flushCache" => return Ok(Self::Lifecycle(LifecycleOp::FlushCache)),
            "render" => return Ok(Self::Call(CallOp::Render)),
            "renderBatch" => return Ok(Self::Call(CallOp::RenderBatch)),
            _ => {}
        }
        let (service, method) = name.split_once('.').ok_or(())?;
        let op = match (service, method) {
            ("primitives", "cube") => RegistryOp::Primitive(PrimitiveOp::Cube),
            ("primitives", "cuboid") => RegistryOp::Primitive(PrimitiveOp::Cuboid),
            ("primitives", "sphere") => RegistryOp::Primitive(PrimitiveOp::Sphere),
            ("primitives", "cylinder") => RegistryOp::Primitive(PrimitiveOp::Cylinder),
            ("primitives", "rectangle") => RegistryOp::Primitive(PrimitiveOp::Rectangle),
            ("primitives", "circle") => RegistryOp::Primitive(PrimitiveOp::Circle),
            ("booleans", "union") => RegistryOp::Boolean(BooleanOp::Union),
            ("booleans", "subtract") => RegistryOp::Boolean(BooleanOp::Subtract),
            ("booleans", "intersect") => RegistryOp::Boolean(BooleanOp::Intersect),
            ("transforms", "translate") => RegistryOp::Transform(TransformOp::Translate),
            ("transforms", "rotate") => RegistryOp::Transform(TransformOp::Rotate),
            ("transforms", "scale") => RegistryOp::Transform(TransformOp::Scale),
            ("extrusions", "extrudeLinear") => RegistryOp::Extrusion(ExtrusionOp::ExtrudeLinear),
            ("hulls", "hull") => RegistryOp::Hull(HullOp::Hull),
            ("hulls", "hullChain") => RegistryOp::Hull(HullOp::HullChain),
            _ => return Err(()),
        };
        Ok(Self::Call(CallOp::Registry(op)))
    }
}

/// Dispatch target for `service.method` calls.
///
/// Carries an invocation counter so callers can observe whether a request
/// actually reached the kernel or was served from the cache, and the
/// configured segment count primitives fall back to when a request omits
/// `segments`.
pub struct Registry {
    invocations: AtomicU64,
    default_segments: u32,
}

impl Registry {
    /// Creates a registry with the default segment count.
    pub fn new() -> Self {
        Self::with_default_segments(DEFAULT_SEGMENTS)
    }

    /// Creates a registry with a configured fallback segment count.
    pub fn with_default_segments(default_segments: u32) -> Self {
        Self {
            invocations: AtomicU64::new(0),
            default_segments,
        }
    }

    /// Returns how many calls have reached a handler.
    pub fn invocations(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }

    /// Invokes the handler for `op`.
    pub fn call(
        &self,
        op: RegistryOp,
        operation: &str,
        inputs: &Inputs,
    ) -> Result<Value, WorkerError> {
        self.invocations.fetch_add(1, Ordering::Relaxed);
        let args = Args::new(operation, inputs);
        match op {
            RegistryOp::Primitive(op) => primitives::call(op, &args, self.default_segments),
            RegistryOp::Boolean(op) => booleans::call(op, &args),
            RegistryOp::Transform(op) => transforms::call(op, &args),
            RegistryOp::Extrusion(op) => extrusions::call(op, &args),
            RegistryOp::Hull(op) => hulls::call(op, &args),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_resolve_to_lifecycle_ops() {
        assert_eq!(
            "startRun".parse(),
            Ok(OperationId::Lifecycle(LifecycleOp::StartRun))
        );
        assert_eq!(
            "flushCache".parse(),
            Ok(OperationId::Lifecycle(LifecycleOp::FlushCache))
        );
    }

    #[test]
    fn dotted_names_resolve_to_registry_ops() {
        assert_eq!(
            "booleans.union".parse(),
            Ok(OperationId::Call(CallOp::Registry(RegistryOp::Boolean(
                BooleanOp::Union
            ))))
        );
        assert_eq!(
            "hulls.hullChain".parse(),
            Ok(OperationId::Call(CallOp::Registry(RegistryOp::Hull(
                HullOp::HullChain
            ))))
        );
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!("no.such".parse::<OperationId>(), Err(()));
        assert_eq!("bare".parse::<OperationId>(), Err(()));
        assert_eq!("too.many.dots".parse::<OperationId>(), Err(()));
    }
}
