//! Boolean operation handlers.
//!
//! The `meshes` list is spread into the kernel's variadic operand slice.
//! Arity rules (at least one operand; a single-operand subtract or intersect
//! is the identity) belong to the kernel and surface here only as kernel
//! errors.

use super::args::Args;
use super::BooleanOp;
use crate::error::WorkerError;
use crate::value::{GeomHandle, Value};
use csg_kernel::ops::boolean;
use csg_kernel::{Geometry, KernelError, Solid};

pub(super) fn call(op: BooleanOp, args: &Args<'_>) -> Result<Value, WorkerError> {
    let handles = args.geometry_list("meshes")?;
    let solids = args.kernel(as_solids(&handles, operand_name(op)))?;
    let solid = args.kernel(match op {
        BooleanOp::Union => boolean::union(&solids),
        BooleanOp::Subtract => boolean::subtract(&solids),
        BooleanOp::Intersect => boolean::intersect(&solids),
    })?;
    Ok(Value::Geometry(GeomHandle::new(Geometry::Solid(solid))))
}

fn operand_name(op: BooleanOp) -> &'static str {
    match op {
        BooleanOp::Union => "union",
        BooleanOp::Subtract => "subtract",
        BooleanOp::Intersect => "intersect",
    }
}

fn as_solids<'a>(
    handles: &[&'a GeomHandle],
    operation: &'static str,
) -> Result<Vec<&'a Solid>, KernelError> {
    handles
        .iter()
        .map(|handle| {
            handle
                .geometry()
                .as_solid()
                .ok_or(KernelError::wrong_kind(operation, "solid"))
        })
        .collect()
}
