//! Convex hull handlers.
//!
//! Hulls accept any geometry kind; the kernel gathers world-space vertices
//! itself, so the `meshes` list is spread through unchanged.

use super::args::Args;
use super::HullOp;
use crate::error::WorkerError;
use crate::value::{GeomHandle, Value};
use csg_kernel::ops::hull;
use csg_kernel::Geometry;

pub(super) fn call(op: HullOp, args: &Args<'_>) -> Result<Value, WorkerError> {
    let handles = args.geometry_list("meshes")?;
    let operands: Vec<&Geometry> = handles.iter().map(|h| h.geometry()).collect();
    let solid = args.kernel(match op {
        HullOp::Hull => hull::hull(&operands),
        HullOp::HullChain => hull::hull_chain(&operands),
    })?;
    Ok(Value::Geometry(GeomHandle::new(Geometry::Solid(solid))))
}
