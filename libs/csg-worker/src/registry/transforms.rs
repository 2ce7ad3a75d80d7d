//! Affine transform handlers.

use super::args::Args;
use super::TransformOp;
use crate::error::WorkerError;
use crate::value::{GeomHandle, Value};
use csg_kernel::transform;

pub(super) fn call(op: TransformOp, args: &Args<'_>) -> Result<Value, WorkerError> {
    let mesh = args.geometry("mesh")?;
    let geometry = match op {
        TransformOp::Translate => transform::translate(mesh.geometry(), args.vec3("offset")?),
        TransformOp::Rotate => transform::rotate(mesh.geometry(), args.degrees_vec3("angles")?),
        TransformOp::Scale => transform::scale(mesh.geometry(), args.vec3("factors")?),
    };
    Ok(Value::Geometry(GeomHandle::new(geometry)))
}
