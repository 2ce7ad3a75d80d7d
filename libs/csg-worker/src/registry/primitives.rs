//! Primitive construction handlers.

use super::args::Args;
use super::PrimitiveOp;
use crate::error::WorkerError;
use crate::value::{GeomHandle, Value};
use csg_kernel::primitives;
use csg_kernel::Geometry;

pub(super) fn call(
    op: PrimitiveOp,
    args: &Args<'_>,
    default_segments: u32,
) -> Result<Value, WorkerError> {
    let geometry = match op {
        PrimitiveOp::Cube => {
            let size = args.number("size")?;
            let center = args.bool_or("center", false)?;
            Geometry::Solid(args.kernel(primitives::cube(size, center))?)
        }
        PrimitiveOp::Cuboid => {
            let size = args.vec3("size")?;
            let center = args.bool_or("center", false)?;
            Geometry::Solid(args.kernel(primitives::cuboid(size, center))?)
        }
        PrimitiveOp::Sphere => {
            let radius = args.number("radius")?;
            let segments = args.u32_or("segments", default_segments)?;
            Geometry::Solid(args.kernel(primitives::sphere(radius, segments))?)
        }
        PrimitiveOp::Cylinder => {
            let radius = args.number("radius")?;
            let height = args.number("height")?;
            let segments = args.u32_or("segments", default_segments)?;
            let center = args.bool_or("center", false)?;
            Geometry::Solid(args.kernel(primitives::cylinder(radius, height, segments, center))?)
        }
        PrimitiveOp::Rectangle => {
            let size = args.vec2("size")?;
            let center = args.bool_or("center", false)?;
            Geometry::Profile(args.kernel(primitives::rectangle(size, center))?)
        }
        PrimitiveOp::Circle => {
            let radius = args.number("radius")?;
            let segments = args.u32_or("segments", default_segments)?;
            Geometry::Profile(args.kernel(primitives::circle(radius, segments))?)
        }
    };
    Ok(Value::Geometry(GeomHandle::new(geometry)))
}
