//! Extrusion handlers.

use super::args::Args;
use super::ExtrusionOp;
use crate::error::WorkerError;
use crate::value::{GeomHandle, Value};
use csg_kernel::ops::extrude::{extrude_linear, LinearExtrudeOptions};
use csg_kernel::{Geometry, KernelError};

pub(super) fn call(op: ExtrusionOp, args: &Args<'_>) -> Result<Value, WorkerError> {
    match op {
        ExtrusionOp::ExtrudeLinear => {
            let handle = args.geometry("profile")?;
            let profile = args.kernel(
                handle
                    .geometry()
                    .as_profile()
                    .ok_or(KernelError::wrong_kind("extrudeLinear", "2D profile")),
            )?;
            let options = LinearExtrudeOptions {
                height: args.number("height")?,
                twist: args.degrees_or("twist", 0.0)?,
                slices: args.u32_or("slices", 1)?,
            };
            let solid = args.kernel(extrude_linear(profile, &options))?;
            Ok(Value::Geometry(GeomHandle::new(Geometry::Solid(solid))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Inputs;
    use approx::assert_relative_eq;
    use csg_kernel::primitives::rectangle;
    use glam::DVec2;

    fn profile_handle() -> Value {
        Value::Geometry(GeomHandle::new(Geometry::Profile(
            rectangle(DVec2::splat(2.0), true).unwrap(),
        )))
    }

    #[test]
    fn extrude_produces_a_solid_of_the_given_height() {
        let mut inputs = Inputs::new();
        inputs.insert("profile".into(), profile_handle());
        inputs.insert("height".into(), Value::Number(5.0));
        let args = Args::new("extrusions.extrudeLinear", &inputs);
        let Value::Geometry(handle) = call(ExtrusionOp::ExtrudeLinear, &args).unwrap() else {
            panic!("expected a geometry handle");
        };
        let (min, max) = handle.geometry().as_solid().unwrap().bounding_box().unwrap();
        assert_relative_eq!(max.z - min.z, 5.0);
    }

    #[test]
    fn non_profile_input_is_rejected() {
        let mut inputs = Inputs::new();
        inputs.insert(
            "profile".into(),
            Value::Geometry(GeomHandle::new(Geometry::Empty)),
        );
        inputs.insert("height".into(), Value::Number(5.0));
        let args = Args::new("extrusions.extrudeLinear", &inputs);
        let error = call(ExtrusionOp::ExtrudeLinear, &args)
            .unwrap_err()
            .to_string();
        assert!(error.contains("extrusions.extrudeLinear"));
    }

    #[test]
    fn twist_is_optional() {
        let mut inputs = Inputs::new();
        inputs.insert("profile".into(), profile_handle());
        inputs.insert("height".into(), Value::Number(1.0));
        inputs.insert("twist".into(), Value::Number(90.0));
        inputs.insert("slices".into(), Value::Number(4.0));
        let args = Args::new("extrusions.extrudeLinear", &inputs);
        assert!(call(ExtrusionOp::ExtrudeLinear, &args).is_ok());
    }
}
