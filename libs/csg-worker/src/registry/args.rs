//! # Request Argument Extraction
//!
//! Typed accessors over one call's inputs. Every failure carries the
//! operation name, the offending field, and a rendering of all inputs.

use crate::error::WorkerError;
use crate::value::{GeomHandle, Inputs, Value};
use csg_kernel::KernelError;
use glam::{DVec2, DVec3};

/// One operation call's name and inputs, borrowed for the duration of the
/// handler.
pub struct Args<'a> {
    operation: &'a str,
    inputs: &'a Inputs,
}

impl<'a> Args<'a> {
    pub fn new(operation: &'a str, inputs: &'a Inputs) -> Self {
        Self { operation, inputs }
    }

    /// Builds a bad-input error for `field`.
    pub fn bad(&self, field: &str, reason: impl Into<String>) -> WorkerError {
        WorkerError::bad_input(self.operation, field, reason, self.inputs)
    }

    /// Maps a kernel failure into a worker error with this call's context.
    pub fn kernel<T>(&self, result: Result<T, KernelError>) -> Result<T, WorkerError> {
        result.map_err(|source| WorkerError::kernel(self.operation, source, self.inputs))
    }

    fn get(&self, field: &str) -> Result<&'a Value, WorkerError> {
        self.inputs
            .get(field)
            .ok_or_else(|| self.bad(field, "missing"))
    }

    /// A required finite number.
    pub fn number(&self, field: &str) -> Result<f64, WorkerError> {
        match self.get(field)? {
            Value::Number(n) if n.is_finite() => Ok(*n),
            Value::Number(_) => Err(self.bad(field, "must be finite")),
            _ => Err(self.bad(field, "expected a number")),
        }
    }

    /// An optional boolean.
    pub fn bool_or(&self, field: &str, default: bool) -> Result<bool, WorkerError> {
        match self.inputs.get(field) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.bad(field, "expected a boolean")),
        }
    }

    /// An optional non-negative integer.
    pub fn u32_or(&self, field: &str, default: u32) -> Result<u32, WorkerError> {
        match self.inputs.get(field) {
            None => Ok(default),
            Some(Value::Number(n)) if n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX) => {
                Ok(*n as u32)
            }
            Some(Value::Number(_)) => Err(self.bad(field, "expected a non-negative integer")),
            Some(_) => Err(self.bad(field, "expected a number")),
        }
    }

    /// A required `[x, y]` number pair.
    pub fn vec2(&self, field: &str) -> Result<DVec2, WorkerError> {
        let components = self.components(field, 2)?;
        Ok(DVec2::new(components[0], components[1]))
    }

    /// A required `[x, y, z]` number triple.
    pub fn vec3(&self, field: &str) -> Result<DVec3, WorkerError> {
        let components = self.components(field, 3)?;
        Ok(DVec3::new(components[0], components[1], components[2]))
    }

    /// A required angle triple in user-facing degrees, converted to radians.
    pub fn degrees_vec3(&self, field: &str) -> Result<DVec3, WorkerError> {
        let degrees = self.vec3(field)?;
        Ok(DVec3::new(
            degrees.x.to_radians(),
            degrees.y.to_radians(),
            degrees.z.to_radians(),
        ))
    }

    /// An optional angle in user-facing degrees, converted to radians.
    pub fn degrees_or(&self, field: &str, default_degrees: f64) -> Result<f64, WorkerError> {
        match self.inputs.get(field) {
            None => Ok(default_degrees.to_radians()),
            Some(Value::Number(n)) if n.is_finite() => Ok(n.to_radians()),
            Some(_) => Err(self.bad(field, "expected a number of degrees")),
        }
    }

    /// A required geometry handle.
    pub fn geometry(&self, field: &str) -> Result<&'a GeomHandle, WorkerError> {
        match self.get(field)? {
            Value::Geometry(handle) => Ok(handle),
            _ => Err(self.bad(field, "expected a geometry handle")),
        }
    }

    /// A required list of geometry handles, order preserved. Emptiness is the
    /// kernel's call to accept or reject, not this layer's.
    pub fn geometry_list(&self, field: &str) -> Result<Vec<&'a GeomHandle>, WorkerError> {
        let Value::List(items) = self.get(field)? else {
            return Err(self.bad(field, "expected a list of geometry handles"));
        };
        items
            .iter()
            .map(|item| match item {
                Value::Geometry(handle) => Ok(handle),
                _ => Err(self.bad(field, "expected a list of geometry handles")),
            })
            .collect()
    }

    fn components(&self, field: &str, arity: usize) -> Result<Vec<f64>, WorkerError> {
        let Value::List(items) = self.get(field)? else {
            return Err(self.bad(field, format!("expected a list of {arity} numbers")));
        };
        if items.len() != arity {
            return Err(self.bad(field, format!("expected exactly {arity} numbers")));
        }
        items
            .iter()
            .map(|item| match item {
                Value::Number(n) if n.is_finite() => Ok(*n),
                _ => Err(self.bad(field, format!("expected a list of {arity} numbers"))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn inputs(pairs: &[(&str, Value)]) -> Inputs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let inputs = Inputs::new();
        let args = Args::new("primitives.cube", &inputs);
        let error = args.number("size").unwrap_err().to_string();
        assert!(error.contains("`size`"));
        assert!(error.contains("primitives.cube"));
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let inputs = Inputs::new();
        let args = Args::new("op", &inputs);
        assert!(!args.bool_or("center", false).unwrap());
        assert_eq!(args.u32_or("segments", 32).unwrap(), 32);
    }

    #[test]
    fn wrongly_typed_optional_field_is_an_error_not_a_default() {
        let inputs = inputs(&[("center", Value::Number(1.0))]);
        let args = Args::new("op", &inputs);
        assert!(args.bool_or("center", false).is_err());
    }

    #[test]
    fn vectors_require_exact_arity() {
        let inputs = inputs(&[(
            "offset",
            Value::List(vec![Value::Number(1.0), Value::Number(2.0)]),
        )]);
        let args = Args::new("op", &inputs);
        assert_eq!(args.vec2("offset").unwrap(), DVec2::new(1.0, 2.0));
        assert!(args.vec3("offset").is_err());
    }

    #[test]
    fn degrees_convert_to_radians() {
        let inputs = inputs(&[(
            "angles",
            Value::List(vec![
                Value::Number(0.0),
                Value::Number(90.0),
                Value::Number(180.0),
            ]),
        )]);
        let args = Args::new("op", &inputs);
        let radians = args.degrees_vec3("angles").unwrap();
        assert_relative_eq!(radians.y, PI / 2.0);
        assert_relative_eq!(radians.z, PI);
    }

    #[test]
    fn geometry_list_rejects_mixed_content() {
        let inputs = inputs(&[("meshes", Value::List(vec![Value::Number(1.0)]))]);
        let args = Args::new("op", &inputs);
        assert!(args.geometry_list("meshes").is_err());
    }
}
