//! # Worker Errors
//!
//! Failure taxonomy for dispatched operations. Every variant carries the
//! failing operation name and a rendering of the input fields, because that
//! text is all that survives the channel boundary.

use crate::value::{describe_inputs, Inputs};
use csg_kernel::KernelError;
use thiserror::Error;

/// Errors surfaced to the caller as a failed response.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The operation name did not resolve to any handler.
    #[error("operation not found: {operation} (inputs: {inputs})")]
    NotFound { operation: String, inputs: String },

    /// The kernel rejected the call.
    #[error("{operation} failed: {source} (inputs: {inputs})")]
    Kernel {
        operation: String,
        source: KernelError,
        inputs: String,
    },

    /// A request field is missing or has the wrong shape.
    #[error("{operation}: bad input `{field}`: {reason} (inputs: {inputs})")]
    BadInput {
        operation: String,
        field: String,
        reason: String,
        inputs: String,
    },
}

impl WorkerError {
    /// Creates a not-found error for an unresolved operation name.
    pub fn not_found(operation: &str, inputs: &Inputs) -> Self {
        Self::NotFound {
            operation: operation.to_string(),
            inputs: describe_inputs(inputs),
        }
    }

    /// Wraps a kernel failure with its call context.
    pub fn kernel(operation: &str, source: KernelError, inputs: &Inputs) -> Self {
        Self::Kernel {
            operation: operation.to_string(),
            source,
            inputs: describe_inputs(inputs),
        }
    }

    /// Creates a bad-input error for one request field.
    pub fn bad_input(
        operation: &str,
        field: &str,
        reason: impl Into<String>,
        inputs: &Inputs,
    ) -> Self {
        Self::BadInput {
            operation: operation.to_string(),
            field: field.to_string(),
            reason: reason.into(),
            inputs: describe_inputs(inputs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn errors_carry_operation_and_inputs() {
        let mut inputs = Inputs::new();
        inputs.insert("size".into(), Value::Number(-1.0));
        let error = WorkerError::kernel(
            "primitives.cube",
            KernelError::degenerate("cuboid size must be positive"),
            &inputs,
        );
        let text = error.to_string();
        assert!(text.contains("primitives.cube"));
        assert!(text.contains("size: -1"));
    }

    #[test]
    fn not_found_names_the_operation() {
        let text = WorkerError::not_found("no.such", &Inputs::new()).to_string();
        assert!(text.contains("no.such"));
    }
}
