//! # Kernel Errors
//!
//! Error types for kernel geometry operations.

use thiserror::Error;

/// Errors that can occur inside the solid-modeling kernel.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Degenerate geometry (zero-size primitive, too few vertices, ...)
    #[error("degenerate geometry: {message}")]
    Degenerate { message: String },

    /// An argument is structurally valid but unusable for the operation
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An operation received an operand of the wrong geometric kind
    #[error("{operation} expects {expected} operands")]
    WrongKind {
        operation: &'static str,
        expected: &'static str,
    },
}

impl KernelError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a wrong-kind error.
    pub fn wrong_kind(operation: &'static str, expected: &'static str) -> Self {
        Self::WrongKind {
            operation,
            expected,
        }
    }
}
