//! # Channel Protocol
//!
//! Structured message shapes exchanged between the controller-side client and
//! the worker. Geometry never crosses the channel; handles do (the worker and
//! client share a process).
//!
//! ## Message Flow
//!
//! ```text
//! client ── Request{correlationId, action} ──▶ worker
//! client ◀── Notice::Busy ───────────────────  worker (advisory, on receipt)
//! client ◀── Response{correlationId, ...} ───  worker
//! ```
//!
//! A `Notice::Ready` is sent once at startup, after the kernel is available
//! and before any request is serviced.

use crate::value::{Inputs, Value};

/// One named remote operation: a dotted path (`service.method`) or a bare
/// top-level name, plus its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub operation_name: String,
    pub inputs: Inputs,
}

impl Action {
    /// Creates an action.
    pub fn new(operation_name: impl Into<String>, inputs: Inputs) -> Self {
        Self {
            operation_name: operation_name.into(),
            inputs,
        }
    }
}

/// A correlated request envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub correlation_id: String,
    pub action: Action,
}

/// A correlated response envelope.
///
/// Exactly one of `result`/`error` is set, except for the reserved lifecycle
/// operations which acknowledge with both unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub correlation_id: String,
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl Response {
    /// A successful response carrying a result value.
    pub fn success(correlation_id: String, result: Value) -> Self {
        Self {
            correlation_id,
            result: Some(result),
            error: None,
        }
    }

    /// A failed response carrying the error text.
    pub fn failure(correlation_id: String, error: String) -> Self {
        Self {
            correlation_id,
            result: None,
            error: Some(error),
        }
    }

    /// An empty acknowledgement for reserved lifecycle operations.
    pub fn empty(correlation_id: String) -> Self {
        Self {
            correlation_id,
            result: None,
            error: None,
        }
    }
}

/// Advisory liveness signals; no reply is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Sent once after startup, before any request is serviced.
    Ready,
    /// Sent on receipt of each request, before computing.
    Busy,
}

/// Everything the worker emits back over the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerMessage {
    Notice(Notice),
    Response(Response),
}
