//! # Dispatcher
//!
//! Serves correlated request envelopes one at a time, strictly in arrival
//! order. Every compute operation goes through the memoization cache; the two
//! reserved lifecycle names (`startRun`, `flushCache`) bypass both registry
//! and cache.
//!
//! A failing action produces a failed response and nothing else: the serving
//! loop never terminates because one request failed.
//!
//! One dispatcher (and its cache) belongs to exactly one channel. Pooled
//! deployments instantiate one pair per channel; caches are never shared.

use crate::cache::{CacheKey, MemoCache};
use crate::error::WorkerError;
use crate::protocol::{Action, Request, Response};
use crate::registry::{CallOp, LifecycleOp, OperationId, Registry};
use crate::value::Value;
use config::constants::WorkerConfig;
use csg_kernel::Geometry;
use csg_mesh::{convert, convert_batch};

/// One channel's dispatcher and cache.
pub struct Dispatcher {
    registry: Registry,
    cache: MemoCache,
}

impl Dispatcher {
    /// Creates a dispatcher with the default configuration.
    pub fn new() -> Self {
        Self::from_config(WorkerConfig::default())
    }

    /// Creates a dispatcher tuned by a validated configuration snapshot:
    /// the cache flush threshold and the segment count primitives fall back
    /// to when a request omits `segments`.
    pub fn from_config(config: WorkerConfig) -> Self {
        Self {
            registry: Registry::with_default_segments(config.default_segments),
            cache: MemoCache::from_config(&config),
        }
    }

    /// Creates a dispatcher over a specific cache configuration.
    pub fn with_cache(cache: MemoCache) -> Self {
        Self {
            registry: Registry::new(),
            cache,
        }
    }

    /// Returns the registry, exposing the invocation counter.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the cache for inspection.
    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    /// Serves one request to completion and returns its correlated response.
    pub fn dispatch(&mut self, request: &Request) -> Response {
        let Request {
            correlation_id,
            action,
        } = request;
        tracing::debug!(
            operation = %action.operation_name,
            correlation_id = %correlation_id,
            "dispatching"
        );

        let Ok(op) = action.operation_name.parse::<OperationId>() else {
            let error = WorkerError::not_found(&action.operation_name, &action.inputs);
            tracing::warn!(%error, "request failed");
            return Response::failure(correlation_id.clone(), error.to_string());
        };

        match op {
            OperationId::Lifecycle(LifecycleOp::StartRun) => {
                self.cache.start_run();
                Response::empty(correlation_id.clone())
            }
            OperationId::Lifecycle(LifecycleOp::FlushCache) => {
                self.cache.flush();
                Response::empty(correlation_id.clone())
            }
            OperationId::Call(call) => {
                let key = CacheKey::for_action(action);
                let registry = &self.registry;
                match self.cache.compute(key, || invoke(registry, call, action)) {
                    Ok(value) => Response::success(correlation_id.clone(), value),
                    Err(error) => {
                        tracing::warn!(%error, "request failed");
                        Response::failure(correlation_id.clone(), error.to_string())
                    }
                }
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn invoke(registry: &Registry, call: CallOp, action: &Action) -> Result<Value, WorkerError> {
    let args = crate::registry::Args::new(&action.operation_name, &action.inputs);
    match call {
        CallOp::Render => {
            let handle = args.geometry("mesh")?;
            Ok(Value::Mesh(convert(handle.geometry())))
        }
        CallOp::RenderBatch => {
            let handles = args.geometry_list("meshes")?;
            let geometries: Vec<&Geometry> = handles.iter().map(|h| h.geometry()).collect();
            Ok(Value::List(
                convert_batch(&geometries)
                    .into_iter()
                    .map(Value::Mesh)
                    .collect(),
            ))
        }
        CallOp::Registry(op) => registry.call(op, &action.operation_name, &action.inputs),
    }
}
