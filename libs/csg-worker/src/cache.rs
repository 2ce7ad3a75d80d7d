//! # Memoization Cache
//!
//! Content-addressed cache wrapped around every dispatched call, with a
//! run-bounded eviction policy.
//!
//! ## Eviction Policy
//!
//! No entry is evicted individually. Entries accumulate across runs so that
//! re-running an unchanged pipeline after editing one unrelated upstream
//! parameter hits the cache for everything else. When a run boundary finds
//! the cache over its threshold, the whole cache is flushed at once: editing
//! sessions are short, and a flush only costs recomputation, never
//! correctness.
//!
//! The cache is deliberately not thread-safe. Each channel runs requests to
//! completion in arrival order on one thread and owns its own cache; caches
//! are never shared across channels.

use crate::error::WorkerError;
use crate::protocol::Action;
use crate::value::Value;
use config::constants::{WorkerConfig, CACHE_FLUSH_THRESHOLD};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Deterministic hash of `(operation name, inputs)`.
///
/// Equal inputs, including list order, always hash equal. Geometry handles
/// contribute their identity, so a chained pipeline re-run over the same
/// handles reproduces the same keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    /// Hashes an action into a cache key.
    pub fn for_action(action: &Action) -> Self {
        let mut hasher = Sha256::new();
        hash_str(&mut hasher, &action.operation_name);
        hasher.update((action.inputs.len() as u64).to_le_bytes());
        for (field, value) in &action.inputs {
            hash_str(&mut hasher, field);
            hash_value(&mut hasher, value);
        }
        Self(hasher.finalize().into())
    }
}

fn hash_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

// Every variant is tagged so that e.g. Number(1.0) and Bool(true) followed by
// different fields cannot collide.
fn hash_value(hasher: &mut Sha256, value: &Value) {
    match value {
        Value::Bool(b) => {
            hasher.update([1u8, u8::from(*b)]);
        }
        Value::Number(n) => {
            hasher.update([2u8]);
            hasher.update(n.to_bits().to_le_bytes());
        }
        Value::Text(t) => {
            hasher.update([3u8]);
            hash_str(hasher, t);
        }
        Value::List(items) => {
            hasher.update([4u8]);
            hasher.update((items.len() as u64).to_le_bytes());
            for item in items {
                hash_value(hasher, item);
            }
        }
        Value::Geometry(handle) => {
            hasher.update([5u8]);
            hasher.update(handle.id().to_le_bytes());
        }
        Value::Mesh(buffer) => {
            hasher.update([6u8]);
            hasher.update((buffer.positions.len() as u64).to_le_bytes());
            for p in &buffer.positions {
                hasher.update(p.to_bits().to_le_bytes());
            }
            hasher.update((buffer.indices.len() as u64).to_le_bytes());
            for i in &buffer.indices {
                hasher.update(i.to_le_bytes());
            }
        }
    }
}

struct CacheEntry {
    value: Value,
    last_used_run: u64,
}

/// Run-bounded memoization of dispatched calls.
pub struct MemoCache {
    entries: HashMap<CacheKey, CacheEntry>,
    current_run: u64,
    flush_threshold: usize,
}

impl MemoCache {
    /// Creates a cache with the default flush threshold.
    pub fn new() -> Self {
        Self::with_threshold(CACHE_FLUSH_THRESHOLD)
    }

    /// Creates a cache sized by a validated configuration snapshot.
    pub fn from_config(config: &WorkerConfig) -> Self {
        Self::with_threshold(config.cache_flush_threshold)
    }

    /// Creates a cache that flushes when a run boundary finds more than
    /// `flush_threshold` entries.
    pub fn with_threshold(flush_threshold: usize) -> Self {
        Self {
            entries: HashMap::new(),
            current_run: 0,
            flush_threshold,
        }
    }

    /// Returns the stored value on hit, refreshing its run stamp; on miss,
    /// invokes `thunk`, stores the value, and returns it.
    ///
    /// Requires the wrapped operation to be referentially transparent.
    /// Failures are returned without being stored, so a corrected re-request
    /// computes fresh.
    pub fn compute<F>(&mut self, key: CacheKey, thunk: F) -> Result<Value, WorkerError>
    where
        F: FnOnce() -> Result<Value, WorkerError>,
    {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.last_used_run = self.current_run;
            tracing::debug!(run = self.current_run, "cache hit");
            return Ok(entry.value.clone());
        }
        let value = thunk()?;
        self.entries.insert(
            key,
            CacheEntry {
                value: value.clone(),
                last_used_run: self.current_run,
            },
        );
        Ok(value)
    }

    /// Marks a run boundary. Flushes everything if the cache has grown past
    /// its threshold; otherwise entries survive into the new run.
    pub fn start_run(&mut self) {
        self.current_run += 1;
        if self.entries.len() > self.flush_threshold {
            tracing::info!(
                entries = self.entries.len(),
                run = self.current_run,
                "cache over threshold, flushing"
            );
            self.entries.clear();
        }
    }

    /// Drops every entry unconditionally.
    pub fn flush(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current run counter.
    #[inline]
    pub fn current_run(&self) -> u64 {
        self.current_run
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}
