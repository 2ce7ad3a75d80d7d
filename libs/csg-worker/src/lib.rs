//! # CSG Worker
//!
//! Offloads solid-modeling computation to an isolated worker thread reachable
//! only through message passing, and avoids recomputation through a
//! content-addressed cache.
//!
//! ## Architecture
//!
//! ```text
//! WorkerClient ──Request──▶ Dispatcher ──▶ MemoCache ──▶ Registry ──▶ csg-kernel
//!      ▲                                                    │
//!      └────────────Response◀────────────────────────────────┘
//! ```
//!
//! Geometry never crosses the channel: kernel results stay inside the worker
//! process as opaque [`GeomHandle`](value::GeomHandle)s that callers thread
//! through chained operations. Only triangle buffers, produced by the
//! `render`/`renderBatch` operations via `csg-mesh`, are meant for the
//! outside.
//!
//! ## Usage
//!
//! ```rust
//! use csg_worker::dispatch::Dispatcher;
//! use csg_worker::protocol::{Action, Request};
//! use csg_worker::value::{Inputs, Value};
//!
//! let mut dispatcher = Dispatcher::new();
//! let mut inputs = Inputs::new();
//! inputs.insert("size".into(), Value::Number(10.0));
//! let request = Request {
//!     correlation_id: "1".into(),
//!     action: Action::new("primitives.cube", inputs),
//! };
//! let response = dispatcher.dispatch(&request);
//! assert!(response.error.is_none());
//! ```

pub mod cache;
pub mod channel;
pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod value;

pub use cache::{CacheKey, MemoCache};
pub use channel::{ChannelError, Pending, WorkerClient, WorkerHandle};
pub use dispatch::Dispatcher;
pub use error::WorkerError;
pub use protocol::{Action, Notice, Request, Response, WorkerMessage};
pub use value::{GeomHandle, Inputs, Value};
