//! # Worker Channel
//!
//! Thread-backed transport between the controller-side client and a
//! dispatcher.
//!
//! ## Lifecycle
//!
//! ```text
//! let client = WorkerClient::new();
//! let pending = client.invoke("primitives.cube", inputs);   // queues
//! client.attach(WorkerHandle::spawn());                     // drains queue
//! let result = pending.wait()?;                             // resolves
//! ```
//!
//! Requests made before attachment queue; they never fail. The worker thread
//! sends `Ready` once at startup, then a `Busy` notice on receipt of each
//! request before computing. Back-pressure is the channel's: a request
//! arriving while the worker is busy waits in the transport queue and is
//! served in order.

use crate::dispatch::Dispatcher;
use crate::protocol::{Action, Notice, Request, Response, WorkerMessage};
use crate::value::{Inputs, Value};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use uuid::Uuid;

/// Failures visible on the controller side.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The worker went away before responding.
    #[error("worker channel disconnected")]
    Disconnected,

    /// The worker responded with a failure.
    #[error("remote operation failed: {0}")]
    Remote(String),
}

/// Handle to a running worker thread.
pub struct WorkerHandle {
    requests: Sender<Request>,
    events: Receiver<WorkerMessage>,
}

impl WorkerHandle {
    /// Spawns a worker with a fresh dispatcher.
    pub fn spawn() -> Self {
        Self::spawn_with(Dispatcher::new())
    }

    /// Spawns a worker serving requests through `dispatcher`.
    ///
    /// The thread exits when every request sender is dropped or the event
    /// receiver goes away.
    pub fn spawn_with(mut dispatcher: Dispatcher) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (event_tx, event_rx) = mpsc::channel::<WorkerMessage>();
        thread::spawn(move || {
            if event_tx.send(WorkerMessage::Notice(Notice::Ready)).is_err() {
                return;
            }
            for request in request_rx {
                if event_tx.send(WorkerMessage::Notice(Notice::Busy)).is_err() {
                    return;
                }
                let response = dispatcher.dispatch(&request);
                if event_tx.send(WorkerMessage::Response(response)).is_err() {
                    return;
                }
            }
        });
        Self {
            requests: request_tx,
            events: event_rx,
        }
    }
}

#[derive(Default)]
struct ClientState {
    link: Option<Sender<Request>>,
    queued: Vec<Request>,
    pending: HashMap<String, Sender<Response>>,
}

/// Controller-side client. Cheap to clone; clones share one channel.
#[derive(Clone, Default)]
pub struct WorkerClient {
    state: Arc<Mutex<ClientState>>,
}

impl WorkerClient {
    /// Creates an unattached client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends an operation call, returning a [`Pending`] that resolves with
    /// the matching response. Calls made before [`attach`](Self::attach)
    /// queue until a worker is available.
    pub fn invoke(&self, operation_name: impl Into<String>, inputs: Inputs) -> Pending {
        let correlation_id = Uuid::new_v4().to_string();
        let request = Request {
            correlation_id: correlation_id.clone(),
            action: Action::new(operation_name, inputs),
        };
        let (reply_tx, reply_rx) = mpsc::channel();

        let mut state = self.state.lock();
        state.pending.insert(correlation_id.clone(), reply_tx);
        match &state.link {
            Some(link) => {
                if link.send(request).is_err() {
                    // worker gone, drop the reply sender so wait() errors
                    state.pending.remove(&correlation_id);
                }
            }
            None => state.queued.push(request),
        }

        Pending { reply: reply_rx }
    }

    /// Binds a worker, flushes queued requests in order, and starts routing
    /// its events back to pending calls.
    pub fn attach(&self, handle: WorkerHandle) {
        let WorkerHandle { requests, events } = handle;

        let mut state = self.state.lock();
        let queued: Vec<Request> = state.queued.drain(..).collect();
        for request in queued {
            let id = request.correlation_id.clone();
            if requests.send(request).is_err() {
                state.pending.remove(&id);
            }
        }
        state.link = Some(requests);
        drop(state);

        let state = Arc::clone(&self.state);
        thread::spawn(move || {
            for message in events {
                match message {
                    WorkerMessage::Notice(notice) => {
                        tracing::debug!(?notice, "worker notice");
                    }
                    WorkerMessage::Response(response) => {
                        let reply = state.lock().pending.remove(&response.correlation_id);
                        if let Some(reply) = reply {
                            let _ = reply.send(response);
                        }
                    }
                }
            }
            // worker gone: fail everything still pending
            state.lock().pending.clear();
        });
    }
}

/// A call awaiting its response.
pub struct Pending {
    reply: Receiver<Response>,
}

impl Pending {
    /// Blocks until the matching response arrives.
    ///
    /// `Ok(None)` is the empty acknowledgement of the reserved lifecycle
    /// operations.
    pub fn wait(self) -> Result<Option<Value>, ChannelError> {
        let response = self
            .reply
            .recv()
            .map_err(|_| ChannelError::Disconnected)?;
        match response.error {
            Some(text) => Err(ChannelError::Remote(text)),
            None => Ok(response.result),
        }
    }
}
