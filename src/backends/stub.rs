// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::errors::TransportError;
use crate::proto::{WorkerMessage, WorkerRequest};
use crate::traits::{WorkerHandle, WorkerSpawner};

/// A spawner whose worker never answers on its own.
///
/// The paired [`ScriptedWorker`] sees every posted request and decides if, when and in
/// which order replies are delivered.
pub struct ScriptedSpawner {
    shared: Arc<Shared>,
}

struct Shared {
    outbox: Mutex<Option<UnboundedSender<String>>>,
    posted: UnboundedSender<String>,
    terminated: AtomicBool,
    spawn_count: AtomicUsize,
}

impl ScriptedSpawner {
    pub fn new() -> (Self, ScriptedWorker) {
        let (posted, requests) = unbounded_channel();
        let shared = Arc::new(Shared {
            outbox: Mutex::new(None),
            posted,
            terminated: AtomicBool::new(false),
            spawn_count: AtomicUsize::new(0),
        });

        (
            Self {
                shared: shared.clone(),
            },
            ScriptedWorker { requests, shared },
        )
    }
}

impl WorkerSpawner for ScriptedSpawner {
    fn spawn(&self, outbox: UnboundedSender<String>) -> Result<Box<dyn WorkerHandle>, TransportError> {
        self.shared.spawn_count.fetch_add(1, Ordering::SeqCst);
        *self.shared.outbox.lock().unwrap() = Some(outbox);
        Ok(Box::new(ScriptedHandle {
            shared: self.shared.clone(),
        }))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

struct ScriptedHandle {
    shared: Arc<Shared>,
}

impl WorkerHandle for ScriptedHandle {
    fn post_message(&self, envelope: String) -> Result<(), TransportError> {
        if self.shared.terminated.load(Ordering::SeqCst) {
            return Err(TransportError::Terminated);
        }
        self.shared
            .posted
            .send(envelope)
            .map_err(|_| TransportError::Disconnected)
    }

    fn terminate(&self) {
        self.shared.terminated.store(true, Ordering::SeqCst);
        self.shared.outbox.lock().unwrap().take();
    }
}

/// Test-side view of a scripted worker.
pub struct ScriptedWorker {
    requests: UnboundedReceiver<String>,
    shared: Arc<Shared>,
}

impl ScriptedWorker {
    /// Next request posted by the gateway (including `STOP`).
    pub async fn next_request(&mut self) -> WorkerRequest {
        let envelope = self.requests.recv().await.expect("gateway dropped the worker");
        WorkerRequest::from_envelope(&envelope).expect("gateway posted an invalid envelope")
    }

    /// Requests posted so far that have not been read yet.
    pub fn drain_requests(&mut self) -> Vec<WorkerRequest> {
        let mut drained = Vec::new();
        while let Ok(envelope) = self.requests.try_recv() {
            drained.push(WorkerRequest::from_envelope(&envelope).unwrap());
        }
        drained
    }

    pub fn reply(&self, message: WorkerMessage) {
        self.send_raw(&message.to_envelope().unwrap());
    }

    pub fn send_raw(&self, envelope: &str) {
        if let Some(outbox) = self.shared.outbox.lock().unwrap().as_ref() {
            let _ = outbox.send(envelope.to_string());
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.shared.terminated.load(Ordering::SeqCst)
    }

    pub fn spawn_count(&self) -> usize {
        self.shared.spawn_count.load(Ordering::SeqCst)
    }
}

/// A spawner that can never create a worker.
pub struct FailingSpawner;

impl WorkerSpawner for FailingSpawner {
    fn spawn(&self, _outbox: UnboundedSender<String>) -> Result<Box<dyn WorkerHandle>, TransportError> {
        Err(TransportError::SpawnFailed(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "background workers are not available",
        )))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
