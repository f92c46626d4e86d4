// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::errors::GatewayResult;
use crate::proto::{OperationKind, WorkerMessage};

/// Outcome delivered to a waiting caller.
pub type Reply = GatewayResult<WorkerMessage>;

/// One outstanding request, owned by the registry until it is resolved.
#[derive(Debug)]
pub struct PendingRequest {
    pub kind: OperationKind,
    reply: oneshot::Sender<Reply>,
}

impl PendingRequest {
    /// Hand the outcome to the caller. A caller that already gave up is ignored.
    pub fn resolve(self, reply: Reply) {
        let _ = self.reply.send(reply);
    }
}

/// Request id to pending entry map.
///
/// Entries are removed exactly once; whichever of completion, timeout or disposal calls
/// [`take`](Self::take) or [`drain`](Self::drain) first owns the entry.
#[derive(Debug, Default)]
pub struct PendingRegistry {
    entries: Mutex<HashMap<u64, PendingRequest>>,
}

impl PendingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `request_id` and return the receiver its caller awaits plus the deadline.
    pub fn register(
        &self,
        request_id: u64,
        kind: OperationKind,
        timeout: Duration,
    ) -> (oneshot::Receiver<Reply>, Instant) {
        let (reply, receiver) = oneshot::channel();
        let deadline = Instant::now() + timeout;

        self.lock().insert(request_id, PendingRequest { kind, reply });
        (receiver, deadline)
    }

    pub fn take(&self, request_id: u64) -> Option<PendingRequest> {
        self.lock().remove(&request_id)
    }

    pub fn drain(&self) -> Vec<PendingRequest> {
        self.lock().drain().map(|(_, entry)| entry).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, PendingRequest>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
