// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for background worker events.

use std::fmt::{Display, Formatter};

use crate::observability::messages::StructuredLog;

/// Worker loop started.
///
/// # Log Level
/// `debug!`
pub struct WorkerStarted<'a> {
    pub worker: &'a str,
}

impl Display for WorkerStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Worker '{}' started", self.worker)
    }
}

impl StructuredLog for WorkerStarted<'_> {
    fn log(&self) {
        tracing::debug!(worker = self.worker, "{}", self);
    }
}

/// Worker loop exited.
///
/// # Log Level
/// `debug!`
pub struct WorkerStopped<'a> {
    pub worker: &'a str,
    pub handled: usize,
}

impl Display for WorkerStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker '{}' stopped after handling {} messages",
            self.worker, self.handled
        )
    }
}

impl StructuredLog for WorkerStopped<'_> {
    fn log(&self) {
        tracing::debug!(worker = self.worker, handled = self.handled, "{}", self);
    }
}

/// Inbound envelope could not be handled.
///
/// # Log Level
/// `warn!`
pub struct UnhandledWorkerMessage<'a> {
    pub reason: &'a str,
}

impl Display for UnhandledWorkerMessage<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Worker could not handle message: {}", self.reason)
    }
}

impl StructuredLog for UnhandledWorkerMessage<'_> {
    fn log(&self) {
        tracing::warn!(reason = self.reason, "{}", self);
    }
}
