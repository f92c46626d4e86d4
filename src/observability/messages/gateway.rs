// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for offload gateway events.
//!
//! This module contains message types for logging events related to:
//! * Gateway initialization (ready or fallback)
//! * Request dispatch, completion and timeout
//! * Responses that arrive with no registered request
//! * Faults reported by the worker
//! * Disposal and undeliverable `STOP`

use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::observability::messages::StructuredLog;
use crate::proto::OperationKind;

/// Worker created and response router attached.
///
/// # Log Level
/// `info!` - Important operational event
pub struct GatewayReady<'a> {
    pub worker: &'a str,
}

impl Display for GatewayReady<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Offload gateway ready: worker '{}' attached", self.worker)
    }
}

impl StructuredLog for GatewayReady<'_> {
    fn log(&self) {
        tracing::info!(worker = self.worker, "{}", self);
    }
}

/// Worker creation failed; calls will use the local fallback path.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct GatewayFallback<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for GatewayFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Offload worker unavailable, falling back to degraded local results: {}",
            self.error
        )
    }
}

impl StructuredLog for GatewayFallback<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }
}

/// Request posted to the worker.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct RequestDispatched {
    pub request_id: u64,
    pub operation: OperationKind,
    pub input_size: usize,
    pub timeout: Duration,
}

impl Display for RequestDispatched {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatched {} request #{}: input_size={} bytes, timeout={:?}",
            self.operation, self.request_id, self.input_size, self.timeout
        )
    }
}

impl StructuredLog for RequestDispatched {
    fn log(&self) {
        tracing::debug!(
            request_id = self.request_id,
            operation = self.operation.name(),
            input_size = self.input_size,
            timeout_ms = self.timeout.as_millis() as u64,
            "{}", self
        );
    }
}

/// Matching completion routed to its caller.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct RequestCompleted {
    pub request_id: u64,
    pub operation: OperationKind,
    /// Worker-reported processing time in milliseconds.
    pub worker_duration_ms: f64,
}

impl Display for RequestCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Completed {} request #{} in {:.3} ms",
            self.operation, self.request_id, self.worker_duration_ms
        )
    }
}

impl StructuredLog for RequestCompleted {
    fn log(&self) {
        tracing::debug!(
            request_id = self.request_id,
            operation = self.operation.name(),
            worker_duration_ms = self.worker_duration_ms,
            "{}", self
        );
    }
}

/// Request abandoned after its budget elapsed.
///
/// # Log Level
/// `warn!` - Caller receives an error
pub struct RequestTimedOut {
    pub request_id: u64,
    pub operation: OperationKind,
    pub after: Duration,
}

impl Display for RequestTimedOut {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} request #{} timed out after {:?}",
            self.operation, self.request_id, self.after
        )
    }
}

impl StructuredLog for RequestTimedOut {
    fn log(&self) {
        tracing::warn!(
            request_id = self.request_id,
            operation = self.operation.name(),
            after_ms = self.after.as_millis() as u64,
            "{}", self
        );
    }
}

/// Completion for a request id that is no longer registered.
///
/// # Log Level
/// `debug!` - Expected after timeouts
pub struct LateResponseIgnored<'a> {
    pub request_id: u64,
    pub tag: &'a str,
}

impl Display for LateResponseIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ignoring {} for request #{}: no pending request",
            self.tag, self.request_id
        )
    }
}

impl StructuredLog for LateResponseIgnored<'_> {
    fn log(&self) {
        tracing::debug!(request_id = self.request_id, tag = self.tag, "{}", self);
    }
}

/// Completion whose tag does not match the operation registered for its id.
///
/// # Log Level
/// `warn!` - Protocol violation
pub struct MismatchedResponse<'a> {
    pub request_id: u64,
    pub expected: OperationKind,
    pub received: &'a str,
}

impl Display for MismatchedResponse<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Request #{} expected a {} completion but the worker sent {}",
            self.request_id,
            self.expected.completion_tag(),
            self.received
        )
    }
}

impl StructuredLog for MismatchedResponse<'_> {
    fn log(&self) {
        tracing::warn!(
            request_id = self.request_id,
            expected = self.expected.completion_tag(),
            received = self.received,
            "{}", self
        );
    }
}

/// Inbound envelope that does not decode as a worker message.
///
/// # Log Level
/// `warn!` - Protocol violation
pub struct MalformedWorkerMessage<'a> {
    pub error: &'a serde_json::Error,
}

impl Display for MalformedWorkerMessage<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Discarding malformed worker message: {}", self.error)
    }
}

impl StructuredLog for MalformedWorkerMessage<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }
}

/// Unsolicited `ERROR` reported by the worker.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct WorkerFaultReported<'a> {
    pub error: &'a str,
    pub stack: Option<&'a str>,
}

impl Display for WorkerFaultReported<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Worker reported an error: {}", self.error)
    }
}

impl StructuredLog for WorkerFaultReported<'_> {
    fn log(&self) {
        tracing::error!(error = self.error, stack = self.stack, "{}", self);
    }
}

/// `STOP` could not be posted while disposing; the worker is terminated anyway.
///
/// # Log Level
/// `debug!` - Worker usually already gone
pub struct StopNotDelivered<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for StopNotDelivered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Could not deliver STOP to the worker: {}", self.error)
    }
}

impl StructuredLog for StopNotDelivered<'_> {
    fn log(&self) {
        tracing::debug!(error = %self.error, "{}", self);
    }
}

/// Gateway torn down.
///
/// # Log Level
/// `info!` - Important operational event
pub struct GatewayDisposed {
    pub rejected_requests: usize,
}

impl Display for GatewayDisposed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Offload gateway disposed: {} outstanding requests rejected",
            self.rejected_requests
        )
    }
}

impl StructuredLog for GatewayDisposed {
    fn log(&self) {
        tracing::info!(rejected_requests = self.rejected_requests, "{}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_operation_and_budget() {
        let msg = RequestTimedOut {
            request_id: 12,
            operation: OperationKind::AnalyzeText,
            after: Duration::from_millis(15_000),
        };
        assert_eq!(msg.to_string(), "analyze_text request #12 timed out after 15s");
    }

    #[test]
    fn stop_not_delivered_names_the_cause() {
        let error = crate::errors::TransportError::Disconnected;
        let msg = StopNotDelivered { error: &error };
        assert_eq!(
            msg.to_string(),
            "Could not deliver STOP to the worker: Worker channel disconnected"
        );
    }

    #[test]
    fn mismatch_message_uses_wire_tags() {
        let msg = MismatchedResponse {
            request_id: 1,
            expected: OperationKind::CleanMarkdown,
            received: "STRIP_MARKDOWN_COMPLETE",
        };
        assert_eq!(
            msg.to_string(),
            "Request #1 expected a CLEAN_MARKDOWN_COMPLETE completion but the worker sent STRIP_MARKDOWN_COMPLETE"
        );
    }
}
