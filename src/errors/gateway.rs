// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;
use thiserror::Error;

use crate::errors::TransportError;
use crate::proto::OperationKind;

/// Errors surfaced to callers of the offload gateway.
///
/// Invalid input is never an error; the engine degrades to neutral results instead.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No completion arrived within the operation's budget.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: OperationKind,
        after: Duration,
    },

    /// The gateway was disposed before or while the request was outstanding.
    #[error("Offload gateway has been disposed")]
    Disposed,

    #[error("Worker transport error: {0}")]
    Transport(#[from] TransportError),

    /// An outbound request could not be encoded.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The worker answered a request with a completion for a different operation.
    #[error("Expected a {expected} completion but received {received}")]
    UnexpectedResponse {
        expected: OperationKind,
        received: String,
    },
}

impl GatewayError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, GatewayError::Timeout { .. })
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
