// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failures of the background worker transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The background context could not be created.
    #[error("Failed to spawn worker: {0}")]
    SpawnFailed(#[from] std::io::Error),

    /// The worker was terminated and no longer accepts messages.
    #[error("Worker has been terminated")]
    Terminated,

    /// The worker side of the channel is gone.
    #[error("Worker channel disconnected")]
    Disconnected,
}
