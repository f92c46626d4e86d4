// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Envelope schema spoken between the gateway and its background worker
pub mod text_v1;

// Re-export the types for easier access
pub use text_v1::{OperationKind, TextPayload, WorkerMessage, WorkerRequest};
