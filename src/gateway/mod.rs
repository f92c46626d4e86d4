// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Offload gateway: runs engine operations in a background worker.
//!
//! The gateway owns exactly one worker for its lifetime. Each call is tagged with a
//! per-gateway request id, registered as pending, posted to the worker and awaited
//! with an operation-specific deadline. The response router resolves pending entries
//! by id; the deadline, the router and disposal race for each entry and only the first
//! one to remove it from the registry has any effect.
//!
//! If the worker cannot be created the gateway stays usable in fallback mode.

mod fallback;
mod offload;
mod pending;
mod state;


pub use offload::OffloadGateway;
pub use pending::{PendingRegistry, PendingRequest};
pub use state::GatewayState;
