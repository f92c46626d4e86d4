// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Background worker backends for the offload gateway.
//!
//! A backend implements [`WorkerSpawner`](crate::traits::WorkerSpawner): it creates one
//! isolated execution context that receives serialized `WorkerRequest` envelopes and
//! posts serialized `WorkerMessage` envelopes back.
//!
//! # Available Backends
//!
//! ## Thread Backend
//! A dedicated OS thread running the engine one message at a time:
//! - **Isolation**: its own stack and inbox, no shared engine state
//! - **Ordering**: strictly sequential inside the worker
//! - **Use Case**: the default background context for the gateway and the CLI
//!
//! ## Stub Backend (Test-Only)
//! Testing utilities for gateway development (only available in test builds):
//! - **ScriptedSpawner**: test decides if, when and in what order replies arrive
//! - **FailingSpawner**: worker creation always fails, forcing the fallback path
//! - **Note**: NOT available in production builds
//!
//! # Architecture
//!
//! ```text
//! Gateway → envelope → WorkerHandle → worker loop → dispatch → engine
//!    ↑                                                   │
//!    └──────────────────── outbox ←──────────────────────┘
//! ```

#[cfg(test)]
pub mod stub;
pub mod thread;
