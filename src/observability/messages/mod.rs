// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself at its intended level with structured fields.
//!
//! * `gateway` - gateway lifecycle, dispatch, completion, timeout and disposal
//! * `worker` - worker start/stop, unknown messages and caught faults

pub mod gateway;
pub mod worker;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    fn log(&self);
}
