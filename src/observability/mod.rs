// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for diagnostic and operational
//! logging throughout the scribe. Message types follow a struct-based pattern with a
//! `Display` implementation so log text lives in one place instead of being scattered
//! through the gateway and worker code.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::gateway` - gateway lifecycle, request dispatch and routing
//! * `messages::worker` - background worker lifecycle and faults
//!
//! # Usage
//!
//! ```rust
//! use the_scribe::observability::messages::gateway::RequestTimedOut;
//! use the_scribe::observability::messages::StructuredLog;
//! use the_scribe::proto::OperationKind;
//! use std::time::Duration;
//!
//! RequestTimedOut {
//!     request_id: 3,
//!     operation: OperationKind::StripMarkdown,
//!     after: Duration::from_millis(5000),
//! }
//! .log();
//! ```

pub mod messages;
