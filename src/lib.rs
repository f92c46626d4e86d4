// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // background worker backends
pub mod config;     // gateway configuration
pub mod engine;     // markdown text engine
pub mod errors;     // error handling
pub mod gateway;    // offload gateway
pub mod observability;
pub mod proto;      // worker message envelopes
pub mod traits;     // worker + offload seams
