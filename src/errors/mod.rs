// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod gateway;
mod transport;

pub use config::{ConfigError, ConfigResult};
pub use gateway::{GatewayError, GatewayResult};
pub use transport::TransportError;
