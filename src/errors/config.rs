// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while loading or validating a gateway configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is neither `.yaml`/`.yml` nor `.toml`.
    #[error("Unsupported configuration format: '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("Timeout for '{operation}' must be greater than zero")]
    InvalidTimeout { operation: &'static str },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
