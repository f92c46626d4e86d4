// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    ANALYZE_TEXT_TIMEOUT_MS, CLEAN_MARKDOWN_TIMEOUT_MS, DEFAULT_WORKER_THREAD_NAME,
    EXTRACT_HEADERS_TIMEOUT_MS, MARKDOWN_TO_HTML_TIMEOUT_MS, STRIP_MARKDOWN_TIMEOUT_MS,
};
use crate::errors::{ConfigError, ConfigResult};
use crate::proto::OperationKind;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for the offload gateway.
///
/// Every section is optional; an empty file yields the built-in defaults.
///
/// # Fields
/// * `timeouts` - Per-operation response budgets
/// * `worker` - Background worker options
///
/// # Example
/// ```yaml
/// timeouts:
///   extract_headers_ms: 2000
///   analyze_text_ms: 30000
/// worker:
///   thread_name: scribe-worker
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub worker: WorkerConfig,
}

/// Per-operation response budgets in milliseconds.
///
/// Unset values use the defaults from [`crate::config::consts`]:
/// 5s for `extract_headers`/`strip_markdown`, 10s for `clean_markdown`/`markdown_to_html`
/// and 15s for `analyze_text`.
#[derive(Debug, Default, Deserialize)]
pub struct TimeoutConfig {
    pub clean_markdown_ms: Option<u64>,
    pub extract_headers_ms: Option<u64>,
    pub markdown_to_html_ms: Option<u64>,
    pub strip_markdown_ms: Option<u64>,
    pub analyze_text_ms: Option<u64>,
}

impl TimeoutConfig {
    /// Every operation gets the same budget. Handy for tests.
    pub fn uniform(millis: u64) -> Self {
        Self {
            clean_markdown_ms: Some(millis),
            extract_headers_ms: Some(millis),
            markdown_to_html_ms: Some(millis),
            strip_markdown_ms: Some(millis),
            analyze_text_ms: Some(millis),
        }
    }

    fn configured(&self, kind: OperationKind) -> Option<u64> {
        match kind {
            OperationKind::CleanMarkdown => self.clean_markdown_ms,
            OperationKind::ExtractHeaders => self.extract_headers_ms,
            OperationKind::MarkdownToHtml => self.markdown_to_html_ms,
            OperationKind::StripMarkdown => self.strip_markdown_ms,
            OperationKind::AnalyzeText => self.analyze_text_ms,
        }
    }

    fn default_ms(kind: OperationKind) -> u64 {
        match kind {
            OperationKind::CleanMarkdown => CLEAN_MARKDOWN_TIMEOUT_MS,
            OperationKind::ExtractHeaders => EXTRACT_HEADERS_TIMEOUT_MS,
            OperationKind::MarkdownToHtml => MARKDOWN_TO_HTML_TIMEOUT_MS,
            OperationKind::StripMarkdown => STRIP_MARKDOWN_TIMEOUT_MS,
            OperationKind::AnalyzeText => ANALYZE_TEXT_TIMEOUT_MS,
        }
    }

    /// Budget for `kind`, configured or default.
    pub fn timeout_for(&self, kind: OperationKind) -> Duration {
        Duration::from_millis(
            self.configured(kind)
                .unwrap_or_else(|| Self::default_ms(kind)),
        )
    }

    /// Reject zero budgets, which would time every request out immediately.
    pub fn validate(&self) -> ConfigResult<()> {
        for kind in OperationKind::ALL {
            if self.configured(kind) == Some(0) {
                return Err(ConfigError::InvalidTimeout {
                    operation: kind.name(),
                });
            }
        }
        Ok(())
    }
}

/// Background worker options.
#[derive(Debug, Default, Deserialize)]
pub struct WorkerConfig {
    pub thread_name: Option<String>,
}

impl WorkerConfig {
    pub fn get_thread_name(&self) -> &str {
        self.thread_name
            .as_deref()
            .unwrap_or(DEFAULT_WORKER_THREAD_NAME)
    }
}

/// Load a config from a YAML (`.yaml`/`.yml`) or TOML (`.toml`) file
pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<GatewayConfig> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let content = fs::read_to_string(path)?;
    let cfg = match extension.as_str() {
        "yaml" | "yml" => parse_yaml(&content)?,
        "toml" => toml::from_str(&content)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    };
    Ok(cfg)
}

/// Load a config and reject values the gateway cannot honour
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> ConfigResult<GatewayConfig> {
    let cfg = load_config(path)?;
    cfg.timeouts.validate()?;
    Ok(cfg)
}

fn parse_yaml(content: &str) -> ConfigResult<GatewayConfig> {
    // serde_yaml rejects an empty document for a struct
    if content.trim().is_empty() {
        return Ok(GatewayConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
