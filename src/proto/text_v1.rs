// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Version 1 of the worker message protocol.
//!
//! Every message is a JSON envelope `{ "type": TAG, "payload": { ... } }`:
//!
//! ```text
//! gateway -> worker   CLEAN_MARKDOWN | EXTRACT_HEADERS | MARKDOWN_TO_HTML
//!                     | STRIP_MARKDOWN | ANALYZE_TEXT    { requestId, text, wordsPerMinute? }
//!                     STOP
//! worker  -> gateway  <TAG>_COMPLETE                     { requestId, <result>, duration }
//!                     ERROR                              { error, stack? }
//! ```
//!
//! `ERROR` is never correlated to a request id.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::{Analysis, Header, Line};

/// The five offloadable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CleanMarkdown,
    ExtractHeaders,
    MarkdownToHtml,
    StripMarkdown,
    AnalyzeText,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::CleanMarkdown,
        OperationKind::ExtractHeaders,
        OperationKind::MarkdownToHtml,
        OperationKind::StripMarkdown,
        OperationKind::AnalyzeText,
    ];

    /// Request tag on the wire.
    pub fn tag(&self) -> &'static str {
        match self {
            OperationKind::CleanMarkdown => "CLEAN_MARKDOWN",
            OperationKind::ExtractHeaders => "EXTRACT_HEADERS",
            OperationKind::MarkdownToHtml => "MARKDOWN_TO_HTML",
            OperationKind::StripMarkdown => "STRIP_MARKDOWN",
            OperationKind::AnalyzeText => "ANALYZE_TEXT",
        }
    }

    /// Completion tag on the wire.
    pub fn completion_tag(&self) -> &'static str {
        match self {
            OperationKind::CleanMarkdown => "CLEAN_MARKDOWN_COMPLETE",
            OperationKind::ExtractHeaders => "EXTRACT_HEADERS_COMPLETE",
            OperationKind::MarkdownToHtml => "MARKDOWN_TO_HTML_COMPLETE",
            OperationKind::StripMarkdown => "STRIP_MARKDOWN_COMPLETE",
            OperationKind::AnalyzeText => "ANALYZE_TEXT_COMPLETE",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::CleanMarkdown => "clean_markdown",
            OperationKind::ExtractHeaders => "extract_headers",
            OperationKind::MarkdownToHtml => "markdown_to_html",
            OperationKind::StripMarkdown => "strip_markdown",
            OperationKind::AnalyzeText => "analyze_text",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Request payload shared by every operation.
///
/// A missing or `null` `text` is treated as the empty string by the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPayload {
    pub request_id: u64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_per_minute: Option<usize>,
}

impl TextPayload {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Gateway to worker messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerRequest {
    CleanMarkdown(TextPayload),
    ExtractHeaders(TextPayload),
    MarkdownToHtml(TextPayload),
    StripMarkdown(TextPayload),
    AnalyzeText(TextPayload),
    Stop,
}

impl WorkerRequest {
    pub fn new(kind: OperationKind, request_id: u64, text: &str) -> Self {
        let payload = TextPayload {
            request_id,
            text: Some(text.to_string()),
            words_per_minute: None,
        };

        match kind {
            OperationKind::CleanMarkdown => WorkerRequest::CleanMarkdown(payload),
            OperationKind::ExtractHeaders => WorkerRequest::ExtractHeaders(payload),
            OperationKind::MarkdownToHtml => WorkerRequest::MarkdownToHtml(payload),
            OperationKind::StripMarkdown => WorkerRequest::StripMarkdown(payload),
            OperationKind::AnalyzeText => WorkerRequest::AnalyzeText(payload),
        }
    }

    /// `None` for `STOP`.
    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            WorkerRequest::CleanMarkdown(_) => Some(OperationKind::CleanMarkdown),
            WorkerRequest::ExtractHeaders(_) => Some(OperationKind::ExtractHeaders),
            WorkerRequest::MarkdownToHtml(_) => Some(OperationKind::MarkdownToHtml),
            WorkerRequest::StripMarkdown(_) => Some(OperationKind::StripMarkdown),
            WorkerRequest::AnalyzeText(_) => Some(OperationKind::AnalyzeText),
            WorkerRequest::Stop => None,
        }
    }

    pub fn payload(&self) -> Option<&TextPayload> {
        match self {
            WorkerRequest::CleanMarkdown(p)
            | WorkerRequest::ExtractHeaders(p)
            | WorkerRequest::MarkdownToHtml(p)
            | WorkerRequest::StripMarkdown(p)
            | WorkerRequest::AnalyzeText(p) => Some(p),
            WorkerRequest::Stop => None,
        }
    }

    pub fn to_envelope(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_envelope(envelope: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(envelope)
    }
}

/// Worker to gateway messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum WorkerMessage {
    #[serde(rename = "CLEAN_MARKDOWN_COMPLETE", rename_all = "camelCase")]
    CleanMarkdownComplete {
        request_id: u64,
        cleaned_lines: Vec<Line>,
        duration: f64,
    },
    #[serde(rename = "EXTRACT_HEADERS_COMPLETE", rename_all = "camelCase")]
    ExtractHeadersComplete {
        request_id: u64,
        headers: Vec<Header>,
        duration: f64,
    },
    #[serde(rename = "MARKDOWN_TO_HTML_COMPLETE", rename_all = "camelCase")]
    MarkdownToHtmlComplete {
        request_id: u64,
        html: String,
        duration: f64,
    },
    #[serde(rename = "STRIP_MARKDOWN_COMPLETE", rename_all = "camelCase")]
    StripMarkdownComplete {
        request_id: u64,
        plain_text: String,
        duration: f64,
    },
    #[serde(rename = "ANALYZE_TEXT_COMPLETE", rename_all = "camelCase")]
    AnalyzeTextComplete {
        request_id: u64,
        analysis: Analysis,
        duration: f64,
    },
    /// Unsolicited fault report.
    #[serde(rename = "ERROR")]
    Error {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stack: Option<String>,
    },
}

impl WorkerMessage {
    pub fn error(error: impl Into<String>) -> Self {
        WorkerMessage::Error {
            error: error.into(),
            stack: None,
        }
    }

    pub fn request_id(&self) -> Option<u64> {
        match self {
            WorkerMessage::CleanMarkdownComplete { request_id, .. }
            | WorkerMessage::ExtractHeadersComplete { request_id, .. }
            | WorkerMessage::MarkdownToHtmlComplete { request_id, .. }
            | WorkerMessage::StripMarkdownComplete { request_id, .. }
            | WorkerMessage::AnalyzeTextComplete { request_id, .. } => Some(*request_id),
            WorkerMessage::Error { .. } => None,
        }
    }

    /// Operation this message completes; `None` for `ERROR`.
    pub fn operation(&self) -> Option<OperationKind> {
        match self {
            WorkerMessage::CleanMarkdownComplete { .. } => Some(OperationKind::CleanMarkdown),
            WorkerMessage::ExtractHeadersComplete { .. } => Some(OperationKind::ExtractHeaders),
            WorkerMessage::MarkdownToHtmlComplete { .. } => Some(OperationKind::MarkdownToHtml),
            WorkerMessage::StripMarkdownComplete { .. } => Some(OperationKind::StripMarkdown),
            WorkerMessage::AnalyzeTextComplete { .. } => Some(OperationKind::AnalyzeText),
            WorkerMessage::Error { .. } => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.operation()
            .map(|kind| kind.completion_tag())
            .unwrap_or("ERROR")
    }

    pub fn duration_ms(&self) -> Option<f64> {
        match self {
            WorkerMessage::CleanMarkdownComplete { duration, .. }
            | WorkerMessage::ExtractHeadersComplete { duration, .. }
            | WorkerMessage::MarkdownToHtmlComplete { duration, .. }
            | WorkerMessage::StripMarkdownComplete { duration, .. }
            | WorkerMessage::AnalyzeTextComplete { duration, .. } => Some(*duration),
            WorkerMessage::Error { .. } => None,
        }
    }

    pub fn to_envelope(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_envelope(envelope: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(envelope)
    }
}
