// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Results used when no worker could be created.
//!
//! Only cleaning is computed locally; the other operations return neutral values so
//! the caller still gets a result of the right type.

use crate::engine::{self, Analysis, Header, Line};
use crate::proto::{OperationKind, WorkerMessage};

pub fn clean_markdown(text: &str) -> Vec<Line> {
    engine::clean_markdown(text)
}

pub fn extract_headers(_text: &str) -> Vec<Header> {
    Vec::new()
}

pub fn markdown_to_html(text: &str) -> String {
    text.to_string()
}

pub fn strip_markdown(text: &str) -> String {
    text.to_string()
}

pub fn analyze_text(_text: &str) -> Analysis {
    Analysis::default()
}

/// Local completion for `kind`, shaped like a worker reply with request id 0.
pub fn complete(kind: OperationKind, text: &str) -> WorkerMessage {
    let request_id = 0;
    let duration = 0.0;

    match kind {
        OperationKind::CleanMarkdown => WorkerMessage::CleanMarkdownComplete {
            request_id,
            cleaned_lines: clean_markdown(text),
            duration,
        },
        OperationKind::ExtractHeaders => WorkerMessage::ExtractHeadersComplete {
            request_id,
            headers: extract_headers(text),
            duration,
        },
        OperationKind::MarkdownToHtml => WorkerMessage::MarkdownToHtmlComplete {
            request_id,
            html: markdown_to_html(text),
            duration,
        },
        OperationKind::StripMarkdown => WorkerMessage::StripMarkdownComplete {
            request_id,
            plain_text: strip_markdown(text),
            duration,
        },
        OperationKind::AnalyzeText => WorkerMessage::AnalyzeTextComplete {
            request_id,
            analysis: analyze_text(text),
            duration,
        },
    }
}
