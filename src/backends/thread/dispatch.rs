// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Worker-side message handling, independent of the transport that carries envelopes.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::config::consts::DEFAULT_WORDS_PER_MINUTE;
use crate::engine;
use crate::observability::messages::worker::UnhandledWorkerMessage;
use crate::observability::messages::StructuredLog;
use crate::proto::{OperationKind, TextPayload, WorkerMessage, WorkerRequest};

/// What the worker loop should do after one inbound envelope.
#[derive(Debug, PartialEq)]
pub enum WorkerStep {
    /// Post this envelope back to the gateway.
    Reply(String),
    /// `STOP` received; exit without replying.
    Stop,
}

/// Decode one request envelope, run it and encode the reply.
pub fn handle_envelope(envelope: &str) -> WorkerStep {
    let message = match WorkerRequest::from_envelope(envelope) {
        Ok(WorkerRequest::Stop) => return WorkerStep::Stop,
        Ok(request) => match (request.kind(), request.payload()) {
            (Some(kind), Some(payload)) => execute(kind, payload),
            _ => WorkerMessage::error("Request carries no operation"),
        },
        Err(e) => {
            let reason = describe_decode_failure(envelope, &e);
            UnhandledWorkerMessage { reason: &reason }.log();
            WorkerMessage::error(reason)
        }
    };

    WorkerStep::Reply(encode(&message))
}

/// Run one operation, reporting a panic as an uncorrelated `ERROR`.
pub fn execute(kind: OperationKind, payload: &TextPayload) -> WorkerMessage {
    let started = Instant::now();

    match panic::catch_unwind(AssertUnwindSafe(|| compute(kind, payload, started))) {
        Ok(message) => message,
        Err(cause) => WorkerMessage::Error {
            error: panic_message(cause.as_ref()),
            stack: Some(format!(
                "while handling {} request #{}",
                kind.tag(),
                payload.request_id
            )),
        },
    }
}

fn compute(kind: OperationKind, payload: &TextPayload, started: Instant) -> WorkerMessage {
    let request_id = payload.request_id;
    let text = payload.text();

    match kind {
        OperationKind::CleanMarkdown => {
            let cleaned_lines = engine::clean_markdown(text);
            WorkerMessage::CleanMarkdownComplete {
                request_id,
                cleaned_lines,
                duration: elapsed_ms(started),
            }
        }
        OperationKind::ExtractHeaders => {
            let headers = engine::extract_headers(text);
            WorkerMessage::ExtractHeadersComplete {
                request_id,
                headers,
                duration: elapsed_ms(started),
            }
        }
        OperationKind::MarkdownToHtml => {
            let html = engine::markdown_to_html(text);
            WorkerMessage::MarkdownToHtmlComplete {
                request_id,
                html,
                duration: elapsed_ms(started),
            }
        }
        OperationKind::StripMarkdown => {
            let plain_text = engine::strip_markdown(text);
            WorkerMessage::StripMarkdownComplete {
                request_id,
                plain_text,
                duration: elapsed_ms(started),
            }
        }
        OperationKind::AnalyzeText => {
            let rate = payload.words_per_minute.unwrap_or(DEFAULT_WORDS_PER_MINUTE);
            let analysis = engine::analyze_text(text, rate);
            WorkerMessage::AnalyzeTextComplete {
                request_id,
                analysis,
                duration: elapsed_ms(started),
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

fn describe_decode_failure(envelope: &str, error: &serde_json::Error) -> String {
    let value: serde_json::Value = match serde_json::from_str(envelope) {
        Ok(value) => value,
        Err(_) => return format!("Malformed message: {}", error),
    };

    match value.get("type").and_then(|t| t.as_str()) {
        Some(tag) if tag == "STOP" || OperationKind::from_tag(tag).is_some() => {
            format!("Malformed {} payload: {}", tag, error)
        }
        Some(tag) => format!("Unknown message type: {}", tag),
        None => format!("Message has no type: {}", error),
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}

fn encode(message: &WorkerMessage) -> String {
    message.to_envelope().unwrap_or_else(|e| {
        serde_json::json!({
            "type": "ERROR",
            "payload": { "error": format!("Failed to encode {} reply: {}", message.tag(), e) }
        })
        .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Line;

    fn reply(envelope: &str) -> WorkerMessage {
        match handle_envelope(envelope) {
            WorkerStep::Reply(reply) => WorkerMessage::from_envelope(&reply).unwrap(),
            WorkerStep::Stop => panic!("expected a reply"),
        }
    }

    #[test]
    fn clean_request_echoes_request_id() {
        let envelope = WorkerRequest::new(OperationKind::CleanMarkdown, 41, "# Title\n\nbody")
            .to_envelope()
            .unwrap();

        match reply(&envelope) {
            WorkerMessage::CleanMarkdownComplete {
                request_id,
                cleaned_lines,
                duration,
            } => {
                assert_eq!(request_id, 41);
                assert_eq!(cleaned_lines, vec![Line::header("Title"), Line::text("body")]);
                assert!(duration >= 0.0);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn every_operation_replies_with_its_completion_tag() {
        for kind in OperationKind::ALL {
            let envelope = WorkerRequest::new(kind, 1, "- item").to_envelope().unwrap();
            let message = reply(&envelope);
            assert_eq!(message.operation(), Some(kind));
            assert_eq!(message.request_id(), Some(1));
        }
    }

    #[test]
    fn analyze_honours_explicit_rate() {
        let text = vec!["word"; 300].join(" ");
        let envelope = serde_json::json!({
            "type": "ANALYZE_TEXT",
            "payload": { "requestId": 5, "text": text, "wordsPerMinute": 100 }
        })
        .to_string();

        match reply(&envelope) {
            WorkerMessage::AnalyzeTextComplete { analysis, .. } => {
                assert_eq!(analysis.word_count, 300);
                assert_eq!(analysis.reading_time, 3);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn analyze_defaults_to_standard_rate() {
        let text = vec!["word"; 450].join(" ");
        let envelope = WorkerRequest::new(OperationKind::AnalyzeText, 6, &text)
            .to_envelope()
            .unwrap();

        match reply(&envelope) {
            WorkerMessage::AnalyzeTextComplete { analysis, .. } => assert_eq!(analysis.reading_time, 2),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn null_text_degrades_to_neutral_result() {
        let message = reply(r#"{"type":"STRIP_MARKDOWN","payload":{"requestId":2,"text":null}}"#);
        match message {
            WorkerMessage::StripMarkdownComplete { plain_text, .. } => assert_eq!(plain_text, ""),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn stop_produces_no_reply() {
        assert_eq!(handle_envelope(r#"{"type":"STOP"}"#), WorkerStep::Stop);
    }

    #[test]
    fn unknown_tag_is_reported_as_error() {
        let message = reply(r#"{"type":"SHUFFLE_DECK","payload":{"requestId":1}}"#);
        assert_eq!(message, WorkerMessage::error("Unknown message type: SHUFFLE_DECK"));
    }

    #[test]
    fn malformed_envelopes_are_reported_as_errors() {
        match reply("not json") {
            WorkerMessage::Error { error, .. } => assert!(error.starts_with("Malformed message")),
            other => panic!("unexpected reply: {:?}", other),
        }

        match reply(r#"{"type":"CLEAN_MARKDOWN","payload":{"text":"no id"}}"#) {
            WorkerMessage::Error { error, .. } => {
                assert!(error.starts_with("Malformed CLEAN_MARKDOWN payload"))
            }
            other => panic!("unexpected reply: {:?}", other),
        }

        match reply(r#"{"payload":{}}"#) {
            WorkerMessage::Error { error, .. } => assert!(error.starts_with("Message has no type")),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn panic_payloads_are_described() {
        assert_eq!(panic_message(&"boom"), "boom");
        assert_eq!(panic_message(&"bang".to_string()), "bang");
        assert_eq!(panic_message(&42u8), "worker panicked");
    }
}
