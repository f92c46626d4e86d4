// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// One line of cleaned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub content: String,
    pub is_header: bool,
    pub is_bullet: bool,
}

impl Line {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_header: false,
            is_bullet: false,
        }
    }

    pub fn header(content: impl Into<String>) -> Self {
        Self {
            is_header: true,
            ..Self::text(content)
        }
    }

    pub fn bullet(content: impl Into<String>) -> Self {
        Self {
            is_bullet: true,
            ..Self::text(content)
        }
    }
}

/// A recognized heading.
///
/// `line_number` is the zero-based index into the newline split of the input,
/// not into the cleaned output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub level: u8,
    pub text: String,
    pub line_number: usize,
}

impl Header {
    pub fn new(level: u8, text: impl Into<String>, line_number: usize) -> Self {
        Self {
            level,
            text: text.into(),
            line_number,
        }
    }
}

/// Aggregate statistics plus the structural projections of one input.
///
/// `Analysis::default()` is the zeroed result returned when no worker is available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub word_count: usize,
    /// Minutes, rounded up.
    pub reading_time: usize,
    pub header_count: usize,
    /// Number of non-empty cleaned lines.
    pub line_count: usize,
    pub headers: Vec<Header>,
    pub cleaned: Vec<Line>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_serializes_with_camel_case_flags() {
        let json = serde_json::to_value(Line::bullet("item")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"content": "item", "isHeader": false, "isBullet": true})
        );
    }

    #[test]
    fn header_serializes_line_number_in_camel_case() {
        let json = serde_json::to_value(Header::new(2, "Cards", 4)).unwrap();
        assert_eq!(json["lineNumber"], 4);
        assert_eq!(json["level"], 2);
    }

    #[test]
    fn default_analysis_is_zeroed() {
        let analysis = Analysis::default();
        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.reading_time, 0);
        assert_eq!(analysis.header_count, 0);
        assert_eq!(analysis.line_count, 0);
        assert!(analysis.headers.is_empty());
        assert!(analysis.cleaned.is_empty());
    }
}
