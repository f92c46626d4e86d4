// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::model::Header;

/// Collect headings in document order, at most one per line.
pub fn extract_headers(text: &str) -> Vec<Header> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .enumerate()
        .filter_map(|(line_number, raw)| header_for(raw.trim(), line_number))
        .collect()
}

fn header_for(line: &str, line_number: usize) -> Option<Header> {
    if let Some(text) = line.strip_prefix("# ") {
        return Some(Header::new(1, text, line_number));
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Some(Header::new(2, text, line_number));
    }
    if let Some(text) = line.strip_prefix("### ") {
        return Some(Header::new(3, text, line_number));
    }

    if line.starts_with("**") && line.ends_with("**") {
        // "**" and "***" overlap their own markers and leave an empty heading
        let text = line.get(2..line.len().saturating_sub(2)).unwrap_or("");
        return Some(Header::new(2, text, line_number));
    }

    None
}
