// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::clean::clean_markdown;
use crate::engine::headers::extract_headers;
use crate::engine::model::Analysis;
use crate::engine::stats::{count_words, estimate_reading_time};

/// Every projection of `text` in one bundle.
pub fn analyze_text(text: &str, words_per_minute: usize) -> Analysis {
    let headers = extract_headers(text);
    let cleaned = clean_markdown(text);

    Analysis {
        word_count: count_words(text),
        reading_time: estimate_reading_time(text, words_per_minute),
        header_count: headers.len(),
        line_count: cleaned.len(),
        headers,
        cleaned,
    }
}
