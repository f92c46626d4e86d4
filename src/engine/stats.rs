// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_WORDS_PER_MINUTE;
use crate::engine::strip::strip_markdown;

/// Whitespace-separated tokens of the stripped text.
pub fn count_words(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    strip_markdown(text).split_whitespace().count()
}

/// Whole minutes needed to read `text`, rounded up.
///
/// A rate of zero falls back to [`DEFAULT_WORDS_PER_MINUTE`].
pub fn estimate_reading_time(text: &str, words_per_minute: usize) -> usize {
    let rate = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };

    count_words(text).div_ceil(rate)
}
