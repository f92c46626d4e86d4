// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::passes::{apply_all, STRIP};

/// Plain-text projection with heading, inline and bullet markers removed.
pub fn strip_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    apply_all(&STRIP, text).trim().to_string()
}
