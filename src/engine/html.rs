// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::passes::{apply_all, HTML, LIST_RUN};

/// Render the dialect to an HTML fragment.
///
/// Content is NOT escaped. Only the first run of adjacent list items is wrapped in
/// `<ul>`; later runs are emitted as bare `<li>` elements.
pub fn markdown_to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let html = apply_all(&HTML, text);
    let html = LIST_RUN.replace(&html, |caps: &regex_lite::Captures| {
        format!("<ul>{}</ul>", &caps[0])
    });

    html.replace('\n', "<br>")
}
