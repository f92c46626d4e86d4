// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered `(pattern, replacement)` passes shared by the engine operations.
//!
//! Each pipeline is a flat list applied front to back over the whole text. Order is
//! significant: later passes see the output of earlier ones, so e.g. bold must run
//! before italic and `###` before `#`.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// A single global regex replacement.
pub struct Pass {
    pub name: &'static str,
    regex: Regex,
    replacement: &'static str,
}

impl Pass {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("pass '{}' has an invalid pattern: {}", name, e));
        Self {
            name,
            regex,
            replacement,
        }
    }

    /// Replace every non-overlapping match.
    pub fn apply(&self, text: &str) -> String {
        self.regex.replace_all(text, self.replacement).into_owned()
    }
}

/// Run `passes` in order over `text`.
pub fn apply_all(passes: &[Pass], text: &str) -> String {
    passes
        .iter()
        .fold(text.to_string(), |acc, pass| pass.apply(&acc))
}

/// Inline markers unwrapped to their inner text: bold, italic, code, link, strikethrough.
pub static INLINE_UNWRAP: Lazy<Vec<Pass>> = Lazy::new(|| {
    vec![
        Pass::new("bold", r"\*\*(.*?)\*\*", "${1}"),
        Pass::new("italic", r"\*(.*?)\*", "${1}"),
        Pass::new("inline_code", r"`(.*?)`", "${1}"),
        Pass::new("link", r"\[(.*?)\]\(.*?\)", "${1}"),
        Pass::new("strikethrough", r"~~(.*?)~~", "${1}"),
    ]
});

/// Plain-text projection, applied to the whole document.
pub static STRIP: Lazy<Vec<Pass>> = Lazy::new(|| {
    vec![
        Pass::new("heading_prefix", r"(?mR)^#{1,6}\s+", ""),
        Pass::new("bold", r"\*\*(.*?)\*\*", "${1}"),
        Pass::new("italic", r"\*(.*?)\*", "${1}"),
        Pass::new("inline_code", r"`(.*?)`", "${1}"),
        Pass::new("link", r"\[(.*?)\]\(.*?\)", "${1}"),
        Pass::new("strikethrough", r"~~(.*?)~~", "${1}"),
        Pass::new("bullet_prefix", r"(?mR)^[*-]\s+", ""),
    ]
});

/// HTML projection up to and including `<li>` conversion. List wrapping and line
/// breaks are handled by `html::markdown_to_html` since they are not plain replacements.
///
/// Line-anchored passes run in CRLF mode so a trailing `\r` stays outside the tags.
pub static HTML: Lazy<Vec<Pass>> = Lazy::new(|| {
    vec![
        Pass::new("h3", r"(?mR)^### (.*)$", "<h3>${1}</h3>"),
        Pass::new("h2", r"(?mR)^## (.*)$", "<h2>${1}</h2>"),
        Pass::new("h1", r"(?mR)^# (.*)$", "<h1>${1}</h1>"),
        Pass::new("bold", r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        Pass::new("italic", r"\*(.*?)\*", "<em>${1}</em>"),
        Pass::new("inline_code", r"`(.*?)`", "<code>${1}</code>"),
        Pass::new("link", r"\[(.*?)\]\((.*?)\)", "<a href=\"${2}\">${1}</a>"),
        Pass::new("list_item", r"(?mR)^[*-] (.*)$", "<li>${1}</li>"),
    ]
});

/// First run of adjacent `<li>` lines.
pub static LIST_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?R)(?:<li>.*</li>\r?\n?)+")
        .unwrap_or_else(|e| panic!("list run pattern is invalid: {}", e))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pipelines_compile() {
        assert_eq!(INLINE_UNWRAP.len(), 5);
        assert_eq!(STRIP.len(), 7);
        assert_eq!(HTML.len(), 8);
        assert!(LIST_RUN.is_match("<li>a</li>"));
    }

    #[test]
    fn inline_passes_run_in_declared_order() {
        let names: Vec<_> = INLINE_UNWRAP.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["bold", "italic", "inline_code", "link", "strikethrough"]
        );
    }

    #[test]
    fn bold_runs_before_italic() {
        assert_eq!(apply_all(&INLINE_UNWRAP, "**The Tower**"), "The Tower");
        assert_eq!(apply_all(&INLINE_UNWRAP, "*The Star*"), "The Star");
    }

    #[test]
    fn matches_are_non_greedy_and_global() {
        assert_eq!(apply_all(&INLINE_UNWRAP, "`a` and `b`"), "a and b");
        assert_eq!(
            apply_all(&INLINE_UNWRAP, "[one](x) [two](y)"),
            "one two"
        );
    }
}
