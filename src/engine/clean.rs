// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::model::Line;
use crate::engine::passes::{apply_all, INLINE_UNWRAP};

const HEADER_PREFIXES: [&str; 3] = ["# ", "## ", "### "];
const BULLET_PREFIXES: [&str; 2] = ["* ", "- "];

/// Split `text` into cleaned lines with structural and inline markers removed.
///
/// Only the raw line is trimmed. Lines whose content ends up empty are dropped, so blank
/// input lines and bare markers never appear in the output; whitespace left between
/// markers is kept.
pub fn clean_markdown(text: &str) -> Vec<Line> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n').filter_map(clean_line).collect()
}

fn clean_line(raw: &str) -> Option<Line> {
    let trimmed = raw.trim();
    let (rest, is_header) = strip_header_marker(trimmed);

    let (rest, is_bullet) = match BULLET_PREFIXES.iter().find(|p| rest.starts_with(*p)) {
        Some(prefix) => (&rest[prefix.len()..], true),
        None => (rest, false),
    };

    let content = apply_all(&INLINE_UNWRAP, rest);
    if content.is_empty() {
        return None;
    }

    Some(Line {
        content,
        is_header,
        is_bullet,
    })
}

/// First matching structural marker wins: a full `**...**` wrap, then `#`, `##`, `###`.
fn strip_header_marker(line: &str) -> (&str, bool) {
    if line.starts_with("**") && line.ends_with("**") {
        // "**" and "***" overlap their own markers and leave nothing inside
        let inner = line.get(2..line.len().saturating_sub(2)).unwrap_or("");
        return (inner, true);
    }

    match HEADER_PREFIXES.iter().find(|p| line.starts_with(*p)) {
        Some(prefix) => (&line[prefix.len()..], true),
        None => (line, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_paragraph_with_blank_line() {
        let lines = clean_markdown("# Title\n\nSome **bold** and *italic* text.");
        assert_eq!(
            lines,
            vec![
                Line::header("Title"),
                Line::text("Some bold and italic text."),
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(clean_markdown("").is_empty());
        assert!(clean_markdown("   \n\t\n").is_empty());
    }

    #[test]
    fn plain_lines_are_trimmed_and_unflagged() {
        let lines = clean_markdown("  The Fool  \n\n The Magician\n   \nThe High Priestess");
        assert_eq!(
            lines,
            vec![
                Line::text("The Fool"),
                Line::text("The Magician"),
                Line::text("The High Priestess"),
            ]
        );
    }

    #[test]
    fn header_levels_are_detected() {
        let lines = clean_markdown("# One\n## Two\n### Three\n#### Four");
        assert!(lines[0].is_header && lines[0].content == "One");
        assert!(lines[1].is_header && lines[1].content == "Two");
        assert!(lines[2].is_header && lines[2].content == "Three");
        assert!(!lines[3].is_header);
        assert_eq!(lines[3].content, "#### Four");
    }

    #[test]
    fn bold_wrapped_line_is_a_header() {
        let lines = clean_markdown("**Past, Present, Future**");
        assert_eq!(lines, vec![Line::header("Past, Present, Future")]);
    }

    #[test]
    fn bullets_are_stripped_and_flagged() {
        let lines = clean_markdown("* Cups\n- Wands\n*Swords*");
        assert_eq!(lines[0], Line::bullet("Cups"));
        assert_eq!(lines[1], Line::bullet("Wands"));
        assert_eq!(lines[2], Line::text("Swords"));
    }

    #[test]
    fn header_marker_then_bullet_marker_both_apply() {
        let lines = clean_markdown("# - Pentacles");
        assert_eq!(
            lines,
            vec![Line {
                content: "Pentacles".to_string(),
                is_header: true,
                is_bullet: true,
            }]
        );
    }

    #[test]
    fn links_code_and_strikethrough_are_unwrapped() {
        let lines = clean_markdown("See [the deck](https://example.com), `shuffle()` and ~~not this~~.");
        assert_eq!(lines[0].content, "See the deck, shuffle() and not this.");
    }

    #[test]
    fn markers_with_nothing_inside_are_dropped() {
        assert!(clean_markdown("**").is_empty());
        assert!(clean_markdown("***").is_empty());
        assert!(clean_markdown("# **").is_empty());
        assert!(clean_markdown("****").is_empty());
    }

    #[test]
    fn whitespace_inside_markers_is_preserved() {
        assert_eq!(
            clean_markdown("**  The Tower  **\n-  Cups"),
            vec![Line::header("  The Tower  "), Line::bullet(" Cups")]
        );
        assert_eq!(clean_markdown("**  **"), vec![Line::header("  ")]);
    }

    #[test]
    fn bare_marker_without_space_is_kept_as_text() {
        assert_eq!(clean_markdown("-"), vec![Line::text("-")]);
        assert_eq!(clean_markdown("# "), vec![Line::text("#")]);
    }

    #[test]
    fn unicode_content_survives() {
        let lines = clean_markdown("## Arcanos *mayores* ✨");
        assert_eq!(lines, vec![Line::header("Arcanos mayores ✨")]);
    }
}
