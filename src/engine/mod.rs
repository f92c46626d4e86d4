// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Markdown text engine.
//!
//! Pure synchronous functions over a constrained Markdown dialect. Nothing
//! here allocates shared state or performs I/O; the offload gateway runs these inside
//! a background worker and the worker dispatcher calls them directly.
//!
//! The dialect is handled by flat ordered regex passes (see [`passes`]), not a parser:
//! nested formatting, tables and blockquotes are not recognized.

pub mod analysis;
pub mod clean;
pub mod headers;
pub mod html;
pub mod model;
pub mod passes;
pub mod stats;
pub mod strip;

pub use analysis::analyze_text;
pub use clean::clean_markdown;
pub use headers::extract_headers;
pub use html::markdown_to_html;
pub use model::{Analysis, Header, Line};
pub use stats::{count_words, estimate_reading_time};
pub use strip::strip_markdown;
