/// Reading rate used by `analyze_text` and as the fallback for a zero rate
pub const DEFAULT_WORDS_PER_MINUTE: usize = 225;
/// Budget for `extract_headers` requests (milliseconds)
pub const EXTRACT_HEADERS_TIMEOUT_MS: u64 = 5_000;
/// Budget for `strip_markdown` requests (milliseconds)
pub const STRIP_MARKDOWN_TIMEOUT_MS: u64 = 5_000;
/// Budget for `clean_markdown` requests (milliseconds)
pub const CLEAN_MARKDOWN_TIMEOUT_MS: u64 = 10_000;
/// Budget for `markdown_to_html` requests (milliseconds)
pub const MARKDOWN_TO_HTML_TIMEOUT_MS: u64 = 10_000;
/// Budget for `analyze_text` requests (milliseconds)
pub const ANALYZE_TEXT_TIMEOUT_MS: u64 = 15_000;
/// Name given to the background worker thread
pub const DEFAULT_WORKER_THREAD_NAME: &str = "scribe-worker";
