use async_trait::async_trait;

use crate::engine::{Analysis, Header, Line};
use crate::errors::GatewayResult;
use crate::proto::{OperationKind, WorkerMessage};

/// Asynchronous access to the text engine without blocking the calling task.
#[async_trait]
pub trait TextOffload: Send + Sync {
    /// Run any operation and return its completion message.
    async fn submit(&self, kind: OperationKind, text: &str) -> GatewayResult<WorkerMessage>;

    async fn clean_markdown(&self, text: &str) -> GatewayResult<Vec<Line>>;

    async fn extract_headers(&self, text: &str) -> GatewayResult<Vec<Header>>;

    async fn markdown_to_html(&self, text: &str) -> GatewayResult<String>;

    async fn strip_markdown(&self, text: &str) -> GatewayResult<String>;

    /// Word count, reading time at the default rate, headers and cleaned lines at once.
    async fn analyze_text(&self, text: &str) -> GatewayResult<Analysis>;

    /// Release the background context. Safe to call more than once.
    fn dispose(&self);
}
