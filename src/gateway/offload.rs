// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;

use crate::config::{GatewayConfig, TimeoutConfig};
use crate::engine::{Analysis, Header, Line};
use crate::errors::{GatewayError, GatewayResult};
use crate::gateway::fallback;
use crate::gateway::pending::PendingRegistry;
use crate::gateway::state::GatewayState;
use crate::observability::messages::gateway::{
    GatewayDisposed, GatewayFallback, GatewayReady, LateResponseIgnored, MalformedWorkerMessage,
    MismatchedResponse, RequestCompleted, RequestDispatched, RequestTimedOut, StopNotDelivered,
    WorkerFaultReported,
};
use crate::observability::messages::StructuredLog;
use crate::proto::{OperationKind, WorkerMessage, WorkerRequest};
use crate::traits::{TextOffload, WorkerHandle, WorkerSpawner};

/// Runs engine operations in one background worker, correlating replies by request id.
///
/// All waiting is event driven: a call suspends on a oneshot receiver bounded by the
/// operation's deadline and never blocks a thread.
///
/// Responses to concurrent calls are delivered in the worker's completion order, which
/// is not necessarily issuance order; each caller still receives its own result.
///
/// # Disposal
///
/// [`dispose`](Self::dispose) is idempotent and also runs on drop. It sends `STOP`,
/// terminates the worker and rejects every outstanding call with
/// [`GatewayError::Disposed`]. Calls made afterwards fail with the same error.
pub struct OffloadGateway {
    state: Mutex<GatewayState>,
    worker: Mutex<Option<Box<dyn WorkerHandle>>>,
    router: Mutex<Option<JoinHandle<()>>>,
    pending: Arc<PendingRegistry>,
    next_request_id: AtomicU64,
    timeouts: TimeoutConfig,
}

/// Where a call is served.
enum Route {
    Worker,
    Fallback,
}

impl OffloadGateway {
    /// Create the gateway and its worker.
    ///
    /// Must be called from within a tokio runtime; the response router is spawned onto
    /// it. A spawn failure leaves the gateway in [`GatewayState::Fallback`].
    pub fn start(spawner: &dyn WorkerSpawner, config: GatewayConfig) -> Self {
        let gateway = Self {
            state: Mutex::new(GatewayState::Uninitialized),
            worker: Mutex::new(None),
            router: Mutex::new(None),
            pending: Arc::new(PendingRegistry::new()),
            next_request_id: AtomicU64::new(1),
            timeouts: config.timeouts,
        };
        gateway.initialize(spawner);
        gateway
    }

    fn initialize(&self, spawner: &dyn WorkerSpawner) {
        self.set_state(GatewayState::Initializing);

        let (outbox, inbox) = unbounded_channel();
        match spawner.spawn(outbox) {
            Ok(worker) => {
                let router = tokio::spawn(route_responses(inbox, self.pending.clone()));
                *lock(&self.worker) = Some(worker);
                *lock(&self.router) = Some(router);
                self.set_state(GatewayState::Ready);
                GatewayReady {
                    worker: spawner.name(),
                }
                .log();
            }
            Err(e) => {
                GatewayFallback { error: &e }.log();
                self.set_state(GatewayState::Fallback);
            }
        }
    }

    pub fn state(&self) -> GatewayState {
        *lock(&self.state)
    }

    /// Number of calls currently waiting for the worker.
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    /// Run `kind` over `text` and return its completion message.
    ///
    /// The typed operations below unwrap the matching completion. In fallback mode the
    /// completion is built locally and carries request id 0.
    pub async fn submit(&self, kind: OperationKind, text: &str) -> GatewayResult<WorkerMessage> {
        match self.route()? {
            Route::Worker => self.dispatch(kind, text).await,
            Route::Fallback => Ok(fallback::complete(kind, text)),
        }
    }

    pub async fn clean_markdown(&self, text: &str) -> GatewayResult<Vec<Line>> {
        match self.submit(OperationKind::CleanMarkdown, text).await? {
            WorkerMessage::CleanMarkdownComplete { cleaned_lines, .. } => Ok(cleaned_lines),
            other => Err(unexpected(OperationKind::CleanMarkdown, &other)),
        }
    }

    pub async fn extract_headers(&self, text: &str) -> GatewayResult<Vec<Header>> {
        match self.submit(OperationKind::ExtractHeaders, text).await? {
            WorkerMessage::ExtractHeadersComplete { headers, .. } => Ok(headers),
            other => Err(unexpected(OperationKind::ExtractHeaders, &other)),
        }
    }

    pub async fn markdown_to_html(&self, text: &str) -> GatewayResult<String> {
        match self.submit(OperationKind::MarkdownToHtml, text).await? {
            WorkerMessage::MarkdownToHtmlComplete { html, .. } => Ok(html),
            other => Err(unexpected(OperationKind::MarkdownToHtml, &other)),
        }
    }

    pub async fn strip_markdown(&self, text: &str) -> GatewayResult<String> {
        match self.submit(OperationKind::StripMarkdown, text).await? {
            WorkerMessage::StripMarkdownComplete { plain_text, .. } => Ok(plain_text),
            other => Err(unexpected(OperationKind::StripMarkdown, &other)),
        }
    }

    /// One worker request; the worker composes every projection at the default rate.
    pub async fn analyze_text(&self, text: &str) -> GatewayResult<Analysis> {
        match self.submit(OperationKind::AnalyzeText, text).await? {
            WorkerMessage::AnalyzeTextComplete { analysis, .. } => Ok(analysis),
            other => Err(unexpected(OperationKind::AnalyzeText, &other)),
        }
    }

    /// Tear down the worker and reject outstanding calls. Idempotent.
    pub fn dispose(&self) {
        {
            let mut state = lock(&self.state);
            if *state == GatewayState::Disposed {
                return;
            }
            *state = GatewayState::Disposed;
        }

        let worker = lock(&self.worker).take();
        if let Some(worker) = worker {
            if let Ok(stop) = WorkerRequest::Stop.to_envelope() {
                if let Err(e) = worker.post_message(stop) {
                    StopNotDelivered { error: &e }.log();
                }
            }
            worker.terminate();
        }

        let router = lock(&self.router).take();
        if let Some(router) = router {
            router.abort();
        }

        let outstanding = self.pending.drain();
        let rejected_requests = outstanding.len();
        for entry in outstanding {
            entry.resolve(Err(GatewayError::Disposed));
        }

        GatewayDisposed { rejected_requests }.log();
    }

    fn route(&self) -> GatewayResult<Route> {
        let state = self.state();
        if state == GatewayState::Disposed {
            return Err(GatewayError::Disposed);
        }

        if state.uses_worker() {
            Ok(Route::Worker)
        } else {
            Ok(Route::Fallback)
        }
    }

    async fn dispatch(&self, kind: OperationKind, text: &str) -> GatewayResult<WorkerMessage> {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let timeout = self.timeouts.timeout_for(kind);
        let envelope = WorkerRequest::new(kind, request_id, text)
            .to_envelope()
            .map_err(|e| GatewayError::Protocol(e.to_string()))?;

        let (reply, deadline) = self.pending.register(request_id, kind, timeout);

        let posted = match lock(&self.worker).as_ref() {
            Some(worker) => worker.post_message(envelope).map_err(GatewayError::from),
            // disposed between routing and registration
            None => Err(GatewayError::Disposed),
        };
        if let Err(e) = posted {
            self.pending.take(request_id);
            return Err(e);
        }

        RequestDispatched {
            request_id,
            operation: kind,
            input_size: text.len(),
            timeout,
        }
        .log();

        match tokio::time::timeout_at(deadline, reply).await {
            Ok(Ok(outcome)) => outcome,
            // sender dropped without an outcome, only possible while tearing down
            Ok(Err(_)) => Err(GatewayError::Disposed),
            Err(_) => {
                self.pending.take(request_id);
                RequestTimedOut {
                    request_id,
                    operation: kind,
                    after: timeout,
                }
                .log();
                Err(GatewayError::Timeout {
                    operation: kind,
                    after: timeout,
                })
            }
        }
    }

    fn set_state(&self, state: GatewayState) {
        *lock(&self.state) = state;
    }
}

impl Drop for OffloadGateway {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[async_trait]
impl TextOffload for OffloadGateway {
    async fn submit(&self, kind: OperationKind, text: &str) -> GatewayResult<WorkerMessage> {
        OffloadGateway::submit(self, kind, text).await
    }

    async fn clean_markdown(&self, text: &str) -> GatewayResult<Vec<Line>> {
        OffloadGateway::clean_markdown(self, text).await
    }

    async fn extract_headers(&self, text: &str) -> GatewayResult<Vec<Header>> {
        OffloadGateway::extract_headers(self, text).await
    }

    async fn markdown_to_html(&self, text: &str) -> GatewayResult<String> {
        OffloadGateway::markdown_to_html(self, text).await
    }

    async fn strip_markdown(&self, text: &str) -> GatewayResult<String> {
        OffloadGateway::strip_markdown(self, text).await
    }

    async fn analyze_text(&self, text: &str) -> GatewayResult<Analysis> {
        OffloadGateway::analyze_text(self, text).await
    }

    fn dispose(&self) {
        OffloadGateway::dispose(self)
    }
}

async fn route_responses(mut inbox: UnboundedReceiver<String>, pending: Arc<PendingRegistry>) {
    while let Some(envelope) = inbox.recv().await {
        route_envelope(&pending, &envelope);
    }
}

/// Validate one inbound envelope and resolve the matching pending entry, if any.
fn route_envelope(pending: &PendingRegistry, envelope: &str) {
    let message = match WorkerMessage::from_envelope(envelope) {
        Ok(message) => message,
        Err(e) => {
            MalformedWorkerMessage { error: &e }.log();
            return;
        }
    };

    if let WorkerMessage::Error { error, stack } = &message {
        WorkerFaultReported {
            error,
            stack: stack.as_deref(),
        }
        .log();
        return;
    }

    let Some(request_id) = message.request_id() else {
        return;
    };
    let Some(entry) = pending.take(request_id) else {
        LateResponseIgnored {
            request_id,
            tag: message.tag(),
        }
        .log();
        return;
    };

    if message.operation() != Some(entry.kind) {
        MismatchedResponse {
            request_id,
            expected: entry.kind,
            received: message.tag(),
        }
        .log();
        let expected = entry.kind;
        entry.resolve(Err(GatewayError::UnexpectedResponse {
            expected,
            received: message.tag().to_string(),
        }));
        return;
    }

    RequestCompleted {
        request_id,
        operation: entry.kind,
        worker_duration_ms: message.duration_ms().unwrap_or_default(),
    }
    .log();
    entry.resolve(Ok(message));
}

fn unexpected(expected: OperationKind, received: &WorkerMessage) -> GatewayError {
    GatewayError::UnexpectedResponse {
        expected,
        received: received.tag().to_string(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
