use tokio::sync::mpsc::UnboundedSender;

use crate::errors::TransportError;

/// Creates isolated background contexts.
///
/// The spawned worker posts serialized `WorkerMessage` envelopes into `outbox`; the
/// gateway owns the receiving end.
pub trait WorkerSpawner: Send + Sync {
    fn spawn(&self, outbox: UnboundedSender<String>) -> Result<Box<dyn WorkerHandle>, TransportError>;

    fn name(&self) -> &'static str;
}

/// Caller-side handle to one running background context.
pub trait WorkerHandle: Send + Sync {
    /// Deliver a serialized `WorkerRequest` envelope.
    fn post_message(&self, envelope: String) -> Result<(), TransportError>;

    /// Stop accepting messages and release the context. Must be idempotent.
    fn terminate(&self);
}
