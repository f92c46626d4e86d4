// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::backends::thread::dispatch::{handle_envelope, WorkerStep};
use crate::config::consts::DEFAULT_WORKER_THREAD_NAME;
use crate::config::WorkerConfig;
use crate::errors::TransportError;
use crate::observability::messages::worker::{WorkerStarted, WorkerStopped};
use crate::observability::messages::StructuredLog;
use crate::traits::{WorkerHandle, WorkerSpawner};

/// Spawns the worker loop on a dedicated, named OS thread.
pub struct ThreadWorkerSpawner {
    thread_name: String,
}

impl ThreadWorkerSpawner {
    pub fn new(thread_name: impl Into<String>) -> Self {
        Self {
            thread_name: thread_name.into(),
        }
    }

    pub fn from_config(config: &WorkerConfig) -> Self {
        Self::new(config.get_thread_name())
    }
}

impl Default for ThreadWorkerSpawner {
    fn default() -> Self {
        Self::new(DEFAULT_WORKER_THREAD_NAME)
    }
}

impl WorkerSpawner for ThreadWorkerSpawner {
    fn spawn(&self, outbox: UnboundedSender<String>) -> Result<Box<dyn WorkerHandle>, TransportError> {
        let (sender, inbox) = unbounded_channel::<String>();
        let worker_name = self.thread_name.clone();

        let thread = thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || run_worker(&worker_name, inbox, outbox))?;

        Ok(Box::new(ThreadWorkerHandle {
            sender: Mutex::new(Some(sender)),
            thread: Mutex::new(Some(thread)),
        }))
    }

    fn name(&self) -> &'static str {
        "thread"
    }
}

/// Handle to a running worker thread.
///
/// Terminating closes the inbox; the thread exits once its in-flight message (if any)
/// finishes. The caller is never blocked waiting for it.
struct ThreadWorkerHandle {
    sender: Mutex<Option<UnboundedSender<String>>>,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl WorkerHandle for ThreadWorkerHandle {
    fn post_message(&self, envelope: String) -> Result<(), TransportError> {
        match lock(&self.sender).as_ref() {
            Some(sender) => sender
                .send(envelope)
                .map_err(|_| TransportError::Disconnected),
            None => Err(TransportError::Terminated),
        }
    }

    fn terminate(&self) {
        lock(&self.sender).take();

        if let Some(thread) = lock(&self.thread).take() {
            if thread.is_finished() {
                let _ = thread.join();
            }
        }
    }
}

impl Drop for ThreadWorkerHandle {
    fn drop(&mut self) {
        self.terminate();
    }
}

/// One message at a time, to completion, until `STOP` or a closed inbox.
///
/// Runs on a plain OS thread, so the inbox is drained with `blocking_recv`.
fn run_worker(name: &str, mut inbox: UnboundedReceiver<String>, outbox: UnboundedSender<String>) {
    WorkerStarted { worker: name }.log();

    let mut handled = 0;
    while let Some(envelope) = inbox.blocking_recv() {
        handled += 1;
        match handle_envelope(&envelope) {
            WorkerStep::Reply(reply) => {
                if outbox.send(reply).is_err() {
                    break;
                }
            }
            WorkerStep::Stop => break,
        }
    }

    WorkerStopped {
        worker: name,
        handled,
    }
    .log();
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{OperationKind, WorkerMessage, WorkerRequest};
    use std::time::Duration;
    use tokio::time::timeout;

    const WAIT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn worker_thread_answers_requests_in_order() {
        let (outbox, mut replies) = unbounded_channel();
        let handle = ThreadWorkerSpawner::default().spawn(outbox).unwrap();

        for id in 1..=3 {
            let request = WorkerRequest::new(OperationKind::StripMarkdown, id, "**bold**");
            handle.post_message(request.to_envelope().unwrap()).unwrap();
        }

        for id in 1..=3 {
            let reply = timeout(WAIT, replies.recv()).await.unwrap().unwrap();
            let message = WorkerMessage::from_envelope(&reply).unwrap();
            assert_eq!(message.request_id(), Some(id));
        }

        handle.terminate();
    }

    #[tokio::test]
    async fn stop_ends_the_worker_thread() {
        let (outbox, mut replies) = unbounded_channel();
        let handle = ThreadWorkerSpawner::new("stop-test").spawn(outbox).unwrap();

        handle.post_message(WorkerRequest::Stop.to_envelope().unwrap()).unwrap();

        // the outbox sender is dropped when the thread exits
        let closed = timeout(WAIT, replies.recv()).await.unwrap();
        assert!(closed.is_none());
    }

    #[tokio::test]
    async fn terminate_closes_the_worker_and_rejects_posts() {
        let (outbox, mut replies) = unbounded_channel();
        let handle = ThreadWorkerSpawner::default().spawn(outbox).unwrap();

        handle.terminate();
        handle.terminate();

        assert!(matches!(
            handle.post_message("{}".to_string()),
            Err(TransportError::Terminated)
        ));
        let closed = timeout(WAIT, replies.recv()).await.unwrap();
        assert!(closed.is_none());
    }

    #[tokio::test]
    async fn unknown_messages_get_an_error_reply() {
        let (outbox, mut replies) = unbounded_channel();
        let handle = ThreadWorkerSpawner::default().spawn(outbox).unwrap();

        handle
            .post_message(r#"{"type":"READ_PALM","payload":{"requestId":1}}"#.to_string())
            .unwrap();

        let reply = timeout(WAIT, replies.recv()).await.unwrap().unwrap();
        assert_eq!(
            WorkerMessage::from_envelope(&reply).unwrap(),
            WorkerMessage::error("Unknown message type: READ_PALM")
        );
        handle.terminate();
    }

    #[test]
    fn thread_name_comes_from_config() {
        let spawner = ThreadWorkerSpawner::from_config(&WorkerConfig {
            thread_name: Some("oracle".to_string()),
        });
        assert_eq!(spawner.thread_name, "oracle");
        assert_eq!(ThreadWorkerSpawner::default().thread_name, DEFAULT_WORKER_THREAD_NAME);
    }
}
