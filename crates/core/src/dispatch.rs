// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serialized execution context for document access.
//!
//! Network work runs on the tokio runtime. Document reads and writes are
//! submitted to a [`DocumentExecutor`], which runs them one at a time on a
//! dedicated thread, in submission order.

use std::thread;

use tokio::sync::{mpsc, oneshot};

use crate::error::{Error, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Handle to the document thread. Cheap to clone.
///
/// The thread exits once every handle has been dropped and the queue is drained.
#[derive(Debug, Clone)]
pub struct DocumentExecutor {
    sender: mpsc::UnboundedSender<Job>,
}

impl DocumentExecutor {
    /// Starts the document thread.
    pub fn spawn() -> Result<Self> {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();
        thread::Builder::new()
            .name("tds-document".to_string())
            .spawn(move || {
                while let Some(job) = receiver.blocking_recv() {
                    job();
                }
                tracing::debug!("document executor stopped");
            })?;
        Ok(DocumentExecutor { sender })
    }

    /// Runs `job` on the document thread and waits for its result.
    pub async fn run<F, R>(&self, job: F) -> Result<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (reply, result) = oneshot::channel();
        self.sender
            .send(Box::new(move || {
                let _ = reply.send(job());
            }))
            .map_err(|_| Error::ExecutorClosed)?;
        result.await.map_err(|_| Error::ExecutorClosed)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
