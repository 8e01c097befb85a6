//! # Background Persistence
//!
//! Every mutation of a state container hands a full snapshot to a
//! [`Persister`] and returns immediately. The persister owns one worker thread
//! fed by a channel, so snapshots for the same store are written strictly in
//! submission order and never overlap. Last write wins.
//!
//! There is no cancellation and no retry: a failed write is logged by the
//! store and the next snapshot simply replaces it.
//!
//! Dropping a persister closes the channel, lets the worker drain whatever is
//! still queued, and joins it. Accepted snapshots therefore reach the store
//! before the owner goes away.

use crate::error::{Result, TodoError};
use log::{debug, error};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

enum Job<T> {
    Write(T),
    Flush(Sender<()>),
}

/// Single-writer FIFO queue for one store.
pub struct Persister<T: Send + 'static> {
    name: String,
    tx: Option<Sender<Job<T>>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Persister<T> {
    /// Starts the worker. `sink` runs on the worker thread, once per snapshot.
    pub fn spawn<F>(name: &str, mut sink: F) -> Result<Self>
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Job<T>>();
        let worker = thread::Builder::new()
            .name(format!("persist-{}", name))
            .spawn(move || {
                for job in rx {
                    match job {
                        Job::Write(snapshot) => sink(snapshot),
                        Job::Flush(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
            })
            .map_err(TodoError::Io)?;

        debug!("Started persist worker for {}", name);
        Ok(Self {
            name: name.to_string(),
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// Queues a snapshot. Never blocks on I/O.
    pub fn submit(&self, snapshot: T) {
        let sent = self
            .tx
            .as_ref()
            .map(|tx| tx.send(Job::Write(snapshot)).is_ok())
            .unwrap_or(false);
        if !sent {
            error!("Persist worker for {} is gone, dropping snapshot", self.name);
        }
    }

    /// Blocks until every snapshot submitted before this call has been handled.
    pub fn flush(&self) {
        let Some(tx) = self.tx.as_ref() else {
            return;
        };
        let (ack_tx, ack_rx) = mpsc::channel();
        if tx.send(Job::Flush(ack_tx)).is_err() {
            error!("Persist worker for {} is gone, cannot flush", self.name);
            return;
        }
        // Err here means the worker died while draining; nothing left to wait for
        let _ = ack_rx.recv();
    }
}

impl<T: Send + 'static> Drop for Persister<T> {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the queue is drained
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Persist worker for {} panicked", self.name);
            }
        }
    }
}
