// SPDX-License-Identifier: MPL-2.0
//! Execution-context plumbing.
//!
//! Two pieces: a marshaling channel that hands work to the UI-owning thread
//! (with either a fire-and-forget or a blocking rendezvous handoff), and a
//! lazily created shared worker pool for fetches tagged with a scheduling
//! priority hint.

use std::fmt;
use std::sync::mpsc;
use std::sync::OnceLock;

/// A unit of work executed on the UI-owning context.
pub type UiJob = Box<dyn FnOnce() + Send>;

enum Envelope {
    /// Fire-and-forget job.
    Post(UiJob),
    /// Job plus a rendezvous: the sending worker blocks until it has run.
    Rendezvous(UiJob, mpsc::SyncSender<()>),
}

/// Creates the marshaling channel for a UI-owning context.
///
/// The [`UiReceiver`] belongs to whichever thread owns the UI; clones of the
/// [`UiHandle`] travel to worker threads.
#[must_use]
pub fn ui_channel() -> (UiHandle, UiReceiver) {
    let (tx, rx) = mpsc::channel();
    (UiHandle { tx }, UiReceiver { rx })
}

/// Cloneable handle used by workers to queue jobs for the UI context.
#[derive(Clone)]
pub struct UiHandle {
    tx: mpsc::Sender<Envelope>,
}

impl UiHandle {
    /// Queues `job` for the UI context without waiting for it to run.
    pub fn invoke(&self, job: impl FnOnce() + Send + 'static) {
        let _ = self.tx.send(Envelope::Post(Box::new(job)));
    }

    /// Queues `job` and blocks the calling thread until the UI context has
    /// executed it.
    ///
    /// Returns immediately when the UI context has gone away; the job is
    /// dropped unexecuted in that case.
    pub fn invoke_sync(&self, job: impl FnOnce() + Send + 'static) {
        let (done_tx, done_rx) = mpsc::sync_channel(1);
        if self
            .tx
            .send(Envelope::Rendezvous(Box::new(job), done_tx))
            .is_err()
        {
            return;
        }
        let _ = done_rx.recv();
    }
}

/// Receiving end owned by the UI context.
pub struct UiReceiver {
    rx: mpsc::Receiver<Envelope>,
}

impl UiReceiver {
    /// Executes every currently queued job on the calling thread, in arrival
    /// order, releasing any workers blocked in [`UiHandle::invoke_sync`].
    ///
    /// Returns the number of jobs executed.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        while let Ok(envelope) = self.rx.try_recv() {
            match envelope {
                Envelope::Post(job) => job(),
                Envelope::Rendezvous(job, done) => {
                    job();
                    let _ = done.send(());
                }
            }
            ran += 1;
        }
        ran
    }
}

/// Scheduling hint for pooled work.
///
/// The shared pool runs every tier on the same worker threads; the hint tags
/// the dispatch for diagnostics, mirroring platform pools that accept a
/// quality-of-service class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    UserInitiated,
    Utility,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::UserInitiated => write!(f, "user-initiated"),
            Priority::Utility => write!(f, "utility"),
        }
    }
}

fn pool() -> &'static tokio::runtime::Runtime {
    static POOL: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
    POOL.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("shared-pool")
            .build()
            .expect("failed to build shared worker pool")
    })
}

/// Runs `work` on the shared worker pool.
///
/// The pool is created on first use and lives for the rest of the process.
pub fn spawn_pooled(priority: Priority, work: impl FnOnce() + Send + 'static) {
    log::debug!("queueing {priority} work on the shared pool");
    let _ = pool().handle().spawn_blocking(work);
}
