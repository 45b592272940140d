//! Cooperative delayed-task scheduling for the controller
//!
//! The controller posts delayed work (the periodic refresh tick and the
//! auto-hide) through the [`Scheduler`] seam instead of sleeping itself, so
//! the state machine stays deterministic under test.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};


const LOG_TARGET: &str = "mediactl::scheduler";

/// Delayed work the controller can post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerTask {
    /// Periodic position/duration refresh.
    Refresh,
    /// Deferred auto-hide of the control surface.
    Hide,
}

/// Fire-and-forget delayed-task posting on the controller's own thread of
/// execution.
///
/// At most one instance of each task kind is pending: scheduling a kind that
/// is already pending replaces it, and cancelling an absent kind is a no-op,
/// so both calls are always safe to issue redundantly.
pub trait Scheduler: Send {
    /// Posts `task` to fire after `delay`.
    fn schedule(&mut self, task: ControllerTask, delay: Duration);

    /// Removes `task` from the queue if still pending.
    fn cancel(&mut self, task: ControllerTask);
}

/// Production [`Scheduler`] backed by tokio timers.
///
/// Each pending task kind is one spawned sleep-then-send task; replacing or
/// cancelling aborts the spawned task. Firings are delivered over an mpsc
/// channel that the controller run loop drains, which keeps every controller
/// mutation on the single run-loop task.
pub struct TokioScheduler {
    task_tx: mpsc::Sender<ControllerTask>,
    pending: HashMap<ControllerTask, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Creates the scheduler and the receiving end the run loop selects on.
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<ControllerTask>) {
        let (task_tx, task_rx) = mpsc::channel(buffer);
        (
            TokioScheduler {
                task_tx,
                pending: HashMap::new(),
            },
            task_rx,
        )
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, task: ControllerTask, delay: Duration) {
        if let Some(handle) = self.pending.remove(&task) {
            handle.abort();
        }
        trace!(target: LOG_TARGET, ?task, ?delay, "Scheduling delayed task.");
        let task_tx = self.task_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if task_tx.send(task).await.is_err() {
                // Receiver gone means the run loop already shut down.
                trace!(target: LOG_TARGET, ?task, "Dropping fired task, receiver closed.");
            }
        });
        self.pending.insert(task, handle);
    }

    fn cancel(&mut self, task: ControllerTask) {
        if let Some(handle) = self.pending.remove(&task) {
            debug!(target: LOG_TARGET, ?task, "Cancelling pending task.");
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}
