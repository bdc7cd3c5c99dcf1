//! Task group: collective cancellation for spawned work.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;

/// Collects every task spawned by the components of one owning scope so
/// that teardown cancels them as a unit.
///
/// Cancellation is idempotent; a task spawned after cancellation is
/// aborted immediately. Dropping the group cancels it.
pub struct TaskGroup {
    handles: Mutex<Vec<JoinHandle<()>>>,
    cancelled: AtomicBool,
}

impl TaskGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self {
            handles: Mutex::new(Vec::new()),
            cancelled: AtomicBool::new(false),
        }
    }

    /// Spawn a task registered with this group.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(future);

        if self.cancelled.load(Ordering::Acquire) {
            handle.abort();
            return;
        }

        let mut handles = self.handles.lock().expect("task group lock poisoned");
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    /// Abort every registered task. Idempotent.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        let mut handles = self.handles.lock().expect("task group lock poisoned");
        for handle in handles.drain(..) {
            handle.abort();
        }
        tracing::debug!("task group cancelled");
    }

    /// Whether [`TaskGroup::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Default for TaskGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskGroup {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
