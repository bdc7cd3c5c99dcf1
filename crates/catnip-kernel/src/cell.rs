//! Latest-value cell: a single-slot observable.
//!
//! A [`LatestCell`] holds at most one value — the most recently published
//! one — and notifies every observer of it. Late subscribers immediately
//! observe the current value if one exists. Built on
//! [`tokio::sync::watch`], whose single-slot semantics match exactly:
//! a second publish overwrites, never appends.

use tokio::sync::watch;

// ---------------------------------------------------------------------------
// LatestCell
// ---------------------------------------------------------------------------

/// A single-slot holder exposing the most recently published value to all
/// current and future observers.
pub struct LatestCell<T> {
    tx: watch::Sender<Option<T>>,
}

impl<T: Clone + Send + Sync + 'static> LatestCell<T> {
    /// Create an empty cell.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Publish a value, overwriting whatever the slot held before.
    ///
    /// Publishing never fails and never blocks, even with no observers
    /// registered; the value is retained for late subscribers.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(Some(value));
    }

    /// A clone of the current slot value, if any.
    pub fn latest(&self) -> Option<T> {
        self.tx.borrow().clone()
    }

    /// Register an observer.
    ///
    /// If the slot already holds a value, the observer's first
    /// [`LatestObserver::next`] call resolves immediately with it.
    pub fn subscribe(&self) -> LatestObserver<T> {
        let mut rx = self.tx.subscribe();
        if rx.borrow().is_some() {
            rx.mark_changed();
        }
        LatestObserver { rx }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for LatestCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// LatestObserver
// ---------------------------------------------------------------------------

/// An observer handle over a [`LatestCell`].
///
/// Each observer sees values serialized in publish order; if publishes
/// outpace observation, intermediate values are dropped and only the
/// latest is delivered.
pub struct LatestObserver<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T: Clone> LatestObserver<T> {
    /// A clone of the current slot value, without waiting.
    pub fn current(&self) -> Option<T> {
        self.rx.borrow().clone()
    }

    /// Wait for the next value this observer has not yet seen.
    ///
    /// Returns `None` once the cell has been dropped and no further value
    /// can arrive.
    pub async fn next(&mut self) -> Option<T> {
        loop {
            if self.rx.changed().await.is_err() {
                return None;
            }
            let value = self.rx.borrow_and_update().clone();
            if value.is_some() {
                return value;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
