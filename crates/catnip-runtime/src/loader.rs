//! Fire-once fact loader.

use std::sync::Arc;

use catnip_kernel::{FactOutcome, FactSource, LatestCell, LatestObserver};

use crate::group::TaskGroup;

/// Issues exactly one asynchronous request to a [`FactSource`] and
/// publishes the reduced [`FactOutcome`] to a latest-value cell.
///
/// No retry is performed. The request task registers with the owning
/// [`TaskGroup`], so teardown prevents a late publication.
pub struct FactLoader {
    cell: Arc<LatestCell<FactOutcome>>,
}

impl FactLoader {
    /// Spawn the loader. The fetch begins immediately.
    ///
    /// `default_error_text` is substituted when a remote/HTTP failure
    /// carries no message of its own.
    pub fn spawn(
        source: Arc<dyn FactSource>,
        default_error_text: impl Into<String>,
        group: &TaskGroup,
    ) -> Self {
        let cell = Arc::new(LatestCell::new());
        let publish_cell = Arc::clone(&cell);
        let default_text = default_error_text.into();

        group.spawn(async move {
            let result = source.fact().await;
            if let Err(err) = &result {
                tracing::warn!(source = source.name(), error = %err, "fact fetch failed");
            }
            publish_cell.publish(FactOutcome::reduce(result, &default_text));
        });

        Self { cell }
    }

    /// Register an observer on the outcome cell.
    ///
    /// An observer registered after publication immediately receives the
    /// published outcome.
    pub fn subscribe(&self) -> LatestObserver<FactOutcome> {
        self.cell.subscribe()
    }

    /// The most recently published outcome, if the fetch has completed.
    pub fn latest(&self) -> Option<FactOutcome> {
        self.cell.latest()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
