//! Repeating fact stream with local fallback.

use std::sync::Arc;
use std::time::Duration;

use catnip_kernel::{Fact, FactGenerator, FactSource};

use crate::group::TaskGroup;

/// Fixed delay between stream cycles.
pub const DEFAULT_STREAM_PERIOD: Duration = Duration::from_millis(2000);

// ---------------------------------------------------------------------------
// StreamOptions
// ---------------------------------------------------------------------------

/// Tuning knobs for [`FactStreamer`].
#[derive(Debug, Clone)]
pub struct StreamOptions {
    /// Delay applied after every cycle, fallback cycles included.
    pub period: Duration,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            period: DEFAULT_STREAM_PERIOD,
        }
    }
}

// ---------------------------------------------------------------------------
// FactStreamer
// ---------------------------------------------------------------------------

/// Delivers an unbounded sequence of facts to a callback.
///
/// Each cycle is: attempt the remote source → deliver → sleep the period.
/// On a remote failure the cycle substitutes exactly one locally generated
/// fact and keeps going; the remote source is re-attempted on every cycle.
/// A failure of the generator itself is logged and that cycle delivers
/// nothing. Failures never reach the callback.
pub struct FactStreamer {
    source: Arc<dyn FactSource>,
    generator: Arc<dyn FactGenerator>,
    options: StreamOptions,
}

impl FactStreamer {
    /// Create a streamer with the default period.
    pub fn new(source: Arc<dyn FactSource>, generator: Arc<dyn FactGenerator>) -> Self {
        Self::with_options(source, generator, StreamOptions::default())
    }

    /// Create a streamer with explicit options.
    pub fn with_options(
        source: Arc<dyn FactSource>,
        generator: Arc<dyn FactGenerator>,
        options: StreamOptions,
    ) -> Self {
        Self {
            source,
            generator,
            options,
        }
    }

    /// Start the repeating cycle in a task registered with `group`.
    ///
    /// `on_fact` is invoked from the cycle's own task, so deliveries are
    /// serialized. Cancelling the group aborts the cycle; no delivery
    /// starts after cancellation.
    pub fn start<F>(&self, group: &TaskGroup, on_fact: F)
    where
        F: Fn(Fact) + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let generator = Arc::clone(&self.generator);
        let period = self.options.period;

        group.spawn(async move {
            loop {
                match source.fact().await {
                    Ok(fact) => on_fact(fact),
                    Err(err) => {
                        tracing::warn!(
                            source = source.name(),
                            error = %err,
                            "remote fetch failed, substituting a local fact"
                        );
                        match generator.generate().await {
                            Ok(fact) => on_fact(fact),
                            Err(gen_err) => {
                                tracing::error!(
                                    generator = generator.name(),
                                    error = %gen_err,
                                    "local generation failed"
                                );
                            }
                        }
                    }
                }

                tokio::time::sleep(period).await;
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use catnip_kernel::{FactsError, FactsResult};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Scripted source: returns each response once, then keeps failing.
    struct MockSource {
        responses: Vec<FactsResult<Fact>>,
        call_count: AtomicUsize,
    }

    impl MockSource {
        fn new(responses: Vec<FactsResult<Fact>>) -> Self {
            Self {
                responses,
                call_count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl FactSource for MockSource {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fact(&self) -> FactsResult<Fact> {
            let index = self.call_count.fetch_add(1, Ordering::SeqCst);
            if index < self.responses.len() {
                self.responses[index].clone()
            } else {
                Err(FactsError::Other("source exhausted".to_string()))
            }
        }
    }

    struct FixedGenerator {
        text: &'static str,
    }

    #[async_trait::async_trait]
    impl FactGenerator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn generate(&self) -> FactsResult<Fact> {
            Ok(Fact::new(self.text))
        }
    }

    struct BrokenGenerator;

    #[async_trait::async_trait]
    impl FactGenerator for BrokenGenerator {
        fn name(&self) -> &str {
            "broken"
        }

        async fn generate(&self) -> FactsResult<Fact> {
            Err(FactsError::Other("generator down".to_string()))
        }
    }

    fn collecting_callback() -> (Arc<Mutex<Vec<Fact>>>, impl Fn(Fact) + Send + Sync + 'static) {
        let collected = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&collected);
        let callback = move |fact| sink.lock().unwrap().push(fact);
        (collected, callback)
    }

    fn short_options() -> StreamOptions {
        StreamOptions {
            period: Duration::from_millis(5),
        }
    }

    #[tokio::test]
    async fn fallback_fact_precedes_remote_facts_after_one_failure() {
        let source: Arc<dyn FactSource> = Arc::new(MockSource::new(vec![
            Err(FactsError::Network("down".into())),
            Ok(Fact::new("remote one")),
            Ok(Fact::new("remote two")),
        ]));
        let generator: Arc<dyn FactGenerator> = Arc::new(FixedGenerator { text: "local" });
        let (collected, callback) = collecting_callback();

        let group = TaskGroup::new();
        FactStreamer::with_options(source, generator, short_options()).start(&group, callback);

        tokio::time::sleep(Duration::from_millis(14)).await;
        group.cancel();

        let facts = collected.lock().unwrap();
        assert!(facts.len() >= 3, "expected 3 deliveries, got {}", facts.len());
        assert_eq!(facts[0], Fact::new("local"));
        assert_eq!(facts[1], Fact::new("remote one"));
        assert_eq!(facts[2], Fact::new("remote two"));
    }

    #[tokio::test]
    async fn stream_keeps_substituting_when_the_source_stays_down() {
        let source: Arc<dyn FactSource> = Arc::new(MockSource::new(Vec::new()));
        let generator: Arc<dyn FactGenerator> = Arc::new(FixedGenerator { text: "local" });
        let (collected, callback) = collecting_callback();

        let group = TaskGroup::new();
        FactStreamer::with_options(source, generator, short_options()).start(&group, callback);

        tokio::time::sleep(Duration::from_millis(20)).await;
        group.cancel();

        let facts = collected.lock().unwrap();
        assert!(facts.len() >= 2);
        assert!(facts.iter().all(|f| f.text == "local"));
    }

    #[tokio::test]
    async fn generator_failure_delivers_nothing_and_cycle_continues() {
        let source: Arc<dyn FactSource> = Arc::new(MockSource::new(vec![
            Err(FactsError::Network("down".into())),
            Ok(Fact::new("recovered")),
        ]));
        let generator: Arc<dyn FactGenerator> = Arc::new(BrokenGenerator);
        let (collected, callback) = collecting_callback();

        let group = TaskGroup::new();
        FactStreamer::with_options(source, generator, short_options()).start(&group, callback);

        tokio::time::sleep(Duration::from_millis(14)).await;
        group.cancel();

        let facts = collected.lock().unwrap();
        assert!(!facts.is_empty());
        assert_eq!(facts[0], Fact::new("recovered"));
    }

    #[tokio::test]
    async fn cancellation_stops_all_further_deliveries() {
        let source: Arc<dyn FactSource> = Arc::new(MockSource::new(Vec::new()));
        let generator: Arc<dyn FactGenerator> = Arc::new(FixedGenerator { text: "local" });
        let (collected, callback) = collecting_callback();

        let group = TaskGroup::new();
        FactStreamer::with_options(source, generator, short_options()).start(&group, callback);

        tokio::time::sleep(Duration::from_millis(12)).await;
        group.cancel();
        let frozen = collected.lock().unwrap().len();
        assert!(frozen > 0);

        tokio::time::sleep(Duration::from_millis(25)).await;
        assert_eq!(collected.lock().unwrap().len(), frozen);
    }

    #[test]
    fn default_period_is_two_seconds() {
        assert_eq!(StreamOptions::default().period, Duration::from_millis(2000));
    }
}
