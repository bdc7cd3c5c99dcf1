//! Corpus-backed local fact generator.
//!
//! Used as the substitute source when the remote path fails, and as a
//! standalone periodic producer.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use catnip_kernel::{Fact, FactGenerator, FactStream, FactsError, FactsResult};

/// Built-in fact corpus.
const FACTS: &[&str] = &[
    "Cats sleep for around 13 to 16 hours a day.",
    "A group of cats is called a clowder.",
    "Cats have over 20 muscles that control their ears.",
    "A cat's nose print is unique, much like a human fingerprint.",
    "Cats can rotate their ears 180 degrees.",
    "Domestic cats can run at speeds of around 48 km/h.",
    "A cat's purr vibrates at a frequency of 25 to 150 hertz.",
    "Cats have a third eyelid called a haw.",
    "Most cats have no eyelashes.",
    "Adult cats only meow to communicate with humans.",
    "Cats can jump up to five times their own height.",
    "A cat's whiskers are roughly as wide as its body.",
];

/// A [`FactGenerator`] that draws uniformly at random from a fixed corpus.
pub struct LocalFactGenerator {
    facts: Vec<String>,
}

impl Default for LocalFactGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFactGenerator {
    /// Create a generator over the built-in corpus.
    pub fn new() -> Self {
        Self {
            facts: FACTS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Create a generator over a custom corpus.
    ///
    /// # Errors
    ///
    /// Returns [`FactsError::Config`] if `facts` is empty.
    pub fn with_facts(facts: Vec<String>) -> FactsResult<Self> {
        if facts.is_empty() {
            return Err(FactsError::Config("fact corpus must not be empty".into()));
        }
        Ok(Self { facts })
    }

    fn pick_index(len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn pick(&self) -> Fact {
        Fact::new(self.facts[Self::pick_index(self.facts.len())].clone())
    }

    /// An unbounded stream yielding one random fact per `period`.
    ///
    /// Consecutive duplicates are suppressed by re-drawing until a
    /// different fact comes up; a corpus of one fact still repeats.
    pub fn generate_periodically(&self, period: Duration) -> FactStream {
        let facts = self.facts.clone();
        Box::pin(futures::stream::unfold(
            (facts, None::<usize>),
            move |(facts, last)| async move {
                tokio::time::sleep(period).await;

                let mut idx = Self::pick_index(facts.len());
                while Some(idx) == last && facts.len() > 1 {
                    idx = Self::pick_index(facts.len());
                }

                let fact = Fact::new(facts[idx].clone());
                Some((fact, (facts, Some(idx))))
            },
        ))
    }
}

#[async_trait]
impl FactGenerator for LocalFactGenerator {
    fn name(&self) -> &str {
        "local-generator"
    }

    async fn generate(&self) -> FactsResult<Fact> {
        Ok(self.pick())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
