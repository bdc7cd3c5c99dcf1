//! Capability traits for producing facts.
//!
//! Concrete implementations (HTTP-backed sources, local generators) live
//! in `catnip-foundation`; callers that need to be generic over the
//! backend (e.g. tests using scripted mocks) depend only on these traits.

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::error::FactsResult;
use crate::fact::Fact;

/// Boxed stream of facts, as produced by periodic generators.
pub type FactStream = Pin<Box<dyn Stream<Item = Fact> + Send>>;

/// A remote fetch capability producing one fact per call.
///
/// # Example
///
/// ```rust,ignore
/// use catnip_kernel::{Fact, FactSource, FactsResult};
///
/// struct MySource {
///     base_url: String,
/// }
///
/// #[async_trait::async_trait]
/// impl FactSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     async fn fact(&self) -> FactsResult<Fact> {
///         // Implement the API call
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Get the source name (used in log records).
    fn name(&self) -> &str;

    /// Fetch one fact.
    async fn fact(&self) -> FactsResult<Fact>;

    /// Health check.
    async fn health_check(&self) -> FactsResult<bool> {
        Ok(true)
    }
}

/// A local generation capability producing one fact per call.
///
/// Implementations are expected always to succeed; the fallible signature
/// is kept so that an unexpected failure can be logged rather than panic.
#[async_trait]
pub trait FactGenerator: Send + Sync {
    /// Get the generator name (used in log records).
    fn name(&self) -> &str;

    /// Produce one fact.
    async fn generate(&self) -> FactsResult<Fact>;
}
