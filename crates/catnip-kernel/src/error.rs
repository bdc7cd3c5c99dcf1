//! Crate-level error types for `catnip-kernel`.
//!
//! Provides the unified [`FactsError`] taxonomy shared by every fact
//! source and generator, together with the [`FactsResult`] alias used
//! across the workspace.

use thiserror::Error;

/// All errors a fact source or generator can produce.
///
/// Marked `#[non_exhaustive]` so that new variants can be added in future
/// minor releases without breaking callers that match exhaustively.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum FactsError {
    /// The remote call completed with a non-success transport-level
    /// outcome. `status` carries the HTTP status code when one was
    /// received; `message` carries the response body or error text.
    #[error("API error: {message} (status: {status:?})")]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// A connectivity failure before any response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded its deadline.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A configuration-related error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other failure described by a message string.
    #[error("Fact error: {0}")]
    Other(String),
}

impl FactsError {
    /// Whether this failure is classified as remote/HTTP: the call reached
    /// the service and came back with a non-success outcome, as opposed to
    /// a connectivity or generic failure.
    pub fn is_remote(&self) -> bool {
        matches!(self, FactsError::Api { .. })
    }

    /// The human-readable message of a remote/HTTP failure, if this is one.
    ///
    /// May be empty when the service returned no body; callers substitute
    /// their configured default text in that case.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            FactsError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Crate-wide result alias.
pub type FactsResult<T> = Result<T, FactsError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
