//! Fact value type and the tri-state outcome of a single load attempt.

use serde::{Deserialize, Serialize};

use crate::error::{FactsError, FactsResult};

// ---------------------------------------------------------------------------
// Fact
// ---------------------------------------------------------------------------

/// One displayable cat fact.
///
/// Immutable once constructed; passed by value to display callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// The fact text.
    pub text: String,
}

impl Fact {
    /// Construct a fact from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Fact {
    fn from(text: &str) -> Self {
        Fact::new(text)
    }
}

// ---------------------------------------------------------------------------
// FactOutcome
// ---------------------------------------------------------------------------

/// The result of one load attempt, reduced to what a display layer needs.
///
/// Exactly one variant is active at a time. Consumers match exhaustively;
/// the enum is intentionally closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactOutcome {
    /// A fact was retrieved.
    Success(Fact),
    /// The remote call failed with a remote/HTTP-classified error; the
    /// payload is a human-readable message ready for display.
    Error(String),
    /// The remote call failed with any other classification. No payload,
    /// so transport internals never reach the display layer.
    ServerError,
}

impl FactOutcome {
    /// Reduce a fetch result to its displayable outcome.
    ///
    /// Remote/HTTP failures become [`FactOutcome::Error`] carrying the
    /// failure's own message, or `default_error_text` when the failure
    /// carried none. Every other failure becomes
    /// [`FactOutcome::ServerError`].
    pub fn reduce(result: FactsResult<Fact>, default_error_text: &str) -> Self {
        match result {
            Ok(fact) => FactOutcome::Success(fact),
            Err(err) if err.is_remote() => {
                let message = match err.remote_message() {
                    Some(m) if !m.is_empty() => m.to_string(),
                    _ => default_error_text.to_string(),
                };
                FactOutcome::Error(message)
            }
            Err(_) => FactOutcome::ServerError,
        }
    }

    /// Whether this outcome carries a fact.
    pub fn is_success(&self) -> bool {
        matches!(self, FactOutcome::Success(_))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_TEXT: &str = "Unknown error";

    // ------------------------------------------------------------------
    // 1. Reduction table
    // ------------------------------------------------------------------

    #[test]
    fn success_carries_the_fetched_fact() {
        let outcome = FactOutcome::reduce(
            Ok(Fact::new("Cats sleep 70% of their lives.")),
            DEFAULT_TEXT,
        );
        assert_eq!(
            outcome,
            FactOutcome::Success(Fact::new("Cats sleep 70% of their lives."))
        );
    }

    #[test]
    fn remote_failure_with_message_becomes_error_with_that_message() {
        let err = FactsError::Api {
            status: Some(404),
            message: "no facts here".into(),
        };
        let outcome = FactOutcome::reduce(Err(err), DEFAULT_TEXT);
        assert_eq!(outcome, FactOutcome::Error("no facts here".into()));
    }

    #[test]
    fn remote_failure_with_empty_message_falls_back_to_default_text() {
        let err = FactsError::Api {
            status: Some(500),
            message: String::new(),
        };
        let outcome = FactOutcome::reduce(Err(err), DEFAULT_TEXT);
        assert_eq!(outcome, FactOutcome::Error("Unknown error".into()));
    }

    #[test]
    fn non_remote_failures_become_server_error() {
        for err in [
            FactsError::Network("refused".into()),
            FactsError::Timeout("elapsed".into()),
            FactsError::Serialization("bad json".into()),
            FactsError::Other("boom".into()),
        ] {
            let outcome = FactOutcome::reduce(Err(err), DEFAULT_TEXT);
            assert_eq!(outcome, FactOutcome::ServerError);
        }
    }

    // ------------------------------------------------------------------
    // 2. Fact basics
    // ------------------------------------------------------------------

    #[test]
    fn fact_displays_as_its_text() {
        let fact = Fact::new("A group of cats is called a clowder.");
        assert_eq!(fact.to_string(), "A group of cats is called a clowder.");
    }

    #[test]
    fn fact_round_trips_through_json() {
        let fact = Fact::new("Cats have over 20 muscles that control their ears.");
        let json = serde_json::to_string(&fact).unwrap();
        let back: Fact = serde_json::from_str(&json).unwrap();
        assert_eq!(fact, back);
    }
}
