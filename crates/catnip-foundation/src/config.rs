//! Configuration types for the foundation implementations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CatFactApiConfig
// ---------------------------------------------------------------------------

/// Configuration for the catfact.ninja HTTP source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatFactApiConfig {
    /// Base URL, e.g. https://catfact.ninja
    pub base_url: String,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for CatFactApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://catfact.ninja".to_string(),
            timeout_secs: 10,
        }
    }
}

impl CatFactApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(base_url) = std::env::var("CATNIP_BASE_URL") {
            cfg.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("CATNIP_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                cfg.timeout_secs = secs;
            }
        }

        cfg
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// ---------------------------------------------------------------------------
// MessageCatalog
// ---------------------------------------------------------------------------

/// Lookup key for the fallback error message shown when a remote failure
/// carries no message of its own.
pub const DEFAULT_ERROR_TEXT_KEY: &str = "error.default";

const BUILTIN_DEFAULT_ERROR_TEXT: &str = "Something went wrong, try again later";

/// A keyed table of user-facing strings.
///
/// Deployments override entries (e.g. for localization) by deserializing
/// their own table; every lookup falls back to the built-in English text
/// so a missing key never produces an empty message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let mut messages = HashMap::new();
        messages.insert(
            DEFAULT_ERROR_TEXT_KEY.to_string(),
            BUILTIN_DEFAULT_ERROR_TEXT.to_string(),
        );
        Self { messages }
    }
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace or add one entry.
    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }

    /// Look up a string by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// The configured fallback error message.
    pub fn default_error_text(&self) -> &str {
        self.get(DEFAULT_ERROR_TEXT_KEY)
            .unwrap_or(BUILTIN_DEFAULT_ERROR_TEXT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
