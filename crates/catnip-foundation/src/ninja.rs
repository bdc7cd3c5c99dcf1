//! catfact.ninja HTTP source.
//!
//! Lightweight client for the catfact.ninja JSON API: one `GET /fact`
//! per call, returning `{"fact": "...", "length": n}`.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use catnip_kernel::{Fact, FactSource, FactsError, FactsResult};

use crate::config::CatFactApiConfig;

/// HTTP-backed [`FactSource`] for the catfact.ninja API.
pub struct CatFactApi {
    client: reqwest::Client,
    config: CatFactApiConfig,
}

impl Default for CatFactApi {
    fn default() -> Self {
        Self::new()
    }
}

impl CatFactApi {
    /// Create a source with the default public endpoint.
    pub fn new() -> Self {
        Self::with_config(CatFactApiConfig::new())
    }

    /// Create a source reading `CATNIP_BASE_URL` and `CATNIP_TIMEOUT_SECS`
    /// from the environment.
    pub fn from_env() -> Self {
        Self::with_config(CatFactApiConfig::from_env())
    }

    /// Create a source from an explicit [`CatFactApiConfig`].
    pub fn with_config(config: CatFactApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, config }
    }

    fn fact_url(&self) -> String {
        format!("{}/fact", self.config.base_url.trim_end_matches('/'))
    }

    fn map_error(err: reqwest::Error) -> FactsError {
        if err.is_timeout() {
            FactsError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            FactsError::Network(err.to_string())
        } else {
            FactsError::Other(err.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct NinjaFactResponse {
    fact: String,
    #[serde(default)]
    length: Option<u64>,
}

#[async_trait]
impl FactSource for CatFactApi {
    fn name(&self) -> &str {
        "catfact-ninja"
    }

    async fn fact(&self) -> FactsResult<Fact> {
        let resp = self
            .client
            .get(self.fact_url())
            .send()
            .await
            .map_err(Self::map_error)?;

        let status = resp.status();
        let text = resp.text().await.map_err(Self::map_error)?;

        if !status.is_success() {
            return Err(FactsError::Api {
                status: Some(status.as_u16()),
                message: text,
            });
        }

        let parsed: NinjaFactResponse = serde_json::from_str(&text)
            .map_err(|e| FactsError::Serialization(e.to_string()))?;

        Ok(Fact::new(parsed.fact))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
