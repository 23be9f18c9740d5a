//! PokeAPI HTTP client.
//!
//! A thin reqwest wrapper implementing `Fetcher`. It deliberately has no
//! retry loop: each submission is exactly one request.

use crate::client::{FetchResponse, Fetcher};
use crate::models::{Config, LookupError, PokedexError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::{Duration, Instant};
use tracing::debug;

/// PokeAPI client.
pub struct PokeApiClient {
    client: reqwest::Client,
    /// Base URL for the API, without trailing slash
    base_url: String,
}

impl PokeApiClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// - `base_url`: Base URL for the API (e.g. "https://pokeapi.co/api/v2")
    /// - `timeout_secs`: Request timeout in seconds
    /// - `user_agent`: User-Agent header value
    pub fn new(base_url: String, timeout_secs: u64, user_agent: &str) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_secs);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(PokedexError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from a validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.resolve_base_url(),
            config.api.timeout_secs,
            &config.api.user_agent,
        )
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Fetcher for PokeApiClient {
    async fn fetch(&self, url: &str) -> std::result::Result<FetchResponse, LookupError> {
        let start = Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            debug!(url = %url, error = %e, timeout = e.is_timeout(), "Request failed");
            LookupError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(
            url = %url,
            status = status,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Response received"
        );

        Ok(FetchResponse { status, body })
    }
}
