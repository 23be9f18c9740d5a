//! The outbound HTTP seam.
//!
//! The controller never talks to reqwest directly; it goes through
//! `Fetcher`, so tests can stand in a scripted implementation and observe
//! the exact URLs requested.

use crate::models::LookupError;
use async_trait::async_trait;

/// Raw outcome of a request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only an exact 200 counts as found.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Issues a single GET.
///
/// Implementations must not retry: one call is one request. A request that
/// never produced a response is `LookupError::Transport`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LookupError>;
}

/// Build the lookup URL. The identifier is embedded verbatim.
pub fn pokemon_url(base_url: &str, identifier: &str) -> String {
    format!("{}/pokemon/{identifier}", base_url.trim_end_matches('/'))
}
