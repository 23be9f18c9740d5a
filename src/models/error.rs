//! Error types for pokedex.
//!
//! Two layers:
//! - `LookupError`: what a single submission can end in. Its `Display`
//!   output is exactly the text written into the output region.
//! - `PokedexError`: crate-level failures (config, IO, client setup).

use thiserror::Error;

/// Literal message shown when the service answers with a non-200 status.
pub const NOT_FOUND_MESSAGE: &str = "Pokemon not found";

/// Top-level error type for pokedex.
#[derive(Debug, Error)]
pub enum PokedexError {
    // ═══════════════════════════════════════════════════════════════════
    // Expected failures
    // ═══════════════════════════════════════════════════════════════════

    #[error("Configuration error: {0}")]
    Config(#[from] super::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ═══════════════════════════════════════════════════════════════════
    // Infrastructure failures
    // ═══════════════════════════════════════════════════════════════════

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Terminal outcome of a failed lookup.
///
/// None of these are retried; each leaves the controller ready for the
/// next submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No response was obtained (connection refused, timeout, DNS, ...).
    #[error("{0}")]
    Transport(String),

    /// A response was obtained but its status was not 200.
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// A 200 response whose body does not match the expected shape.
    #[error("Invalid pokemon data: {0}")]
    Validation(String),
}

impl PokedexError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl LookupError {
    /// Short machine-friendly name, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::NotFound => "not_found",
            Self::Validation(_) => "validation",
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        Self::Validation(e.to_string())
    }
}

/// Result type alias for pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
