//! Core data models for pokedex.
//!
//! - `config`: TOML configuration with defaults
//! - `error`: crate and lookup error taxonomy
//! - `pokemon`: wire schema and the validated lookup result
//! - `query`: trimmed, non-empty lookup identifier

mod config;
mod error;
mod pokemon;
mod query;

pub use config::*;
pub use error::*;
pub use pokemon::*;
pub use query::*;

#[cfg(test)]
pub(crate) use pokemon::fixtures;
