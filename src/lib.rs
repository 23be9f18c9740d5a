//! pokedex - creature lookup form over the public PokeAPI.
//!
//! ## Architecture
//!
//! - **Client**: `Fetcher` seam plus a reqwest-backed `PokeApiClient`
//! - **Controller**: `LookupController` turns one form submission into one
//!   request and one display update
//! - **Models**: validated lookup result, configuration, error taxonomy
//!
//! ## Flow
//!
//! submit → trim (blank: ignore) → GET `{base_url}/pokemon/{id}` →
//! 200: decode + render | non-200: "Pokemon not found" | no response: error text
//!
//! Overlapping submissions are sequenced: only the newest one's outcome is
//! ever written to the output region.

pub mod client;
pub mod controller;
pub mod models;

// Re-exports for convenience
pub use client::{FetchResponse, Fetcher, PokeApiClient};
pub use controller::{
    DisplayState, InputField, LookupController, MemoryInput, MemoryRegion, OutputRegion,
    SubmitOutcome,
};
pub use models::{Config, LookupError, OutputFormat, PokedexError, Pokemon, Query, Result};
