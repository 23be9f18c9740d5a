//! Data service client module.

mod fetcher;
mod pokeapi;

pub use fetcher::*;
pub use pokeapi::*;
