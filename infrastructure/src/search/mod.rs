//! Search gateway adapters.

mod duckduckgo;

pub use duckduckgo::DuckDuckGoClient;
