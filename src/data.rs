//! Data layer: rate providers and per-span fetching
//!
//! # Components
//!
//! - **sources**: rate providers (NBP HTTP API, in-memory)
//! - **fetcher**: turns one provider call into a per-date `RateMap`

pub mod fetcher;
pub mod sources;

pub use fetcher::RateFetcher;
pub use sources::{InMemoryRateSource, NbpDataSource, RateDataSource};
