pub mod client;
pub mod fetch;

pub use client::SearchClient;
pub use fetch::{spawn_fetch, FetchJob, FetchOutcome, GeoFetcher};
