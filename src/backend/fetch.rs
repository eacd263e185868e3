//! Tokenized background fetches for the map refresh protocol.
//!
//! Every fetch carries the request token active when it was issued. The
//! worker tags its outcome with the same token and sends it over a
//! crossbeam channel; the view's poll loop drops outcomes whose token is
//! no longer the latest, so a slow response can never overwrite a newer
//! view state.

use crate::data::geojson::FeatureCollection;
use crate::{runtime, Result};
use async_trait::async_trait;
use crossbeam_channel::Sender;
use std::sync::Arc;

/// One issued geo fetch
#[derive(Debug, Clone, PartialEq)]
pub struct FetchJob {
    /// Request token active at issue time
    pub token: u64,
    /// Clustering factor the query was built with
    pub factor: f64,
    /// Encoded search/facet query string
    pub query: String,
}

/// The completion of one fetch, tagged with its token
#[derive(Debug)]
pub struct FetchOutcome {
    pub token: u64,
    pub factor: f64,
    pub result: Result<FeatureCollection>,
}

/// Seam between the map view and the HTTP layer
#[async_trait]
pub trait GeoFetcher: Send + Sync {
    async fn fetch(&self, factor: f64, query_string: &str) -> Result<FeatureCollection>;
}

/// Runs one fetch job on the async runtime and delivers the outcome
/// through `tx`. Fire-and-forget: a dropped receiver just loses the send.
pub fn spawn_fetch(fetcher: Arc<dyn GeoFetcher>, job: FetchJob, tx: Sender<FetchOutcome>) {
    runtime::spawn(async move {
        let result = fetcher.fetch(job.factor, &job.query).await;
        let outcome = FetchOutcome {
            token: job.token,
            factor: job.factor,
            result,
        };
        if tx.send(outcome).is_err() {
            log::debug!("fetch outcome for token {} had no receiver", job.token);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    struct StaticFetcher(FeatureCollection);

    #[async_trait]
    impl GeoFetcher for StaticFetcher {
        async fn fetch(&self, _factor: f64, _query: &str) -> Result<FeatureCollection> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawn_fetch_delivers_tagged_outcome() {
        let (tx, rx) = unbounded();
        let fetcher = Arc::new(StaticFetcher(FeatureCollection::default()));
        let job = FetchJob {
            token: 7,
            factor: 0.55,
            query: "q=windmill".to_string(),
        };

        spawn_fetch(fetcher, job, tx);

        let outcome = rx
            .recv_timeout(std::time::Duration::from_secs(1))
            .expect("outcome should arrive");
        assert_eq!(outcome.token, 7);
        assert_eq!(outcome.factor, 0.55);
        assert!(outcome.result.is_ok());
    }
}
