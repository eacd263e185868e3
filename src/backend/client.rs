//! HTTP client for the search and detail endpoints.

use crate::backend::fetch::GeoFetcher;
use crate::core::config::SearchViewOptions;
use crate::data::geojson::FeatureCollection;
use crate::view::foldout::FoldoutConfig;
use crate::Result;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

const FOLDOUT_CACHE_SIZE: usize = 64;

/// Client for the read-only search backend
pub struct SearchClient {
    http: reqwest::Client,
    options: SearchViewOptions,
    /// Foldout markup cache keyed by document id
    foldout_cache: Mutex<LruCache<String, String>>,
}

impl SearchClient {
    pub fn new(options: SearchViewOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
            foldout_cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(FOLDOUT_CACHE_SIZE).unwrap(),
            )),
        }
    }

    pub fn options(&self) -> &SearchViewOptions {
        &self.options
    }

    /// Builds the geo query URL for a factor and an encoded query string
    pub fn geojson_url(&self, factor: f64, query_string: &str) -> String {
        let mut url = format!(
            "{}?format=geojson&cluster.factor={}",
            self.options.search_endpoint, factor
        );
        if !query_string.is_empty() {
            url.push('&');
            url.push_str(query_string);
        }
        url
    }

    /// URL of the detail-resolution endpoint for one document
    pub fn resolve_url(&self, doc_type: &str, doc_id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.options.resolve_endpoint.trim_end_matches('/'),
            doc_type,
            doc_id
        )
    }

    /// Fetches and parses the GeoJSON result set for one refresh
    pub async fn search_geojson(
        &self,
        factor: f64,
        query_string: &str,
    ) -> Result<FeatureCollection> {
        let url = self.geojson_url(factor, query_string);
        if self.options.log_fetches {
            log::debug!("fetching geo results: {}", url);
        }
        let body = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(crate::Error::Network)?
            .text()
            .await
            .map_err(crate::Error::Network)?;

        FeatureCollection::from_str(&body)
    }

    /// Fetches one result's representation for popup display
    pub async fn resolve_detail(&self, doc_type: &str, doc_id: &str) -> Result<String> {
        let url = self.resolve_url(doc_type, doc_id);
        let body = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(crate::Error::Network)?
            .text()
            .await
            .map_err(crate::Error::Network)?;
        Ok(body)
    }

    /// Fetches foldout markup for a document, serving repeats from the cache
    pub async fn detail_html(&self, doc_id: &str) -> Result<String> {
        if let Ok(mut cache) = self.foldout_cache.lock() {
            if let Some(html) = cache.get(doc_id) {
                return Ok(html.clone());
            }
        }

        let foldout =
            FoldoutConfig::new(self.options.language.clone(), self.options.foldout_cols);
        let url = foldout.url_for(doc_id);
        let body = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(crate::Error::Network)?
            .text()
            .await
            .map_err(crate::Error::Network)?;

        if let Ok(mut cache) = self.foldout_cache.lock() {
            cache.put(doc_id.to_string(), body.clone());
        }
        Ok(body)
    }
}

#[async_trait]
impl GeoFetcher for SearchClient {
    async fn fetch(&self, factor: f64, query_string: &str) -> Result<FeatureCollection> {
        self.search_geojson(factor, query_string).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_url() {
        let client = SearchClient::new(SearchViewOptions::default());
        assert_eq!(
            client.geojson_url(0.7, "q=windmill"),
            "/search/?format=geojson&cluster.factor=0.7&q=windmill"
        );
        assert_eq!(
            client.geojson_url(1.0, ""),
            "/search/?format=geojson&cluster.factor=1"
        );
    }

    #[test]
    fn test_resolve_url() {
        let client = SearchClient::new(SearchViewOptions::default());
        assert_eq!(
            client.resolve_url("record", "dcn_archive_12"),
            "/resolve/record/dcn_archive_12"
        );
    }
}
