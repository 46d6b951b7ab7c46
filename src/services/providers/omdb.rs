/// OMDb API provider
///
/// Single best-effort GET per lookup: no caching, no rate limiting, no
/// retries. Query parameters follow the OMDb title lookup form
/// (`t`, `plot=full`, `apikey`), bounded by a per-request timeout.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{MovieDetails, OmdbLookup},
    services::providers::MetadataProvider,
};

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl OmdbProvider {
    pub fn new(api_key: Option<String>, api_url: String, timeout: Duration) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            timeout,
        }
    }

    /// Fallible inner lookup; `fetch_details` collapses the error branch
    async fn lookup(&self, title: &str, api_key: &str) -> AppResult<MovieDetails> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("t", title), ("plot", "full"), ("apikey", api_key)])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}",
                response.status()
            )));
        }

        let lookup: OmdbLookup = response.json().await?;

        if !lookup.is_success() {
            tracing::debug!(
                title = %title,
                error = %lookup.error.as_deref().unwrap_or("unknown"),
                "OMDb lookup reported failure"
            );
        }

        Ok(lookup.into())
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn fetch_details(&self, title: &str) -> MovieDetails {
        let Some(api_key) = self.api_key.as_deref() else {
            return MovieDetails::unavailable();
        };

        match self.lookup(title, api_key).await {
            Ok(details) => {
                tracing::debug!(
                    title = %title,
                    has_plot = details.has_plot(),
                    has_poster = details.has_poster(),
                    provider = self.name(),
                    "Metadata fetched"
                );
                details
            }
            Err(e) => {
                tracing::warn!(
                    title = %title,
                    error = %e,
                    provider = self.name(),
                    "Metadata lookup failed, using fallback"
                );
                MovieDetails::unavailable()
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: Option<&str>) -> OmdbProvider {
        OmdbProvider::new(
            api_key.map(|k| k.to_string()),
            "http://test.local".to_string(),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn test_is_configured() {
        assert!(provider(Some("abc123")).is_configured());
        assert!(!provider(None).is_configured());
    }

    #[tokio::test]
    async fn test_fetch_without_key_returns_sentinel_without_network() {
        // api_url points nowhere reachable; with no key the provider must
        // short-circuit before building a request
        let details = provider(None).fetch_details("Inception").await;
        assert_eq!(details, MovieDetails::unavailable());
    }

    #[tokio::test]
    async fn test_fetch_against_unreachable_host_returns_sentinel() {
        let provider = OmdbProvider::new(
            Some("abc123".to_string()),
            // Reserved TEST-NET-1 address, nothing listens there
            "http://192.0.2.1:9".to_string(),
            Duration::from_millis(200),
        );

        let details = provider.fetch_details("Inception").await;
        assert_eq!(details, MovieDetails::unavailable());
    }
}
