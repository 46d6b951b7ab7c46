/// Metadata provider abstraction
///
/// The presentation layer enriches recommendation rows with plot text and
/// poster art. Keeping the lookup behind a trait means handlers and tests
/// depend on the seam, not on OMDb specifically.
use crate::models::MovieDetails;

pub mod omdb;

/// Trait for movie metadata providers
///
/// Lookups are best-effort by contract: implementations collapse every
/// failure cause (network, status, body, logical) into the sentinel pair
/// rather than returning an error, so a dead metadata service can never
/// take the result list down with it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch plot and poster for a title.
    ///
    /// Returns the sentinel pair on any failure, and immediately (without
    /// network I/O) when no credential is configured.
    async fn fetch_details(&self, title: &str) -> MovieDetails;

    /// Whether a credential was resolved at startup.
    ///
    /// Callers use this to skip lookups entirely and to surface the
    /// "metadata unavailable" warning to the user.
    fn is_configured(&self) -> bool;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
