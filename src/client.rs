use tracing::instrument;

use crate::config::HltvConfig;
use crate::error::Result;
use crate::model::*;
use crate::scraper;

/// The main entry point for interacting with HLTV.org.
///
/// `HltvClient` holds an [`HltvConfig`] and exposes the results listing
/// as typed [`MatchResult`]s.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hltv_scraper::Result<()> {
/// use hltv_scraper::{HltvClient, ResultsFilter, ResultsQuery, Stars};
///
/// let client = HltvClient::new();
/// let results = client
///     .get_results(ResultsQuery {
///         pages: 2,
///         filter: ResultsFilter {
///             stars: Some(Stars::One),
///             ..Default::default()
///         },
///     })
///     .await?;
/// println!("Found {} results", results.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct HltvClient {
    config: HltvConfig,
}

impl HltvClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new client loading pages through the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::with_config(HltvConfig::with_client(client))
    }

    /// Create a new client from a full configuration.
    pub fn with_config(config: HltvConfig) -> Self {
        Self { config }
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &HltvConfig {
        &self.config
    }

    /// Fetch finished matches, newest first, walking `query.pages` pages of
    /// 100 results each.
    ///
    /// A `pages` value of 0 is reported through the configured diagnostics
    /// and yields no results. Any page that fails to load fails the whole call.
    #[instrument(skip(self))]
    pub async fn get_results(&self, query: ResultsQuery) -> Result<Vec<MatchResult>> {
        scraper::results::get_results(
            &self.config.base_url,
            self.config.loader.as_ref(),
            self.config.diagnostics.as_ref(),
            &query,
        )
        .await
    }
}
