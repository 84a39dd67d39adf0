//! Configuration for the PubMed search client.

use std::time::Duration;

use url::Url;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for NCBI E-utilities.
    pub const EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Base URL for human-readable PubMed article pages.
    pub const ARTICLE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov";

    /// Entrez database selector.
    pub const DATABASE: &str = "pubmed";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Bounds on the number of records a single search may fetch.
pub mod limits {
    /// Smallest accepted result limit.
    pub const MIN_RESULTS: i32 = 1;

    /// Largest accepted result limit.
    pub const MAX_RESULTS: i32 = 50;

    /// Result limit used when the caller does not supply one.
    pub const DEFAULT_RESULTS: i32 = 5;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for E-utilities (for testing with mock servers).
    pub eutils_url: String,

    /// Base URL that article links are built from.
    pub article_url: String,

    /// Entrez database to query.
    pub database: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create the production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            eutils_url: api::EUTILS_URL.to_string(),
            article_url: api::ARTICLE_URL.to_string(),
            database: api::DATABASE.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing E-utilities at a mock server.
    ///
    /// Article links keep the production base so reports look the same.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            eutils_url: format!("{}/entrez/eutils", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new()
        }
    }

    /// Create configuration from the environment.
    ///
    /// Reads an optional `.env` file, then `PUBMED_EUTILS_URL` to override the
    /// E-utilities base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the override is not a valid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::new();
        if let Ok(eutils_url) = std::env::var("PUBMED_EUTILS_URL") {
            config.eutils_url = eutils_url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check that both base URLs parse as absolute URLs.
    ///
    /// # Errors
    ///
    /// Returns error naming the offending URL.
    pub fn validate(&self) -> anyhow::Result<()> {
        for candidate in [&self.eutils_url, &self.article_url] {
            Url::parse(candidate)
                .map_err(|e| anyhow::anyhow!("invalid base URL '{candidate}': {e}"))?;
        }
        Ok(())
    }

    /// ESearch endpoint URL.
    #[must_use]
    pub fn esearch_url(&self) -> String {
        format!("{}/esearch.fcgi", self.eutils_url.trim_end_matches('/'))
    }

    /// ESummary endpoint URL.
    #[must_use]
    pub fn esummary_url(&self) -> String {
        format!("{}/esummary.fcgi", self.eutils_url.trim_end_matches('/'))
    }

    /// Link to the PubMed page of an article.
    #[must_use]
    pub fn article_link(&self, pmid: &str) -> String {
        format!("{}/{}/", self.article_url.trim_end_matches('/'), pmid)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
