//! NCBI E-utilities client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Request/response tracing middleware
//! - Request and connect timeouts

mod middleware;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{ArticleSummary, ESearchResponse, ESummaryResponse, Record, ResultLimit};

pub use middleware::RequestTracing;

/// PubMed E-utilities client.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Endpoint and timeout settings.
    config: Config,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or HTTP client
    /// initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()?;

        let client = ClientBuilder::new(client).with(RequestTracing).build();

        Ok(Self { client, config })
    }

    /// Configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Find the PMIDs matching `query`, in relevance order.
    ///
    /// Returns at most `limit` ids; an empty list means no matches.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a response
    /// without an id list.
    pub async fn search_ids(&self, query: &str, limit: ResultLimit) -> ClientResult<Vec<String>> {
        let params = vec![
            ("db".to_string(), self.config.database.clone()),
            ("term".to_string(), query.to_string()),
            ("retmode".to_string(), "json".to_string()),
            ("retmax".to_string(), limit.to_string()),
        ];

        let response: ESearchResponse =
            self.get("esearch", &self.config.esearch_url(), &params).await?;
        let ids = response.into_id_list(limit.get())?;

        tracing::debug!(count = ids.len(), "esearch returned ids");
        Ok(ids)
    }

    /// Fetch document summaries for `ids` in a single request.
    ///
    /// The result has one entry per id, in the same order.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or when any
    /// requested id is missing from the response.
    pub async fn fetch_summaries(&self, ids: &[String]) -> ClientResult<Vec<ArticleSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let params = vec![
            ("db".to_string(), self.config.database.clone()),
            ("id".to_string(), ids.join(",")),
            ("retmode".to_string(), "json".to_string()),
        ];

        let response: ESummaryResponse =
            self.get("esummary", &self.config.esummary_url(), &params).await?;
        response.summaries_for(ids)
    }

    /// Fetch summaries for `ids` and flatten them into records.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_summaries`].
    pub async fn fetch_records(&self, ids: &[String]) -> ClientResult<Vec<Record>> {
        let summaries = self.fetch_summaries(ids).await?;

        Ok(ids
            .iter()
            .zip(&summaries)
            .map(|(pmid, summary)| {
                Record::from_summary(pmid, summary, self.config.article_link(pmid))
            })
            .collect())
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(
        &self,
        endpoint: &'static str,
        url: &str,
        params: &[(String, String)],
    ) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).query(params).send().await.map_err(|e| match e {
            reqwest_middleware::Error::Reqwest(inner) => self.transport_error(inner),
            other => ClientError::from(other),
        })?;

        let response = Self::handle_response(endpoint, response).await?;
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        serde_json::from_str(&body).map_err(ClientError::from)
    }

    /// Classify a reqwest failure, whether it hit while sending or while
    /// reading the body.
    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.config.request_timeout)
        } else {
            ClientError::Http(err)
        }
    }

    /// Map non-success status codes to errors.
    async fn handle_response(
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::status(endpoint, status.as_u16(), text))
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient").field("eutils_url", &self.config.eutils_url).finish()
    }
}
