//! HTTP implementation of [`Fetcher`].
//!
//! One GET against a fixed endpoint, no headers, no retries, and the
//! transport's own timeout.  Parsing is split into the pure
//! [`HttpFetcher::parse_articles`] so it can be tested without a server.

use async_trait::async_trait;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{Article, FetchError, Fetcher};

/// Where the latest articles are served from.
pub const DEFAULT_ENDPOINT: &str = "https://news.knowivate.com/api/latest";

/// Top-level JSON object wrapping the article array.
///
/// The array is read from `articles`; `data` is only consulted when
/// `articles` is absent or `null`, so an unrelated `data` object next to a
/// valid `articles` array is ignored.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    articles: Option<Vec<Article>>,
    #[serde(default)]
    data: Option<Value>,
}

impl Envelope {
    fn into_articles(self) -> Result<Vec<Article>, serde_json::Error> {
        match (self.articles, self.data) {
            (Some(articles), _) => Ok(articles),
            (None, Some(data)) => serde_json::from_value(data),
            (None, None) => Err(serde_json::Error::missing_field("articles")),
        }
    }
}

/// Fetches articles over HTTP with a single shared [`reqwest::Client`].
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFetcher {
    /// Build the fetcher and its client.  Called once, at start-up.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(FetchError::Network)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Decode a response body into articles, keeping server order.
    pub fn parse_articles(body: &[u8]) -> Result<Vec<Article>, FetchError> {
        let envelope: Envelope = serde_json::from_slice(body)?;
        Ok(envelope.into_articles()?)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting latest articles");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;
        Self::parse_articles(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
