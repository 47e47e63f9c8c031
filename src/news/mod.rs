//! Fetching layer.
//!
//! This module defines the [`Fetcher`] trait, the [`Article`] record and the
//! [`FetchError`] taxonomy.  The concrete network implementation lives in
//! [`http`].
//!
//! ## For contributors — swapping the fetcher
//!
//! The controller only sees an `Arc<dyn Fetcher>`, so tests (or an
//! alternative backend) plug in by implementing the trait:
//!
//! ```ignore
//! struct Canned(Vec<Article>);
//!
//! #[async_trait]
//! impl Fetcher for Canned {
//!     async fn fetch_articles(&self) -> Result<Vec<Article>, FetchError> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

mod article;
mod http;

pub use article::{Article, ArticleId};
pub use http::{HttpFetcher, DEFAULT_ENDPOINT};

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a fetch produced no articles.
///
/// The controller collapses every variant into one user-facing message; the
/// detail only reaches the log.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure, or the body could not be read.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    /// The body was not JSON, or not the expected envelope.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short machine-friendly name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Status(_) => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Something that can produce the current article list.
///
/// One call is one attempt: implementations must not retry internally.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FetchError>;
}
