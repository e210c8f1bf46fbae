//! Text retrieval from the documentation origin

use std::time::Duration;

use async_trait::async_trait;

use crate::{Error, Result};

/// Retrieval of text bodies by URL.
///
/// The engine talks to the origin through this trait so tests can substitute
/// an in-memory double for the HTTP client.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `url` and return the response body as text.
    ///
    /// A non-success status is an error carrying the status code; the caller
    /// decides whether that is fatal.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// [`Fetch`] implementation over a shared [`reqwest::Client`].
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests all time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })
    }
}
