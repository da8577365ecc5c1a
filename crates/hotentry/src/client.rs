use reqwest::Client;

use crate::{HotentryError, Result};

/// Upstream hot-entry feed URL.
pub const DEFAULT_UPSTREAM_URL: &str = "http://b.hatena.ne.jp/hotentry/all.rss";

/// Client for the upstream hot-entry feed.
///
/// No request timeout is configured; a stalled upstream stalls the request
/// that triggered the fetch.
pub struct HotentryClient {
    client: Client,
    url: String,
}

impl HotentryClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a client with a custom reqwest Client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }

    /// Create a client pointed at a non-default upstream URL.
    pub fn with_url(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The upstream URL this client fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw upstream feed body.
    ///
    /// A transport error or a non-success status is an error; the relay
    /// never proceeds on a partial or empty body.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Fetching upstream feed from: {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(HotentryError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl Default for HotentryClient {
    fn default() -> Self {
        Self::new()
    }
}
