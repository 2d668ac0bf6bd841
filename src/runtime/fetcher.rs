use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Source of raw response bodies, keyed by URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Network error fetching {url}: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error {} fetching {url}", status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Error reading response body from {url}: {e}"))?;
        Ok(decode_body(&bytes))
    }
}

/// Decodes a body as UTF-8 regardless of the declared charset. Invalid byte
/// sequences become U+FFFD instead of failing the fetch.
pub fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
