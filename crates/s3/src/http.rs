//! HTTP download source
//!
//! Implements `RemoteSource` with reqwest for upload-from-URL.

use std::time::Duration;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use url::Url;

use s3drop_core::{ByteStream, Error, RemoteSource, Result};

/// Connect and read timeout for remote downloads
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Streaming HTTP GET client
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with the default 30 second timeouts
    pub fn new() -> Result<Self> {
        Self::with_timeout(DOWNLOAD_TIMEOUT)
    }

    /// Create a source with custom connect and read timeouts
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .user_agent(concat!("s3drop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RemoteSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<ByteStream> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("HTTP {status} for {url}")));
        }

        tracing::debug!(%url, %status, content_length = response.content_length(), "download started");

        Ok(response
            .bytes_stream()
            .map_err(|e| Error::Network(e.to_string()))
            .boxed())
    }
}
