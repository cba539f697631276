//! Backend trait definitions
//!
//! These traits decouple the transfer logic from the AWS SDK and the HTTP
//! client, so the engine can be exercised against mocks.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use jiff::Timestamp;
use url::Url;

use crate::error::Result;

/// Response body of a remote download, delivered chunk by chunk
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Object metadata as reported by a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    /// Object key
    pub key: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Last modified timestamp
    pub last_modified: Option<Timestamp>,
}

impl ObjectInfo {
    /// Create a new ObjectInfo for a file
    pub fn file(key: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            key: key.into(),
            size_bytes,
            last_modified: None,
        }
    }
}

/// Trait for S3-compatible storage operations
///
/// This trait is implemented by the S3 adapter and can be mocked for testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload the file at `source` to `bucket/key`
    ///
    /// `public` requests a public-read ACL on the new object.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: &str,
        public: bool,
    ) -> Result<()>;

    /// List at most `max_keys` objects whose keys start with `prefix`
    async fn list_objects(&self, bucket: &str, prefix: &str, max_keys: usize)
    -> Result<Vec<ObjectInfo>>;

    /// Delete a single object
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
}

/// Source of remote content for upload-from-URL
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Issue a GET against `url` and return its body as a stream
    ///
    /// Non-success statuses are errors, reported before any body is read.
    async fn fetch(&self, url: &Url) -> Result<ByteStream>;
}
