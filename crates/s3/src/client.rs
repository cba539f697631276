//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from s3drop-core.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_smithy_types::error::display::DisplayErrorContext;

use s3drop_core::{BackendConfig, Error, ObjectInfo, ObjectStore, Result};

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from a backend configuration
    pub async fn new(config: &BackendConfig) -> Result<Self> {
        // Build credentials provider
        let credentials = aws_credential_types::Credentials::new(
            config.access_key(),
            config.secret_key(),
            None, // session token
            None, // expiry
            "s3drop-static-credentials",
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(config.region().to_string()));

        if let Some(endpoint) = config.endpoint() {
            loader = loader.endpoint_url(endpoint.as_str().trim_end_matches('/'));
        }

        let sdk_config = loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.force_path_style())
            .build();

        tracing::debug!(
            provider = %config.provider(),
            region = config.region(),
            endpoint = config.endpoint().map(|e| e.as_str()),
            "created S3 client"
        );

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

/// Flatten an SDK error, including its source chain, into a backend error
fn backend_error(err: impl std::error::Error) -> Error {
    Error::Backend(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: &str,
        public: bool,
    ) -> Result<()> {
        let body = ByteStream::from_path(source)
            .await
            .map_err(|e| Error::General(format!("Failed to read {}: {e}", source.display())))?;

        let mut request = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .content_type(content_type);

        if public {
            request = request.acl(ObjectCannedAcl::PublicRead);
        }

        request.send().await.map_err(backend_error)?;

        Ok(())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        max_keys: usize,
    ) -> Result<Vec<ObjectInfo>> {
        let mut request = self
            .inner
            .list_objects_v2()
            .bucket(bucket)
            .max_keys(i32::try_from(max_keys).unwrap_or(i32::MAX));

        if !prefix.is_empty() {
            request = request.prefix(prefix);
        }

        let response = request.send().await.map_err(backend_error)?;

        let items = response
            .contents()
            .iter()
            .map(|object| {
                let size = u64::try_from(object.size().unwrap_or(0)).unwrap_or(0);
                let mut info = ObjectInfo::file(object.key().unwrap_or_default(), size);
                if let Some(modified) = object.last_modified() {
                    info.last_modified = jiff::Timestamp::from_second(modified.secs()).ok();
                }
                info
            })
            .collect();

        Ok(items)
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(backend_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3drop_core::Provider;

    #[test]
    fn test_backend_error_message() {
        let err = backend_error(std::io::Error::other("AccessDenied"));
        assert!(matches!(err, Error::Backend(_)));
        assert!(err.to_string().contains("AccessDenied"));
    }

    #[tokio::test]
    async fn test_client_from_spaces_config() {
        let config = BackendConfig::new(Provider::Spaces, "key", "secret", "space")
            .unwrap()
            .with_endpoint("nyc3.digitaloceanspaces.com")
            .unwrap();
        let client = S3Client::new(&config).await.unwrap();

        let conf = client.inner().config();
        assert_eq!(conf.region().map(|r| r.to_string()), Some("nyc3".to_string()));
    }
}
