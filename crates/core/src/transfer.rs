//! Upload and delete orchestration
//!
//! [`TransferEngine`] runs one logical transfer per call. Local-source
//! problems (missing path, not a file, scratch-disk failures) come back as
//! `Err`; download and backend failures come back as
//! [`TransferResult::Failure`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::StreamExt;
use jiff::Timestamp;
use tempfile::NamedTempFile;
use tokio::io::{AsyncWriteExt, BufWriter};
use url::Url;

use crate::config::BackendConfig;
use crate::content_type::content_type_for;
use crate::error::{Error, Result};
use crate::path::{filename_from_url, resolve_key};
use crate::public_url::public_url;
use crate::result::{DeleteResult, TransferFailure, TransferResult, UploadSuccess};
use crate::traits::{ObjectStore, RemoteSource};

/// Write size used when spooling a download to disk
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Prefix of scratch files created for downloads
const TEMP_PREFIX: &str = "s3drop-";

/// Where an upload's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferSource {
    /// A file on the local filesystem
    Local(PathBuf),
    /// A remote URL, optionally with the filename to store it under
    Remote {
        url: String,
        filename: Option<String>,
    },
}

/// Destination and ACL options shared by every upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Full object key, used verbatim; empty means not given
    pub destination_path: Option<String>,

    /// Directory-like prefix the filename is appended to
    ///
    /// Ignored when `destination_path` is set.
    pub folder: Option<String>,

    /// Request a public-read ACL
    pub make_public: bool,
}

/// One upload request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub source: TransferSource,
    pub options: UploadOptions,
}

/// Orchestrates uploads and deletes against one bucket
pub struct TransferEngine {
    config: BackendConfig,
    store: Arc<dyn ObjectStore>,
    source: Option<Arc<dyn RemoteSource>>,
    scratch_dir: Option<PathBuf>,
}

impl TransferEngine {
    /// Engine for local uploads and deletes
    ///
    /// URL uploads also need [`with_remote_source`](Self::with_remote_source).
    pub fn new(config: BackendConfig, store: Arc<dyn ObjectStore>) -> Self {
        Self {
            config,
            store,
            source: None,
            scratch_dir: None,
        }
    }

    /// Fetch URL uploads through `source`
    pub fn with_remote_source(mut self, source: Arc<dyn RemoteSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Spool downloads into `dir` instead of the system temp directory
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    /// Run a request of either kind
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferResult> {
        match &request.source {
            TransferSource::Local(path) => self.upload_local(path, &request.options).await,
            TransferSource::Remote { url, filename } => {
                self.upload_from_url(url, filename.as_deref(), &request.options)
                    .await
            }
        }
    }

    /// Upload a local file
    ///
    /// Returns `Err(NotFound)` or `Err(NotAFile)` when the path is unusable;
    /// every backend failure is an `Ok(Failure)`.
    pub async fn upload_local(
        &self,
        path: impl AsRef<Path>,
        options: &UploadOptions,
    ) -> Result<TransferResult> {
        let path = path.as_ref();
        let metadata = match tokio::fs::metadata(path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(Error::NotAFile(path.display().to_string()));
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::NotAFile(path.display().to_string()))?;

        Ok(self.put_file(path, &filename, metadata.len(), options).await)
    }

    /// Download `url` to a scratch file and upload it
    ///
    /// The scratch file is removed before this returns, whatever the outcome.
    /// `Err` is reserved for local disk failures and a missing remote source;
    /// a bad URL, a failed download or a rejected upload is an `Ok(Failure)`
    /// carrying `source_url`.
    pub async fn upload_from_url(
        &self,
        url: &str,
        filename: Option<&str>,
        options: &UploadOptions,
    ) -> Result<TransferResult> {
        let source = self
            .source
            .as_deref()
            .ok_or_else(|| Error::Config("no remote source configured for URL uploads".into()))?;

        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(e) => {
                let failure = TransferFailure::new(format!("Invalid URL: {e}")).with_source_url(url);
                return Ok(TransferResult::Failure(failure));
            }
        };

        let filename = match filename.filter(|f| !f.is_empty()) {
            Some(f) => f.to_string(),
            None => filename_from_url(&parsed, Timestamp::now()),
        };

        let temp = self.create_temp_file(&filename)?;
        tracing::info!(url = %parsed, temp = %temp.path().display(), "downloading");

        let result = self
            .download_and_put(source, &parsed, temp.path(), &filename, options)
            .await;

        // Dropping the handle on an early exit also removes the file; closing
        // explicitly lets us report a failed removal.
        let temp_path = temp.path().to_path_buf();
        if let Err(e) = temp.close() {
            tracing::warn!(path = %temp_path.display(), error = %e, "failed to remove scratch file");
        }

        result.map(|r| r.with_source_url(url))
    }

    /// Delete one object
    ///
    /// Whether a missing key counts as success is up to the backend.
    pub async fn delete(&self, key: &str) -> DeleteResult {
        tracing::info!(bucket = self.config.bucket(), key, "deleting");

        match self.store.delete_object(self.config.bucket(), key).await {
            Ok(()) => DeleteResult::Success {
                key: key.to_string(),
                message: "File deleted successfully".to_string(),
            },
            Err(e) => {
                tracing::warn!(key, error = %e, "delete failed");
                DeleteResult::Failure(
                    TransferFailure::new(format!("Failed to delete file: {e}")).with_key(key),
                )
            }
        }
    }

    async fn download_and_put(
        &self,
        source: &dyn RemoteSource,
        url: &Url,
        temp_path: &Path,
        filename: &str,
        options: &UploadOptions,
    ) -> Result<TransferResult> {
        let size = match download(source, url, temp_path).await {
            Ok(size) => size,
            Err(e) if e.is_local() => return Err(e),
            Err(e) => {
                tracing::warn!(%url, error = %e, "download failed");
                let failure = TransferFailure::new(format!("Failed to download from URL: {e}"));
                return Ok(TransferResult::Failure(failure));
            }
        };
        tracing::debug!(%url, size, "download complete");

        Ok(self.put_file(temp_path, filename, size, options).await)
    }

    async fn put_file(
        &self,
        path: &Path,
        filename: &str,
        size_bytes: u64,
        options: &UploadOptions,
    ) -> TransferResult {
        let bucket = self.config.bucket();
        let key = match options.destination_path.as_deref().filter(|d| !d.is_empty()) {
            Some(dest) => dest.to_string(),
            None => resolve_key(filename, options.folder.as_deref(), self.config.prefix()),
        };
        let content_type = content_type_for(filename);
        tracing::debug!(key = %key, content_type = %content_type, "resolved upload target");
        tracing::info!(bucket, key = %key, size_bytes, public = options.make_public, "uploading");

        match self
            .store
            .put_object(bucket, &key, path, &content_type, options.make_public)
            .await
        {
            Ok(()) => {
                let url = public_url(&key, &self.config);
                tracing::info!(url = %url, "upload complete");
                TransferResult::Success(UploadSuccess {
                    bucket: bucket.to_string(),
                    key,
                    url,
                    filename: filename.to_string(),
                    size_bytes,
                    content_type,
                    uploaded_at: Timestamp::now(),
                    source_url: None,
                })
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "upload failed");
                TransferResult::Failure(
                    TransferFailure::new(format!("Upload failed: {e}")).with_filename(filename),
                )
            }
        }
    }

    fn create_temp_file(&self, filename: &str) -> Result<NamedTempFile> {
        let dir = self.scratch_dir.clone().unwrap_or_else(default_scratch_dir);
        let suffix = Path::new(filename)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Ok(tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(&suffix)
            .tempfile_in(dir)?)
    }
}

/// Stream the body of `url` into `dest`, returning the bytes written
///
/// The file is flushed and closed before this returns.
async fn download(source: &dyn RemoteSource, url: &Url, dest: &Path) -> Result<u64> {
    let mut body = source.fetch(url).await?;

    let file = tokio::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(dest)
        .await?;
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);

    let mut written = 0u64;
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    writer.flush().await?;
    writer.into_inner().sync_all().await?;
    Ok(written)
}

/// System temp directory, or the working directory when there is none
fn default_scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir();
    if dir.is_dir() {
        dir
    } else {
        PathBuf::from(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;
    use crate::traits::{ByteStream, MockObjectStore};
    use async_trait::async_trait;
    use bytes::Bytes;
    use futures::stream;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Canned remote responses
    enum FakeSource {
        Body(Vec<Vec<u8>>),
        FailMidStream(Vec<Vec<u8>>),
        Status(u16),
    }

    #[async_trait]
    impl RemoteSource for FakeSource {
        async fn fetch(&self, _url: &Url) -> Result<ByteStream> {
            match self {
                FakeSource::Body(chunks) => {
                    let items: Vec<Result<Bytes>> =
                        chunks.iter().cloned().map(|c| Ok(Bytes::from(c))).collect();
                    Ok(stream::iter(items).boxed())
                }
                FakeSource::FailMidStream(chunks) => {
                    let mut items: Vec<Result<Bytes>> =
                        chunks.iter().cloned().map(|c| Ok(Bytes::from(c))).collect();
                    items.push(Err(Error::Network("connection reset by peer".into())));
                    Ok(stream::iter(items).boxed())
                }
                FakeSource::Status(code) => Err(Error::Network(format!("HTTP status {code}"))),
            }
        }
    }

    fn config() -> BackendConfig {
        BackendConfig::new(Provider::S3, "key", "secret", "my-bucket").unwrap()
    }

    fn engine(store: MockObjectStore, source: FakeSource, scratch: &TempDir) -> TransferEngine {
        TransferEngine::new(config(), Arc::new(store))
            .with_remote_source(Arc::new(source))
            .with_scratch_dir(scratch.path())
    }

    fn scratch_is_empty(scratch: &TempDir) -> bool {
        std::fs::read_dir(scratch.path()).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_upload_local_with_destination_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("report.pdf");
        std::fs::write(&file, vec![7u8; 1000]).unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|bucket, key, _path, content_type, public| {
                bucket == "my-bucket"
                    && key == "reports/2024/report.pdf"
                    && content_type == "application/pdf"
                    && *public
            })
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));

        let engine = engine(store, FakeSource::Status(500), &dir);
        let options = UploadOptions {
            destination_path: Some("reports/2024/report.pdf".into()),
            make_public: true,
            ..Default::default()
        };

        let result = engine.upload_local(&file, &options).await.unwrap();
        let success = result.success().expect("upload should succeed");
        assert_eq!(success.key, "reports/2024/report.pdf");
        assert_eq!(success.size_bytes, 1000);
        assert_eq!(success.content_type, "application/pdf");
        assert_eq!(success.filename, "report.pdf");
        assert_eq!(
            success.url,
            "https://my-bucket.s3.us-east-1.amazonaws.com/reports/2024/report.pdf"
        );
        assert!(success.source_url.is_none());
    }

    #[tokio::test]
    async fn test_upload_local_uses_configured_prefix() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"hello").unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|_, key, _, _, public| key == "uploads/a.txt" && !*public)
            .returning(|_, _, _, _, _| Ok(()));

        let engine = TransferEngine::new(config().with_prefix("uploads/"), Arc::new(store));

        let result = engine
            .upload_local(&file, &UploadOptions::default())
            .await
            .unwrap();
        assert_eq!(result.success().unwrap().key, "uploads/a.txt");
    }

    #[tokio::test]
    async fn test_upload_local_folder_option() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"hello").unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|_, key, _, _, _| key == "docs/a.txt")
            .returning(|_, _, _, _, _| Ok(()));

        let engine = TransferEngine::new(config().with_prefix("ignored"), Arc::new(store));
        let options = UploadOptions {
            folder: Some("docs".into()),
            ..Default::default()
        };

        let result = engine.upload_local(&file, &options).await.unwrap();
        assert_eq!(result.success().unwrap().key, "docs/a.txt");
    }

    #[tokio::test]
    async fn test_upload_local_empty_destination_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"hello").unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|_, key, _, _, _| key == "uploads/a.txt")
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));

        let engine = TransferEngine::new(config().with_prefix("uploads"), Arc::new(store));
        let options = UploadOptions {
            destination_path: Some(String::new()),
            ..Default::default()
        };

        let result = engine.upload_local(&file, &options).await.unwrap();
        assert_eq!(result.success().unwrap().key, "uploads/a.txt");
    }

    #[tokio::test]
    async fn test_upload_from_url_without_remote_source() {
        let scratch = TempDir::new().unwrap();
        let engine = TransferEngine::new(config(), Arc::new(MockObjectStore::new()))
            .with_scratch_dir(scratch.path());

        let err = engine
            .upload_from_url("https://example.com/a.txt", None, &UploadOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(scratch_is_empty(&scratch));
    }

    #[tokio::test]
    async fn test_upload_local_missing_file() {
        let dir = TempDir::new().unwrap();
        let engine = engine(MockObjectStore::new(), FakeSource::Status(500), &dir);

        let err = engine
            .upload_local(dir.path().join("nope.txt"), &UploadOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_upload_local_directory() {
        let dir = TempDir::new().unwrap();
        let engine = engine(MockObjectStore::new(), FakeSource::Status(500), &dir);

        let err = engine
            .upload_local(dir.path(), &UploadOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotAFile(_)));
    }

    #[tokio::test]
    async fn test_upload_local_backend_failure() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"hello").unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .returning(|_, _, _, _, _| Err(Error::Backend("AccessDenied".into())));

        let engine = engine(store, FakeSource::Status(500), &dir);
        let result = engine
            .upload_local(&file, &UploadOptions::default())
            .await
            .unwrap();

        let failure = result.failure().expect("upload should fail");
        assert!(failure.error.contains("AccessDenied"));
        assert_eq!(failure.filename.as_deref(), Some("a.txt"));
    }

    #[tokio::test]
    async fn test_upload_from_url_success_cleans_up() {
        let scratch = TempDir::new().unwrap();
        let seen: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));
        let seen_in_mock = Arc::clone(&seen);

        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|_, key, _, content_type, _| key == "sample.pdf" && content_type == "application/pdf")
            .times(1)
            .returning(move |_, _, path, _, _| {
                // The download must be complete before the upload reads it.
                assert_eq!(std::fs::metadata(path).unwrap().len(), 20_000);
                *seen_in_mock.lock().unwrap() = Some(path.to_path_buf());
                Ok(())
            });

        let body = vec![vec![1u8; 8192], vec![2u8; 8192], vec![3u8; 3616]];
        let engine = engine(store, FakeSource::Body(body), &scratch);

        let result = engine
            .upload_from_url(
                "https://example.com/files/sample.pdf",
                None,
                &UploadOptions::default(),
            )
            .await
            .unwrap();

        let success = result.success().expect("upload should succeed");
        assert_eq!(success.size_bytes, 20_000);
        assert_eq!(success.filename, "sample.pdf");
        assert_eq!(
            success.source_url.as_deref(),
            Some("https://example.com/files/sample.pdf")
        );

        let temp_path = seen.lock().unwrap().clone().unwrap();
        assert!(temp_path.starts_with(scratch.path()));
        assert!(!temp_path.exists());
        assert!(scratch_is_empty(&scratch));
    }

    #[tokio::test]
    async fn test_upload_from_url_backend_failure_cleans_up() {
        let scratch = TempDir::new().unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .returning(|_, _, _, _, _| Err(Error::Backend("QuotaExceeded".into())));

        let engine = engine(store, FakeSource::Body(vec![b"data".to_vec()]), &scratch);
        let result = engine
            .upload_from_url("https://example.com/a.txt", None, &UploadOptions::default())
            .await
            .unwrap();

        let failure = result.failure().expect("upload should fail");
        assert!(failure.error.contains("QuotaExceeded"));
        assert_eq!(failure.source_url.as_deref(), Some("https://example.com/a.txt"));
        assert!(scratch_is_empty(&scratch));
    }

    #[tokio::test]
    async fn test_upload_from_url_http_404() {
        let scratch = TempDir::new().unwrap();
        let mut store = MockObjectStore::new();
        store.expect_put_object().never();

        let engine = engine(store, FakeSource::Status(404), &scratch);
        let result = engine
            .upload_from_url(
                "https://example.com/missing.pdf",
                None,
                &UploadOptions::default(),
            )
            .await
            .unwrap();

        let failure = result.failure().expect("download should fail");
        assert!(failure.error.contains("404"));
        assert_eq!(
            failure.source_url.as_deref(),
            Some("https://example.com/missing.pdf")
        );
        assert!(scratch_is_empty(&scratch));
    }

    #[tokio::test]
    async fn test_upload_from_url_mid_stream_failure() {
        let scratch = TempDir::new().unwrap();
        let mut store = MockObjectStore::new();
        store.expect_put_object().never();

        let engine = engine(
            store,
            FakeSource::FailMidStream(vec![vec![0u8; 4096]]),
            &scratch,
        );
        let result = engine
            .upload_from_url("https://example.com/big.iso", None, &UploadOptions::default())
            .await
            .unwrap();

        let failure = result.failure().expect("download should fail");
        assert!(failure.error.contains("connection reset"));
        assert!(scratch_is_empty(&scratch));
    }

    #[tokio::test]
    async fn test_upload_from_url_custom_filename_and_key() {
        let scratch = TempDir::new().unwrap();
        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|_, key, _, content_type, _| key == "media/custom.png" && content_type == "image/png")
            .returning(|_, _, _, _, _| Ok(()));

        let engine = engine(store, FakeSource::Body(vec![b"png".to_vec()]), &scratch);
        let options = UploadOptions {
            folder: Some("media/".into()),
            ..Default::default()
        };
        let result = engine
            .upload_from_url("https://example.com/download?id=1", Some("custom.png"), &options)
            .await
            .unwrap();

        let success = result.success().unwrap();
        assert_eq!(success.filename, "custom.png");
        assert_eq!(success.key, "media/custom.png");
    }

    #[tokio::test]
    async fn test_upload_from_url_without_path_gets_timestamped_name() {
        let scratch = TempDir::new().unwrap();
        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|_, key, _, content_type, _| {
                key.starts_with("download_") && content_type == "application/octet-stream"
            })
            .returning(|_, _, _, _, _| Ok(()));

        let engine = engine(store, FakeSource::Body(vec![b"x".to_vec()]), &scratch);
        let result = engine
            .upload_from_url("https://example.com", None, &UploadOptions::default())
            .await
            .unwrap();

        let filename = &result.success().unwrap().filename;
        assert!(filename.starts_with("download_"));
        assert_eq!(filename.len(), "download_YYYYMMDD_HHMMSS".len());
    }

    #[tokio::test]
    async fn test_upload_from_invalid_url() {
        let scratch = TempDir::new().unwrap();
        let engine = engine(MockObjectStore::new(), FakeSource::Status(200), &scratch);

        let result = engine
            .upload_from_url("not a url", None, &UploadOptions::default())
            .await
            .unwrap();

        let failure = result.failure().unwrap();
        assert!(failure.error.starts_with("Invalid URL"));
        assert_eq!(failure.source_url.as_deref(), Some("not a url"));
    }

    #[tokio::test]
    async fn test_upload_from_url_missing_scratch_dir() {
        let scratch = TempDir::new().unwrap();
        let engine = TransferEngine::new(config(), Arc::new(MockObjectStore::new()))
            .with_remote_source(Arc::new(FakeSource::Body(vec![])))
            .with_scratch_dir(scratch.path().join("does-not-exist"));

        let err = engine
            .upload_from_url("https://example.com/a.txt", None, &UploadOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_local());
    }

    #[tokio::test]
    async fn test_transfer_dispatch() {
        let scratch = TempDir::new().unwrap();
        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|_, key, _, _, _| key == "b.txt")
            .returning(|_, _, _, _, _| Ok(()));

        let engine = engine(store, FakeSource::Body(vec![b"b".to_vec()]), &scratch);
        let request = TransferRequest {
            source: TransferSource::Remote {
                url: "https://example.com/b.txt".into(),
                filename: None,
            },
            options: UploadOptions::default(),
        };

        let result = engine.transfer(&request).await.unwrap();
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_delete_success() {
        let scratch = TempDir::new().unwrap();
        let mut store = MockObjectStore::new();
        store
            .expect_delete_object()
            .withf(|bucket, key| bucket == "my-bucket" && key == "docs/a.txt")
            .times(1)
            .returning(|_, _| Ok(()));

        let engine = engine(store, FakeSource::Status(500), &scratch);
        let result = engine.delete("docs/a.txt").await;

        assert_eq!(
            result,
            DeleteResult::Success {
                key: "docs/a.txt".into(),
                message: "File deleted successfully".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let scratch = TempDir::new().unwrap();
        let mut store = MockObjectStore::new();
        store
            .expect_delete_object()
            .returning(|_, _| Err(Error::Backend("AccessDenied".into())));

        let engine = engine(store, FakeSource::Status(500), &scratch);
        match engine.delete("docs/a.txt").await {
            DeleteResult::Failure(f) => {
                assert!(f.error.contains("AccessDenied"));
                assert_eq!(f.key.as_deref(), Some("docs/a.txt"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
