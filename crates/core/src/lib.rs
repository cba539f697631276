//! s3drop-core: transfer orchestration for the s3drop uploader
//!
//! This crate provides:
//! - Backend configuration (environment and config file)
//! - Object key, content type and public URL resolution
//! - The `ObjectStore` and `RemoteSource` traits
//! - `TransferEngine` (uploads, upload-from-URL, delete) and `Lister`
//!
//! Nothing here depends on a specific S3 SDK or HTTP client; the adapters
//! live in s3drop-s3.

pub mod config;
pub mod content_type;
pub mod error;
pub mod list;
pub mod path;
pub mod public_url;
pub mod result;
pub mod traits;
pub mod transfer;

pub use config::{BackendConfig, BackendSettings, Config, ConfigManager, Provider};
pub use content_type::content_type_for;
pub use error::{Error, Result};
pub use list::Lister;
pub use path::{filename_from_url, resolve_key};
pub use public_url::public_url;
pub use result::{
    DeleteResult, Listing, ObjectListing, TransferFailure, TransferResult, UploadSuccess,
};
pub use traits::{ByteStream, ObjectInfo, ObjectStore, RemoteSource};
pub use transfer::{TransferEngine, TransferRequest, TransferSource, UploadOptions};
