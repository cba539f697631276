//! Error types for s3drop-core
//!
//! Per-operation network and backend failures are normally folded into
//! [`TransferResult::Failure`](crate::result::TransferResult) values. This
//! enum covers everything else: misconfiguration, local source problems, and
//! the raw failures the adapters report before they are folded.

use thiserror::Error;

/// Result type alias for s3drop-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3drop-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid backend configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local source path does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Local source path exists but is not a regular file
    #[error("Not a file: {0}")]
    NotAFile(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Remote download failed (timeout, DNS, non-2xx status)
    #[error("Network error: {0}")]
    Network(String),

    /// Storage service rejected the request
    #[error("Backend error: {0}")]
    Backend(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the process exit code for this error
    ///
    /// Every failure exits with 1; clap reports argument errors on its own.
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Whether this error originates on the local machine rather than the network
    pub const fn is_local(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::NotAFile(_) | Error::Io(_))
    }
}
