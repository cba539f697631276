//! Operation result records
//!
//! Every transfer returns a tagged success/failure value instead of an error,
//! so callers uploading many files can keep going past individual failures.
//! All records serialize to flat JSON objects.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Outcome of an upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TransferResult {
    Success(UploadSuccess),
    Failure(TransferFailure),
}

/// Details of a completed upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSuccess {
    pub bucket: String,
    pub key: String,
    pub url: String,
    pub filename: String,
    pub size_bytes: u64,
    pub content_type: String,
    pub uploaded_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Details of a failed operation
///
/// Only `error` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl TransferFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            filename: None,
            source_url: None,
            key: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl TransferResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TransferResult::Success(_))
    }

    /// The success record, if any
    pub fn success(&self) -> Option<&UploadSuccess> {
        match self {
            TransferResult::Success(s) => Some(s),
            TransferResult::Failure(_) => None,
        }
    }

    /// The failure record, if any
    pub fn failure(&self) -> Option<&TransferFailure> {
        match self {
            TransferResult::Success(_) => None,
            TransferResult::Failure(f) => Some(f),
        }
    }

    /// Attach the remote URL the upload was fetched from
    pub(crate) fn with_source_url(self, source_url: &str) -> Self {
        match self {
            TransferResult::Success(mut s) => {
                s.source_url = Some(source_url.to_string());
                TransferResult::Success(s)
            }
            TransferResult::Failure(f) => TransferResult::Failure(f.with_source_url(source_url)),
        }
    }
}

/// Outcome of a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeleteResult {
    Success { key: String, message: String },
    Failure(TransferFailure),
}

impl DeleteResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DeleteResult::Success { .. })
    }
}

/// One object in a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectListing {
    pub key: String,
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,
    pub url: String,
}

/// A single bounded page of objects
///
/// A failed listing has no entries and carries the backend's message in
/// `error`, so "failed" and "empty" stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub entries: Vec<ObjectListing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Listing {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
