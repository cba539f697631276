//! Bucket listing
//!
//! Listing is read-only, so failures never propagate as errors: a failed
//! call yields an empty [`Listing`] with its `error` set.

use std::sync::Arc;

use crate::config::BackendConfig;
use crate::public_url::public_url;
use crate::result::{Listing, ObjectListing};
use crate::traits::ObjectStore;

/// Lists objects under a prefix, one bounded page at a time
pub struct Lister {
    config: BackendConfig,
    store: Arc<dyn ObjectStore>,
}

impl Lister {
    pub fn new(config: BackendConfig, store: Arc<dyn ObjectStore>) -> Self {
        Self { config, store }
    }

    /// List up to `max_results` objects
    ///
    /// Uses `prefix_override` when given and non-empty, else the configured
    /// prefix (which may itself be empty).
    pub async fn list(&self, prefix_override: Option<&str>, max_results: usize) -> Listing {
        let prefix = prefix_override
            .filter(|p| !p.is_empty())
            .unwrap_or(self.config.prefix());
        let bucket = self.config.bucket();
        tracing::debug!(bucket, prefix, max_results, "listing objects");

        match self.store.list_objects(bucket, prefix, max_results).await {
            Ok(objects) => Listing {
                entries: objects
                    .into_iter()
                    .take(max_results)
                    .map(|object| ObjectListing {
                        url: public_url(&object.key, &self.config),
                        key: object.key,
                        size_bytes: object.size_bytes,
                        last_modified: object.last_modified,
                    })
                    .collect(),
                error: None,
            },
            Err(e) => {
                tracing::warn!(bucket, prefix, error = %e, "failed to list files");
                Listing::failed(format!("Failed to list files: {e}"))
            }
        }
    }
}
