//! Public URL construction
//!
//! URLs are computed purely from configuration; no request is made.

use crate::config::BackendConfig;

/// Compute the externally reachable URL for `key`
///
/// A configured public URL (CDN) replaces the bucket host. Otherwise the
/// bucket's virtual-hosted URL is used: on the configured endpoint when one
/// is set, or on the regional AWS host when not. Path-style endpoints put the
/// bucket in the path instead.
pub fn public_url(key: &str, config: &BackendConfig) -> String {
    if let Some(base) = config.public_url() {
        return format!("{}/{key}", base.trim_end_matches('/'));
    }

    let bucket = config.bucket();
    match config.endpoint() {
        Some(endpoint) => {
            let scheme = endpoint.scheme();
            let host = endpoint.host_str().unwrap_or_default();
            let authority = match endpoint.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            };
            if config.force_path_style() {
                format!("{scheme}://{authority}/{bucket}/{key}")
            } else {
                format!("{scheme}://{bucket}.{authority}/{key}")
            }
        }
        None => format!("https://{bucket}.s3.{}.amazonaws.com/{key}", config.region()),
    }
}
