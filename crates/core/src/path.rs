//! Object key construction
//!
//! Keys are joined as plain strings. Nothing here normalizes `..` segments or
//! repeated separators; a caller-supplied folder or URL filename ends up in
//! the key exactly as given.

use jiff::Timestamp;
use url::Url;

/// Key separator used by object stores
pub const SEPARATOR: char = '/';

/// Compute the destination key for `filename`
///
/// - `custom_path` is a directory-like prefix; a separator is appended if it
///   does not already end with one. It always wins over `configured_prefix`.
/// - Otherwise a non-empty `configured_prefix` is used with its trailing
///   separators trimmed.
/// - Otherwise the key is the filename itself.
pub fn resolve_key(filename: &str, custom_path: Option<&str>, configured_prefix: &str) -> String {
    match custom_path.filter(|p| !p.is_empty()) {
        Some(path) if path.ends_with(SEPARATOR) => format!("{path}{filename}"),
        Some(path) => format!("{path}{SEPARATOR}{filename}"),
        None if !configured_prefix.is_empty() => {
            format!(
                "{}{SEPARATOR}{filename}",
                configured_prefix.trim_end_matches(SEPARATOR)
            )
        }
        None => filename.to_string(),
    }
}

/// Derive a local filename for a download
///
/// Uses the last non-empty path segment of `url`. URLs without one get a
/// timestamped name such as `download_20240131_235959`.
pub fn filename_from_url(url: &Url, now: Timestamp) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        .map(str::to_string)
        .unwrap_or_else(|| now.strftime("download_%Y%m%d_%H%M%S").to_string())
}
