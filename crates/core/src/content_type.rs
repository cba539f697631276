//! Content-type detection from file extensions

/// Type used when the extension is unknown or absent
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Guess the MIME type for `filename` from its extension
pub fn content_type_for(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string())
}
