//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::path::Path;

/// Content-Type used when the extension is missing or not in the table
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Get MIME Content-Type based on file extension
///
/// Matching is case-sensitive: `INDEX.HTML` is served as a binary blob.
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("css") => "text/css",
        Some("ico") => "image/x-icon",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

/// Content-Type for a resolved file path
pub fn content_type_for(path: &Path) -> &'static str {
    get_content_type(path.extension().and_then(|e| e.to_str()))
}
