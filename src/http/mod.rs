//! HTTP protocol layer module
//!
//! Content-type table and response builders, independent of how a request is resolved.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use mime::content_type_for;
pub use response::{build_404_response, build_file_response, NOT_FOUND_BODY};
