//! Request handler module
//!
//! Resolves request targets to files under the asset root and builds the response.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
