//! HTTP response building module
//!
//! Provides builders for the two responses the asset server sends.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Body of every not-found response
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Build 200 response carrying a whole file
pub fn build_file_response(data: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(NOT_FOUND_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(NOT_FOUND_BODY)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
