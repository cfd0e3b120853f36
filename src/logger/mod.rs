//! Logger module
//!
//! Provides logging utilities for the asset server:
//! - The startup line announcing the listening URL
//! - Optional access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Write to access log
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// The one line printed once the listener is bound
pub fn server_start_line(addr: &SocketAddr) -> String {
    format!("Server running at http://{addr}/")
}

/// Always goes to stdout, whatever the access log target is
pub fn log_server_start(addr: &SocketAddr) {
    println!("{}", server_start_line(addr));
}

/// Connection-level failures belong to the request stream, not the error log
pub fn connection_error_line(peer_addr: &SocketAddr, err: &impl std::fmt::Debug) -> String {
    format!("[ERROR] Failed to serve connection from {peer_addr}: {err:?}")
}

pub fn log_connection_error(peer_addr: &SocketAddr, err: &impl std::fmt::Debug) {
    write_access(&connection_error_line(peer_addr, err));
}

pub fn log_connection_timeout(peer_addr: &SocketAddr, secs: u64) {
    write_access(&format!(
        "[WARN] Connection from {peer_addr} timed out after {secs} seconds"
    ));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_start_line() {
        let addr: SocketAddr = "127.0.0.1:8000".parse().unwrap();
        assert_eq!(server_start_line(&addr), "Server running at http://127.0.0.1:8000/");
    }

    #[test]
    fn test_connection_error_line_names_peer() {
        let peer: SocketAddr = "127.0.0.1:51234".parse().unwrap();
        let err = std::io::Error::from(std::io::ErrorKind::ConnectionReset);
        let line = connection_error_line(&peer, &err);
        assert!(line.starts_with("[ERROR] Failed to serve connection from 127.0.0.1:51234: "));
        assert!(line.contains("ConnectionReset"), "{line}");
    }
}
