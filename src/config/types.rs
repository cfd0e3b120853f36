// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Listening address
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Asset root and default document
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory that request paths are joined to
    pub root: String,
    /// File served for a request to `/`
    pub default_document: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Per-connection timeout in seconds, 0 disables it
    pub connection_timeout: u64,
    #[serde(default)]
    pub max_connections: Option<u64>,
}
