// Configuration module entry point
// Loads settings and holds the per-process application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Config file looked up in the working directory, extension resolved by the loader
pub const CONFIG_FILE: &str = "grammar_assets";

impl Config {
    /// Load configuration from `grammar_assets.toml` (optional) and `SERVER_*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("assets.root", ".")?
            .set_default("assets.default_document", DEFAULT_DOCUMENT)?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 0)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
