// Application state module
// Immutable per-process state shared by every connection

use std::path::Path;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Base directory request paths are joined to
    pub fn root(&self) -> &Path {
        Path::new(&self.config.assets.root)
    }

    pub fn default_document(&self) -> &str {
        &self.config.assets.default_document
    }

    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_read_config() {
        let mut cfg = Config::load_from("does-not-exist").unwrap();
        cfg.assets.root = "/srv/grammar".to_string();
        cfg.assets.default_document = "start.html".to_string();
        cfg.logging.access_log = true;

        let state = AppState::new(&cfg);
        assert_eq!(state.root(), Path::new("/srv/grammar"));
        assert_eq!(state.default_document(), "start.html");
        assert!(state.access_log());
    }
}
