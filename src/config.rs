use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
const DEFAULT_DOCUMENT_ROOT: &str = "./public";
const DEFAULT_SERVER_NAME: &str = "staticd/0.1";

/// Server configuration.
///
/// Loaded once at startup and cloned into every connection task. The
/// `server_name` doubles as the `Server:` header value and the replacement
/// for the server placeholder in templated HTML bodies.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub document_root: PathBuf,
    pub server_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            document_root: PathBuf::from(DEFAULT_DOCUMENT_ROOT),
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `STATICD_CONFIG`,
    /// falling back to defaults when the variable is unset or the file is
    /// unreadable. `LISTEN` overrides the listen address either way.
    pub fn load() -> Self {
        let mut cfg = std::env::var("STATICD_CONFIG")
            .ok()
            .and_then(|path| Self::from_file(&path))
            .unwrap_or_default();

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        cfg
    }

    fn from_file(path: &str) -> Option<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Cannot read config file {}: {}", path, e);
                return None;
            }
        };

        match serde_yaml::from_str(&text) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::error!("Invalid config file {}: {}", path, e);
                None
            }
        }
    }
}
