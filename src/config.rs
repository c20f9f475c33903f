use anyhow::Context;
use serde::Deserialize;

/// Top-level server configuration.
///
/// Loaded from a YAML file (path taken from `WICKET_CONFIG`, default
/// `wicket.yaml`). Every field has a default, so a missing or partial
/// file is fine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the accept loop binds to.
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Settings consumed by the dispatch core.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory all request targets are resolved against.
    pub root: String,

    /// Document appended when a static target ends in `/`.
    pub index_document: String,

    /// Targets containing this segment are served by a handler process.
    pub dynamic_marker: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            index_document: "home.html".to_string(),
            dynamic_marker: "cgi-bin".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("WICKET_CONFIG").unwrap_or_else(|_| "wicket.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_yaml::from_str(&raw)
                .with_context(|| format!("Invalid config file {path}"))?,
            Err(_) => Config::default(),
        };

        // LISTEN wins over the file.
        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }
}
