use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level server configuration.
///
/// Loaded from an optional YAML file named by the `CONFIG` environment
/// variable, with `LISTEN` and `DOC_ROOT` environment overrides applied on
/// top. Every field has a default, so `Config::load()` with no file and no
/// environment yields a working server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to. Port 0 asks the OS for an ephemeral
    /// port; the listener logs the address it actually bound.
    pub listen_addr: String,
    /// When false, connections are served to completion in accept order.
    /// When true, each connection runs in its own task.
    pub concurrent: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document root. Every served path lives beneath this directory.
    pub root: PathBuf,
    /// File name served when a URL names a directory.
    pub index: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4000".to_string(),
            concurrent: false,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("htdocs"),
            index: "index.html".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("parsing config file {}", path))?
            }
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOC_ROOT") {
            cfg.site.root = PathBuf::from(root);
        }

        Ok(cfg)
    }
}
