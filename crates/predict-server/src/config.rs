use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Args;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_MODEL_PATH: &str = "models/random_forest_model.json";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub(crate) listen_addr: String,
    #[serde(default = "default_model_path")]
    pub(crate) model_path: PathBuf,
    #[serde(default)]
    pub(crate) log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            model_path: default_model_path(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Builds the effective config: file values (if a file is given) with
    /// command-line flags layered on top.
    pub(crate) fn resolve(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => load_server_config(path)?,
            None => Self::default(),
        };
        if let Some(listen_addr) = &args.listen_addr {
            config.listen_addr = listen_addr.clone();
        }
        if let Some(model_path) = &args.model_path {
            config.model_path = model_path.clone();
        }
        if let Some(log_dir) = &args.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        validate_server_config(&config)?;
        Ok(config)
    }
}

fn validate_server_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.listen_addr.trim().is_empty() {
        anyhow::bail!("listen_addr must not be empty");
    }
    if config.model_path.as_os_str().is_empty() {
        anyhow::bail!("model_path must not be empty");
    }
    Ok(())
}

pub(crate) fn load_server_config(path: &Path) -> anyhow::Result<ServerConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: ServerConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}
