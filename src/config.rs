use std::path::{Path, PathBuf};

use eyre::WrapErr as _;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "data/config.json";
const DEFAULT_RUNTIME_VERSION: &str = "16.14.0";

/// Site-wide metadata, loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_runtime_version")]
    pub runtime_version: String,
}

fn default_runtime_version() -> String {
    DEFAULT_RUNTIME_VERSION.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            runtime_version: default_runtime_version(),
        }
    }
}

impl SiteConfig {
    pub fn config_path() -> PathBuf {
        std::env::var("SITE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    #[tracing::instrument(err)]
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read site config at {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("Failed to parse site config at {}", path.display()))?;

        tracing::info!(title = ?config.title, "Loaded site config");

        Ok(config)
    }

    pub fn from_env() -> eyre::Result<Self> {
        Self::load(&Self::config_path())
    }
}
