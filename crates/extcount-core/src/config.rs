use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::allowlist::AllowList;

/// Optional configuration loaded from `~/.config/extcount/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtCountConfig {
    /// Newline-delimited allow-list file replacing the bundled one.
    #[serde(default)]
    pub allowlist: Option<PathBuf>,
}

impl ExtCountConfig {
    /// Load the allow-list this configuration points at, or the bundled one.
    pub fn load_allowlist(&self) -> Result<AllowList> {
        let list = match &self.allowlist {
            Some(path) => {
                tracing::debug!("loading allow-list from {}", path.display());
                AllowList::from_path(path)?
            }
            None => AllowList::bundled()?,
        };
        tracing::info!("allow-list ready with {} extensions", list.len());
        Ok(list)
    }
}

/// Default config location; `None` if no config file exists yet.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("extcount")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load the default config file if present. Unlike `load_from`, a missing file
/// yields defaults and nothing is written.
pub fn load() -> Result<ExtCountConfig> {
    let path = config_path().unwrap_or_else(|e| {
        tracing::warn!("cannot resolve config dir, using defaults: {:#}", e);
        None
    });
    match path {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(ExtCountConfig::default())
        }
    }
}

/// Load config from an explicit path. A missing or malformed file is an error.
pub fn load_from(path: &Path) -> Result<ExtCountConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Error reading config {}", path.display()))?;
    let cfg: ExtCountConfig = toml::from_str(&data)
        .with_context(|| format!("Error parsing config {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
