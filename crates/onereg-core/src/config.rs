use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/onereg/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneregConfig {
    /// Hard ceiling per registration request, in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Skip TLS certificate verification when talking to the provider.
    /// Oneprovider deployments targeted by this tool run with self-signed
    /// certificates; the register command warns when this is active.
    pub insecure_skip_verify: bool,
}

impl Default for OneregConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 60,
            connect_timeout_secs: 15,
            insecure_skip_verify: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("onereg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OneregConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OneregConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OneregConfig = toml::from_str(&data)?;
    Ok(cfg)
}
