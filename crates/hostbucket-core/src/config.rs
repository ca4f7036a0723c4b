use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Flash space assumed for the device filesystem when reporting usage.
pub const DEFAULT_STORAGE_BUDGET_BYTES: u64 = 1024 * 1024;

/// Global configuration loaded from `~/.config/hostbucket/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostbucketConfig {
    /// Directory the `hosts_<len>` files are written to.
    pub output_dir: PathBuf,
    /// Whole-request timeout per source, in seconds.
    pub timeout_secs: u64,
    /// Connect timeout per source, in seconds.
    pub connect_timeout_secs: u64,
    /// Storage budget used for the percentage in the summary.
    pub storage_budget_bytes: u64,
    /// Optional User-Agent header sent with each GET.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HostbucketConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            timeout_secs: 30,
            connect_timeout_secs: 15,
            storage_budget_bytes: DEFAULT_STORAGE_BUDGET_BYTES,
            user_agent: None,
        }
    }
}

impl HostbucketConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Rejects settings that curl would read as "no limit".
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connect_timeout_secs must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hostbucket")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HostbucketConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HostbucketConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HostbucketConfig = toml::from_str(&data)?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
