use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use splitscope_api::DEFAULT_BASE_URL;

use crate::state::ensure_splitscope_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    /// Group used when `--group` is not passed.
    pub default_group: Option<String>,
    /// End 30/31-day months on the 1st of the next month instead of their
    /// own last day. Matches the historical report windows.
    pub widen_month_end: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiSection {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            report: ReportSection {
                default_group: None,
                widen_month_end: true,
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_splitscope_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
