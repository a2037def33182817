//! Persisted user preferences.
//!
//! Loaded from `~/.config/bto/config.toml`; a default file is written on
//! first run. Values mirror the defaults restored by the `restore-defaults`
//! command. Writes are last-write-wins; there is no locking because only one
//! command runs at a time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::opener::OpenMode;

/// Output color theme for status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme (the `theme` command with no argument toggles).
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("unknown theme: {other} (expected light or dark)"),
        }
    }
}

/// Global configuration loaded from `~/.config/bto/config.toml`.
///
/// Every field has a serde default so config files from older versions keep
/// parsing after new fields are added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BtoConfig {
    /// Color theme for status output.
    #[serde(default)]
    pub theme: Theme,
    /// Persist text fed to commands into the session buffer.
    #[serde(default)]
    pub remember_urls: bool,
    /// Seconds between tabs in one-by-one mode (0 = use `max_wait_secs`).
    #[serde(default)]
    pub delay_secs: u64,
    /// Fallback pause in seconds when `delay_secs` is 0.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
    /// Open at most this many URLs (0 = unlimited). Never limits counting or export.
    #[serde(default)]
    pub limit: usize,
    /// Open the whole list this many times.
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
    /// Default dispatch mode for `open`.
    #[serde(default)]
    pub mode: OpenMode,
    /// Browser command override; when unset, detection falls back to
    /// `$BROWSER` and then a candidate list.
    #[serde(default)]
    pub browser: Option<String>,
}

fn default_max_wait_secs() -> u64 {
    3
}

fn default_repeat_count() -> u32 {
    1
}

impl Default for BtoConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            remember_urls: false,
            delay_secs: 0,
            max_wait_secs: default_max_wait_secs(),
            limit: 0,
            repeat_count: default_repeat_count(),
            mode: OpenMode::Group,
            browser: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bto")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BtoConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] against an explicit path (tests use a temp dir).
pub fn load_or_init_at(path: &Path) -> Result<BtoConfig> {
    if !path.exists() {
        let default_cfg = BtoConfig::default();
        save_at(&default_cfg, path)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: BtoConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Persist `cfg` to the default config path.
pub fn save(cfg: &BtoConfig) -> Result<()> {
    save_at(cfg, &config_path()?)
}

pub fn save_at(cfg: &BtoConfig, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(cfg).context("serialize config")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir: {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}
