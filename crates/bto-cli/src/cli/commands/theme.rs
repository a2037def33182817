//! `bto theme` – set or toggle the persisted color theme.

use anyhow::Result;
use bto_core::config::{self, BtoConfig, Theme};

pub fn run_theme(cfg: &mut BtoConfig, value: Option<Theme>) -> Result<()> {
    cfg.theme = value.unwrap_or_else(|| cfg.theme.toggled());
    config::save(cfg)?;
    println!("Theme: {}", cfg.theme);
    Ok(())
}
