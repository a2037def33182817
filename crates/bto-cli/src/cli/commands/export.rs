//! `bto export` – write the extracted URLs to per-host text files.

use anyhow::Result;
use bto_core::config::BtoConfig;
use bto_core::export;
use bto_core::extract;
use std::path::Path;

use crate::cli::ui::Ui;

pub fn run_export(
    cfg: &BtoConfig,
    ui: &Ui,
    text: &str,
    repeat: Option<u32>,
    out_dir: &Path,
) -> Result<()> {
    // Export always works from the full extracted list; the open limit
    // never applies here.
    let urls = extract::extract(text, false);
    if urls.is_empty() {
        ui.warn("No URLs found. Nothing to export.");
        return Ok(());
    }

    let files = export::export_by_host(&urls, repeat.unwrap_or(cfg.repeat_count));
    let written = export::write_exports(&files, out_dir)?;
    for path in &written {
        println!("{}", path.display());
    }
    ui.status(&format!("Export completed: {} file(s).", written.len()));
    Ok(())
}
