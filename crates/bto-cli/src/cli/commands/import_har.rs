//! `bto import-har` – load request URLs from a HAR capture into the buffer.

use anyhow::Result;
use bto_core::import;
use bto_core::session::Session;
use std::path::Path;

use crate::cli::ui::Ui;

pub fn run_import_har(ui: &Ui, session: &Session, path: &Path) -> Result<()> {
    let urls = import::har_urls(path)?;
    session.save(&urls.join("\n"))?;
    ui.status(&format!(
        "Imported {} URL(s) from {}.",
        urls.len(),
        path.display()
    ));
    Ok(())
}
