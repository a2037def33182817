//! `bto import` – load a text file into the session buffer.

use anyhow::Result;
use bto_core::extract;
use bto_core::import;
use bto_core::session::Session;
use std::path::Path;

use crate::cli::ui::Ui;

pub fn run_import(ui: &Ui, session: &Session, path: &Path) -> Result<()> {
    let text = import::read_text(path)?;
    session.save(&text)?;
    let counts = extract::counts(&text);
    ui.status(&format!("Imported {}; {} URL(s).", path.display(), counts));
    Ok(())
}
