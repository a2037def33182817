//! `bto extract` – normalize the input to one URL per line.

use anyhow::Result;
use bto_core::extract;
use bto_core::session::Session;

use crate::cli::ui::Ui;

pub fn run_extract(
    ui: &Ui,
    session: &Session,
    text: &str,
    dedupe: bool,
    write: bool,
) -> Result<()> {
    let urls = extract::extract(text, dedupe);
    let joined = urls.join("\n");

    if write {
        session.save(&joined)?;
        let label = if dedupe {
            "Duplicates removed."
        } else {
            "URLs extracted."
        };
        ui.status(&format!("{label} {} URL(s) in buffer.", urls.len()));
    } else if !joined.is_empty() {
        println!("{joined}");
    }

    Ok(())
}
