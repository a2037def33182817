//! `bto clear` – empty the session buffer after confirmation.

use anyhow::Result;
use bto_core::confirm::{Confirmer, StdinConfirmer};
use bto_core::session::Session;

use crate::cli::ui::Ui;

pub fn run_clear(ui: &Ui, session: &Session, assume_yes: bool) -> Result<()> {
    if !assume_yes {
        let confirmed = StdinConfirmer.confirm(
            "Clear URLs?",
            "This will remove all URLs from the session buffer.",
        );
        if !confirmed {
            ui.warn("Cancelled");
            return Ok(());
        }
    }

    session.clear()?;
    ui.status("Session buffer cleared.");
    Ok(())
}
