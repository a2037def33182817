//! `bto restore-defaults` – reset preferences and clear stored data.

use anyhow::Result;
use bto_core::config::{self, BtoConfig};
use bto_core::confirm::{Confirmer, StdinConfirmer};
use bto_core::session::Session;

use crate::cli::ui::Ui;

pub fn run_restore(ui: &Ui, session: &Session, assume_yes: bool) -> Result<()> {
    if !assume_yes {
        let confirmed = StdinConfirmer.confirm(
            "Restore defaults?",
            "This will reset all settings and clear stored data.",
        );
        if !confirmed {
            ui.warn("Cancelled");
            return Ok(());
        }
    }

    // Clear wholesale: config back to defaults, session buffer removed.
    config::save(&BtoConfig::default())?;
    session.clear()?;
    ui.status("Defaults restored.");
    Ok(())
}
