//! `bto copy` – put the input (or its cleaned URL list) on the clipboard.

use anyhow::Result;
use bto_core::clipboard::{ClipboardService, CommandClipboard};
use bto_core::extract;

use crate::cli::ui::Ui;

pub fn run_copy(ui: &Ui, text: &str, clean: bool) -> Result<()> {
    let payload = if clean {
        extract::extract(text, true).join("\n")
    } else {
        text.to_string()
    };

    let mut clipboard = CommandClipboard::detect()?;
    clipboard.write(&payload)?;
    ui.status("Copied to clipboard.");
    Ok(())
}
