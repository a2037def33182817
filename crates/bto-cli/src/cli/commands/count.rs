//! `bto count` – raw and unique URL counts for the input.

use anyhow::Result;
use bto_core::extract;

use crate::cli::ui::Ui;

pub fn run_count(ui: &Ui, text: &str) -> Result<()> {
    let counts = extract::counts(text);
    println!("{}", ui.accent(&counts.to_string()));
    Ok(())
}
