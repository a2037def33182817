//! `bto open` – open every URL at once per the selected mode.

use anyhow::Result;
use bto_core::config::BtoConfig;
use bto_core::confirm::{AlwaysConfirm, Confirmer, StdinConfirmer};
use bto_core::extract;
use bto_core::opener::{self, BatchOutcome, BrowserLauncher, OpenMode, OpenOptions};

use crate::cli::ui::Ui;

pub fn run_open(
    cfg: &BtoConfig,
    ui: &Ui,
    text: &str,
    mode: Option<OpenMode>,
    repeat: Option<u32>,
    limit: Option<usize>,
    assume_yes: bool,
) -> Result<()> {
    let mut options = OpenOptions::from_config(cfg);
    if let Some(mode) = mode {
        options.mode = mode;
    }
    if let Some(repeat) = repeat {
        options.repeat_count = repeat;
    }
    if let Some(limit) = limit {
        options.limit = limit;
    }

    let urls = extract::apply_limit(extract::extract(text, false), options.limit);

    let mut launcher = BrowserLauncher::detect(cfg.browser.as_deref())?;
    let mut confirmer: Box<dyn Confirmer> = if assume_yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(StdinConfirmer)
    };

    let outcome = opener::open_batch(&mut launcher, confirmer.as_mut(), &urls, &options)?;
    report(ui, outcome);
    Ok(())
}

pub(super) fn report(ui: &Ui, outcome: BatchOutcome) {
    match outcome {
        BatchOutcome::Empty => ui.warn("No URLs found. Enter at least one valid URL."),
        BatchOutcome::Declined { total } => {
            ui.warn(&format!("Cancelled; {total} tabs not opened."));
        }
        BatchOutcome::Opened { windows: 0, tabs } => {
            ui.status(&format!("Opened {tabs} tab(s)."));
        }
        BatchOutcome::Opened { windows, tabs } => {
            ui.status(&format!("Opened {windows} window(s) and {tabs} tab(s)."));
        }
    }
}
