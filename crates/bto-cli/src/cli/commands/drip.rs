//! `bto drip` – open URLs one at a time with a pause between tabs.

use anyhow::Result;
use bto_core::config::BtoConfig;
use bto_core::extract;
use bto_core::opener::{self, BatchOutcome, BrowserLauncher};
use std::time::Duration;

use crate::cli::ui::Ui;

use super::open::report;

pub async fn run_drip(
    cfg: &BtoConfig,
    ui: &Ui,
    text: &str,
    delay: Option<u64>,
    max_wait: Option<u64>,
    limit: Option<usize>,
) -> Result<()> {
    let urls = extract::apply_limit(
        extract::extract(text, false),
        limit.unwrap_or(cfg.limit),
    );
    let delay = Duration::from_secs(delay.unwrap_or(cfg.delay_secs));
    let max_wait = Duration::from_secs(max_wait.unwrap_or(cfg.max_wait_secs));

    let mut launcher = BrowserLauncher::detect(cfg.browser.as_deref())?;
    let outcome = opener::open_sequential(&mut launcher, &urls, delay, max_wait).await?;

    match outcome {
        BatchOutcome::Opened { tabs, .. } => {
            ui.status(&format!("Opened {tabs} tab(s), one at a time."));
        }
        other => report(ui, other),
    }
    Ok(())
}
