//! Batch opening policy: repeat expansion, the large-batch confirmation
//! gate, and the three dispatch modes (flat tabs, single window, one window
//! per hostname), plus the paced one-by-one opener.
//!
//! Dispatch goes through the [`TabService`] trait so the policy stays pure
//! enough to test against a recording fake; the production implementation in
//! [`launch`] drives the system browser.

pub mod launch;

pub use launch::BrowserLauncher;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use crate::config::BtoConfig;
use crate::confirm::Confirmer;

/// Batches larger than this require explicit confirmation before dispatch.
pub const CONFIRM_THRESHOLD: usize = 100;

/// Strategy for dispatching a batch of URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenMode {
    /// One tab per URL in the default window, no pacing.
    Tabs,
    /// One new window seeded with the first URL, the rest as tabs in it.
    Window,
    /// One new window per hostname, that host's URLs as its tabs.
    #[default]
    Group,
}

/// Options for a single batch-open invocation, marshaled by the CLI from
/// config defaults and per-invocation flags.
#[derive(Debug, Clone)]
pub struct OpenOptions {
    pub mode: OpenMode,
    /// Open the whole list this many times (1 = as-is). Values below 1 are
    /// treated as 1.
    pub repeat_count: u32,
    /// Cap applied by the caller via [`crate::extract::apply_limit`]; carried
    /// here so one struct describes the whole invocation.
    pub limit: usize,
    /// Pause between tabs in one-by-one mode.
    pub delay: Duration,
    /// Fallback pause when `delay` is zero.
    pub max_wait: Duration,
}

impl OpenOptions {
    pub fn from_config(cfg: &BtoConfig) -> Self {
        Self {
            mode: cfg.mode,
            repeat_count: cfg.repeat_count,
            limit: cfg.limit,
            delay: Duration::from_secs(cfg.delay_secs),
            max_wait: Duration::from_secs(cfg.max_wait_secs),
        }
    }
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self::from_config(&BtoConfig::default())
    }
}

/// Opaque handle for a created browser window, used to target follow-up tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// Tab/window creation surface.
///
/// `create_window` must not return until the window exists well enough that
/// tabs issued afterwards land in it; `create_tab` is fire-and-forget.
pub trait TabService {
    /// Open a new window seeded with `url` and return its handle.
    fn create_window(&mut self, url: &str) -> Result<WindowId>;

    /// Open `url` as a tab, in `window` when given, else in the default window.
    fn create_tab(&mut self, window: Option<WindowId>, url: &str) -> Result<()>;
}

/// What a dispatch actually did, for the caller to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// URLs were dispatched.
    Opened { windows: usize, tabs: usize },
    /// The input had no URLs; nothing was dispatched. A reported condition,
    /// not an error.
    Empty,
    /// The user declined the large-batch confirmation; nothing was dispatched.
    Declined { total: usize },
}

/// Concatenates `urls` with itself `repeat_count` times, in order.
pub fn expand_repeats(urls: &[String], repeat_count: u32) -> Vec<String> {
    let repeat = repeat_count.max(1) as usize;
    let mut out = Vec::with_capacity(urls.len() * repeat);
    for _ in 0..repeat {
        out.extend_from_slice(urls);
    }
    out
}

/// Partitions `urls` by hostname, hosts in first-encounter order, each
/// host's URLs in input order. No `www.` normalization happens here; export
/// has its own grouping rules.
pub fn group_by_host(urls: &[String]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for url in urls {
        // Extractor output always parses; anything that slipped past shares
        // an unnamed group rather than being dropped.
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned))
            .unwrap_or_default();
        match index.get(&host) {
            Some(&i) => groups[i].1.push(url.clone()),
            None => {
                index.insert(host.clone(), groups.len());
                groups.push((host, vec![url.clone()]));
            }
        }
    }

    groups
}

/// Opens the whole batch at once according to `options.mode`.
///
/// Empty input and a declined confirmation both return without side effects;
/// only window/tab creation failures surface as errors. Window creation
/// blocks briefly between launches; call from `spawn_blocking` if embedding
/// in a busy runtime.
pub fn open_batch(
    tabs: &mut dyn TabService,
    confirmer: &mut dyn Confirmer,
    urls: &[String],
    options: &OpenOptions,
) -> Result<BatchOutcome> {
    if urls.is_empty() {
        return Ok(BatchOutcome::Empty);
    }

    let final_urls = expand_repeats(urls, options.repeat_count);

    if final_urls.len() > CONFIRM_THRESHOLD {
        let message = format!(
            "You are about to open {} tabs. This may slow down your browser.",
            final_urls.len()
        );
        if !confirmer.confirm("Open multiple tabs?", &message) {
            tracing::info!(total = final_urls.len(), "large batch declined");
            return Ok(BatchOutcome::Declined {
                total: final_urls.len(),
            });
        }
    }

    match options.mode {
        OpenMode::Tabs => {
            for url in &final_urls {
                tabs.create_tab(None, url)?;
            }
            Ok(BatchOutcome::Opened {
                windows: 0,
                tabs: final_urls.len(),
            })
        }
        OpenMode::Window => {
            let win = tabs.create_window(&final_urls[0])?;
            for url in &final_urls[1..] {
                tabs.create_tab(Some(win), url)?;
            }
            Ok(BatchOutcome::Opened {
                windows: 1,
                tabs: final_urls.len() - 1,
            })
        }
        OpenMode::Group => {
            let groups = group_by_host(&final_urls);
            let mut tab_count = 0;
            // Groups are strictly sequential: each window handle must exist
            // before its tabs are attached.
            for (host, group_urls) in &groups {
                tracing::debug!(host = %host, urls = group_urls.len(), "opening host group");
                let win = tabs.create_window(&group_urls[0])?;
                for url in &group_urls[1..] {
                    tabs.create_tab(Some(win), url)?;
                }
                tab_count += group_urls.len() - 1;
            }
            Ok(BatchOutcome::Opened {
                windows: groups.len(),
                tabs: tab_count,
            })
        }
    }
}

/// Opens `urls` one tab at a time, pausing `delay` between tabs (or
/// `max_wait` when `delay` is zero). Strictly sequential and not cancellable
/// once started; the only stop condition is finishing the list. The
/// large-batch gate does not apply here.
pub async fn open_sequential(
    tabs: &mut dyn TabService,
    urls: &[String],
    delay: Duration,
    max_wait: Duration,
) -> Result<BatchOutcome> {
    if urls.is_empty() {
        return Ok(BatchOutcome::Empty);
    }

    let pause = if !delay.is_zero() { delay } else { max_wait };
    for url in urls {
        tabs.create_tab(None, url)?;
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    Ok(BatchOutcome::Opened {
        windows: 0,
        tabs: urls.len(),
    })
}
