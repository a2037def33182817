//! Production [`TabService`]: drives the system browser's command line.
//!
//! A CLI cannot observe browser window creation, so window launches pass
//! `--new-window` and then pause briefly; tabs issued afterwards land in the
//! window that was just raised (browsers route plain-URL invocations to the
//! most recently focused window). The returned `WindowId` orders calls rather
//! than addressing a browser object.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use super::{TabService, WindowId};

/// Pause after a `--new-window` launch before attaching its tabs.
const WINDOW_SETTLE: Duration = Duration::from_millis(300);

/// Debian-friendly candidates, probed in order when neither the config
/// override nor `$BROWSER` is set. `xdg-open` comes last: it always works
/// but cannot address windows.
const BROWSER_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome-stable",
    "google-chrome",
    "firefox",
    "firefox-esr",
    "xdg-open",
];

/// Browser-command backed tab/window service.
pub struct BrowserLauncher {
    command: PathBuf,
    /// Whether the command understands `--new-window`.
    windowed: bool,
    next_window: u64,
    warned_windowing: bool,
}

impl BrowserLauncher {
    /// Picks a browser command: `override_cmd` (from config), then
    /// `$BROWSER`, then [`BROWSER_CANDIDATES`].
    pub fn detect(override_cmd: Option<&str>) -> Result<Self> {
        let chosen = override_cmd
            .map(str::to_owned)
            .or_else(|| std::env::var("BROWSER").ok().filter(|v| !v.is_empty()));

        let command = match chosen {
            Some(name) => resolve_command(&name)
                .with_context(|| format!("browser command not found: {name}"))?,
            None => BROWSER_CANDIDATES
                .iter()
                .find_map(|name| which_binary(name))
                .context("no browser found (set $BROWSER or the `browser` config key)")?,
        };

        let windowed = command
            .file_name()
            .map(|n| n.to_string_lossy() != "xdg-open")
            .unwrap_or(false);
        tracing::debug!(command = %command.display(), windowed, "browser selected");

        Ok(Self {
            command,
            windowed,
            next_window: 0,
            warned_windowing: false,
        })
    }

    fn spawn(&self, args: &[&str]) -> Result<()> {
        Command::new(&self.command)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("launch browser: {}", self.command.display()))?;
        Ok(())
    }
}

impl TabService for BrowserLauncher {
    fn create_window(&mut self, url: &str) -> Result<WindowId> {
        if self.windowed {
            self.spawn(&["--new-window", url])?;
            // Let the new window come up before tabs are routed to it.
            std::thread::sleep(WINDOW_SETTLE);
        } else {
            if !self.warned_windowing {
                tracing::warn!(
                    command = %self.command.display(),
                    "browser command cannot open windows; falling back to tabs"
                );
                self.warned_windowing = true;
            }
            self.spawn(&[url])?;
        }

        let id = WindowId(self.next_window);
        self.next_window += 1;
        Ok(id)
    }

    fn create_tab(&mut self, _window: Option<WindowId>, url: &str) -> Result<()> {
        // Plain invocations open a tab in the most recently focused window,
        // which create_window's settle pause keeps as the intended target.
        self.spawn(&[url])
    }
}

/// Resolves a user-supplied command: explicit paths are taken as-is, bare
/// names go through `which`.
fn resolve_command(name: &str) -> Option<PathBuf> {
    if name.contains('/') {
        let p = PathBuf::from(name);
        return p.exists().then_some(p);
    }
    which_binary(name)
}

/// Locates `name` on PATH via `which`.
pub(crate) fn which_binary(name: &str) -> Option<PathBuf> {
    let output = Command::new("which").arg(name).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let path = String::from_utf8(output.stdout).ok()?;
    let p = PathBuf::from(path.trim());
    p.exists().then_some(p)
}
