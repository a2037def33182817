//! Clipboard writes via the platform's clipboard utility.
//!
//! No display-server client is linked in; text is piped to the first
//! available of `wl-copy`, `xclip`, `xsel` instead, the same way the launcher
//! shells out for browser work.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;

use crate::opener::launch::which_binary;

/// Clipboard tools probed in order, with the arguments that select the
/// CLIPBOARD selection.
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard utility found (tried wl-copy, xclip, xsel)")]
    NoBackend,
    #[error("clipboard command failed")]
    Command(#[from] std::io::Error),
}

/// Write-only clipboard surface; fire-and-forget from the caller's view.
pub trait ClipboardService {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by an external utility.
pub struct CommandClipboard {
    command: PathBuf,
    args: &'static [&'static str],
}

impl CommandClipboard {
    /// Picks the first clipboard tool present on PATH.
    pub fn detect() -> Result<Self, ClipboardError> {
        for (name, args) in CLIPBOARD_TOOLS.iter().copied() {
            if let Some(command) = which_binary(name) {
                tracing::debug!(command = %command.display(), "clipboard tool selected");
                return Ok(Self { command, args });
            }
        }
        Err(ClipboardError::NoBackend)
    }
}

impl ClipboardService for CommandClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.command)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        child.wait()?;
        Ok(())
    }
}
