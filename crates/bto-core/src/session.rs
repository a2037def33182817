//! The session buffer: the raw text URLs are extracted from.
//!
//! A scratchpad for pasted text, persisted as a plain-text file under the
//! XDG state dir. Only ever replaced wholesale; the `remember_urls`
//! preference decides which commands write it (see the CLI input resolver).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const BUFFER_FILE: &str = "urls.txt";

/// Handle on the persisted session buffer.
pub struct Session {
    path: PathBuf,
}

impl Session {
    /// Buffer at the default location, `~/.local/state/bto/urls.txt`.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("bto")?;
        Ok(Self {
            path: xdg_dirs.get_state_home().join(BUFFER_FILE),
        })
    }

    /// Buffer under an explicit directory (tests use a temp dir).
    pub fn open_at(dir: &Path) -> Self {
        Self {
            path: dir.join(BUFFER_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored text, or `None` when nothing has been remembered.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("read session buffer: {}", self.path.display()))?;
        Ok(Some(text))
    }

    /// Replaces the buffer wholesale.
    pub fn save(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create state dir: {}", parent.display()))?;
        }
        fs::write(&self.path, text)
            .with_context(|| format!("write session buffer: {}", self.path.display()))?;
        Ok(())
    }

    /// Removes the buffer; absent is not an error.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("remove session buffer: {}", self.path.display()))?;
        }
        Ok(())
    }
}
