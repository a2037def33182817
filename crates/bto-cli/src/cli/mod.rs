//! CLI for the BTO batch tab opener.

mod commands;
mod ui;

use anyhow::{Context, Result};
use bto_core::config::{self, BtoConfig, Theme};
use bto_core::opener::OpenMode;
use bto_core::session::Session;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use commands::{
    run_clear, run_completions, run_copy, run_count, run_drip, run_export, run_extract,
    run_import, run_import_har, run_open, run_restore, run_show, run_theme,
};
use ui::Ui;

/// Top-level CLI for the BTO batch tab opener.
#[derive(Debug, Parser)]
#[command(name = "bto")]
#[command(about = "BTO: batch URL extractor and browser tab opener", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Clap-facing mirror of [`OpenMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Tabs,
    Window,
    Group,
}

impl From<ModeArg> for OpenMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Tabs => OpenMode::Tabs,
            ModeArg::Window => OpenMode::Window,
            ModeArg::Group => OpenMode::Group,
        }
    }
}

/// Clap-facing mirror of [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Count URLs in the input (raw and unique).
    Count {
        /// Text file to read (`-` for stdin); defaults to the session buffer.
        file: Option<PathBuf>,
    },

    /// Extract and normalize URLs from the input.
    Extract {
        /// Text file to read (`-` for stdin); defaults to the session buffer.
        file: Option<PathBuf>,

        /// Drop duplicate URLs, keeping the first occurrence.
        #[arg(long)]
        dedupe: bool,

        /// Replace the session buffer with the extracted list.
        #[arg(long)]
        write: bool,
    },

    /// Open every URL at once: flat tabs, one window, or one window per host.
    Open {
        /// Text file to read (`-` for stdin); defaults to the session buffer.
        file: Option<PathBuf>,

        /// Dispatch mode (default from config).
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Open the whole list N times.
        #[arg(long, value_name = "N")]
        repeat: Option<u32>,

        /// Open at most N URLs (0 = no limit).
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Skip the large-batch confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Open URLs one at a time with a pause between tabs.
    Drip {
        /// Text file to read (`-` for stdin); defaults to the session buffer.
        file: Option<PathBuf>,

        /// Seconds to wait between tabs (0 = use --max-wait).
        #[arg(long, value_name = "SECS")]
        delay: Option<u64>,

        /// Pause in seconds used while --delay is 0.
        #[arg(long, value_name = "SECS")]
        max_wait: Option<u64>,

        /// Open at most N URLs (0 = no limit).
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Export URLs to per-host text files.
    Export {
        /// Text file to read (`-` for stdin); defaults to the session buffer.
        file: Option<PathBuf>,

        /// Write each URL N times.
        #[arg(long, value_name = "N")]
        repeat: Option<u32>,

        /// Directory for the exported files.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },

    /// Load a text file into the session buffer.
    Import {
        /// Path to the text file.
        path: PathBuf,
    },

    /// Load every request URL from a HAR capture into the session buffer.
    ImportHar {
        /// Path to the HAR file.
        path: PathBuf,
    },

    /// Copy the input to the clipboard.
    Copy {
        /// Text file to read (`-` for stdin); defaults to the session buffer.
        file: Option<PathBuf>,

        /// Copy the extracted, deduplicated URL list instead of the raw text.
        #[arg(long)]
        clean: bool,
    },

    /// Print the session buffer.
    Show,

    /// Clear the session buffer.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Set the color theme, or toggle it when no value is given.
    Theme {
        /// light or dark.
        #[arg(value_enum)]
        value: Option<ThemeArg>,
    },

    /// Reset all settings and clear stored data.
    RestoreDefaults {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let session = Session::open_default()?;
        let ui = Ui::new(cfg.theme);

        match cli.command {
            CliCommand::Count { file } => {
                let text = resolve_input(file.as_deref(), &session, &cfg)?;
                run_count(&ui, &text)?;
            }
            CliCommand::Extract { file, dedupe, write } => {
                let text = resolve_input(file.as_deref(), &session, &cfg)?;
                run_extract(&ui, &session, &text, dedupe, write)?;
            }
            CliCommand::Open {
                file,
                mode,
                repeat,
                limit,
                yes,
            } => {
                let text = resolve_input(file.as_deref(), &session, &cfg)?;
                run_open(&cfg, &ui, &text, mode.map(Into::into), repeat, limit, yes)?;
            }
            CliCommand::Drip {
                file,
                delay,
                max_wait,
                limit,
            } => {
                let text = resolve_input(file.as_deref(), &session, &cfg)?;
                run_drip(&cfg, &ui, &text, delay, max_wait, limit).await?;
            }
            CliCommand::Export { file, repeat, out_dir } => {
                let text = resolve_input(file.as_deref(), &session, &cfg)?;
                run_export(&cfg, &ui, &text, repeat, &out_dir)?;
            }
            CliCommand::Import { path } => run_import(&ui, &session, &path)?,
            CliCommand::ImportHar { path } => run_import_har(&ui, &session, &path)?,
            CliCommand::Copy { file, clean } => {
                let text = resolve_input(file.as_deref(), &session, &cfg)?;
                run_copy(&ui, &text, clean)?;
            }
            CliCommand::Show => run_show(&session)?,
            CliCommand::Clear { yes } => run_clear(&ui, &session, yes)?,
            CliCommand::Theme { value } => run_theme(&mut cfg, value.map(Into::into))?,
            CliCommand::RestoreDefaults { yes } => run_restore(&ui, &session, yes)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

/// Resolves the text a command works on: an explicit file, stdin (`-`), or
/// the session buffer. External input is snapshotted into the buffer when
/// the remember preference is on, so the next bufferless invocation sees it.
pub(crate) fn resolve_input(
    file: Option<&Path>,
    session: &Session,
    cfg: &BtoConfig,
) -> Result<String> {
    let text = match file {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read stdin")?;
            text
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read input file: {}", path.display()))?,
        None => return Ok(session.load()?.unwrap_or_default()),
    };

    if cfg.remember_urls {
        session.save(&text)?;
    }
    Ok(text)
}

#[cfg(test)]
mod tests;
