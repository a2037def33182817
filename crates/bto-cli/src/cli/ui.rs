//! Themed terminal output for status and notice lines.

use bto_core::config::Theme;
use console::Style;

/// Styles for the persisted theme; data output always goes to stdout
/// unstyled so it stays pipeable.
pub struct Ui {
    ok: Style,
    warn: Style,
    accent: Style,
}

impl Ui {
    pub fn new(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                ok: Style::new().green(),
                warn: Style::new().yellow(),
                accent: Style::new().blue(),
            },
            Theme::Dark => Self {
                ok: Style::new().green().bright(),
                warn: Style::new().yellow().bright(),
                accent: Style::new().cyan().bright(),
            },
        }
    }

    /// Success/status line.
    pub fn status(&self, msg: &str) {
        println!("{}", self.ok.apply_to(msg));
    }

    /// Notice for reported conditions (empty input, cancelled actions).
    pub fn warn(&self, msg: &str) {
        println!("{} {}", self.warn.apply_to("!"), msg);
    }

    /// Highlighted inline value (counters).
    pub fn accent(&self, value: &str) -> String {
        self.accent.apply_to(value).to_string()
    }
}
