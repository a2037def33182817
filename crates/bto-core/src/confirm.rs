//! Confirmation gate for risky or destructive actions.
//!
//! Rendered as a `[y/N]` stdin prompt; anything except an explicit `y`
//! (including EOF and read errors) resolves to "not confirmed", so every
//! dismissal path declines.

use std::io::{self, BufRead, Write};

/// Asks the user to approve an action before it runs.
pub trait Confirmer {
    /// Presents `title`/`message`; true only on explicit confirmation.
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

/// Interactive confirmer reading `y`/`N` from stdin.
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        println!("{title}");
        println!("{message}");
        print!("Proceed? [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) | Err(_) => false,
            Ok(_) => input.trim().eq_ignore_ascii_case("y"),
        }
    }
}

/// Confirmer that approves everything (`--yes` flows).
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        true
    }
}
