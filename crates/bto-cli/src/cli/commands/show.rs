//! `bto show` – print the session buffer.

use anyhow::Result;
use bto_core::session::Session;

pub fn run_show(session: &Session) -> Result<()> {
    if let Some(text) = session.load()? {
        print!("{text}");
        if !text.ends_with('\n') && !text.is_empty() {
            println!();
        }
    }
    Ok(())
}
