//! CLI command handlers. Each command is in its own file for clarity.

mod clear;
mod completions;
mod copy;
mod count;
mod drip;
mod export;
mod extract;
mod import;
mod import_har;
mod open;
mod restore;
mod show;
mod theme;

pub use clear::run_clear;
pub use completions::run_completions;
pub use copy::run_copy;
pub use count::run_count;
pub use drip::run_drip;
pub use export::run_export;
pub use extract::run_extract;
pub use import::run_import;
pub use import_har::run_import_har;
pub use open::run_open;
pub use restore::run_restore;
pub use show::run_show;
pub use theme::run_theme;
