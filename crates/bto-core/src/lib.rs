pub mod clipboard;
pub mod config;
pub mod confirm;
pub mod export;
pub mod extract;
pub mod import;
pub mod logging;
pub mod opener;
pub mod session;
