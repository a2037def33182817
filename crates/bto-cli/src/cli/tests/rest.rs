//! Tests for export, import, import-har, copy, show, clear, theme,
//! restore-defaults, and completions.

use super::parse;
use crate::cli::{CliCommand, ThemeArg};
use std::path::Path;

#[test]
fn cli_parse_export_defaults() {
    match parse(&["bto", "export"]) {
        CliCommand::Export { file, repeat, out_dir } => {
            assert!(file.is_none());
            assert!(repeat.is_none());
            assert_eq!(out_dir, Path::new("."));
        }
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_export_out_dir() {
    match parse(&["bto", "export", "--repeat", "2", "--out-dir", "/tmp/urls"]) {
        CliCommand::Export { repeat, out_dir, .. } => {
            assert_eq!(repeat, Some(2));
            assert_eq!(out_dir, Path::new("/tmp/urls"));
        }
        _ => panic!("expected Export with --out-dir"),
    }
}

#[test]
fn cli_parse_import() {
    match parse(&["bto", "import", "saved.txt"]) {
        CliCommand::Import { path } => assert_eq!(path, Path::new("saved.txt")),
        _ => panic!("expected Import"),
    }
}

#[test]
fn cli_parse_import_har() {
    match parse(&["bto", "import-har", "capture.har"]) {
        CliCommand::ImportHar { path } => assert_eq!(path, Path::new("capture.har")),
        _ => panic!("expected ImportHar"),
    }
}

#[test]
fn cli_parse_copy_clean() {
    match parse(&["bto", "copy", "--clean"]) {
        CliCommand::Copy { file, clean } => {
            assert!(file.is_none());
            assert!(clean);
        }
        _ => panic!("expected Copy with --clean"),
    }
}

#[test]
fn cli_parse_show() {
    match parse(&["bto", "show"]) {
        CliCommand::Show => {}
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_clear_yes() {
    match parse(&["bto", "clear", "--yes"]) {
        CliCommand::Clear { yes } => assert!(yes),
        _ => panic!("expected Clear"),
    }
}

#[test]
fn cli_parse_theme_toggle_and_set() {
    match parse(&["bto", "theme"]) {
        CliCommand::Theme { value } => assert!(value.is_none()),
        _ => panic!("expected Theme"),
    }
    match parse(&["bto", "theme", "dark"]) {
        CliCommand::Theme { value } => assert_eq!(value, Some(ThemeArg::Dark)),
        _ => panic!("expected Theme with value"),
    }
}

#[test]
fn cli_parse_restore_defaults() {
    match parse(&["bto", "restore-defaults"]) {
        CliCommand::RestoreDefaults { yes } => assert!(!yes),
        _ => panic!("expected RestoreDefaults"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["bto", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash);
        }
        _ => panic!("expected Completions"),
    }
}
