//! Integration test: pasted text through extraction, limiting, and batch
//! dispatch, plus the export flow against a temp dir.

use anyhow::Result;
use bto_core::confirm::{AlwaysConfirm, Confirmer};
use bto_core::export;
use bto_core::extract;
use bto_core::opener::{self, BatchOutcome, OpenMode, OpenOptions, TabService, WindowId};
use tempfile::tempdir;

/// Recording fake: remembers every window/tab creation in issue order.
#[derive(Default)]
struct RecordingTabs {
    windows: Vec<String>,
    tabs: Vec<(Option<u64>, String)>,
    next_window: u64,
}

impl TabService for RecordingTabs {
    fn create_window(&mut self, url: &str) -> Result<WindowId> {
        let id = self.next_window;
        self.next_window += 1;
        self.windows.push(url.to_string());
        Ok(WindowId(id))
    }

    fn create_tab(&mut self, window: Option<WindowId>, url: &str) -> Result<()> {
        self.tabs.push((window.map(|w| w.0), url.to_string()));
        Ok(())
    }
}

struct DeclineAll;

impl Confirmer for DeclineAll {
    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        false
    }
}

const PASTE: &str = "check foo.com/a and www.bar.org maybe foo.com/a\n\
                     also https://baz.io/x plus junk words";

#[test]
fn paste_to_group_windows() {
    let urls = extract::extract(PASTE, false);
    assert_eq!(
        urls,
        vec![
            "https://foo.com/a",
            "https://www.bar.org",
            "https://foo.com/a",
            "https://baz.io/x",
        ]
    );

    let mut tabs = RecordingTabs::default();
    let options = OpenOptions {
        mode: OpenMode::Group,
        ..OpenOptions::default()
    };
    let outcome = opener::open_batch(&mut tabs, &mut AlwaysConfirm, &urls, &options).unwrap();

    // Three distinct hosts; windows + tabs covers every URL.
    assert_eq!(outcome, BatchOutcome::Opened { windows: 3, tabs: 1 });
    assert_eq!(
        tabs.windows,
        vec!["https://foo.com/a", "https://www.bar.org", "https://baz.io/x"]
    );
    assert_eq!(tabs.tabs, vec![(Some(0), "https://foo.com/a".to_string())]);
}

#[test]
fn limit_applies_to_opening_but_not_export() {
    let urls = extract::extract(PASTE, false);
    let limited = extract::apply_limit(urls.clone(), 2);
    assert_eq!(limited.len(), 2);

    let mut tabs = RecordingTabs::default();
    let options = OpenOptions {
        mode: OpenMode::Tabs,
        ..OpenOptions::default()
    };
    opener::open_batch(&mut tabs, &mut AlwaysConfirm, &limited, &options).unwrap();
    assert_eq!(tabs.tabs.len(), 2);

    // Export keeps working from the full list.
    let files = export::export_by_host(&urls, 1);
    let total: usize = files.iter().map(|f| f.contents.lines().count()).sum();
    assert_eq!(total, urls.len());
}

#[test]
fn oversized_batch_declined_leaves_no_trace() {
    let text: String = (0..150)
        .map(|i| format!("host{i}.com"))
        .collect::<Vec<_>>()
        .join(" ");
    let urls = extract::extract(&text, false);
    assert_eq!(urls.len(), 150);

    let mut tabs = RecordingTabs::default();
    let options = OpenOptions {
        mode: OpenMode::Tabs,
        ..OpenOptions::default()
    };
    let outcome = opener::open_batch(&mut tabs, &mut DeclineAll, &urls, &options).unwrap();

    assert_eq!(outcome, BatchOutcome::Declined { total: 150 });
    assert!(tabs.windows.is_empty());
    assert!(tabs.tabs.is_empty());
}

#[test]
fn export_writes_per_host_files() {
    let urls = extract::extract("foo.com/a www.foo.com/b bar.org", false);
    let files = export::export_by_host(&urls, 2);
    let dir = tempdir().unwrap();

    let written = export::write_exports(&files, dir.path()).unwrap();

    // www.foo.com folds into foo.com; two hosts total.
    assert_eq!(written.len(), 2);
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["4-foo.com-urls.txt", "2-bar.org-urls.txt"]);
}
