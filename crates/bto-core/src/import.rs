//! Import: plain text files and HAR 1.2 captures.
//!
//! Text import replaces the session buffer wholesale with the file contents.
//! HAR import collects every entry's request URL in capture order, which is
//! what a tab opener wants from a browser capture.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Reads a plain-text import file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read import file: {}", path.display()))
}

/// Minimal HAR 1.2 structures: only the request URLs matter here.
#[derive(Debug, Deserialize)]
struct HarLog {
    log: HarRoot,
}

#[derive(Debug, Deserialize)]
struct HarRoot {
    entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
struct HarEntry {
    request: HarRequest,
}

#[derive(Debug, Deserialize)]
struct HarRequest {
    url: String,
}

/// Every request URL from a HAR capture, in entry order.
pub fn har_urls(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog =
        serde_json::from_slice(&bytes).with_context(|| format!("parse HAR JSON: {}", path.display()))?;

    if har.log.entries.is_empty() {
        anyhow::bail!("HAR file has no entries");
    }

    Ok(har
        .log
        .entries
        .into_iter()
        .map(|e| e.request.url)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn har_urls_in_entry_order() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    { "request": { "url": "https://example.com/a" }, "response": { "status": 200 } },
                    { "request": { "url": "https://cdn.example.com/b.js" }, "response": { "status": 200 } },
                    { "request": { "url": "https://example.com/a" }, "response": { "status": 304 } }
                ]
            }
        }"#;
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(har.as_bytes()).unwrap();
        f.flush().unwrap();

        // Duplicates stay; extraction dedupes later if asked.
        assert_eq!(
            har_urls(f.path()).unwrap(),
            vec![
                "https://example.com/a",
                "https://cdn.example.com/b.js",
                "https://example.com/a",
            ]
        );
    }

    #[test]
    fn har_empty_entries_err() {
        let har = r#"{"log":{"version":"1.2","entries":[]}}"#;
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(har.as_bytes()).unwrap();
        f.flush().unwrap();
        assert!(har_urls(f.path()).is_err());
    }

    #[test]
    fn har_bad_json_err() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"not json").unwrap();
        f.flush().unwrap();
        assert!(har_urls(f.path()).is_err());
    }

    #[test]
    fn read_text_passes_contents_through() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"foo.com\nbar.com\n").unwrap();
        f.flush().unwrap();
        assert_eq!(read_text(f.path()).unwrap(), "foo.com\nbar.com\n");
    }

    #[test]
    fn read_text_missing_file_err() {
        assert!(read_text(Path::new("/nonexistent/urls.txt")).is_err());
    }
}
