//! Per-hostname export of the extracted URL list.
//!
//! Each distinct hostname (leading `www.` stripped) gets its own buffer:
//! every URL for that host repeated `repeat_count` times contiguously, named
//! `{total}-{host}-urls.txt`. Export always works from the full extracted
//! list; the open limit never applies here.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// A named buffer produced by export; callers decide where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: String,
    pub contents: String,
}

/// Builds one export buffer per hostname, hosts in first-encounter order.
pub fn export_by_host(urls: &[String], repeat_count: u32) -> Vec<ExportFile> {
    let repeat = repeat_count.max(1) as usize;

    // Group with the leading `www.` already stripped so `www.foo.com` and
    // `foo.com` land in the same file.
    let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for url in urls {
        let host = export_host(url);
        match index.get(&host) {
            Some(&i) => groups[i].1.push(url),
            None => {
                index.insert(host.clone(), groups.len());
                groups.push((host, vec![url]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(host, group)| {
            let mut lines = Vec::with_capacity(group.len() * repeat);
            for url in group {
                for _ in 0..repeat {
                    lines.push(url);
                }
            }
            ExportFile {
                name: format!("{}-{}-urls.txt", lines.len(), sanitize_component(&host)),
                contents: lines.join("\n"),
            }
        })
        .collect()
}

/// Writes each buffer into `out_dir`, returning the paths written.
pub fn write_exports(files: &[ExportFile], out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create export dir: {}", out_dir.display()))?;
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.name);
        fs::write(&path, &file.contents)
            .with_context(|| format!("write export file: {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Hostname used for export grouping and file naming: parsed host with a
/// leading `www.` stripped.
fn export_host(url: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_default();
    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}

/// Keeps a host usable as a filename component on Linux: path separators,
/// NUL, control characters, and spaces become `_`; leading/trailing dots and
/// underscores are trimmed.
fn sanitize_component(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '\0' || c == '/' || c == '\\' || c == ' ' || c.is_control() {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out.trim_matches(|c| c == '.' || c == '_').to_string()
}
