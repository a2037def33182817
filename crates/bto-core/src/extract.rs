//! URL extraction from free-form text.
//!
//! Scans pasted text for URL candidates (explicit http/https, `www.` hosts,
//! bare `label.tld` tokens), prepends `https://` where the scheme is missing,
//! and keeps only candidates that survive strict parsing. Pure and
//! deterministic; all I/O lives in the callers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// Candidate pattern. Alternation order is load-bearing: an explicit scheme
/// wins over a `www.` prefix, which wins over a bare domain, so overlapping
/// candidates never double-match the same span.
static URL_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(https?://\S+|www\.\S+|[A-Za-z0-9-]+\.[A-Za-z]{2,}\S*)")
        .expect("URL candidate pattern must compile")
});

/// Extracts validated absolute URLs from `text`, in first-occurrence order.
///
/// Candidates without an `http(s)://` scheme get `https://` prepended before
/// validation. Candidates that still fail to parse are dropped silently; this
/// is a best-effort filter, not an error path. With `dedupe`, exact-string
/// duplicates collapse to their first occurrence.
///
/// Trailing punctuation glued to a candidate (e.g. `foo.com/a,`) is kept
/// verbatim. Long-standing behavior; the tests pin it.
pub fn extract(text: &str, dedupe: bool) -> Vec<String> {
    let mut urls = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for m in URL_CANDIDATE.find_iter(text) {
        let candidate = if has_http_scheme(m.as_str()) {
            m.as_str().to_string()
        } else {
            format!("https://{}", m.as_str())
        };
        if Url::parse(&candidate).is_err() {
            continue;
        }
        if dedupe && !seen.insert(candidate.clone()) {
            continue;
        }
        urls.push(candidate);
    }

    urls
}

/// Truncates to the first `limit` entries when `limit > 0`; `0` means
/// unlimited. Only ever applied to lists being opened, never to the lists
/// behind counting or export.
pub fn apply_limit(mut urls: Vec<String>, limit: usize) -> Vec<String> {
    if limit > 0 {
        urls.truncate(limit);
    }
    urls
}

/// Raw and deduplicated URL counts for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractCounts {
    pub raw: usize,
    pub unique: usize,
}

/// Counts URLs in `text` with and without deduplication.
pub fn counts(text: &str) -> ExtractCounts {
    ExtractCounts {
        raw: extract(text, false).len(),
        unique: extract(text, true).len(),
    }
}

impl fmt::Display for ExtractCounts {
    /// Renders `"12"` when all URLs are unique, else `"12 (9 unique)"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw == self.unique {
            write!(f, "{}", self.raw)
        } else {
            write!(f, "{} ({} unique)", self.raw, self.unique)
        }
    }
}

/// Case-insensitive check for an explicit `http://` or `https://` prefix.
fn has_http_scheme(s: &str) -> bool {
    let b = s.as_bytes();
    let starts = |p: &[u8]| b.len() >= p.len() && b[..p.len()].eq_ignore_ascii_case(p);
    starts(b"http://") || starts(b"https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_prepends_scheme_to_bare_domains() {
        assert_eq!(
            extract("foo.com bar.com foo.com", false),
            vec!["https://foo.com", "https://bar.com", "https://foo.com"]
        );
    }

    #[test]
    fn extract_dedupe_keeps_first_occurrence() {
        assert_eq!(
            extract("foo.com bar.com foo.com", true),
            vec!["https://foo.com", "https://bar.com"]
        );
    }

    #[test]
    fn extract_keeps_explicit_schemes_verbatim() {
        assert_eq!(
            extract("see http://example.com/a and https://example.com/b", false),
            vec!["http://example.com/a", "https://example.com/b"]
        );
    }

    #[test]
    fn extract_www_prefix_gets_https() {
        assert_eq!(
            extract("www.example.com/path", false),
            vec!["https://www.example.com/path"]
        );
    }

    #[test]
    fn extract_bare_scheme_and_www_dedupe_as_distinct_strings() {
        // Dedup is exact string equality after normalization, so the bare
        // domain and its www form stay separate entries.
        assert_eq!(
            extract("foo.com www.foo.com foo.com", true),
            vec!["https://foo.com", "https://www.foo.com"]
        );
    }

    #[test]
    fn extract_skips_plain_words() {
        assert!(extract("nothing to see here", false).is_empty());
        assert!(extract("", false).is_empty());
    }

    #[test]
    fn extract_keeps_trailing_punctuation() {
        // Punctuation glued to the candidate is part of the match.
        assert_eq!(
            extract("visit foo.com/a, then stop", false),
            vec!["https://foo.com/a,"]
        );
    }

    #[test]
    fn extract_single_label_tokens_need_a_tld() {
        // "localhost" has no dot, so it is not a candidate.
        assert!(extract("localhost", false).is_empty());
        // Single-letter TLDs fail the 2+ letter rule.
        assert!(extract("foo.x", false).is_empty());
    }

    #[test]
    fn dedupe_is_order_preserving_subsequence_of_raw() {
        let text = "a.com b.com a.com c.com b.com https://a.com";
        let raw = extract(text, false);
        let unique = extract(text, true);

        // No duplicates in the deduplicated list.
        let mut seen = std::collections::HashSet::new();
        assert!(unique.iter().all(|u| seen.insert(u.clone())));

        // unique is a subsequence of raw, preserving relative order.
        let mut raw_iter = raw.iter();
        for u in &unique {
            assert!(raw_iter.any(|r| r == u), "{u} out of order");
        }
    }

    #[test]
    fn extract_is_idempotent_over_its_own_output() {
        let text = "foo.com some text www.bar.org/x?q=1 junk http://baz.io/p, end";
        let first = extract(text, false);
        let second = extract(&first.join("\n"), false);
        assert_eq!(first, second);
    }

    #[test]
    fn counts_display_collapses_when_all_unique() {
        assert_eq!(counts("foo.com bar.com").to_string(), "2");
        assert_eq!(counts("foo.com foo.com bar.com").to_string(), "3 (2 unique)");
        assert_eq!(counts("").to_string(), "0");
    }

    #[test]
    fn apply_limit_zero_is_identity() {
        let urls = vec!["https://a.com".to_string(), "https://b.com".to_string()];
        assert_eq!(apply_limit(urls.clone(), 0), urls);
    }

    #[test]
    fn apply_limit_takes_prefix() {
        let urls: Vec<String> = (0..5).map(|i| format!("https://h{i}.com")).collect();
        assert_eq!(apply_limit(urls.clone(), 2), &urls[..2]);
        // A limit past the end leaves the list unchanged.
        assert_eq!(apply_limit(urls.clone(), 50), urls);
    }
}
