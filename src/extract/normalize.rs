//! Link normalization: entry splitting and extension canonicalization.

use std::collections::HashSet;

use regex::Regex;

/// Longest suffix still treated as a file extension.
const MAX_EXTENSION_LEN: usize = 10;

/// Domain extras on top of the MIME-registered extensions.
const DOMAIN_EXTRAS: &[&str] = &["gifv", "jfif", "heic", "heif"];

/// Post-processing stage for the discovered-link set.
///
/// Two order-sensitive passes, each independently toggleable:
/// 1. Single-link-per-entry: entries holding more than one `http(s)://`
///    marker are split into one candidate per marker. This repairs the
///    run-on concatenations the content extractor's textual pass produces.
/// 2. Extension canonicalization: trailing extensions are truncated to their
///    allow-listed form (dropping size suffixes); candidates whose extension
///    matches nothing in the allow-list are removed entirely. This is the
///    only stage that can shrink the result set.
pub struct Normalizer {
    split_entries: bool,
    trim_extensions: bool,
    extra_extensions: HashSet<String>,
    marker: Regex,
}

impl Normalizer {
    /// Build a normalizer. `extra_extensions` entries are accepted with or
    /// without a leading dot.
    pub fn new(split_entries: bool, trim_extensions: bool, extra_extensions: &[String]) -> Self {
        Self {
            split_entries,
            trim_extensions,
            extra_extensions: extra_extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            marker: Regex::new(r"https?://").unwrap(),
        }
    }

    /// Run the enabled passes over a set of candidates.
    pub fn apply(&self, candidates: Vec<String>) -> Vec<String> {
        let mut entries = if self.split_entries {
            candidates
                .iter()
                .flat_map(|entry| self.split_entry(entry))
                .collect()
        } else {
            candidates
        };

        if self.trim_extensions {
            entries = entries
                .iter()
                .filter_map(|entry| self.canonicalize(entry))
                .collect();
        }

        entries
    }

    /// Split a candidate holding multiple scheme markers into independent
    /// links, one per marker. A candidate with one marker (or none) passes
    /// through unchanged; with more than one, text before the first marker is
    /// discarded.
    fn split_entry(&self, entry: &str) -> Vec<String> {
        let positions: Vec<usize> = self.marker.find_iter(entry).map(|m| m.start()).collect();

        if positions.len() <= 1 {
            return vec![entry.to_string()];
        }

        positions
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = positions.get(i + 1).copied().unwrap_or(entry.len());
                entry[start..end].to_string()
            })
            .collect()
    }

    /// Canonicalize a candidate's trailing extension, or drop the candidate.
    ///
    /// Links whose final path segment has no extension-like suffix pass
    /// through unchanged (opaque file IDs, hosts without extensions).
    fn canonicalize(&self, link: &str) -> Option<String> {
        let segment = link.rsplit('/').next().unwrap_or(link);

        let ext = match segment.rsplit_once('.') {
            Some((_, ext)) => ext,
            None => return Some(link.to_string()),
        };

        if ext.is_empty()
            || ext.len() > MAX_EXTENSION_LEN
            || !ext.chars().all(|c| c.is_ascii_alphanumeric())
        {
            // Not extension-like; leave the link alone.
            return Some(link.to_string());
        }

        let canonical = self.longest_allowed_prefix(ext)?;
        Some(format!("{}{}", &link[..link.len() - ext.len()], canonical))
    }

    /// Find the longest allow-listed prefix of an in-link extension.
    ///
    /// The prefix semantics are deliberately loose: a configured `jpg` also
    /// matches an in-link `jpga`. Inherited from the original tool and kept
    /// for compatible output.
    fn longest_allowed_prefix(&self, ext: &str) -> Option<String> {
        let ext = ext.to_lowercase();

        for len in (1..=ext.len()).rev() {
            let prefix = &ext[..len];
            if self.extra_extensions.contains(prefix)
                || DOMAIN_EXTRAS.contains(&prefix)
                || mime_guess::from_ext(prefix).first().is_some()
            {
                return Some(prefix.to_string());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(split: bool, trim: bool) -> Normalizer {
        Normalizer::new(split, trim, &[])
    }

    fn links(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_run_on_entry() {
        let n = normalizer(true, false);
        assert_eq!(
            n.apply(links(&["http://a.com/1http://b.com/2"])),
            links(&["http://a.com/1", "http://b.com/2"])
        );
    }

    #[test]
    fn test_split_disabled_passes_through() {
        let n = normalizer(false, false);
        assert_eq!(
            n.apply(links(&["http://a.com/1http://b.com/2"])),
            links(&["http://a.com/1http://b.com/2"])
        );
    }

    #[test]
    fn test_split_single_marker_keeps_leading_text() {
        let n = normalizer(true, false);
        assert_eq!(
            n.apply(links(&["see http://a.com/1"])),
            links(&["see http://a.com/1"])
        );
    }

    #[test]
    fn test_split_discards_text_before_first_marker() {
        let n = normalizer(true, false);
        assert_eq!(
            n.apply(links(&["junk http://a.com/1 https://b.com/2"])),
            links(&["http://a.com/1 ", "https://b.com/2"])
        );
    }

    #[test]
    fn test_extension_size_suffix_truncated() {
        let n = normalizer(false, true);
        assert_eq!(
            n.apply(links(&["http://x.com/f.jpeg123"])),
            links(&["http://x.com/f.jpeg"])
        );
    }

    #[test]
    fn test_unknown_extension_dropped() {
        let n = normalizer(false, true);
        assert!(n.apply(links(&["http://x.com/f.qqq"])).is_empty());
    }

    #[test]
    fn test_no_extension_passes_through() {
        let n = normalizer(false, true);
        assert_eq!(
            n.apply(links(&["http://x.com/f"])),
            links(&["http://x.com/f"])
        );
    }

    #[test]
    fn test_user_extension_prefix_relaxation() {
        // A user-supplied "qx" also matches the in-link "qxz" suffix.
        let n = Normalizer::new(false, true, &["qx".to_string()]);
        assert_eq!(
            n.apply(links(&["http://x.com/f.qxz"])),
            links(&["http://x.com/f.qx"])
        );
    }

    #[test]
    fn test_user_extension_with_leading_dot() {
        let n = Normalizer::new(false, true, &[".qqq".to_string()]);
        assert_eq!(
            n.apply(links(&["http://x.com/f.qqq"])),
            links(&["http://x.com/f.qqq"])
        );
    }

    #[test]
    fn test_canonicalization_idempotent() {
        let n = normalizer(true, true);
        let once = n.apply(links(&[
            "http://x.com/f.jpeg123",
            "http://x.com/g.PNG",
            "http://x.com/plain",
        ]));
        let twice = n.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_extension_case_insensitive() {
        let n = normalizer(false, true);
        assert_eq!(
            n.apply(links(&["http://x.com/g.PNG"])),
            links(&["http://x.com/g.png"])
        );
    }

    #[test]
    fn test_passes_compose_split_then_trim() {
        let n = normalizer(true, true);
        assert_eq!(
            n.apply(links(&["http://a.com/1.jpg99http://b.com/2.qqq"])),
            links(&["http://a.com/1.jpg"])
        );
    }
}
