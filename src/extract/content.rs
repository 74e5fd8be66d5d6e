//! Content-link extraction from post bodies.

use std::collections::HashSet;

use regex::Regex;
use scraper::{Html, Selector};

/// Extracts candidate hyperlinks from a post's free-text body.
///
/// Post bodies are sometimes well-formed HTML, sometimes plain text, and
/// sometimes both at once, so two passes run over every body and the union of
/// their results is returned.
pub struct ContentExtractor {
    anchor: Selector,
    bare_link: Regex,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self {
            anchor: Selector::parse("a").unwrap(),
            bare_link: Regex::new(r"https?://\S+").unwrap(),
        }
    }

    /// Extract candidate links from one post body.
    ///
    /// Pass 1 parses the body as HTML and collects every anchor `href`. Pass 2
    /// strips the markup down to rendered text and scans it with a greedy
    /// `http(s)://<non-whitespace>` matcher, recovering links that appear as
    /// bare text. The textual pass can capture trailing punctuation or run-on
    /// concatenations of adjacent URLs; repairing those is the normalizer's
    /// job, not this one's.
    ///
    /// Results are deduplicated within this call only. Emission order is not
    /// part of the contract.
    pub fn extract(&self, content: &str) -> Vec<String> {
        if content.trim().is_empty() {
            return Vec::new();
        }

        let document = Html::parse_fragment(content);

        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for element in document.select(&self.anchor) {
            if let Some(href) = element.value().attr("href") {
                if seen.insert(href.to_string()) {
                    links.push(href.to_string());
                }
            }
        }

        let text = document.root_element().text().collect::<String>();
        for found in self.bare_link.find_iter(text.trim()) {
            let link = found.as_str().to_string();
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_yields_nothing() {
        let extractor = ContentExtractor::new();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   \n\t ").is_empty());
    }

    #[test]
    fn test_anchor_hrefs_collected() {
        let extractor = ContentExtractor::new();
        let links = extractor.extract(r#"<p><a href="https://mega.nz/file/abc">here</a></p>"#);
        assert_eq!(links, vec!["https://mega.nz/file/abc"]);
    }

    #[test]
    fn test_union_of_anchor_and_bare_text() {
        let extractor = ContentExtractor::new();
        let links =
            extractor.extract(r#"<a href="http://x.com/a">t</a> see http://y.com/b"#);
        assert!(links.contains(&"http://x.com/a".to_string()));
        assert!(links.contains(&"http://y.com/b".to_string()));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_plain_text_body() {
        let extractor = ContentExtractor::new();
        let links = extractor.extract("grab it at https://files.example.com/pack.zip today");
        assert_eq!(links, vec!["https://files.example.com/pack.zip"]);
    }

    #[test]
    fn test_anchor_text_not_double_counted() {
        let extractor = ContentExtractor::new();
        // The href also appears as the anchor's rendered text; the call-level
        // dedup collapses the two passes' hits into one entry.
        let links =
            extractor.extract(r#"<a href="http://x.com/a">http://x.com/a</a>"#);
        assert_eq!(links, vec!["http://x.com/a"]);
    }

    #[test]
    fn test_adjacent_urls_run_on() {
        let extractor = ContentExtractor::new();
        // No whitespace between the two URLs: the greedy matcher captures them
        // as one candidate. The normalizer's split pass exists to repair this.
        let links = extractor.extract("http://a.com/1http://b.com/2");
        assert_eq!(links, vec!["http://a.com/1http://b.com/2"]);
    }
}
