//! Configuration structures and loading logic.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::PAGE_SIZE;
use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Crawl target configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Party user URLs to pull, processed independently in order.
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Crawl options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Write attachment entries in the aria2 input-file format
    /// (`<url>` followed by ` out=<name>` on the next line).
    #[serde(default)]
    pub annotated_output: bool,

    /// Derive extra links from attachment filenames and post bodies.
    #[serde(default)]
    pub link_discovery: bool,

    /// Split discovered entries holding multiple URLs into one per entry.
    #[serde(default)]
    pub split_links: bool,

    /// Canonicalize trailing extensions on discovered links, dropping
    /// candidates whose extension matches nothing in the allow-list.
    #[serde(default)]
    pub trim_extensions: bool,

    /// Extra extensions for the canonicalization allow-list.
    #[serde(default)]
    pub extra_extensions: Vec<String>,

    /// First page to pull (page units; 25 posts per page).
    #[serde(default)]
    pub start_page: u64,

    /// Last page to pull, inclusive (page units).
    #[serde(default)]
    pub end_page: Option<u64>,

    /// Randomized politeness delay between page fetches.
    #[serde(default = "default_true")]
    pub page_delay: bool,

    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            annotated_output: false,
            link_discovery: false,
            split_links: false,
            trim_extensions: false,
            extra_extensions: Vec::new(),
            start_page: 0,
            end_page: None,
            page_delay: true,
            user_agent: default_user_agent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Starting post offset derived from the configured start page.
    pub fn start_offset(&self) -> u64 {
        self.options.start_page * PAGE_SIZE
    }

    /// Final post offset derived from the configured end page, if bounded.
    pub fn end_offset(&self) -> Option<u64> {
        self.options.end_page.map(|page| page * PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [targets]
            urls = ["https://kemono.party/patreon/user/1"]

            [options]
            annotated_output = true
            link_discovery = true
            start_page = 2
            end_page = 5
            extra_extensions = ["psd", "clip"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.targets.urls.len(), 1);
        assert!(config.options.annotated_output);
        assert_eq!(config.start_offset(), 50);
        assert_eq!(config.end_offset(), Some(125));
        assert_eq!(config.options.extra_extensions, ["psd", "clip"]);
    }

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.options.link_discovery);
        assert!(config.options.page_delay);
        assert_eq!(config.start_offset(), 0);
        assert_eq!(config.end_offset(), None);
    }
}
