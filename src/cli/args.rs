//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Party link puller CLI.
#[derive(Parser, Debug)]
#[command(
    name = "party-links",
    version,
    about = "Pull post links and attachments from kemono/coomer party creators",
    long_about = "Pull all of the links and attachments from posts of a kemono/coomer \
                  party user.\n\n\
                  Links pulled from post bodies, especially with link discovery on, may \
                  need post-processing on your part: errant text sometimes makes its way \
                  into links depending on how a creator formats their posts. The \
                  --split-links and --trim-extensions passes repair the common cases."
)]
pub struct Args {
    /// Party user URL(s) to pull, e.g. https://kemono.party/patreon/user/12345.
    /// Each URL is processed independently.
    #[arg(value_name = "URL", num_args = 0..)]
    pub urls: Vec<String>,

    /// Write attachment links in the aria2 input-file format
    /// (URL followed by an " out=<filename>" line).
    #[arg(short = 'a', long = "aria2-format")]
    pub annotated: bool,

    /// Add links derived from attachment filenames and post contents.
    #[arg(short = 'l', long)]
    pub link_discovery: bool,

    /// Split discovered entries containing multiple URLs into one per line.
    #[arg(long)]
    pub split_links: bool,

    /// Canonicalize trailing extensions on discovered links; candidates with
    /// an unrecognized extension are dropped.
    #[arg(long)]
    pub trim_extensions: bool,

    /// Extra extension(s) for the canonicalization allow-list.
    #[arg(short = 'x', long = "extension", value_name = "EXT")]
    pub extra_extensions: Vec<String>,

    /// Start page (25 posts per page).
    #[arg(short, long)]
    pub start_page: Option<u64>,

    /// End page, inclusive.
    #[arg(short, long)]
    pub end_page: Option<u64>,

    /// Disable the politeness delay between page fetches.
    #[arg(long)]
    pub no_delay: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if !self.urls.is_empty() {
            config.targets.urls = self.urls;
        }

        if self.annotated {
            config.options.annotated_output = true;
        }

        if self.link_discovery {
            config.options.link_discovery = true;
        }

        if self.split_links {
            config.options.split_links = true;
        }

        if self.trim_extensions {
            config.options.trim_extensions = true;
        }

        if !self.extra_extensions.is_empty() {
            config
                .options
                .extra_extensions
                .extend(self.extra_extensions);
        }

        if let Some(start) = self.start_page {
            config.options.start_page = start;
        }

        if let Some(end) = self.end_page {
            config.options.end_page = Some(end);
        }

        if self.no_delay {
            config.options.page_delay = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_urls_and_flags() {
        let args = Args::parse_from([
            "party-links",
            "https://kemono.party/patreon/user/1",
            "-l",
            "-s",
            "2",
            "-e",
            "4",
        ]);
        let mut config = Config::default();
        config.targets.urls = vec!["old".to_string()];

        args.merge_into_config(&mut config);
        assert_eq!(config.targets.urls, ["https://kemono.party/patreon/user/1"]);
        assert!(config.options.link_discovery);
        assert_eq!(config.options.start_page, 2);
        assert_eq!(config.options.end_page, Some(4));
    }

    #[test]
    fn test_merge_keeps_config_values_when_unset() {
        let args = Args::parse_from(["party-links"]);
        let mut config = Config::default();
        config.targets.urls = vec!["https://coomer.party/onlyfans/user/x".to_string()];
        config.options.annotated_output = true;

        args.merge_into_config(&mut config);
        assert_eq!(config.targets.urls.len(), 1);
        assert!(config.options.annotated_output);
    }

    #[test]
    fn test_extra_extensions_accumulate() {
        let args = Args::parse_from(["party-links", "-x", "psd", "-x", "clip"]);
        let mut config = Config::default();
        config.options.extra_extensions = vec!["sai".to_string()];

        args.merge_into_config(&mut config);
        assert_eq!(config.options.extra_extensions, ["sai", "psd", "clip"]);
    }
}
