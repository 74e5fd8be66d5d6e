//! party-links - link/attachment puller for kemono/coomer party creators
//!
//! This library crawls the paginated post feed of a party creator account and
//! extracts URLs from each post: direct attachment download links, and
//! hyperlinks embedded in free-text/HTML post bodies, optionally augmented by
//! "hi-res" links recovered from attachment filenames. Results stream to
//! per-account output files as pages are processed.
//!
//! # Features
//!
//! - Kemono and coomer party URL grammar
//! - Incremental pagination with start/end page bounds
//! - Content-link extraction from mixed HTML/plain-text bodies
//! - Filename-derived hi-res link heuristic (imgur fbplay rewrite)
//! - Link normalization: entry splitting, extension canonicalization
//! - aria2-format attachment output
//!
//! # Example
//!
//! ```no_run
//! use party_links::{crawl_target, Config, FileSink, Identity, PartyApi};
//! use party_links::identity::parse_feed_title;
//! use party_links::fs::naming::output_prefix;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = PartyApi::new(&config.options.user_agent)?;
//!     let identity = Identity::parse("https://kemono.party/patreon/user/12345")?;
//!     let mut sink = FileSink::new(std::env::current_dir()?);
//!
//!     let landing = api.fetch_landing_page(&identity).await?;
//!     let name = parse_feed_title(&landing)?;
//!     let prefix = output_prefix(&name, &identity)?;
//!
//!     let session = crawl_target(&api, &config, &identity, prefix, &mut sink).await?;
//!     println!("{} links", session.total_links);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fs;
pub mod identity;
pub mod output;

// Re-exports for convenience
pub use api::{PageSource, PartyApi, PAGE_SIZE};
pub use config::Config;
pub use crawl::{crawl_target, CrawlSession, GlobalStats};
pub use error::{Error, Result};
pub use fs::{FileSink, LinkSink, MemorySink};
pub use identity::{Identity, Platform};
