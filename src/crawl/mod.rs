//! Crawl orchestration.
//!
//! This module provides:
//! - Offset cursor arithmetic for the paginated listing API
//! - Per-target and global crawl accumulators
//! - The page fetch/extract/flush pipeline

pub mod cursor;
pub mod pipeline;
pub mod session;

pub use cursor::CrawlCursor;
pub use pipeline::{crawl_target, process_page, PageLinks};
pub use session::{CrawlSession, GlobalStats};
