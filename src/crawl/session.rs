//! Crawl accumulators.

use crate::identity::Identity;

/// Per-target crawl accumulator.
///
/// Carries the running totals the pipeline stages mutate, passed explicitly
/// rather than living in ambient state. Link bodies are never accumulated
/// here; pages stream through and only the integer totals persist.
#[derive(Debug)]
pub struct CrawlSession {
    pub identity: Identity,

    /// Title-derived output stream prefix, `<name>_<account>_<service>`.
    pub output_prefix: String,

    // Running totals across this target's pages
    pub total_links: u64,
    pub total_attachments: u64,
    pub pages_processed: u64,
}

impl CrawlSession {
    pub fn new(identity: Identity, output_prefix: String) -> Self {
        Self {
            identity,
            output_prefix,
            total_links: 0,
            total_attachments: 0,
            pages_processed: 0,
        }
    }

    /// Record one flushed page's written line counts.
    pub fn add_page(&mut self, links_written: u64, attachments_written: u64) {
        self.total_links += links_written;
        self.total_attachments += attachments_written;
        self.pages_processed += 1;
    }
}

/// Global statistics across all crawl targets.
#[derive(Debug, Default)]
pub struct GlobalStats {
    pub total_links: u64,
    pub total_attachments: u64,
    pub targets_processed: u64,
    pub targets_failed: u64,
}

impl GlobalStats {
    /// Fold one finished target's totals into the global counters.
    pub fn add_session(&mut self, session: &CrawlSession) {
        self.total_links += session.total_links;
        self.total_attachments += session.total_attachments;
        self.targets_processed += 1;
    }

    /// Mark a target as failed.
    pub fn mark_target_failed(&mut self) {
        self.targets_failed += 1;
    }
}
