//! Offset cursor for the paginated listing API.

use crate::api::PAGE_SIZE;

/// Post-offset cursor with optional start/end bounds.
///
/// Offsets count posts, not pages; the listing API steps in fixed increments
/// of [`PAGE_SIZE`]. The end bound is inclusive of the page that starts at
/// exactly `end_offset`: termination is checked before the cursor advances,
/// so that page is still processed.
#[derive(Debug, Clone)]
pub struct CrawlCursor {
    offset: u64,
    end_offset: Option<u64>,
}

impl CrawlCursor {
    pub fn new(start_offset: u64, end_offset: Option<u64>) -> Self {
        Self {
            offset: start_offset,
            end_offset,
        }
    }

    /// Current post offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// 1-based page number of the current offset, for progress display.
    pub fn page_number(&self) -> u64 {
        self.offset / PAGE_SIZE + 1
    }

    /// 1-based number of the last bounded page, or `"?"` when unbounded.
    pub fn last_page_label(&self) -> String {
        match self.end_offset {
            Some(end) => format!("{}", end / PAGE_SIZE + 1),
            None => "?".to_string(),
        }
    }

    /// Whether the current page is the last one the bounds allow. The page at
    /// this offset is still processed before the crawl halts.
    pub fn at_end_page(&self) -> bool {
        self.end_offset.is_some_and(|end| self.offset >= end)
    }

    /// Advance past the current page.
    pub fn advance(&mut self) {
        self.offset += PAGE_SIZE;
    }
}
