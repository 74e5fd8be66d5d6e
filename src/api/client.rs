//! Party HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::types::Post;
use crate::error::{Error, Result};
use crate::identity::Identity;

/// Number of posts per listing page. The listing API pages in fixed steps of
/// 25 posts; offsets are in post units, not page units.
pub const PAGE_SIZE: u64 = 25;

/// Request timeout for listing and landing page fetches.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Source of listing pages.
///
/// The crawl pipeline depends on this seam rather than the HTTP client
/// directly, so the page loop can run against canned feeds.
#[async_trait]
pub trait PageSource {
    /// Fetch one page of posts at the given post offset. An empty page means
    /// the feed is exhausted.
    async fn fetch_page(&self, identity: &Identity, offset: u64) -> Result<Vec<Post>>;
}

/// HTTP client for the party listing API and landing pages.
///
/// One client is built per process and reused across all crawl targets. No
/// retry logic lives here; any transport or decode failure is fatal for the
/// target being crawled.
pub struct PartyApi {
    client: Client,
}

impl PartyApi {
    /// Create a new API client.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch one page of posts at the given post offset.
    ///
    /// An empty array from the API means the feed is exhausted and is not an
    /// error.
    pub async fn fetch_page(&self, identity: &Identity, offset: u64) -> Result<Vec<Post>> {
        let url = identity.listing_url(offset);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Fetch(format!("HTTP {} from {}", status, url)));
        }

        let text = response.text().await?;
        let posts: Vec<Post> = serde_json::from_str(&text).map_err(|e| {
            Error::Fetch(format!(
                "Failed to parse listing page at offset {}: {} - Response: {}",
                offset,
                e,
                truncate_for_log(&text, 500)
            ))
        })?;

        Ok(posts)
    }

    /// Fetch the account's feed landing page as raw HTML.
    pub async fn fetch_landing_page(&self, identity: &Identity) -> Result<String> {
        let url = identity.landing_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Fetch(format!("HTTP {} from {}", status, url)));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageSource for PartyApi {
    async fn fetch_page(&self, identity: &Identity, offset: u64) -> Result<Vec<Post>> {
        PartyApi::fetch_page(self, identity, offset).await
    }
}

/// Truncate a response body for inclusion in an error message without
/// splitting a multi-byte character.
fn truncate_for_log(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_text_unchanged() {
        assert_eq!(truncate_for_log("hello", 500), "hello");
    }

    #[test]
    fn test_truncate_for_log_cuts_at_limit() {
        let text = "a".repeat(600);
        assert_eq!(truncate_for_log(&text, 500).len(), 500);
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // "é" is two bytes in UTF-8; a limit of 5 lands mid-character.
        let text = "aaaaéé";
        let cut = truncate_for_log(text, 5);
        assert_eq!(cut, "aaaa");
    }
}
