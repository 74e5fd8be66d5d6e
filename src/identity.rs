//! Identity and title grammar for party user URLs.
//!
//! The provider-specific patterns live here as fixed matchers returning typed
//! results, so the rest of the crate never embeds URL-shape knowledge inline.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// The two recognized party platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Kemono,
    Coomer,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Kemono => write!(f, "kemono"),
            Platform::Coomer => write!(f, "coomer"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kemono" => Ok(Platform::Kemono),
            "coomer" => Ok(Platform::Coomer),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

/// One crawl target: (platform, service, account). Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub platform: Platform,
    pub service: String,
    pub account: String,
}

impl Identity {
    /// Parse a starting URL of the form
    /// `[scheme://][beta.]<platform>.party/<service>/user/<account>`.
    ///
    /// Service and account are captured as opaque path segments with no
    /// further validation.
    pub fn parse(input: &str) -> Result<Self> {
        let pattern =
            Regex::new(r"(?si)(?:beta\.)?(kemono|coomer)\.party/(.*)/user/(.*)$").unwrap();

        let captures = pattern
            .captures(input)
            .ok_or_else(|| Error::MalformedIdentity(input.to_string()))?;

        let platform = captures[1]
            .parse::<Platform>()
            .map_err(|_| Error::MalformedIdentity(input.to_string()))?;

        Ok(Self {
            platform,
            service: captures[2].to_string(),
            account: captures[3].to_string(),
        })
    }

    /// Base URL of the platform, e.g. `https://kemono.party`.
    pub fn base_url(&self) -> String {
        format!("https://{}.party", self.platform)
    }

    /// URL of the account's feed landing page.
    pub fn landing_url(&self) -> String {
        format!("{}/{}/user/{}", self.base_url(), self.service, self.account)
    }

    /// URL of the paginated listing API for a given post offset.
    pub fn listing_url(&self, offset: u64) -> String {
        format!(
            "{}/api/{}/user/{}?o={}",
            self.base_url(),
            self.service,
            self.account,
            offset
        )
    }

    /// Short log prefix, `[platform, service, account]`.
    pub fn log_prefix(&self) -> String {
        format!("[{}, {}, {}]", self.platform, self.service, self.account)
    }
}

/// Extract the creator display name from a feed landing page.
///
/// Matches the fixed title pattern `Posts of <name> from ...` and returns the
/// name trimmed, lower-cased, with spaces replaced by underscores, ready for
/// use in output stream names.
pub fn parse_feed_title(html: &str) -> Result<String> {
    let selector = Selector::parse("title").unwrap();
    let document = Html::parse_document(html);

    let title = document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .ok_or_else(|| Error::TitleNotFound("page has no <title>".to_string()))?;

    let pattern = Regex::new(r"(?si)^\s*Posts of (.*) from .*$").unwrap();
    let captures = pattern
        .captures(&title)
        .ok_or_else(|| Error::TitleNotFound(title.trim().to_string()))?;

    Ok(captures[1].trim().to_lowercase().replace(' ', "_"))
}
