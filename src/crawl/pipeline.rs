//! The fetch/extract/flush pipeline for one crawl target.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::api::types::Post;
use crate::api::PageSource;
use crate::config::{Config, OptionsConfig};
use crate::crawl::cursor::CrawlCursor;
use crate::crawl::session::CrawlSession;
use crate::error::Result;
use crate::extract::{resolve_attachments, ContentExtractor, Normalizer};
use crate::fs::naming;
use crate::fs::sink::LinkSink;
use crate::identity::{Identity, Platform};

/// Extraction result for one page. Constructed fresh per page, flushed to the
/// sink, then discarded; only integer totals outlive it.
#[derive(Debug, Default)]
pub struct PageLinks {
    /// Attachment stream entries (direct links plus hi-res candidates).
    pub attachment_lines: Vec<String>,

    /// Discovered-links stream entries, already normalized.
    pub content_links: Vec<String>,

    /// Entries the hi-res filename heuristic contributed.
    pub hi_res_count: u64,

    /// Links the content extractor found, counted before normalization.
    pub content_link_count: u64,
}

/// Run extraction and normalization over every post in one page.
pub fn process_page(
    posts: &[Post],
    platform: Platform,
    options: &OptionsConfig,
    extractor: &ContentExtractor,
    normalizer: &Normalizer,
) -> PageLinks {
    let mut page = PageLinks::default();

    for post in posts {
        if options.link_discovery {
            let found = extractor.extract(&post.content);
            page.content_link_count += found.len() as u64;
            page.content_links.extend(found);
        }

        let resolved = resolve_attachments(
            platform,
            &post.attachments,
            options.annotated_output,
            options.link_discovery,
        );
        page.hi_res_count += resolved.hi_res_count;
        page.attachment_lines.extend(resolved.lines);
    }

    // The normalizer repairs and filters discovered links only; attachment
    // lines are provider-shaped and may carry an annotation line.
    page.content_links = normalizer.apply(page.content_links);

    page
}

/// Crawl one target: pull pages until the feed is exhausted or the configured
/// end page was processed, flushing each page's links to the sink as it
/// completes. `output_prefix` is the title-derived stream prefix.
pub async fn crawl_target(
    api: &dyn PageSource,
    config: &Config,
    identity: &Identity,
    output_prefix: String,
    sink: &mut dyn LinkSink,
) -> Result<CrawlSession> {
    let prefix = identity.log_prefix();
    tracing::info!("{} Pulling pages ...", prefix);

    let links_stream = naming::links_stream(&output_prefix);
    let attachments_stream = naming::attachments_stream(&output_prefix);

    let extractor = ContentExtractor::new();
    let normalizer = Normalizer::new(
        config.options.split_links,
        config.options.trim_extensions,
        &config.options.extra_extensions,
    );

    let mut session = CrawlSession::new(identity.clone(), output_prefix);
    let mut cursor = CrawlCursor::new(config.start_offset(), config.end_offset());

    loop {
        if session.pages_processed > 0 && config.options.page_delay {
            let delay_ms = rand::thread_rng().gen_range(1000..2500);
            sleep(Duration::from_millis(delay_ms)).await;
        }

        let page_prefix = format!(
            "{} [{}/{}]",
            prefix,
            cursor.page_number(),
            cursor.last_page_label()
        );
        tracing::info!("{} Fetching page {} ...", page_prefix, cursor.page_number());

        let posts = match api.fetch_page(identity, cursor.offset()).await {
            Ok(posts) => posts,
            Err(e) => {
                // Already-flushed pages stay on disk; report what was written.
                tracing::warn!(
                    "{} Failed after {} page(s): {} link(s) and {} attachment(s) already written",
                    prefix,
                    session.pages_processed,
                    session.total_links,
                    session.total_attachments
                );
                return Err(e);
            }
        };

        if posts.is_empty() {
            tracing::info!("{} Reached end of feed", page_prefix);
            break;
        }

        // The end-page check runs before the cursor advances, so the page at
        // exactly the end offset is still processed below.
        let last_page = cursor.at_end_page();
        if last_page {
            tracing::info!("{} Reached end page!", page_prefix);
        }
        cursor.advance();

        let page = process_page(
            &posts,
            identity.platform,
            &config.options,
            &extractor,
            &normalizer,
        );

        if config.options.link_discovery {
            tracing::info!(
                "{} Added an additional {} link(s) from filenames ...",
                page_prefix,
                page.hi_res_count
            );
            tracing::info!(
                "{} Added an additional {} link(s) from post contents ...",
                page_prefix,
                page.content_link_count
            );
        }

        if !page.content_links.is_empty() {
            sink.append(&links_stream, &page.content_links)?;
        }
        if !page.attachment_lines.is_empty() {
            sink.append(&attachments_stream, &page.attachment_lines)?;
        }

        session.add_page(
            page.content_links.len() as u64,
            page.attachment_lines.len() as u64,
        );

        if last_page {
            break;
        }
    }

    Ok(session)
}
