//! Statistics reporting.

use console::style;

use crate::crawl::{CrawlSession, GlobalStats};

/// Print statistics for a single crawl target.
pub fn print_session_stats(session: &CrawlSession) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", session.identity.log_prefix())).bold()
    );
    println!("  Pages:       {}", session.pages_processed);
    println!("  Links:       {}", session.total_links);
    println!("  Attachments: {}", session.total_attachments);
}

/// Print global statistics across all crawl targets.
pub fn print_global_stats(stats: &GlobalStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Targets processed: {}", stats.targets_processed);
    if stats.targets_failed > 0 {
        println!(
            "  Targets failed:    {}",
            style(stats.targets_failed).red()
        );
    }
    println!("  Links:       {}", stats.total_links);
    println!("  Attachments: {}", stats.total_attachments);
    println!("{}", style("═".repeat(50)).dim());
}
