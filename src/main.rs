//! party-links - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use party_links::{
    api::PartyApi,
    cli::Args,
    config::{validate_config, Config},
    crawl::{crawl_target, CrawlSession, GlobalStats},
    error::{exit_codes, Result},
    fs::{naming::output_prefix, FileSink},
    identity::{parse_feed_title, Identity},
    output::{
        create_spinner, print_banner, print_config_summary, print_error, print_global_stats,
        print_info, print_session_stats, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(stats) if stats.targets_failed > 0 => {
            print_error(&format!("{} target(s) failed", stats.targets_failed));
            ExitCode::from(exit_codes::SOME_TARGETS_FAILED as u8)
        }
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<GlobalStats> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration before touching the network
    validate_config(&config)?;

    print_config_summary(
        &config.targets.urls,
        config.options.link_discovery,
        config.options.annotated_output,
    );

    let api = PartyApi::new(&config.options.user_agent)?;
    let mut global = GlobalStats::default();

    // Process each target URL independently; one failing never aborts the rest.
    let urls = config.targets.urls.clone();
    for url in &urls {
        match process_target(&api, &config, url).await {
            Ok(session) => {
                print_session_stats(&session);
                global.add_session(&session);
            }
            Err(e) => {
                print_error(&format!("Failed to process {}: {}", url, e));
                global.mark_target_failed();
            }
        }
    }

    print_global_stats(&global);

    Ok(global)
}

/// Process a single target URL.
async fn process_target(api: &PartyApi, config: &Config, url: &str) -> Result<CrawlSession> {
    let identity = Identity::parse(url)?;
    print_info(&format!("Processing {}", identity.log_prefix()));

    // Resolve the creator's display name from the feed landing page; it
    // becomes part of the output stream names.
    let spinner = create_spinner(&format!("{} Resolving feed title ...", identity.log_prefix()));
    let landing = api.fetch_landing_page(&identity).await;
    spinner.finish_and_clear();

    let name = parse_feed_title(&landing?)?;
    let output_prefix = output_prefix(&name, &identity)?;

    // Output files land in the working directory, next to where the tool runs.
    let mut sink = FileSink::new(std::env::current_dir()?);

    let session = crawl_target(api, config, &identity, output_prefix, &mut sink).await?;
    if session.total_links == 0 && session.total_attachments == 0 {
        print_warning(&format!(
            "{} No links or attachments found",
            identity.log_prefix()
        ));
    }

    Ok(session)
}
